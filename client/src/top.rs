use colored::*;

use crate::api;
use crate::config::Config;

pub async fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let server_url = config.server_url.as_ref().ok_or("No server URL configured")?;

    println!("\n{}", "Loading top scores...".cyan());

    let scores = api::top_scores(server_url).await?;

    println!();
    println!("{}", "═══════════════════════════════════════════════════════════════════".bright_cyan());
    println!("{}", "                            TOP SCORES                             ".bright_cyan().bold());
    println!("{}", "═══════════════════════════════════════════════════════════════════".bright_cyan());
    println!();
    println!("{:>4} {:30} {:>10}  {}",
        "Rank".dimmed(), "Player".dimmed(), "Score".dimmed(), "When".dimmed());
    println!("{}", "───────────────────────────────────────────────────────────────────".dimmed());

    if scores.is_empty() {
        println!("{}", "No scores yet.".dimmed());
    }

    for (i, entry) in scores.iter().enumerate() {
        let rank_str = format!("#{}", i + 1);
        println!("{:>4} {:30} {:>10}  {}",
            rank_str,
            entry.name,
            entry.score,
            entry.created_at.dimmed());
    }

    println!();
    println!("{}", "═══════════════════════════════════════════════════════════════════".bright_cyan());

    Ok(())
}
