use colored::*;
use reds_common::GameResult;
use uuid::Uuid;

use crate::api;
use crate::config::Config;

pub async fn run(config: &Config, result: GameResult, secret_arg: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let server_url = config.server_url.as_ref().ok_or("No server URL configured")?;
    let secret = config.resolve_secret(secret_arg)?;

    // Expected to look like a UUID, but the server takes it as-is
    if Uuid::parse_str(&result.player_uuid).is_err() {
        eprintln!("{}", format!("Warning: '{}' does not look like a UUID", result.player_uuid).yellow());
    }

    println!(
        "{}",
        format!(
            "Submitting score {} for {} ({} ticks/sec)...",
            result.score, result.player_name, result.ticks_per_sec
        )
        .cyan()
    );

    let payload = result.sign(secret.as_bytes());
    let response = api::submit(server_url, &payload).await?;

    let status = response.status();
    let body = response.text().await?;

    println!("{}", format!("Server replied {status}").dimmed());
    if !body.is_empty() {
        println!("{}", body.dimmed());
    }

    Ok(())
}
