pub mod api;
pub mod config;
pub mod submit;
pub mod top;

use colored::*;
use reds_common::GameResult;

use config::Config;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let command = match parse_command(&args) {
        Ok(command) => command,
        Err(msg) => {
            eprintln!("{}", msg.red());
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = run(command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    match command {
        Command::Submit { result, secret } => submit::run(&config, result, secret).await,
        Command::Top => top::run(&config).await,
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Submit {
        result: GameResult,
        secret: Option<String>,
    },
    Top,
}

fn parse_command(args: &[String]) -> Result<Command, String> {
    match args.first().map(String::as_str) {
        Some("submit") => {
            if args.len() < 5 || args.len() > 6 {
                return Err(
                    "submit takes: <player_name> <player_uuid> <score> <ticks_per_sec> [secret]"
                        .to_string(),
                );
            }

            Ok(Command::Submit {
                result: GameResult {
                    player_name: args[1].clone(),
                    player_uuid: args[2].clone(),
                    score: parse_u32("score", &args[3])?,
                    ticks_per_sec: parse_u32("ticks_per_sec", &args[4])?,
                },
                secret: args.get(5).cloned(),
            })
        }
        Some("top") => Ok(Command::Top),
        Some(other) => Err(format!("Unknown command: {other}")),
        None => Err("No command given".to_string()),
    }
}

fn parse_u32(field: &str, raw: &str) -> Result<u32, String> {
    raw.parse::<u32>()
        .map_err(|_| format!("Invalid {field} '{raw}': expected an integer between 0 and 4294967295"))
}

fn print_usage() {
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  client submit <player_name> <player_uuid> <score> <ticks_per_sec> [secret]");
    eprintln!("  client top");
}
