//! keyseed - BN254 Key Tooling
//!
//! Run modes:
//!   keyseed convert [HEX ...]   - Convert hex literals to decimal
//!   keyseed populate [...]      - Seed the key server from a players file

use keyseed::api::KeyApiClient;
use keyseed::config::Config;
use keyseed::error::KeyseedError;
use keyseed::{convert, logging, populate};
use std::env;
use std::path::Path;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let result = match args[1].as_str() {
        "convert" => run_convert(&args[2..]),
        "populate" => run_populate(&args[2..]).await,
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("keyseed - BN254 key tooling");
    println!();
    println!("Usage:");
    println!("  keyseed convert [HEX ...]                 Convert hex literals to decimal");
    println!("                                            (no arguments: print the demo values)");
    println!("  keyseed populate [--file <path>]          Seed the key server from a players file");
    println!("                   [--url <base-url>]");
    println!("                   [--dry-run]              Print the requests without executing them");
    println!();
    println!("Environment Variables:");
    println!("  KEYSEED_API_URL       Key server base URL (default: http://localhost:8080)");
    println!("  KEYSEED_PLAYERS_FILE  Players file path (default: players.json)");
    println!("  KEYSEED_LOG_LEVEL     Log level (default: info)");
}

/// Convert the given hex literals, or print the demo values with none given.
fn run_convert(args: &[String]) -> Result<(), KeyseedError> {
    if args.is_empty() {
        convert::print_demo_conversions()?;
        return Ok(());
    }

    for (i, literal) in args.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let decimal = convert::hex_to_decimal(literal)?;
        println!("hex: {}", literal);
        println!("decimal: {}", decimal);
    }

    Ok(())
}

/// Seed the key server from a players file.
async fn run_populate(args: &[String]) -> Result<(), KeyseedError> {
    logging::init_from_env()?;

    let config = Config::from_env()?;
    let mut file = config.players_file.clone();
    let mut url = config.api_url.clone();
    let mut dry_run = false;

    // Parse arguments
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--file" if i + 1 < args.len() => {
                file = args[i + 1].clone();
                i += 2;
            }
            "--url" if i + 1 < args.len() => {
                url = args[i + 1].clone();
                i += 2;
            }
            "--dry-run" => {
                dry_run = true;
                i += 1;
            }
            _ => i += 1,
        }
    }

    let client = KeyApiClient::new(&url);
    populate::run(&client, Path::new(&file), client.base_url(), dry_run).await?;

    Ok(())
}
