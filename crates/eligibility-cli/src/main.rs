mod checker;
mod render;

use anyhow::Result;
use checker::Checker;
use clap::{Parser, Subcommand};
use eligibility_client::{EligibilityClient, HistoryStore};
use eligibility_core::CheckerConfig;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "eligibility")]
#[command(about = "Check whether a product qualifies for FSA/HSA reimbursement", long_about = None)]
struct Cli {
    /// Eligibility API endpoint
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// User email sent with each check
    #[arg(long, global = true)]
    email: Option<String>,

    /// Ask the backend to bypass its cache
    #[arg(long, global = true)]
    no_cache: bool,

    /// History file (defaults to the user data directory)
    #[arg(long, global = true)]
    history_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a product URL
    Check {
        /// Product page URL
        url: String,

        /// Print the checked product as JSON
        #[arg(long)]
        json: bool,
    },

    /// List recent checks
    Recent,

    /// Forget all recent checks
    Clear,
}

fn get_history_file(cli: &Cli) -> Option<PathBuf> {
    cli.history_file
        .clone()
        .or_else(|| std::env::var("ELIGIBILITY_HISTORY_FILE").ok().map(PathBuf::from))
}

fn build_config(cli: &Cli) -> Result<CheckerConfig> {
    let mut config = CheckerConfig::from_env()?.with_overrides(
        cli.api_url.as_deref(),
        cli.email.as_deref(),
        None,
    )?;
    if cli.no_cache {
        config.hit_cache = false;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = build_config(&cli)?;
    tracing::debug!("Using eligibility API at {}", config.api_url);

    let store = HistoryStore::new(get_history_file(&cli), config.history_limit);
    let mut checker = Checker::new(EligibilityClient::new(config), store);

    match cli.command {
        Some(Commands::Check { url, json }) => cmd_check(&mut checker, &url, json).await?,
        Some(Commands::Recent) => cmd_recent(&checker),
        Some(Commands::Clear) => cmd_clear(&checker)?,
        None => run_interactive(&mut checker).await?,
    }

    Ok(())
}

async fn cmd_check(checker: &mut Checker, url: &str, json: bool) -> Result<()> {
    let result = checker.check_input(url).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render::render_result(&result));
    }
    Ok(())
}

fn cmd_recent(checker: &Checker) {
    print!("{}", render::render_recent(&checker.recent()));
}

fn cmd_clear(checker: &Checker) -> Result<()> {
    checker.clear_recent()?;
    println!("Recent checks cleared.");
    Ok(())
}

async fn run_interactive(checker: &mut Checker) -> Result<()> {
    display_welcome();
    cmd_recent(checker);
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let (cmd, rest) = trimmed
            .split_once(char::is_whitespace)
            .map(|(c, r)| (c, r.trim()))
            .unwrap_or((trimmed, ""));

        if let Ok(n) = cmd.parse::<usize>() {
            match n.checked_sub(1) {
                Some(index) => match checker.recheck(index).await {
                    Ok(result) => print!("{}", render::render_result(&result)),
                    Err(e) => println!("Error: {}", e),
                },
                None => println!("Error: entries are numbered from 1"),
            }
            continue;
        }

        match cmd.to_lowercase().as_str() {
            "help" | "h" | "?" => display_help(),
            "check" | "c" => {
                if let Err(e) = cmd_check(checker, rest, false).await {
                    println!("Error: {}", e);
                }
            }
            "recent" | "r" => cmd_recent(checker),
            "clear" => {
                if let Err(e) = cmd_clear(checker) {
                    println!("Error: {}", e);
                }
            }
            "exit" | "quit" | "q" => break,
            _ if cmd.starts_with("http://") || cmd.starts_with("https://") => {
                if let Err(e) = cmd_check(checker, trimmed, false).await {
                    println!("Error: {}", e);
                }
            }
            _ => {
                println!("Unknown command: {}. Type 'help' for available commands.", cmd);
            }
        }
    }

    Ok(())
}

fn display_welcome() {
    println!();
    println!("  Product Eligibility Checker");
    println!("  Check if a product is eligible for FSA/HSA reimbursement");
    println!();
    println!("  Paste a product URL, or type 'help' for commands.");
    println!();
}

fn display_help() {
    println!();
    println!("Available Commands:");
    println!("  check, c <url>   # Check a product URL");
    println!("  <url>            # Same as check");
    println!("  recent, r        # List recent checks");
    println!("  <n>              # Re-check the n-th recent entry");
    println!("  clear            # Forget all recent checks");
    println!("  help             # Show this help");
    println!("  exit, quit, q    # Leave");
    println!();
}
