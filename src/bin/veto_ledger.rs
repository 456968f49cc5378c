use anyhow::Context;
use clap::Parser;
use small_store::utils::logger;
use small_store::{StoreError, Veto};

#[derive(Parser)]
#[command(name = "veto-ledger")]
#[command(about = "Inspect a veto ledger written by small-store")]
struct Args {
    /// Path to a JSONL veto ledger
    #[arg(short, long, default_value = "./output/veto-ledger.jsonl")]
    ledger: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("Reading veto ledger: {}", args.ledger);
    let content = std::fs::read_to_string(&args.ledger)
        .with_context(|| format!("cannot read ledger '{}'", args.ledger))?;

    let mut active = 0usize;
    let mut lifted = 0usize;
    let mut unreadable = 0usize;

    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        match Veto::from_json(line) {
            Ok(veto) => {
                if veto.is_active() {
                    active += 1;
                } else {
                    lifted += 1;
                }
                println!(
                    "{} line {}: {} (initiator #{}, {})",
                    if veto.is_active() { "🚫" } else { "✅" },
                    index + 1,
                    veto.reason(),
                    veto.initiator(),
                    veto.date().to_rfc3339()
                );
            }
            Err(e @ StoreError::SchemaVersionError { .. }) => {
                unreadable += 1;
                tracing::error!("line {}: {}", index + 1, e);
                eprintln!("❌ line {}: {}", index + 1, e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
            }
            Err(e) => {
                unreadable += 1;
                tracing::error!("line {}: {}", index + 1, e);
                eprintln!("❌ line {}: not a veto document", index + 1);
            }
        }
    }

    println!(
        "📊 {} active, {} lifted, {} unreadable",
        active, lifted, unreadable
    );

    if unreadable > 0 {
        std::process::exit(1);
    }

    Ok(())
}
