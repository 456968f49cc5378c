use clap::Parser;
use small_store::utils::{logger, validation::Validate};
use small_store::{
    ActionDispatcher, ActionEvent, CliConfig, Conditions, Customer, FeedbackAction, Item, Person,
    PurchaseAction, SessionProfile, StoreError, Veto,
};
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

/// Stand-in for the external customer entity a real deployment supplies.
/// Keeps a balance, receipts, and the feedback it has given.
struct SessionCustomer {
    name: String,
    balance: f64,
    receipts: Vec<String>,
    feedback: Vec<String>,
}

impl SessionCustomer {
    fn new(name: String, balance: f64) -> Self {
        Self {
            name,
            balance,
            receipts: Vec::new(),
            feedback: Vec::new(),
        }
    }
}

impl Customer for SessionCustomer {
    fn make_payment(&mut self, item: &Item, payment_method: &str) -> small_store::Result<()> {
        if item.price > self.balance {
            return Err(StoreError::PaymentError {
                message: format!("insufficient funds for '{}'", item.name),
            });
        }
        self.balance -= item.price;
        self.receipts
            .push(format!("{} ({:.2} via {})", item.name, item.price, payment_method));
        Ok(())
    }

    fn provide_feedback(
        &mut self,
        item: &Item,
        comment: &str,
        liked: bool,
    ) -> small_store::Result<()> {
        let verdict = if liked { "liked" } else { "disliked" };
        self.feedback
            .push(format!("{}: \"{}\" ({})", item.name, comment, verdict));
        Ok(())
    }
}

struct SessionSummary {
    purchases: usize,
    feedback_entries: usize,
    vetoes: usize,
    ledger_path: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting small-store session");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    match run_session(&config) {
        Ok(summary) => {
            tracing::info!("✅ Session completed");
            println!(
                "✅ Session completed: {} purchases, {} feedback entries, {} vetoes",
                summary.purchases, summary.feedback_entries, summary.vetoes
            );
            if let Some(path) = summary.ledger_path {
                println!("📁 Veto ledger saved to: {}", path);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Session failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                small_store::utils::error::ErrorSeverity::Low => 0,
                small_store::utils::error::ErrorSeverity::Medium => 2,
                small_store::utils::error::ErrorSeverity::High => 1,
                small_store::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn run_session(config: &CliConfig) -> small_store::Result<SessionSummary> {
    let profile = match &config.profile {
        Some(path) => SessionProfile::from_file(path)?,
        None => SessionProfile::demo(),
    };
    profile.validate()?;

    tracing::info!("🏪 Opening session at '{}'", profile.store.name);

    if let Some(mut conditions) = profile.optimal_conditions.clone() {
        // Provisioning hook; a no-op for this condition kind today.
        conditions.create()?;
        tracing::info!("🌡 Stockroom target: {}", conditions);
    }

    // The clerk on duty raises any vetoes this session produces.
    let clerk = Person::new(
        1,
        "Morgan Lee".to_string(),
        "Back office".to_string(),
        "clerk@corner-goods.example".to_string(),
        "1988-04-02".to_string(),
        "not-a-real-password".to_string(),
    );
    tracing::debug!("Clerk on duty: {}", clerk);

    let customer = Rc::new(RefCell::new(SessionCustomer::new(
        profile.customer.name.clone(),
        profile.customer.balance,
    )));

    // Bind the controls the way the host UI would: one buy button and one
    // feedback form per shelf item.
    let mut dispatcher = ActionDispatcher::new();
    for item in &profile.items {
        let item = Rc::new(item.clone());
        dispatcher.register(
            format!("buy-{}", item.id),
            PurchaseAction::new(Rc::clone(&customer), Rc::clone(&item)),
        );
        dispatcher.register(
            format!("feedback-{}", item.id),
            FeedbackAction::new(
                Rc::clone(&customer),
                Rc::clone(&item),
                "Does what it should".to_string(),
                true,
            ),
        );
    }
    tracing::info!("{} controls bound", dispatcher.len());

    // Scripted clicks: try to buy everything on the shelf. The host layer
    // owns failure behavior, so a declined payment becomes a clerk veto
    // instead of aborting the session.
    let mut vetoes: Vec<Veto> = Vec::new();
    for item in &profile.items {
        let event = ActionEvent::new(format!("buy-{}", item.id), "click".to_string());
        match dispatcher.dispatch(&event) {
            Ok(()) => tracing::info!("🛒 Bought '{}'", item.name),
            Err(e) => {
                tracing::warn!("❌ Purchase of '{}' failed: {}", item.name, e);
                vetoes.push(Veto::raised(
                    format!("payment declined for '{}'", item.name),
                    &clerk,
                ));
            }
        }
    }

    // One feedback entry for the first item, as a bought-it-liked-it click.
    if let Some(first) = profile.items.first() {
        let event = ActionEvent::new(format!("feedback-{}", first.id), "click".to_string());
        dispatcher.dispatch(&event)?;
        tracing::info!("💬 Feedback recorded for '{}'", first.name);
    }

    let ledger_path = write_ledger(&config.output_path, &vetoes)?;

    let customer = customer.borrow();
    tracing::info!(
        "🧾 {} has {} receipts and {:.2} left",
        customer.name,
        customer.receipts.len(),
        customer.balance
    );
    for line in &customer.receipts {
        tracing::debug!("receipt: {}", line);
    }
    for line in &customer.feedback {
        tracing::debug!("feedback: {}", line);
    }

    Ok(SessionSummary {
        purchases: customer.receipts.len(),
        feedback_entries: customer.feedback.len(),
        vetoes: vetoes.len(),
        ledger_path,
    })
}

/// Write one JSON document per veto, one per line. Nothing is written when
/// the session raised no vetoes.
fn write_ledger(output_path: &str, vetoes: &[Veto]) -> small_store::Result<Option<String>> {
    if vetoes.is_empty() {
        return Ok(None);
    }

    let dir = Path::new(output_path);
    std::fs::create_dir_all(dir)?;

    let mut lines = Vec::with_capacity(vetoes.len());
    for veto in vetoes {
        lines.push(veto.to_json()?);
    }

    let path = dir.join("veto-ledger.jsonl");
    std::fs::write(&path, lines.join("\n"))?;

    Ok(Some(path.display().to_string()))
}
