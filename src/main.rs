//! SecureBank - Console Banking Application
//!
//! Creates savings and checking accounts, records deposits and withdrawals,
//! and prints listings and transaction histories. All state is held in
//! memory for the lifetime of the process.

use std::io::{self, Write};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use securebank::{Config, Session};

/// Initialize tracing/logging
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "securebank=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    // Load configuration
    let config = Config::from_env()?;

    tracing::info!(bank = %config.bank_name, "starting console session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    let mut session = Session::new(config);
    session.run(&mut input, &mut output)?;
    output.flush()?;

    tracing::info!("session ended");
    Ok(())
}
