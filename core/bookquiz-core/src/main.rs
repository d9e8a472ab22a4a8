use bookquiz_core::{
    config::Config,
    services::{session_service::Advance, AppState},
    telemetry,
};

/// Plays one true/false round with a fixed guess and prints the wallet afterwards.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    telemetry::init_tracing(&config.log_filter, config.log_format);

    tracing::info!(
        "Configuration loaded for environment: {:?}",
        std::env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string())
    );

    let app_state = AppState::new(config).await?;
    let mut session = app_state.true_false_session();
    session.start()?;

    loop {
        session.select(true);
        session.confirm();
        match session.advance() {
            Advance::NextQuestion { .. } => continue,
            Advance::Finished { phase, reward, grant } => {
                if let Some(grant) = grant {
                    let receipt = grant.settled().await;
                    tracing::info!("Reward settled: {:?}", receipt);
                }
                println!(
                    "{} with score {} ({} coins)",
                    phase.as_str(),
                    session.score(),
                    reward
                );
                break;
            }
            Advance::Ignored => anyhow::bail!("session stalled in {}", session.phase().as_str()),
        }
    }

    println!("Balance: {}", app_state.economy.get_balance().await?);
    for entry in app_state.shelf().await? {
        println!(
            "#{:>2} {:<40} {:>3} {}",
            entry.id,
            entry.title,
            entry.price,
            if entry.owned { "owned" } else { "" }
        );
    }

    Ok(())
}
