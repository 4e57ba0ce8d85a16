use anyhow::{Context, Result, anyhow};
use rpg_player::handle_error;
use rpg_player::scenario::{Scenario, replay};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rpg_player=info,hero=info,combat=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let path = std::env::args()
        .nth(1)
        .context("usage: rpg_player <scenario.json>")?;

    let scenario = Scenario::from_path(&path)
        .map_err(|e| anyhow!(handle_error(&e)))
        .with_context(|| format!("Failed to load scenario {}", path))?;

    let report = replay(&scenario);
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
