//! Skill Invoke - deliver platform events to the skill and print the responses

use clap::Parser;
use polyglot_skill::{InvocationContext, SkillConfig, SkillRuntime};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Event files (JSON request envelopes); reads one event from stdin when empty
    events: Vec<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = SkillConfig::load(args.config.as_deref())?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let runtime = SkillRuntime::new(&config)?;

    let mut inputs = Vec::new();
    if args.events.is_empty() {
        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw)?;
        inputs.push(("stdin".to_string(), raw));
    } else {
        for path in &args.events {
            let raw = std::fs::read_to_string(path)?;
            inputs.push((path.display().to_string(), raw));
        }
    }

    // Every event goes through the same runtime, as in a warm process
    for (index, (source, raw)) in inputs.into_iter().enumerate() {
        let event: serde_json::Value = serde_json::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("{} is not valid JSON: {}", source, e))?;

        let context = InvocationContext::new(format!("local-{}", index + 1))
            .with_function_name(env!("CARGO_PKG_NAME"));
        let response = runtime.on_event(event, &context).await;

        println!("{}", serde_json::to_string_pretty(&response)?);
    }

    Ok(())
}
