mod render;

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use travelagent_engine::orchestrator::SubmitOutcome;
use travelagent_runtime::config_store::ConfigStore;
use travelagent_runtime::env::apply_env_overrides;
use travelagent_runtime::runtime_engine::build_orchestrator;

/// Ask the travel agent for flights and hotels.
#[derive(Parser, Debug)]
#[command(name = "travel-agent")]
#[command(about = "Send a trip request to the travel agent service", long_about = None)]
struct Args {
    /// Trip request text; the configured default message is used when omitted
    message: Vec<String>,

    /// Path to the JSON configuration file
    #[arg(short, long, default_value = "travel-agent.json")]
    config: PathBuf,

    /// Agent service base URL (overrides config and environment)
    #[arg(long)]
    base_url: Option<String>,

    /// Print the final session as JSON instead of rendering it
    #[arg(long)]
    json: bool,

    /// Log request progress
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "info" } else { "warn" }),
    )
    .init();

    let store = ConfigStore::at_path(&args.config);
    let mut cfg = store.load_or_default()?;
    apply_env_overrides(&mut cfg).context("read environment overrides")?;
    if let Some(url) = args.base_url {
        cfg.agent.base_url = url;
    }

    let orchestrator = build_orchestrator(&cfg)?;
    if !args.message.is_empty() {
        orchestrator.set_message(args.message.join(" "));
    }

    let json = args.json;
    let outcome = orchestrator
        .submit_with_hook(|session| {
            if !json {
                print!("{}", render::render_pipeline(session));
                println!();
            }
        })
        .await;

    if outcome == SubmitOutcome::Skipped {
        eprintln!("Nothing to send: the trip request is empty.");
        return Ok(ExitCode::from(2));
    }

    let session = orchestrator.snapshot();
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&session).context("encode session JSON")?
        );
    } else {
        print!("{}", render::render_response(&session));
    }

    Ok(match outcome {
        SubmitOutcome::Failed => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}
