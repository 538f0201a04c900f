//! The widget loop.
//!
//! One task owns the engine: it renders on the configured interval,
//! consumes JSON events from stdin (the notification bus), and applies
//! the one-shot remote category fetch when it completes. Keeping every
//! state mutation on this single task preserves the pick-ordering
//! invariants of the selector.

use std::time::Duration;

use chrono::Utc;
use clap::Args;
use glimmer_core::{remote, ComplimentEngine, Config, Event, RenderOutput};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

#[derive(Args)]
pub struct RunArgs {
    /// Override the render interval in milliseconds
    #[arg(long)]
    pub interval_ms: Option<u64>,
    /// Stop after N scheduled renders (0 = run forever)
    #[arg(long, default_value = "0")]
    pub ticks: u64,
    /// Print each render as a JSON line instead of plain text
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(run_loop(args));
    // A pending stdin read would keep a plain drop waiting forever.
    runtime.shutdown_background();
    result
}

fn print_render(output: &RenderOutput, json: bool) {
    if json {
        match serde_json::to_string(output) {
            Ok(line) => println!("{line}"),
            Err(e) => tracing::warn!(error = %e, "failed to serialize render output"),
        }
    } else {
        for line in output.lines() {
            println!("{line}");
        }
    }
}

async fn run_loop(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    config.validate()?;
    let mut engine = ComplimentEngine::new(&config);

    // Single-shot category fetch; completion is delivered through the
    // same queue the loop below drains.
    let (fetch_tx, mut fetch_rx) = mpsc::channel::<Event>(1);
    let mut fetch_pending = false;
    if let Some(source) = config.remote_file.clone() {
        fetch_pending = true;
        tokio::spawn(async move {
            match remote::load_categories(&source).await {
                Ok(categories) => {
                    let _ = fetch_tx
                        .send(Event::CategoriesReplaced {
                            source,
                            categories,
                            at: Utc::now(),
                        })
                        .await;
                }
                Err(e) => {
                    tracing::warn!(source = %source, error = %e, "category fetch failed, keeping previous set");
                }
            }
        });
    }

    let interval_ms = args.interval_ms.unwrap_or(config.update_interval_ms).max(1);
    let mut interval = tokio::time::interval(Duration::from_millis(interval_ms));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    let mut rendered = 0u64;

    loop {
        tokio::select! {
            _ = interval.tick() => {
                print_render(&engine.render(), args.json);
                rendered += 1;
                if args.ticks != 0 && rendered >= args.ticks {
                    break;
                }
            }
            fetched = fetch_rx.recv(), if fetch_pending => {
                fetch_pending = false;
                if let Some(event) = fetched {
                    engine.handle_event(event);
                }
            }
            line = lines.next_line(), if stdin_open => {
                match line {
                    Ok(Some(line)) => {
                        let line = line.trim();
                        if line.is_empty() {
                            continue;
                        }
                        match serde_json::from_str::<Event>(line) {
                            Ok(event) => {
                                if let Some(Event::ComplimentForced { .. }) = engine.handle_event(event) {
                                    print_render(&engine.render(), args.json);
                                }
                            }
                            Err(e) => {
                                tracing::warn!(error = %e, "ignoring malformed event");
                            }
                        }
                    }
                    Ok(None) => {
                        stdin_open = false;
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "stdin read failed");
                        stdin_open = false;
                    }
                }
            }
        }
    }
    Ok(())
}
