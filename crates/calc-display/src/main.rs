//! Headless calculator display entry point.
//!
//! Wires the event bus, the display, the editor and the drag processor
//! together, then reads commands from standard input, one per line.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ load_config()            -- `--config <path>` or the platform config dir
//!  └─ AppState::new()          -- bus, display, view, editor, haptics
//!  └─ load_snapshot()          -- restore the last display state
//!  └─ command loop
//!       ├─ calculation commands -> spawn_blocking (engine thread)
//!       └─ everything else      -> handled inline
//!  └─ save_snapshot()          -- on EOF or Ctrl-C
//! ```
//!
//! Run with `RUST_LOG=debug` to see every event the bus dispatches.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use calc_display::infrastructure::{
    storage::{config, snapshot},
    ui_bridge::{AppState, Command, CommandOutcome},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = match config_path_from_args(std::env::args().skip(1))? {
        Some(path) => path,
        None => config::config_file_path().context("cannot locate config directory")?,
    };
    let cfg = config::load_config_from(&config_path)
        .with_context(|| format!("cannot load config from {}", config_path.display()))?;

    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&cfg.app.log_level)),
        )
        .init();

    info!("calculator display starting (config {})", config_path.display());

    if !config_path.exists() {
        match config::save_config_to(&cfg, &config_path) {
            Ok(()) => info!("wrote default config to {}", config_path.display()),
            Err(e) => warn!("could not write default config: {e}"),
        }
    }

    let persist = cfg.app.persist_display_state;
    let snapshot_path = config_path.with_file_name(snapshot::SNAPSHOT_FILE);
    let state = AppState::new(cfg);

    if persist {
        match snapshot::load_snapshot(&snapshot_path) {
            Ok(Some(saved)) => {
                info!("restoring display state from {}", snapshot_path.display());
                state.display.set_view_state(saved);
            }
            Ok(None) => {}
            Err(e) => warn!("ignoring unreadable display snapshot: {e}"),
        }
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    info!("ready; reading commands from stdin.  Press Ctrl-C to exit.");

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line.context("failed to read stdin")?,
            _ = tokio::signal::ctrl_c() => {
                info!("shutdown signal received");
                break;
            }
        };
        let Some(line) = line else { break };
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }

        let command: Command = match line.parse() {
            Ok(command) => command,
            Err(e) => {
                error!("{e}");
                continue;
            }
        };

        let outcome = if command.is_calculation() {
            let worker = Arc::clone(&state);
            tokio::task::spawn_blocking(move || worker.execute(command))
                .await
                .context("calculation worker panicked")?
        } else {
            state.execute(command)
        };
        print_outcome(&outcome);
    }

    if persist {
        let current = state.display.view_state();
        match snapshot::save_snapshot(&snapshot_path, &current) {
            Ok(()) => info!("display state saved to {}", snapshot_path.display()),
            Err(e) => error!("failed to save display state: {e}"),
        }
    }

    info!("calculator display stopped");
    Ok(())
}

fn config_path_from_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Option<PathBuf>> {
    let mut path = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args.next().context("--config needs a path")?;
                path = Some(PathBuf::from(value));
            }
            other => anyhow::bail!("unknown argument: {other}"),
        }
    }
    Ok(path)
}

fn print_outcome(outcome: &CommandOutcome) {
    let status = if outcome.display_valid { "ok" } else { "error" };
    match outcome.drag_handled {
        Some(handled) => println!(
            "display[{status}]={:?} editor={:?} cursor={} drag={}",
            outcome.display, outcome.editor, outcome.cursor, handled
        ),
        None => println!(
            "display[{status}]={:?} editor={:?} cursor={}",
            outcome.display, outcome.editor, outcome.cursor
        ),
    }
}
