//! Interactive prompt generator in the terminal.
//!
//! Restores the Pro access flag from the state file, then opens the form.
//! Copying uses OSC 52, so it works over SSH in terminals that support it.
//!
//! # Examples
//!
//! ```sh
//! promptgen-tui
//! promptgen-tui --config ~/.config/promptgen.toml
//! promptgen-tui --store /tmp/promptgen-state.json
//! ```

use std::path::PathBuf;
use std::process;

use clap::Parser;
use promptgen::logging::UiTracingLayer;
use promptgen::prelude::*;
use promptgen_tui::{Osc52Clipboard, TuiConfig, run_tui};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Interactive prompt generator in the terminal.
#[derive(Parser)]
#[command(name = "promptgen-tui")]
struct Cli {
    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the file holding the Pro access flag
    #[arg(long)]
    store: Option<PathBuf>,

    /// Seconds the unlock confirmation stays visible
    #[arg(long)]
    notice_secs: Option<u64>,
}

fn main() {
    let cli = Cli::parse();

    let mut config = match GeneratorConfig::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    if let Some(store) = cli.store {
        config.store_path = store;
    }
    if let Some(secs) = cli.notice_secs {
        config.notice_secs = secs;
    }

    // Tracing goes to the in-app log pane while the TUI owns the terminal.
    let (tracing_layer, log_buffer) = UiTracingLayer::new();
    tracing_subscriber::registry().with(tracing_layer).init();
    tracing::info!(store = %config.store_path.display(), "starting prompt generator");

    let store = config.open_store();
    let mut session = Session::new(Catalog::builtin(), store, Osc52Clipboard::stdout(), config);

    let tui_config = TuiConfig {
        log_buffer: Some(log_buffer),
    };
    if let Err(e) = run_tui(&mut session, &tui_config) {
        eprintln!("TUI error: {e}");
        process::exit(1);
    }
}
