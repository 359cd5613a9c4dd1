//! Build an image-generation prompt from the command line.
//!
//! The interactive form lives in `promptgen-tui`; this binary drives the same
//! session headlessly and prints the result, which makes it easy to pipe into
//! a clipboard tool.
//!
//! # Examples
//!
//! ```sh
//! # List categories and their values
//! promptgen categories
//!
//! # Assemble a prompt
//! promptgen generate --text "cat photo" --set visualType="RAW photo" \
//!   --set composition="rule of thirds"
//!
//! # Unlock the Pro categories on this machine
//! promptgen unlock UNLOCK-PRO-XXX
//!
//! # Show whether Pro is unlocked and where the flag lives
//! promptgen status
//! ```

use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::{Parser, Subcommand};
use promptgen::logging;
use promptgen::prelude::*;

/// Build an image-generation prompt from categorized options.
#[derive(Parser)]
#[command(name = "promptgen")]
struct Cli {
    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the file holding the Pro access flag
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List categories and their values
    Categories {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Assemble a prompt and print it
    Generate {
        /// Free-text base idea, used verbatim
        #[arg(long, default_value = "")]
        text: String,

        /// Choose a value: `--set key=value` (repeatable)
        #[arg(long = "set", value_parser = parse_choice)]
        choices: Vec<(String, String)>,
    },

    /// Enter the Pro access code
    Unlock {
        /// Access code (case-insensitive)
        code: String,
    },

    /// Show access state and the flag location
    Status,
}

fn parse_choice(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got {raw:?}"))?;
    Ok((key.trim().to_string(), value.to_string()))
}

fn main() {
    let cli = Cli::parse();
    logging::init_cli(cli.verbose);

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

    let store = config.open_store();
    let mut session = Session::new(Catalog::builtin(), store, MemoryClipboard::new(), config);

    if let Err(e) = run(cli.command, &mut session) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(command: Command, session: &mut Session<FileStore, MemoryClipboard>) -> Result<(), String> {
    match command {
        Command::Categories { json } => print_categories(session, json),
        Command::Generate { text, choices } => {
            session.set_free_text(text);
            for (key, value) in &choices {
                session.choose(key, value).map_err(|e| e.to_string())?;
            }
            println!("{}", session.generate());
            Ok(())
        }
        Command::Unlock { code } => {
            session.set_entered_code(code);
            session
                .submit_unlock(Instant::now())
                .map_err(|e| e.to_string())?;
            println!("{}", promptgen::text::UNLOCK_SUCCESS);
            Ok(())
        }
        Command::Status => {
            let state = match session.access_state() {
                AccessState::Locked => "locked",
                AccessState::Unlocked => "unlocked",
            };
            println!("Pro access: {state}");
            println!("Flag file:  {}", session.store().path().display());
            Ok(())
        }
    }
}

fn print_categories(
    session: &Session<FileStore, MemoryClipboard>,
    json: bool,
) -> Result<(), String> {
    if json {
        let out = serde_json::to_string_pretty(session.catalog().list_categories())
            .map_err(|e| format!("Failed to serialize catalog: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    for category in session.categories() {
        let lock = if category.available { "" } else { "  [Pro, locked]" };
        println!("{} ({}){lock}", category.label, category.key);
        for value in category.values {
            println!("    {value}");
        }
    }
    if session.show_upgrade_banner() {
        println!();
        println!("{}", promptgen::text::UPGRADE_BODY);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn session_at(path: &Path) -> Session<FileStore, MemoryClipboard> {
        let config = GeneratorConfig {
            store_path: path.to_path_buf(),
            ..GeneratorConfig::default()
        };
        Session::new(
            Catalog::builtin(),
            config.open_store(),
            MemoryClipboard::new(),
            config,
        )
    }

    fn generate(text: &str, choices: &[&str]) -> Command {
        Command::Generate {
            text: text.to_string(),
            choices: choices
                .iter()
                .map(|raw| parse_choice(raw))
                .collect::<Result<_, _>>()
                .unwrap(),
        }
    }

    #[test]
    fn parse_choice_splits_on_first_equals() {
        assert_eq!(
            parse_choice("visualType=RAW photo"),
            Ok(("visualType".into(), "RAW photo".into()))
        );
        assert_eq!(parse_choice("k=a=b"), Ok(("k".into(), "a=b".into())));
        assert!(parse_choice("visualType").is_err());
    }

    #[test]
    fn generate_accepts_catalog_values() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_at(&dir.path().join("state.json"));
        let command = generate("cat photo", &["visualType=RAW photo"]);
        assert!(run(command, &mut session).is_ok());
        assert_eq!(session.prompt(), "cat photo, RAW photo");
    }

    #[test]
    fn generate_rejects_free_form_values() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_at(&dir.path().join("state.json"));
        let command = generate("", &["visualType=ANYTHING, injected"]);

        let err = run(command, &mut session).unwrap_err();
        assert_eq!(err, "\"ANYTHING, injected\" is not an option for Visual Type");
        assert_eq!(session.prompt(), "");
    }

    #[test]
    fn generate_rejects_gated_values_while_locked() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_at(&dir.path().join("state.json"));
        let command = generate("", &["genre=retro-futurism"]);

        let err = run(command, &mut session).unwrap_err();
        assert_eq!(err, "Genre Tag is available to Pro users only");
    }
}
