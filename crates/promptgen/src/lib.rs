//! Categorized prompt builder with a locally unlocked Pro tier.
//!
//! `promptgen` assembles image-generation prompts from a fixed catalog of
//! option lists. The user optionally types a base idea, picks at most one
//! value per category, and the generator joins everything with commas in
//! catalog order. Three categories are gated behind an access flag that is
//! persisted locally once the user enters the access code.
//!
//! Everything is headless. [`Session`](session::Session) is the form as an
//! explicit state container; frontends (the `promptgen-tui` crate, the
//! `promptgen` CLI, tests) drive it one user action at a time. Storage and
//! the clipboard are injected through the [`KeyValueStore`](store::KeyValueStore)
//! and [`Clipboard`](clipboard::Clipboard) traits.
//!
//! # Getting started
//!
//! ```
//! use promptgen::prelude::*;
//!
//! let mut session = Session::new(
//!     Catalog::builtin(),
//!     MemoryStore::new(),
//!     MemoryClipboard::new(),
//!     GeneratorConfig::default(),
//! );
//!
//! session.set_free_text("cat photo");
//! session.choose("visualType", "RAW photo").unwrap();
//! assert_eq!(session.generate(), "cat photo, RAW photo");
//!
//! // Gated categories are refused until the gate is unlocked.
//! assert!(session.choose("mood", "serene and peaceful").is_err());
//! ```
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`catalog`] | The nine builtin categories |
//! | [`selection`] | Per-category chosen values |
//! | [`assembler`] | Joining free text and selections |
//! | [`access`] | Locked/unlocked gate over a store |
//! | [`store`] | In-memory and JSON-file key-value stores |
//! | [`clipboard`] | Clipboard trait and in-memory implementation |
//! | [`timer`] | Deferred events for the UI loop |
//! | [`session`] | The form controller |
//! | [`config`] | Configuration with TOML loading |
//! | [`logging`] | Tracing capture for UIs and CLI subscriber setup |

pub mod access;
pub mod assembler;
pub mod catalog;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod selection;
pub mod session;
pub mod store;
pub mod text;
pub mod timer;

pub use assembler::assemble;
pub use error::{AccessError, ClipboardError, ConfigError, SelectionError, SessionError, StoreError};
