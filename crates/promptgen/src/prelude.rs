//! Convenience re-exports for common `promptgen` types.
//!
//! Meant to be glob-imported by frontends:
//!
//! ```ignore
//! use promptgen::prelude::*;
//! ```
//!
//! Timers, the tracing layer and the copy text are left out; import those
//! from their modules directly.

// ── Form core ───────────────────────────────────────────────────────
pub use crate::assembler::assemble;
pub use crate::catalog::{Catalog, Category};
pub use crate::selection::{Selection, SelectionSnapshot};
pub use crate::session::{CategoryView, Session};

// ── Access gate ─────────────────────────────────────────────────────
pub use crate::access::{AccessGate, AccessState, Unlocked};

// ── Collaborators ───────────────────────────────────────────────────
pub use crate::clipboard::{Clipboard, MemoryClipboard};
pub use crate::store::{FileStore, KeyValueStore, MemoryStore};

// ── Config and errors ───────────────────────────────────────────────
pub use crate::config::GeneratorConfig;
pub use crate::error::{AccessError, SelectionError, SessionError};
