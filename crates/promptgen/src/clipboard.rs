//! Clipboard collaborator.
//!
//! Frontends provide the real implementation (the TUI writes an OSC 52
//! escape sequence). [`MemoryClipboard`] keeps the last copied text and is
//! used by tests and headless callers.

use std::sync::{Arc, Mutex};

use crate::error::ClipboardError;

pub trait Clipboard {
    /// Replace the system clipboard contents with `text`.
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

impl<C: Clipboard + ?Sized> Clipboard for Box<C> {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        (**self).copy(text)
    }
}

/// Clipboard that records copies in memory. Clones share contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        *self.contents.lock().unwrap_or_else(|e| e.into_inner()) = Some(text.to_string());
        Ok(())
    }
}
