//! Terminal clipboard via the OSC 52 escape sequence.
//!
//! Works over SSH and inside most modern terminal emulators without any
//! platform clipboard library. Terminals that ignore OSC 52 silently drop the
//! sequence, which the generator treats like any other best-effort copy.

use std::io::{self, Write};

use crossterm::clipboard::CopyToClipboard;
use crossterm::execute;
use promptgen::clipboard::Clipboard;
use promptgen::error::ClipboardError;

/// Writes OSC 52 copy requests to a terminal writer (stdout by default).
pub struct Osc52Clipboard<W: Write = io::Stdout> {
    out: W,
}

impl Osc52Clipboard {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        execute!(self.out, CopyToClipboard::to_clipboard_from(text))?;
        Ok(())
    }
}
