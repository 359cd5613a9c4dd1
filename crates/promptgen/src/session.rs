//! The generator form as an explicit state container.
//!
//! [`Session`] owns everything one run of the form needs: free text, the
//! selection, the last generated prompt, the access gate, the unlock dialog
//! and the success notice. Each public method is one user action and runs to
//! completion; a frontend (the TUI, the CLI, or a test) only has to call them
//! and render the getters.
//!
//! The gate policy lives here. [`Selection`] accepts any catalog key, so
//! [`Session::choose`] refuses gated categories while locked before ever
//! touching it.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::access::{AccessGate, AccessState};
use crate::assembler::assemble;
use crate::catalog::{Catalog, Category};
use crate::clipboard::Clipboard;
use crate::config::GeneratorConfig;
use crate::error::{SelectionError, SessionError};
use crate::selection::{Selection, SelectionSnapshot};
use crate::store::KeyValueStore;
use crate::text;
use crate::timer::{TimerHandle, Timers};

/// Deferred events the session schedules for itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    HideUnlockNotice,
}

/// Render-ready view of one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryView {
    pub key: &'static str,
    pub label: &'static str,
    pub values: &'static [&'static str],
    pub gated: bool,
    /// False for gated categories while the gate is locked.
    pub available: bool,
    /// Current value, empty when nothing is chosen.
    pub value: String,
}

/// State of the unlock dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnlockDialog {
    pub open: bool,
    pub entered_code: String,
}

pub struct Session<S, C> {
    catalog: Catalog,
    config: GeneratorConfig,
    selection: Selection,
    free_text: String,
    prompt: String,
    gate: AccessGate<S>,
    clipboard: C,
    dialog: UnlockDialog,
    success_visible: bool,
    timers: Timers<SessionEvent>,
}

impl<S: KeyValueStore, C: Clipboard> Session<S, C> {
    /// Start a session, restoring the access flag from `store`.
    pub fn new(catalog: Catalog, store: S, clipboard: C, config: GeneratorConfig) -> Self {
        let gate = AccessGate::init(store);
        Self {
            selection: Selection::new(&catalog),
            catalog,
            config,
            free_text: String::new(),
            prompt: String::new(),
            gate,
            clipboard,
            dialog: UnlockDialog::default(),
            success_visible: false,
            timers: Timers::new(),
        }
    }

    // ── Form fields ─────────────────────────────────────────────────

    pub fn free_text(&self) -> &str {
        &self.free_text
    }

    pub fn set_free_text(&mut self, text: impl Into<String>) {
        self.free_text = text.into();
    }

    /// Categories in display order with their availability and value.
    pub fn categories(&self) -> Vec<CategoryView> {
        let unlocked = self.gate.is_unlocked();
        self.catalog
            .list_categories()
            .iter()
            .map(|c| CategoryView {
                key: c.key,
                label: c.label,
                values: c.values,
                gated: c.gated,
                available: !c.gated || unlocked,
                value: self.selection.get(c.key).unwrap_or_default().to_string(),
            })
            .collect()
    }

    /// Whether `category` can be chosen right now.
    pub fn is_available(&self, category: &Category) -> bool {
        !category.gated || self.gate.is_unlocked()
    }

    /// Choose `value` for category `key`. An empty value resets it.
    ///
    /// Gated categories are refused while locked and the selection is left
    /// untouched, so a locked session never holds a gated value. Values
    /// outside the category's option list are refused the same way.
    pub fn choose(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
        let category = self
            .catalog
            .get(key)
            .ok_or_else(|| SelectionError::UnknownCategory(key.to_string()))?;
        if !self.is_available(category) {
            debug!(key, "refused choice in locked category");
            return Err(SessionError::Locked(category.label.to_string()));
        }
        if !value.is_empty() && !category.values.contains(&value) {
            debug!(key, value, "refused value outside option list");
            return Err(SessionError::UnknownValue {
                category: category.label.to_string(),
                value: value.to_string(),
            });
        }
        self.selection.select(key, value)?;
        Ok(())
    }

    pub fn selections(&self) -> SelectionSnapshot {
        self.selection.get_all()
    }

    // ── Generate / copy ─────────────────────────────────────────────

    /// Assemble the prompt from the current form state and keep it.
    pub fn generate(&mut self) -> &str {
        self.prompt = assemble(&self.free_text, &self.selection.get_all());
        debug!(chars = self.prompt.chars().count(), "prompt generated");
        &self.prompt
    }

    /// The last generated prompt, empty before the first `generate`.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Copy the last generated prompt to the clipboard.
    ///
    /// The clipboard is best-effort: a write failure is logged and the
    /// fixed confirmation is still returned.
    pub fn copy_prompt(&mut self) -> Result<&'static str, SessionError> {
        if self.prompt.is_empty() {
            return Err(SessionError::NothingToCopy);
        }
        match self.clipboard.copy(&self.prompt) {
            Ok(()) => info!("prompt copied to clipboard"),
            Err(e) => warn!("{e}"),
        }
        Ok(text::COPIED)
    }

    // ── Access gate ─────────────────────────────────────────────────

    pub fn access_state(&self) -> AccessState {
        self.gate.state()
    }

    pub fn is_unlocked(&self) -> bool {
        self.gate.is_unlocked()
    }

    pub fn show_upgrade_banner(&self) -> bool {
        !self.gate.is_unlocked()
    }

    pub fn dialog(&self) -> &UnlockDialog {
        &self.dialog
    }

    pub fn dialog_open(&self) -> bool {
        self.dialog.open
    }

    pub fn open_unlock_dialog(&mut self) {
        self.dialog.open = true;
    }

    pub fn set_entered_code(&mut self, code: impl Into<String>) {
        self.dialog.entered_code = code.into();
    }

    /// Close the dialog. The typed code is kept for the next opening.
    pub fn cancel_unlock(&mut self) {
        self.dialog.open = false;
    }

    /// Try the entered code.
    ///
    /// On success the dialog closes, the confirmation appears and a hide
    /// event is scheduled `notice_secs` after `now`. On failure the dialog
    /// stays open and the error carries the user-facing message.
    pub fn submit_unlock(&mut self, now: Instant) -> Result<TimerHandle, SessionError> {
        self.gate.attempt_unlock(&self.dialog.entered_code)?;
        self.dialog.open = false;
        self.success_visible = true;
        Ok(self
            .timers
            .schedule(now, self.config.notice_duration(), SessionEvent::HideUnlockNotice))
    }

    pub fn success_visible(&self) -> bool {
        self.success_visible
    }

    /// Hide the confirmation early and drop its pending hide event.
    pub fn dismiss_notice(&mut self, handle: TimerHandle) {
        self.timers.cancel(handle);
        self.success_visible = false;
    }

    // ── Time ────────────────────────────────────────────────────────

    /// Fire every deferred event due at `now`.
    pub fn tick(&mut self, now: Instant) {
        for event in self.timers.take_due(now) {
            match event {
                SessionEvent::HideUnlockNotice => self.success_visible = false,
            }
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        self.gate.store()
    }
}
