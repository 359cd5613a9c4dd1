//! TUI-local state (not part of the form session).

use promptgen::clipboard::Clipboard;
use promptgen::logging::LogLine;
use promptgen::session::Session;
use promptgen::store::KeyValueStore;

/// Input mode for the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    /// Arrow keys move between fields, Enter activates, `q` quits.
    Normal,
    /// Typing into the free-text field. Enter or Esc leaves.
    EditingText,
    /// A category's option list is open. Index 0 is the "Select ..." entry.
    Picking { cursor: usize },
}

/// A focusable row of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    FreeText,
    /// Index into the catalog.
    Category(usize),
    Generate,
    Copy,
    Unlock,
}

/// Focusable fields in display order for the current session state.
///
/// The unlock link only exists while locked and the copy action only once a
/// prompt has been generated.
pub(crate) fn fields<S: KeyValueStore, C: Clipboard>(session: &Session<S, C>) -> Vec<Field> {
    let mut fields = Vec::with_capacity(session.catalog().len() + 4);
    if session.show_upgrade_banner() {
        fields.push(Field::Unlock);
    }
    fields.push(Field::FreeText);
    fields.extend((0..session.catalog().len()).map(Field::Category));
    fields.push(Field::Generate);
    if !session.prompt().is_empty() {
        fields.push(Field::Copy);
    }
    fields
}

pub(crate) struct App {
    pub(crate) input_mode: InputMode,
    pub(crate) focus: Field,
    /// Whether the logs pane is visible (toggled with `,`).
    pub(crate) show_logs: bool,
    /// Log lines drained from the tracing layer.
    pub(crate) logs: Vec<LogLine>,
    /// Status messages shown at the bottom until the next action.
    pub(crate) status_message: Option<String>,
    /// Error shown inside the unlock dialog after a rejected code.
    pub(crate) dialog_error: Option<String>,
    pub(crate) should_quit: bool,
}

impl App {
    pub(crate) fn new() -> Self {
        Self {
            input_mode: InputMode::Normal,
            focus: Field::FreeText,
            show_logs: false,
            logs: Vec::new(),
            status_message: None,
            dialog_error: None,
            should_quit: false,
        }
    }

    /// Move focus by `step` positions, wrapping around.
    pub(crate) fn move_focus<S: KeyValueStore, C: Clipboard>(
        &mut self,
        session: &Session<S, C>,
        step: isize,
    ) {
        let fields = fields(session);
        let current = fields.iter().position(|f| *f == self.focus).unwrap_or(0) as isize;
        let len = fields.len() as isize;
        let next = (current + step).rem_euclid(len) as usize;
        self.focus = fields[next];
    }

    /// Put focus back on a field that still exists after the form changed.
    pub(crate) fn fix_focus<S: KeyValueStore, C: Clipboard>(&mut self, session: &Session<S, C>) {
        if !fields(session).contains(&self.focus) {
            self.focus = Field::FreeText;
        }
    }
}
