//! Rendering for the generator form.

use promptgen::clipboard::Clipboard;
use promptgen::logging::{LogLevel, LogLine};
use promptgen::session::{CategoryView, Session};
use promptgen::store::KeyValueStore;
use promptgen::text;
use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::{App, Field, InputMode};

/// Map a log level to a ratatui [`Style`].
pub fn log_level_style(level: LogLevel) -> Style {
    match level {
        LogLevel::Trace => Style::default().fg(Color::DarkGray),
        LogLevel::Debug => Style::default().fg(Color::Cyan),
        LogLevel::Info => Style::default().fg(Color::Green),
        LogLevel::Warn => Style::default().fg(Color::Yellow),
        LogLevel::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

/// A `width` x `height` rect centered in `area`, clamped to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

fn marker(focused: bool) -> &'static str {
    if focused { "> " } else { "  " }
}

// ── Root Render ───────────────────────────────────────────────────────

pub(crate) fn render<S: KeyValueStore, C: Clipboard>(
    frame: &mut Frame,
    session: &Session<S, C>,
    app: &App,
) {
    let area = frame.area();
    let categories = session.categories();

    let banner_height = if session.success_visible() || session.show_upgrade_banner() {
        4
    } else {
        0
    };
    let logs_height = if app.show_logs { 8 } else { 0 };

    // [7] help | [banner] | [3] free text | [flex] categories | [5] prompt | [logs] | [3] status
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(banner_height),
            Constraint::Length(3),
            Constraint::Min(categories.len() as u16 + 2),
            Constraint::Length(5),
            Constraint::Length(logs_height),
            Constraint::Length(3),
        ])
        .split(area);

    render_help(frame, chunks[0]);
    if banner_height > 0 {
        render_banner(frame, chunks[1], session, app);
    }
    render_free_text(frame, chunks[2], session, app);
    render_categories(frame, chunks[3], &categories, app);
    render_prompt(frame, chunks[4], session, app);
    if app.show_logs {
        render_logs(frame, chunks[5], &app.logs);
    }
    render_status(frame, chunks[6], app);

    if let InputMode::Picking { cursor } = app.input_mode
        && let Field::Category(index) = app.focus
    {
        render_picker(frame, area, &categories[index], cursor);
    }
    if session.dialog_open() {
        render_unlock_dialog(frame, area, session, app);
    }
}

// ── Help ──────────────────────────────────────────────────────────────

fn render_help(frame: &mut Frame, area: Rect) {
    let mut lines = vec![Line::from(Span::styled(
        "How to use:",
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    for (i, step) in text::HOW_TO_USE.iter().enumerate() {
        lines.push(Line::from(format!("{}. {step}", i + 1)));
    }
    lines.push(Line::from(Span::styled(
        text::TIP,
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue))
        .title(format!(" {} ", text::TITLE))
        .title_alignment(Alignment::Center);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

// ── Banner ────────────────────────────────────────────────────────────

fn render_banner<S: KeyValueStore, C: Clipboard>(
    frame: &mut Frame,
    area: Rect,
    session: &Session<S, C>,
    app: &App,
) {
    let (lines, color) = if session.success_visible() {
        (
            vec![Line::from(Span::styled(
                text::UNLOCK_SUCCESS,
                Style::default().add_modifier(Modifier::BOLD),
            ))],
            Color::Green,
        )
    } else {
        let focused = app.focus == Field::Unlock;
        (
            vec![
                Line::from(Span::styled(
                    text::UPGRADE_HEADLINE,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(text::UPGRADE_BODY),
            ],
            if focused { Color::Yellow } else { Color::Rgb(180, 140, 40) },
        )
    };

    let title = if session.success_visible() {
        " Pro "
    } else {
        " [u] Enter Unlock Code "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(title);
    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

// ── Free Text ─────────────────────────────────────────────────────────

fn render_free_text<S: KeyValueStore, C: Clipboard>(
    frame: &mut Frame,
    area: Rect,
    session: &Session<S, C>,
    app: &App,
) {
    let editing = app.input_mode == InputMode::EditingText;
    let focused = app.focus == Field::FreeText;

    let content = if editing {
        Line::from(format!("{}\u{2588}", session.free_text()))
    } else if session.free_text().is_empty() {
        Line::from(Span::styled(
            text::FREE_TEXT_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(session.free_text().to_string())
    };

    let border = if editing {
        Style::default().fg(Color::Green)
    } else {
        focus_style(focused)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(" Base prompt ");
    frame.render_widget(Paragraph::new(content).block(block), area);
}

// ── Categories ────────────────────────────────────────────────────────

fn category_line(view: &CategoryView, focused: bool) -> Line<'static> {
    let label_style = focus_style(focused);
    let mut spans = vec![
        Span::styled(marker(focused), label_style),
        Span::styled(format!("{:<32}", view.label), label_style),
    ];

    if !view.available {
        spans.push(Span::styled(
            format!("(Pro) {} \u{2013} [Enter] Unlock Pro", text::LOCKED_CATEGORY),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ));
    } else if view.value.is_empty() {
        spans.push(Span::styled(
            text::select_placeholder(view.label),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(view.value.clone(), Style::default().fg(Color::Cyan)));
    }
    Line::from(spans)
}

fn render_categories(frame: &mut Frame, area: Rect, categories: &[CategoryView], app: &App) {
    let lines: Vec<Line> = categories
        .iter()
        .enumerate()
        .map(|(i, view)| category_line(view, app.focus == Field::Category(i)))
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue))
        .title(" Options ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_picker(frame: &mut Frame, area: Rect, view: &CategoryView, cursor: usize) {
    let placeholder = text::select_placeholder(view.label);
    let entries = std::iter::once(placeholder.as_str()).chain(view.values.iter().copied());

    let lines: Vec<Line> = entries
        .enumerate()
        .map(|(i, entry)| {
            let selected = i == cursor;
            let style = if selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if i == 0 {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(marker(selected), style),
                Span::styled(entry.to_string(), style),
            ])
        })
        .collect();

    let width = lines.iter().map(|l| l.width() as u16).max().unwrap_or(0) + 4;
    let popup = centered_rect(width.max(40), lines.len() as u16 + 2, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(format!(" {} ", view.label));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

// ── Prompt ────────────────────────────────────────────────────────────

fn render_prompt<S: KeyValueStore, C: Clipboard>(
    frame: &mut Frame,
    area: Rect,
    session: &Session<S, C>,
    app: &App,
) {
    let generate_focused = app.focus == Field::Generate;
    let copy_focused = app.focus == Field::Copy;

    let mut buttons = vec![Span::styled(
        format!("{}[ Generate Prompt ]", marker(generate_focused)),
        focus_style(generate_focused),
    )];
    if !session.prompt().is_empty() {
        buttons.push(Span::raw("   "));
        buttons.push(Span::styled(
            format!("{}[ Copy Prompt ]", marker(copy_focused)),
            focus_style(copy_focused),
        ));
    }

    let mut lines = vec![Line::from(buttons)];
    if !session.prompt().is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Prompt: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(session.prompt().to_string(), Style::default().fg(Color::White)),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue))
        .title(" Prompt ");
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

// ── Log Pane ──────────────────────────────────────────────────────────

fn render_logs(frame: &mut Frame, area: Rect, logs: &[LogLine]) {
    let inner_height = area.height.saturating_sub(2) as usize;

    let lines: Vec<Line> = logs
        .iter()
        .filter(|log| log.level >= LogLevel::Info)
        .map(|log| {
            Line::from(vec![
                Span::styled(format!("{} ", log.time), Style::default().fg(Color::DarkGray)),
                Span::styled(format!("{} ", log.level.label()), log_level_style(log.level)),
                Span::raw(log.message.clone()),
            ])
        })
        .collect();

    // Follow the tail.
    let scroll = lines.len().saturating_sub(inner_height);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Log ");
    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((scroll as u16, 0));
    frame.render_widget(paragraph, area);
}

// ── Unlock Dialog ─────────────────────────────────────────────────────

fn render_unlock_dialog<S: KeyValueStore, C: Clipboard>(
    frame: &mut Frame,
    area: Rect,
    session: &Session<S, C>,
    app: &App,
) {
    let mut lines = vec![
        Line::from(text::UNLOCK_DIALOG_PROMPT),
        Line::from(""),
        Line::from(Span::styled(
            format!("> {}\u{2588}", session.dialog().entered_code),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
    ];
    if let Some(ref error) = app.dialog_error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(vec![
        Span::styled("[Enter] Unlock", Style::default().fg(Color::Green)),
        Span::raw("   "),
        Span::styled("[Esc] Cancel", Style::default().fg(Color::DarkGray)),
    ]));

    let popup = centered_rect(64, lines.len() as u16 + 2, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .title(format!(" {} ", text::UNLOCK_DIALOG_TITLE))
        .title_alignment(Alignment::Center);

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false }),
        popup,
    );
}

// ── Status Bar ────────────────────────────────────────────────────────

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let (hint, style) = match app.input_mode {
        InputMode::Normal => match app.status_message {
            Some(ref msg) => (msg.clone(), Style::default().fg(Color::Cyan)),
            None => (
                "[Up/Down] move  [Enter] edit  [g] generate  [y] copy  [,] logs  [q] quit"
                    .to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        },
        InputMode::EditingText => (
            "Typing \u{2013} [Enter] done  [Esc] done".to_string(),
            Style::default().fg(Color::Green),
        ),
        InputMode::Picking { .. } => (
            "[Up/Down] choose  [Enter] select  [Esc] cancel".to_string(),
            Style::default().fg(Color::Yellow),
        ),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style);
    frame.render_widget(Paragraph::new(Span::styled(hint, style)).block(block), area);
}

// ── Tests ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use promptgen::prelude::*;
    use ratatui::backend::TestBackend;

    use super::*;

    fn session() -> Session<MemoryStore, MemoryClipboard> {
        Session::new(
            Catalog::builtin(),
            MemoryStore::new(),
            MemoryClipboard::new(),
            GeneratorConfig::default(),
        )
    }

    fn draw(session: &Session<MemoryStore, MemoryClipboard>, app: &App) -> String {
        let backend = TestBackend::new(110, 50);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, session, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn locked_form_shows_banner_and_locked_categories() {
        let screen = draw(&session(), &App::new());
        assert!(screen.contains(text::TITLE));
        assert!(screen.contains(text::UPGRADE_HEADLINE));
        assert!(screen.contains("Select Visual Type"));
        assert!(screen.contains("Pro users only"));
        assert!(!screen.contains("[ Copy Prompt ]"));
    }

    #[test]
    fn generated_prompt_and_copy_button_are_shown() {
        let mut session = session();
        session.set_free_text("cat photo");
        session.choose("visualType", "RAW photo").unwrap();
        session.generate();

        let screen = draw(&session, &App::new());
        assert!(screen.contains("Prompt: cat photo, RAW photo"));
        assert!(screen.contains("[ Copy Prompt ]"));
    }

    #[test]
    fn unlocked_form_shows_success_notice() {
        let mut session = session();
        session.set_entered_code("unlock-pro-799");
        session.submit_unlock(Instant::now()).unwrap();

        let screen = draw(&session, &App::new());
        assert!(screen.contains("Pro Unlocked!"));
        assert!(!screen.contains(text::UPGRADE_HEADLINE));
        assert!(!screen.contains("Pro users only"));
        assert!(screen.contains("Select Mood & Emotion"));
    }

    #[test]
    fn dialog_shows_error() {
        let mut session = session();
        session.open_unlock_dialog();
        session.set_entered_code("abc");
        let mut app = App::new();
        app.dialog_error = Some("Invalid unlock code.".into());

        let screen = draw(&session, &app);
        assert!(screen.contains(text::UNLOCK_DIALOG_PROMPT));
        assert!(screen.contains("> abc"));
        assert!(screen.contains("Invalid unlock code."));
    }

    #[test]
    fn picker_lists_placeholder_and_values() {
        let session = session();
        let mut app = App::new();
        app.focus = Field::Category(1);
        app.input_mode = InputMode::Picking { cursor: 2 };

        let screen = draw(&session, &app);
        assert!(screen.contains("> shot on RED Komodo 6K"));
        assert!(screen.contains("Hasselblad H6D-100c 100mm f/2.2"));
    }

    #[test]
    fn centered_rect_clamps() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect(10, 4, area), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_rect(50, 50, area), area);
    }
}
