use crate::application::{App, AppMode};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_stand(f, app, chunks[1]);
    render_status_bar(f, app, chunks[2]);

    if matches!(app.mode, AppMode::Help) {
        render_help_popup(f, app.help_scroll);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let resources = app.resources.for_step(app.state.step());
    let header = Paragraph::new(format!(
        "lemonade - Terminal Lemonade Stand | {}",
        resources.description
    ))
    .style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

/// Draws the current step: its ASCII art centered in the stand, with the
/// instruction line underneath.
fn render_stand(f: &mut Frame, app: &App, area: Rect) {
    let resources = app.resources.for_step(app.state.step());

    let mut content: Vec<Line> = resources.art.lines().map(Line::from).collect();
    content.push(Line::from(""));
    content.push(Line::styled(
        resources.prompt.as_str(),
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    ));

    // Center vertically inside the block borders
    let inner_height = area.height.saturating_sub(2) as usize;
    let top_padding = inner_height.saturating_sub(content.len()) / 2;
    let mut lines = vec![Line::from(""); top_padding];
    lines.extend(content);

    let stand = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Lemonade"));
    f.render_widget(stand, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status_text = match app.mode {
        AppMode::Normal => {
            if let Some(ref status) = app.status_message {
                status.clone()
            } else {
                "Space/Enter or mouse: tap | F1/?: help | q: quit".to_string()
            }
        }
        AppMode::Help => {
            "↑↓/jk: scroll | PgUp/PgDn: fast scroll | Home: top | Esc/q: close help".to_string()
        }
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.mode {
            AppMode::Normal => Style::default(),
            AppMode::Help => Style::default().fg(Color::Cyan),
        });
    f.render_widget(status, area);
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_text = get_help_text();
    let help_lines: Vec<&str> = help_text.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Lemonade Help")
                .style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

fn get_help_text() -> String {
    r#"MAKING LEMONADE

Work your way around the stand one tap at a time:
  1. Tap the lemon tree to pick a lemon
  2. Keep tapping the lemon until it is fully squeezed
     (every lemon takes a different number of squeezes)
  3. Tap the glass of lemonade to drink it
  4. Tap the empty glass to start over

=== KEYS ===
Space/Enter     Tap the pictured item
Mouse click     Also counts as a tap
F1 or ?         Show this help
q               Quit application

=== RESOURCE PACKS ===
Start with a path argument to swap the pictures and prompts:
                lemonade my-pack.json
A pack is a JSON object with select, squeeze, drink and
empty_glass entries, each holding prompt, description and art.
A broken pack falls back to the built-in artwork.

=== HELP NAVIGATION ===
↑↓ or j/k       Scroll help text up/down one line
Page Up/Down    Scroll help text up/down 5 lines
Home            Jump to top of help text
Esc/F1/?/q      Close this help window"#
        .to_string()
}
