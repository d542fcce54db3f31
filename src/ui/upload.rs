use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;
use crate::data::FORMAT_HELP;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let [title, help, input, _] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(7),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .margin(1)
    .areas(area);

    frame.render_widget(
        Paragraph::new("CUSTOM STUDY").fg(Color::Cyan).bold(),
        title,
    );

    let mut lines = vec![
        Line::from("Load your own questions from a CSV file.".fg(Color::White)),
        Line::from(""),
    ];
    lines.extend(FORMAT_HELP.lines().map(|line| Line::from(line.fg(Color::Gray))));
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), help);

    render_path_input(frame, input, app.path_input());
}

fn render_path_input(frame: &mut Frame, area: Rect, value: &str) {
    let widget = Paragraph::new(format!("> {}", value))
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" File path ")
                .title_style(Style::default().fg(Color::Gray)),
        );
    frame.render_widget(widget, area);

    // Past the right border the cursor is pinned to the last inner column.
    let typed = u16::try_from(value.chars().count()).unwrap_or(u16::MAX);
    let cursor_x = area
        .x
        .saturating_add(3)
        .saturating_add(typed)
        .min(area.right().saturating_sub(2));
    let cursor_y = area.y.saturating_add(1);
    frame.set_cursor_position(Position::new(cursor_x, cursor_y));
}
