use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::models::Page;

pub fn render(frame: &mut Frame, area: Rect, active: Page) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "STUDY QUIZ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from("Navigation".fg(Color::DarkGray)),
        Line::from(""),
    ];

    for (index, page) in Page::ALL.iter().enumerate() {
        let is_active = *page == active;
        let style = if is_active {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_active { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!("{} ", marker), style),
            Span::styled(format!("{}. ", index + 1), Style::default().fg(Color::DarkGray)),
            Span::styled(page.title(), style),
        ]));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::RIGHT)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}
