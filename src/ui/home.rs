use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

pub fn render(frame: &mut Frame, area: Rect) {
    let [_, body, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Max(72),
        Constraint::Fill(1),
    ])
    .areas(area);

    let heading = |text: &'static str| {
        Line::from(Span::styled(text, Style::default().fg(Color::Cyan).bold()))
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "STUDY QUIZ",
            Style::default().fg(Color::Cyan).bold(),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        heading("About"),
        Line::from("An interactive multiple-choice quiz for reviewing course material."),
        Line::from(""),
        heading("Features"),
        Line::from("  Quiz: question sets from the questions folder"),
        Line::from("  Immediate feedback: see right away whether you got it right"),
        Line::from("  Custom Study: load your own CSV file"),
        Line::from(""),
        heading("How to use"),
        Line::from("  1. Open Quiz and choose a subject, or load a file in Custom Study"),
        Line::from("  2. Answer the questions in any order"),
        Line::from("  3. Get feedback as soon as you pick an option"),
        Line::from("  4. Finish whenever you like and review your score"),
        Line::from(""),
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(Color::Green).bold(),
        ))
        .alignment(Alignment::Center),
        Line::from("to pick a question set".fg(Color::DarkGray)).alignment(Alignment::Center),
    ];

    let widget = Paragraph::new(content).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(2)),
    );

    frame.render_widget(widget, body);
}
