use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{OptionKey, Question};
use crate::session::{Feedback, SessionState};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let Some(question) = session.current_question() else {
        return;
    };

    let [header, progress, prompt, options, feedback] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(3),
    ])
    .margin(1)
    .areas(area);

    render_header(frame, header, session);
    render_progress(frame, progress, session);
    render_question_text(frame, prompt, &question.prompt);
    render_options(frame, options, question, session, app.option_cursor());

    if let Some(feedback_entry) = session.feedback_for(session.current_index()) {
        render_feedback(frame, feedback, feedback_entry);
    }
}

fn render_header(frame: &mut Frame, area: Rect, session: &SessionState) {
    let set_name = session
        .question_set()
        .map(|set| set.name.as_str())
        .unwrap_or_default();

    let [left, right] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(area);

    let title = format!(
        "Question {} of {}",
        session.current_index() + 1,
        session.total()
    );
    frame.render_widget(Paragraph::new(title).fg(Color::Cyan).bold(), left);
    frame.render_widget(
        Paragraph::new(set_name)
            .alignment(Alignment::Right)
            .fg(Color::DarkGray),
        right,
    );
}

fn render_progress(frame: &mut Frame, area: Rect, session: &SessionState) {
    let label = format!(
        "{}/{} questions  ·  {} answered",
        session.current_index() + 1,
        session.total(),
        session.answered_count()
    );

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .ratio(session.progress().clamp(0.0, 1.0))
        .label(label);
    let [bar, _] = Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);
    frame.render_widget(gauge, bar);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    question: &Question,
    session: &SessionState,
    cursor: usize,
) {
    let answered = session.answer_for(session.current_index());
    let mut lines: Vec<Line> = Vec::with_capacity(OptionKey::ALL.len() * 2);

    for key in OptionKey::ALL {
        let is_cursor = key.index() == cursor;
        let style = match answered {
            Some(selected) if selected == key && question.is_correct(key) => {
                Style::default().fg(Color::Green).bold()
            }
            Some(selected) if selected == key => Style::default().fg(Color::Red).bold(),
            _ if is_cursor => Style::default().fg(Color::Cyan).bold(),
            _ => Style::default().fg(Color::Gray),
        };
        let marker = if is_cursor { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", key), style),
            Span::styled(question.option(key), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_feedback(frame: &mut Frame, area: Rect, feedback: &Feedback) {
    let (symbol, color) = if feedback.is_correct {
        ("+", Color::Green)
    } else {
        ("-", Color::Red)
    };

    let widget = Paragraph::new(Line::from(vec![
        Span::styled(format!(" {} ", symbol), Style::default().fg(color).bold()),
        Span::styled(feedback.message.as_str(), Style::default().fg(color)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(color)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}
