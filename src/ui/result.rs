use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::session::{QuestionOutcome, QuizSummary};

const QUESTION_PREVIEW_LENGTH: usize = 55;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let summary = app.session().summary();
    let grade_color = get_grade_color(summary.score_rate);

    let [score, unanswered, breakdown] = Layout::vertical([
        Constraint::Length(7),
        Constraint::Length(2),
        Constraint::Fill(1),
    ])
    .margin(1)
    .areas(area);

    render_score_summary(frame, score, &summary, grade_color);
    render_unanswered(frame, unanswered, &summary);
    render_question_breakdown(frame, breakdown, &summary.breakdown, app.result_scroll());
}

fn get_grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, summary: &QuizSummary, grade_color: Color) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} / {}  ({:.1}%)",
                summary.correct, summary.total, summary.score_rate
            ),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from(Span::styled(
            format!(
                "answered {} / {}  ·  completion {:.1}%  ·  accuracy {:.1}%",
                summary.answered, summary.total, summary.completion_rate, summary.accuracy_rate
            ),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_unanswered(frame: &mut Frame, area: Rect, summary: &QuizSummary) {
    let line = if summary.has_unanswered() {
        let numbers: Vec<String> = summary.unanswered.iter().map(|n| n.to_string()).collect();
        Line::from(vec![
            Span::styled(
                format!("Unanswered: {}", numbers.join(", ")),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled("  (u to review)", Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from("All questions answered.".fg(Color::Green))
    };

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_question_breakdown(
    frame: &mut Frame,
    area: Rect,
    outcomes: &[QuestionOutcome],
    scroll: usize,
) {
    let lines: Vec<Line> = outcomes
        .iter()
        .map(|outcome| {
            let (symbol, color) = match outcome.selected {
                None => ("?", Color::DarkGray),
                Some(_) if outcome.is_correct => ("+", Color::Green),
                Some(_) => ("-", Color::Red),
            };

            let answer = match outcome.selected {
                Some(selected) if outcome.is_correct => format!("{}", selected),
                Some(selected) => format!("{} (correct {})", selected, outcome.correct),
                None => format!("- (correct {})", outcome.correct),
            };

            Line::from(vec![
                Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
                Span::styled(
                    format!("{:2}. ", outcome.number),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{:<width$}  ", truncate_question(&outcome.prompt), width = QUESTION_PREVIEW_LENGTH + 3),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(answer, Style::default().fg(color)),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll_offset(scroll), 0));
    frame.render_widget(widget, area);
}

fn scroll_offset(scroll: usize) -> u16 {
    u16::try_from(scroll).unwrap_or(u16::MAX)
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_question() {
        assert_eq!(truncate_question("short"), "short");
        let long = "x".repeat(QUESTION_PREVIEW_LENGTH + 10);
        let truncated = truncate_question(&long);
        assert_eq!(truncated.chars().count(), QUESTION_PREVIEW_LENGTH + 3);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_scroll_offset_saturates() {
        assert_eq!(scroll_offset(12), 12);
        assert_eq!(scroll_offset(usize::from(u16::MAX) + 1), u16::MAX);
        assert_eq!(scroll_offset(usize::MAX), u16::MAX);
    }

    #[test]
    fn test_grade_colors() {
        assert_eq!(get_grade_color(100.0), Color::Green);
        assert_eq!(get_grade_color(75.0), Color::Cyan);
        assert_eq!(get_grade_color(50.0), Color::Yellow);
        assert_eq!(get_grade_color(0.0), Color::Red);
    }
}
