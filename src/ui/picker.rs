use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::app::{App, Catalog};
use crate::data::FORMAT_HELP;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let [title, body] = Layout::vertical([Constraint::Length(2), Constraint::Fill(1)])
        .margin(1)
        .areas(area);

    frame.render_widget(
        Paragraph::new("QUIZ").fg(Color::Cyan).bold(),
        title,
    );

    let folder = app.questions_dir().display().to_string();
    match app.catalog() {
        Catalog::Missing => render_message(
            frame,
            body,
            format!("Folder '{}' does not exist.", folder),
            Some(format!("Create it and add CSV files with questions.\n\n{}", FORMAT_HELP)),
        ),
        Catalog::Unreadable(error) => render_message(frame, body, error.clone(), None),
        Catalog::Ready(sources) if sources.is_empty() => render_message(
            frame,
            body,
            format!("No CSV files found in '{}'.", folder),
            Some(FORMAT_HELP.to_string()),
        ),
        Catalog::Ready(sources) => {
            let items: Vec<ListItem> = sources
                .iter()
                .map(|source| ListItem::new(format!(" {}", source.name)))
                .collect();

            let list = List::new(items)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Color::DarkGray)
                        .title(" Choose a subject ")
                        .title_style(Style::default().fg(Color::Gray)),
                )
                .style(Style::default().fg(Color::Gray))
                .highlight_style(Style::default().fg(Color::Cyan).bold())
                .highlight_symbol(">");

            let mut state = ListState::default().with_selected(Some(app.catalog_cursor()));
            frame.render_stateful_widget(list, body, &mut state);
        }
    }
}

fn render_message(frame: &mut Frame, area: Rect, warning: String, help: Option<String>) {
    let mut lines = vec![Line::from(Span::styled(
        warning,
        Style::default().fg(Color::Yellow).bold(),
    ))];

    if let Some(help) = help {
        lines.push(Line::from(""));
        lines.extend(
            help.lines()
                .map(|line| Line::from(Span::styled(line.to_string(), Style::default().fg(Color::Gray)))),
        );
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}
