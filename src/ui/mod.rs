mod home;
mod menu;
mod picker;
mod quiz;
mod result;
mod upload;

use ratatui::{prelude::*, widgets::{Block, Paragraph}};

use crate::app::{App, NoticeLevel, Screen};

const SIDEBAR_WIDTH: u16 = 24;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let [sidebar, main] =
        Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Fill(1)]).areas(area);
    menu::render(frame, sidebar, app.page());

    let [content, notice, controls] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(main);

    let screen = app.screen();
    match screen {
        Screen::Home => home::render(frame, content),
        Screen::Picker => picker::render(frame, content, app),
        Screen::Upload => upload::render(frame, content, app),
        Screen::Quiz => quiz::render(frame, content, app),
        Screen::Results => result::render(frame, content, app),
    }

    render_notice(frame, notice, app);
    render_controls(frame, controls, screen);
}

fn render_notice(frame: &mut Frame, area: Rect, app: &App) {
    let Some(notice) = app.notice() else {
        return;
    };

    let (prefix, color) = match notice.level {
        NoticeLevel::Info => ("i", Color::Cyan),
        NoticeLevel::Success => ("+", Color::Green),
        NoticeLevel::Warning => ("!", Color::Yellow),
        NoticeLevel::Error => ("x", Color::Red),
    };

    let widget = Paragraph::new(Line::from(vec![
        Span::styled(format!(" {} ", prefix), Style::default().fg(color).bold()),
        Span::styled(notice.text.as_str(), Style::default().fg(color)),
    ]));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, screen: Screen) {
    let hint = match screen {
        Screen::Home => "enter start  ·  tab/1-3 switch view  ·  q quit",
        Screen::Picker => "j/k choose  ·  enter load  ·  r rescan  ·  tab switch view  ·  q quit",
        Screen::Upload => "type a path  ·  enter load  ·  esc clear  ·  tab switch view  ·  ctrl-c quit",
        Screen::Quiz => "a-d answer  ·  j/k + enter  ·  h/l prev/next  ·  f finish  ·  x discard  ·  q quit",
        Screen::Results => "j/k scroll  ·  u review unanswered  ·  r restart  ·  q quit",
    };

    let widget = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
