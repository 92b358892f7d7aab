use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};

use super::app::{App, Focus};

pub fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let location = app
        .engine
        .renderer()
        .location
        .as_deref()
        .unwrap_or("Somewhere");

    let header = Paragraph::new(Span::styled(
        location,
        Style::default().fg(Color::White).bold(),
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );
    frame.render_widget(header, area);
}

pub fn draw_description(frame: &mut Frame, app: &App, area: Rect) {
    let text = app.engine.renderer().description.as_str();
    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        );
    frame.render_widget(paragraph, area);
}

pub fn draw_menus(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let screen = app.engine.renderer();

    draw_menu(
        frame,
        " Actions ",
        &screen.actions,
        app.action_cursor,
        app.focus == Focus::Actions,
        chunks[0],
    );

    if screen.bag.is_empty() {
        let empty = Paragraph::new(Span::styled(
            app.engine.config().empty_bag_text.as_str(),
            Style::default().fg(Color::DarkGray).italic(),
        ))
        .block(
            Block::default()
                .title(" Bag ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(empty, chunks[1]);
    } else {
        draw_menu(
            frame,
            " Bag ",
            &screen.bag,
            app.bag_cursor,
            app.focus == Focus::Bag,
            chunks[1],
        );
    }
}

fn draw_menu(
    frame: &mut Frame,
    title: &str,
    entries: &[String],
    cursor: usize,
    focused: bool,
    area: Rect,
) {
    let items: Vec<ListItem> = entries
        .iter()
        .enumerate()
        .map(|(i, label)| {
            // The placeholder reads as a prompt, not a choice.
            let style = if i == 0 {
                Style::default().fg(Color::DarkGray).italic()
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Span::styled(label.as_str(), style))
        })
        .collect();

    let border = if focused { Color::Cyan } else { Color::DarkGray };
    let mut list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    if focused {
        list = list
            .highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White).bold())
            .highlight_symbol("▶ ");
    }

    let mut state = ListState::default();
    state.select(Some(cursor));

    frame.render_stateful_widget(list, area, &mut state);
}

pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (status, style) = match &app.message {
        Some(message) => (
            message.clone(),
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ),
        None => (
            format!(
                "{} | j/k:navigate Enter:select Tab:bag ?:help q:quit",
                app.engine.session().current_state()
            ),
            Style::default().fg(Color::Black).bg(Color::White),
        ),
    };

    frame.render_widget(Paragraph::new(status).style(style), area);
}

pub fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(50, 50, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("  j / ↓       Move down"),
        Line::from("  k / ↑       Move up"),
        Line::from("  Enter       Take action / use item"),
        Line::from("  Tab         Switch between actions and bag"),
        Line::from("  ?           Toggle this help"),
        Line::from("  q           Quit"),
        Line::from("  Ctrl+C      Force quit"),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
