//! TUI rendering with ratatui
//!
//! Board tiles, countdown gauge, found/missed word lists, and the message log.

use super::app::{App, Message, MessageStyle};
use crate::session::{ROUND_TICKS, RoundState};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board + timer + messages
            Constraint::Percentage(50), // Word lists
        ])
        .split(chunks[1]);

    render_board_panel(f, app, main_chunks[0]);
    render_words_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔠 WORDGRID - Find the Words")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Timer gauge
            Constraint::Min(6),     // Board tiles
            Constraint::Length(7),  // Messages
        ])
        .split(area);

    render_timer(f, app, chunks[0]);
    render_board(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_timer(f: &mut Frame, app: &App, area: Rect) {
    let time_left = app.session.time_left();
    let ratio = f64::from(time_left) / f64::from(ROUND_TICKS);

    let color = if time_left <= 10 {
        Color::Red
    } else if time_left <= 25 {
        Color::Yellow
    } else {
        Color::Green
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Time Left ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{time_left}s"));

    f.render_widget(gauge, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let content: Vec<Line> = match app.session.grid() {
        Some(grid) => (0..grid.rows())
            .map(|row| {
                let tiles: Vec<Span> = grid
                    .row_letters(row)
                    .iter()
                    .map(|&c| {
                        Span::styled(
                            format!(" {} ", c.to_ascii_uppercase() as char),
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        )
                    })
                    .collect();
                Line::from(tiles).alignment(Alignment::Center)
            })
            .collect(),
        None => vec![
            Line::from(""),
            Line::from("Press 's' to start a round").alignment(Alignment::Center),
        ],
    };

    let board = Paragraph::new(content).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app.messages.iter().map(message_line).collect();

    let messages = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Messages ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(messages, area);
}

fn message_line(message: &Message) -> Line<'_> {
    let style = match message.style {
        MessageStyle::Info => Style::default().fg(Color::Gray),
        MessageStyle::Success => Style::default().fg(Color::Green),
        MessageStyle::Error => Style::default().fg(Color::Red),
    };
    Line::from(Span::styled(message.text.as_str(), style))
}

fn render_words_panel(f: &mut Frame, app: &App, area: Rect) {
    let show_missed = app.session.state() == RoundState::Ended;

    let constraints = if show_missed {
        vec![Constraint::Percentage(50), Constraint::Percentage(50)]
    } else {
        vec![Constraint::Percentage(100)]
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    render_found_words(f, app, chunks[0]);
    if show_missed {
        render_post_round_words(f, app, chunks[1]);
    }
}

fn render_found_words(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .session
        .found_words()
        .iter()
        .map(|word| ListItem::new(Span::styled(word.as_str(), Style::default().fg(Color::Green))))
        .collect();

    let title = format!(" Words Found ({}) ", app.session.found_words().len());
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(list, area);
}

fn render_post_round_words(f: &mut Frame, app: &App, area: Rect) {
    let (title, items): (String, Vec<ListItem>) = if app.show_all {
        (
            format!(" All Possible Words ({}) ", app.session.solutions().len()),
            app.session
                .solutions()
                .iter()
                .map(|word| {
                    ListItem::new(Span::styled(word.as_str(), Style::default().fg(Color::Cyan)))
                })
                .collect(),
        )
    } else {
        (
            format!(" Words You Missed ({}) ", app.session.missed_words().len()),
            app.session
                .missed_words()
                .iter()
                .map(|word| {
                    ListItem::new(Span::styled(word.as_str(), Style::default().fg(Color::Red)))
                })
                .collect(),
        )
    };

    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = if app.session.state() == RoundState::Running {
        (
            format!("> {}", app.input_buffer),
            Style::default().fg(Color::White),
        )
    } else {
        (
            "Input available while a round is running".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    };

    let input = Paragraph::new(text).style(style).block(
        Block::default()
            .title(" Your Word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let hints = match app.session.state() {
        RoundState::Running => "Enter: submit  |  Esc: stop round  |  Ctrl-C: quit",
        RoundState::Idle => "s/Enter: start round  |  q: quit",
        RoundState::Ended => "s: new round  |  a: toggle all words  |  q: quit",
    };

    let status = Paragraph::new(hints)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(status, area);
}
