use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color as TermColor, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, Screen};
use crate::game::{Color, GameSession, SessionState};

pub fn ui(f: &mut Frame, app: &App) {
    match app.screen {
        Screen::Menu => render_menu(f, app),
        Screen::Game => render_game(f, app),
        Screen::Resize => render_resize(f, app),
    }
}

/// Terminal color for a cell color. Lives here so the game core never
/// depends on the drawing stack.
fn cell_color(color: Color) -> TermColor {
    match color {
        Color::Red => TermColor::Red,
        Color::Blue => TermColor::Blue,
        Color::Green => TermColor::Green,
        Color::Yellow => TermColor::Yellow,
        Color::Cyan => TermColor::Cyan,
        Color::Magenta => TermColor::Magenta,
    }
}

fn boxed_rect(width: u16, height: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(height),
            Constraint::Min(1),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(width),
            Constraint::Min(1),
        ])
        .split(vertical[1])[1]
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

fn render_menu(f: &mut Frame, app: &App) {
    let area = boxed_rect(48, 14, f.size());

    let best_line = match app.best_score() {
        Some(best) => Line::from(format!("Best score: {}", best)),
        None => Line::from("No games have been played yet."),
    };

    let menu_text = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled(
            "Main Menu",
            Style::default().fg(TermColor::Cyan),
        )]),
        Line::from(vec![Span::raw("")]),
        Line::from("s = Start Game"),
        Line::from("c = Change Size"),
        Line::from("q = Quit"),
        Line::from(vec![Span::raw("")]),
        Line::from(format!("Board: {} x {}", app.cols, app.rows)),
        Line::from(vec![Span::raw("")]),
        best_line,
    ];

    let menu_widget = Paragraph::new(menu_text)
        .block(Block::default().borders(Borders::ALL).title(" Flood it ! "))
        .alignment(Alignment::Center);

    f.render_widget(menu_widget, area);
}

fn render_game(f: &mut Frame, app: &App) {
    let Some(session) = app.session.as_ref() else {
        return;
    };

    let board = session.board();
    let board_height = board.rows() as u16 + 2; // rows + borders
    let board_width = board.cols() as u16 * 2 + 2; // 2 chars per cell + borders

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(board_height.max(12)),
            Constraint::Length(1), // status line
            Constraint::Min(1),
        ])
        .split(f.size());

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(board_width),
            Constraint::Length(22),
            Constraint::Min(1),
        ])
        .split(vertical_chunks[1]);

    let board_area = horizontal_chunks[1];
    let info_area = horizontal_chunks[2];

    render_board(f, session, board_area);
    render_info(f, session, info_area);
    render_status_line(f, app, vertical_chunks[2]);

    if session.state() == SessionState::Won {
        render_won_overlay(f, session, board_area);
    }
}

fn render_board(f: &mut Frame, session: &GameSession, area: Rect) {
    let board = session.board();
    let mut board_lines = Vec::new();

    for row in 0..board.rows() {
        let mut line_spans = Vec::new();
        for col in 0..board.cols() {
            let color = cell_color(board.get(row, col));
            line_spans.push(Span::styled("██", Style::default().fg(color)));
        }
        board_lines.push(Line::from(line_spans));
    }

    let board_widget = Paragraph::new(board_lines)
        .block(Block::default().borders(Borders::ALL).title("floodit"));

    f.render_widget(board_widget, area);
}

fn render_info(f: &mut Frame, session: &GameSession, area: Rect) {
    let legend_height = session.palette().len() as u16 + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(legend_height),
            Constraint::Min(1),
        ])
        .split(area);

    let best_text = match session.best_score() {
        Some(best) => format!("Best: {}", best),
        None => "Best: -".to_string(),
    };
    let stats_text = vec![
        Line::from(format!("Turns: {}", session.turns())),
        Line::from(vec![Span::raw("")]),
        Line::from(format!("Flooded: {}%", session.completion_percent())),
        Line::from(vec![Span::raw("")]),
        Line::from(best_text),
    ];

    let stats_widget = Paragraph::new(stats_text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(stats_widget, chunks[0]);

    let mut legend_lines = Vec::new();
    for &color in session.palette() {
        legend_lines.push(Line::from(vec![
            Span::styled("██ ", Style::default().fg(cell_color(color))),
            Span::raw(format!("{} = {}", color.token(), color.name())),
        ]));
    }

    let legend_widget = Paragraph::new(legend_lines)
        .block(Block::default().borders(Borders::ALL).title("Key"));

    f.render_widget(legend_widget, chunks[1]);
}

fn render_status_line(f: &mut Frame, app: &App, area: Rect) {
    let status = match &app.message {
        Some(message) => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(TermColor::Yellow),
        )),
        None => Line::from("Type a color letter to flood it, q to give up."),
    };

    let status_widget = Paragraph::new(status).alignment(Alignment::Center);
    f.render_widget(status_widget, area);
}

fn render_won_overlay(f: &mut Frame, session: &GameSession, area: Rect) {
    let popup_area = centered_rect(70, 60, area);
    f.render_widget(Clear, popup_area);

    let best_text = match session.best_score() {
        Some(best) => format!("Best score: {}", best),
        None => String::new(),
    };

    let won_text = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled(
            "You flooded the board!",
            Style::default().fg(TermColor::Green),
        )]),
        Line::from(vec![Span::raw("")]),
        Line::from(format!("Turns: {}", session.turns())),
        Line::from(best_text),
        Line::from(vec![Span::raw("")]),
        Line::from("n = new game"),
        Line::from("m = main menu"),
        Line::from("q = quit"),
    ];

    let won_widget = Paragraph::new(won_text)
        .block(Block::default().borders(Borders::ALL).title("Solved"))
        .alignment(Alignment::Center);

    f.render_widget(won_widget, popup_area);
}

fn render_resize(f: &mut Frame, app: &App) {
    let area = boxed_rect(48, 12, f.size());

    let resize_text = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled(
            "Change Size",
            Style::default().fg(TermColor::Cyan),
        )]),
        Line::from(vec![Span::raw("")]),
        Line::from(format!("Board: {} x {}", app.pending_cols, app.pending_rows)),
        Line::from(vec![Span::raw("")]),
        Line::from("Left/Right adjust width"),
        Line::from("Up/Down adjust height"),
        Line::from("Enter = apply   Esc = cancel"),
        Line::from(vec![Span::raw("")]),
        Line::from("Changing size resets the best score."),
    ];

    let resize_widget = Paragraph::new(resize_text)
        .block(Block::default().borders(Borders::ALL).title(" Flood it ! "))
        .alignment(Alignment::Center);

    f.render_widget(resize_widget, area);
}
