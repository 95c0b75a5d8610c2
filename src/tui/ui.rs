//! Stateless UI rendering for the trivia board.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};
use strictly_jeopardy::BoardView;

use super::app::App;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title and start control
            Constraint::Min(8),    // Board
            Constraint::Length(5), // Selected clue
            Constraint::Length(3), // Status
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], app);

    match app.view() {
        Some(view) => draw_board(frame, chunks[1], view, app),
        None => {
            let placeholder = if app.is_loading() {
                "Fetching categories..."
            } else {
                "No board yet."
            };
            let paragraph = Paragraph::new(placeholder)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(paragraph, chunks[1]);
        }
    }

    let detail = Paragraph::new(app.selected_text().unwrap_or(""))
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Clue").borders(Borders::ALL));
    frame.render_widget(detail, chunks[2]);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let button_style = if app.is_loading() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    };

    let line = Line::from(vec![
        Span::styled(
            "Strictly Jeopardy",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(format!(" {} ", app.start_label()), button_style),
    ]);

    let header = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &BoardView, app: &App) {
    let columns = view.columns().max(1);
    let widths = vec![Constraint::Ratio(1, columns as u32); columns];
    let cursor = app.cursor();

    let header = Row::new(view.titles.iter().map(|title| {
        Cell::from(title.to_uppercase())
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    }))
    .height(2);

    let rows = (0..view.rows()).map(|clue| {
        let cells = (0..view.columns()).map(|category| {
            let (text, mut style) = match view.cell(category, clue) {
                None => (String::new(), Style::default()),
                Some(cell) if cell.disabled => (
                    cell.text.clone().unwrap_or_default(),
                    Style::default().fg(Color::DarkGray),
                ),
                Some(cell) => match &cell.text {
                    Some(text) => (text.clone(), Style::default().fg(Color::White)),
                    None => ("?".to_string(), Style::default().fg(Color::Blue)),
                },
            };
            if cursor.category == category && cursor.clue == clue {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Cell::from(text).style(style)
        });
        Row::new(cells).height(2)
    });

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(table, area);
}
