use crate::game::{Board, Cell, GameOutcome, GameState, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: &Option<String>,
    color: bool,
) {
    let board_height = (game_state.board().rows() as u16).saturating_add(4);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Header
            Constraint::Min(board_height), // Board
            Constraint::Length(3),         // Message
            Constraint::Length(3),         // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, chunks[0]);
    render_board(frame, game_state.board(), selected_column, color, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, game_state: &GameState, area: Rect) {
    let current_player = game_state.current_player();
    let board = game_state.board();

    let (status, color) = match game_state.outcome() {
        Some(GameOutcome::Winner(player)) => (
            format!("Game Over  |  {} won", player.name()),
            player_color(player),
        ),
        Some(GameOutcome::Draw) => ("Game Over  |  Draw".to_string(), Color::White),
        None => (
            format!(
                "Current Player: {}  |  {} in a row to win",
                current_player.name(),
                board.required_to_win()
            ),
            player_color(current_player),
        ),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn cell_span(cell: Cell, color: bool) -> Span<'static> {
    if !color {
        return Span::raw(format!(" {} ", cell.symbol()));
    }
    match cell {
        Cell::Empty => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
        Cell::Red => Span::styled(" \u{25cf} ", Style::default().fg(Color::Red)),
        Cell::Yellow => Span::styled(" \u{25cf} ", Style::default().fg(Color::Yellow)),
    }
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    selected_column: usize,
    color: bool,
    area: Rect,
) {
    let cols = board.cols();
    let width = cols.saturating_sub(1).to_string().len();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..cols {
        let label = format!(" {col:>width$} ");
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    let cell_width = width + 2;
    let rule = "\u{2550}".repeat(cols * cell_width + 1);
    lines.push(Line::from(format!("  \u{2554}{rule}\u{2557}")));

    for row in (0..board.rows()).rev() {
        let mut row_spans = vec![Span::raw("  \u{2551}")];
        for col in 0..cols {
            let cell = board.get(col, row).unwrap_or(Cell::Empty);
            let mut span = cell_span(cell, color);
            if width > 1 {
                span.content = format!("{:^cell_width$}", span.content.trim()).into();
            }
            row_spans.push(span);
        }
        row_spans.push(Span::raw(" \u{2551}"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  \u{255a}{rule}\u{255d}")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..cols {
        if col == selected_column {
            indicator_line.push(Span::styled(
                format!("{:^cell_width$}", "\u{25b2}"),
                Style::default().fg(Color::Cyan),
            ));
        } else {
            indicator_line.push(Span::raw(" ".repeat(cell_width)));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let text = "\u{2190}/\u{2192}: Move  |  Enter: Drop  |  R: Reset  |  Q: Quit";
    let controls = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
