//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::{Feedback, WORD_LEN};
use crate::game::{MAX_TURNS, Tile};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(15), // Board
            Constraint::Length(5),  // Keyboard
            Constraint::Length(3),  // Message
            Constraint::Min(0),     // Summary
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_message(f, app, chunks[3]);
    if app.game.is_complete() {
        render_summary(f, app, chunks[4]);
    }
}

fn feedback_style(feedback: Option<Feedback>) -> Style {
    let bg = match feedback {
        Some(Feedback::Correct) => Color::LightGreen,
        Some(Feedback::Present) => Color::LightYellow,
        Some(Feedback::Absent) => Color::DarkGray,
        None => Color::Reset,
    };
    Style::default()
        .fg(Color::White)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!("Wordle {}", app.game.day()))
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

/// Board lines: played rows, the row being typed, then blanks
fn board_lines(app: &App) -> Vec<Line<'static>> {
    let typing_row = (!app.game.is_complete()).then(|| app.game.current_turn());
    let mut lines = Vec::new();

    for (r, row) in app.game.board().iter().enumerate() {
        let cells: Vec<Span> = if typing_row == Some(r) {
            let typed = app.input_buffer.as_bytes();
            (0..WORD_LEN)
                .map(|i| {
                    let letter = typed.get(i).map_or('_', |&c| char::from(c));
                    Span::styled(
                        format!(" {} ", letter.to_ascii_uppercase()),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )
                })
                .collect()
        } else {
            row.iter()
                .map(|tile| match *tile {
                    Tile::Empty => Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
                    Tile::Filled { letter, feedback } => Span::styled(
                        format!(" {} ", char::from(letter).to_ascii_uppercase()),
                        feedback_style(Some(feedback)),
                    ),
                })
                .collect()
        };

        let mut spaced = Vec::with_capacity(cells.len() * 2);
        for cell in cells {
            spaced.push(cell);
            spaced.push(Span::raw(" "));
        }
        lines.push(Line::from(spaced));
        lines.push(Line::from(""));
    }

    lines
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let board = Paragraph::new(board_lines(app))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" Turn {}/{MAX_TURNS} ", app.game.current_turn()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn keyboard_lines(app: &App) -> Vec<Line<'static>> {
    let states = app.game.letter_states();

    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .map(|c| {
                    let state = states[usize::from(c - b'a')];
                    Span::styled(
                        format!(" {} ", char::from(c).to_ascii_uppercase()),
                        feedback_style(state),
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = Paragraph::new(keyboard_lines(app))
        .alignment(Alignment::Center)
        .block(Block::default().title(" Letters ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_message(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = app.message.as_ref().map_or((String::new(), Style::default()), |msg| {
        let color = match msg.style {
            MessageStyle::Info => Color::White,
            MessageStyle::Success => Color::Green,
            MessageStyle::Error => Color::Red,
        };
        (msg.text.clone(), Style::default().fg(color))
    });

    let message = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double),
        );
    f.render_widget(message, area);
}

fn render_summary(f: &mut Frame, app: &App, area: Rect) {
    let summary = app.game.summary();
    let mut lines = vec![Line::from(summary.header()), Line::from("")];
    lines.extend(summary.rows.iter().map(|row| Line::from(row.to_emoji())));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Share ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FeedbackRule;
    use crate::game::GameConfig;
    use crate::wordlists::WordBank;
    use crate::wordlists::loader::words_from_slice;
    use ratatui::{Terminal, backend::TestBackend};

    fn app() -> App {
        let bank = WordBank::from_lists(
            words_from_slice(&["cigar"]),
            words_from_slice(&["crane"]),
        )
        .unwrap();
        App::new(GameConfig {
            day: 12,
            rule: FeedbackRule::Containment,
            bank,
        })
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn typing_row_shows_buffer() {
        let mut app = app();
        app.input_buffer = "cr".to_string();

        let lines = board_lines(&app);
        assert_eq!(lines.len(), 12);
        assert_eq!(line_text(&lines[0]).trim_end(), " C   R   _   _   _");
    }

    #[test]
    fn keyboard_colors_played_letters() {
        let mut app = app();
        app.input_buffer = "crane".to_string();
        app.submit_guess();

        let lines = keyboard_lines(&app);
        let top = &lines[0];
        // "r" is the 4th key on the top row and is present in CIGAR
        assert_eq!(top.spans[3].style.bg, Some(Color::LightYellow));
        // "q" has not been played
        assert_eq!(top.spans[0].style.bg, Some(Color::Reset));
        let bottom = &lines[2];
        // "c" is the 3rd key on the bottom row and is correct
        assert_eq!(bottom.spans[2].style.bg, Some(Color::LightGreen));
    }

    #[test]
    fn full_frame_renders() {
        let mut app = app();
        app.input_buffer = "cigar".to_string();
        app.submit_guess();

        let mut terminal = Terminal::new(TestBackend::new(60, 40)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Wordle 12"));
        assert!(text.contains("Wordle 12 1/6"));
    }
}
