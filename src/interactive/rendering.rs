//! TUI rendering with ratatui
//!
//! Draws the round and records where every clickable control landed, so
//! mouse clicks can be resolved against the frame the player actually saw.

use super::app::{App, MessageStyle};
use super::hit_map::{Control, HitMap};
use crate::core::{Letter, MAX_WRONG, Outcome, Round};
use crate::output::formatters::{NO_WRONG_GUESSES, masked_word, wrong_letters};
use crate::output::gallows::gallows;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph},
};

/// Letters per keyboard row
const KEYS_PER_ROW: usize = 13;
/// Width of one key label, e.g. ` A `
const KEY_WIDTH: u16 = 3;
/// Columns between the start of two neighbouring keys
const KEY_STRIDE: u16 = KEY_WIDTH + 1;

const NEW_GAME_LABEL: &str = "[ New Game ]";
const GIVE_UP_LABEL: &str = "[ Give Up (Reveal) ]";
const PLAY_AGAIN_LABEL: &str = "[ Play Again ]";
const BUTTON_GAP: u16 = 2;

/// Main UI rendering function
///
/// Returns the clickable regions of this frame.
pub fn ui(f: &mut Frame, app: &App) -> HitMap {
    let mut hits = HitMap::default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(18),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35), // Gallows and attempts
            Constraint::Percentage(65), // Word, keyboard, controls
        ])
        .split(chunks[1]);

    render_left_panel(f, &app.round, main_chunks[0]);
    render_right_panel(f, app, main_chunks[1], &mut hits);

    render_status(f, app, chunks[2]);

    if app.round.outcome().is_over() {
        // Modal: nothing underneath stays clickable
        hits.clear();
        let area = f.area();
        render_overlay(f, &app.round, area, &mut hits);
    }

    hits
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "HANGMAN",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  Guess the word: type letters or click the keys"),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_left_panel(f: &mut Frame, round: &Round, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(9),    // Gallows
            Constraint::Length(4), // Wrong guesses
            Constraint::Length(3), // Attempts gauge
        ])
        .split(area);

    render_gallows(f, round, chunks[0]);
    render_info(f, round, chunks[1]);
    render_attempts(f, round, chunks[2]);
}

fn render_gallows(f: &mut Frame, round: &Round, area: Rect) {
    let color = match round.outcome() {
        Outcome::Lost => Color::Red,
        Outcome::Won => Color::Green,
        Outcome::Playing => Color::White,
    };
    let lines: Vec<Line> = gallows(round.wrong_count())
        .into_iter()
        .map(Line::from)
        .collect();

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Gallows ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_info(f: &mut Frame, round: &Round, area: Rect) {
    let wrong = wrong_letters(round);
    let wrong_style = if wrong == NO_WRONG_GUESSES {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    };

    let content = vec![
        Line::from(vec![Span::raw("Wrong guesses: "), Span::styled(wrong, wrong_style)]),
        Line::from(format!("Attempts left: {}", round.attempts_left())),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_attempts(f: &mut Frame, round: &Round, area: Rect) {
    let left = round.attempts_left();
    let color = match left {
        0..=1 => Color::Red,
        2..=3 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(color))
        .percent((left * 100 / MAX_WRONG) as u16)
        .label(format!("{left}/{MAX_WRONG} attempts"));
    f.render_widget(gauge, area);
}

fn render_right_panel(f: &mut Frame, app: &App, area: Rect, hits: &mut HitMap) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Word
            Constraint::Length(4), // Keyboard (two rows)
            Constraint::Length(3), // Controls
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_word(f, &app.round, chunks[0]);
    render_keyboard(f, &app.round, chunks[1], hits);
    render_controls(f, &app.round, chunks[2], hits);
    render_messages(f, app, chunks[3]);
}

fn render_word(f: &mut Frame, round: &Round, area: Rect) {
    let paragraph = Paragraph::new(masked_word(round))
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn key_style(round: &Round, letter: Letter) -> Style {
    if round.is_guessed(letter) {
        if round.target().has_letter(letter) {
            Style::default().fg(Color::Green).add_modifier(Modifier::DIM)
        } else {
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::DIM | Modifier::CROSSED_OUT)
        }
    } else if round.outcome().is_over() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD)
    }
}

fn render_keyboard(f: &mut Frame, round: &Round, area: Rect, hits: &mut HitMap) {
    let block = Block::default().title(" Keyboard ").borders(Borders::ALL);
    let inner = block.inner(area);

    let mut lines = Vec::new();
    for (row, letters) in Letter::ALPHABET.chunks(KEYS_PER_ROW).enumerate() {
        let mut spans = Vec::with_capacity(letters.len() * 2);
        for (col, &letter) in letters.iter().enumerate() {
            spans.push(Span::styled(format!(" {letter} "), key_style(round, letter)));
            spans.push(Span::raw(" "));

            let key_area = Rect::new(
                inner.x + col as u16 * KEY_STRIDE,
                inner.y + row as u16,
                KEY_WIDTH,
                1,
            );
            if round.can_guess(letter) && fits(key_area, inner) {
                hits.push(key_area, Control::Key(letter));
            }
        }
        lines.push(Line::from(spans));
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_controls(f: &mut Frame, round: &Round, area: Rect, hits: &mut HitMap) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);

    let playing = round.outcome() == Outcome::Playing;
    let give_up_style = if playing {
        Style::default().fg(Color::Magenta)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let line = Line::from(vec![
        Span::styled(
            NEW_GAME_LABEL,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(BUTTON_GAP as usize)),
        Span::styled(GIVE_UP_LABEL, give_up_style),
    ]);
    f.render_widget(Paragraph::new(line).block(block), area);

    let new_game = Rect::new(inner.x, inner.y, NEW_GAME_LABEL.len() as u16, 1);
    if fits(new_game, inner) {
        hits.push(new_game, Control::NewGame);
    }

    let give_up = Rect::new(
        new_game.right() + BUTTON_GAP,
        inner.y,
        GIVE_UP_LABEL.len() as u16,
        1,
    );
    if playing && fits(give_up, inner) {
        hits.push(give_up, Control::GiveUp);
    }
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(30),
            Constraint::Percentage(45),
        ])
        .split(area);

    let mode_text = match app.round.outcome() {
        Outcome::Playing => "Round: Playing",
        Outcome::Won => "Round: Won",
        Outcome::Lost => "Round: Lost",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if app.round.outcome().is_over() {
        "Enter: Play Again | Esc: Quit"
    } else {
        "A-Z Guess | ^N New | ^G Give Up | Esc Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_overlay(f: &mut Frame, round: &Round, area: Rect, hits: &mut HitMap) {
    let (title, color) = match round.outcome() {
        Outcome::Won => ("🎉 You won! 🎉", Color::Green),
        _ => ("☠ You lost! ☠", Color::Red),
    };

    let popup = centered_rect(44, 9, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .style(Style::default().fg(color));
    let inner = block.inner(popup);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("The word was: "),
            Span::styled(
                round.target().text(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(content)
            .alignment(Alignment::Center)
            .block(block),
        popup,
    );

    let label_width = PLAY_AGAIN_LABEL.len() as u16;
    let button = Rect::new(
        inner.x + inner.width.saturating_sub(label_width) / 2,
        inner.y + inner.height.saturating_sub(2),
        label_width,
        1,
    );
    if fits(button, inner) {
        f.render_widget(
            Paragraph::new(PLAY_AGAIN_LABEL).style(
                Style::default()
                    .fg(Color::Black)
                    .bg(color)
                    .add_modifier(Modifier::BOLD),
            ),
            button,
        );
        hits.push(button, Control::PlayAgain);
    }
}

/// A `width` x `height` rectangle centered in `area`, shrunk to fit
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn fits(inner: Rect, outer: Rect) -> bool {
    outer.intersection(inner) == inner
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ScriptedPicker, Target};
    use crate::wordlists::WordList;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn app_for(word: &str, letters: &str) -> App {
        let mut app = App::new(
            WordList::new(vec![Target::new(word).unwrap()]).unwrap(),
            Box::new(ScriptedPicker::default()),
        );
        for letter in letters.chars().filter_map(Letter::from_input) {
            app.guess(letter);
        }
        app
    }

    fn render(app: &App, width: u16, height: u16) -> (Buffer, HitMap) {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let mut hits = HitMap::default();
        terminal.draw(|f| hits = ui(f, app)).unwrap();
        (terminal.backend().buffer().clone(), hits)
    }

    fn screen_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn text_at(buffer: &Buffer, area: Rect) -> String {
        (area.left()..area.right())
            .map(|x| buffer[(x, area.y)].symbol())
            .collect()
    }

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn shows_masked_word_and_placeholder() {
        let app = app_for("REACT", "");
        let (buffer, _) = render(&app, 100, 34);
        let text = screen_text(&buffer);

        assert!(text.contains("_ _ _ _ _"));
        assert!(text.contains("Wrong guesses: —"));
        assert!(text.contains("Attempts left: 6"));
    }

    #[test]
    fn shows_wrong_guesses_and_attempts() {
        let app = app_for("REACT", "qwxe");
        let (buffer, _) = render(&app, 100, 34);
        let text = screen_text(&buffer);

        assert!(text.contains("_ E _ _ _"));
        assert!(text.contains("Wrong guesses: Q, W, X"));
        assert!(text.contains("Attempts left: 3"));
    }

    #[test]
    fn punctuation_always_visible() {
        let app = app_for("E-MAIL", "");
        let (buffer, _) = render(&app, 100, 34);
        assert!(screen_text(&buffer).contains("_ - _ _ _ _"));
    }

    #[test]
    fn gallows_grows_with_wrong_guesses() {
        let (empty, _) = render(&app_for("VITE", ""), 100, 34);
        let (two, _) = render(&app_for("VITE", "qw"), 100, 34);

        assert!(!screen_text(&empty).contains("O   |"));
        assert!(screen_text(&two).contains("O   |"));
    }

    #[test]
    fn every_letter_clickable_at_start() {
        let app = app_for("VITE", "");
        let (buffer, hits) = render(&app, 100, 34);

        for letter in Letter::ALPHABET {
            let area = hits
                .area_of(Control::Key(letter))
                .unwrap_or_else(|| panic!("{letter} not clickable"));
            assert_eq!(text_at(&buffer, area), format!(" {letter} "));
        }
        assert!(hits.area_of(Control::NewGame).is_some());
        assert!(hits.area_of(Control::GiveUp).is_some());
    }

    #[test]
    fn guessed_keys_disabled() {
        let app = app_for("VITE", "vq");
        let (_, hits) = render(&app, 100, 34);

        assert_eq!(hits.area_of(Control::Key(letter('V'))), None);
        assert_eq!(hits.area_of(Control::Key(letter('Q'))), None);
        assert!(hits.area_of(Control::Key(letter('I'))).is_some());
    }

    #[test]
    fn button_regions_match_labels() {
        let app = app_for("VITE", "");
        let (buffer, hits) = render(&app, 100, 34);

        let new_game = hits.area_of(Control::NewGame).unwrap();
        let give_up = hits.area_of(Control::GiveUp).unwrap();
        assert_eq!(text_at(&buffer, new_game), NEW_GAME_LABEL);
        assert_eq!(text_at(&buffer, give_up), GIVE_UP_LABEL);
    }

    #[test]
    fn win_overlay_announces_word() {
        let app = app_for("VITE", "vite");
        let (buffer, hits) = render(&app, 100, 34);
        let text = screen_text(&buffer);

        assert!(text.contains("You won!"));
        assert!(text.contains("The word was: VITE"));

        let play_again = hits.area_of(Control::PlayAgain).unwrap();
        assert_eq!(text_at(&buffer, play_again), PLAY_AGAIN_LABEL);
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn loss_overlay_and_full_gallows() {
        let app = app_for("VITE", "qwxyzb");
        let (buffer, hits) = render(&app, 100, 34);
        let text = screen_text(&buffer);

        assert!(text.contains("You lost!"));
        assert!(text.contains("The word was: VITE"));
        assert!(text.contains("V I T E"));
        assert_eq!(hits.area_of(Control::Key(letter('A'))), None);
        assert!(hits.area_of(Control::PlayAgain).is_some());
    }

    #[test]
    fn narrow_terminal_skips_offscreen_keys() {
        let app = app_for("VITE", "");
        let (_, hits) = render(&app, 50, 34);

        for letter in Letter::ALPHABET {
            if let Some(area) = hits.area_of(Control::Key(letter)) {
                assert!(area.right() <= 50);
            }
        }
    }

    #[test]
    fn centered_rect_shrinks_to_area() {
        let area = Rect::new(0, 0, 20, 5);
        assert_eq!(centered_rect(44, 9, area), area);
        assert_eq!(
            centered_rect(10, 3, Rect::new(0, 0, 20, 9)),
            Rect::new(5, 3, 10, 3)
        );
    }
}
