//! Keyboard and mouse input mapping.

use super::hit_map::{Control, HitMap};
use crate::core::Letter;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Guess(Letter),
    Activate(Control),
    Quit,
}

/// Extracts a guess from a key press.
///
/// Only plain (or shifted) letter presses count; Ctrl/Alt combinations,
/// releases and repeats are ignored.
pub fn letter_from_key(key: &KeyEvent) -> Option<Letter> {
    if key.kind != KeyEventKind::Press
        || key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match key.code {
        KeyCode::Char(c) => Letter::from_input(c),
        _ => None,
    }
}

/// Maps a key event to an action.
///
/// `overlay_open` is true while the end-of-round overlay is shown.
pub fn map_key(key: &KeyEvent, overlay_open: bool) -> Option<KeyAction> {
    // Only process key press events (fixes Windows double-input bug)
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Some(KeyAction::Quit),
        KeyCode::Char('c') if ctrl => Some(KeyAction::Quit),
        KeyCode::Char('n') if ctrl => Some(KeyAction::Activate(Control::NewGame)),
        KeyCode::Char('g') if ctrl => Some(KeyAction::Activate(Control::GiveUp)),
        KeyCode::Enter | KeyCode::Char(' ') if overlay_open => {
            Some(KeyAction::Activate(Control::PlayAgain))
        }
        _ if overlay_open => None,
        _ => letter_from_key(key).map(KeyAction::Guess),
    }
}

/// Resolves a left click against the controls drawn in the last frame.
pub fn control_from_mouse(mouse: &MouseEvent, hits: &HitMap) -> Option<Control> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => hits.control_at(mouse.column, mouse.row),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn lowercase_key_guesses_uppercase_letter() {
        assert_eq!(letter_from_key(&press(KeyCode::Char('e'))), Some(letter('E')));
    }

    #[test]
    fn shifted_key_still_guesses() {
        let key = KeyEvent::new(KeyCode::Char('E'), KeyModifiers::SHIFT);
        assert_eq!(letter_from_key(&key), Some(letter('E')));
    }

    #[test]
    fn modifier_combinations_are_not_guesses() {
        let ctrl = KeyEvent::new(KeyCode::Char('e'), KeyModifiers::CONTROL);
        let alt = KeyEvent::new(KeyCode::Char('e'), KeyModifiers::ALT);
        assert_eq!(letter_from_key(&ctrl), None);
        assert_eq!(letter_from_key(&alt), None);
    }

    #[test]
    fn non_letters_are_not_guesses() {
        assert_eq!(letter_from_key(&press(KeyCode::Char('5'))), None);
        assert_eq!(letter_from_key(&press(KeyCode::Char('-'))), None);
        assert_eq!(letter_from_key(&press(KeyCode::Tab)), None);
    }

    #[test]
    fn key_release_ignored() {
        let release =
            KeyEvent::new_with_kind(KeyCode::Char('a'), KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(letter_from_key(&release), None);
        assert_eq!(map_key(&release, false), None);
    }

    #[test]
    fn shortcuts() {
        let ctrl = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
        assert_eq!(map_key(&press(KeyCode::Esc), false), Some(KeyAction::Quit));
        assert_eq!(map_key(&ctrl('c'), false), Some(KeyAction::Quit));
        assert_eq!(
            map_key(&ctrl('n'), false),
            Some(KeyAction::Activate(Control::NewGame))
        );
        assert_eq!(
            map_key(&ctrl('g'), false),
            Some(KeyAction::Activate(Control::GiveUp))
        );
    }

    #[test]
    fn overlay_blocks_guesses() {
        assert_eq!(map_key(&press(KeyCode::Char('a')), true), None);
        assert_eq!(
            map_key(&press(KeyCode::Enter), true),
            Some(KeyAction::Activate(Control::PlayAgain))
        );
        assert_eq!(map_key(&press(KeyCode::Enter), false), None);
    }

    #[test]
    fn letters_map_to_guesses() {
        assert_eq!(
            map_key(&press(KeyCode::Char('z')), false),
            Some(KeyAction::Guess(letter('Z')))
        );
    }

    #[test]
    fn left_click_resolves_control() {
        let mut hits = HitMap::default();
        hits.push(Rect::new(10, 5, 3, 1), Control::Key(letter('A')));

        let click = |kind, column, row| MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };

        let down = MouseEventKind::Down(MouseButton::Left);
        assert_eq!(
            control_from_mouse(&click(down, 11, 5), &hits),
            Some(Control::Key(letter('A')))
        );
        assert_eq!(control_from_mouse(&click(down, 13, 5), &hits), None);
        assert_eq!(
            control_from_mouse(&click(MouseEventKind::Down(MouseButton::Right), 11, 5), &hits),
            None
        );
        assert_eq!(
            control_from_mouse(&click(MouseEventKind::Moved, 11, 5), &hits),
            None
        );
    }
}
