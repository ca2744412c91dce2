//! Clickable regions of the last rendered frame.

use crate::core::Letter;
use ratatui::layout::{Position, Rect};

/// Something the player can click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Key(Letter),
    NewGame,
    GiveUp,
    PlayAgain,
}

/// Screen rectangles of the controls drawn in one frame.
#[derive(Debug, Default, Clone)]
pub struct HitMap {
    regions: Vec<(Rect, Control)>,
}

impl HitMap {
    pub fn push(&mut self, area: Rect, control: Control) {
        if !area.is_empty() {
            self.regions.push((area, control));
        }
    }

    /// Drops every region, e.g. when a modal covers the screen.
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// The control under a cell; later regions win.
    #[must_use]
    pub fn control_at(&self, column: u16, row: u16) -> Option<Control> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|&(_, control)| control)
    }

    #[must_use]
    pub fn area_of(&self, control: Control) -> Option<Rect> {
        self.regions
            .iter()
            .find(|&&(_, c)| c == control)
            .map(|&(area, _)| area)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
