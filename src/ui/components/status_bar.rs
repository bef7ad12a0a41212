//! Status bar component

use crate::constants::{STATUS_HINTS, STATUS_HINTS_NAV};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Key hints for the focused surface, or the last notice when there is one
    pub fn text(nav_open: bool, notice: Option<&str>) -> String {
        match notice {
            Some(notice) => notice.to_string(),
            None if nav_open => STATUS_HINTS_NAV.to_string(),
            None => STATUS_HINTS.to_string(),
        }
    }

    pub fn render(f: &mut Frame, area: Rect, nav_open: bool, notice: Option<&str>) {
        let color = if notice.is_some() { Color::Yellow } else { Color::Gray };

        let status_bar = Paragraph::new(Self::text(nav_open, notice))
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(color));

        f.render_widget(status_bar, area);
    }
}
