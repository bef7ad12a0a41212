//! Layout management and calculations

use crate::constants::MAIN_AREA_MIN_WIDTH;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into title bar, page body and status bar
    #[must_use]
    pub fn main_layout(area: Rect) -> [Rect; 3] {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        [chunks[0], chunks[1], chunks[2]]
    }

    /// Area of the open navigation drawer.
    ///
    /// The drawer keeps its configured width while at least
    /// `MAIN_AREA_MIN_WIDTH` columns remain beside it; on narrower screens it
    /// covers the full width.
    #[must_use]
    pub fn drawer_area(area: Rect, nav_width: u16) -> Rect {
        let width = if area.width >= nav_width.saturating_add(MAIN_AREA_MIN_WIDTH) {
            nav_width
        } else {
            area.width
        };

        Rect { width, ..area }
    }

    /// Part of `area` the drawer leaves visible (the backdrop)
    #[must_use]
    pub fn backdrop_area(area: Rect, nav_width: u16) -> Rect {
        let drawer = Self::drawer_area(area, nav_width);
        Rect {
            x: area.x + drawer.width,
            width: area.width.saturating_sub(drawer.width),
            ..area
        }
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
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

    #[must_use]
    pub fn contains(area: Rect, column: u16, row: u16) -> bool {
        column >= area.x && column < area.x + area.width && row >= area.y && row < area.y + area.height
    }
}
