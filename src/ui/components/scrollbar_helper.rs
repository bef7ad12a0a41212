//! Scrollbar shared by the bordered list views.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Areas for a bordered list and, when the rows overflow, its scrollbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollAreas {
    pub list: Rect,
    pub scrollbar: Option<Rect>,
}

/// Tracks scrollbar position for a bordered, scrollable list
pub struct ScrollbarHelper {
    state: ScrollbarState,
}

impl Default for ScrollbarHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollbarHelper {
    pub fn new() -> Self {
        Self {
            state: ScrollbarState::new(0),
        }
    }

    /// Whether `total_rows` overflow the rows available inside the borders of `rect`
    pub fn needs_scrollbar(rect: Rect, total_rows: usize) -> bool {
        total_rows > rect.height.saturating_sub(2) as usize
    }

    /// Split `rect` into list and scrollbar areas.
    ///
    /// The scrollbar takes the last column and sits between the top and
    /// bottom borders.
    pub fn split(rect: Rect, total_rows: usize) -> ScrollAreas {
        if !Self::needs_scrollbar(rect, total_rows) {
            return ScrollAreas {
                list: rect,
                scrollbar: None,
            };
        }

        ScrollAreas {
            list: Rect {
                width: rect.width.saturating_sub(1),
                ..rect
            },
            scrollbar: Some(Rect {
                x: rect.x + rect.width.saturating_sub(1),
                y: rect.y + 1,
                width: 1,
                height: rect.height.saturating_sub(2),
            }),
        }
    }

    pub fn update_state(&mut self, total_rows: usize, position: usize, viewport_rows: usize) {
        self.state = self
            .state
            .content_length(total_rows)
            .position(position)
            .viewport_content_length(viewport_rows);
    }

    pub fn render(&mut self, f: &mut Frame, scrollbar_area: Option<Rect>) {
        if let Some(area) = scrollbar_area {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .track_symbol(Some("│"))
                .thumb_symbol("█")
                .style(Style::default().fg(Color::DarkGray));

            f.render_stateful_widget(scrollbar, area, &mut self.state);
        }
    }
}
