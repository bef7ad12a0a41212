//! Rows of a grouped list: category headers and checkable items.

use crate::constants::{ACCENT_MODERATE, ACCENT_SEVERE};
use crate::entities::Urgency;
use crate::icons::IconService;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// One checkable entry handed to a grouped list.
///
/// The list only reads it; a change of `checked` becomes visible when the
/// caller passes an updated item on the next render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedListItem {
    /// Identity of the item, unique across all categories
    pub key: String,
    pub checked: bool,
    pub primary: String,
    pub secondary: Option<String>,
    pub level: Option<Urgency>,
}

impl GroupedListItem {
    pub fn new(key: impl Into<String>, primary: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            checked: false,
            primary: primary.into(),
            secondary: None,
            level: None,
        }
    }

    #[must_use]
    pub fn with_secondary(mut self, secondary: impl Into<String>) -> Self {
        self.secondary = Some(secondary.into());
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: Urgency) -> Self {
        self.level = Some(level);
        self
    }

    #[must_use]
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }
}

/// A labelled section and its items, in display order
pub type Category = (String, Vec<GroupedListItem>);

/// Visual emphasis derived from an item's urgency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    None,
    Moderate,
    Severe,
}

/// Map an urgency level to its emphasis. Total over every possible input.
pub fn emphasis_for(level: Option<Urgency>) -> Emphasis {
    match level {
        None | Some(Urgency::Low) => Emphasis::None,
        Some(Urgency::Moderate) => Emphasis::Moderate,
        Some(Urgency::Severe) => Emphasis::Severe,
    }
}

impl Emphasis {
    pub fn accent_color(self) -> Option<Color> {
        match self {
            Emphasis::None => None,
            Emphasis::Moderate => Some(ACCENT_MODERATE),
            Emphasis::Severe => Some(ACCENT_SEVERE),
        }
    }
}

/// Position of a rendered row within the category input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupedRow {
    Header {
        section: usize,
    },
    Item {
        section: usize,
        index: usize,
        /// Position among all items, ignoring headers
        ordinal: usize,
    },
}

/// Flatten categories into rows: one header per category followed by its
/// items, all in input order.
pub fn build_rows(categories: &[Category]) -> Vec<GroupedRow> {
    let mut rows = Vec::new();
    let mut ordinal = 0;

    for (section, (_, items)) in categories.iter().enumerate() {
        rows.push(GroupedRow::Header { section });
        for index in 0..items.len() {
            rows.push(GroupedRow::Item { section, index, ordinal });
            ordinal += 1;
        }
    }

    rows
}

/// Everything an item row needs besides the item itself
pub struct RowContext<'a> {
    pub icons: &'a IconService,
    /// Inner width of the list, used to right-align the action icon
    pub width: u16,
    pub action_icon: Option<&'a str>,
    pub show_secondary: bool,
    pub show_accent: bool,
}

/// Column span of the checkbox within an item row: `(start, width)`
pub fn checkbox_columns(icons: &IconService) -> (u16, u16) {
    // accent glyph + space come first
    let accent = icons.accent().width() as u16;
    (accent + 1, icons.checkbox(false).width() as u16)
}

/// Column span of the action icon within an item row of `width` columns:
/// `(start, width)`. The icon is always drawn flush right.
pub fn action_columns(width: u16, icon: &str) -> (u16, u16) {
    let icon_width = (icon.width() as u16).min(width);
    (width - icon_width, icon_width)
}

const ELLIPSIS: &str = "…";

/// Cut `spans` down to `max_width` columns, ending in an ellipsis when
/// anything was dropped.
fn fit_spans(spans: Vec<Span<'static>>, max_width: usize) -> Vec<Span<'static>> {
    let total: usize = spans.iter().map(|span| span.content.width()).sum();
    if total <= max_width {
        return spans;
    }

    let budget = max_width.saturating_sub(ELLIPSIS.width());
    let mut used = 0;
    let mut fitted = Vec::new();
    for span in spans {
        let span_width = span.content.width();
        if used + span_width <= budget {
            used += span_width;
            fitted.push(span);
            continue;
        }

        let mut cut = String::new();
        for ch in span.content.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if used + ch_width > budget {
                break;
            }
            used += ch_width;
            cut.push(ch);
        }
        if !cut.is_empty() {
            fitted.push(Span::styled(cut, span.style));
        }
        break;
    }

    if max_width >= ELLIPSIS.width() {
        fitted.push(Span::styled(ELLIPSIS, Style::default().fg(Color::DarkGray)));
    }
    fitted
}

pub fn render_header(label: &str) -> ListItem<'static> {
    ListItem::new(Line::from(Span::styled(
        label.to_string(),
        Style::default().add_modifier(Modifier::BOLD).fg(Color::Cyan),
    )))
}

pub fn render_item(item: &GroupedListItem, ctx: &RowContext<'_>) -> ListItem<'static> {
    let mut spans = Vec::new();

    let accent = ctx.icons.accent();
    match emphasis_for(item.level).accent_color() {
        Some(color) if ctx.show_accent => {
            spans.push(Span::styled(accent.to_string(), Style::default().fg(color)));
        }
        _ => spans.push(Span::raw(" ".repeat(Span::raw(accent).width()))),
    }
    spans.push(Span::raw(" "));

    let checkbox_style = if item.checked {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::White)
    };
    spans.push(Span::styled(ctx.icons.checkbox(item.checked).to_string(), checkbox_style));
    spans.push(Span::raw(" "));

    let primary_style = if item.checked {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(Color::White)
    };
    spans.push(Span::styled(item.primary.clone(), primary_style));

    if ctx.show_secondary {
        if let Some(secondary) = &item.secondary {
            spans.push(Span::raw(" - "));
            spans.push(Span::styled(
                secondary.clone(),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ));
        }
    }

    if let Some(icon) = ctx.action_icon {
        let (icon_start, _) = action_columns(ctx.width, icon);
        // one blank column always separates the text from the icon
        let mut spans = fit_spans(spans, icon_start.saturating_sub(1) as usize);
        let used: usize = spans.iter().map(|span| span.content.width()).sum();
        let padding = (icon_start as usize).saturating_sub(used);
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(icon.to_string(), Style::default().fg(Color::Gray)));
        return ListItem::new(Line::from(spans));
    }

    ListItem::new(Line::from(spans))
}
