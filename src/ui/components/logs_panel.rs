//! Modal panel showing the in-memory log buffer

use crate::constants::{EMPTY_LOGS, TITLE_LOGS};
use crate::logger::Logger;
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Margin, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

pub struct LogsPanel {
    logger: Logger,
    visible: bool,
    scroll_offset: usize,
}

impl LogsPanel {
    pub fn new(logger: Logger) -> Self {
        Self {
            logger,
            visible: false,
            scroll_offset: 0,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.scroll_offset = 0;
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    fn level_style(level: &str) -> Style {
        match level {
            "ERROR" => Style::default().fg(Color::Red),
            "WARN" => Style::default().fg(Color::Yellow),
            "INFO" => Style::default().fg(Color::Green),
            "DEBUG" => Style::default().fg(Color::Cyan),
            _ => Style::default().fg(Color::Gray),
        }
    }

    /// Split "[time] LEVEL message" into coloured spans
    fn format_entry(entry: &str) -> ListItem<'static> {
        let Some(bracket_end) = entry.find("] ") else {
            return ListItem::new(entry.to_string());
        };
        let timestamp = &entry[..=bracket_end];
        let rest = &entry[bracket_end + 2..];
        let (level, message) = rest.split_once(' ').unwrap_or(("", rest));

        ListItem::new(Line::from(vec![
            Span::styled(format!("{timestamp} "), Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{level:<5} "), Self::level_style(level)),
            Span::raw(message.trim_start().to_string()),
        ]))
    }
}

impl Component for LogsPanel {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.visible {
            return Action::None;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('G') => Action::ShowLogs(false),
            KeyCode::Up | KeyCode::Char('k') => Action::LogsScrollUp,
            KeyCode::Down | KeyCode::Char('j') => Action::LogsScrollDown,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowLogs(visible) => {
                self.set_visible(visible);
                Action::None
            }
            Action::LogsScrollUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                Action::None
            }
            Action::LogsScrollDown => {
                let total = self.logger.get_logs().len();
                if self.scroll_offset + 1 < total {
                    self.scroll_offset += 1;
                }
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if !self.visible {
            return;
        }

        let modal_area = LayoutManager::centered_rect(80, 80, rect);
        f.render_widget(Clear, modal_area);
        f.render_widget(
            Block::default()
                .title(TITLE_LOGS)
                .borders(Borders::ALL)
                .style(Style::default().bg(Color::Black))
                .border_style(Style::default().fg(Color::Cyan)),
            modal_area,
        );

        let inner = modal_area.inner(Margin {
            vertical: 1,
            horizontal: 1,
        });

        let logs = self.logger.get_logs();
        if logs.is_empty() {
            f.render_widget(
                Paragraph::new(EMPTY_LOGS)
                    .style(Style::default().fg(Color::Gray))
                    .alignment(Alignment::Center),
                inner,
            );
            return;
        }

        let start = self.scroll_offset.min(logs.len().saturating_sub(1));
        let items: Vec<ListItem> = logs
            .iter()
            .skip(start)
            .take(inner.height as usize)
            .map(|entry| Self::format_entry(entry))
            .collect();
        f.render_widget(List::new(items), inner);
    }
}
