//! Checklist split into labelled sections.
//!
//! The component is driven entirely by its props: the categories passed to
//! [`GroupedList::set_categories`] before each render and the callbacks given
//! at construction. Checking or acting on an item calls the matching callback
//! with the whole item and forwards the [`Action`] it returns; the list never
//! changes an item itself. The only state it keeps is the keyboard cursor.

use crate::config::DisplayConfig;
use crate::icons::IconService;
use crate::ui::components::grouped_list_item_component::{
    action_columns, build_rows, checkbox_columns, render_header, render_item, Category, GroupedListItem, GroupedRow, RowContext,
};
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Callback invoked with the item a user checked or acted on
pub type ItemCallback = Box<dyn FnMut(&GroupedListItem) -> Action>;

pub struct GroupedList {
    title: String,
    categories: Vec<Category>,
    rows: Vec<GroupedRow>,
    selected: usize,
    list_state: ListState,
    action_icon: String,
    on_check_item: ItemCallback,
    on_action: Option<ItemCallback>,
    icons: IconService,
    display: DisplayConfig,
    empty_message: String,
    scrollbar_helper: ScrollbarHelper,
}

impl GroupedList {
    pub fn new<F>(title: impl Into<String>, action_icon: impl Into<String>, on_check_item: F) -> Self
    where
        F: FnMut(&GroupedListItem) -> Action + 'static,
    {
        Self {
            title: title.into(),
            categories: Vec::new(),
            rows: Vec::new(),
            selected: 0,
            list_state: ListState::default(),
            action_icon: action_icon.into(),
            on_check_item: Box::new(on_check_item),
            on_action: None,
            icons: IconService::default(),
            display: DisplayConfig::default(),
            empty_message: String::new(),
            scrollbar_helper: ScrollbarHelper::new(),
        }
    }

    /// Add the secondary action; without it no action icon is rendered
    #[must_use]
    pub fn on_action<F>(mut self, on_action: F) -> Self
    where
        F: FnMut(&GroupedListItem) -> Action + 'static,
    {
        self.on_action = Some(Box::new(on_action));
        self
    }

    #[must_use]
    pub fn with_display(mut self, display: DisplayConfig) -> Self {
        self.display = display;
        self
    }

    #[must_use]
    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    pub fn set_icons(&mut self, icons: IconService, action_icon: impl Into<String>) {
        self.icons = icons;
        self.action_icon = action_icon.into();
    }

    /// Replace the props. Order is kept as given.
    pub fn set_categories(&mut self, categories: Vec<Category>) {
        self.rows = build_rows(&categories);
        self.categories = categories;
        self.clamp_selection();
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn rows(&self) -> &[GroupedRow] {
        &self.rows
    }

    pub fn has_action(&self) -> bool {
        self.on_action.is_some()
    }

    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|(_, items)| items.len()).sum()
    }

    pub fn selected_ordinal(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&GroupedListItem> {
        self.item_at_ordinal(self.selected)
    }

    /// Move the cursor to the item with `key`. Returns false if no such item exists.
    pub fn select_key(&mut self, key: &str) -> bool {
        let found = self
            .categories
            .iter()
            .flat_map(|(_, items)| items.iter())
            .position(|item| item.key == key);
        match found {
            Some(ordinal) => {
                self.selected = ordinal;
                self.sync_list_state();
                true
            }
            None => false,
        }
    }

    fn item_at_ordinal(&self, ordinal: usize) -> Option<&GroupedListItem> {
        self.categories.iter().flat_map(|(_, items)| items.iter()).nth(ordinal)
    }

    fn item_for_row(&self, row: &GroupedRow) -> Option<&GroupedListItem> {
        match row {
            GroupedRow::Item { section, index, .. } => {
                self.categories.get(*section).and_then(|(_, items)| items.get(*index))
            }
            GroupedRow::Header { .. } => None,
        }
    }

    fn clamp_selection(&mut self) {
        let count = self.item_count();
        if count == 0 {
            self.selected = 0;
        } else if self.selected >= count {
            self.selected = count - 1;
        }
        self.sync_list_state();
    }

    fn sync_list_state(&mut self) {
        let row = self
            .rows
            .iter()
            .position(|row| matches!(row, GroupedRow::Item { ordinal, .. } if *ordinal == self.selected));
        self.list_state.select(row);
    }

    fn check_selected(&mut self) -> Action {
        let Some(item) = self.selected_item().cloned() else {
            return Action::None;
        };
        log::debug!("grouped list '{}': check '{}'", self.title, item.key);
        (self.on_check_item)(&item)
    }

    fn act_on_selected(&mut self) -> Action {
        let Some(item) = self.selected_item().cloned() else {
            return Action::None;
        };
        match self.on_action.as_mut() {
            Some(on_action) => {
                log::debug!("grouped list '{}': action on '{}'", self.title, item.key);
                on_action(&item)
            }
            None => Action::None,
        }
    }

    fn move_cursor(&mut self, forward: bool) {
        let count = self.item_count();
        if count == 0 {
            return;
        }
        self.selected = if forward {
            (self.selected + 1) % count
        } else if self.selected == 0 {
            count - 1
        } else {
            self.selected - 1
        };
        self.sync_list_state();
    }

    fn block(&self) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(self.title.clone())
            .border_style(Style::default().fg(Color::DarkGray))
            .title_style(Style::default().fg(Color::White))
    }
}

impl Component for GroupedList {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousItem,
            KeyCode::Down | KeyCode::Char('j') => Action::NextItem,
            KeyCode::Home => {
                self.selected = 0;
                self.sync_list_state();
                Action::None
            }
            KeyCode::End => {
                self.selected = self.item_count().saturating_sub(1);
                self.sync_list_state();
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('x') => self.check_selected(),
            KeyCode::Char('d') | KeyCode::Delete => self.act_on_selected(),
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent, area: Rect) -> Action {
        let is_in_area = mouse.column >= area.x
            && mouse.column < area.x + area.width
            && mouse.row >= area.y
            && mouse.row < area.y + area.height;

        if !is_in_area {
            return Action::None;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let list_area = ScrollbarHelper::split(area, self.rows.len()).list;
                // Borders take the first and last row/column
                if mouse.row <= list_area.y || mouse.row + 1 >= list_area.y + list_area.height {
                    return Action::None;
                }
                let row_index = self.list_state.offset() + (mouse.row - list_area.y - 1) as usize;
                let Some(row) = self.rows.get(row_index).copied() else {
                    return Action::None;
                };
                let GroupedRow::Item { ordinal, .. } = row else {
                    return Action::None;
                };

                self.selected = ordinal;
                self.sync_list_state();

                let column = mouse.column.saturating_sub(list_area.x + 1);
                let inner_width = list_area.width.saturating_sub(2);
                let (checkbox_start, checkbox_width) = checkbox_columns(&self.icons);
                let (action_start, action_width) = action_columns(inner_width, &self.action_icon);
                let on_action = self.has_action() && column >= action_start && column < action_start + action_width;
                // with an action icon the text stops one column before it
                let text_end = if self.has_action() { action_start.saturating_sub(1) } else { inner_width };
                let checkbox_end = checkbox_start + checkbox_width;
                let on_checkbox = column >= checkbox_start && column < checkbox_end && checkbox_end <= text_end;

                if on_action {
                    self.act_on_selected()
                } else if on_checkbox {
                    self.check_selected()
                } else {
                    Action::None
                }
            }
            MouseEventKind::ScrollUp => Action::PreviousItem,
            MouseEventKind::ScrollDown => Action::NextItem,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextItem => {
                self.move_cursor(true);
                Action::None
            }
            Action::PreviousItem => {
                self.move_cursor(false);
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if self.categories.is_empty() {
            let empty = Paragraph::new(self.empty_message.clone())
                .style(Style::default().fg(Color::Gray))
                .block(self.block());
            f.render_widget(empty, rect);
            return;
        }

        let areas = ScrollbarHelper::split(rect, self.rows.len());
        let action_icon = self.has_action().then_some(self.action_icon.as_str());
        let ctx = RowContext {
            icons: &self.icons,
            width: areas.list.width.saturating_sub(2),
            action_icon,
            show_secondary: self.display.show_secondary,
            show_accent: self.display.show_urgency_accent,
        };

        let items: Vec<ListItem> = self
            .rows
            .iter()
            .map(|row| match row {
                GroupedRow::Header { section } => render_header(&self.categories[*section].0),
                GroupedRow::Item { .. } => match self.item_for_row(row) {
                    Some(item) => render_item(item, &ctx),
                    None => ListItem::new(""),
                },
            })
            .collect();

        let list = List::new(items).block(self.block()).highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );

        f.render_stateful_widget(list, areas.list, &mut self.list_state);

        let viewport = rect.height.saturating_sub(2) as usize;
        let position = self.list_state.selected().unwrap_or(0);
        self.scrollbar_helper.update_state(self.rows.len(), position, viewport);
        self.scrollbar_helper.render(f, areas.scrollbar);
    }
}
