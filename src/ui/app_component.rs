//! Application shell.
//!
//! Owns the shopping list and the routing collaborators, picks the page from
//! the current location and hands fresh props to the components after every
//! event.

use crate::auth::{AuthProvider, LocalSession};
use crate::config::{Config, DisplayConfig};
use crate::constants::{APP_VERSION, EMPTY_LIST, TITLE_CATEGORIES, TITLE_LIST, TITLE_NOT_FOUND};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::routing::{nav_toggle, History, NavToggle};
use crate::store::ShoppingList;
use crate::ui::components::{GroupedList, LogsPanel, MainNav, StatusBar};
use crate::ui::core::{actions::Action, Component, EventType};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::rc::Rc;

/// Section label of the category overview
const CATEGORY_OVERVIEW_SECTION: &str = "All categories";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    List,
    Categories,
    NotFound,
}

impl Page {
    pub fn for_path(path: &str) -> Self {
        match path {
            "/" => Page::List,
            "/categories" => Page::Categories,
            _ => Page::NotFound,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::List => TITLE_LIST,
            Page::Categories => TITLE_CATEGORIES,
            Page::NotFound => TITLE_NOT_FOUND,
        }
    }
}

pub struct AppComponent {
    store: ShoppingList,
    history: History,
    session: LocalSession,
    icons: IconService,
    toggle: NavToggle,
    list_page: GroupedList,
    categories_page: GroupedList,
    main_nav: MainNav,
    logs_panel: LogsPanel,
    notice: Option<String>,
    should_quit: bool,
    /// Full terminal area from the last render or resize
    screen: Rect,
}

impl AppComponent {
    pub fn new(config: &Config, history: History, session: LocalSession, logger: Logger) -> Self {
        let icons = IconService::new(config.ui.icon_theme);
        let toggle = nav_toggle(history.clone());
        let auth: Rc<dyn AuthProvider> = Rc::new(session.clone());

        let list_page = GroupedList::new(TITLE_LIST, icons.remove(), |item| Action::ToggleEntry(item.key.clone()))
            .on_action(|item| Action::RemoveEntry(item.key.clone()))
            .with_display(config.display.clone())
            .with_empty_message(EMPTY_LIST);

        let categories_page = GroupedList::new(TITLE_CATEGORIES, icons.remove(), |item| {
            Action::SetCategoryChecked {
                category: item.key.clone(),
                checked: !item.checked,
            }
        })
        .with_display(DisplayConfig {
            show_secondary: true,
            ..config.display.clone()
        })
        .with_empty_message(EMPTY_LIST);

        let mut main_nav = MainNav::new(
            history.clone(),
            auth,
            session.login_action(),
            session.logout_action(),
            Rc::clone(&toggle),
            APP_VERSION,
            config.ui.nav_width,
        );
        main_nav.set_icons(icons.clone());
        main_nav.mount();

        let mut app = Self {
            store: ShoppingList::from_seed(config.list.items.as_deref()),
            history,
            session,
            icons: icons.clone(),
            toggle,
            list_page,
            categories_page,
            main_nav,
            logs_panel: LogsPanel::new(logger),
            notice: None,
            should_quit: false,
            screen: Rect::default(),
        };
        app.list_page.set_icons(icons.clone(), icons.remove());
        app.categories_page.set_icons(icons.clone(), icons.remove());
        app.sync_component_data();

        log::info!("app: started at {} with {} entries", app.history.location(), app.store.len());
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn store(&self) -> &ShoppingList {
        &self.store
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn session(&self) -> &LocalSession {
        &self.session
    }

    pub fn main_nav(&self) -> &MainNav {
        &self.main_nav
    }

    pub fn list_page(&self) -> &GroupedList {
        &self.list_page
    }

    pub fn categories_page(&self) -> &GroupedList {
        &self.categories_page
    }

    pub fn logs_visible(&self) -> bool {
        self.logs_panel.is_visible()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn page(&self) -> Page {
        Page::for_path(&self.history.location().path)
    }

    /// Release the drawer's location listener
    pub fn shutdown(&mut self) {
        self.main_nav.unmount();
        log::info!("app: shutdown");
    }

    fn current_page_mut(&mut self) -> Option<&mut GroupedList> {
        match self.page() {
            Page::List => Some(&mut self.list_page),
            Page::Categories => Some(&mut self.categories_page),
            Page::NotFound => None,
        }
    }

    /// Hand fresh props to the pages
    fn sync_component_data(&mut self) {
        self.list_page.set_categories(self.store.grouped_by_category());

        let overview = self.store.category_overview();
        let categories = if overview.is_empty() {
            Vec::new()
        } else {
            vec![(CATEGORY_OVERVIEW_SECTION.to_string(), overview)]
        };
        self.categories_page.set_categories(categories);
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('m') => Action::ToggleNav,
            KeyCode::Char('G') => Action::ShowLogs(true),
            KeyCode::Char('i') => Action::CycleIconTheme,
            KeyCode::Char('b') | KeyCode::Backspace => Action::GoBack,
            KeyCode::Char('f') => Action::GoForward,
            _ => Action::None,
        }
    }

    fn route_key(&mut self, key: KeyEvent) -> Action {
        if self.logs_panel.is_visible() {
            return self.logs_panel.handle_key_events(key);
        }

        match key.code {
            KeyCode::Char('q') => return Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Action::Quit,
            _ => {}
        }

        if self.main_nav.is_open() {
            // the drawer keeps 'm' as its own close gesture
            return match self.handle_global_key(key) {
                Action::None | Action::ToggleNav => self.main_nav.handle_key_events(key),
                global => global,
            };
        }

        let page_action = match self.current_page_mut() {
            Some(page) => page.handle_key_events(key),
            None => Action::None,
        };
        if page_action.is_none() {
            self.handle_global_key(key)
        } else {
            page_action
        }
    }

    fn route_mouse(&mut self, mouse: MouseEvent) -> Action {
        if self.logs_panel.is_visible() {
            return Action::None;
        }

        let [title, body, _] = LayoutManager::main_layout(self.screen);

        if mouse.kind == MouseEventKind::Down(MouseButton::Left) && LayoutManager::contains(title, mouse.column, mouse.row) {
            let button_width = Span::raw(self.icons.menu()).width() as u16 + 2;
            return if mouse.column < title.x + button_width {
                Action::ToggleNav
            } else {
                Action::None
            };
        }

        let was_open = self.main_nav.is_open();
        let nav_action = self.main_nav.handle_mouse_events(mouse, body);
        if was_open || self.main_nav.is_open() {
            return nav_action;
        }

        match self.current_page_mut() {
            Some(page) => page.handle_mouse_events(mouse, body),
            None => Action::None,
        }
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => {
                self.notice = None;
                self.route_key(key)
            }
            EventType::Mouse(mouse) => self.route_mouse(mouse),
            EventType::Resize(width, height) => {
                self.screen = Rect::new(0, 0, width, height);
                Action::None
            }
            EventType::Tick | EventType::Other => Action::None,
        };

        let action = self.update(action);
        self.handle_app_action(action);
        self.sync_component_data();
        Ok(())
    }

    pub fn handle_app_action(&mut self, action: Action) {
        match action {
            Action::ToggleEntry(key) => {
                if self.store.toggle(&key).is_none() {
                    log::warn!("app: no entry with key {}", key);
                }
            }
            Action::RemoveEntry(key) => match self.store.remove(&key) {
                Some(entry) => self.notice = Some(format!("Removed '{}'", entry.name)),
                None => log::warn!("app: no entry with key {}", key),
            },
            Action::SetCategoryChecked { category, checked } => {
                self.store.set_category_checked(&category, checked);
            }
            Action::ToggleNav => (self.toggle)(),
            Action::GoBack => {
                if let Err(e) = self.history.back() {
                    log::debug!("app: back: {}", e);
                    self.notice = Some(e.to_string());
                }
            }
            Action::GoForward => {
                if let Err(e) = self.history.forward() {
                    log::debug!("app: forward: {}", e);
                    self.notice = Some(e.to_string());
                }
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                log::info!("app: icon theme {:?}", self.icons.theme());
                self.list_page.set_icons(self.icons.clone(), self.icons.remove());
                self.categories_page.set_icons(self.icons.clone(), self.icons.remove());
                self.main_nav.set_icons(self.icons.clone());
            }
            Action::Quit => {
                log::info!("app: quit requested");
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn render_title_bar(&self, f: &mut Frame, area: Rect) {
        let page = self.page();
        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", self.icons.menu()),
                Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" listkeeper ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::styled(format!("- {}", page.title()), Style::default().fg(Color::White)),
            Span::styled(format!("  {}", self.history.location()), Style::default().fg(Color::DarkGray)),
        ]);
        f.render_widget(Paragraph::new(line), area);
    }

    fn render_not_found(&self, f: &mut Frame, area: Rect) {
        let text = format!("Nothing lives at {}. Press 'b' to go back.", self.history.location().path);
        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(TITLE_NOT_FOUND)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        f.render_widget(paragraph, area);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.logs_panel.update(action);
        match self.current_page_mut() {
            Some(page) => page.update(action),
            None => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.screen = rect;
        let [title, body, status] = LayoutManager::main_layout(rect);

        self.render_title_bar(f, title);
        match self.page() {
            Page::List => self.list_page.render(f, body),
            Page::Categories => self.categories_page.render(f, body),
            Page::NotFound => self.render_not_found(f, body),
        }
        StatusBar::render(f, status, self.main_nav.is_open(), self.notice.as_deref());

        self.main_nav.render(f, body);
        self.logs_panel.render(f, rect);
    }
}
