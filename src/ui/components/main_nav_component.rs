//! Slide-out navigation drawer.
//!
//! Whether the drawer is open is derived from the current location: it is
//! open while the `menu` query parameter is present. Gestures never flip the
//! state directly; they call the shared toggle collaborator and the resulting
//! location change comes back through the history listener. When a toggle
//! does not navigate at all, the requested state is applied locally.

use crate::auth::{AuthProvider, SessionAction};
use crate::constants::{GREETING_ANONYMOUS_NAME, GREETING_LOGIN, GREETING_LOGOUT, NAV_SWIPE_AREA_WIDTH};
use crate::entities::User;
use crate::icons::IconService;
use crate::routing::{should_main_nav_be_open, History, NavToggle, Subscription};
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    List,
    Categories,
}

/// A fixed drawer link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavRoute {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: NavIcon,
}

pub const ROUTES: [NavRoute; 2] = [
    NavRoute {
        label: "List",
        path: "/",
        icon: NavIcon::List,
    },
    NavRoute {
        label: "Categories",
        path: "/categories",
        icon: NavIcon::Categories,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    Open,
    Closed,
}

impl From<bool> for NavState {
    fn from(open: bool) -> Self {
        if open {
            NavState::Open
        } else {
            NavState::Closed
        }
    }
}

/// Greeting line at the top of the drawer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Greeting {
    Authenticated { display_name: String },
    Anonymous,
}

impl Greeting {
    pub fn for_user(user: Option<User>) -> Self {
        match user {
            Some(user) => Greeting::Authenticated {
                display_name: user.display_name,
            },
            None => Greeting::Anonymous,
        }
    }

    /// Text before the action, trailing space included
    pub fn text(&self) -> String {
        match self {
            Greeting::Authenticated { display_name } => format!("Hi {display_name} "),
            Greeting::Anonymous => format!("Hi {GREETING_ANONYMOUS_NAME} "),
        }
    }

    pub fn action_label(&self) -> &'static str {
        match self {
            Greeting::Authenticated { .. } => GREETING_LOGOUT,
            Greeting::Anonymous => GREETING_LOGIN,
        }
    }
}

/// Uppercase the first character of a label
pub fn capitalize_first(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Where each part of the open drawer sits on screen
#[derive(Debug, Clone, PartialEq, Eq)]
struct DrawerRegions {
    drawer: Rect,
    backdrop: Rect,
    illustration: Rect,
    greeting: Rect,
    greeting_action: Rect,
    divider: Rect,
    routes: Vec<Rect>,
    footer: Rect,
}

pub struct MainNav {
    history: History,
    subscription: Option<Subscription>,
    is_open: Rc<Cell<bool>>,
    /// Bumped by the history listener on every location change
    generation: Rc<Cell<u64>>,
    auth: Rc<dyn AuthProvider>,
    login: SessionAction,
    logout: SessionAction,
    toggle: NavToggle,
    version: String,
    nav_width: u16,
    selected: usize,
    icons: IconService,
}

impl MainNav {
    pub fn new(
        history: History,
        auth: Rc<dyn AuthProvider>,
        login: SessionAction,
        logout: SessionAction,
        toggle: NavToggle,
        version: impl Into<String>,
        nav_width: u16,
    ) -> Self {
        let is_open = should_main_nav_be_open(&history.location());
        Self {
            history,
            subscription: None,
            is_open: Rc::new(Cell::new(is_open)),
            generation: Rc::new(Cell::new(0)),
            auth,
            login,
            logout,
            toggle,
            version: version.into(),
            nav_width,
            selected: 0,
            icons: IconService::default(),
        }
    }

    /// Read the current location and start following location changes
    pub fn mount(&mut self) {
        if self.subscription.is_some() {
            return;
        }

        self.is_open.set(should_main_nav_be_open(&self.history.location()));

        let is_open = Rc::clone(&self.is_open);
        let generation = Rc::clone(&self.generation);
        self.subscription = Some(self.history.listen(move |location| {
            generation.set(generation.get().wrapping_add(1));
            is_open.set(should_main_nav_be_open(location));
        }));
        log::debug!("main nav: mounted, state {:?}", self.state());
    }

    /// Stop following location changes. Later events are ignored.
    pub fn unmount(&mut self) {
        if self.subscription.take().is_some() {
            log::debug!("main nav: unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn state(&self) -> NavState {
        NavState::from(self.is_open.get())
    }

    pub fn is_open(&self) -> bool {
        self.is_open.get()
    }

    pub fn greeting(&self) -> Greeting {
        Greeting::for_user(self.auth.current_user())
    }

    pub fn selected_route(&self) -> NavRoute {
        ROUTES[self.selected % ROUTES.len()]
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.icons = icons;
    }

    /// Ask the toggle collaborator for `open`; fall back to a local change
    /// when it does not produce a location change.
    fn request_state(&mut self, open: bool) {
        if !self.is_mounted() || self.is_open.get() == open {
            return;
        }

        let before = self.generation.get();
        (self.toggle)();
        if self.generation.get() == before {
            log::debug!("main nav: toggle did not navigate, applying {:?} locally", NavState::from(open));
            self.is_open.set(open);
        }
    }

    fn activate_route(&mut self, index: usize) {
        let Some(route) = ROUTES.get(index).copied() else {
            return;
        };
        self.selected = index;
        log::info!("main nav: open {}", route.path);
        // Toggle first: navigating first would re-add the menu flag to the new location
        (self.toggle)();
        self.history.push(route.path);
    }

    fn run_session_action(&self) {
        match self.greeting() {
            Greeting::Authenticated { .. } => (self.logout)(),
            Greeting::Anonymous => (self.login)(),
        }
    }

    fn route_icon(&self, icon: NavIcon) -> &'static str {
        match icon {
            NavIcon::List => self.icons.nav_list(),
            NavIcon::Categories => self.icons.nav_categories(),
        }
    }

    fn regions(&self, area: Rect) -> DrawerRegions {
        let drawer = LayoutManager::drawer_area(area, self.nav_width);
        let backdrop = LayoutManager::backdrop_area(area, self.nav_width);
        let inner = drawer.inner(Margin {
            vertical: 1,
            horizontal: 1,
        });
        let bottom = inner.y + inner.height;
        let row = |y: u16| {
            if y < bottom {
                Rect { y, height: 1, ..inner }
            } else {
                Rect { y: bottom, height: 0, ..inner }
            }
        };

        let illustration_height = (self.icons.illustration().len() as u16).min(inner.height);
        let illustration = Rect {
            height: illustration_height,
            ..inner
        };

        let greeting_y = inner.y + illustration_height;
        let greeting = row(greeting_y);
        let greeting_current = self.greeting();
        let text_width = Span::raw(greeting_current.text()).width() as u16;
        let label_width = Span::raw(greeting_current.action_label()).width() as u16;
        let greeting_action = Rect {
            x: greeting.x + text_width.min(greeting.width),
            width: label_width.min(greeting.width.saturating_sub(text_width)),
            ..greeting
        };

        let divider = row(greeting_y + 1);
        let routes = (0..ROUTES.len())
            .map(|index| row(greeting_y + 2 + index as u16))
            .collect();
        let footer = row(bottom.saturating_sub(1));

        DrawerRegions {
            drawer,
            backdrop,
            illustration,
            greeting,
            greeting_action,
            divider,
            routes,
            footer,
        }
    }
}

impl Component for MainNav {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.is_mounted() || !self.is_open() {
            return Action::None;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = (self.selected + ROUTES.len() - 1) % ROUTES.len();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1) % ROUTES.len();
            }
            KeyCode::Enter => self.activate_route(self.selected),
            KeyCode::Esc | KeyCode::Char('m') => self.request_state(false),
            KeyCode::Char('l') => self.run_session_action(),
            _ => {}
        }
        Action::None
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent, area: Rect) -> Action {
        if !self.is_mounted() || mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }

        if !self.is_open() {
            let in_swipe_area = mouse.column >= area.x
                && mouse.column < area.x + NAV_SWIPE_AREA_WIDTH
                && mouse.row >= area.y
                && mouse.row < area.y + area.height;
            if in_swipe_area {
                self.request_state(true);
            }
            return Action::None;
        }

        let regions = self.regions(area);
        if LayoutManager::contains(regions.backdrop, mouse.column, mouse.row) {
            self.request_state(false);
        } else if LayoutManager::contains(regions.greeting_action, mouse.column, mouse.row) {
            self.run_session_action();
        } else if let Some(index) = regions
            .routes
            .iter()
            .position(|route| LayoutManager::contains(*route, mouse.column, mouse.row))
        {
            self.activate_route(index);
        }
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if !self.is_open() {
            return;
        }

        let regions = self.regions(rect);
        f.buffer_mut()
            .set_style(regions.backdrop, Style::default().add_modifier(Modifier::DIM));
        f.render_widget(Clear, regions.drawer);
        f.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
            regions.drawer,
        );

        let illustration: Vec<Line> = self
            .icons
            .illustration()
            .iter()
            .map(|row| Line::from(Span::styled(*row, Style::default().fg(Color::Cyan))))
            .collect();
        f.render_widget(Paragraph::new(illustration).alignment(Alignment::Center), regions.illustration);

        let greeting = self.greeting();
        let greeting_line = Line::from(vec![
            Span::raw(greeting.text()),
            Span::styled(
                greeting.action_label(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
            ),
        ]);
        f.render_widget(Paragraph::new(greeting_line), regions.greeting);

        f.render_widget(
            Paragraph::new("─".repeat(regions.divider.width as usize)).style(Style::default().fg(Color::DarkGray)),
            regions.divider,
        );

        for (index, (route, area)) in ROUTES.iter().zip(regions.routes.iter()).enumerate() {
            let style = if index == self.selected {
                Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let line = Line::from(format!(" {} {}", self.route_icon(route.icon), capitalize_first(route.label)));
            f.render_widget(Paragraph::new(line).style(style), *area);
        }

        f.render_widget(
            Paragraph::new(self.version.as_str())
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray)),
            regions.footer,
        );
    }
}
