use crate::helpers::{click, contains, draw, key, row_of};
use crossterm::event::KeyCode;
use listkeeper::auth::{AuthProvider, LocalSession};
use listkeeper::routing::{nav_toggle, History, NavToggle};
use listkeeper::ui::components::{Greeting, MainNav, NavState};
use listkeeper::ui::core::Component;
use listkeeper::User;
use ratatui::layout::Rect;
use std::cell::Cell;
use std::rc::Rc;

struct Fixture {
    history: History,
    session: LocalSession,
    nav: MainNav,
}

fn fixture_with_toggle(start: &str, toggle: Option<NavToggle>) -> Fixture {
    let history = History::new(start);
    let session = LocalSession::new("Ada");
    let toggle = toggle.unwrap_or_else(|| nav_toggle(history.clone()));
    let mut nav = MainNav::new(
        history.clone(),
        Rc::new(session.clone()),
        session.login_action(),
        session.logout_action(),
        toggle,
        "1.2.3",
        30,
    );
    nav.mount();
    Fixture { history, session, nav }
}

fn fixture(start: &str) -> Fixture {
    fixture_with_toggle(start, None)
}

#[test]
fn test_state_follows_menu_presence() {
    assert_eq!(fixture("/?menu").nav.state(), NavState::Open);
    assert_eq!(fixture("/?menu=0").nav.state(), NavState::Open);
    assert_eq!(fixture("/?other=1").nav.state(), NavState::Closed);
    assert_eq!(fixture("/categories").nav.state(), NavState::Closed);
}

#[test]
fn test_location_changes_update_state() {
    let f = fixture("/?menu");
    f.history.push("/");
    assert_eq!(f.nav.state(), NavState::Closed);

    f.history.back().unwrap();
    assert_eq!(f.nav.state(), NavState::Open);

    f.history.forward().unwrap();
    assert_eq!(f.nav.state(), NavState::Closed);
}

#[test]
fn test_close_gesture_goes_through_toggle() {
    let mut f = fixture("/categories?menu");
    f.nav.handle_key_events(key(KeyCode::Esc));

    assert_eq!(f.nav.state(), NavState::Closed);
    assert_eq!(f.history.location().to_string(), "/categories");

    // The close was a navigation, so back reopens the drawer
    f.history.back().unwrap();
    assert_eq!(f.nav.state(), NavState::Open);
}

#[test]
fn test_toggle_without_navigation_applies_locally() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let toggle: NavToggle = Rc::new(move || counter.set(counter.get() + 1));
    let mut f = fixture_with_toggle("/?menu", Some(toggle));

    f.nav.handle_key_events(key(KeyCode::Char('m')));

    assert_eq!(calls.get(), 1);
    assert_eq!(f.nav.state(), NavState::Closed);
    assert_eq!(f.history.location().to_string(), "/?menu");
}

#[test]
fn test_route_activation_toggles_then_navigates() {
    let mut f = fixture("/?menu");
    f.nav.handle_key_events(key(KeyCode::Down));
    f.nav.handle_key_events(key(KeyCode::Enter));

    assert_eq!(f.history.location().to_string(), "/categories");
    assert_eq!(f.nav.state(), NavState::Closed);

    f.history.back().unwrap();
    assert_eq!(f.history.location().to_string(), "/");
    assert_eq!(f.nav.state(), NavState::Closed);
}

#[test]
fn test_activating_current_route_still_toggles() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let toggle: NavToggle = Rc::new(move || counter.set(counter.get() + 1));
    let mut f = fixture_with_toggle("/?menu", Some(toggle));

    f.nav.handle_key_events(key(KeyCode::Enter));

    assert_eq!(calls.get(), 1);
    assert_eq!(f.history.location().to_string(), "/");
}

#[test]
fn test_unmount_releases_listener() {
    let mut f = fixture("/");
    assert_eq!(f.history.listener_count(), 1);

    f.nav.unmount();
    assert!(!f.nav.is_mounted());
    assert_eq!(f.history.listener_count(), 0);

    f.history.push("/?menu");
    assert_eq!(f.nav.state(), NavState::Closed);
}

#[test]
fn test_events_after_unmount_are_ignored() {
    let mut f = fixture("/?menu");
    f.nav.unmount();

    f.nav.handle_key_events(key(KeyCode::Esc));
    f.nav.handle_key_events(key(KeyCode::Char('l')));

    assert_eq!(f.history.location().to_string(), "/?menu");
    assert!(f.session.current_user().is_none());
}

#[test]
fn test_drop_releases_listener() {
    let f = fixture("/");
    let history = f.history.clone();
    drop(f);
    assert_eq!(history.listener_count(), 0);
}

#[test]
fn test_greeting_follows_session() {
    let mut f = fixture("/?menu");
    assert_eq!(f.nav.greeting(), Greeting::Anonymous);

    let buffer = draw(80, 20, |frame, area| f.nav.render(frame, area));
    assert!(contains(&buffer, "Hi stranger Login"));

    f.nav.handle_key_events(key(KeyCode::Char('l')));
    assert_eq!(f.session.current_user(), Some(User::new("Ada")));
    // Session actions never change the drawer state
    assert_eq!(f.nav.state(), NavState::Open);

    let buffer = draw(80, 20, |frame, area| f.nav.render(frame, area));
    assert!(contains(&buffer, "Hi Ada Logout"));
}

#[test]
fn test_footer_shows_version() {
    let mut f = fixture("/?menu");
    let buffer = draw(80, 20, |frame, area| f.nav.render(frame, area));
    assert_eq!(row_of(&buffer, "1.2.3"), Some(18));
}

#[test]
fn test_closed_drawer_renders_nothing() {
    let mut f = fixture("/");
    let buffer = draw(80, 20, |frame, area| f.nav.render(frame, area));
    assert!(!contains(&buffer, "Hi stranger"));
}

#[test]
fn test_mouse_gestures() {
    let mut f = fixture("/");
    let area = Rect::new(0, 0, 80, 20);

    // Swipe strip at the left edge opens
    f.nav.handle_mouse_events(click(0, 10), area);
    assert_eq!(f.nav.state(), NavState::Open);
    assert_eq!(f.history.location().to_string(), "/?menu");

    // Backdrop closes
    f.nav.handle_mouse_events(click(50, 10), area);
    assert_eq!(f.nav.state(), NavState::Closed);
    assert_eq!(f.history.location().to_string(), "/");
}

#[test]
fn test_mouse_on_greeting_and_routes() {
    let mut f = fixture("/?menu");
    let area = Rect::new(0, 0, 80, 20);
    let buffer = draw(80, 20, |frame, area| f.nav.render(frame, area));

    let greeting_row = row_of(&buffer, "Hi stranger").expect("greeting row") as u16;
    // "Hi stranger " takes 12 columns after the border
    f.nav.handle_mouse_events(click(14, greeting_row), area);
    assert!(f.session.current_user().is_some());

    let categories_row = row_of(&buffer, "Categories").expect("route row") as u16;
    f.nav.handle_mouse_events(click(5, categories_row), area);
    assert_eq!(f.history.location().to_string(), "/categories");
}

#[test]
fn test_drawer_fills_narrow_screens() {
    let mut f = fixture("/?menu");
    let area = Rect::new(0, 0, 40, 20);

    // No backdrop remains, so a click on the right side stays in the drawer
    f.nav.handle_mouse_events(click(38, 15), area);
    assert_eq!(f.nav.state(), NavState::Open);
}
