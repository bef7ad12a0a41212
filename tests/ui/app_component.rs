use crate::helpers::{click, contains, draw, key};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use listkeeper::auth::{AuthProvider, LocalSession};
use listkeeper::config::{Config, SeedItem};
use listkeeper::logger::Logger;
use listkeeper::routing::History;
use listkeeper::ui::app_component::{AppComponent, Page};
use listkeeper::ui::components::NavState;
use listkeeper::ui::core::{Component, EventType};
use listkeeper::Urgency;

fn seed(name: &str, category: &str, urgency: Option<Urgency>) -> SeedItem {
    SeedItem {
        name: name.to_string(),
        category: category.to_string(),
        urgency,
        note: None,
        checked: false,
    }
}

fn app_at(start: &str) -> AppComponent {
    let mut config = Config::default();
    config.list.items = Some(vec![
        seed("Milk", "Dairy", Some(Urgency::Severe)),
        seed("Butter", "Dairy", None),
        seed("Apples", "Fruit", Some(Urgency::Moderate)),
    ]);
    AppComponent::new(&config, History::new(start), LocalSession::new("Ada"), Logger::new())
}

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(key(code))).unwrap();
}

fn checked(app: &AppComponent, name: &str) -> bool {
    app.store()
        .entries()
        .iter()
        .find(|entry| entry.name == name)
        .map(|entry| entry.checked)
        .unwrap_or_default()
}

#[test]
fn test_page_follows_location() {
    assert_eq!(app_at("/").page(), Page::List);
    assert_eq!(app_at("/categories?menu").page(), Page::Categories);
    assert_eq!(app_at("/nowhere").page(), Page::NotFound);
}

#[test]
fn test_check_and_remove_on_list_page() {
    let mut app = app_at("/");

    press(&mut app, KeyCode::Char(' '));
    assert!(checked(&app, "Milk"));
    assert!(app.list_page().categories()[0].1[0].checked);

    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.store().len(), 2);
    assert_eq!(app.notice(), Some("Removed 'Butter'"));
}

#[test]
fn test_categories_page_checks_whole_category() {
    let mut app = app_at("/categories");
    assert!(!app.categories_page().has_action());

    press(&mut app, KeyCode::Enter);
    assert!(checked(&app, "Milk") && checked(&app, "Butter"));
    assert!(!checked(&app, "Apples"));
    assert!(app.categories_page().categories()[0].1[0].checked);

    // Checking a fully checked category clears it
    press(&mut app, KeyCode::Enter);
    assert!(!checked(&app, "Milk") && !checked(&app, "Butter"));

    // Removing is not offered here
    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.store().len(), 3);
}

#[test]
fn test_menu_key_and_history() {
    let mut app = app_at("/");

    press(&mut app, KeyCode::Char('m'));
    assert_eq!(app.main_nav().state(), NavState::Open);
    assert_eq!(app.history().location().to_string(), "/?menu");

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.main_nav().state(), NavState::Closed);

    press(&mut app, KeyCode::Char('b'));
    assert_eq!(app.main_nav().state(), NavState::Open);

    // Keys go to the drawer while it is open
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.page(), Page::Categories);
    assert_eq!(app.main_nav().state(), NavState::Closed);
}

#[test]
fn test_global_keys_work_with_drawer_open() {
    let mut app = app_at("/");
    press(&mut app, KeyCode::Char('m'));
    assert!(app.main_nav().is_open());

    press(&mut app, KeyCode::Char('b'));
    assert_eq!(app.history().location().to_string(), "/");
    assert_eq!(app.main_nav().state(), NavState::Closed);

    press(&mut app, KeyCode::Char('f'));
    assert_eq!(app.main_nav().state(), NavState::Open);

    press(&mut app, KeyCode::Char('G'));
    assert!(app.logs_visible());
    press(&mut app, KeyCode::Esc);
    assert!(!app.logs_visible());

    // 'm' still closes the drawer rather than toggling twice
    press(&mut app, KeyCode::Char('m'));
    assert_eq!(app.main_nav().state(), NavState::Closed);
}

#[test]
fn test_drawer_is_mounted_on_construction() {
    let app = app_at("/?menu");
    assert!(app.main_nav().is_mounted());
    assert_eq!(app.history().listener_count(), 1);
    assert!(app.main_nav().is_open());
}

#[test]
fn test_back_at_start_leaves_notice() {
    let mut app = app_at("/");
    press(&mut app, KeyCode::Char('b'));
    assert_eq!(app.notice(), Some("no earlier history entry"));
    assert_eq!(app.history().location().to_string(), "/");
}

#[test]
fn test_login_from_drawer() {
    let mut app = app_at("/?menu");
    assert!(app.session().current_user().is_none());

    press(&mut app, KeyCode::Char('l'));
    assert!(app.session().current_user().is_some());
    assert_eq!(app.main_nav().state(), NavState::Open);
}

#[test]
fn test_quit_keys() {
    let mut app = app_at("/");
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());

    let mut app = app_at("/?menu");
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)))
        .unwrap();
    assert!(app.should_quit());
}

#[test]
fn test_logs_panel_takes_keys_while_open() {
    let mut app = app_at("/");
    press(&mut app, KeyCode::Char('G'));
    assert!(app.logs_visible());

    // 'q' closes the panel instead of quitting
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.logs_visible());
    assert!(!app.should_quit());
}

#[test]
fn test_shutdown_releases_drawer_listener() {
    let mut app = app_at("/");
    assert_eq!(app.history().listener_count(), 1);
    app.shutdown();
    assert_eq!(app.history().listener_count(), 0);
}

#[test]
fn test_render_list_page() {
    let mut app = app_at("/");
    let buffer = draw(80, 24, |f, area| app.render(f, area));

    assert!(contains(&buffer, "listkeeper"));
    assert!(contains(&buffer, "Dairy"));
    assert!(contains(&buffer, "[ ] Milk"));
    assert!(contains(&buffer, "space: check"));
}

#[test]
fn test_render_not_found() {
    let mut app = app_at("/nowhere");
    let buffer = draw(80, 24, |f, area| app.render(f, area));
    assert!(contains(&buffer, "Nothing lives at /nowhere"));
}

#[test]
fn test_icon_theme_cycles() {
    let mut app = app_at("/");
    press(&mut app, KeyCode::Char('i'));
    let buffer = draw(80, 24, |f, area| app.render(f, area));
    assert!(contains(&buffer, "☐ Milk"));
}

#[test]
fn test_title_button_toggles_drawer() {
    let mut app = app_at("/");
    app.handle_event(EventType::Resize(80, 24)).unwrap();

    app.handle_event(EventType::Mouse(click(1, 0))).unwrap();
    assert_eq!(app.main_nav().state(), NavState::Open);

    // Backdrop click closes it again
    app.handle_event(EventType::Mouse(click(60, 10))).unwrap();
    assert_eq!(app.main_nav().state(), NavState::Closed);
}
