use crate::helpers::{contains, draw, key};
use crossterm::event::KeyCode;
use listkeeper::logger::Logger;
use listkeeper::ui::components::LogsPanel;
use listkeeper::ui::core::{Action, Component};

#[test]
fn test_hidden_panel_ignores_keys() {
    let mut panel = LogsPanel::new(Logger::new());
    assert_eq!(panel.handle_key_events(key(KeyCode::Esc)), Action::None);
}

#[test]
fn test_show_scroll_and_close() {
    let logger = Logger::new();
    for i in 0..5 {
        logger.log(format!("INFO  listkeeper: entry {i}"));
    }
    let mut panel = LogsPanel::new(logger);

    panel.update(Action::ShowLogs(true));
    assert!(panel.is_visible());

    let action = panel.handle_key_events(key(KeyCode::Char('j')));
    assert_eq!(action, Action::LogsScrollDown);
    panel.update(action);
    assert_eq!(panel.scroll_offset(), 1);

    panel.update(Action::LogsScrollUp);
    panel.update(Action::LogsScrollUp);
    assert_eq!(panel.scroll_offset(), 0);

    let close = panel.handle_key_events(key(KeyCode::Esc));
    assert_eq!(close, Action::ShowLogs(false));
    panel.update(close);
    assert!(!panel.is_visible());
}

#[test]
fn test_renders_newest_first() {
    let logger = Logger::new();
    logger.log("INFO  listkeeper: first".to_string());
    logger.log("INFO  listkeeper: second".to_string());
    let mut panel = LogsPanel::new(logger);
    panel.set_visible(true);

    let buffer = draw(80, 20, |f, area| panel.render(f, area));
    let text = crate::helpers::lines(&buffer).join("\n");
    let second = text.find("second").expect("second entry");
    let first = text.find("first").expect("first entry");
    assert!(second < first);
}

#[test]
fn test_empty_buffer_message() {
    let mut panel = LogsPanel::new(Logger::new());
    panel.set_visible(true);
    let buffer = draw(80, 20, |f, area| panel.render(f, area));
    assert!(contains(&buffer, "No logs available"));
}
