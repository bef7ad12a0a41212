use crate::helpers::{click, contains, draw, key, lines, row_of};
use crossterm::event::KeyCode;
use listkeeper::constants::ACCENT_SEVERE;
use listkeeper::ui::components::{Category, GroupedList, GroupedListItem};
use listkeeper::ui::core::{Action, Component};
use listkeeper::Urgency;
use ratatui::layout::Rect;
use std::cell::RefCell;
use std::rc::Rc;

fn categories() -> Vec<Category> {
    vec![
        (
            "Dairy".to_string(),
            vec![
                GroupedListItem::new("milk", "Milk").with_level(Urgency::Severe),
                GroupedListItem::new("butter", "Butter").with_secondary("salted"),
            ],
        ),
        ("Fruit".to_string(), vec![GroupedListItem::new("apples", "Apples").checked(true)]),
    ]
}

fn recording_list() -> (GroupedList, Rc<RefCell<Vec<GroupedListItem>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let mut list = GroupedList::new("List", "[-]", move |item: &GroupedListItem| {
        sink.borrow_mut().push(item.clone());
        Action::ToggleEntry(item.key.clone())
    });
    list.set_categories(categories());
    (list, seen)
}

#[test]
fn test_sections_render_in_input_order() {
    let (mut list, _) = recording_list();
    let buffer = draw(40, 12, |f, area| list.render(f, area));

    let dairy = row_of(&buffer, "Dairy").expect("Dairy header");
    let milk = row_of(&buffer, "Milk").expect("Milk row");
    let butter = row_of(&buffer, "Butter").expect("Butter row");
    let fruit = row_of(&buffer, "Fruit").expect("Fruit header");
    let apples = row_of(&buffer, "Apples").expect("Apples row");

    assert!(dairy < milk && milk < butter && butter < fruit && fruit < apples);
    assert!(contains(&buffer, "salted"));
}

#[test]
fn test_duplicate_labels_render_separate_sections() {
    let (mut list, _) = recording_list();
    list.set_categories(vec![
        ("Dairy".to_string(), vec![GroupedListItem::new("a", "Milk")]),
        ("Dairy".to_string(), vec![GroupedListItem::new("b", "Cream")]),
    ]);
    let buffer = draw(40, 10, |f, area| list.render(f, area));

    let headers = lines(&buffer)
        .iter()
        .filter(|line| line.trim_start_matches('│').trim_start().starts_with("Dairy"))
        .count();
    assert_eq!(headers, 2);
}

#[test]
fn test_check_calls_callback_once_with_full_item() {
    let (mut list, seen) = recording_list();

    let action = list.handle_key_events(key(KeyCode::Char(' ')));

    assert_eq!(action, Action::ToggleEntry("milk".to_string()));
    assert_eq!(seen.borrow().len(), 1);
    assert_eq!(seen.borrow()[0], categories()[0].1[0]);

    // The list never flips the item itself
    assert!(!list.categories()[0].1[0].checked);
}

#[test]
fn test_cursor_skips_headers_and_wraps() {
    let (mut list, _) = recording_list();

    for expected in ["butter", "apples", "milk"] {
        let action = list.handle_key_events(key(KeyCode::Char('j')));
        assert_eq!(list.update(action), Action::None);
        assert_eq!(list.selected_item().map(|item| item.key.as_str()), Some(expected));
    }

    let action = list.handle_key_events(key(KeyCode::Up));
    list.update(action);
    assert_eq!(list.selected_item().map(|item| item.key.as_str()), Some("apples"));

    list.handle_key_events(key(KeyCode::Home));
    assert_eq!(list.selected_ordinal(), 0);
}

#[test]
fn test_no_action_control_without_callback() {
    let (mut list, _) = recording_list();
    assert!(!list.has_action());
    assert_eq!(list.handle_key_events(key(KeyCode::Char('d'))), Action::None);

    let buffer = draw(40, 12, |f, area| list.render(f, area));
    assert!(!contains(&buffer, "[-]"));
}

#[test]
fn test_action_callback_and_icon() {
    let (list, seen) = recording_list();
    let mut list = list.on_action(|item| Action::RemoveEntry(item.key.clone()));

    assert_eq!(
        list.handle_key_events(key(KeyCode::Delete)),
        Action::RemoveEntry("milk".to_string())
    );
    assert!(seen.borrow().is_empty());

    let buffer = draw(40, 12, |f, area| list.render(f, area));
    assert!(contains(&buffer, "[-]"));
}

#[test]
fn test_mouse_hits_checkbox_action_and_row() {
    let (list, seen) = recording_list();
    let mut list = list.on_action(|item| Action::RemoveEntry(item.key.clone()));
    let area = Rect::new(0, 0, 40, 12);
    draw(40, 12, |f, area| list.render(f, area));

    // Row 1 is the Dairy header, rows 2 and 3 hold Milk and Butter
    assert_eq!(list.handle_mouse_events(click(10, 1), area), Action::None);

    assert_eq!(
        list.handle_mouse_events(click(3, 3), area),
        Action::ToggleEntry("butter".to_string())
    );
    assert_eq!(seen.borrow().last().map(|item| item.key.clone()), Some("butter".to_string()));

    assert_eq!(
        list.handle_mouse_events(click(37, 2), area),
        Action::RemoveEntry("milk".to_string())
    );

    assert_eq!(list.handle_mouse_events(click(15, 3), area), Action::None);
    assert_eq!(list.selected_item().map(|item| item.key.as_str()), Some("butter"));
}

#[test]
fn test_long_names_keep_the_action_icon() {
    let (list, _) = recording_list();
    let mut list = list.on_action(|item| Action::RemoveEntry(item.key.clone()));
    list.set_categories(vec![(
        "Pantry".to_string(),
        vec![GroupedListItem::new("k", "A very long product name that overflows the row width")],
    )]);
    let area = Rect::new(0, 0, 40, 8);
    let buffer = draw(40, 8, |f, area| list.render(f, area));

    let row = lines(&buffer)[2].clone();
    assert!(row.ends_with("[-]│"), "icon missing from {row:?}");
    assert!(row.contains("A very long"));
    assert!(row.contains('…'));

    // Clicking the name only moves the cursor
    assert_eq!(list.handle_mouse_events(click(20, 2), area), Action::None);
    assert_eq!(list.handle_mouse_events(click(34, 2), area), Action::None);

    assert_eq!(
        list.handle_mouse_events(click(37, 2), area),
        Action::RemoveEntry("k".to_string())
    );
}

#[test]
fn test_severe_items_get_severe_accent() {
    let (mut list, _) = recording_list();
    let buffer = draw(40, 12, |f, area| list.render(f, area));

    let milk_row = row_of(&buffer, "Milk").expect("Milk row") as u16;
    assert_eq!(buffer[(1, milk_row)].fg, ACCENT_SEVERE);

    let butter_row = row_of(&buffer, "Butter").expect("Butter row") as u16;
    assert_ne!(buffer[(1, butter_row)].fg, ACCENT_SEVERE);
}

#[test]
fn test_new_props_clamp_cursor() {
    let (mut list, _) = recording_list();
    assert!(list.select_key("apples"));
    assert!(!list.select_key("missing"));

    list.set_categories(vec![("Dairy".to_string(), vec![GroupedListItem::new("milk", "Milk")])]);
    assert_eq!(list.selected_item().map(|item| item.key.as_str()), Some("milk"));

    list.set_categories(Vec::new());
    assert!(list.selected_item().is_none());
    assert_eq!(list.handle_key_events(key(KeyCode::Enter)), Action::None);
}

#[test]
fn test_empty_list_shows_message() {
    let mut list = GroupedList::new("List", "[-]", |_: &GroupedListItem| Action::None).with_empty_message("Nothing here");
    let buffer = draw(40, 6, |f, area| list.render(f, area));
    assert!(contains(&buffer, "Nothing here"));
}
