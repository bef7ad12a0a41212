use listkeeper::ui::core::actions::Action;

#[test]
fn test_is_none() {
    assert!(Action::None.is_none());
    assert!(!Action::Quit.is_none());
    assert!(!Action::ToggleEntry("a".to_string()).is_none());
}

#[test]
fn test_category_action_equality() {
    let a = Action::SetCategoryChecked {
        category: "Dairy".to_string(),
        checked: true,
    };
    assert_eq!(a.clone(), a);
    assert_ne!(
        a,
        Action::SetCategoryChecked {
            category: "Dairy".to_string(),
            checked: false,
        }
    );
}
