/// Messages produced by components and handled by the app shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // List cursor
    NextItem,
    PreviousItem,

    // Shopping list operations
    ToggleEntry(String),
    RemoveEntry(String),
    SetCategoryChecked { category: String, checked: bool },

    // Navigation
    ToggleNav,
    GoBack,
    GoForward,

    // UI operations
    ShowLogs(bool),
    LogsScrollUp,
    LogsScrollDown,
    CycleIconTheme,

    // App control
    Quit,
    None,
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Action::None)
    }
}
