//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Checkbox glyphs
#[derive(Debug, Clone)]
pub struct CheckboxIcons {
    pub unchecked: &'static str,
    pub checked: &'static str,
}

/// Row action glyphs
#[derive(Debug, Clone)]
pub struct ActionIcons {
    pub remove: &'static str,
}

/// Navigation glyphs
#[derive(Debug, Clone)]
pub struct NavIcons {
    pub menu: &'static str,
    pub list: &'static str,
    pub categories: &'static str,
    pub user: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub checkbox: CheckboxIcons,
    pub actions: ActionIcons,
    pub nav: NavIcons,
    pub accent: &'static str,
    pub illustration: &'static [&'static str],
}

const ASCII_ILLUSTRATION: &[&str] = &[
    r"   _________  ",
    r"  |_|_|_|_|_\ ",
    r"   \_______/  ",
    r"    o     o   ",
];

const UNICODE_ILLUSTRATION: &[&str] = &[
    "  ┌────────┐  ",
    "  ├┬┬┬┬┬┬┬┬┤╲ ",
    "  └────────┘  ",
    "    ●    ●    ",
];

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            checkbox: CheckboxIcons {
                unchecked: "🔳",
                checked: "✅",
            },
            actions: ActionIcons { remove: "🗑️" },
            nav: NavIcons {
                menu: "☰",
                list: "📝",
                categories: "🗂️",
                user: "👤",
            },
            accent: "▌",
            illustration: UNICODE_ILLUSTRATION,
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            checkbox: CheckboxIcons {
                unchecked: "☐",
                checked: "☑",
            },
            actions: ActionIcons { remove: "✗" },
            nav: NavIcons {
                menu: "≡",
                list: "☰",
                categories: "◆",
                user: "●",
            },
            accent: "▌",
            illustration: UNICODE_ILLUSTRATION,
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            checkbox: CheckboxIcons {
                unchecked: "[ ]",
                checked: "[x]",
            },
            actions: ActionIcons { remove: "[-]" },
            nav: NavIcons {
                menu: "=",
                list: ">",
                categories: "#",
                user: "@",
            },
            accent: "|",
            illustration: ASCII_ILLUSTRATION,
        }
    }

    #[must_use]
    pub fn checkbox(&self, checked: bool) -> &'static str {
        let icons = self.icons().checkbox;
        if checked {
            icons.checked
        } else {
            icons.unchecked
        }
    }

    #[must_use]
    pub fn remove(&self) -> &'static str {
        self.icons().actions.remove
    }

    #[must_use]
    pub fn menu(&self) -> &'static str {
        self.icons().nav.menu
    }

    #[must_use]
    pub fn nav_list(&self) -> &'static str {
        self.icons().nav.list
    }

    #[must_use]
    pub fn nav_categories(&self) -> &'static str {
        self.icons().nav.categories
    }

    #[must_use]
    pub fn user(&self) -> &'static str {
        self.icons().nav.user
    }

    #[must_use]
    pub fn accent(&self) -> &'static str {
        self.icons().accent
    }

    #[must_use]
    pub fn illustration(&self) -> &'static [&'static str] {
        self.icons().illustration
    }
}
