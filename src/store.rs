//! In-memory shopping list.
//!
//! The store owns the entries and shapes them into the category groups the
//! list views render. Nothing here is persisted.

use crate::config::SeedItem;
use crate::entities::{Entry, Urgency};
use crate::ui::components::grouped_list_item_component::{Category, GroupedListItem};
use once_cell::sync::Lazy;

static SAMPLE_ITEMS: Lazy<Vec<SeedItem>> = Lazy::new(|| {
    let seed = |name: &str, category: &str, urgency: Option<Urgency>, note: Option<&str>| SeedItem {
        name: name.to_string(),
        category: category.to_string(),
        urgency,
        note: note.map(str::to_string),
        checked: false,
    };

    vec![
        seed("Apples", "Fruit & vegetables", None, Some("6, for the week")),
        seed("Spinach", "Fruit & vegetables", Some(Urgency::Moderate), None),
        seed("Milk", "Dairy", Some(Urgency::Severe), Some("out since Monday")),
        seed("Butter", "Dairy", Some(Urgency::Low), None),
        seed("Coffee", "Pantry", Some(Urgency::Severe), Some("whole beans")),
        seed("Rice", "Pantry", None, None),
        seed("Dish soap", "Household", Some(Urgency::Moderate), None),
    ]
});

/// The shopping list entries, in insertion order
#[derive(Debug, Clone, Default)]
pub struct ShoppingList {
    entries: Vec<Entry>,
}

impl ShoppingList {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Build the list from config seed items, or the built-in sample when the
    /// config names none. An empty slice gives an empty list.
    pub fn from_seed(items: Option<&[SeedItem]>) -> Self {
        let items = items.unwrap_or(SAMPLE_ITEMS.as_slice());
        let entries = items
            .iter()
            .map(|item| {
                let mut entry = Entry::new(item.name.clone(), item.category.clone()).checked(item.checked);
                entry.urgency = item.urgency;
                entry.note = item.note.clone();
                entry
            })
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn find_mut(&mut self, key: &str) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|entry| entry.key() == key)
    }

    /// Flip the checked state of an entry. Returns the new state.
    pub fn toggle(&mut self, key: &str) -> Option<bool> {
        let entry = self.find_mut(key)?;
        entry.checked = !entry.checked;
        log::info!("store: '{}' checked = {}", entry.name, entry.checked);
        Some(entry.checked)
    }

    pub fn set_checked(&mut self, key: &str, checked: bool) -> bool {
        match self.find_mut(key) {
            Some(entry) => {
                entry.checked = checked;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<Entry> {
        let index = self.entries.iter().position(|entry| entry.key() == key)?;
        let entry = self.entries.remove(index);
        log::info!("store: removed '{}'", entry.name);
        Some(entry)
    }

    /// Check or uncheck every entry of a category. Returns how many entries changed.
    pub fn set_category_checked(&mut self, category: &str, checked: bool) -> usize {
        let mut changed = 0;
        for entry in self.entries.iter_mut().filter(|entry| entry.category == category) {
            if entry.checked != checked {
                entry.checked = checked;
                changed += 1;
            }
        }
        log::info!("store: category '{}' checked = {} ({} changed)", category, checked, changed);
        changed
    }

    /// Category names in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !names.contains(&entry.category.as_str()) {
                names.push(&entry.category);
            }
        }
        names
    }

    /// Entries grouped by category; categories keep first-seen order and
    /// entries keep list order inside each group.
    pub fn grouped_by_category(&self) -> Vec<Category> {
        self.categories()
            .into_iter()
            .map(|name| {
                let items = self
                    .entries
                    .iter()
                    .filter(|entry| entry.category == name)
                    .map(GroupedListItem::from)
                    .collect();
                (name.to_string(), items)
            })
            .collect()
    }

    /// One row per category, keyed by the category name. A row is checked
    /// when every entry in the category is.
    pub fn category_overview(&self) -> Vec<GroupedListItem> {
        self.categories()
            .into_iter()
            .map(|name| {
                let members: Vec<&Entry> = self.entries.iter().filter(|entry| entry.category == name).collect();
                let count = members.len();
                let most_urgent = members.iter().filter_map(|entry| entry.urgency).max_by_key(|u| *u as u8);
                GroupedListItem {
                    key: name.to_string(),
                    checked: members.iter().all(|entry| entry.checked),
                    primary: name.to_string(),
                    secondary: Some(if count == 1 {
                        "1 item".to_string()
                    } else {
                        format!("{count} items")
                    }),
                    level: most_urgent,
                }
            })
            .collect()
    }
}

impl From<&Entry> for GroupedListItem {
    fn from(entry: &Entry) -> Self {
        Self {
            key: entry.key(),
            checked: entry.checked,
            primary: entry.name.clone(),
            secondary: entry.note.clone(),
            level: entry.urgency,
        }
    }
}
