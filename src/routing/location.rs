//! URL-like locations: a path plus an optional query string.

use std::fmt;
use url::form_urlencoded;

/// The current position of the application, e.g. `/categories?menu`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    /// Absolute path, always starting with `/`
    pub path: String,
    /// Query string including the leading `?`, or empty
    pub search: String,
}

impl Location {
    /// Parse a location string.
    ///
    /// Relative paths such as `categories` resolve against `/`. A fragment
    /// (`#...`) is ignored.
    pub fn parse(input: &str) -> Self {
        let input = input.split('#').next().unwrap_or_default();
        let (raw_path, query) = match input.split_once('?') {
            Some((path, query)) => (path, query),
            None => (input, ""),
        };

        let path = if raw_path.starts_with('/') {
            raw_path.to_string()
        } else {
            format!("/{raw_path}")
        };

        let search = if query.is_empty() {
            String::new()
        } else {
            format!("?{query}")
        };

        Self { path, search }
    }

    fn query(&self) -> &str {
        self.search.strip_prefix('?').unwrap_or(&self.search)
    }

    /// Whether the query string carries a parameter with this name.
    /// Only presence matters, the value is ignored.
    pub fn has_query_param(&self, name: &str) -> bool {
        form_urlencoded::parse(self.query().as_bytes()).any(|(key, _)| key == name)
    }

    /// Copy of this location with every parameter named `name` removed.
    /// The remaining segments are kept exactly as written.
    #[must_use]
    pub fn without_query_param(&self, name: &str) -> Self {
        let remaining: Vec<&str> = self
            .query()
            .split('&')
            .filter(|segment| !segment.is_empty())
            .filter(|segment| {
                !form_urlencoded::parse(segment.as_bytes()).any(|(key, _)| key == name)
            })
            .collect();

        Self {
            path: self.path.clone(),
            search: if remaining.is_empty() {
                String::new()
            } else {
                format!("?{}", remaining.join("&"))
            },
        }
    }

    /// Copy of this location with a bare `name` flag appended
    #[must_use]
    pub fn with_query_flag(&self, name: &str) -> Self {
        if self.has_query_param(name) {
            return self.clone();
        }

        let flag: String = form_urlencoded::byte_serialize(name.as_bytes()).collect();
        let search = match self.query() {
            "" => format!("?{flag}"),
            query => format!("?{query}&{flag}"),
        };

        Self {
            path: self.path.clone(),
            search,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.path, self.search)
    }
}

impl From<&str> for Location {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}
