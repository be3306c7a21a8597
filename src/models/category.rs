//! Category registry
//!
//! Expenses and budgets are classified into a small, fixed, ordered set of
//! categories. Names keep their registry casing for display and match
//! case-insensitively everywhere else.

/// The default categories, in display order
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Housing",
    "Groceries",
    "Utilities",
    "Transportation",
    "Healthcare",
    "Entertainment",
    "Dining Out",
    "Personal",
    "Other",
];

/// The fixed, ordered set of valid expense categories
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    names: Vec<String>,
}

impl CategoryRegistry {
    /// Build a registry from an explicit list of names
    ///
    /// Later duplicates (compared case-insensitively) and blank names are dropped.
    pub fn with_categories<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self { names: Vec::new() };
        for name in names {
            let name = name.into().trim().to_string();
            if !name.is_empty() && !registry.validate(&name) {
                registry.names.push(name);
            }
        }
        registry
    }

    /// All category names in registry order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Check whether `name` is a known category (case-insensitive)
    pub fn validate(&self, name: &str) -> bool {
        self.canonicalize(name).is_some()
    }

    /// Return the registry's stored-case form of `name`, if it is known
    pub fn canonicalize(&self, name: &str) -> Option<&str> {
        let name = name.trim();
        self.names
            .iter()
            .find(|candidate| same_category(candidate, name))
            .map(String::as_str)
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::with_categories(DEFAULT_CATEGORIES.iter().copied())
    }
}

/// Case-insensitive category comparison used by every lookup
pub fn same_category(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}
