//! Category display formatting

use crate::models::CategoryRegistry;

/// Format the registry as a numbered list
pub fn format_category_list(registry: &CategoryRegistry) -> String {
    if registry.is_empty() {
        return "No categories found.".to_string();
    }

    let mut output = String::from("Categories:\n");
    for (i, name) in registry.names().enumerate() {
        output.push_str(&format!("  {:>2}. {}\n", i + 1, name));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_list() {
        let registry = CategoryRegistry::with_categories(["Housing", "Groceries"]);
        assert_eq!(
            format_category_list(&registry),
            "Categories:\n   1. Housing\n   2. Groceries\n"
        );
    }

    #[test]
    fn test_empty_registry() {
        let registry = CategoryRegistry::with_categories(Vec::<String>::new());
        assert_eq!(format_category_list(&registry), "No categories found.");
    }
}
