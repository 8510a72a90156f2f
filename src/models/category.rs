//! Category model
//!
//! Categories label transactions and budgets. The color is a free-form hex
//! string used by UIs; it is stored as given.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// A spending or income category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier (zero until inserted)
    pub id: CategoryId,

    /// Category name
    pub name: String,

    /// Longer description
    pub description: String,

    /// Display color, e.g. "#4CAF50"
    pub color: String,
}

impl Category {
    /// Create a category that will receive its ID on insert
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self::with_id(CategoryId::UNASSIGNED, name, description, color)
    }

    /// Create a fully-populated category
    pub fn with_id(
        id: CategoryId,
        name: impl Into<String>,
        description: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            color: color.into(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Category [ID: {}, Name: {}, Description: {}, Color: {}]",
            self.id, self.name, self.description, self.color
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category() {
        let category = Category::new("Groceries", "Food and household items", "#4CAF50");
        assert!(category.id.is_unassigned());
        assert_eq!(category.name, "Groceries");
        assert_eq!(category.color, "#4CAF50");
    }

    #[test]
    fn test_default_is_blank() {
        let category = Category::default();
        assert!(category.id.is_unassigned());
        assert!(category.name.is_empty());
        assert!(category.description.is_empty());
        assert!(category.color.is_empty());
    }

    #[test]
    fn test_display() {
        let category = Category::with_id(CategoryId::new(2), "Utilities", "Bills", "#2196F3");
        assert_eq!(
            category.to_string(),
            "Category [ID: 2, Name: Utilities, Description: Bills, Color: #2196F3]"
        );
    }
}
