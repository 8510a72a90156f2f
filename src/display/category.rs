//! Category display formatting

use crate::models::Category;

use super::report::truncate;

/// Format categories as a table
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n".to_string();
    }

    let name_width = categories
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(4)
        .clamp(4, 24);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:<width$}  {:<8}  {}\n",
        "ID",
        "Name",
        "Color",
        "Description",
        width = name_width
    ));
    output.push_str(&format!(
        "{:->4}  {:-<width$}  {:-<8}  {:-<11}\n",
        "",
        "",
        "",
        "",
        width = name_width
    ));

    for category in categories {
        output.push_str(&format!(
            "{:>4}  {:<width$}  {:<8}  {}\n",
            category.id,
            truncate(&category.name, name_width),
            category.color,
            category.description,
            width = name_width
        ));
    }

    output
}

/// Format category details
pub fn format_category_details(category: &Category) -> String {
    let mut output = String::new();

    output.push_str(&format!("Category: {}\n", category.name));
    output.push_str(&format!("  ID:          {}\n", category.id));
    output.push_str(&format!("  Color:       {}\n", category.color));
    if !category.description.is_empty() {
        output.push_str(&format!("  Description: {}\n", category.description));
    }

    output
}
