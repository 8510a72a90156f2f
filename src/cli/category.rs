//! Category CLI commands

use clap::Subcommand;

use crate::display::category::{format_category_details, format_category_list};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, CategoryId};
use crate::storage::RecordStore;

/// Default color for categories created without one
pub const DEFAULT_COLOR: &str = "#9E9E9E";

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories
    List,

    /// Create a new category
    Add {
        /// Category name
        name: String,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Hex color code (e.g., "#4CAF50")
        #[arg(short, long, default_value = DEFAULT_COLOR)]
        color: String,
        /// Explicit ID instead of the next free one
        #[arg(long)]
        id: Option<i32>,
    },

    /// Show category details
    Show {
        /// Category name or ID
        category: String,
    },

    /// Edit a category
    Edit {
        /// Category name or ID
        category: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New color
        #[arg(short, long)]
        color: Option<String>,
    },

    /// Delete a category (transactions and budgets referencing it are kept)
    Delete {
        /// Category name or ID
        category: String,
    },
}

/// Find a category by numeric ID, falling back to a case-insensitive name match
pub fn find_category(store: &RecordStore, query: &str) -> Option<Category> {
    let query = query.trim();
    if let Ok(id) = query.parse::<CategoryId>() {
        if let Some(category) = store.get_category(id) {
            return Some(category);
        }
    }

    store
        .get_all_categories()
        .into_iter()
        .find(|c| c.name.eq_ignore_ascii_case(query))
}

/// Resolve a category reference for a transaction or budget
///
/// Numeric input is taken as-is, even if no such category exists; names must
/// match an existing category.
pub fn resolve_category_id(store: &RecordStore, query: &str) -> TrackerResult<CategoryId> {
    if let Ok(id) = query.trim().parse::<CategoryId>() {
        return Ok(id);
    }

    find_category(store, query)
        .map(|c| c.id)
        .ok_or_else(|| TrackerError::category_not_found(query))
}

/// Handle a category command
pub fn handle_category_command(
    store: &mut RecordStore,
    cmd: CategoryCommands,
) -> TrackerResult<()> {
    match cmd {
        CategoryCommands::List => {
            print!("{}", format_category_list(&store.get_all_categories()));
        }

        CategoryCommands::Add {
            name,
            description,
            color,
            id,
        } => {
            let id = id.map(CategoryId::new).unwrap_or(CategoryId::UNASSIGNED);
            let category = Category::with_id(id, name, description, color);
            let name = category.name.clone();

            let id = store.add_category(category)?;
            println!("Created category: {}", name);
            println!("  ID: {}", id);
        }

        CategoryCommands::Show { category } => {
            let cat = find_category(store, &category)
                .ok_or_else(|| TrackerError::category_not_found(&category))?;
            print!("{}", format_category_details(&cat));
        }

        CategoryCommands::Edit {
            category,
            name,
            description,
            color,
        } => {
            let mut cat = find_category(store, &category)
                .ok_or_else(|| TrackerError::category_not_found(&category))?;

            if name.is_none() && description.is_none() && color.is_none() {
                println!("No changes specified. Use --name, --description, or --color.");
                return Ok(());
            }

            if let Some(name) = name {
                cat.name = name;
            }
            if let Some(description) = description {
                cat.description = description;
            }
            if let Some(color) = color {
                cat.color = color;
            }

            let name = cat.name.clone();
            store.update_category(cat)?;
            println!("Updated category: {}", name);
        }

        CategoryCommands::Delete { category } => {
            let cat = find_category(store, &category)
                .ok_or_else(|| TrackerError::category_not_found(&category))?;

            store.delete_category(cat.id)?;
            println!("Deleted category: {}", cat.name);
        }
    }

    Ok(())
}
