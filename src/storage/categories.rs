//! Category repository
//!
//! Holds the ordered category collection and the next-ID counter, and knows
//! how to read and write `categories.json`.

use std::path::PathBuf;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, CategoryId};

use super::codec::{decode_collection, encode_collection};
use super::file_io::{load_document, save_document};

/// In-memory category collection backed by one JSON file
#[derive(Debug)]
pub struct CategoryRepository {
    path: PathBuf,
    categories: Vec<Category>,
    next_id: CategoryId,
}

impl CategoryRepository {
    /// Create an empty repository for the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            categories: Vec::new(),
            next_id: CategoryId::new(1),
        }
    }

    /// Replace the collection with the file contents
    ///
    /// On failure the collection is left empty rather than stale. A file
    /// holding the largest representable ID fails to load, since no further
    /// IDs could be assigned.
    pub fn load(&mut self) -> TrackerResult<usize> {
        let loaded = load_document(&self.path)
            .and_then(decode_collection::<Category>)
            .and_then(|categories| self.replace_all(categories));

        match loaded {
            Ok(()) => Ok(self.categories.len()),
            Err(e) => {
                self.categories.clear();
                self.next_id = CategoryId::new(1);
                Err(e)
            }
        }
    }

    /// Write the whole collection to disk
    pub fn save(&self) -> TrackerResult<()> {
        let document = encode_collection(&self.categories)?;
        save_document(&self.path, &document)
    }

    fn replace_all(&mut self, categories: Vec<Category>) -> TrackerResult<()> {
        let max_id = categories
            .iter()
            .map(|r| r.id)
            .max()
            .filter(|id| id.get() > 0)
            .unwrap_or(CategoryId::UNASSIGNED);
        let Some(next_id) = max_id.next() else {
            return Err(TrackerError::Storage(format!(
                "{} holds Category ID {}, which leaves no room for further IDs",
                self.path.display(),
                max_id
            )));
        };
        self.next_id = next_id;
        self.categories = categories;
        Ok(())
    }

    /// Append a category, assigning an ID if it has none
    ///
    /// Returns the stored record. Fails without mutating if the ID is taken.
    pub fn insert(&mut self, mut category: Category) -> TrackerResult<Category> {
        if category.id.is_unassigned() {
            category.id = self.next_id;
            self.next_id = self
                .next_id
                .next()
                .ok_or_else(|| TrackerError::id_exhausted("Category", category.id))?;
        }

        if self.position(category.id).is_some() {
            return Err(TrackerError::duplicate("Category", category.id.to_string()));
        }

        if category.id >= self.next_id {
            self.next_id = category
                .id
                .next()
                .ok_or_else(|| TrackerError::id_exhausted("Category", category.id))?;
        }

        self.categories.push(category.clone());
        Ok(category)
    }

    /// Overwrite the stored category with the same ID, returning the old one
    pub fn replace(&mut self, category: Category) -> TrackerResult<Category> {
        let index = self
            .position(category.id)
            .ok_or_else(|| TrackerError::category_not_found(category.id.to_string()))?;
        Ok(std::mem::replace(&mut self.categories[index], category))
    }

    /// Remove a category by ID, returning it
    pub fn remove(&mut self, id: CategoryId) -> TrackerResult<Category> {
        let index = self
            .position(id)
            .ok_or_else(|| TrackerError::category_not_found(id.to_string()))?;
        Ok(self.categories.remove(index))
    }

    /// Look up a category by ID
    pub fn get(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// All categories in insertion order
    pub fn all(&self) -> &[Category] {
        &self.categories
    }

    /// The ID the next unassigned insert will receive
    pub fn next_id(&self) -> CategoryId {
        self.next_id
    }

    /// Count categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    fn position(&self, id: CategoryId) -> Option<usize> {
        self.categories.iter().position(|c| c.id == id)
    }
}
