//! Transaction repository
//!
//! Holds the ordered transaction collection and the next-ID counter, and
//! knows how to read and write `transactions.json`.

use std::path::PathBuf;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{CategoryId, Transaction, TransactionId};

use super::codec::{decode_collection, encode_collection};
use super::file_io::{load_document, save_document};

/// In-memory transaction collection backed by one JSON file
#[derive(Debug)]
pub struct TransactionRepository {
    path: PathBuf,
    transactions: Vec<Transaction>,
    next_id: TransactionId,
}

impl TransactionRepository {
    /// Create an empty repository for the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            transactions: Vec::new(),
            next_id: TransactionId::new(1),
        }
    }

    /// Replace the collection with the file contents
    ///
    /// On failure the collection is left empty rather than stale. A file
    /// holding the largest representable ID fails to load, since no further
    /// IDs could be assigned.
    pub fn load(&mut self) -> TrackerResult<usize> {
        let loaded = load_document(&self.path)
            .and_then(decode_collection::<Transaction>)
            .and_then(|transactions| self.replace_all(transactions));

        match loaded {
            Ok(()) => Ok(self.transactions.len()),
            Err(e) => {
                self.transactions.clear();
                self.next_id = TransactionId::new(1);
                Err(e)
            }
        }
    }

    /// Write the whole collection to disk
    pub fn save(&self) -> TrackerResult<()> {
        let document = encode_collection(&self.transactions)?;
        save_document(&self.path, &document)
    }

    fn replace_all(&mut self, transactions: Vec<Transaction>) -> TrackerResult<()> {
        let max_id = transactions
            .iter()
            .map(|r| r.id)
            .max()
            .filter(|id| id.get() > 0)
            .unwrap_or(TransactionId::UNASSIGNED);
        let Some(next_id) = max_id.next() else {
            return Err(TrackerError::Storage(format!(
                "{} holds Transaction ID {}, which leaves no room for further IDs",
                self.path.display(),
                max_id
            )));
        };
        self.next_id = next_id;
        self.transactions = transactions;
        Ok(())
    }

    /// Append a transaction, assigning an ID if it has none
    ///
    /// Returns the stored record. Fails without mutating if the ID is taken.
    pub fn insert(&mut self, mut transaction: Transaction) -> TrackerResult<Transaction> {
        if transaction.id.is_unassigned() {
            transaction.id = self.next_id;
            self.next_id = self
                .next_id
                .next()
                .ok_or_else(|| TrackerError::id_exhausted("Transaction", transaction.id))?;
        }

        if self.position(transaction.id).is_some() {
            return Err(TrackerError::duplicate(
                "Transaction",
                transaction.id.to_string(),
            ));
        }

        if transaction.id >= self.next_id {
            self.next_id = transaction
                .id
                .next()
                .ok_or_else(|| TrackerError::id_exhausted("Transaction", transaction.id))?;
        }

        self.transactions.push(transaction.clone());
        Ok(transaction)
    }

    /// Overwrite the stored transaction with the same ID, returning the old one
    pub fn replace(&mut self, transaction: Transaction) -> TrackerResult<Transaction> {
        let index = self
            .position(transaction.id)
            .ok_or_else(|| TrackerError::transaction_not_found(transaction.id.to_string()))?;
        Ok(std::mem::replace(&mut self.transactions[index], transaction))
    }

    /// Remove a transaction by ID, returning it
    pub fn remove(&mut self, id: TransactionId) -> TrackerResult<Transaction> {
        let index = self
            .position(id)
            .ok_or_else(|| TrackerError::transaction_not_found(id.to_string()))?;
        Ok(self.transactions.remove(index))
    }

    /// Look up a transaction by ID
    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// All transactions in insertion order
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Transactions referencing a category, in insertion order
    pub fn by_category(&self, category_id: CategoryId) -> impl Iterator<Item = &Transaction> {
        self.transactions
            .iter()
            .filter(move |t| t.category_id == category_id)
    }

    /// Transactions whose date falls in the "YYYY-MM" month, in insertion order
    pub fn in_month<'a>(&'a self, month_year: &'a str) -> impl Iterator<Item = &'a Transaction> {
        self.transactions.iter().filter(move |t| t.in_month(month_year))
    }

    /// The ID the next unassigned insert will receive
    pub fn next_id(&self) -> TransactionId {
        self.next_id
    }

    /// Count transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    fn position(&self, id: TransactionId) -> Option<usize> {
        self.transactions.iter().position(|t| t.id == id)
    }
}
