use std::collections::HashMap;
use std::path::Path;

use crate::entities::FareEntry;

/// The fare table, loaded once at startup and read-only afterwards. Lookups
/// are keyed by `(postal_code, airport)`; when the source file repeats a
/// key, the first row wins.
#[derive(Debug, Default)]
pub struct FareTable {
    entries: Vec<FareEntry>,
    index: HashMap<(String, String), f64>,
}

impl FareTable {
    /// Reads the delimited fare file (header row: `postalCode,airport,price`).
    /// A missing or unreadable file yields an empty table, and malformed rows
    /// are skipped; bad fare data must never take the process down, it only
    /// makes lookups fail.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        let mut reader = match csv::Reader::from_path(path) {
            Ok(reader) => reader,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "fare table not loaded");
                return Self::default();
            }
        };

        let mut table = Self::default();

        for record in reader.deserialize::<FareEntry>() {
            match record {
                Ok(entry) => table.insert(entry),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "skipping fare row");
                }
            }
        }

        tracing::info!(
            path = %path.display(),
            entries = table.entries.len(),
            "fare table loaded"
        );

        table
    }

    fn insert(&mut self, entry: FareEntry) {
        let key = (entry.postal_code.clone(), entry.airport.clone());
        self.index.entry(key).or_insert(entry.price);
        self.entries.push(entry);
    }

    pub fn lookup(&self, postal_code: &str, airport: &str) -> Option<f64> {
        self.index
            .get(&(postal_code.to_owned(), airport.to_owned()))
            .copied()
    }

    pub fn entries(&self) -> &[FareEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn from_entries(entries: Vec<FareEntry>) -> Self {
        let mut table = Self::default();
        for entry in entries {
            table.insert(entry);
        }
        table
    }
}
