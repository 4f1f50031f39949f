//! Immutable, case-insensitive company lookup built once at startup.

pub mod error;
pub mod loader;

use crate::domain::company::{normalize_name, CompanyRecord};
use self::error::DataLoadError;
use std::collections::HashMap;

pub use loader::{load_csv_path, load_csv_reader};

#[derive(Debug, Clone)]
pub struct CompanyIndex {
    records: Vec<CompanyRecord>,
    names: Vec<String>,
    by_key: HashMap<String, usize>,
}

impl CompanyIndex {
    pub fn from_records(records: Vec<CompanyRecord>) -> Result<Self, DataLoadError> {
        for (idx, record) in records.iter().enumerate() {
            record
                .validate()
                .map_err(|reason| DataLoadError::InvalidRecord {
                    line: idx as u64 + 1,
                    company: record.company_name.clone(),
                    reason,
                })?;
        }
        Self::from_validated(records)
    }

    pub(crate) fn from_validated(records: Vec<CompanyRecord>) -> Result<Self, DataLoadError> {
        if records.is_empty() {
            return Err(DataLoadError::Empty);
        }

        let mut by_key = HashMap::with_capacity(records.len());
        for (idx, record) in records.iter().enumerate() {
            if by_key.insert(record.key(), idx).is_some() {
                return Err(DataLoadError::DuplicateCompany(record.company_name.clone()));
            }
        }

        let names = records.iter().map(|r| r.company_name.clone()).collect();
        Ok(Self {
            records,
            names,
            by_key,
        })
    }

    /// Exact match after lower-casing; no trimming or partial matching.
    pub fn lookup(&self, name: &str) -> Option<&CompanyRecord> {
        self.by_key
            .get(&normalize_name(name))
            .map(|&idx| &self.records[idx])
    }

    /// Names in load order.
    pub fn list_names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
