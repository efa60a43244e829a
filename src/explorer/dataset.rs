//! Dataset
//!
//! Read-only, cheaply clonable handle over the loaded company rows.
//! Row positions are the only stable row identity.

use std::sync::Arc;

use crate::domain::company::CompanyRecord;

/// Shared in-memory dataset
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    rows: Arc<Vec<CompanyRecord>>,
}

impl Dataset {
    pub fn new(rows: Vec<CompanyRecord>) -> Self {
        Self {
            rows: Arc::new(rows),
        }
    }

    /// All rows in dataset order
    pub fn all(&self) -> &[CompanyRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<Vec<CompanyRecord>> for Dataset {
    fn from(rows: Vec<CompanyRecord>) -> Self {
        Self::new(rows)
    }
}
