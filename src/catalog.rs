use std::collections::HashSet;

use crate::{
    content::ContentError,
    models::{FilterSelection, ProjectRecord},
};

/// Narrows `records` to the ones `selection` admits, keeping their original
/// relative order. Never copies or mutates the records themselves.
pub fn filter(selection: FilterSelection, records: &[ProjectRecord]) -> Vec<&ProjectRecord> {
    records.iter().filter(|record| selection.matches(record)).collect()
}

/// Immutable list of projects shown in the gallery.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectCatalog {
    records: Vec<ProjectRecord>,
}

impl ProjectCatalog {
    pub fn new(records: Vec<ProjectRecord>) -> Result<Self, ContentError> {
        Self::check_unique_ids(&records)?;
        Ok(Self { records })
    }

    pub(crate) fn check_unique_ids(records: &[ProjectRecord]) -> Result<(), ContentError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in records {
            if !seen.insert(record.id) {
                return Err(ContentError::DuplicateProjectId(record.id));
            }
        }
        Ok(())
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&ProjectRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn filter(&self, selection: FilterSelection) -> Vec<&ProjectRecord> {
        filter(selection, &self.records)
    }

    /// Number of records a filter button would show.
    pub fn count(&self, selection: FilterSelection) -> usize {
        self.records
            .iter()
            .filter(|record| selection.matches(record))
            .count()
    }
}
