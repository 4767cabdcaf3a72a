use std::collections::HashSet;

use tracing::{debug, trace};

use crate::query::projection::{ProjectionEntry, ProjectionList};

/// `ExclusionSet` holds the bare column names to remove from a projection.
///
/// Names are compared by exact, case-sensitive equality against the trimmed
/// sub-columns of each entry.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    names: HashSet<String>,
}

impl ExclusionSet {
    pub fn new<I, S>(names: I) -> ExclusionSet
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|name| name.as_ref().to_string())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub(crate) fn contains(&self, column: &str) -> bool {
        self.names.contains(column)
    }
}

/// The outcome of reducing a single projection entry.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum EntryReduction {
    /// No sub-column matched; the entry is kept verbatim.
    Untouched,
    /// Some sub-columns were removed; the survivors re-joined with `", "`.
    Reduced(String),
    /// Every sub-column was removed.
    Removed,
}

/// `ColumnReducer` removes excluded column names from a `ProjectionList`.
///
/// The reduction never fails. Unknown names are ignored and the result may be
/// empty; rejecting an empty projection is left to SQL generation.
pub struct ColumnReducer {
    exclusions: ExclusionSet,
}

impl ColumnReducer {
    pub fn new(exclusions: ExclusionSet) -> ColumnReducer {
        Self { exclusions }
    }

    /// Returns a new `ProjectionList` with every excluded column removed.
    ///
    /// Entries keep their relative order, as do the surviving sub-columns
    /// inside a packed entry. Untouched entries are copied verbatim, a
    /// partially reduced entry is rebuilt from its trimmed survivors, and an
    /// entry whose sub-columns are all excluded is dropped.
    pub fn reduce(&self, projection: &ProjectionList) -> ProjectionList {
        if self.exclusions.is_empty() {
            return projection.clone();
        }

        let mut entries = Vec::with_capacity(projection.len());
        for raw in projection.entries() {
            match self.reduce_entry(&ProjectionEntry::new(raw)) {
                EntryReduction::Untouched => entries.push(raw.clone()),
                EntryReduction::Reduced(entry) => {
                    trace!(from = %raw, to = %entry, "reduced projection entry");
                    entries.push(entry)
                }
                EntryReduction::Removed => {
                    trace!(entry = %raw, "removed projection entry");
                }
            }
        }

        debug!(
            exclusions = self.exclusions.len(),
            before = projection.len(),
            after = entries.len(),
            "reduced projection list"
        );
        ProjectionList { entries }
    }

    pub(crate) fn reduce_entry(&self, entry: &ProjectionEntry) -> EntryReduction {
        let sub_columns: Vec<&str> = entry.sub_columns().collect();
        let matched = sub_columns
            .iter()
            .any(|column| self.exclusions.contains(column));
        if !matched {
            return EntryReduction::Untouched;
        }

        let survivors: Vec<&str> = sub_columns
            .into_iter()
            .filter(|column| !column.is_empty() && !self.exclusions.contains(column))
            .collect();

        if survivors.is_empty() {
            return EntryReduction::Removed;
        }
        EntryReduction::Reduced(survivors.join(", "))
    }
}
