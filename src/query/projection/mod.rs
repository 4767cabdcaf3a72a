pub mod reducer;

/// `ProjectionList` holds the entries following `SELECT`, in emission order.
///
/// Each entry is kept exactly as the caller supplied it. An entry may pack
/// several comma-separated columns (`"id, name"`); it is only ever split when
/// a reduction touches it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectionList {
    entries: Vec<String>,
}

impl ProjectionList {
    /// Creates a `ProjectionList` from the given entries, preserving their order.
    pub fn new<I, S>(entries: I) -> ProjectionList
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns a new `ProjectionList` with `entries` appended after the existing ones.
    pub(crate) fn extend<I, S>(&self, entries: I) -> ProjectionList
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut extended = self.entries.clone();
        extended.extend(entries.into_iter().map(Into::into));
        Self { entries: extended }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true when no entry has any non-whitespace content.
    pub fn is_blank(&self) -> bool {
        self.entries.iter().all(|entry| entry.trim().is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn render(&self) -> String {
        self.entries.join(", ")
    }
}

/// `ProjectionEntry` is a borrowed view over one raw projection entry.
pub(crate) struct ProjectionEntry<'a>(&'a str);

impl<'a> ProjectionEntry<'a> {
    pub(crate) fn new(raw: &'a str) -> ProjectionEntry<'a> {
        Self(raw)
    }

    /// Splits the entry on literal commas and trims every part.
    ///
    /// An entry without commas yields itself (trimmed) as the only sub-column.
    /// Commas nested inside parentheses are not understood, so
    /// `"coalesce(a, b)"` yields `"coalesce(a"` and `"b)"`.
    pub(crate) fn sub_columns(&self) -> impl Iterator<Item = &'a str> {
        self.0.split(',').map(str::trim)
    }
}
