//! Word lists and their alignment onto wedge positions
//!
//! Three independent lists (inner, outer, outer sub) are collected from the
//! user. They are aligned into a [`WordTable`] with one [`WedgeWords`] record
//! per wedge, so every wedge has a defined (possibly empty) triple.

/// An ordered list of words; empty strings mean "no word at this position"
pub type WordSet = Vec<String>;

/// The words attached to a single wedge
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WedgeWords {
    /// Label inside the wedge, near the center
    pub inner: String,
    /// Label outside the wedge, at its outer tip
    pub outer: String,
    /// Label between this wedge and the next one
    pub sub: String,
}

impl WedgeWords {
    pub fn new(inner: impl Into<String>, outer: impl Into<String>, sub: impl Into<String>) -> Self {
        Self {
            inner: inner.into(),
            outer: outer.into(),
            sub: sub.into(),
        }
    }

    /// True when none of the three words is set
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty() && self.outer.is_empty() && self.sub.is_empty()
    }
}

/// Words for every wedge of a diagram, indexed by wedge position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordTable {
    wedges: Vec<WedgeWords>,
}

impl WordTable {
    /// A diagram never has fewer wedges than this
    pub const MIN_WEDGES: usize = 6;

    /// Align three word lists into a table of `max(len, MIN_WEDGES)` wedges.
    ///
    /// Positions past the end of a list get an empty string.
    pub fn align(inner: &[String], outer: &[String], sub: &[String]) -> Self {
        let n = inner
            .len()
            .max(outer.len())
            .max(sub.len())
            .max(Self::MIN_WEDGES);

        let word_at = |list: &[String], i: usize| list.get(i).cloned().unwrap_or_default();

        let wedges = (0..n)
            .map(|i| WedgeWords {
                inner: word_at(inner, i),
                outer: word_at(outer, i),
                sub: word_at(sub, i),
            })
            .collect();

        Self { wedges }
    }

    /// A table with only empty words
    pub fn empty() -> Self {
        Self::align(&[], &[], &[])
    }

    /// Number of wedges in the diagram
    pub fn len(&self) -> usize {
        self.wedges.len()
    }

    /// Always false; a table holds at least [`Self::MIN_WEDGES`] wedges
    pub fn is_empty(&self) -> bool {
        self.wedges.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&WedgeWords> {
        self.wedges.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WedgeWords> {
        self.wedges.iter()
    }
}

impl Default for WordTable {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a> IntoIterator for &'a WordTable {
    type Item = &'a WedgeWords;
    type IntoIter = std::slice::Iter<'a, WedgeWords>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
