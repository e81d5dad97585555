//! Usage statistics for classified tags and sequences.
//!
//! Counters accumulate across passes until [`Statistics::reset`] is called,
//! so that several jobs can be summarised together.

use alloc::collections::BTreeMap;

use crate::tables::{SymbolSetId, attributes, sequences, symbol_sets, tags};

/// A statistics bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatKey {
    /// A PCL XL operator, data type or embedded data tag.
    XlTag(u8),
    /// Every reserved PCL XL tag byte.
    XlUnknownTag,
    XlAttribute(u16),
    /// Every unassigned PCL XL attribute identifier.
    XlUnknownAttribute,
    /// A PCL escape sequence, by table index.
    PclSequence(u16),
    /// Every PCL escape sequence absent from the table.
    PclUnknownSequence,
    PclControl(u8),
    /// A symbol set listed in the table.
    SymbolSet(SymbolSetId),
    /// Every symbol set absent from the table, specials included.
    UnknownSymbolSet,
}

impl StatKey {
    /// Name of the tag or sequence counted in this bucket.
    pub fn describe(self) -> &'static str {
        match self {
            Self::XlTag(b) => tags::tag(b).name,
            Self::XlUnknownTag => tags::UNKNOWN.name,
            Self::XlAttribute(id) => attributes::attribute(id).name,
            Self::XlUnknownAttribute => attributes::UNKNOWN.name,
            Self::PclSequence(i) => sequences::entry(i).name,
            Self::PclUnknownSequence => sequences::UNKNOWN.name,
            Self::PclControl(b) => control_name(b),
            Self::SymbolSet(id) => symbol_sets::symbol_set(id).name,
            Self::UnknownSymbolSet => symbol_sets::UNKNOWN.name,
        }
    }

    /// Bucket for a designated symbol set; `None` if it could not be parsed.
    pub fn symbol_set(id: Option<SymbolSetId>) -> Self {
        match id {
            Some(id) if symbol_sets::listed(id).is_some() => Self::SymbolSet(id),
            _ => Self::UnknownSymbolSet,
        }
    }
}

/// Short name of a control code.
pub fn control_name(b: u8) -> &'static str {
    match b {
        0x00 => "<NUL>",
        0x07 => "<BEL>",
        0x08 => "<BS>",
        0x09 => "<HT>",
        0x0A => "<LF>",
        0x0C => "<FF>",
        0x0D => "<CR>",
        0x0E => "<SO>",
        0x0F => "<SI>",
        0x1A => "<SUB>",
        0x7F => "<DEL>",
        _ => "<control>",
    }
}

/// Where a tag occurred relative to download groups and macro definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nesting {
    /// The tag opens a group or definition.
    Parent,
    /// The tag occurs inside an open group or definition.
    Child,
    /// Neither.
    Other,
}

/// Counts for one bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub parent: u64,
    pub child: u64,
    pub total: u64,
}

impl Counts {
    /// Occurrences counted neither as parent nor as child.
    pub fn other(&self) -> u64 {
        self.total - self.parent - self.child
    }
}

/// Aggregated counts, keyed by bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    counts: BTreeMap<StatKey, Counts>,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence.
    pub fn record(&mut self, key: StatKey, nesting: Nesting) {
        let counts = self.counts.entry(key).or_default();

        match nesting {
            Nesting::Parent => counts.parent += 1,
            Nesting::Child => counts.child += 1,
            Nesting::Other => {}
        }
        counts.total += 1;
    }

    /// Counts for a bucket; zero if never counted.
    pub fn counts(&self, key: StatKey) -> Counts {
        self.counts.get(&key).copied().unwrap_or_default()
    }

    /// All non-empty buckets, in key order.
    pub fn iter(&self) -> impl Iterator<Item = (StatKey, Counts)> + '_ {
        self.counts.iter().map(|(k, c)| (*k, *c))
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Clear every counter.
    pub fn reset(&mut self) {
        self.counts.clear();
    }
}
