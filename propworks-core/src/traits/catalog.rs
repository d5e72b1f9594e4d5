//! Item lookup and random choice

use alloc::collections::BTreeMap;
use alloc::string::String;

use crate::assembly::PartInfo;

/// Resolves item identifiers to part metadata
pub trait ItemCatalog {
    /// Metadata for `key`, `None` if unknown
    fn lookup(&self, key: &str) -> Option<PartInfo>;
}

impl ItemCatalog for BTreeMap<String, PartInfo> {
    fn lookup(&self, key: &str) -> Option<PartInfo> {
        self.get(key).copied()
    }
}

/// Source of choices when several parts compete for one socket
pub trait Picker {
    /// An index in `[0, len)`; `len` is never zero
    fn pick(&mut self, len: usize) -> usize;
}

/// Always picks the first candidate
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstPick;

impl Picker for FirstPick {
    fn pick(&mut self, _len: usize) -> usize {
        0
    }
}
