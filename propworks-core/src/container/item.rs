//! Items held in slots

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Separator for composite identifiers (`"a;b;c"`)
pub const ID_SEPARATOR: char = ';';

/// Item category used by admission filters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemKind(String);

impl ItemKind {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemKind {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

/// An item that can sit in a slot
///
/// Vessels (items that receive deposits from an arm) keep what was poured
/// into them in `inside`, and their identifier grows into a composite.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item {
    /// Identifier, possibly `;`-joined
    pub id: String,
    /// Category tag
    pub kind: ItemKind,
    /// Items deposited into this one, oldest first
    #[cfg_attr(feature = "serde", serde(default))]
    pub inside: Vec<Item>,
}

impl Item {
    pub fn new(id: impl Into<String>, kind: impl Into<ItemKind>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            inside: Vec::new(),
        }
    }

    /// Whether this item may enter a slot filtered on `filter`
    ///
    /// `None` accepts everything.
    pub fn is_accepted_by(&self, filter: Option<&ItemKind>) -> bool {
        filter.map_or(true, |kind| &self.kind == kind)
    }

    /// Component identifiers of a composite id, blanks skipped
    pub fn id_parts(&self) -> impl Iterator<Item = &str> {
        self.id
            .split(ID_SEPARATOR)
            .filter(|part| !part.trim().is_empty())
    }

    /// Record `item` as deposited inside this one
    ///
    /// The identifier becomes the previous one (when not blank) joined
    /// with the deposited item's id. Returns the new number of contents.
    pub fn absorb(&mut self, item: Item) -> usize {
        if self.id.trim().is_empty() {
            self.id = item.id.clone();
        } else {
            self.id.push(ID_SEPARATOR);
            self.id.push_str(&item.id);
        }
        self.inside.push(item);
        self.inside.len()
    }
}

/// Join item identifiers in order with [`ID_SEPARATOR`]
pub fn join_ids<'a>(ids: impl IntoIterator<Item = &'a str>) -> String {
    let mut joined = String::new();
    for (i, id) in ids.into_iter().enumerate() {
        if i > 0 {
            joined.push(ID_SEPARATOR);
        }
        joined.push_str(id);
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter() {
        let item = Item::new("red", "reagent");
        assert!(item.is_accepted_by(None));
        assert!(item.is_accepted_by(Some(&ItemKind::from("reagent"))));
        assert!(!item.is_accepted_by(Some(&ItemKind::from("vial"))));
    }

    #[test]
    fn test_absorb_into_blank_vessel() {
        let mut vial = Item::new("", "vial");
        let count = vial.absorb(Item::new("cat_head", "reagent"));
        assert_eq!(count, 1);
        assert_eq!(vial.id, "cat_head");
    }

    #[test]
    fn test_absorb_appends() {
        let mut vial = Item::new("a", "vial");
        vial.absorb(Item::new("b", "reagent"));
        vial.absorb(Item::new("c", "reagent"));
        assert_eq!(vial.id, "a;b;c");
        assert_eq!(vial.inside.len(), 2);
        assert_eq!(vial.inside[1].id, "c");
    }

    #[test]
    fn test_whitespace_id_is_blank() {
        let mut vial = Item::new("  ", "vial");
        vial.absorb(Item::new("x", "reagent"));
        assert_eq!(vial.id, "x");
    }

    #[test]
    fn test_id_parts() {
        let item = Item::new("a;;b; ;c", "vial");
        let parts: Vec<&str> = item.id_parts().collect();
        assert_eq!(parts, ["a", "b", "c"]);
    }

    #[test]
    fn test_join_ids() {
        assert_eq!(join_ids(["A", "B", "C"]), "A;B;C");
        assert_eq!(join_ids(Vec::<&str>::new()), "");
        assert_eq!(join_ids(["solo"]), "solo");
    }
}
