//! Part metadata

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which socket a part fills
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PartKind {
    Body,
    Head,
    Tail,
    Hat,
    Other,
}

/// Creature family a part belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Species {
    Cat,
    Alien,
    Dino,
    Cupcake,
    Tentacles,
    Fish,
}

impl Species {
    /// Species with a full head and tail model
    pub fn is_creature(&self) -> bool {
        matches!(self, Species::Cat | Species::Alien | Species::Dino)
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Species::Cat => "cat",
            Species::Alien => "alien",
            Species::Dino => "dino",
            Species::Cupcake => "cupcake",
            Species::Tentacles => "tentacles",
            Species::Fish => "fish",
        };
        f.write_str(name)
    }
}

/// Catalog entry for one item id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PartInfo {
    pub kind: PartKind,
    pub species: Species,
}

impl PartInfo {
    pub const fn new(kind: PartKind, species: Species) -> Self {
        Self { kind, species }
    }
}
