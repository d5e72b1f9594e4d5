//! Print planning

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use super::parts::{PartInfo, PartKind, Species};
use crate::container::ID_SEPARATOR;
use crate::traits::{ItemCatalog, Picker};

/// Assembly failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AssemblyError {
    /// Head species has no attachment on a torso
    UnsupportedHead(Species),
    /// Tail species has no model
    UnsupportedTail(Species),
}

impl fmt::Display for AssemblyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssemblyError::UnsupportedHead(s) => write!(f, "no head attachment for {}", s),
            AssemblyError::UnsupportedTail(s) => write!(f, "no tail model for {}", s),
        }
    }
}

/// What occupies a torso's head socket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HeadPart {
    Head(Species),
    Topping,
    Tentacles,
}

/// Result of planning a print
#[derive(Debug, Clone, PartialEq)]
pub struct PrintPlan {
    /// Id of the part printed as the base (a body, or a head without one)
    pub base_key: String,
    pub base: PartInfo,
    /// Head socket, only for body bases
    pub head: Option<HeadPart>,
    /// Tail socket, only for body bases
    pub tail: Option<Species>,
    /// Cupcake topping on the head
    pub head_topping: bool,
    /// Fish bowl on the head
    pub head_bowl: bool,
    /// Cupcake topping straight on the torso (body without head)
    pub torso_topping: bool,
}

impl PrintPlan {
    fn new(base_key: &str, base: PartInfo) -> Self {
        Self {
            base_key: String::from(base_key),
            base,
            head: None,
            tail: None,
            head_topping: false,
            head_bowl: false,
            torso_topping: false,
        }
    }
}

/// Plan the creature described by the composite id `key`
///
/// Unknown component ids are skipped. Returns `Ok(None)` when neither a
/// body nor a head is present.
pub fn plan_print(
    key: &str,
    catalog: &impl ItemCatalog,
    picker: &mut impl Picker,
) -> Result<Option<PrintPlan>, AssemblyError> {
    let mut bodies = Vec::new();
    let mut heads = Vec::new();
    let mut tails = Vec::new();
    let mut hats = Vec::new();

    for part in key.split(ID_SEPARATOR).map(str::trim).filter(|p| !p.is_empty()) {
        let Some(info) = catalog.lookup(part) else {
            log::warn!("unknown part '{}' skipped", part);
            continue;
        };
        match info.kind {
            PartKind::Body => bodies.push((part, info)),
            PartKind::Head => heads.push((part, info)),
            PartKind::Tail => tails.push(info.species),
            PartKind::Hat => hats.push(info.species),
            PartKind::Other => {}
        }
    }

    let has_hat = |species: Species| hats.contains(&species);

    if let Some(&(base_key, body)) = choose(&bodies, picker) {
        let mut plan = PrintPlan::new(base_key, body);

        match choose(&heads, picker) {
            Some(&(_, head)) => {
                let part = match head.species {
                    s if s.is_creature() => HeadPart::Head(s),
                    Species::Cupcake => HeadPart::Topping,
                    Species::Tentacles => HeadPart::Tentacles,
                    other => return Err(AssemblyError::UnsupportedHead(other)),
                };
                if let HeadPart::Head(_) = part {
                    plan.head_topping = has_hat(Species::Cupcake);
                    plan.head_bowl = has_hat(Species::Fish);
                }
                plan.head = Some(part);
            }
            None => plan.torso_topping = has_hat(Species::Cupcake),
        }

        if let Some(&tail) = choose(&tails, picker) {
            if !tail.is_creature() {
                return Err(AssemblyError::UnsupportedTail(tail));
            }
            plan.tail = Some(tail);
        }

        log::info!("printing body '{}'", plan.base_key);
        return Ok(Some(plan));
    }

    if let Some(&(base_key, head)) = choose(&heads, picker) {
        let mut plan = PrintPlan::new(base_key, head);
        plan.head_topping = has_hat(Species::Cupcake);
        plan.head_bowl = has_hat(Species::Fish);
        log::info!("printing head '{}'", plan.base_key);
        return Ok(Some(plan));
    }

    Ok(None)
}

fn choose<'a, T>(candidates: &'a [T], picker: &mut impl Picker) -> Option<&'a T> {
    if candidates.is_empty() {
        return None;
    }
    let index = picker.pick(candidates.len()).min(candidates.len() - 1);
    candidates.get(index)
}
