use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::Serialize;
use tracing::debug;

use crate::catalog::{Catalog, CatalogError};
use crate::furniture::FurnitureGroup;
use crate::kind::{FurnitureKind, RoomKind};
use crate::tally::MaterialTotals;

/// A room of the house: its own raw-material requirements plus the furniture
/// groups selected for it.
///
/// Groups are keyed by furniture kind, so "at most one group per kind" holds
/// by construction; a duplicate selection merges quantities instead.
#[derive(Debug, Clone, Serialize)]
pub struct Room {
    kind: RoomKind,
    pieces: IndexMap<FurnitureKind, FurnitureGroup>,
    direct_materials: MaterialTotals,
}

impl Room {
    /// Builds a room of `kind` from the catalog: direct materials are copied
    /// over and one furniture group is constructed per initial furniture
    /// reference.
    pub fn new(kind: RoomKind, catalog: &Catalog) -> Result<Room, CatalogError> {
        let spec = catalog.room(kind)?;
        let mut room = Room {
            kind,
            pieces: IndexMap::new(),
            direct_materials: spec.materials.clone(),
        };
        for furniture_ref in &spec.furniture {
            // parsed references always carry a quantity of at least 1
            let group = FurnitureGroup::resolve(furniture_ref.kind, furniture_ref.quantity, catalog)?;
            room.add_piece(group);
        }
        debug!(
            room = kind.name(),
            pieces = room.pieces.len(),
            materials = room.direct_materials.len(),
            "room constructed"
        );
        Ok(room)
    }

    pub fn kind(&self) -> RoomKind {
        self.kind
    }

    /// Adds a furniture group. If a group of the same kind already exists,
    /// its quantity is incremented and the new group is discarded; otherwise
    /// the group is inserted, preserving first-insertion order.
    pub fn add_piece(&mut self, piece: FurnitureGroup) {
        match self.pieces.entry(piece.kind()) {
            Entry::Occupied(mut existing) => existing.get_mut().merge_quantity(piece.quantity()),
            Entry::Vacant(slot) => {
                slot.insert(piece);
            }
        }
    }

    /// The furniture groups in this room, in first-insertion order.
    pub fn pieces(&self) -> impl Iterator<Item = &FurnitureGroup> {
        self.pieces.values()
    }

    pub fn contains(&self, kind: FurnitureKind) -> bool {
        self.pieces.contains_key(&kind)
    }

    /// The room's own raw requirements, excluding furniture.
    pub fn materials(&self) -> &MaterialTotals {
        &self.direct_materials
    }

    /// Tallies everything needed to build this room: direct materials plus
    /// every group's total for every material it needs.
    pub fn total_materials(&self) -> MaterialTotals {
        let mut totals = MaterialTotals::new();
        totals.merge(&self.direct_materials);
        for piece in self.pieces.values() {
            for material in piece.material_names() {
                if let Some(amount) = piece.total_count(material) {
                    totals.tally(material, amount);
                }
            }
        }
        totals
    }
}
