use serde::Serialize;

use crate::catalog::{Catalog, CatalogError};
use crate::kind::FurnitureKind;
use crate::tally::MaterialTotals;

/// Error type for furniture group construction.
#[derive(Debug, thiserror::Error)]
pub enum PieceError {
    /// Recoverable: the caller asked for a group of zero pieces. Reported
    /// back instead of silently clamping to 1.
    #[error("furniture quantity must be at least 1")]
    ZeroQuantity,

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// One kind of furniture selected for a room, with a quantity.
///
/// Per-unit materials are resolved from the catalog once at construction and
/// never change; only the quantity grows, when a duplicate selection of the
/// same kind is merged in.
#[derive(Debug, Clone, Serialize)]
pub struct FurnitureGroup {
    kind: FurnitureKind,
    quantity: u32,
    unit_materials: MaterialTotals,
}

impl FurnitureGroup {
    /// Builds a group of `quantity` pieces of `kind`.
    ///
    /// `quantity` must be at least 1; catalog failures propagate unchanged.
    pub fn new(
        kind: FurnitureKind,
        quantity: u32,
        catalog: &Catalog,
    ) -> Result<FurnitureGroup, PieceError> {
        if quantity == 0 {
            return Err(PieceError::ZeroQuantity);
        }
        Ok(FurnitureGroup::resolve(kind, quantity, catalog)?)
    }

    /// Catalog resolution without the quantity check, for callers that have
    /// already validated the count (room construction from parsed refs).
    pub(crate) fn resolve(
        kind: FurnitureKind,
        quantity: u32,
        catalog: &Catalog,
    ) -> Result<FurnitureGroup, CatalogError> {
        let unit_materials = catalog.furniture(kind)?.clone();
        Ok(FurnitureGroup {
            kind,
            quantity,
            unit_materials,
        })
    }

    pub fn kind(&self) -> FurnitureKind {
        self.kind
    }

    /// Number of pieces in this group.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Materials one piece needs, in catalog order.
    pub fn material_names(&self) -> impl Iterator<Item = &str> {
        self.unit_materials.names()
    }

    /// Amount of `material` one piece needs, `None` if not required.
    pub fn unit_count(&self, material: &str) -> Option<u32> {
        self.unit_materials.get(material)
    }

    /// Amount of `material` the whole group needs, `None` if not required.
    pub fn total_count(&self, material: &str) -> Option<u32> {
        self.unit_count(material).map(|count| count * self.quantity)
    }

    pub fn unit_materials(&self) -> &MaterialTotals {
        &self.unit_materials
    }

    /// Absorbs a duplicate selection of the same kind.
    pub fn merge_quantity(&mut self, delta: u32) {
        self.quantity += delta;
    }
}

/// Groups are the same piece of furniture iff their kinds match; quantity is
/// not part of identity.
impl PartialEq for FurnitureGroup {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for FurnitureGroup {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FURNITURE_FILE, ROOM_FILE};

    fn chest_catalog() -> (tempfile::TempDir, Catalog) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(ROOM_FILE), "-Outside\n").unwrap();
        std::fs::write(
            dir.path().join(FURNITURE_FILE),
            "~Chest~\nWood 4\nIron 2\n~Safe_1~\nIron 6\n",
        )
        .unwrap();
        let catalog = Catalog::load(dir.path()).unwrap();
        (dir, catalog)
    }

    #[test]
    fn counts_scale_with_quantity() {
        let (_dir, catalog) = chest_catalog();
        let group = FurnitureGroup::new(FurnitureKind::Chest, 3, &catalog).unwrap();

        assert_eq!(group.unit_count("Wood"), Some(4));
        assert_eq!(group.total_count("Wood"), Some(12));
        assert_eq!(group.total_count("Iron"), Some(6));
        // not a required material
        assert_eq!(group.total_count("Gold"), None);
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let (_dir, catalog) = chest_catalog();
        let err = FurnitureGroup::new(FurnitureKind::Chest, 0, &catalog).unwrap_err();
        assert!(matches!(err, PieceError::ZeroQuantity));
    }

    #[test]
    fn unlisted_kind_propagates_lookup_error() {
        let (_dir, catalog) = chest_catalog();
        let err = FurnitureGroup::new(FurnitureKind::Garden, 1, &catalog).unwrap_err();
        assert!(matches!(
            err,
            PieceError::Catalog(CatalogError::Lookup { .. })
        ));
    }

    #[test]
    fn identity_is_kind_alone() {
        let (_dir, catalog) = chest_catalog();
        let two = FurnitureGroup::new(FurnitureKind::Chest, 2, &catalog).unwrap();
        let five = FurnitureGroup::new(FurnitureKind::Chest, 5, &catalog).unwrap();
        let safe = FurnitureGroup::new(FurnitureKind::Safe1, 2, &catalog).unwrap();

        assert_eq!(two, five);
        assert_ne!(two, safe);
    }

    #[test]
    fn merge_quantity_accumulates() {
        let (_dir, catalog) = chest_catalog();
        let mut group = FurnitureGroup::new(FurnitureKind::Chest, 2, &catalog).unwrap();
        group.merge_quantity(3);
        assert_eq!(group.quantity(), 5);
        assert_eq!(group.total_count("Wood"), Some(20));
    }
}
