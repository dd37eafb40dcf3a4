//! Hearthstead computes the bill of materials for building and furnishing
//! a dwelling.
//!
//! Core concepts:
//! - **Catalog**: the two flat-file catalogs (`rooms.info`, `furniture.info`)
//!   parsed into an in-memory index: room kind → direct materials + initial
//!   furniture, furniture kind → per-unit materials
//! - **FurnitureGroup**: one kind of furniture selected for a room, with a
//!   quantity; duplicate selections merge into one group
//! - **Room**: a kind-keyed collection of furniture groups plus the room's
//!   own raw-material requirements
//! - **House**: rooms plus non-room expenses for one location, folded into
//!   grand totals
//! - **MaterialTotals**: the shared tally primitive every aggregation level
//!   reuses
//!
//! # Example
//!
//! ```no_run
//! use hearthstead_core::{Catalog, House, Location, Room, RoomKind};
//!
//! let catalog = Catalog::load("catalogs".as_ref())?;
//! let mut house = House::new(Location::Breezehome);
//! house.add_room(Room::new(RoomKind::Breezehome, &catalog)?);
//!
//! let totals = house.grand_totals();
//! println!("gold needed: {}", totals.get("Gold").unwrap_or(0));
//! # Ok::<(), hearthstead_core::CatalogError>(())
//! ```

mod catalog;
mod furniture;
mod house;
mod kind;
mod room;
mod tally;

pub use catalog::{Catalog, CatalogError, FurnitureRef, RoomSpec, FURNITURE_FILE, ROOM_FILE};
pub use furniture::{FurnitureGroup, PieceError};
pub use house::{ExpenseKind, House, Location, GOLD};
pub use kind::{FurnitureKind, RoomKind};
pub use room::Room;
pub use tally::MaterialTotals;
