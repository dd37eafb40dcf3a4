use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::debug;

use crate::kind::{FurnitureKind, RoomKind};
use crate::tally::MaterialTotals;

/// File name of the room catalog inside the catalog directory.
pub const ROOM_FILE: &str = "rooms.info";
/// File name of the furniture catalog inside the catalog directory.
pub const FURNITURE_FILE: &str = "furniture.info";

/// Marks a room-catalog header line (`-Main_Hall`).
const ROOM_MARKER: char = '-';
/// Delimits furniture-catalog headers (`~Chest~`) and flags furniture
/// references inside room blocks (`Chest ~ 2`).
const FURNITURE_MARKER: char = '~';

/// Error type for catalog loading and lookups.
///
/// Every variant is fatal to the computation: there is no meaningful partial
/// bill of materials once a catalog entry is missing or malformed.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("cannot open catalog file {file}: {source}")]
    Missing {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error reading catalog file {file}: {source}")]
    Read {
        file: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("`{kind}` not found in catalog file {file}")]
    Lookup { kind: &'static str, file: &'static str },

    #[error("{file}:{line}: {reason}")]
    Format {
        file: &'static str,
        line: usize,
        reason: String,
    },
}

/// A furniture reference inside a room block: `Chest ~ 2`.
///
/// The count is the group's initial quantity within the room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FurnitureRef {
    pub kind: FurnitureKind,
    pub quantity: u32,
}

/// What the room catalog declares for one room kind.
#[derive(Debug, Clone, Default)]
pub struct RoomSpec {
    /// Raw materials the room itself requires, independent of furniture.
    pub materials: MaterialTotals,
    /// Furniture the room starts out with.
    pub furniture: Vec<FurnitureRef>,
}

/// The two flat-file catalogs, parsed once and indexed by kind.
///
/// Read-only after `load`; share it by reference. The files are treated as
/// immutable for the process lifetime, so parsing once up front is
/// observably equivalent to rescanning them on every lookup.
#[derive(Debug)]
pub struct Catalog {
    rooms: IndexMap<RoomKind, RoomSpec>,
    furniture: IndexMap<FurnitureKind, MaterialTotals>,
}

impl Catalog {
    /// Loads `rooms.info` and `furniture.info` from `dir`.
    pub fn load(dir: &Path) -> Result<Catalog, CatalogError> {
        let furniture = parse_furniture(&dir.join(FURNITURE_FILE))?;
        let rooms = parse_rooms(&dir.join(ROOM_FILE))?;
        debug!(
            dir = %dir.display(),
            rooms = rooms.len(),
            furniture = furniture.len(),
            "loaded catalogs"
        );
        Ok(Catalog { rooms, furniture })
    }

    /// The room catalog entry for `kind`.
    pub fn room(&self, kind: RoomKind) -> Result<&RoomSpec, CatalogError> {
        self.rooms.get(&kind).ok_or(CatalogError::Lookup {
            kind: kind.name(),
            file: ROOM_FILE,
        })
    }

    /// Per-unit materials for one kind of furniture.
    pub fn furniture(&self, kind: FurnitureKind) -> Result<&MaterialTotals, CatalogError> {
        self.furniture.get(&kind).ok_or(CatalogError::Lookup {
            kind: kind.name(),
            file: FURNITURE_FILE,
        })
    }
}

fn open(path: &Path) -> Result<BufReader<File>, CatalogError> {
    let file = File::open(path).map_err(|source| CatalogError::Missing {
        file: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

fn format_err(file: &'static str, line: usize, reason: String) -> CatalogError {
    CatalogError::Format { file, line, reason }
}

fn parse_quantity(token: &str, file: &'static str, line: usize) -> Result<u32, CatalogError> {
    token
        .parse::<u32>()
        .map_err(|_| format_err(file, line, format!("invalid quantity `{token}`")))
}

/// Parses the room catalog.
///
/// Blocks whose header names an identifier outside the closed room-kind set
/// are skipped along with their entry lines; only recognized blocks are
/// ever visited. The first block wins when a kind repeats.
/// A reference naming an identifier outside the closed furniture-kind set is
/// a format error; a known kind that the furniture catalog simply lacks only
/// fails later, as a lookup error, when the group is resolved.
fn parse_rooms(path: &Path) -> Result<IndexMap<RoomKind, RoomSpec>, CatalogError> {
    let reader = open(path)?;
    let mut rooms: IndexMap<RoomKind, RoomSpec> = IndexMap::new();
    let mut current: Option<(RoomKind, RoomSpec)> = None;

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|source| CatalogError::Read {
            file: ROOM_FILE,
            source,
        })?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        if let Some(ident) = text.strip_prefix(ROOM_MARKER) {
            if let Some((kind, spec)) = current.take() {
                rooms.insert(kind, spec);
            }
            let ident = ident.trim();
            match RoomKind::from_name(ident) {
                Some(kind) if !rooms.contains_key(&kind) => {
                    current = Some((kind, RoomSpec::default()));
                }
                Some(kind) => {
                    debug!(room = kind.name(), line = line_no, "duplicate room block skipped");
                }
                None => {
                    debug!(header = ident, line = line_no, "unknown room block skipped");
                }
            }
            continue;
        }

        // entry lines outside a recognized block are never visited
        let Some((_, spec)) = current.as_mut() else {
            continue;
        };

        if text.contains(FURNITURE_MARKER) {
            // furniture reference: `Chest ~ 2`, count defaults to 1
            let cleaned = text.replacen(FURNITURE_MARKER, " ", 1);
            let mut tokens = cleaned.split_whitespace();
            let name = tokens.next().ok_or_else(|| {
                format_err(ROOM_FILE, line_no, "furniture reference has no name".into())
            })?;
            let kind = FurnitureKind::from_name(name).ok_or_else(|| {
                format_err(ROOM_FILE, line_no, format!("unknown furniture kind `{name}`"))
            })?;
            let quantity = match tokens.next() {
                Some(token) => parse_quantity(token, ROOM_FILE, line_no)?,
                None => 1,
            };
            if quantity == 0 {
                return Err(format_err(
                    ROOM_FILE,
                    line_no,
                    format!("furniture reference `{name}` needs a quantity of at least 1"),
                ));
            }
            spec.furniture.push(FurnitureRef { kind, quantity });
        } else {
            // direct raw material: `Quarried_Stone 30`, quantity defaults to 1
            let mut tokens = text.split_whitespace();
            let Some(name) = tokens.next() else {
                continue;
            };
            let quantity = match tokens.next() {
                Some(token) => parse_quantity(token, ROOM_FILE, line_no)?,
                None => 1,
            };
            spec.materials.tally(name, quantity);
        }
    }

    if let Some((kind, spec)) = current.take() {
        rooms.insert(kind, spec);
    }
    Ok(rooms)
}

/// Parses the furniture catalog.
///
/// Headers are `~Chest~`; every entry line must carry a quantity. Duplicate
/// material lines within one block tally.
fn parse_furniture(path: &Path) -> Result<IndexMap<FurnitureKind, MaterialTotals>, CatalogError> {
    let reader = open(path)?;
    let mut furniture: IndexMap<FurnitureKind, MaterialTotals> = IndexMap::new();
    let mut current: Option<(FurnitureKind, MaterialTotals)> = None;

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|source| CatalogError::Read {
            file: FURNITURE_FILE,
            source,
        })?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        if text.contains(FURNITURE_MARKER) {
            if let Some((kind, materials)) = current.take() {
                furniture.insert(kind, materials);
            }
            let ident = text.replace(FURNITURE_MARKER, " ");
            let ident = ident.trim();
            match FurnitureKind::from_name(ident) {
                Some(kind) if !furniture.contains_key(&kind) => {
                    current = Some((kind, MaterialTotals::new()));
                }
                Some(kind) => {
                    debug!(
                        furniture = kind.name(),
                        line = line_no,
                        "duplicate furniture block skipped"
                    );
                }
                None => {
                    debug!(header = ident, line = line_no, "unknown furniture block skipped");
                }
            }
            continue;
        }

        let Some((_, materials)) = current.as_mut() else {
            continue;
        };

        let mut tokens = text.split_whitespace();
        let Some(name) = tokens.next() else {
            continue;
        };
        let token = tokens.next().ok_or_else(|| {
            format_err(
                FURNITURE_FILE,
                line_no,
                format!("material entry `{name}` is missing its quantity"),
            )
        })?;
        let quantity = parse_quantity(token, FURNITURE_FILE, line_no)?;
        materials.tally(name, quantity);
    }

    if let Some((kind, materials)) = current.take() {
        furniture.insert(kind, materials);
    }
    Ok(furniture)
}
