//! Renders the nested bill-of-materials breakdown for a planned house.

use std::fmt::Write;

use hearthstead_core::{House, GOLD};

const TAB: &str = "    ";

/// Turns a catalog identifier into display text: `_<digit>` disambiguation
/// suffixes are dropped and underscores become spaces (`End_Table_1` →
/// `End Table`).
pub fn display_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '_' {
            if matches!(chars.peek(), Some(d) if d.is_ascii_digit()) {
                chars.next();
            } else {
                out.push(' ');
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Writes one block of `Name: amount` lines with the amounts aligned to the
/// longest name in the block.
fn write_block<'a, I>(out: &mut String, indent: &str, entries: I)
where
    I: Iterator<Item = (&'a str, u32)>,
{
    let entries: Vec<(String, u32)> = entries
        .map(|(name, amount)| (display_name(name), amount))
        .collect();
    let width = entries.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (name, amount) in entries {
        let pad = " ".repeat(width - name.len());
        let _ = writeln!(out, "{indent}{name}: {pad}{amount}");
    }
}

/// Renders the full report: per-room furniture and materials, per-room
/// totals, expenses, the plot or deed cost, and the grand totals.
pub fn render(house: &House) -> String {
    let mut out = String::new();
    let location = house.location();
    let _ = writeln!(out, "{}:", display_name(location.name()));

    let indent1 = TAB;
    let indent2 = TAB.repeat(2);
    let indent3 = TAB.repeat(3);

    for room in house.rooms() {
        let totals = room.total_materials();
        // an untouched Outside room has nothing to report
        if totals.is_empty() {
            continue;
        }

        let name = if room.kind().name() == location.name() {
            "Upgrade".to_string()
        } else {
            display_name(room.kind().name())
        };
        let _ = writeln!(out, "{indent1}{name}:");

        for piece in room.pieces() {
            let _ = writeln!(
                out,
                "{indent2}{}: {}",
                display_name(piece.kind().name()),
                piece.quantity()
            );
            write_block(&mut out, &indent3, piece.unit_materials().iter());
        }
        write_block(&mut out, &indent2, room.materials().iter());

        let _ = writeln!(out, "{indent1}TOTALS:");
        write_block(&mut out, &indent2, totals.iter());
    }

    let _ = writeln!(out, "{indent1}EXPENSES:");
    for (kind, count) in house.expenses() {
        if count == 0 {
            continue;
        }
        let _ = writeln!(out, "{indent2}{}: {}", kind.name(), count);
        let _ = writeln!(out, "{indent3}{GOLD}: {}", kind.unit_cost() * count);
    }

    let deed = if location.is_homestead() { "plot" } else { "deed" };
    let _ = writeln!(out, "{indent1}{} {deed}:", display_name(location.name()));
    let _ = writeln!(out, "{indent2}{GOLD}: {}", location.cost());

    let _ = writeln!(out, "TOTALS:");
    write_block(&mut out, indent1, house.grand_totals().iter());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearthstead_core::{Catalog, ExpenseKind, House, Location, Room, RoomKind};

    #[test]
    fn display_name_strips_suffixes_and_underscores() {
        assert_eq!(display_name("End_Table_1"), "End Table");
        assert_eq!(display_name("Quarried_Stone"), "Quarried Stone");
        assert_eq!(display_name("Chest"), "Chest");
        assert_eq!(display_name("Weapon_Racks_3"), "Weapon Racks");
    }

    fn catalog() -> (tempfile::TempDir, Catalog) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(hearthstead_core::ROOM_FILE),
            "-Breezehome\nSawn_Log 2\nChest ~ 2\n-Outside\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join(hearthstead_core::FURNITURE_FILE),
            "~Chest~\nSawn_Log 4\nIron_Ingot 2\n",
        )
        .unwrap();
        let catalog = Catalog::load(dir.path()).unwrap();
        (dir, catalog)
    }

    #[test]
    fn upgrade_room_takes_the_location_name() {
        let (_dir, catalog) = catalog();
        let mut house = House::new(Location::Breezehome);
        house.add_room(Room::new(RoomKind::Breezehome, &catalog).unwrap());

        let report = render(&house);
        assert!(report.starts_with("Breezehome:\n"));
        assert!(report.contains("    Upgrade:\n"));
        assert!(!report.contains("    Breezehome:\n"));
    }

    #[test]
    fn empty_rooms_are_skipped() {
        let (_dir, catalog) = catalog();
        let mut house = House::new(Location::Breezehome);
        house.add_room(Room::new(RoomKind::Outside, &catalog).unwrap());

        let report = render(&house);
        assert!(!report.contains("Outside"));
    }

    #[test]
    fn expenses_and_grand_totals_show_gold() {
        let (_dir, catalog) = catalog();
        let mut house = House::new(Location::Breezehome);
        house.add_room(Room::new(RoomKind::Breezehome, &catalog).unwrap());
        house.add_expense(ExpenseKind::Carriage, 1);
        house.add_expense(ExpenseKind::Cow, 0);

        let report = render(&house);
        assert!(report.contains("        Carriage: 1\n"));
        assert!(report.contains("            Gold: 500\n"));
        // zero-count expenses stay out of the report
        assert!(!report.contains("Cow"));
        assert!(report.contains("    Breezehome deed:\n"));
        assert!(report.contains("        Gold: 5000\n"));
        // grand total: 500 carriage + 5000 deed
        assert!(report
            .lines()
            .any(|line| line.trim_start().starts_with("Gold:") && line.ends_with("5500")));
    }

    #[test]
    fn amounts_align_to_the_longest_name() {
        let (_dir, catalog) = catalog();
        let mut house = House::new(Location::Breezehome);
        house.add_room(Room::new(RoomKind::Breezehome, &catalog).unwrap());

        let report = render(&house);
        // Sawn Log (8 chars) pads against Iron Ingot (10 chars)
        assert!(report.contains("Sawn Log:   4\n"));
        assert!(report.contains("Iron Ingot: 2\n"));
        assert!(report.contains("Sawn Log:   10\n"));
        assert!(report.contains("Iron Ingot: 4\n"));
    }
}
