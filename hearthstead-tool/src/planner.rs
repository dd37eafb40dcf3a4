//! The interactive questionnaire that decides what gets built.
//!
//! The planner owns no terminal: it is generic over a `BufRead` input and a
//! `Write` output, so the whole flow can be driven by a scripted cursor in
//! tests. The core stays pure; only this layer asks questions.

use std::io::{BufRead, Write};

use tracing::debug;

use hearthstead_core::{
    Catalog, ExpenseKind, FurnitureGroup, FurnitureKind, House, Location, Room, RoomKind,
};

use crate::error::HearthError;
use crate::report::display_name;

const LARGE_TROPHY_PICKS: usize = 3;
const SMALL_TROPHY_PICKS: usize = 4;

const LARGE_TROPHIES: &[FurnitureKind] = &[
    FurnitureKind::TrophyBear,
    FurnitureKind::TrophyChaurus,
    FurnitureKind::TrophyCow,
    FurnitureKind::TrophyDeer,
    FurnitureKind::TrophyDragonSkull,
    FurnitureKind::TrophyDraugr,
    FurnitureKind::TrophyDwarvenSphere,
    FurnitureKind::TrophyFalmer,
    FurnitureKind::TrophyFrostTroll,
    FurnitureKind::TrophyFrostbiteSpider,
    FurnitureKind::TrophyHorker,
    FurnitureKind::TrophySabreCat,
    FurnitureKind::TrophySnowBear,
    FurnitureKind::TrophyTroll,
    FurnitureKind::TrophyWolf,
];

const SMALL_TROPHIES: &[FurnitureKind] = &[
    FurnitureKind::TrophyDraugrSmall,
    FurnitureKind::TrophyDwarvenSpider,
    FurnitureKind::TrophyFalmerSmall,
    FurnitureKind::TrophyGoat,
    FurnitureKind::TrophyHagraven,
    FurnitureKind::TrophyIceWolf,
    FurnitureKind::TrophyMudcrab,
    FurnitureKind::TrophySkeever,
    FurnitureKind::TrophySkeleton,
    FurnitureKind::TrophySlaughterfish,
    FurnitureKind::TrophySpriggan,
];

const SHRINES: &[FurnitureKind] = &[
    FurnitureKind::ShrineOfAkatosh,
    FurnitureKind::ShrineOfArkay,
    FurnitureKind::ShrineOfDibella,
    FurnitureKind::ShrineOfJulianos,
    FurnitureKind::ShrineOfKynareth,
    FurnitureKind::ShrineOfMara,
    FurnitureKind::ShrineOfStendarr,
    FurnitureKind::ShrineOfTalos,
    FurnitureKind::ShrineOfZenithar,
];

const WINGS: [(&str, [RoomKind; 3]); 3] = [
    (
        "West Wing",
        [
            RoomKind::EnchanterTower,
            RoomKind::Bedrooms,
            RoomKind::Greenhouse,
        ],
    ),
    (
        "North Wing",
        [
            RoomKind::TrophyRoom,
            RoomKind::StorageRoom,
            RoomKind::AlchemyLaboratory,
        ],
    ),
    (
        "East Wing",
        [RoomKind::Library, RoomKind::Armory, RoomKind::Kitchen],
    ),
];

pub struct Planner<'a, R, W> {
    catalog: &'a Catalog,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Planner<'a, R, W> {
    pub fn new(catalog: &'a Catalog, input: R, output: W) -> Self {
        Planner {
            catalog,
            input,
            output,
        }
    }

    /// Runs the whole questionnaire and returns the planned house.
    pub fn run(mut self) -> Result<House, HearthError> {
        let location = self.choose_location()?;
        debug!(location = location.name(), "location chosen");

        let mut house = House::new(location);
        if location.is_homestead() {
            self.build_homestead(&mut house)?;
            self.choose_expenses(&mut house)?;
        } else {
            // a purchased home is one upgrade room named after the location
            let kind = RoomKind::from_name(location.name())
                .ok_or(HearthError::UnknownLocationRoom(location.name()))?;
            house.add_room(Room::new(kind, self.catalog)?);
        }
        Ok(house)
    }

    fn choose_location(&mut self) -> Result<Location, HearthError> {
        writeln!(self.output, "Where would you like the house to be?")?;
        for (index, location) in Location::ALL.iter().enumerate() {
            writeln!(self.output, "{}: {}", index + 1, display_name(location.name()))?;
        }
        let choice = self.ask_index(1, Location::ALL.len())?;
        Ok(Location::ALL[choice - 1])
    }

    fn build_homestead(&mut self, house: &mut House) -> Result<(), HearthError> {
        let mut outside = Room::new(RoomKind::Outside, self.catalog)?;
        let rooms = loop {
            write!(self.output, "Enter 0 for small cottage, enter 1 for full house: ")?;
            self.output.flush()?;
            let answer = self.read_line()?;
            if answer.contains('1') {
                break self.build_full_manor()?;
            } else if answer.contains('0') {
                break vec![Room::new(RoomKind::SmallHouse, self.catalog)?];
            }
        };
        self.build_outside(&mut outside, house.location())?;

        house.add_room(outside);
        for room in rooms {
            house.add_room(room);
        }
        Ok(())
    }

    fn build_full_manor(&mut self) -> Result<Vec<Room>, HearthError> {
        let mut rooms = vec![Room::new(RoomKind::Entryway, self.catalog)?];

        let mut main_hall = Room::new(RoomKind::MainHall, self.catalog)?;
        if self.ask_yes("Do you want an arcane enchanter on the first floor of your main hall? (y/n) ")? {
            main_hall.add_piece(FurnitureGroup::new(
                FurnitureKind::ArcaneEnchanter,
                1,
                self.catalog,
            )?);
        }
        if self.ask_yes("Do you want an alchemy lab on the first floor of your main hall? (y/n) ")? {
            main_hall.add_piece(FurnitureGroup::new(FurnitureKind::AlchemyLab, 1, self.catalog)?);
        }
        rooms.push(main_hall);

        self.build_cellar(&mut rooms)?;

        for (wing, options) in WINGS {
            writeln!(self.output, "Select room for {wing}:")?;
            for (index, kind) in options.iter().enumerate() {
                writeln!(self.output, "{}: {}", index + 1, display_name(kind.name()))?;
            }
            let choice = self.ask_index(1, options.len())?;
            let kind = options[choice - 1];
            let mut room = Room::new(kind, self.catalog)?;
            if kind == RoomKind::TrophyRoom {
                self.build_trophies(&mut room)?;
            }
            rooms.push(room);
        }
        Ok(rooms)
    }

    fn build_cellar(&mut self, rooms: &mut Vec<Room>) -> Result<(), HearthError> {
        if !self.ask_yes("Do you want to build a cellar? (y/n) ")? {
            return Ok(());
        }
        rooms.push(Room::new(RoomKind::Cellar, self.catalog)?);

        if self.ask_yes("Do you want to build smithing equipment in your cellar? (y/n) ")? {
            rooms.push(Room::new(RoomKind::CellarSmithing, self.catalog)?);
        }
        if self.ask_yes("Do you want to build shrines in your cellar? (y/n) ")? {
            let mut religious = Room::new(RoomKind::CellarReligious, self.catalog)?;
            self.build_shrines(&mut religious)?;
            rooms.push(religious);
        }
        if self.ask_yes("Do you want to build 10 safes in your cellar? (y/n) ")? {
            rooms.push(Room::new(RoomKind::CellarSafes, self.catalog)?);
        }
        Ok(())
    }

    fn build_shrines(&mut self, room: &mut Room) -> Result<(), HearthError> {
        for &shrine in SHRINES {
            let divine = shrine.name().trim_start_matches("Shrine_of_");
            if self.ask_yes(&format!("Do you want to build a shrine to {divine}? (y/n) "))? {
                room.add_piece(FurnitureGroup::new(shrine, 1, self.catalog)?);
            } else if divine == "Talos" {
                writeln!(self.output, "Skyrim belongs to the Nords!")?;
            }
        }
        Ok(())
    }

    fn build_trophies(&mut self, room: &mut Room) -> Result<(), HearthError> {
        self.pick_trophies(room, LARGE_TROPHIES, LARGE_TROPHY_PICKS, "large")?;
        self.pick_trophies(room, SMALL_TROPHIES, SMALL_TROPHY_PICKS, "small")?;
        Ok(())
    }

    /// Lists the options 0-based, then reads up to `limit` space-separated
    /// indexes; tokens that don't name an option are dropped rather than
    /// re-asked. A confirm step repeats the pick on rejection.
    fn pick_trophies(
        &mut self,
        room: &mut Room,
        options: &[FurnitureKind],
        limit: usize,
        size: &str,
    ) -> Result<(), HearthError> {
        for (index, &trophy) in options.iter().enumerate() {
            writeln!(self.output, "{}: {}", index, trophy_label(trophy))?;
        }
        let picks = loop {
            writeln!(self.output, "Please pick {limit} {size} trophies. (Separated by spaces)")?;
            let line = self.read_line()?;
            let picks: Vec<FurnitureKind> = line
                .split_whitespace()
                .take(limit)
                .filter_map(|token| token.parse::<usize>().ok())
                .filter_map(|index| options.get(index).copied())
                .collect();

            let labels: Vec<String> = picks.iter().map(|&trophy| trophy_label(trophy)).collect();
            writeln!(self.output, "[{}]", labels.join(", "))?;
            if self.ask_yes("Is this correct? (y/n) ")? {
                break picks;
            }
        };
        for trophy in picks {
            room.add_piece(FurnitureGroup::new(trophy, 1, self.catalog)?);
        }
        Ok(())
    }

    fn build_outside(&mut self, outside: &mut Room, location: Location) -> Result<(), HearthError> {
        let types = [
            FurnitureKind::AnimalPen,
            FurnitureKind::Garden,
            FurnitureKind::Stable,
        ];
        for (index, &kind) in types.iter().enumerate() {
            let article = if index == 0 { "an" } else { "a" };
            let prompt = format!(
                "Do you want to build {article} {}? (y/n) ",
                display_name(kind.name())
            );
            if self.ask_yes(&prompt)? {
                outside.add_piece(FurnitureGroup::new(kind, 1, self.catalog)?);
            }
        }

        let feature = match location {
            Location::WindstadManor => Some(("a fish hatchery", FurnitureKind::FishHatchery)),
            Location::LakeviewManor => Some(("an apiary", FurnitureKind::Apiary)),
            Location::HeljarchenHall => Some(("a grain mill", FurnitureKind::GrainMill)),
            _ => None,
        };
        if let Some((label, kind)) = feature {
            if self.ask_yes(&format!("Do you want to build {label}? (y/n) "))? {
                outside.add_piece(FurnitureGroup::new(kind, 1, self.catalog)?);
            }
        }
        Ok(())
    }

    fn choose_expenses(&mut self, house: &mut House) -> Result<(), HearthError> {
        for &expense in ExpenseKind::ALL {
            if expense == ExpenseKind::Chicken {
                let count = self.ask_count(
                    "How many chickens would you like to buy for 25 gold each? (0-3) ",
                    3,
                )?;
                house.add_expense(expense, count);
            } else {
                let prompt = format!(
                    "Do you want to buy a {} for {} gold? (y/n) ",
                    expense.name(),
                    expense.unit_cost()
                );
                if self.ask_yes(&prompt)? {
                    house.add_expense(expense, 1);
                }
            }
        }
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, HearthError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(HearthError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Lenient yes/no: any answer not starting with `n` counts as yes.
    fn ask_yes(&mut self, prompt: &str) -> Result<bool, HearthError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let answer = self.read_line()?;
        Ok(!answer.to_lowercase().starts_with('n'))
    }

    /// Reads lines until one parses to a number in `low..=high`.
    fn ask_index(&mut self, low: usize, high: usize) -> Result<usize, HearthError> {
        loop {
            let line = self.read_line()?;
            if let Ok(value) = line.parse::<usize>() {
                if (low..=high).contains(&value) {
                    return Ok(value);
                }
            }
        }
    }

    /// Re-prompts until a count of at most `max` comes back.
    fn ask_count(&mut self, prompt: &str, max: u32) -> Result<u32, HearthError> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;
            let line = self.read_line()?;
            if let Ok(value) = line.parse::<u32>() {
                if value <= max {
                    return Ok(value);
                }
            }
        }
    }
}

fn trophy_label(trophy: FurnitureKind) -> String {
    display_name(trophy.name().trim_start_matches("Trophy_"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use hearthstead_core::GOLD;

    const ROOMS: &str = "\
-Outside
-Small_House
Wood 10
Nails 20
Chest ~ 1
-Breezehome
Wood 2
Chest ~ 1
";

    const FURNITURE: &str = "\
~Chest~
Wood 4
Iron 2
~Stable~
Wood 6
~Garden~
Wood 2
~Animal_Pen~
Wood 3
~Grain_Mill~
Stone 12
";

    fn catalog() -> (tempfile::TempDir, Catalog) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(hearthstead_core::ROOM_FILE), ROOMS).unwrap();
        std::fs::write(dir.path().join(hearthstead_core::FURNITURE_FILE), FURNITURE).unwrap();
        let catalog = Catalog::load(dir.path()).unwrap();
        (dir, catalog)
    }

    fn plan(catalog: &Catalog, script: &str) -> House {
        let input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        Planner::new(catalog, input, &mut output)
            .run()
            .expect("planner finishes")
    }

    #[test]
    fn purchased_home_needs_only_the_location_choice() {
        let (_dir, catalog) = catalog();
        // 1 = Breezehome
        let house = plan(&catalog, "1\n");

        assert_eq!(house.location(), Location::Breezehome);
        assert_eq!(house.rooms().count(), 1);
        assert_eq!(house.grand_totals().get(GOLD), Some(5000));
    }

    #[test]
    fn invalid_location_input_reprompts() {
        let (_dir, catalog) = catalog();
        let house = plan(&catalog, "99\nabc\n1\n");
        assert_eq!(house.location(), Location::Breezehome);
    }

    #[test]
    fn homestead_cottage_flow() {
        let (_dir, catalog) = catalog();
        // 9 = Heljarchen Hall; cottage; no animal pen, no garden, yes stable;
        // no grain mill; no bard/carriage/cow, 2 chickens, no horse
        let script = "9\n0\nn\nn\ny\nn\nn\nn\nn\n2\nn\n";
        let house = plan(&catalog, script);

        assert_eq!(house.location(), Location::HeljarchenHall);
        let rooms: Vec<_> = house.rooms().collect();
        assert_eq!(rooms.len(), 2);
        // outside first, then the cottage
        assert_eq!(rooms[0].kind(), RoomKind::Outside);
        assert!(rooms[0].contains(FurnitureKind::Stable));
        assert!(!rooms[0].contains(FurnitureKind::Garden));
        assert_eq!(rooms[1].kind(), RoomKind::SmallHouse);

        assert_eq!(house.expense_count(ExpenseKind::Chicken), 2);
        // 2 chickens * 25 + 5000 plot
        assert_eq!(house.grand_totals().get(GOLD), Some(5050));
    }

    #[test]
    fn blank_answer_counts_as_yes() {
        let (_dir, catalog) = catalog();
        // cottage on Heljarchen; blank answers accept every outside piece
        // and every flat expense, chickens 0
        let script = "9\n0\n\n\n\n\n\n\n\n0\n\n";
        let house = plan(&catalog, script);

        let outside = house.rooms().next().unwrap();
        assert!(outside.contains(FurnitureKind::AnimalPen));
        assert!(outside.contains(FurnitureKind::Garden));
        assert!(outside.contains(FurnitureKind::Stable));
        assert!(outside.contains(FurnitureKind::GrainMill));
        assert_eq!(house.expense_count(ExpenseKind::Bard), 1);
        assert_eq!(house.expense_count(ExpenseKind::Horse), 1);
        assert_eq!(house.expense_count(ExpenseKind::Chicken), 0);
    }

    #[test]
    fn script_running_dry_is_an_input_closed_error() {
        let (_dir, catalog) = catalog();
        let input = Cursor::new(b"9\n0\n".to_vec());
        let mut output = Vec::new();
        let err = Planner::new(&catalog, input, &mut output).run().unwrap_err();
        assert!(matches!(err, HearthError::InputClosed));
    }
}
