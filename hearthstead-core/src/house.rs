use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::kind::kinds;
use crate::room::Room;
use crate::tally::MaterialTotals;

/// Material name the gold costs are tallied under.
pub const GOLD: &str = "Gold";

kinds! {
    /// The purchasable dwellings.
    pub enum Location {
        Breezehome = "Breezehome",
        Hjerim = "Hjerim",
        Honeyside = "Honeyside",
        ProudspireManor = "Proudspire_Manor",
        SeverinManor = "Severin_Manor",
        VlindrelHall = "Vlindrel_Hall",
        WindstadManor = "Windstad_Manor",
        LakeviewManor = "Lakeview_Manor",
        HeljarchenHall = "Heljarchen_Hall",
    }
}

impl Location {
    /// Fixed acquisition cost in gold: the deed for a purchased home, the
    /// plot for a homestead.
    pub fn cost(self) -> u32 {
        match self {
            Location::Breezehome => 5000,
            Location::Hjerim => 12000,
            Location::Honeyside => 8000,
            Location::ProudspireManor => 25000,
            Location::SeverinManor => 0,
            Location::VlindrelHall => 8000,
            Location::WindstadManor => 5000,
            Location::LakeviewManor => 5000,
            Location::HeljarchenHall => 5000,
        }
    }

    /// Whether this location is a buildable plot rather than a finished home.
    pub fn is_homestead(self) -> bool {
        matches!(
            self,
            Location::WindstadManor | Location::LakeviewManor | Location::HeljarchenHall
        )
    }
}

kinds! {
    /// Non-room purchases for a home.
    pub enum ExpenseKind {
        Bard = "Bard",
        Carriage = "Carriage",
        Cow = "Cow",
        Chicken = "Chicken",
        Horse = "Horse",
    }
}

impl ExpenseKind {
    /// Gold cost of one unit.
    pub fn unit_cost(self) -> u32 {
        match self {
            ExpenseKind::Bard => 1500,
            ExpenseKind::Carriage => 500,
            ExpenseKind::Cow => 200,
            ExpenseKind::Chicken => 25,
            ExpenseKind::Horse => 1000,
        }
    }
}

/// The whole dwelling under construction: rooms plus non-room expenses.
///
/// Rooms keep insertion order and stay addressable as distinct instances even
/// when display names collide (the Outside pseudo-room next to a purchased
/// home's upgrade room); nothing here collapses them.
#[derive(Debug, Serialize)]
pub struct House {
    location: Location,
    rooms: Vec<Room>,
    expenses: IndexMap<ExpenseKind, u32>,
}

impl House {
    pub fn new(location: Location) -> House {
        House {
            location,
            rooms: Vec::new(),
            expenses: IndexMap::new(),
        }
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn add_room(&mut self, room: Room) {
        self.rooms.push(room);
    }

    /// Records `count` more units of `kind`; counts accumulate across calls.
    pub fn add_expense(&mut self, kind: ExpenseKind, count: u32) {
        *self.expenses.entry(kind).or_insert(0) += count;
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    /// Expenses with their accumulated counts, in first-recorded order.
    pub fn expenses(&self) -> impl Iterator<Item = (ExpenseKind, u32)> {
        self.expenses.iter().map(|(&kind, &count)| (kind, count))
    }

    pub fn expense_count(&self, kind: ExpenseKind) -> u32 {
        self.expenses.get(&kind).copied().unwrap_or(0)
    }

    /// The root aggregation: every room's totals, plus a `Gold` entry
    /// accumulating the expenses and the location's acquisition cost.
    ///
    /// A three-level fold (furniture units → room totals → house totals)
    /// with tally as the single combining primitive, so the result is
    /// independent of the order rooms and expenses were added.
    pub fn grand_totals(&self) -> MaterialTotals {
        let mut totals = MaterialTotals::new();
        for room in &self.rooms {
            totals.merge(&room.total_materials());
        }
        for (kind, count) in self.expenses() {
            if count > 0 {
                totals.tally(GOLD, kind.unit_cost() * count);
            }
        }
        totals.tally(GOLD, self.location.cost());
        totals
    }
}
