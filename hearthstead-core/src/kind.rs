//! Closed catalogs of room and furniture kinds.
//!
//! Every kind carries the underscore-separated identifier it goes by in the
//! catalog files, and the reverse lookup is a single match built at compile
//! time, so resolving a name never scans.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Defines a closed kind enum together with its catalog-identifier table.
macro_rules! kinds {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident = $text:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        $vis enum $name {
            $($variant,)*
        }

        impl $name {
            /// Every kind, in catalog order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];

            /// The identifier this kind goes by in the catalog files.
            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)*
                }
            }

            /// Resolves a catalog identifier to a kind, `None` if unknown.
            pub fn from_name(name: &str) -> Option<$name> {
                match name {
                    $($text => Some($name::$variant),)*
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

pub(crate) use kinds;

kinds! {
    /// The kinds of furniture a room can hold.
    pub enum FurnitureKind {
        Barrels = "Barrels",
        Chest = "Chest",
        Cupboard = "Cupboard",
        Desk = "Desk",
        DisplayCaseAndCupboard = "Display_Case_and_Cupboard",
        DisplayCaseAndSmallWardrobe = "Display_Case_And_Small_Wardrobe",
        Dresser = "Dresser",
        EndTable1 = "End_Table_1",
        EndTable2 = "End_Table_2",
        HangingRack = "Hanging_Rack",
        Safe1 = "Safe_1",
        Safe2 = "Safe_2",
        TallWardrobe = "Tall_Wardrobe",
        WardrobeSmall = "Wardrobe_Small",
        Chair = "Chair",
        ChildBed = "Child_Bed",
        DiningTableAndChairs = "Dining_Table_and_Chairs",
        DisplayCase = "Display_Case",
        DisplayCaseOnLowTable = "Display_Case_on_Low_Table",
        DoubleBed = "Double_Bed",
        LargeTableWithChest = "Large_Table_with_Chest",
        LowTable = "Low_Table",
        NightTable1 = "Night_Table_1",
        NightTables2 = "Night_Tables_2",
        RoundTable = "Round_Table",
        RoundTableAndChairs = "Round_Table_and_Chairs",
        SingleBed = "Single_Bed",
        SquareTable = "Square_Table",
        SquareTableAndChairs = "Square_Table_and_Chairs",
        TableWithDisplayCases = "Table_with_Display_Cases",
        WashbasinOnStand = "Washbasin_on_Stand",
        ArmorMannequin = "Armor_Mannequin",
        ArmorMannequinWithCupboard = "Armor_Mannequin_with_Cupboard",
        WeaponPlaque = "Weapon_Plaque",
        WeaponRacks1 = "Weapon_Racks_1",
        WeaponRacks2 = "Weapon_Racks_2",
        WeaponRacks3 = "Weapon_Racks_3",
        Bench = "Bench",
        TableWithBenches = "Table_With_Benches",
        Bookshelf = "Bookshelf",
        CornerShelf = "Corner_Shelf",
        DisplayCaseAndShelf = "Display_Case_and_Shelf",
        SmallShelf = "Small_Shelf",
        TallBookshelf = "Tall_Bookshelf",
        TallShelf = "Tall_Shelf",
        TallShelfWithDisplayCase = "Tall_Shelf_with_Display_Case",
        WallShelves1 = "Wall_Shelves_1",
        WallShelves2 = "Wall_Shelves_2",
        AlchemyLab = "Alchemy_Lab",
        ArcaneEnchanter = "Arcane_Enchanter",
        Brazer = "Brazer",
        ArcheryTarget1 = "Archery_Target_1",
        ArcheryTargets2 = "Archery_Targets_2",
        ArmorerWorkbench = "Armorer_Workbench",
        BlacksmithForge = "Blacksmith_Forge",
        BlacksmithAnvil = "Blacksmith_Anvil",
        ChandelierLarge = "Chandelier_Large",
        ChandelierSmall = "Chandelier_Small",
        ChildPracticeDummy = "Child_Practice_Dummy",
        Fireplace = "Fireplace",
        Firepit = "Firepit",
        Grindstone = "Grindstone",
        LampStand = "Lamp_Stand",
        MeadBarrels = "Mead_Barrels",
        Coffin = "Coffin",
        MountedBearHead = "Mounted_Bear_Head",
        MountedElkAntlers = "Mounted_Elk_Antlers",
        MountedElkHead1 = "Mounted_Elk_Head_1",
        MountedElkHead2 = "Mounted_Elk_Head_2",
        MountedGoatHead = "Mounted_Goat_Head",
        MountedHorkerHead = "Mounted_Horker_Head",
        MountedMudcrab = "Mounted_Mudcrab",
        MountedSabreCatHead = "Mounted_Sabre_Cat_Head",
        MountedSlaughterfish = "Mounted_Slaughterfish",
        MountedSnowySabreCatHead = "Mounted_Snowy_Sabre_Cat_Head",
        MountedWolfHead = "Mounted_Wolf_Head",
        LargePlanter = "Large_Planter",
        SmallPlanterWithCupboard = "Small_Planter_with_Cupboard",
        Oven = "Oven",
        ShrineBase = "Shrine_Base",
        ShrineOfAkatosh = "Shrine_of_Akatosh",
        ShrineOfArkay = "Shrine_of_Arkay",
        ShrineOfDibella = "Shrine_of_Dibella",
        ShrineOfJulianos = "Shrine_of_Julianos",
        ShrineOfKynareth = "Shrine_of_Kynareth",
        ShrineOfMara = "Shrine_of_Mara",
        ShrineOfStendarr = "Shrine_of_Stendarr",
        ShrineOfTalos = "Shrine_of_Talos",
        ShrineOfZenithar = "Shrine_of_Zenithar",
        Smelter = "Smelter",
        TanningRack = "Tanning_Rack",
        TrophyBaseLarge = "Trophy_Base_Large",
        TrophyBaseSmall = "Trophy_Base_Small",
        WallSconce = "Wall_Sconce",
        TrophyBear = "Trophy_Bear",
        TrophyChaurus = "Trophy_Chaurus",
        TrophyCow = "Trophy_Cow",
        TrophyDeer = "Trophy_Deer",
        TrophyDragonSkull = "Trophy_Dragon_Skull",
        TrophyDraugr = "Trophy_Draugr",
        TrophyDwarvenSphere = "Trophy_Dwarven_Sphere",
        TrophyFalmer = "Trophy_Falmer",
        TrophyFrostTroll = "Trophy_Frost_Troll",
        TrophyFrostbiteSpider = "Trophy_Frostbite_Spider",
        TrophyHorker = "Trophy_Horker",
        TrophySabreCat = "Trophy_Sabre_Cat",
        TrophySnowBear = "Trophy_Snow_Bear",
        TrophyTroll = "Trophy_Troll",
        TrophyWolf = "Trophy_Wolf",
        TrophyDraugrSmall = "Trophy_Draugr_Small",
        TrophyDwarvenSpider = "Trophy_Dwarven_Spider",
        TrophyFalmerSmall = "Trophy_Falmer_Small",
        TrophyGoat = "Trophy_Goat",
        TrophyHagraven = "Trophy_Hagraven",
        TrophyIceWolf = "Trophy_Ice_Wolf",
        TrophyMudcrab = "Trophy_Mudcrab",
        TrophySkeever = "Trophy_Skeever",
        TrophySkeleton = "Trophy_Skeleton",
        TrophySlaughterfish = "Trophy_Slaughterfish",
        TrophySpriggan = "Trophy_Spriggan",
        FishHatchery = "Fish_Hatchery",
        Apiary = "Apiary",
        GrainMill = "Grain_Mill",
        AnimalPen = "Animal_Pen",
        Garden = "Garden",
        Stable = "Stable",
    }
}

kinds! {
    /// The kinds of rooms a house can be assembled from.
    ///
    /// The purchasable homes appear here too: their single block in the room
    /// catalog describes the whole upgrade.
    pub enum RoomKind {
        SmallHouse = "Small_House",
        Entryway = "Entryway",
        MainHall = "Main_Hall",
        Cellar = "Cellar",
        CellarSmithing = "Cellar_Smithing",
        CellarSafes = "Cellar_Safes",
        CellarReligious = "Cellar_Religious",
        Armory = "Armory",
        Kitchen = "Kitchen",
        Library = "Library",
        Bedrooms = "Bedrooms",
        EnchanterTower = "Enchanter_Tower",
        Greenhouse = "Greenhouse",
        AlchemyLaboratory = "Alchemy_Laboratory",
        TrophyRoom = "Trophy_Room",
        StorageRoom = "Storage_Room",
        Breezehome = "Breezehome",
        Hjerim = "Hjerim",
        Honeyside = "Honeyside",
        ProudspireManor = "Proudspire_Manor",
        SeverinManor = "Severin_Manor",
        VlindrelHall = "Vlindrel_Hall",
        Outside = "Outside",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for &kind in FurnitureKind::ALL {
            assert_eq!(FurnitureKind::from_name(kind.name()), Some(kind));
        }
        for &kind in RoomKind::ALL {
            assert_eq!(RoomKind::from_name(kind.name()), Some(kind));
        }
    }

    #[test]
    fn unknown_names_resolve_to_none() {
        assert_eq!(RoomKind::from_name("Nonexistent_Room"), None);
        assert_eq!(FurnitureKind::from_name("Chesterfield"), None);
        // identifiers are case sensitive
        assert_eq!(FurnitureKind::from_name("chest"), None);
    }

    #[test]
    fn identifiers_are_single_tokens() {
        // the catalog grammar splits entries on whitespace, so identifiers
        // must never contain spaces
        for &kind in FurnitureKind::ALL {
            assert!(!kind.name().contains(char::is_whitespace), "{kind}");
        }
        for &kind in RoomKind::ALL {
            assert!(!kind.name().contains(char::is_whitespace), "{kind}");
        }
    }
}
