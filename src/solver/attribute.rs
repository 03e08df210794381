//! The attribute vocabulary of the puzzle: five independent categories, each
//! with exactly as many values as there are houses, so that every category's
//! values biject onto house positions.

use serde::{Deserialize, Serialize};

/// The house colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Yellow,
    White,
    Blue,
}

impl Color {
    pub const ALL: [Self; 5] = [Self::Red, Self::Green, Self::Yellow, Self::White, Self::Blue];
}

/// The nationalities of the residents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Nationality {
    English,
    Swede,
    Dane,
    Norwegian,
    German,
}

impl Nationality {
    pub const ALL: [Self; 5] = [
        Self::English,
        Self::Swede,
        Self::Dane,
        Self::Norwegian,
        Self::German,
    ];
}

/// The pets kept in the houses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Pet {
    Dog,
    Cat,
    Horse,
    Bird,
    Zebra,
}

impl Pet {
    pub const ALL: [Self; 5] = [Self::Dog, Self::Cat, Self::Horse, Self::Bird, Self::Zebra];
}

/// The drinks served in the houses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Drink {
    Tea,
    Coffee,
    Milk,
    Water,
    Beer,
}

impl Drink {
    pub const ALL: [Self; 5] = [Self::Tea, Self::Coffee, Self::Milk, Self::Water, Self::Beer];
}

/// The cigarette brands smoked in the houses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Smoke {
    PallMall,
    Dunhill,
    Blend,
    BlueMaster,
    Prince,
}

impl Smoke {
    pub const ALL: [Self; 5] = [
        Self::PallMall,
        Self::Dunhill,
        Self::Blend,
        Self::BlueMaster,
        Self::Prince,
    ];
}

/// The attribute dimensions tracked for every house.
///
/// Doubles as the index into a house's domain table, so a value's category
/// tag is all that is needed to find the domain it narrows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Color,
    Nationality,
    Pet,
    Drink,
    Smoke,
}

impl Category {
    pub const ALL: [Self; 5] = [
        Self::Color,
        Self::Nationality,
        Self::Pet,
        Self::Drink,
        Self::Smoke,
    ];

    /// Index of this category into a house's domain table.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Every attribute value belonging to this category.
    pub fn members(self) -> [Attribute; 5] {
        match self {
            Category::Color => Color::ALL.map(Attribute::Color),
            Category::Nationality => Nationality::ALL.map(Attribute::Nationality),
            Category::Pet => Pet::ALL.map(Attribute::Pet),
            Category::Drink => Drink::ALL.map(Attribute::Drink),
            Category::Smoke => Smoke::ALL.map(Attribute::Smoke),
        }
    }
}

/// A single attribute value, tagged with its category.
///
/// Clue constructors and house queries accept `impl Into<Attribute>`, so call
/// sites pass the bare category enums (`Color::Red`, `Drink::Milk`) and the
/// tag travels with the value. There is no way to ask a house about a value
/// outside that value's own category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Attribute {
    Color(Color),
    Nationality(Nationality),
    Pet(Pet),
    Drink(Drink),
    Smoke(Smoke),
}

impl Attribute {
    /// The category this value belongs to.
    pub fn category(self) -> Category {
        match self {
            Attribute::Color(_) => Category::Color,
            Attribute::Nationality(_) => Category::Nationality,
            Attribute::Pet(_) => Category::Pet,
            Attribute::Drink(_) => Category::Drink,
            Attribute::Smoke(_) => Category::Smoke,
        }
    }
}

impl From<Color> for Attribute {
    fn from(value: Color) -> Self {
        Attribute::Color(value)
    }
}

impl From<Nationality> for Attribute {
    fn from(value: Nationality) -> Self {
        Attribute::Nationality(value)
    }
}

impl From<Pet> for Attribute {
    fn from(value: Pet) -> Self {
        Attribute::Pet(value)
    }
}

impl From<Drink> for Attribute {
    fn from(value: Drink) -> Self {
        Attribute::Drink(value)
    }
}

impl From<Smoke> for Attribute {
    fn from(value: Smoke) -> Self {
        Attribute::Smoke(value)
    }
}
