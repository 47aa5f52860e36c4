//! Figure domain model.
//!
//! # Responsibility
//! - Define the record stored for one collectible figure.
//! - Validate construction input and persisted input through one path.
//!
//! # Invariants
//! - `market_value` is finite and never negative.
//! - `id` is the file-naming key and is not changed after creation.
//! - Enumerations serialize as their display strings, never as codes.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Currency symbol appended to rendered market values.
pub const CURRENCY_SYMBOL: &str = "€";
/// Label used for the market value line.
pub const MARKET_VALUE_LABEL: &str = "Valor de mercado";

/// Product line of a figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FigureKind {
    #[default]
    #[serde(rename = "Pop!")]
    Pop,
    #[serde(rename = "Pop! Rides")]
    PopRides,
    #[serde(rename = "Vinyl Soda")]
    VinylSoda,
    #[serde(rename = "Vinyl Gold")]
    VinylGold,
}

impl FigureKind {
    pub const ALL: [FigureKind; 4] = [
        FigureKind::Pop,
        FigureKind::PopRides,
        FigureKind::VinylSoda,
        FigureKind::VinylGold,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pop => "Pop!",
            Self::PopRides => "Pop! Rides",
            Self::VinylSoda => "Vinyl Soda",
            Self::VinylGold => "Vinyl Gold",
        }
    }
}

impl Display for FigureKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FigureKind {
    type Err = FigureValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == trimmed)
            .ok_or_else(|| FigureValidationError::UnknownKind(value.to_string()))
    }
}

/// Thematic genre of a figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FigureGenre {
    #[default]
    #[serde(rename = "Animación")]
    Animation,
    #[serde(rename = "Películas y TV")]
    MoviesAndTv,
    #[serde(rename = "Videojuegos")]
    VideoGames,
    #[serde(rename = "Deportes")]
    Sports,
    #[serde(rename = "Música")]
    Music,
    #[serde(rename = "Ánime")]
    Anime,
}

impl FigureGenre {
    pub const ALL: [FigureGenre; 6] = [
        FigureGenre::Animation,
        FigureGenre::MoviesAndTv,
        FigureGenre::VideoGames,
        FigureGenre::Sports,
        FigureGenre::Music,
        FigureGenre::Anime,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Animation => "Animación",
            Self::MoviesAndTv => "Películas y TV",
            Self::VideoGames => "Videojuegos",
            Self::Sports => "Deportes",
            Self::Music => "Música",
            Self::Anime => "Ánime",
        }
    }
}

impl Display for FigureGenre {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FigureGenre {
    type Err = FigureValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|genre| genre.as_str() == trimmed)
            .ok_or_else(|| FigureValidationError::UnknownGenre(value.to_string()))
    }
}

/// Validation failures for figure construction and parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FigureValidationError {
    #[error("market value cannot be negative, got {0}")]
    NegativeMarketValue(f64),
    #[error("market value must be a finite number")]
    NonFiniteMarketValue,
    #[error("unknown figure type `{0}`; expected one of: Pop!, Pop! Rides, Vinyl Soda, Vinyl Gold")]
    UnknownKind(String),
    #[error(
        "unknown figure genre `{0}`; expected one of: Animación, Películas y TV, Videojuegos, Deportes, Música, Ánime"
    )]
    UnknownGenre(String),
}

/// One collectible figure as stored in a user collection.
///
/// Field order matches the persisted key order. `category`, `theme` and
/// `sequence_number` keep the historical `type`, `genre` and `number` keys so
/// existing collections stay readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "FigureWire")]
pub struct Figure {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub category: FigureKind,
    #[serde(rename = "genre")]
    pub theme: FigureGenre,
    pub franchise: String,
    #[serde(rename = "number")]
    pub sequence_number: u32,
    pub is_exclusive: bool,
    pub special_features: String,
    pub market_value: f64,
}

/// Unchecked wire shape; converted into `Figure` only after validation.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FigureWire {
    id: String,
    name: String,
    description: String,
    #[serde(rename = "type")]
    category: FigureKind,
    #[serde(rename = "genre")]
    theme: FigureGenre,
    franchise: String,
    #[serde(rename = "number")]
    sequence_number: u32,
    is_exclusive: bool,
    special_features: String,
    market_value: f64,
}

impl TryFrom<FigureWire> for Figure {
    type Error = FigureValidationError;

    fn try_from(wire: FigureWire) -> Result<Self, Self::Error> {
        let figure = Figure {
            id: wire.id,
            name: wire.name,
            description: wire.description,
            category: wire.category,
            theme: wire.theme,
            franchise: wire.franchise,
            sequence_number: wire.sequence_number,
            is_exclusive: wire.is_exclusive,
            special_features: wire.special_features,
            market_value: wire.market_value,
        };
        figure.validate()?;
        Ok(figure)
    }
}

impl Figure {
    /// Creates a validated figure record.
    ///
    /// # Errors
    /// - `NegativeMarketValue` when `market_value < 0`.
    /// - `NonFiniteMarketValue` when `market_value` is NaN or infinite.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        category: FigureKind,
        theme: FigureGenre,
        franchise: impl Into<String>,
        sequence_number: u32,
        is_exclusive: bool,
        special_features: impl Into<String>,
        market_value: f64,
    ) -> Result<Self, FigureValidationError> {
        let figure = Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            category,
            theme,
            franchise: franchise.into(),
            sequence_number,
            is_exclusive,
            special_features: special_features.into(),
            market_value,
        };
        figure.validate()?;
        Ok(figure)
    }

    /// Checks invariants that public fields can break after construction.
    pub fn validate(&self) -> Result<(), FigureValidationError> {
        if !self.market_value.is_finite() {
            return Err(FigureValidationError::NonFiniteMarketValue);
        }
        if self.market_value < 0.0 {
            return Err(FigureValidationError::NegativeMarketValue(self.market_value));
        }
        Ok(())
    }

    /// Returns the structured mapping written to storage.
    pub fn to_json_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    /// Rebuilds a figure from its structured mapping, validating it.
    pub fn from_json_value(value: serde_json::Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    /// Market value with the currency suffix, e.g. `150€`.
    pub fn market_value_text(&self) -> String {
        format!("{}{CURRENCY_SYMBOL}", self.market_value)
    }

    /// Labeled fields in display order, excluding the market value line.
    pub fn labeled_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ID", self.id.clone()),
            ("Nombre", self.name.clone()),
            ("Descripción", self.description.clone()),
            ("Tipo", self.category.to_string()),
            ("Género", self.theme.to_string()),
            ("Franquicia", self.franchise.clone()),
            ("Número", self.sequence_number.to_string()),
            ("Exclusivo", yes_no(self.is_exclusive).to_string()),
            ("Características especiales", self.special_features.clone()),
        ]
    }
}

impl Display for Figure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (label, value) in self.labeled_fields() {
            writeln!(f, "{label}: {value}")?;
        }
        write!(f, "{MARKET_VALUE_LABEL}: {}", self.market_value_text())
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Sí"
    } else {
        "No"
    }
}
