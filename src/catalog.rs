//! Fixed option sets offered by the add-reminder form.

use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseCatalogError {
    kind: &'static str,
    value: String,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PlantName {
    Rose,
    SnakePlant,
}

impl PlantName {
    pub const ALL: &'static [PlantName] = &[PlantName::Rose, PlantName::SnakePlant];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlantName::Rose => "Rose",
            PlantName::SnakePlant => "SnakePlant",
        }
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CareAction {
    #[default]
    Watering,
    Misting,
    Fertilizing,
    Pruning,
}

impl CareAction {
    pub const ALL: &'static [CareAction] = &[
        CareAction::Watering,
        CareAction::Misting,
        CareAction::Fertilizing,
        CareAction::Pruning,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CareAction::Watering => "Watering",
            CareAction::Misting => "Misting",
            CareAction::Fertilizing => "Fertilizing",
            CareAction::Pruning => "Pruning",
        }
    }
}

macro_rules! catalog_text {
    ($ty:ty, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ParseCatalogError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|option| option.as_str().eq_ignore_ascii_case(trimmed))
                    .ok_or_else(|| ParseCatalogError {
                        kind: $kind,
                        value: s.to_owned(),
                    })
            }
        }
    };
}

catalog_text!(PlantName, "plant name");
catalog_text!(CareAction, "care action");
