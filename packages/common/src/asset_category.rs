#[cfg(feature = "sea-orm")]
use sea_orm::prelude::StringLen;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of hardware or service component a system asset represents.
///
/// When the `sea-orm` feature is enabled, this enum can be used directly in SeaORM entities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[cfg_attr(
    feature = "sea-orm",
    derive(sea_orm::DeriveActiveEnum, sea_orm::EnumIter),
    sea_orm(rs_type = "String", db_type = "String(StringLen::None)")
)]
#[serde(rename_all = "kebab-case")]
pub enum AssetCategory {
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "mouse"))]
    Mouse,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "keyboard"))]
    Keyboard,
    /// Carries the processor model.
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "motherboard"))]
    Motherboard,
    /// Carries RAM size and type.
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "ram"))]
    Ram,
    /// Carries storage type and capacity.
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "storage"))]
    Storage,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "power-supply"))]
    PowerSupply,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "headphone"))]
    Headphone,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "camera"))]
    Camera,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "monitor"))]
    Monitor,
    /// VOIP line. Carries number, extension and password.
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "vonage"))]
    Vonage,
}

impl AssetCategory {
    /// All categories, in display order.
    pub const ALL: &'static [AssetCategory] = &[
        Self::Mouse,
        Self::Keyboard,
        Self::Motherboard,
        Self::Ram,
        Self::Storage,
        Self::PowerSupply,
        Self::Headphone,
        Self::Camera,
        Self::Monitor,
        Self::Vonage,
    ];

    /// Returns the wire representation (kebab-case).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mouse => "mouse",
            Self::Keyboard => "keyboard",
            Self::Motherboard => "motherboard",
            Self::Ram => "ram",
            Self::Storage => "storage",
            Self::PowerSupply => "power-supply",
            Self::Headphone => "headphone",
            Self::Camera => "camera",
            Self::Monitor => "monitor",
            Self::Vonage => "vonage",
        }
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing an unknown category string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError {
    invalid: String,
}

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid category '{}'. Valid values: {}",
            self.invalid,
            AssetCategory::ALL
                .iter()
                .map(|c| c.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for AssetCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssetCategory::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseCategoryError {
                invalid: s.to_string(),
            })
    }
}
