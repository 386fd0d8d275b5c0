use common::AssetCategory;
use serde::{Deserialize, Deserializer};

use crate::error::AppError;

/// Deserializer for nullable fields of update bodies, used with `#[serde(default)]`.
/// A missing key stays `None` and leaves the stored value alone, an explicit
/// `null` becomes `Some(None)` and clears it, and any other value is `Some(Some(v))`.
pub fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Some(Option::deserialize(deserializer)?))
}

/// Parse a category string from a request body or path.
pub fn parse_category(value: &str) -> Result<AssetCategory, AppError> {
    value
        .trim()
        .parse()
        .map_err(|e: common::ParseCategoryError| AppError::Validation(e.to_string()))
}
