pub mod asset_category;

pub use asset_category::{AssetCategory, ParseCategoryError};
