use chrono::{DateTime, NaiveDate, Utc};
use common::AssetCategory;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::shared::{double_option, parse_category};
use crate::error::AppError;
use crate::services::{AssetAttributes, AssetChanges, NewAsset};

#[derive(Deserialize, Default, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssetRequest {
    /// One of the ten asset categories. Required.
    #[schema(example = "ram")]
    pub category: Option<String>,
    pub serial_number: Option<String>,
    pub vendor_name: Option<String>,
    pub company_name: Option<String>,
    #[schema(example = "2024-03-01")]
    pub purchase_date: Option<NaiveDate>,
    #[schema(example = "2027-03-01")]
    pub warranty_end_date: Option<NaiveDate>,
    pub ram_size: Option<String>,
    pub ram_type: Option<String>,
    pub processor_model: Option<String>,
    pub storage_type: Option<String>,
    pub storage_capacity: Option<String>,
    pub vonage_number: Option<String>,
    pub vonage_ext_code: Option<String>,
    pub vonage_password: Option<String>,
}

/// Partial update: absent fields are kept, `null` clears a field.
#[derive(Deserialize, Default, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAssetRequest {
    pub category: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub serial_number: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub vendor_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub company_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub purchase_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "double_option")]
    pub warranty_end_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "double_option")]
    pub ram_size: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub ram_type: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub processor_model: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub storage_type: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub storage_capacity: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub vonage_number: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub vonage_ext_code: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub vonage_password: Option<Option<String>>,
}

#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssetResponse {
    pub id: Uuid,
    pub category: AssetCategory,
    pub serial_number: Option<String>,
    pub vendor_name: Option<String>,
    pub company_name: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub warranty_end_date: Option<NaiveDate>,
    pub ram_size: Option<String>,
    pub ram_type: Option<String>,
    pub processor_model: Option<String>,
    pub storage_type: Option<String>,
    pub storage_capacity: Option<String>,
    pub vonage_number: Option<String>,
    pub vonage_ext_code: Option<String>,
    pub vonage_password: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<crate::entity::system_asset::Model> for AssetResponse {
    fn from(m: crate::entity::system_asset::Model) -> Self {
        Self {
            id: m.id,
            category: m.category,
            serial_number: m.serial_number,
            vendor_name: m.vendor_name,
            company_name: m.company_name,
            purchase_date: m.purchase_date,
            warranty_end_date: m.warranty_end_date,
            ram_size: m.ram_size,
            ram_type: m.ram_type,
            processor_model: m.processor_model,
            storage_type: m.storage_type,
            storage_capacity: m.storage_capacity,
            vonage_number: m.vonage_number,
            vonage_ext_code: m.vonage_ext_code,
            vonage_password: m.vonage_password,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl TryFrom<CreateAssetRequest> for NewAsset {
    type Error = AppError;

    fn try_from(req: CreateAssetRequest) -> Result<Self, Self::Error> {
        let category = match req.category.as_deref().map(str::trim) {
            None | Some("") => return Err(AppError::Validation("Category is required".into())),
            Some(c) => parse_category(c)?,
        };

        Ok(NewAsset {
            category,
            attributes: AssetAttributes {
                serial_number: req.serial_number,
                vendor_name: req.vendor_name,
                company_name: req.company_name,
                purchase_date: req.purchase_date,
                warranty_end_date: req.warranty_end_date,
                ram_size: req.ram_size,
                ram_type: req.ram_type,
                processor_model: req.processor_model,
                storage_type: req.storage_type,
                storage_capacity: req.storage_capacity,
                vonage_number: req.vonage_number,
                vonage_ext_code: req.vonage_ext_code,
                vonage_password: req.vonage_password,
            },
        })
    }
}

impl TryFrom<UpdateAssetRequest> for AssetChanges {
    type Error = AppError;

    fn try_from(req: UpdateAssetRequest) -> Result<Self, Self::Error> {
        let category = req.category.as_deref().map(parse_category).transpose()?;

        Ok(AssetChanges {
            category,
            serial_number: req.serial_number,
            vendor_name: req.vendor_name,
            company_name: req.company_name,
            purchase_date: req.purchase_date,
            warranty_end_date: req.warranty_end_date,
            ram_size: req.ram_size,
            ram_type: req.ram_type,
            processor_model: req.processor_model,
            storage_type: req.storage_type,
            storage_capacity: req.storage_capacity,
            vonage_number: req.vonage_number,
            vonage_ext_code: req.vonage_ext_code,
            vonage_password: req.vonage_password,
        })
    }
}
