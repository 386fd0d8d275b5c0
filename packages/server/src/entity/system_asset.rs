use common::AssetCategory;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "system_asset")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub category: AssetCategory,

    pub serial_number: Option<String>,
    pub vendor_name: Option<String>,
    pub company_name: Option<String>,
    pub purchase_date: Option<Date>,
    pub warranty_end_date: Option<Date>,

    // ram
    pub ram_size: Option<String>,
    pub ram_type: Option<String>,
    // motherboard
    pub processor_model: Option<String>,
    // storage
    pub storage_type: Option<String>,
    pub storage_capacity: Option<String>,
    // vonage
    pub vonage_number: Option<String>,
    pub vonage_ext_code: Option<String>,
    pub vonage_password: Option<String>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
