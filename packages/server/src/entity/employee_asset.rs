use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One entry of an employee's ordered `assignedAssets` list.
///
/// Duplicates are allowed: the same asset may appear at several positions.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employee_asset")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub employee_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub position: i32,

    pub asset_id: Uuid,
}

impl ActiveModelBehavior for ActiveModel {}
