use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A PC or laptop bundle. Each slot holds a `system_asset` id.
///
/// Slots are plain columns without foreign keys; a slot may point at an asset
/// that has since been deleted.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pc_laptop")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub mouse_id: Option<Uuid>,
    pub keyboard_id: Option<Uuid>,
    pub motherboard_id: Option<Uuid>,
    pub camera_id: Option<Uuid>,
    pub headphone_id: Option<Uuid>,
    pub power_supply_id: Option<Uuid>,
    pub storage_id: Option<Uuid>,
    pub ram_id: Option<Uuid>,
    pub ram_id2: Option<Uuid>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl Model {
    /// Every populated slot id, in slot order.
    pub fn slot_ids(&self) -> impl Iterator<Item = Uuid> + '_ {
        [
            self.mouse_id,
            self.keyboard_id,
            self.motherboard_id,
            self.camera_id,
            self.headphone_id,
            self.power_supply_id,
            self.storage_id,
            self.ram_id,
            self.ram_id2,
        ]
        .into_iter()
        .flatten()
    }
}

impl ActiveModelBehavior for ActiveModel {}
