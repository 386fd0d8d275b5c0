use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::asset::AssetResponse;
use super::shared::double_option;
use crate::services::{PcLaptopChanges, PcLaptopDetails, PcLaptopSlots, Slot};

/// Slot ids for a new bundle. Any subset may be given.
#[derive(Deserialize, Default, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePcLaptopRequest {
    pub mouse_id: Option<Uuid>,
    pub keyboard_id: Option<Uuid>,
    pub motherboard_id: Option<Uuid>,
    pub camera_id: Option<Uuid>,
    pub headphone_id: Option<Uuid>,
    pub power_supply_id: Option<Uuid>,
    pub storage_id: Option<Uuid>,
    pub ram_id: Option<Uuid>,
    pub ram_id2: Option<Uuid>,
}

/// Partial slot update: absent slots are kept, `null` empties a slot.
#[derive(Deserialize, Default, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePcLaptopRequest {
    #[serde(default, deserialize_with = "double_option")]
    pub mouse_id: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "double_option")]
    pub keyboard_id: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "double_option")]
    pub motherboard_id: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "double_option")]
    pub camera_id: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "double_option")]
    pub headphone_id: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "double_option")]
    pub power_supply_id: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "double_option")]
    pub storage_id: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "double_option")]
    pub ram_id: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "double_option")]
    pub ram_id2: Option<Option<Uuid>>,
}

/// A bundle with every slot resolved to its asset, or `null` when the slot
/// is empty or points at a deleted asset.
#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PcLaptopResponse {
    pub id: Uuid,
    pub mouse_id: Option<AssetResponse>,
    pub keyboard_id: Option<AssetResponse>,
    pub motherboard_id: Option<AssetResponse>,
    pub camera_id: Option<AssetResponse>,
    pub headphone_id: Option<AssetResponse>,
    pub power_supply_id: Option<AssetResponse>,
    pub storage_id: Option<AssetResponse>,
    pub ram_id: Option<AssetResponse>,
    pub ram_id2: Option<AssetResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PcLaptopDetails> for PcLaptopResponse {
    fn from(d: PcLaptopDetails) -> Self {
        let slot = |s: Slot| d.asset(s).cloned().map(AssetResponse::from);
        Self {
            id: d.bundle.id,
            mouse_id: slot(Slot::Mouse),
            keyboard_id: slot(Slot::Keyboard),
            motherboard_id: slot(Slot::Motherboard),
            camera_id: slot(Slot::Camera),
            headphone_id: slot(Slot::Headphone),
            power_supply_id: slot(Slot::PowerSupply),
            storage_id: slot(Slot::Storage),
            ram_id: slot(Slot::Ram),
            ram_id2: slot(Slot::Ram2),
            created_at: d.bundle.created_at,
            updated_at: d.bundle.updated_at,
        }
    }
}

impl From<CreatePcLaptopRequest> for PcLaptopSlots {
    fn from(req: CreatePcLaptopRequest) -> Self {
        Self {
            mouse_id: req.mouse_id,
            keyboard_id: req.keyboard_id,
            motherboard_id: req.motherboard_id,
            camera_id: req.camera_id,
            headphone_id: req.headphone_id,
            power_supply_id: req.power_supply_id,
            storage_id: req.storage_id,
            ram_id: req.ram_id,
            ram_id2: req.ram_id2,
        }
    }
}

impl From<UpdatePcLaptopRequest> for PcLaptopChanges {
    fn from(req: UpdatePcLaptopRequest) -> Self {
        Self {
            mouse_id: req.mouse_id,
            keyboard_id: req.keyboard_id,
            motherboard_id: req.motherboard_id,
            camera_id: req.camera_id,
            headphone_id: req.headphone_id,
            power_supply_id: req.power_supply_id,
            storage_id: req.storage_id,
            ram_id: req.ram_id,
            ram_id2: req.ram_id2,
        }
    }
}
