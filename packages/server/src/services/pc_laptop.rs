use std::collections::HashMap;

use chrono::Utc;
use common::AssetCategory;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::info;
use uuid::Uuid;

use super::{AssetService, BATCH_SIZE, ServiceError};
use crate::entity::{pc_laptop, system_asset};

/// One of the nine component slots of a bundle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    Mouse,
    Keyboard,
    Motherboard,
    Camera,
    Headphone,
    PowerSupply,
    Storage,
    Ram,
    Ram2,
}

impl Slot {
    pub const ALL: [Slot; 9] = [
        Self::Mouse,
        Self::Keyboard,
        Self::Motherboard,
        Self::Camera,
        Self::Headphone,
        Self::PowerSupply,
        Self::Storage,
        Self::Ram,
        Self::Ram2,
    ];

    /// Field name used on the wire.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Mouse => "mouseId",
            Self::Keyboard => "keyboardId",
            Self::Motherboard => "motherboardId",
            Self::Camera => "cameraId",
            Self::Headphone => "headphoneId",
            Self::PowerSupply => "powerSupplyId",
            Self::Storage => "storageId",
            Self::Ram => "ramId",
            Self::Ram2 => "ramId2",
        }
    }

    /// Category an asset in this slot is expected to have.
    pub fn category(&self) -> AssetCategory {
        match self {
            Self::Mouse => AssetCategory::Mouse,
            Self::Keyboard => AssetCategory::Keyboard,
            Self::Motherboard => AssetCategory::Motherboard,
            Self::Camera => AssetCategory::Camera,
            Self::Headphone => AssetCategory::Headphone,
            Self::PowerSupply => AssetCategory::PowerSupply,
            Self::Storage => AssetCategory::Storage,
            Self::Ram | Self::Ram2 => AssetCategory::Ram,
        }
    }

    /// The asset id stored in this slot of `bundle`.
    pub fn get(&self, bundle: &pc_laptop::Model) -> Option<Uuid> {
        match self {
            Self::Mouse => bundle.mouse_id,
            Self::Keyboard => bundle.keyboard_id,
            Self::Motherboard => bundle.motherboard_id,
            Self::Camera => bundle.camera_id,
            Self::Headphone => bundle.headphone_id,
            Self::PowerSupply => bundle.power_supply_id,
            Self::Storage => bundle.storage_id,
            Self::Ram => bundle.ram_id,
            Self::Ram2 => bundle.ram_id2,
        }
    }
}

/// Slot contents for a new bundle. Unset slots stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PcLaptopSlots {
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

impl PcLaptopSlots {
    fn assigned(&self) -> Vec<(Slot, Uuid)> {
        let values = [
            self.mouse_id,
            self.keyboard_id,
            self.motherboard_id,
            self.camera_id,
            self.headphone_id,
            self.power_supply_id,
            self.storage_id,
            self.ram_id,
            self.ram_id2,
        ];
        Slot::ALL
            .into_iter()
            .zip(values)
            .filter_map(|(slot, id)| id.map(|id| (slot, id)))
            .collect()
    }
}

/// Partial slot update. Outer `None` keeps the slot, `Some(None)` empties it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PcLaptopChanges {
    pub mouse_id: Option<Option<Uuid>>,
    pub keyboard_id: Option<Option<Uuid>>,
    pub motherboard_id: Option<Option<Uuid>>,
    pub camera_id: Option<Option<Uuid>>,
    pub headphone_id: Option<Option<Uuid>>,
    pub power_supply_id: Option<Option<Uuid>>,
    pub storage_id: Option<Option<Uuid>>,
    pub ram_id: Option<Option<Uuid>>,
    pub ram_id2: Option<Option<Uuid>>,
}

impl PcLaptopChanges {
    fn assigned(&self) -> Vec<(Slot, Uuid)> {
        let values = [
            self.mouse_id,
            self.keyboard_id,
            self.motherboard_id,
            self.camera_id,
            self.headphone_id,
            self.power_supply_id,
            self.storage_id,
            self.ram_id,
            self.ram_id2,
        ];
        Slot::ALL
            .into_iter()
            .zip(values)
            .filter_map(|(slot, id)| id.flatten().map(|id| (slot, id)))
            .collect()
    }
}

/// A bundle with its slots joined against the asset store.
#[derive(Debug, Clone, PartialEq)]
pub struct PcLaptopDetails {
    pub bundle: pc_laptop::Model,
    assets: HashMap<Slot, system_asset::Model>,
}

impl PcLaptopDetails {
    /// The asset in `slot`, or `None` if the slot is empty or its asset is gone.
    pub fn asset(&self, slot: Slot) -> Option<&system_asset::Model> {
        self.assets.get(&slot)
    }
}

pub struct PcLaptopService<'a, C: ConnectionTrait> {
    conn: &'a C,
    enforce_slot_categories: bool,
}

impl<'a, C: ConnectionTrait> PcLaptopService<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self {
            conn,
            enforce_slot_categories: false,
        }
    }

    /// Reject slots that reference an existing asset of another category.
    /// Slots referencing unknown ids are accepted either way.
    pub fn enforce_slot_categories(mut self, enforce: bool) -> Self {
        self.enforce_slot_categories = enforce;
        self
    }

    pub async fn create(&self, slots: PcLaptopSlots) -> Result<PcLaptopDetails, ServiceError> {
        self.check_slot_categories(&slots.assigned()).await?;

        let now = Utc::now();
        let model = pc_laptop::ActiveModel {
            id: Set(Uuid::now_v7()),
            mouse_id: Set(slots.mouse_id),
            keyboard_id: Set(slots.keyboard_id),
            motherboard_id: Set(slots.motherboard_id),
            camera_id: Set(slots.camera_id),
            headphone_id: Set(slots.headphone_id),
            power_supply_id: Set(slots.power_supply_id),
            storage_id: Set(slots.storage_id),
            ram_id: Set(slots.ram_id),
            ram_id2: Set(slots.ram_id2),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let bundle = model.insert(self.conn).await?;
        info!(id = %bundle.id, "PC/Laptop created");
        self.resolve_one(bundle).await
    }

    /// All bundles, newest first, with slots resolved.
    pub async fn list(&self) -> Result<Vec<PcLaptopDetails>, ServiceError> {
        let bundles = pc_laptop::Entity::find()
            .order_by_desc(pc_laptop::Column::CreatedAt)
            .order_by_desc(pc_laptop::Column::Id)
            .all(self.conn)
            .await?;
        self.resolve(bundles).await
    }

    pub async fn get(&self, id: Uuid) -> Result<PcLaptopDetails, ServiceError> {
        let bundle = self.find(id).await?;
        self.resolve_one(bundle).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        changes: PcLaptopChanges,
    ) -> Result<PcLaptopDetails, ServiceError> {
        let existing = self.find(id).await?;
        if changes == PcLaptopChanges::default() {
            return self.resolve_one(existing).await;
        }
        self.check_slot_categories(&changes.assigned()).await?;

        let mut active: pc_laptop::ActiveModel = existing.into();

        if let Some(v) = changes.mouse_id {
            active.mouse_id = Set(v);
        }
        if let Some(v) = changes.keyboard_id {
            active.keyboard_id = Set(v);
        }
        if let Some(v) = changes.motherboard_id {
            active.motherboard_id = Set(v);
        }
        if let Some(v) = changes.camera_id {
            active.camera_id = Set(v);
        }
        if let Some(v) = changes.headphone_id {
            active.headphone_id = Set(v);
        }
        if let Some(v) = changes.power_supply_id {
            active.power_supply_id = Set(v);
        }
        if let Some(v) = changes.storage_id {
            active.storage_id = Set(v);
        }
        if let Some(v) = changes.ram_id {
            active.ram_id = Set(v);
        }
        if let Some(v) = changes.ram_id2 {
            active.ram_id2 = Set(v);
        }
        active.updated_at = Set(Utc::now());

        let bundle = active.update(self.conn).await?;
        self.resolve_one(bundle).await
    }

    /// Delete a bundle. Employees that reference it keep the now-dangling id.
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let result = pc_laptop::Entity::delete_by_id(id).exec(self.conn).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound("PC/Laptop not found".into()));
        }
        info!(%id, "PC/Laptop deleted");
        Ok(())
    }

    /// Load the given bundles keyed by id, unresolved.
    pub async fn find_many(
        &self,
        ids: impl IntoIterator<Item = Uuid>,
    ) -> Result<HashMap<Uuid, pc_laptop::Model>, ServiceError> {
        let mut ids: Vec<Uuid> = ids.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let mut found = HashMap::with_capacity(ids.len());
        for batch in ids.chunks(BATCH_SIZE) {
            let bundles = pc_laptop::Entity::find()
                .filter(pc_laptop::Column::Id.is_in(batch.to_vec()))
                .all(self.conn)
                .await?;
            found.extend(bundles.into_iter().map(|b| (b.id, b)));
        }
        Ok(found)
    }

    /// Join every slot of every bundle against the asset store with batched lookups.
    pub async fn resolve(
        &self,
        bundles: Vec<pc_laptop::Model>,
    ) -> Result<Vec<PcLaptopDetails>, ServiceError> {
        let assets = AssetService::new(self.conn)
            .find_many(bundles.iter().flat_map(|b| b.slot_ids()))
            .await?;

        Ok(bundles
            .into_iter()
            .map(|bundle| {
                let resolved = Slot::ALL
                    .into_iter()
                    .filter_map(|slot| {
                        let asset = assets.get(&slot.get(&bundle)?)?;
                        Some((slot, asset.clone()))
                    })
                    .collect();
                PcLaptopDetails {
                    bundle,
                    assets: resolved,
                }
            })
            .collect())
    }

    async fn resolve_one(&self, bundle: pc_laptop::Model) -> Result<PcLaptopDetails, ServiceError> {
        self.resolve(vec![bundle])
            .await?
            .pop()
            .ok_or_else(|| ServiceError::NotFound("PC/Laptop not found".into()))
    }

    async fn find(&self, id: Uuid) -> Result<pc_laptop::Model, ServiceError> {
        pc_laptop::Entity::find_by_id(id)
            .one(self.conn)
            .await?
            .ok_or_else(|| ServiceError::NotFound("PC/Laptop not found".into()))
    }

    async fn check_slot_categories(&self, assigned: &[(Slot, Uuid)]) -> Result<(), ServiceError> {
        if !self.enforce_slot_categories || assigned.is_empty() {
            return Ok(());
        }

        let assets = AssetService::new(self.conn)
            .find_many(assigned.iter().map(|(_, id)| *id))
            .await?;

        for (slot, id) in assigned {
            if let Some(asset) = assets.get(id)
                && asset.category != slot.category()
            {
                return Err(ServiceError::Validation(format!(
                    "Slot '{}' expects a {} asset, got {}",
                    slot.field(),
                    slot.category(),
                    asset.category
                )));
            }
        }
        Ok(())
    }
}
