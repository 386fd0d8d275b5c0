use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use common::AssetCategory;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::info;
use uuid::Uuid;

use super::{BATCH_SIZE, ServiceError, non_blank, non_blank_change};
use crate::entity::system_asset;

/// Optional attributes of a system asset.
///
/// The category-specific groups are not tied to their category: any asset
/// may carry any of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetAttributes {
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
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAsset {
    pub category: AssetCategory,
    pub attributes: AssetAttributes,
}

impl NewAsset {
    pub fn new(category: AssetCategory) -> Self {
        Self {
            category,
            attributes: AssetAttributes::default(),
        }
    }
}

/// Partial update. Outer `None` keeps the field, `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetChanges {
    pub category: Option<AssetCategory>,
    pub serial_number: Option<Option<String>>,
    pub vendor_name: Option<Option<String>>,
    pub company_name: Option<Option<String>>,
    pub purchase_date: Option<Option<NaiveDate>>,
    pub warranty_end_date: Option<Option<NaiveDate>>,
    pub ram_size: Option<Option<String>>,
    pub ram_type: Option<Option<String>>,
    pub processor_model: Option<Option<String>>,
    pub storage_type: Option<Option<String>>,
    pub storage_capacity: Option<Option<String>>,
    pub vonage_number: Option<Option<String>>,
    pub vonage_ext_code: Option<Option<String>>,
    pub vonage_password: Option<Option<String>>,
}

pub struct AssetService<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> AssetService<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn create(&self, input: NewAsset) -> Result<system_asset::Model, ServiceError> {
        let attrs = input.attributes;
        let now = Utc::now();
        let model = system_asset::ActiveModel {
            id: Set(Uuid::now_v7()),
            category: Set(input.category),
            serial_number: Set(non_blank(attrs.serial_number)),
            vendor_name: Set(non_blank(attrs.vendor_name)),
            company_name: Set(non_blank(attrs.company_name)),
            purchase_date: Set(attrs.purchase_date),
            warranty_end_date: Set(attrs.warranty_end_date),
            ram_size: Set(non_blank(attrs.ram_size)),
            ram_type: Set(non_blank(attrs.ram_type)),
            processor_model: Set(non_blank(attrs.processor_model)),
            storage_type: Set(non_blank(attrs.storage_type)),
            storage_capacity: Set(non_blank(attrs.storage_capacity)),
            vonage_number: Set(non_blank(attrs.vonage_number)),
            vonage_ext_code: Set(non_blank(attrs.vonage_ext_code)),
            vonage_password: Set(non_blank(attrs.vonage_password)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let asset = model.insert(self.conn).await?;
        info!(id = %asset.id, category = %asset.category, "Asset created");
        Ok(asset)
    }

    /// All assets, newest first.
    pub async fn list(&self) -> Result<Vec<system_asset::Model>, ServiceError> {
        Ok(system_asset::Entity::find()
            .order_by_desc(system_asset::Column::CreatedAt)
            .order_by_desc(system_asset::Column::Id)
            .all(self.conn)
            .await?)
    }

    /// Assets of exactly one category, newest first.
    pub async fn list_by_category(
        &self,
        category: AssetCategory,
    ) -> Result<Vec<system_asset::Model>, ServiceError> {
        Ok(system_asset::Entity::find()
            .filter(system_asset::Column::Category.eq(category))
            .order_by_desc(system_asset::Column::CreatedAt)
            .order_by_desc(system_asset::Column::Id)
            .all(self.conn)
            .await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<system_asset::Model, ServiceError> {
        system_asset::Entity::find_by_id(id)
            .one(self.conn)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Asset not found".into()))
    }

    pub async fn update(
        &self,
        id: Uuid,
        changes: AssetChanges,
    ) -> Result<system_asset::Model, ServiceError> {
        let existing = self.get(id).await?;
        if changes == AssetChanges::default() {
            return Ok(existing);
        }

        let mut active: system_asset::ActiveModel = existing.into();

        if let Some(category) = changes.category {
            active.category = Set(category);
        }
        if let Some(v) = non_blank_change(changes.serial_number) {
            active.serial_number = Set(v);
        }
        if let Some(v) = non_blank_change(changes.vendor_name) {
            active.vendor_name = Set(v);
        }
        if let Some(v) = non_blank_change(changes.company_name) {
            active.company_name = Set(v);
        }
        if let Some(v) = changes.purchase_date {
            active.purchase_date = Set(v);
        }
        if let Some(v) = changes.warranty_end_date {
            active.warranty_end_date = Set(v);
        }
        if let Some(v) = non_blank_change(changes.ram_size) {
            active.ram_size = Set(v);
        }
        if let Some(v) = non_blank_change(changes.ram_type) {
            active.ram_type = Set(v);
        }
        if let Some(v) = non_blank_change(changes.processor_model) {
            active.processor_model = Set(v);
        }
        if let Some(v) = non_blank_change(changes.storage_type) {
            active.storage_type = Set(v);
        }
        if let Some(v) = non_blank_change(changes.storage_capacity) {
            active.storage_capacity = Set(v);
        }
        if let Some(v) = non_blank_change(changes.vonage_number) {
            active.vonage_number = Set(v);
        }
        if let Some(v) = non_blank_change(changes.vonage_ext_code) {
            active.vonage_ext_code = Set(v);
        }
        if let Some(v) = non_blank_change(changes.vonage_password) {
            active.vonage_password = Set(v);
        }
        active.updated_at = Set(Utc::now());

        Ok(active.update(self.conn).await?)
    }

    /// Delete an asset. Bundles and employees that reference it keep the
    /// now-dangling id.
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let result = system_asset::Entity::delete_by_id(id)
            .exec(self.conn)
            .await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound("Asset not found".into()));
        }
        info!(%id, "Asset deleted");
        Ok(())
    }

    /// Load the given assets keyed by id. Ids without a record are absent from the map.
    pub async fn find_many(
        &self,
        ids: impl IntoIterator<Item = Uuid>,
    ) -> Result<HashMap<Uuid, system_asset::Model>, ServiceError> {
        let mut ids: Vec<Uuid> = ids.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let mut found = HashMap::with_capacity(ids.len());
        for batch in ids.chunks(BATCH_SIZE) {
            let assets = system_asset::Entity::find()
                .filter(system_asset::Column::Id.is_in(batch.to_vec()))
                .all(self.conn)
                .await?;
            found.extend(assets.into_iter().map(|a| (a.id, a)));
        }
        Ok(found)
    }
}
