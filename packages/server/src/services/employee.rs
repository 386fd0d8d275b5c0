use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionSession, TransactionTrait,
};
use tracing::{debug, info};
use uuid::Uuid;

use super::{
    AssetService, BATCH_SIZE, PcLaptopDetails, PcLaptopService, ServiceError, non_blank,
    non_blank_change,
};
use crate::entity::{employee, employee_asset, system_asset};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub employee_id: Option<String>,
    pub pc_laptop_id: Option<Uuid>,
    pub assigned_assets: Vec<Uuid>,
}

/// Partial update. For nullable fields, outer `None` keeps the value and
/// `Some(None)` clears it. `assigned_assets` replaces the whole list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<Option<String>>,
    pub position: Option<Option<String>>,
    pub department: Option<Option<String>>,
    pub employee_id: Option<Option<String>>,
    pub pc_laptop_id: Option<Option<Uuid>>,
    pub assigned_assets: Option<Vec<Uuid>>,
}

/// An employee with its bundle and assets joined.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDetails {
    pub employee: employee::Model,
    /// Stored asset references in order, including dangling ones.
    pub assigned_asset_ids: Vec<Uuid>,
    /// `None` when no bundle is assigned or the assigned bundle is gone.
    pub pc_laptop: Option<PcLaptopDetails>,
    /// Resolved assets in assignment order. Dangling references are skipped.
    pub assigned_assets: Vec<system_asset::Model>,
}

pub struct EmployeeService<'a, C: ConnectionTrait + TransactionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait + TransactionTrait> EmployeeService<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn create(&self, input: NewEmployee) -> Result<EmployeeDetails, ServiceError> {
        let name = required(&input.name, "Name")?;
        let email = required(&input.email, "Email")?;
        let employee_id = non_blank(input.employee_id).map(|v| v.trim().to_string());

        self.ensure_email_free(self.conn, &email, None).await?;
        if let Some(ref employee_id) = employee_id {
            self.ensure_employee_id_free(self.conn, employee_id, None)
                .await?;
        }

        let now = Utc::now();
        let id = Uuid::now_v7();
        let model = employee::ActiveModel {
            id: Set(id),
            name: Set(name),
            email: Set(email),
            phone: Set(non_blank(input.phone)),
            position: Set(non_blank(input.position)),
            department: Set(non_blank(input.department)),
            employee_id: Set(employee_id),
            pc_laptop_id: Set(input.pc_laptop_id),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let txn = self.conn.begin().await?;
        model.insert(&txn).await?;
        replace_assets(&txn, id, &input.assigned_assets).await?;
        txn.commit().await?;

        info!(%id, "Employee created");
        self.get(id).await
    }

    /// All employees, newest first, with references resolved.
    pub async fn list(&self) -> Result<Vec<EmployeeDetails>, ServiceError> {
        let employees = employee::Entity::find()
            .order_by_desc(employee::Column::CreatedAt)
            .order_by_desc(employee::Column::Id)
            .all(self.conn)
            .await?;
        self.resolve(employees).await
    }

    pub async fn get(&self, id: Uuid) -> Result<EmployeeDetails, ServiceError> {
        let employee = find_employee(self.conn, id).await?;
        self.resolve_one(employee).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        changes: EmployeeChanges,
    ) -> Result<EmployeeDetails, ServiceError> {
        if changes == EmployeeChanges::default() {
            return self.get(id).await;
        }

        let name = changes
            .name
            .as_deref()
            .map(|n| required(n, "Name"))
            .transpose()?;
        let email = changes
            .email
            .as_deref()
            .map(|e| required(e, "Email"))
            .transpose()?;
        let employee_id =
            non_blank_change(changes.employee_id).map(|v| v.map(|v| v.trim().to_string()));

        let txn = self.conn.begin().await?;
        let existing = find_employee(&txn, id).await?;

        if let Some(ref email) = email {
            self.ensure_email_free(&txn, email, Some(id)).await?;
        }
        if let Some(Some(ref employee_id)) = employee_id {
            self.ensure_employee_id_free(&txn, employee_id, Some(id))
                .await?;
        }

        let mut active: employee::ActiveModel = existing.into();
        if let Some(name) = name {
            active.name = Set(name);
        }
        if let Some(email) = email {
            active.email = Set(email);
        }
        if let Some(v) = non_blank_change(changes.phone) {
            active.phone = Set(v);
        }
        if let Some(v) = non_blank_change(changes.position) {
            active.position = Set(v);
        }
        if let Some(v) = non_blank_change(changes.department) {
            active.department = Set(v);
        }
        if let Some(v) = employee_id {
            active.employee_id = Set(v);
        }
        if let Some(v) = changes.pc_laptop_id {
            active.pc_laptop_id = Set(v);
        }
        active.updated_at = Set(Utc::now());
        active.update(&txn).await?;

        if let Some(ref asset_ids) = changes.assigned_assets {
            replace_assets(&txn, id, asset_ids).await?;
        }
        txn.commit().await?;

        self.get(id).await
    }

    /// Delete an employee and its asset list. Referenced assets and bundles are untouched.
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let txn = self.conn.begin().await?;
        let result = employee::Entity::delete_by_id(id).exec(&txn).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound("Employee not found".into()));
        }
        employee_asset::Entity::delete_many()
            .filter(employee_asset::Column::EmployeeId.eq(id))
            .exec(&txn)
            .await?;
        txn.commit().await?;

        info!(%id, "Employee deleted");
        Ok(())
    }

    /// Overwrite the employee's bundle reference. The bundle is not required to exist.
    pub async fn assign_pc_laptop(
        &self,
        id: Uuid,
        pc_laptop_id: Option<Uuid>,
    ) -> Result<EmployeeDetails, ServiceError> {
        let existing = find_employee(self.conn, id).await?;

        let mut active: employee::ActiveModel = existing.into();
        active.pc_laptop_id = Set(pc_laptop_id);
        active.updated_at = Set(Utc::now());
        let employee = active.update(self.conn).await?;

        info!(%id, pc_laptop_id = ?pc_laptop_id, "PC/Laptop assigned");
        self.resolve_one(employee).await
    }

    /// Replace the employee's asset list with `asset_ids`, keeping order and duplicates.
    pub async fn assign_assets(
        &self,
        id: Uuid,
        asset_ids: Vec<Uuid>,
    ) -> Result<EmployeeDetails, ServiceError> {
        let txn = self.conn.begin().await?;
        let existing = find_employee(&txn, id).await?;

        replace_assets(&txn, id, &asset_ids).await?;
        let mut active: employee::ActiveModel = existing.into();
        active.updated_at = Set(Utc::now());
        active.update(&txn).await?;
        txn.commit().await?;

        info!(%id, count = asset_ids.len(), "Assets assigned");
        self.get(id).await
    }

    /// Join bundles and asset lists for a batch of employees.
    ///
    /// Lookups are batched, so the query count grows with the number of
    /// distinct ids divided by `BATCH_SIZE`, not with the number of employees.
    pub async fn resolve(
        &self,
        employees: Vec<employee::Model>,
    ) -> Result<Vec<EmployeeDetails>, ServiceError> {
        if employees.is_empty() {
            return Ok(Vec::new());
        }

        let employee_ids: Vec<Uuid> = employees.iter().map(|e| e.id).collect();
        let mut asset_ids: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for batch in employee_ids.chunks(BATCH_SIZE) {
            let rows = employee_asset::Entity::find()
                .filter(employee_asset::Column::EmployeeId.is_in(batch.to_vec()))
                .order_by_asc(employee_asset::Column::EmployeeId)
                .order_by_asc(employee_asset::Column::Position)
                .all(self.conn)
                .await?;
            for row in rows {
                asset_ids.entry(row.employee_id).or_default().push(row.asset_id);
            }
        }

        let bundles = PcLaptopService::new(self.conn);
        let bundle_models = bundles
            .find_many(employees.iter().filter_map(|e| e.pc_laptop_id))
            .await?;
        let resolved_bundles: HashMap<Uuid, PcLaptopDetails> = bundles
            .resolve(bundle_models.into_values().collect())
            .await?
            .into_iter()
            .map(|b| (b.bundle.id, b))
            .collect();

        let assets = AssetService::new(self.conn)
            .find_many(asset_ids.values().flatten().copied())
            .await?;

        Ok(employees
            .into_iter()
            .map(|employee| {
                let assigned_asset_ids = asset_ids.remove(&employee.id).unwrap_or_default();
                let assigned_assets = assigned_asset_ids
                    .iter()
                    .filter_map(|id| assets.get(id).cloned())
                    .collect();
                let pc_laptop = employee
                    .pc_laptop_id
                    .and_then(|id| resolved_bundles.get(&id).cloned());
                EmployeeDetails {
                    employee,
                    assigned_asset_ids,
                    pc_laptop,
                    assigned_assets,
                }
            })
            .collect())
    }

    async fn resolve_one(&self, employee: employee::Model) -> Result<EmployeeDetails, ServiceError> {
        self.resolve(vec![employee])
            .await?
            .pop()
            .ok_or_else(|| ServiceError::NotFound("Employee not found".into()))
    }

    async fn ensure_email_free<T: ConnectionTrait>(
        &self,
        conn: &T,
        email: &str,
        except: Option<Uuid>,
    ) -> Result<(), ServiceError> {
        let mut query = employee::Entity::find().filter(employee::Column::Email.eq(email));
        if let Some(id) = except {
            query = query.filter(employee::Column::Id.ne(id));
        }
        if query.count(conn).await? > 0 {
            debug!(email, "Rejected duplicate email");
            return Err(ServiceError::Conflict(format!(
                "An employee with email '{email}' already exists"
            )));
        }
        Ok(())
    }

    async fn ensure_employee_id_free<T: ConnectionTrait>(
        &self,
        conn: &T,
        employee_id: &str,
        except: Option<Uuid>,
    ) -> Result<(), ServiceError> {
        let mut query =
            employee::Entity::find().filter(employee::Column::EmployeeId.eq(employee_id));
        if let Some(id) = except {
            query = query.filter(employee::Column::Id.ne(id));
        }
        if query.count(conn).await? > 0 {
            debug!(employee_id, "Rejected duplicate employee ID");
            return Err(ServiceError::Conflict(format!(
                "An employee with employee ID '{employee_id}' already exists"
            )));
        }
        Ok(())
    }
}

/// Trimmed value of a required string field.
fn required(value: &str, field: &str) -> Result<String, ServiceError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ServiceError::Validation(format!("{field} is required")));
    }
    Ok(value.to_string())
}

async fn find_employee<T: ConnectionTrait>(
    conn: &T,
    id: Uuid,
) -> Result<employee::Model, ServiceError> {
    employee::Entity::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Employee not found".into()))
}

async fn replace_assets<T: ConnectionTrait>(
    conn: &T,
    employee_id: Uuid,
    asset_ids: &[Uuid],
) -> Result<(), ServiceError> {
    employee_asset::Entity::delete_many()
        .filter(employee_asset::Column::EmployeeId.eq(employee_id))
        .exec(conn)
        .await?;

    for (batch_index, batch) in asset_ids.chunks(BATCH_SIZE).enumerate() {
        let offset = batch_index * BATCH_SIZE;
        let rows = batch
            .iter()
            .enumerate()
            .map(|(i, asset_id)| {
                Ok(employee_asset::ActiveModel {
                    employee_id: Set(employee_id),
                    position: Set(list_position(offset + i)?),
                    asset_id: Set(*asset_id),
                })
            })
            .collect::<Result<Vec<_>, ServiceError>>()?;
        employee_asset::Entity::insert_many(rows)
            .exec_without_returning(conn)
            .await?;
    }
    Ok(())
}

/// Stored position column for an index into the assigned asset list.
fn list_position(index: usize) -> Result<i32, ServiceError> {
    i32::try_from(index).map_err(|_| {
        ServiceError::Validation(format!(
            "Assigned asset list is too long: at most {} entries are supported",
            i32::MAX as u64 + 1
        ))
    })
}
