use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::asset::AssetResponse;
use super::pc_laptop::PcLaptopResponse;
use super::shared::double_option;
use crate::error::AppError;
use crate::services::{EmployeeChanges, EmployeeDetails, NewEmployee};

#[derive(Deserialize, Default, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    /// Required.
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,
    /// Required and unique across employees.
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    /// Unique when present.
    #[schema(example = "EMP-001")]
    pub employee_id: Option<String>,
    pub pc_laptop_id: Option<Uuid>,
    pub assigned_assets: Option<Vec<Uuid>>,
}

/// Partial update: absent fields are kept, `null` clears a nullable field.
/// `assignedAssets`, when given, replaces the whole list.
#[derive(Deserialize, Default, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub position: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub department: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub employee_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub pc_laptop_id: Option<Option<Uuid>>,
    pub assigned_assets: Option<Vec<Uuid>>,
}

#[derive(Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignPcLaptopRequest {
    /// Bundle to assign; `null` or absent unassigns.
    pub pc_laptop_id: Option<Uuid>,
}

#[derive(Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignAssetsRequest {
    /// Replaces the employee's current asset list, in this order.
    pub asset_ids: Vec<Uuid>,
}

#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub employee_id: Option<String>,
    /// Assigned bundle, resolved. `null` if none is assigned or it was deleted.
    pub pc_laptop_id: Option<PcLaptopResponse>,
    /// Directly assigned assets, resolved, in assignment order.
    pub assigned_assets: Vec<AssetResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<EmployeeDetails> for EmployeeResponse {
    fn from(d: EmployeeDetails) -> Self {
        let e = d.employee;
        Self {
            id: e.id,
            name: e.name,
            email: e.email,
            phone: e.phone,
            position: e.position,
            department: e.department,
            employee_id: e.employee_id,
            pc_laptop_id: d.pc_laptop.map(PcLaptopResponse::from),
            assigned_assets: d.assigned_assets.into_iter().map(AssetResponse::from).collect(),
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

impl TryFrom<CreateEmployeeRequest> for NewEmployee {
    type Error = AppError;

    fn try_from(req: CreateEmployeeRequest) -> Result<Self, Self::Error> {
        let (Some(name), Some(email)) = (req.name, req.email) else {
            return Err(AppError::Validation("Name and email are required".into()));
        };

        Ok(NewEmployee {
            name,
            email,
            phone: req.phone,
            position: req.position,
            department: req.department,
            employee_id: req.employee_id,
            pc_laptop_id: req.pc_laptop_id,
            assigned_assets: req.assigned_assets.unwrap_or_default(),
        })
    }
}

impl From<UpdateEmployeeRequest> for EmployeeChanges {
    fn from(req: UpdateEmployeeRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            phone: req.phone,
            position: req.position,
            department: req.department,
            employee_id: req.employee_id,
            pc_laptop_id: req.pc_laptop_id,
            assigned_assets: req.assigned_assets,
        }
    }
}
