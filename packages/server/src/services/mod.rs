//! Entity and assignment model.
//!
//! Each service borrows a connection (pool or transaction) and owns the
//! operations of one entity type, including the single place where that
//! entity's references are resolved into embedded records.

mod asset;
mod employee;
mod error;
mod pc_laptop;

pub use asset::{AssetAttributes, AssetChanges, AssetService, NewAsset};
pub use employee::{EmployeeChanges, EmployeeDetails, EmployeeService, NewEmployee};
pub use error::ServiceError;
pub use pc_laptop::{PcLaptopChanges, PcLaptopDetails, PcLaptopService, PcLaptopSlots, Slot};

/// Upper bound on ids bound into one `IN (..)` filter or rows in one multi-row insert.
/// Keeps every statement well under the backend's bind-parameter limit.
pub(crate) const BATCH_SIZE: usize = 500;

/// Treat blank strings as absent.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Tri-state variant of [`non_blank`]: a blank value clears the field.
pub(crate) fn non_blank_change(value: Option<Option<String>>) -> Option<Option<String>> {
    value.map(non_blank)
}
