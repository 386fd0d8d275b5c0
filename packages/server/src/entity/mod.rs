pub mod employee;
pub mod employee_asset;
pub mod pc_laptop;
pub mod system_asset;
