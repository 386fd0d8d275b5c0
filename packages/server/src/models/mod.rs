pub mod asset;
pub mod employee;
pub mod pc_laptop;
pub mod shared;
