pub mod asset;
pub mod employee;
pub mod health;
pub mod pc_laptop;
