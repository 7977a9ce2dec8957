pub mod dtos;
pub mod enums;
pub mod models;
