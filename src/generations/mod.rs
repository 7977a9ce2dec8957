pub mod config;
pub mod controller;
pub mod enums;
pub mod errors;
pub mod models;
pub mod providers;
pub mod service;
