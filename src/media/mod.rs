pub mod apis;
pub mod controller;
pub mod errors;
pub mod service;
