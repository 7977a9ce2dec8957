pub mod janitor;
pub mod reqwest;
pub mod time;
