// Repository Port Traits (Interfaces)
// Define what the domain needs from the data store

pub mod repositories;

pub use repositories::*;
