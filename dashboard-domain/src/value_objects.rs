// Domain value objects
pub mod account_flag;
pub mod identifiers;

pub use account_flag::*;
pub use identifiers::*;
