pub mod aggregate;
pub mod fixtures;
