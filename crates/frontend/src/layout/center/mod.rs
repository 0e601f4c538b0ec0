pub mod center;
pub mod tab_strip;

pub use center::Center;
