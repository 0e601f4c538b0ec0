pub mod indicators;
pub mod snapshot;

pub use indicators::{overview_cards, OverviewInput};
pub use snapshot::{school_snapshot, SchoolSnapshot};
