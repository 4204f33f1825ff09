pub mod listing;
pub mod logic;
pub mod session;

pub use listing::{Cell, Financial, ListingRecord};
pub use session::ListingSession;
