pub mod entry;
pub mod entry_kind;
pub mod location;
pub mod session;

pub use entry::TimeEntry;
pub use entry_kind::EntryKind;
pub use location::{GeoPoint, Location};
pub use session::Session;
