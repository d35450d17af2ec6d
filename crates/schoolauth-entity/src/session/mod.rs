//! Session domain entities.

pub mod model;
pub mod profile;

pub use model::SessionRecord;
pub use profile::SessionProfile;
