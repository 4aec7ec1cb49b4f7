//! Property domain entities.

pub mod guide;
pub mod model;
pub mod status;

pub use guide::{PropertyGuide, PropertyGuideUpdate};
pub use model::{CreateProperty, Property};
pub use status::PropertyStatus;
