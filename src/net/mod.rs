//! Network layer: wire types, REST helpers, and identity SDK bindings.

pub mod api;
#[cfg(feature = "hydrate")]
pub mod identity;
pub mod types;
