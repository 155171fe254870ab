//! Domain models shared by the data, service and bot layers.
//!
//! Entity models from the `entity` crate are converted into these types at the repository
//! boundary, where malformed rows are rejected.

pub mod api;
pub mod character;
pub mod trend;
