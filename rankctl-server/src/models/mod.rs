//! Request models with validation at construction
//!
//! Transport input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod pagination;
pub mod username;
pub mod validation;

pub use pagination::{Page, PageParams};
pub use username::Username;
pub use validation::ValidationError;
