//! Traits which, typically, may be imported without concern: `use declarg::prelude::*`.

// Needs to be imported in order to implement a custom typed result.
pub use crate::api::{FromParsedArgs, FromValue};
