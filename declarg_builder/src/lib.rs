//! Builder module for `declarg`.
//! See the `declarg` crate root for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;
mod schema;

pub use api::*;
pub use model::*;
pub use parser::{wants_help, DefinitionError, ValidationError};
pub use schema::Schema;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
