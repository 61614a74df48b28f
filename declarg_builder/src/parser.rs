mod base;
mod interface;
mod middleware;
mod printer;

pub use base::{DefinitionError, ValidationError};
pub(crate) use base::Parser;
pub(crate) use interface::*;
pub use middleware::*;
pub(crate) use printer::*;
