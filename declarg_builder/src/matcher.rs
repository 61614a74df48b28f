mod alias;
mod detect;
mod model;
mod tokens;

pub(crate) use alias::*;
pub(crate) use detect::*;
pub(crate) use model::*;
pub(crate) use tokens::*;
