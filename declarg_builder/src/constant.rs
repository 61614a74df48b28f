// The catch-all field carrying every leftover positional token.
pub(crate) const REST_NAME: &str = "_";
pub(crate) const FLAG_TERMINATOR: &str = "--";
pub(crate) const NEGATION_PREFIX: &str = "no-";

pub(crate) const HELP_NAME: &str = "help";
pub(crate) const HELP_SHORT: char = 'h';
pub(crate) const HELP_COMMAND: &str = "help";

pub(crate) const UNNAMED_SCRIPT: &str = "<script>";
pub(crate) const OPTIONS_PLACEHOLDER: &str = "[options]";
