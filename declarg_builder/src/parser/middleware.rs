use std::env;
use std::path::Path;

use crate::api::{Cli, FromParsedArgs};
use crate::constant::*;
use crate::parser::interface::{ConsoleInterface, UserInterface};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Whether the Cli tokens ask for help.
///
/// True when `--help` or `-h` appears (before any `--`), or when the first token is `help`.
///
/// ### Example
/// ```
/// # use declarg_builder as declarg;
/// use declarg::wants_help;
///
/// assert!(wants_help(&["foo.txt", "--help"]));
/// assert!(wants_help(&["help"]));
/// assert!(!wants_help(&["foo.txt", "--", "-h"]));
/// ```
pub fn wants_help(tokens: &[&str]) -> bool {
    if tokens.first() == Some(&HELP_COMMAND) {
        return true;
    }

    let long = format!("--{HELP_NAME}");
    let short = format!("-{HELP_SHORT}");

    tokens
        .iter()
        .take_while(|token| **token != FLAG_TERMINATOR)
        .any(|token| *token == long || *token == short)
}

impl<T: FromParsedArgs> Cli<T> {
    /// Run the Cli against the input tokens, presenting help and errors on the console.
    ///
    /// If the tokens ask for help (see [`wants_help`]), the help text is printed and this returns `Err(0)`.
    /// If parsing fails, the error is printed followed by the help text, and this returns `Err(1)`.
    /// The help text is wrapped to the width of the terminal, when there is one.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::{string, Definition, Parameter, Value};
    ///
    /// let cli = Definition::new()
    ///     .add(Parameter::positional(string(), "input"))
    ///     .build()
    ///     .unwrap();
    ///
    /// let args = cli.run("program", &["foo.txt"]).unwrap();
    /// assert_eq!(args.get("input"), Some(&Value::from("foo.txt")));
    /// assert_eq!(cli.run("program", &["--help"]).unwrap_err(), 0);
    /// assert_eq!(cli.run("program", &[]).unwrap_err(), 1);
    /// ```
    pub fn run(&self, program: &str, tokens: &[&str]) -> Result<T, i32> {
        self.run_with_interface(program, tokens, &ConsoleInterface::default())
    }

    pub(crate) fn run_with_interface(
        &self,
        program: &str,
        tokens: &[&str],
        user_interface: &(impl UserInterface + ?Sized),
    ) -> Result<T, i32> {
        if wants_help(tokens) {
            user_interface.print(self.help_for(program, user_interface));
            return Err(0);
        }

        match self.parse(tokens) {
            Ok(value) => Ok(value),
            Err(error) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Parse failed: {error:?}.");
                }

                user_interface.print_error(&error);
                user_interface.print(String::default());
                user_interface.print(self.help_for(program, user_interface));
                Err(1)
            }
        }
    }

    fn help_for(&self, program: &str, user_interface: &(impl UserInterface + ?Sized)) -> String {
        match user_interface.width() {
            Some(width) => self.help_text_wrapped(Some(program), width),
            None => self.help_text(Some(program)),
        }
    }

    /// Run the Cli against the process arguments ([`env::args`]).
    ///
    /// The program name is taken from the first process argument.
    /// On help, exits with code `0`; on a parse failure, exits with code `1` (via [`std::process::exit`]).
    pub fn parse_env(&self) -> T {
        let mut arguments = env::args();
        let program = arguments
            .next()
            .as_deref()
            .and_then(|path| Path::new(path).file_name())
            .and_then(|name| name.to_str())
            .map(str::to_string)
            .unwrap_or_else(|| UNNAMED_SCRIPT.to_string());
        let command_input: Vec<String> = arguments.collect();

        match self.run(
            &program,
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(value) => value,
            Err(exit_code) => {
                std::process::exit(exit_code);
            }
        }
    }
}
