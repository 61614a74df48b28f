//! Derive Api for typed `declarg` results.
//!
//! ### Getting Started
//! Instrument a struct `S` with `#[derive(FromParsedArgs)]`, then re-type the Cli with [`Cli::typed`](../struct.Cli.html#method.typed).
//! Parsing then produces an `S` directly, instead of the untyped [`ParsedArgs`](../struct.ParsedArgs.html).
//!
//! ```no_run
#![doc = include_str!("../demos/demo_derived.rs")]
//! ```
//!
//! The derive only concerns the *result*: the Cli itself (fields, aliases, help) is still declared with the builder Api.
//! Each struct field reads the parsed value of the same name, converted via [`FromValue`](../prelude/trait.FromValue.html).
//!
//! ### Field Types
//! ```console
//! Type              | Reads
//! -----------------------------------------------------------------
//! String            | a string field
//! bool              | a boolean field
//! f64, f32          | a number field
//! i8 .. usize       | a number field, which must be a whole number in range
//! Option<T>         | an optional field (None when absent)
//! Vec<String>       | the catch-all `_` (see `#[declarg(rest)]`)
//! Value             | any field, untyped
//! ```
//!
//! A field that is absent from the result is an error (`required value is missing`), unless its type is `Option<T>` or `Vec<String>`.
//!
//! ### Field Configuration
//! * `#[declarg(rename = "..")]` reads the parsed value under a different name.
//! This is necessary for Cli names that are not Rust identifiers (ex: `dry-run`).
//! * `#[declarg(rest)]` reads the catch-all `_`: every positional token, in Cli order.
//!
//! These may not be combined on the same field, and no two fields may read the same name.
//!
//! ```
//! use declarg::{boolean, derive::*, string, Definition, Parameter};
//!
//! #[derive(Debug, PartialEq, FromParsedArgs)]
//! struct Parameters {
//!     target: String,
//!     #[declarg(rename = "dry-run")]
//!     dry_run: bool,
//!     #[declarg(rest)]
//!     rest: Vec<String>,
//! }
//!
//! let cli = Definition::new()
//!     .add(Parameter::positional(string(), "target"))
//!     .add(Parameter::flag(boolean().default(false), "dry-run"))
//!     .build()
//!     .unwrap()
//!     .typed::<Parameters>();
//!
//! assert_eq!(
//!     cli.parse(&["deploy", "--dry-run", "extra"]).unwrap(),
//!     Parameters {
//!         target: "deploy".to_string(),
//!         dry_run: true,
//!         rest: vec!["deploy".to_string(), "extra".to_string()],
//!     }
//! );
//! ```
pub use declarg_derive::*;
