//! `declarg` is a declarative command line schema for small scripts.
//!
//! A script declares its positionals and flags once, as a [`Definition`].
//! From that single declaration `declarg` derives:
//! * a validator/coercer for the raw Cli tokens,
//! * a typed result ([`ParsedArgs`], or any struct deriving [`FromParsedArgs`](./derive/derive.FromParsedArgs.html)),
//! * the help text.
//!
//! `declarg` is deliberately small.
//! There is no general grammar: no nested sub-commands, no repeated positional capture beyond the trailing catch-all `_`, and no shell completions.
//!
//! # Usage
//! via the [derive Api](./derive/index.html):
//! ```no_run
#![doc = include_str!("../demos/demo_derived.rs")]
//! ```
//! or with the untyped result (this page):
//! ```no_run
#![doc = include_str!("../demos/demo_builder.rs")]
//! ```
//!
//! Both of these generate the same Cli program:
//! ```console
//! $ counter -h
//! counter <input> [options]
//!
//! Count the lines of an input file.
//!
//! Positionals:
//!   input - The file to count.
//!
//! Options:
//!   --count (-c) - Stop after this many lines.
//!   --dry-run - Only print the plan. (default false)
//!
//! Examples:
//!   counter notes.txt --count 10
//!
//! $ counter notes.txt -c 3
//! input: notes.txt, count: Some(3), dry-run: false, rest: ["notes.txt"]
//!
//! $ counter notes.txt --count many
//! Invalid argument 'count': cannot convert 'many' to number.
//!
//! counter <input> [options]
//! ..
//! ```
//!
//! # Fields
//! Each parameter takes a [`FieldDescriptor`], made with one of the field helpers:
//! * [`string`]: a text value.
//! * [`number`]: a numeric value; every number is an `f64`.
//! * [`boolean`]: a switch, which takes no value as a flag (ex: `--verbose`).
//! * [`custom`]: an opaque validator over the raw value.
//!
//! And then refined with modifiers:
//! * [`FieldDescriptor::optional`]: the field may be absent from the result.
//! * [`FieldDescriptor::default`]: the field is filled with the default when absent.
//! * [`FieldDescriptor::coerce`]: the field accepts the other raw shape (ex: `--count` as `1`).
//! * [`FieldDescriptor::refine`]: the validated value must also satisfy a named predicate.
//!
//! A field that is neither optional nor defaulted is required.
//!
//! ```no_run
#![doc = include_str!("../demos/demo_custom.rs")]
//! ```
//!
//! # Cli Semantics
//! `declarg` reads the Cli tokens according to the following rules.
//! * `--name` sets a switch to `true`.
//! For any other field, `--name` takes the next token as its value, unless that token looks like a flag.
//! * `--name=value` takes everything after the first `=` as the value.
//! * `--no-name` sets the switch `name` to `false`.
//! * `-x`, `-x value`, and `-x=value` work like the long form, when `x` is a declared alias or flag.
//! * `-xyz` is a bundle of single character keys; the first value-taking key takes the remainder (ex: `-c3`).
//! * `-` on its own, and negative numbers (ex: `-5`), are positional tokens.
//! * `--` stops flag scanning; every later token is positional.
//! * Repeated flags: the last one wins.
//!
//! Positional tokens fill the declared positionals in order.
//! The full positional sequence is always available as the catch-all `_` (see [`ParsedArgs::rest`]).
//!
//! Aliases are normalized onto their canonical flag.
//! When both an alias and its canonical flag are given, the canonical flag wins.
//!
//! Validation is strict: an undeclared flag is rejected as an `unrecognized key`.
//! Otherwise the positionals are checked, then the flags, each in declaration order, and the first failure is reported.
//!
//! # Help
//! The help text is laid out as follows, omitting any empty section:
//! ```console
//! [prefix] <name> <positional> .. [options]
//!
//! <description>
//!
//! <hint>
//!
//! Positionals:
//!   <positional> - <help>
//!
//! Options:
//!   --<flag> (-<alias>, ..) - <help> (default <value>)
//!
//! Examples:
//!   <example>
//! ```
//!
//! # Features
//! * `tracing_debug`: emit `tracing::debug!` events from the parsing pipeline.
pub mod derive;
pub use declarg_builder::*;
