//! The weave compiler
//!
//! Weave source is a flat list of statements, one per line, each a call
//! to a named builtin: `add_title("Welcome")`, `set_background("#fafafa")`.
//! Compilation runs the statements against an accumulating [`Context`]
//! and joins the result into one self-contained HTML document.
//!
//! The pipeline:
//! 1. Statement interpretation ([`statements`]): split the source into
//!    lines, parse each call with the permissive value parser
//!    ([`values`]), and dispatch to the builtin registry
//!    ([`registry`], [`builtins`]) or the component table.
//! 2. Library loading ([`libraries`]): `import_library("name")`
//!    resolves a `.wl` file and registers its component blocks for use
//!    as calls, expanded by [`expand`].
//! 3. Assembly ([`assemble`]): the four streams (head, markup, CSS,
//!    JS) are joined into the fixed page shell.
//!
//! [`Compiler`] ties the stages together; [`error`] defines the
//! failure taxonomy and the beginner-facing report.

pub mod assemble;
pub mod builtins;
pub mod compiler;
pub mod context;
pub mod error;
pub mod expand;
pub mod libraries;
pub mod registry;
pub mod statements;
pub mod values;

pub use compiler::Compiler;
pub use context::Context;
pub use error::{format_error, BuiltinError, CompileError};
pub use expand::expand_component;
pub use registry::{Args, BuiltinFn, BuiltinRegistry};
pub use values::{parse_arguments, parse_value, Value};
