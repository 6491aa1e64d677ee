//! # weave-compiler
//!
//! Compiler for the weave page notation: beginner-friendly, one
//! statement per line, compiled to a single self-contained HTML file.
//!
//! ```text
//! set_title("My Page")
//! add_title("Welcome")
//! add_text("Built with weave.")
//! set_background("#fafafa")
//! ```
//!
//! See the [weave] module for the pipeline and entry points; the usual
//! starting point is [`weave::Compiler`].

pub mod weave;
