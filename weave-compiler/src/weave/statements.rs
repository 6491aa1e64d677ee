//! Statement interpreter
//!
//! A weave program is a flat list of statements, one per line. Each
//! line is either blank, a `#` comment, an import, or a call of the
//! form `name(arguments)`. Calls dispatch to the builtin registry
//! first and to the component table second; a line that is none of
//! these shapes is skipped without complaint, so stray prose in a file
//! does not stop the build. The first failing line aborts the run,
//! wrapped with its 1-indexed line number.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::weave::context::Context;
use crate::weave::error::CompileError;
use crate::weave::expand::expand_component;
use crate::weave::libraries;
use crate::weave::registry::{Args, BuiltinRegistry};
use crate::weave::values::parse_arguments;

static IMPORT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^import_library\(["'](.+?)["']\)"#).expect("import pattern"));

static CALL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\w+)\((.*)\)").expect("call pattern"));

/// Run every statement of `source` against the context.
pub fn run_source(
    source: &str,
    ctx: &mut Context,
    registry: &BuiltinRegistry,
) -> Result<(), CompileError> {
    for (index, raw_line) in source.split('\n').enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        execute_line(line, ctx, registry).map_err(|err| err.at_line(index + 1))?;
    }
    Ok(())
}

fn execute_line(
    line: &str,
    ctx: &mut Context,
    registry: &BuiltinRegistry,
) -> Result<(), CompileError> {
    // An import line is exclusively an import; it never falls through
    // to call dispatch. Only quoted literal names qualify, so a
    // dynamically shaped import still reaches the builtin below.
    if line.starts_with("import_library(") {
        if let Some(caps) = IMPORT_PATTERN.captures(line) {
            return libraries::import_library(&caps[1], ctx);
        }
    }

    let Some(caps) = CALL_PATTERN.captures(line) else {
        // Not a call shape at all; ignore the line.
        return Ok(());
    };
    let name = caps[1].to_string();
    let input = caps[2].to_string();

    if let Some(builtin) = registry.get(&name) {
        let (positional, named) = parse_arguments(&input);
        let args = Args::new(name, positional, named);
        builtin(ctx, &args)?;
    } else if ctx.has_component(&name) {
        // Components take named values only; positional text has no
        // placeholder to land in.
        let (_, named) = parse_arguments(&input);
        let template = ctx
            .component(&name)
            .map(str::to_string)
            .unwrap_or_default();
        ctx.push_html(expand_component(&template, &named));
    } else {
        return Err(CompileError::UnknownIdentifier { name });
    }
    Ok(())
}
