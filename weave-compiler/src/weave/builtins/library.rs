//! Library and component primitives
//!
//! `import_library` here only records the import; resolving and
//! loading the `.wl` file is the interpreter's job, which runs before
//! dispatch ever reaches this table. The builtin still exists so that
//! a dynamically assembled call (one the import matcher does not
//! recognize) degrades to a recorded import instead of an unknown
//! function error.

use crate::weave::context::Context;
use crate::weave::error::BuiltinError;
use crate::weave::expand::expand_component;
use crate::weave::registry::Args;

/// Record a library import.
pub fn import_library(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let library_name = args.string(0, "library_name")?;
    ctx.imported_libraries.push(library_name);
    Ok(())
}

/// Define a component inline.
pub fn define_component(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let name = args.string(0, "name")?;
    let html_template = args.string(1, "html_template")?;
    ctx.define_component(name, html_template);
    Ok(())
}

/// Expand a defined component into the markup stream.
///
/// Unknown component names are ignored. When the component name is
/// passed as `name=...`, that argument binds the name and is not used
/// for placeholder expansion.
pub fn use_component(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let name = args.string(0, "name")?;
    let mut kwargs = args.named().to_vec();
    if args.positional().is_empty() {
        kwargs.retain(|(key, _)| key != "name");
    }
    let template = ctx.component(&name).map(str::to_string);
    if let Some(template) = template {
        ctx.push_html(expand_component(&template, &kwargs));
    }
    Ok(())
}
