//! Document head entries and icons

use crate::weave::context::Context;
use crate::weave::error::BuiltinError;
use crate::weave::registry::Args;

/// Set the page title.
pub fn set_title(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let title = args.string(0, "title")?;
    ctx.push_head(format!("<title>{}</title>", title));
    Ok(())
}

/// Add a favicon link.
pub fn add_favicon(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let href = args.string(0, "href")?;
    ctx.push_head(format!("<link rel=\"icon\" href=\"{}\">", href));
    Ok(())
}

/// Add a meta tag.
pub fn add_meta(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let name = args.string(0, "name")?;
    let content = args.string(1, "content")?;
    ctx.push_head(format!(
        "<meta name=\"{}\" content=\"{}\">",
        name, content
    ));
    Ok(())
}

/// Link an external stylesheet.
pub fn add_external_css(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let href = args.string(0, "href")?;
    ctx.push_head(format!("<link rel=\"stylesheet\" href=\"{}\">", href));
    Ok(())
}

/// Load an external script.
pub fn add_external_js(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let src = args.string(0, "src")?;
    ctx.push_head(format!("<script src=\"{}\"></script>", src));
    Ok(())
}

/// Load a Google Font.
pub fn add_google_font(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let font_name = args.string(0, "font_name")?;
    let font_url = font_name.replace(' ', "+");
    ctx.push_head(format!(
        "<link href=\"https://fonts.googleapis.com/css2?family={}&display=swap\" rel=\"stylesheet\">",
        font_url
    ));
    Ok(())
}

/// Add an icon sized with an inline style.
pub fn add_icon(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let icon_class = args.string(0, "icon_class")?;
    let size = args.string_or(1, "size", "24px");
    ctx.push_html(format!(
        "<i class=\"{}\" style=\"font-size: {};\"></i>",
        icon_class, size
    ));
    Ok(())
}

/// Add an emoji (or any raw text) to the markup stream.
pub fn add_emoji(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let emoji = args.string(0, "emoji")?;
    ctx.push_html(emoji);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weave::registry::BuiltinRegistry;
    use crate::weave::values::parse_arguments;

    fn call(name: &str, input: &str) -> Context {
        let registry = BuiltinRegistry::with_defaults();
        let mut ctx = Context::new();
        let (positional, named) = parse_arguments(input);
        let func = registry.get(name).unwrap();
        let args = Args::new(name, positional, named);
        func(&mut ctx, &args).unwrap();
        ctx
    }

    #[test]
    fn test_set_title_goes_to_head() {
        let ctx = call("set_title", "\"My Page\"");
        assert_eq!(ctx.head, vec!["<title>My Page</title>"]);
        assert!(ctx.html.is_empty());
    }

    #[test]
    fn test_add_meta() {
        let ctx = call("add_meta", "\"description\", \"A site\"");
        assert_eq!(
            ctx.head,
            vec!["<meta name=\"description\" content=\"A site\">"]
        );
    }

    #[test]
    fn test_add_google_font_encodes_spaces() {
        let ctx = call("add_google_font", "\"Open Sans\"");
        assert_eq!(
            ctx.head,
            vec!["<link href=\"https://fonts.googleapis.com/css2?family=Open+Sans&display=swap\" rel=\"stylesheet\">"]
        );
    }

    #[test]
    fn test_add_icon_goes_to_markup() {
        let ctx = call("add_icon", "\"fa fa-star\"");
        assert_eq!(
            ctx.html,
            vec!["<i class=\"fa fa-star\" style=\"font-size: 24px;\"></i>"]
        );
    }

    #[test]
    fn test_add_emoji() {
        let ctx = call("add_emoji", "\"🎉\"");
        assert_eq!(ctx.html, vec!["🎉"]);
    }
}
