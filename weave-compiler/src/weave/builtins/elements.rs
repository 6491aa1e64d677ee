//! Basic page elements
//!
//! Headings, paragraphs, links, images, lists and the inline text
//! formatting tags. Everything here appends a single markup fragment.

use crate::weave::context::Context;
use crate::weave::error::BuiltinError;
use crate::weave::registry::Args;
use crate::weave::values::Value;

use super::attr_if;

fn list_markup(items: &[Value], ordered: bool) -> String {
    let tag = if ordered { "ol" } else { "ul" };
    let items_html: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", item))
        .collect();
    format!("<{}>{}</{}>", tag, items_html, tag)
}

/// Add a heading (h1-h6).
pub fn add_title(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let text = args.string(0, "text")?;
    let level = args.string_or(1, "level", "1");
    ctx.push_html(format!("<h{}>{}</h{}>", level, text, level));
    Ok(())
}

/// Add a paragraph of text.
pub fn add_text(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let text = args.string(0, "text")?;
    ctx.push_html(format!("<p>{}</p>", text));
    Ok(())
}

/// Alias for [`add_title`].
pub fn add_heading(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    add_title(ctx, args)
}

/// Alias for [`add_text`].
pub fn add_paragraph(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    add_text(ctx, args)
}

/// Add a div, optionally with a class and an id.
pub fn add_div(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let content = args.string_or(0, "content", "");
    let class_attr = attr_if(args.truthy(1, "css_class"), "class");
    let id_attr = attr_if(args.truthy(2, "element_id"), "id");
    ctx.push_html(format!("<div{}{}>{}</div>", class_attr, id_attr, content));
    Ok(())
}

/// Add an inline span.
pub fn add_span(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let content = args.string_or(0, "content", "");
    let class_attr = attr_if(args.truthy(1, "css_class"), "class");
    ctx.push_html(format!("<span{}>{}</span>", class_attr, content));
    Ok(())
}

/// Add a hyperlink.
pub fn add_link(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let url = args.string(0, "url")?;
    let text = args.string(1, "text")?;
    let target = args.string_or(2, "target", "_self");
    ctx.push_html(format!(
        "<a href=\"{}\" target=\"{}\">{}</a>",
        url, target, text
    ));
    Ok(())
}

/// Add an image.
pub fn add_image(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let src = args.string(0, "src")?;
    let alt = args.string_or(1, "alt", "");
    let width_attr = attr_if(args.truthy(2, "width"), "width");
    let height_attr = attr_if(args.truthy(3, "height"), "height");
    ctx.push_html(format!(
        "<img src=\"{}\" alt=\"{}\"{}{}>",
        src, alt, width_attr, height_attr
    ));
    Ok(())
}

/// Add a list, ordered or unordered.
pub fn add_list(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let items = args.items(0, "items")?;
    let ordered = args.flag_or(1, "ordered", false);
    ctx.push_html(list_markup(&items, ordered));
    Ok(())
}

/// Add a numbered list.
pub fn add_ordered_list(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let items = args.items(0, "items")?;
    ctx.push_html(list_markup(&items, true));
    Ok(())
}

/// Add a bulleted list.
pub fn add_unordered_list(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let items = args.items(0, "items")?;
    ctx.push_html(list_markup(&items, false));
    Ok(())
}

/// Add bold text.
pub fn add_bold(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let text = args.string(0, "text")?;
    ctx.push_html(format!("<strong>{}</strong>", text));
    Ok(())
}

/// Add italic text.
pub fn add_italic(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let text = args.string(0, "text")?;
    ctx.push_html(format!("<em>{}</em>", text));
    Ok(())
}

/// Add underlined text.
pub fn add_underline(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let text = args.string(0, "text")?;
    ctx.push_html(format!("<u>{}</u>", text));
    Ok(())
}

/// Add struck-through text.
pub fn add_strikethrough(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let text = args.string(0, "text")?;
    ctx.push_html(format!("<s>{}</s>", text));
    Ok(())
}

/// Add inline code.
pub fn add_code(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let text = args.string(0, "text")?;
    ctx.push_html(format!("<code>{}</code>", text));
    Ok(())
}

/// Add a preformatted code block.
pub fn add_code_block(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let code = args.string(0, "code")?;
    let lang_class = args
        .truthy(1, "language")
        .map(|language| format!(" class=\"language-{}\"", language))
        .unwrap_or_default();
    ctx.push_html(format!("<pre><code{}>{}</code></pre>", lang_class, code));
    Ok(())
}

/// Add superscript text.
pub fn add_superscript(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let text = args.string(0, "text")?;
    ctx.push_html(format!("<sup>{}</sup>", text));
    Ok(())
}

/// Add subscript text.
pub fn add_subscript(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let text = args.string(0, "text")?;
    ctx.push_html(format!("<sub>{}</sub>", text));
    Ok(())
}

/// Add a block quote.
pub fn add_quote(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let text = args.string(0, "text")?;
    ctx.push_html(format!("<blockquote>{}</blockquote>", text));
    Ok(())
}

/// Add small print.
pub fn add_small(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let text = args.string(0, "text")?;
    ctx.push_html(format!("<small>{}</small>", text));
    Ok(())
}

/// Add highlighted text.
pub fn add_mark(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let text = args.string(0, "text")?;
    ctx.push_html(format!("<mark>{}</mark>", text));
    Ok(())
}

/// Add one or more line breaks.
pub fn add_br(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let count = args.count_or(0, "count", 1)?;
    ctx.push_html("<br>".repeat(count.max(0) as usize));
    Ok(())
}

/// Add a horizontal rule.
pub fn add_hr(ctx: &mut Context, _args: &Args) -> Result<(), BuiltinError> {
    ctx.push_html("<hr>");
    Ok(())
}

/// Add one or more non-breaking spaces.
pub fn add_space(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let count = args.count_or(0, "count", 1)?;
    ctx.push_html("&nbsp;".repeat(count.max(0) as usize));
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
    fn test_add_title_default_level() {
        let ctx = call("add_title", "\"Welcome\"");
        assert_eq!(ctx.html, vec!["<h1>Welcome</h1>"]);
    }

    #[test]
    fn test_add_title_custom_level() {
        let ctx = call("add_title", "\"Sub\", level=3");
        assert_eq!(ctx.html, vec!["<h3>Sub</h3>"]);
    }

    #[test]
    fn test_add_text() {
        let ctx = call("add_text", "\"Hello there\"");
        assert_eq!(ctx.html, vec!["<p>Hello there</p>"]);
    }

    #[test]
    fn test_add_div_without_attributes() {
        let ctx = call("add_div", "\"content\"");
        assert_eq!(ctx.html, vec!["<div>content</div>"]);
    }

    #[test]
    fn test_add_div_with_class_and_id() {
        let ctx = call("add_div", "\"x\", css_class=\"box\", element_id=\"main\"");
        assert_eq!(ctx.html, vec!["<div class=\"box\" id=\"main\">x</div>"]);
    }

    #[test]
    fn test_add_link_default_target() {
        let ctx = call("add_link", "\"https://example.com\", \"Click here\"");
        assert_eq!(
            ctx.html,
            vec!["<a href=\"https://example.com\" target=\"_self\">Click here</a>"]
        );
    }

    #[test]
    fn test_add_link_custom_target() {
        let ctx = call("add_link", "\"/docs\", \"Docs\", target=\"_blank\"");
        assert_eq!(
            ctx.html,
            vec!["<a href=\"/docs\" target=\"_blank\">Docs</a>"]
        );
    }

    #[test]
    fn test_add_span_no_arguments() {
        let ctx = call("add_span", "");
        assert_eq!(ctx.html, vec!["<span></span>"]);
    }

    #[test]
    fn test_add_span_content_keyword() {
        let ctx = call("add_span", "content=\"hi\"");
        assert_eq!(ctx.html, vec!["<span>hi</span>"]);
    }

    #[test]
    fn test_add_span_with_class() {
        let ctx = call("add_span", "\"hi\", css_class=\"tag\"");
        assert_eq!(ctx.html, vec!["<span class=\"tag\">hi</span>"]);
    }

    #[test]
    fn test_add_image_size_attributes_only_when_set() {
        let ctx = call("add_image", "\"cat.png\", alt=\"A cat\", width=300");
        assert_eq!(
            ctx.html,
            vec!["<img src=\"cat.png\" alt=\"A cat\" width=\"300\">"]
        );
    }

    #[test]
    fn test_add_list_unordered() {
        let ctx = call("add_list", "[\"a\", \"b\"]");
        assert_eq!(ctx.html, vec!["<ul><li>a</li><li>b</li></ul>"]);
    }

    #[test]
    fn test_add_ordered_list() {
        let ctx = call("add_ordered_list", "[1, 2, 3]");
        assert_eq!(ctx.html, vec!["<ol><li>1</li><li>2</li><li>3</li></ol>"]);
    }

    #[test]
    fn test_add_list_rejects_scalar() {
        let registry = BuiltinRegistry::with_defaults();
        let mut ctx = Context::new();
        let (positional, named) = parse_arguments("42");
        let func = registry.get("add_list").unwrap();
        let args = Args::new("add_list", positional, named);
        let err = func(&mut ctx, &args).unwrap_err();
        assert!(err.to_string().contains("add_list()"));
        assert!(ctx.html.is_empty());
    }

    #[test]
    fn test_add_quote() {
        let ctx = call("add_quote", "\"Stay curious\"");
        assert_eq!(ctx.html, vec!["<blockquote>Stay curious</blockquote>"]);
    }

    #[test]
    fn test_add_br_repeats() {
        let ctx = call("add_br", "count=3");
        assert_eq!(ctx.html, vec!["<br><br><br>"]);
    }

    #[test]
    fn test_add_code_block_language_class() {
        let ctx = call("add_code_block", "\"let x = 1\", language=\"rust\"");
        assert_eq!(
            ctx.html,
            vec!["<pre><code class=\"language-rust\">let x = 1</code></pre>"]
        );
    }
}
