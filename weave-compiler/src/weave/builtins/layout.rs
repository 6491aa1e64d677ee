//! Layout containers, cards and navigation
//!
//! Most of these emit a class-scoped stylesheet fragment alongside
//! their markup, so calling one twice with the default class simply
//! repeats the same rules.

use crate::weave::context::Context;
use crate::weave::error::BuiltinError;
use crate::weave::registry::Args;
use crate::weave::values::Value;

/// Create a centered content container.
pub fn create_container(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let content = args.string_or(0, "content", "");
    let css_class = args.string_or(1, "css_class", "container");
    let center_css = if args.flag_or(2, "centered", true) {
        "margin: 0 auto;"
    } else {
        ""
    };
    ctx.push_css(format!(
        ".{} {{ max-width: 1200px; padding: 20px; {} }}",
        css_class, center_css
    ));
    ctx.push_html(format!("<div class=\"{}\">{}</div>", css_class, content));
    Ok(())
}

/// Create a section.
pub fn create_section(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let content = args.string_or(0, "content", "");
    let css_class = args.string_or(1, "css_class", "section");
    ctx.push_html(format!("<section class=\"{}\">{}</section>", css_class, content));
    Ok(())
}

/// Create a flex row.
pub fn create_row(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let content = args.string_or(0, "content", "");
    let css_class = args.string_or(1, "css_class", "row");
    ctx.push_css(format!(".{} {{ display: flex; flex-wrap: wrap; }}", css_class));
    ctx.push_html(format!("<div class=\"{}\">{}</div>", css_class, content));
    Ok(())
}

/// Create a column, fixed-width or flexible.
pub fn create_column(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let content = args.string_or(0, "content", "");
    let width_css = args
        .truthy(1, "width")
        .map(|width| format!("flex: 0 0 {width}; max-width: {width};", width = width))
        .unwrap_or_else(|| "flex: 1;".to_string());
    let css_class = args.string_or(2, "css_class", "column");
    ctx.push_css(format!(
        ".{} {{ {} padding: 10px; box-sizing: border-box; }}",
        css_class, width_css
    ));
    ctx.push_html(format!("<div class=\"{}\">{}</div>", css_class, content));
    Ok(())
}

/// Open a grid container. Close it with `end_grid`.
pub fn create_grid(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let columns = args.string_or(0, "columns", "3");
    let gap = args.string_or(1, "gap", "20px");
    let css_class = args.string_or(2, "css_class", "grid");
    ctx.push_css(format!(
        ".{} {{ display: grid; grid-template-columns: repeat({}, 1fr); gap: {}; }}",
        css_class, columns, gap
    ));
    ctx.push_html(format!("<div class=\"{}\">", css_class));
    Ok(())
}

/// Close a grid container.
pub fn end_grid(ctx: &mut Context, _args: &Args) -> Result<(), BuiltinError> {
    ctx.push_html("</div>");
    Ok(())
}

/// Open a flexbox container. Close it with `end_flex_container`.
pub fn create_flex_container(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let direction = args.string_or(0, "direction", "row");
    let justify = args.string_or(1, "justify", "flex-start");
    let align = args.string_or(2, "align", "stretch");
    let css_class = args.string_or(3, "css_class", "flex-container");
    ctx.push_css(format!(
        ".{} {{ display: flex; flex-direction: {}; justify-content: {}; align-items: {}; }}",
        css_class, direction, justify, align
    ));
    ctx.push_html(format!("<div class=\"{}\">", css_class));
    Ok(())
}

/// Close a flexbox container.
pub fn end_flex_container(ctx: &mut Context, _args: &Args) -> Result<(), BuiltinError> {
    ctx.push_html("</div>");
    Ok(())
}

/// Add vertical space.
pub fn add_spacer(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let height = args.string_or(0, "height", "20px");
    ctx.push_html(format!("<div style=\"height: {};\"></div>", height));
    Ok(())
}

/// Create a card, optionally titled and shadowed.
pub fn create_card(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let content = args.string_or(1, "content", "");
    let css_class = args.string_or(2, "css_class", "card");
    let shadow_css = if args.flag_or(3, "shadow", true) {
        "box-shadow: 0 4px 6px rgba(0,0,0,0.1);"
    } else {
        ""
    };
    ctx.push_css(format!(
        ".{} {{ background: white; border-radius: 8px; padding: 20px; margin: 10px; {} }}",
        css_class, shadow_css
    ));
    let mut card_html = format!("<div class=\"{}\">", css_class);
    if let Some(title) = args.truthy(0, "title") {
        card_html.push_str(&format!("<h3>{}</h3>", title));
    }
    card_html.push_str(&format!("{}</div>", content));
    ctx.push_html(card_html);
    Ok(())
}

fn bordered_box(
    ctx: &mut Context,
    args: &Args,
    default_class: &str,
    background: &str,
    border: &str,
) -> Result<(), BuiltinError> {
    let content = args.string(0, "content")?;
    let css_class = args.string_or(1, "css_class", default_class);
    ctx.push_css(format!(
        ".{} {{ background: {}; border-left: 4px solid {}; padding: 15px; margin: 10px 0; border-radius: 4px; }}",
        css_class, background, border
    ));
    ctx.push_html(format!("<div class=\"{}\">{}</div>", css_class, content));
    Ok(())
}

/// Create an info box.
pub fn create_info_box(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    bordered_box(ctx, args, "info-box", "#e3f2fd", "#2196F3")
}

/// Create a warning box.
pub fn create_warning_box(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    bordered_box(ctx, args, "warning-box", "#fff3cd", "#ffc107")
}

/// Create a success box.
pub fn create_success_box(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    bordered_box(ctx, args, "success-box", "#d4edda", "#28a745")
}

/// Create an error box.
pub fn create_error_box(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    bordered_box(ctx, args, "error-box", "#f8d7da", "#dc3545")
}

/// Create a panel with a header bar.
pub fn create_panel(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let title = args.string(0, "title")?;
    let content = args.string(1, "content")?;
    let css_class = args.string_or(2, "css_class", "panel");
    ctx.push_css(format!(
        ".{css} {{ border: 1px solid #ddd; border-radius: 4px; margin: 10px 0; }} .{css}-header {{ background: #f5f5f5; padding: 10px 15px; border-bottom: 1px solid #ddd; font-weight: bold; }} .{css}-body {{ padding: 15px; }}",
        css = css_class
    ));
    ctx.push_html(format!(
        "<div class=\"{css}\"><div class=\"{css}-header\">{}</div><div class=\"{css}-body\">{}</div></div>",
        title, content, css = css_class
    ));
    Ok(())
}

/// Create a navigation bar.
///
/// Links may be plain values or maps with `url` and `text` keys.
pub fn create_navbar(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let links = args.items_or_empty(1, "links")?;
    let css_class = args.string_or(2, "css_class", "navbar");
    ctx.push_css(format!(
        ".{css} {{ background: #333; padding: 15px; display: flex; align-items: center; }} .{css} a {{ color: white; text-decoration: none; padding: 0 15px; }} .{css} a:hover {{ color: #ddd; }} .{css}-brand {{ font-weight: bold; margin-right: auto; }}",
        css = css_class
    ));
    let mut navbar_html = format!("<nav class=\"{}\">", css_class);
    if let Some(brand) = args.truthy(0, "brand") {
        navbar_html.push_str(&format!(
            "<span class=\"{}-brand\">{}</span>",
            css_class, brand
        ));
    }
    for link in &links {
        match link {
            Value::Map(_) => {
                let url = link
                    .entry("url")
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "#".to_string());
                let text = link
                    .entry("text")
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "Link".to_string());
                navbar_html.push_str(&format!("<a href=\"{}\">{}</a>", url, text));
            }
            other => navbar_html.push_str(&format!("<a href=\"#\">{}</a>", other)),
        }
    }
    navbar_html.push_str("</nav>");
    ctx.push_html(navbar_html);
    Ok(())
}

/// Create a vertical menu.
pub fn create_menu(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let items = args.items(0, "items")?;
    let css_class = args.string_or(1, "css_class", "menu");
    ctx.push_css(format!(
        ".{css} {{ list-style: none; padding: 0; margin: 0; }} .{css} li {{ padding: 10px; border-bottom: 1px solid #ddd; }} .{css} li:hover {{ background: #f5f5f5; cursor: pointer; }}",
        css = css_class
    ));
    let mut menu_html = format!("<ul class=\"{}\">", css_class);
    for item in &items {
        menu_html.push_str(&format!("<li>{}</li>", item));
    }
    menu_html.push_str("</ul>");
    ctx.push_html(menu_html);
    Ok(())
}

/// Create breadcrumbs navigation.
pub fn create_breadcrumbs(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let items = args.items(0, "items")?;
    let css_class = args.string_or(1, "css_class", "breadcrumbs");
    ctx.push_css(format!(
        ".{css} {{ display: flex; list-style: none; padding: 10px 0; }} .{css} li::after {{ content: \" / \"; margin: 0 8px; }} .{css} li:last-child::after {{ content: \"\"; }}",
        css = css_class
    ));
    let mut breadcrumb_html = format!("<ul class=\"{}\">", css_class);
    for item in &items {
        breadcrumb_html.push_str(&format!("<li>{}</li>", item));
    }
    breadcrumb_html.push_str("</ul>");
    ctx.push_html(breadcrumb_html);
    Ok(())
}

/// Create a tab strip. The first tab starts active.
pub fn create_tabs(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let tabs = args.items(0, "tabs")?;
    let css_class = args.string_or(1, "css_class", "tabs");
    ctx.push_css(format!(
        ".{css} {{ display: flex; border-bottom: 2px solid #ddd; }} .{css} button {{ background: none; border: none; padding: 10px 20px; cursor: pointer; }} .{css} button.active {{ border-bottom: 2px solid #007bff; color: #007bff; }}",
        css = css_class
    ));
    let mut tabs_html = format!("<div class=\"{}\">", css_class);
    for (i, tab) in tabs.iter().enumerate() {
        let active = if i == 0 { " class=\"active\"" } else { "" };
        tabs_html.push_str(&format!("<button{}>{}</button>", active, tab));
    }
    tabs_html.push_str("</div>");
    ctx.push_html(tabs_html);
    Ok(())
}

/// Create an accordion, one markup fragment per item.
///
/// Items may be plain values or maps with `header` and `body` keys.
pub fn create_accordion(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let items = args.items(0, "items")?;
    let css_class = args.string_or(1, "css_class", "accordion");
    ctx.push_css(format!(
        ".{css}-item {{ border: 1px solid #ddd; margin: 5px 0; }} .{css}-header {{ background: #f5f5f5; padding: 15px; cursor: pointer; font-weight: bold; }} .{css}-header:hover {{ background: #e0e0e0; }} .{css}-body {{ padding: 15px; display: none; }} .{css}-body.active {{ display: block; }}",
        css = css_class
    ));
    for item in &items {
        let (header, body) = match item {
            Value::Map(_) => (
                item.entry("header")
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "Accordion Item".to_string()),
                item.entry("body")
                    .map(|v| v.to_string())
                    .unwrap_or_default(),
            ),
            other => (other.to_string(), other.to_string()),
        };
        ctx.push_html(format!(
            "<div class=\"{css}-item\"><div class=\"{css}-header\">{}</div><div class=\"{css}-body\">{}</div></div>",
            header, body, css = css_class
        ));
    }
    Ok(())
}
