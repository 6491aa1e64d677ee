//! Modals, alerts, progress indicators and page furniture

use crate::weave::context::Context;
use crate::weave::error::BuiltinError;
use crate::weave::registry::Args;
use crate::weave::values::{format_float, Value};

/// Create a hidden modal dialog.
pub fn create_modal(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let modal_id = args.string(0, "modal_id")?;
    let title = args.string(1, "title")?;
    let content = args.string(2, "content")?;
    let css_class = args.string_or(3, "css_class", "modal");
    ctx.push_css(format!(
        ".{css} {{ display: none; position: fixed; z-index: 1000; left: 0; top: 0; width: 100%; height: 100%; background: rgba(0,0,0,0.5); }} .{css}-content {{ background: white; margin: 10% auto; padding: 20px; border-radius: 8px; width: 80%; max-width: 500px; position: relative; }} .{css}-close {{ position: absolute; right: 15px; top: 10px; font-size: 28px; cursor: pointer; }}",
        css = css_class
    ));
    ctx.push_html(format!(
        "<div id=\"{id}\" class=\"{css}\"><div class=\"{css}-content\"><span class=\"{css}-close\">&times;</span><h2>{title}</h2><p>{content}</p></div></div>",
        id = modal_id, title = title, content = content, css = css_class
    ));
    Ok(())
}

/// Add a colored alert message.
pub fn add_alert(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let message = args.string(0, "message")?;
    let alert_type = args.string_or(1, "alert_type", "info");
    let color = match alert_type.as_str() {
        "info" => "#2196F3",
        "success" => "#4CAF50",
        "warning" => "#ff9800",
        "error" => "#f44336",
        _ => "#2196F3",
    };
    ctx.push_css(format!(
        ".alert-{} {{ background: {}; color: white; padding: 15px; margin: 10px 0; border-radius: 4px; }}",
        alert_type, color
    ));
    ctx.push_html(format!(
        "<div class=\"alert-{}\">{}</div>",
        alert_type, message
    ));
    Ok(())
}

/// Add a toast notification that removes itself.
pub fn add_toast(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let message = args.string(0, "message")?;
    let duration = args.string_or(1, "duration", "3000");
    ctx.push_css(".toast { position: fixed; bottom: 20px; right: 20px; background: #333; color: white; padding: 15px 20px; border-radius: 4px; z-index: 1000; }");
    ctx.push_html(format!("<div class=\"toast\">{}</div>", message));
    ctx.push_js(format!(
        "setTimeout(() => {{ document.querySelector(\".toast\").remove(); }}, {});",
        duration
    ));
    Ok(())
}

/// Add a progress bar.
pub fn add_progress_bar(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let value = args.number_or(0, "value", 50.0)?;
    let max_val = args.number_or(1, "max_val", 100.0)?;
    let css_class = args.string_or(2, "css_class", "progress");
    if max_val == 0.0 {
        return Err(args.error("division by zero"));
    }
    let percentage = (value / max_val) * 100.0;
    ctx.push_css(format!(
        ".{css} {{ width: 100%; background: #f0f0f0; border-radius: 4px; overflow: hidden; }} .{css}-bar {{ height: 20px; background: #007bff; transition: width 0.3s; }}",
        css = css_class
    ));
    ctx.push_html(format!(
        "<div class=\"{css}\"><div class=\"{css}-bar\" style=\"width: {}%;\"></div></div>",
        format_float(percentage),
        css = css_class
    ));
    Ok(())
}

/// Add a loading spinner.
pub fn add_spinner(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let size = args.string_or(0, "size", "40px");
    let color = args.string_or(1, "color", "#007bff");
    ctx.push_css(format!(
        ".spinner {{ border: 4px solid #f3f3f3; border-top: 4px solid {}; border-radius: 50%; width: {size}; height: {size}; animation: spin 1s linear infinite; }} @keyframes spin {{ 0% {{ transform: rotate(0deg); }} 100% {{ transform: rotate(360deg); }} }}",
        color,
        size = size
    ));
    ctx.push_html("<div class=\"spinner\"></div>");
    Ok(())
}

/// Add a shimmering skeleton loader.
pub fn add_skeleton_loader(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let width = args.string_or(0, "width", "100%");
    let height = args.string_or(1, "height", "20px");
    ctx.push_css(format!(
        ".skeleton {{ background: linear-gradient(90deg, #f0f0f0 25%, #e0e0e0 50%, #f0f0f0 75%); background-size: 200% 100%; animation: loading 1.5s infinite; width: {}; height: {}; border-radius: 4px; }} @keyframes loading {{ 0% {{ background-position: 200% 0; }} 100% {{ background-position: -200% 0; }} }}",
        width, height
    ));
    ctx.push_html("<div class=\"skeleton\"></div>");
    Ok(())
}

/// Add a badge.
pub fn add_badge(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let text = args.string(0, "text")?;
    let color = args.string_or(1, "color", "#007bff");
    ctx.push_css(format!(
        ".badge {{ display: inline-block; padding: 4px 8px; background: {}; color: white; border-radius: 12px; font-size: 12px; }}",
        color
    ));
    ctx.push_html(format!("<span class=\"badge\">{}</span>", text));
    Ok(())
}

/// Add a pill badge.
pub fn add_pill(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let text = args.string(0, "text")?;
    let color = args.string_or(1, "color", "#6c757d");
    ctx.push_css(format!(
        ".pill {{ display: inline-block; padding: 6px 16px; background: {}; color: white; border-radius: 20px; font-size: 14px; }}",
        color
    ));
    ctx.push_html(format!("<span class=\"pill\">{}</span>", text));
    Ok(())
}

/// Wrap text with a hover tooltip.
pub fn add_tooltip(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let text = args.string(0, "text")?;
    let tooltip_text = args.string(1, "tooltip_text")?;
    ctx.push_css(".tooltip { position: relative; display: inline-block; } .tooltip .tooltiptext { visibility: hidden; background-color: #555; color: #fff; text-align: center; border-radius: 6px; padding: 5px 10px; position: absolute; z-index: 1; bottom: 125%; left: 50%; transform: translateX(-50%); opacity: 0; transition: opacity 0.3s; } .tooltip:hover .tooltiptext { visibility: visible; opacity: 1; }");
    ctx.push_html(format!(
        "<span class=\"tooltip\">{}<span class=\"tooltiptext\">{}</span></span>",
        text, tooltip_text
    ));
    Ok(())
}

/// Create an image carousel, one markup fragment per image.
pub fn create_carousel(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let images = args.items(0, "images")?;
    let css_class = args.string_or(1, "css_class", "carousel");
    ctx.push_css(format!(
        ".{css} {{ position: relative; width: 100%; overflow: hidden; }} .{css}-item {{ display: none; width: 100%; }} .{css}-item.active {{ display: block; }}",
        css = css_class
    ));
    for (i, img) in images.iter().enumerate() {
        let active = if i == 0 { " active" } else { "" };
        ctx.push_html(format!(
            "<div class=\"{}-item{}\"><img src=\"{}\" style=\"width: 100%;\"></div>",
            css_class, active, img
        ));
    }
    Ok(())
}

/// Create a pricing card.
pub fn create_pricing_card(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let title = args.string(0, "title")?;
    let price = args.string(1, "price")?;
    let features = args.items(2, "features")?;
    let button_text = args.string_or(3, "button_text", "Choose Plan");
    ctx.push_css(".pricing-card { border: 1px solid #ddd; border-radius: 8px; padding: 30px; text-align: center; margin: 10px; } .pricing-card h3 { margin-bottom: 20px; } .pricing-card .price { font-size: 36px; font-weight: bold; margin: 20px 0; } .pricing-card ul { list-style: none; padding: 0; margin: 20px 0; } .pricing-card li { padding: 10px 0; border-bottom: 1px solid #f0f0f0; }");
    let mut card_html = format!(
        "<div class=\"pricing-card\"><h3>{}</h3><div class=\"price\">{}</div><ul>",
        title, price
    );
    for feature in &features {
        card_html.push_str(&format!("<li>{}</li>", feature));
    }
    card_html.push_str(&format!("</ul><button>{}</button></div>", button_text));
    ctx.push_html(card_html);
    Ok(())
}

/// Create a timeline, one markup fragment per event.
///
/// Events may be plain values or maps with `title` and `description`.
pub fn create_timeline(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let events = args.items(0, "events")?;
    let css_class = args.string_or(1, "css_class", "timeline");
    ctx.push_css(format!(
        ".{css} {{ position: relative; padding: 20px 0; }} .{css}::before {{ content: \"\"; position: absolute; left: 50%; width: 2px; background: #ddd; top: 0; bottom: 0; }} .{css}-item {{ position: relative; margin: 20px 0; }} .{css}-content {{ background: white; padding: 20px; border-radius: 8px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); width: 45%; }} .{css}-item:nth-child(odd) .{css}-content {{ margin-left: 55%; }} .{css}-item:nth-child(even) .{css}-content {{ margin-right: 55%; }}",
        css = css_class
    ));
    for event in &events {
        let content = match event {
            Value::Map(_) => format!(
                "<strong>{}</strong><p>{}</p>",
                event.entry("title").map(|v| v.to_string()).unwrap_or_default(),
                event
                    .entry("description")
                    .map(|v| v.to_string())
                    .unwrap_or_default()
            ),
            other => other.to_string(),
        };
        ctx.push_html(format!(
            "<div class=\"{css}-item\"><div class=\"{css}-content\">{}</div></div>",
            content,
            css = css_class
        ));
    }
    Ok(())
}

/// Create a hover dropdown menu.
///
/// Items may be plain values or maps with `url` and `text` keys.
pub fn create_dropdown_menu(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let trigger_text = args.string(0, "trigger_text")?;
    let items = args.items(1, "items")?;
    let css_class = args.string_or(2, "css_class", "dropdown");
    ctx.push_css(format!(
        ".{css} {{ position: relative; display: inline-block; }} .{css}-content {{ display: none; position: absolute; background: white; min-width: 160px; box-shadow: 0 8px 16px rgba(0,0,0,0.2); z-index: 1; }} .{css}-content a {{ color: black; padding: 12px 16px; text-decoration: none; display: block; }} .{css}-content a:hover {{ background: #f1f1f1; }} .{css}:hover .{css}-content {{ display: block; }}",
        css = css_class
    ));
    let mut dropdown_html = format!(
        "<div class=\"{css}\"><button>{}</button><div class=\"{css}-content\">",
        trigger_text,
        css = css_class
    );
    for item in &items {
        match item {
            Value::Map(_) => {
                let url = item
                    .entry("url")
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "#".to_string());
                let text = item
                    .entry("text")
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "Link".to_string());
                dropdown_html.push_str(&format!("<a href=\"{}\">{}</a>", url, text));
            }
            other => dropdown_html.push_str(&format!("<a href=\"#\">{}</a>", other)),
        }
    }
    dropdown_html.push_str("</div></div>");
    ctx.push_html(dropdown_html);
    Ok(())
}

/// Create a fixed sidebar on the left or right.
pub fn create_sidebar(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let content = args.string(0, "content")?;
    let position = args.string_or(1, "position", "left");
    let width = args.string_or(2, "width", "250px");
    let css_class = args.string_or(3, "css_class", "sidebar");
    let position_css = if position == "left" || position == "right" {
        format!("{}: 0;", position)
    } else {
        "left: 0;".to_string()
    };
    ctx.push_css(format!(
        ".{} {{ position: fixed; {} top: 0; width: {}; height: 100%; background: #f8f9fa; padding: 20px; overflow-y: auto; box-shadow: 2px 0 5px rgba(0,0,0,0.1); }}",
        css_class, position_css, width
    ));
    ctx.push_html(format!("<aside class=\"{}\">{}</aside>", css_class, content));
    Ok(())
}

/// Create a footer.
pub fn create_footer(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let content = args.string(0, "content")?;
    let css_class = args.string_or(1, "css_class", "footer");
    ctx.push_css(format!(
        ".{} {{ background: #333; color: white; padding: 30px 20px; margin-top: 50px; text-align: center; }}",
        css_class
    ));
    ctx.push_html(format!("<footer class=\"{}\">{}</footer>", css_class, content));
    Ok(())
}

/// Create a hero section with a gradient or image background.
pub fn create_hero_section(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let title = args.string(0, "title")?;
    let subtitle = args.string(1, "subtitle")?;
    let bg_css = args
        .truthy(2, "background_image")
        .map(|image| format!("background-image: url({});", image))
        .unwrap_or_else(|| "background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);".to_string());
    let css_class = args.string_or(3, "css_class", "hero");
    ctx.push_css(format!(
        ".{css} {{ {} background-size: cover; background-position: center; color: white; padding: 100px 20px; text-align: center; }} .{css} h1 {{ font-size: 48px; margin-bottom: 20px; }} .{css} p {{ font-size: 20px; }}",
        bg_css,
        css = css_class
    ));
    ctx.push_html(format!(
        "<div class=\"{}\"><h1>{}</h1><p>{}</p></div>",
        css_class, title, subtitle
    ));
    Ok(())
}

/// Display a row of color swatches.
pub fn create_color_palette(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let colors = args.items(0, "colors")?;
    let css_class = args.string_or(1, "css_class", "color-palette");
    ctx.push_css(format!(
        ".{css} {{ display: flex; gap: 10px; margin: 20px 0; }} .{css}-color {{ width: 100px; height: 100px; border-radius: 8px; display: flex; align-items: flex-end; justify-content: center; padding-bottom: 10px; color: white; font-size: 12px; font-family: monospace; }}",
        css = css_class
    ));
    let mut palette_html = format!("<div class=\"{}\">", css_class);
    for color in &colors {
        palette_html.push_str(&format!(
            "<div class=\"{}-color\" style=\"background: {color};\">{color}</div>",
            css_class,
            color = color
        ));
    }
    palette_html.push_str("</div>");
    ctx.push_html(palette_html);
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

    fn call_err(name: &str, input: &str) -> BuiltinError {
        let registry = BuiltinRegistry::with_defaults();
        let mut ctx = Context::new();
        let (positional, named) = parse_arguments(input);
        let func = registry.get(name).unwrap();
        let args = Args::new(name, positional, named);
        func(&mut ctx, &args).unwrap_err()
    }

    #[test]
    fn test_add_alert_known_type() {
        let ctx = call("add_alert", "\"Saved!\", alert_type=\"success\"");
        assert_eq!(
            ctx.css,
            vec![".alert-success { background: #4CAF50; color: white; padding: 15px; margin: 10px 0; border-radius: 4px; }"]
        );
        assert_eq!(ctx.html, vec!["<div class=\"alert-success\">Saved!</div>"]);
    }

    #[test]
    fn test_add_alert_unknown_type_uses_info_color() {
        let ctx = call("add_alert", "\"Hm\", alert_type=\"mystery\"");
        assert!(ctx.css[0].starts_with(".alert-mystery { background: #2196F3;"));
    }

    #[test]
    fn test_add_progress_bar_default_is_half() {
        let ctx = call("add_progress_bar", "");
        assert_eq!(
            ctx.html,
            vec!["<div class=\"progress\"><div class=\"progress-bar\" style=\"width: 50.0%;\"></div></div>"]
        );
    }

    #[test]
    fn test_add_progress_bar_fractional_percentage() {
        let ctx = call("add_progress_bar", "1, 3");
        assert_eq!(
            ctx.html,
            vec![format!(
                "<div class=\"progress\"><div class=\"progress-bar\" style=\"width: {}%;\"></div></div>",
                1.0 / 3.0 * 100.0
            )]
        );
    }

    #[test]
    fn test_add_progress_bar_zero_max_fails() {
        let err = call_err("add_progress_bar", "10, 0");
        assert_eq!(err.to_string(), "add_progress_bar() division by zero");
    }

    #[test]
    fn test_add_toast_emits_all_three_streams() {
        let ctx = call("add_toast", "\"Done\"");
        assert_eq!(ctx.html, vec!["<div class=\"toast\">Done</div>"]);
        assert_eq!(
            ctx.js,
            vec!["setTimeout(() => { document.querySelector(\".toast\").remove(); }, 3000);"]
        );
        assert_eq!(ctx.css.len(), 1);
    }

    #[test]
    fn test_create_carousel_first_image_active() {
        let ctx = call("create_carousel", "[\"a.jpg\", \"b.jpg\"]");
        assert_eq!(
            ctx.html,
            vec![
                "<div class=\"carousel-item active\"><img src=\"a.jpg\" style=\"width: 100%;\"></div>",
                "<div class=\"carousel-item\"><img src=\"b.jpg\" style=\"width: 100%;\"></div>",
            ]
        );
    }

    #[test]
    fn test_create_timeline_map_event() {
        let ctx = call("create_timeline", "[{title: \"Launch\", description: \"Day one\"}]");
        assert_eq!(
            ctx.html,
            vec![concat!(
                "<div class=\"timeline-item\"><div class=\"timeline-content\">",
                "<strong>Launch</strong><p>Day one</p></div></div>"
            )]
        );
    }

    #[test]
    fn test_create_sidebar_invalid_position_falls_back_left() {
        let ctx = call("create_sidebar", "\"Nav\", position=\"middle\"");
        assert!(ctx.css[0].contains("position: fixed; left: 0; top: 0;"));
    }

    #[test]
    fn test_create_hero_section_image_background() {
        let ctx = call("create_hero_section", "\"Hi\", \"There\", \"bg.jpg\"");
        assert!(ctx.css[0].starts_with(".hero { background-image: url(bg.jpg);"));
        assert_eq!(
            ctx.html,
            vec!["<div class=\"hero\"><h1>Hi</h1><p>There</p></div>"]
        );
    }

    #[test]
    fn test_create_color_palette() {
        let ctx = call("create_color_palette", "[\"#fff\", \"#000\"]");
        assert_eq!(
            ctx.html,
            vec![concat!(
                "<div class=\"color-palette\">",
                "<div class=\"color-palette-color\" style=\"background: #fff;\">#fff</div>",
                "<div class=\"color-palette-color\" style=\"background: #000;\">#000</div>",
                "</div>"
            )]
        );
    }
}
