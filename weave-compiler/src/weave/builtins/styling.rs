//! Page styling, responsive rules and typography
//!
//! These builtins write to the style stream only, never to markup, so
//! they can appear anywhere in a program without changing element
//! order.

use crate::weave::context::Context;
use crate::weave::error::BuiltinError;
use crate::weave::registry::Args;

/// Set page background color.
pub fn set_background(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let color = args.string(0, "color")?;
    ctx.push_css(format!("body {{ background-color: {}; }}", color));
    Ok(())
}

/// Set a background gradient.
pub fn set_background_gradient(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let color1 = args.string(0, "color1")?;
    let color2 = args.string(1, "color2")?;
    let direction = args.string_or(2, "direction", "to bottom");
    ctx.push_css(format!(
        "body {{ background: linear-gradient({}, {}, {}); }}",
        direction, color1, color2
    ));
    Ok(())
}

/// Set the page font.
pub fn set_font(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let family = args.string(0, "family")?;
    let size = args.string_or(1, "size", "16px");
    ctx.push_css(format!(
        "body {{ font-family: {}; font-size: {}; }}",
        family, size
    ));
    Ok(())
}

/// Set the page text color.
pub fn set_text_color(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let color = args.string(0, "color")?;
    ctx.push_css(format!("body {{ color: {}; }}", color));
    Ok(())
}

/// Set the page margin.
pub fn set_page_margin(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let margin = args.string(0, "margin")?;
    ctx.push_css(format!("body {{ margin: {}; }}", margin));
    Ok(())
}

/// Set the page padding.
pub fn set_page_padding(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let padding = args.string(0, "padding")?;
    ctx.push_css(format!("body {{ padding: {}; }}", padding));
    Ok(())
}

/// Append raw CSS.
pub fn add_custom_css(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let css = args.string(0, "css")?;
    ctx.push_css(css);
    Ok(())
}

/// Set a single property on a selector.
pub fn add_style_to_element(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let selector = args.string(0, "selector")?;
    let property_name = args.string(1, "property_name")?;
    let value = args.string(2, "value")?;
    ctx.push_css(format!("{} {{ {}: {}; }}", selector, property_name, value));
    Ok(())
}

/// Add a box shadow.
pub fn add_box_shadow(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let selector = args.string(0, "selector")?;
    let shadow = args.string_or(1, "shadow", "0 4px 6px rgba(0,0,0,0.1)");
    ctx.push_css(format!("{} {{ box-shadow: {}; }}", selector, shadow));
    Ok(())
}

/// Add a text shadow.
pub fn add_text_shadow(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let selector = args.string(0, "selector")?;
    let shadow = args.string_or(1, "shadow", "2px 2px 4px rgba(0,0,0,0.3)");
    ctx.push_css(format!("{} {{ text-shadow: {}; }}", selector, shadow));
    Ok(())
}

/// Add a border.
pub fn add_border(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let selector = args.string(0, "selector")?;
    let width = args.string_or(1, "width", "1px");
    let style = args.string_or(2, "style", "solid");
    let color = args.string_or(3, "color", "#ddd");
    ctx.push_css(format!(
        "{} {{ border: {} {} {}; }}",
        selector, width, style, color
    ));
    Ok(())
}

/// Round the corners of an element.
pub fn add_border_radius(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let selector = args.string(0, "selector")?;
    let radius = args.string_or(1, "radius", "4px");
    ctx.push_css(format!("{} {{ border-radius: {}; }}", selector, radius));
    Ok(())
}

/// Set element opacity.
pub fn set_opacity(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let selector = args.string(0, "selector")?;
    let opacity = args.string_or(1, "opacity", "1.0");
    ctx.push_css(format!("{} {{ opacity: {}; }}", selector, opacity));
    Ok(())
}

/// Apply a CSS transform.
pub fn add_transform(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let selector = args.string(0, "selector")?;
    let transform = args.string(1, "transform")?;
    ctx.push_css(format!("{} {{ transform: {}; }}", selector, transform));
    Ok(())
}

/// Apply a CSS transition.
pub fn add_transition(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let selector = args.string(0, "selector")?;
    let property_name = args.string_or(1, "property_name", "all");
    let duration = args.string_or(2, "duration", "0.3s");
    let timing = args.string_or(3, "timing", "ease");
    ctx.push_css(format!(
        "{} {{ transition: {} {} {}; }}",
        selector, property_name, duration, timing
    ));
    Ok(())
}

/// Collapse containers and rows below a breakpoint.
pub fn set_mobile_breakpoint(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let max_width = args.string_or(0, "max_width", "768px");
    ctx.push_css(format!(
        "@media (max-width: {}) {{ .container {{ padding: 10px; }} .row {{ flex-direction: column; }} }}",
        max_width
    ));
    Ok(())
}

/// Use different font sizes on mobile and desktop.
pub fn add_responsive_text(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let selector = args.string(0, "selector")?;
    let mobile_size = args.string_or(1, "mobile_size", "14px");
    let desktop_size = args.string_or(2, "desktop_size", "16px");
    ctx.push_css(format!(
        "{selector} {{ font-size: {desktop}; }} @media (max-width: 768px) {{ {selector} {{ font-size: {mobile}; }} }}",
        selector = selector,
        desktop = desktop_size,
        mobile = mobile_size
    ));
    Ok(())
}

/// Hide an element on mobile screens.
pub fn hide_on_mobile(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let selector = args.string(0, "selector")?;
    ctx.push_css(format!(
        "@media (max-width: 768px) {{ {} {{ display: none; }} }}",
        selector
    ));
    Ok(())
}

/// Hide an element on desktop screens.
pub fn hide_on_desktop(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let selector = args.string(0, "selector")?;
    ctx.push_css(format!(
        "@media (min-width: 769px) {{ {} {{ display: none; }} }}",
        selector
    ));
    Ok(())
}

/// Enlarge the first letter of a block of text.
pub fn add_dropcap(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let selector = args.string(0, "selector")?;
    ctx.push_css(format!(
        "{}::first-letter {{ float: left; font-size: 75px; line-height: 60px; padding: 8px 8px 0 0; font-weight: bold; color: #667eea; }}",
        selector
    ));
    Ok(())
}

/// Paint text with a gradient.
pub fn add_text_gradient(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let selector = args.string(0, "selector")?;
    let color1 = args.string_or(1, "color1", "#667eea");
    let color2 = args.string_or(2, "color2", "#764ba2");
    ctx.push_css(format!(
        "{} {{ background: linear-gradient(90deg, {}, {}); -webkit-background-clip: text; -webkit-text-fill-color: transparent; background-clip: text; }}",
        selector, color1, color2
    ));
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
    fn test_set_background() {
        let ctx = call("set_background", "\"lightblue\"");
        assert_eq!(ctx.css, vec!["body { background-color: lightblue; }"]);
        assert!(ctx.html.is_empty());
    }

    #[test]
    fn test_set_background_gradient_defaults_direction() {
        let ctx = call("set_background_gradient", "\"red\", \"blue\"");
        assert_eq!(
            ctx.css,
            vec!["body { background: linear-gradient(to bottom, red, blue); }"]
        );
    }

    #[test]
    fn test_set_font() {
        let ctx = call("set_font", "\"Arial\", size=\"18px\"");
        assert_eq!(ctx.css, vec!["body { font-family: Arial; font-size: 18px; }"]);
    }

    #[test]
    fn test_add_style_to_element() {
        let ctx = call("add_style_to_element", "\".hero\", \"color\", \"white\"");
        assert_eq!(ctx.css, vec![".hero { color: white; }"]);
    }

    #[test]
    fn test_set_opacity_unquoted_number() {
        let ctx = call("set_opacity", "\".faded\", 0.5");
        assert_eq!(ctx.css, vec![".faded { opacity: 0.5; }"]);
    }

    #[test]
    fn test_add_responsive_text() {
        let ctx = call("add_responsive_text", "\"p\"");
        assert_eq!(
            ctx.css,
            vec!["p { font-size: 16px; } @media (max-width: 768px) { p { font-size: 14px; } }"]
        );
    }

    #[test]
    fn test_hide_on_mobile() {
        let ctx = call("hide_on_mobile", "\".sidebar\"");
        assert_eq!(
            ctx.css,
            vec!["@media (max-width: 768px) { .sidebar { display: none; } }"]
        );
    }

    #[test]
    fn test_add_text_gradient_defaults() {
        let ctx = call("add_text_gradient", "\"h1\"");
        assert_eq!(
            ctx.css,
            vec![concat!(
                "h1 { background: linear-gradient(90deg, #667eea, #764ba2); ",
                "-webkit-background-clip: text; -webkit-text-fill-color: transparent; ",
                "background-clip: text; }"
            )]
        );
    }
}
