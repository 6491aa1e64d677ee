//! Animations, hover effects, scroll behavior and dark mode
//!
//! The multi-line script fragments keep their surrounding blank lines
//! and indentation so the assembled script block reads the same as the
//! inline ones.

use crate::weave::context::Context;
use crate::weave::error::BuiltinError;
use crate::weave::registry::Args;

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Fade an element in.
pub fn add_fade_in(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let selector = args.string(0, "selector")?;
    let duration = args.string_or(1, "duration", "1s");
    ctx.push_css(format!(
        "{} {{ animation: fadeIn {}; }} @keyframes fadeIn {{ from {{ opacity: 0; }} to {{ opacity: 1; }} }}",
        selector, duration
    ));
    Ok(())
}

/// Slide an element in from one edge.
pub fn add_slide_in(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let selector = args.string(0, "selector")?;
    let direction = args.string_or(1, "direction", "left");
    let duration = args.string_or(2, "duration", "0.5s");
    let transform_from = match direction.as_str() {
        "left" => "translateX(-100%)",
        "right" => "translateX(100%)",
        "top" => "translateY(-100%)",
        "bottom" => "translateY(100%)",
        _ => "translateX(-100%)",
    };
    let name = capitalize(&direction);
    ctx.push_css(format!(
        "{} {{ animation: slideIn{name} {}; }} @keyframes slideIn{name} {{ from {{ transform: {}; }} to {{ transform: translateX(0); }} }}",
        selector,
        duration,
        transform_from,
        name = name
    ));
    Ok(())
}

/// Bounce an element.
pub fn add_bounce(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let selector = args.string(0, "selector")?;
    let duration = args.string_or(1, "duration", "1s");
    ctx.push_css(format!(
        "{} {{ animation: bounce {}; }} @keyframes bounce {{ 0%, 20%, 50%, 80%, 100% {{ transform: translateY(0); }} 40% {{ transform: translateY(-30px); }} 60% {{ transform: translateY(-15px); }} }}",
        selector, duration
    ));
    Ok(())
}

/// Rotate an element continuously.
pub fn add_rotate(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let selector = args.string(0, "selector")?;
    let degrees = args.string_or(1, "degrees", "360");
    let duration = args.string_or(2, "duration", "2s");
    ctx.push_css(format!(
        "{} {{ animation: rotate {} infinite linear; }} @keyframes rotate {{ from {{ transform: rotate(0deg); }} to {{ transform: rotate({}deg); }} }}",
        selector, duration, degrees
    ));
    Ok(())
}

/// Scale an element on hover.
pub fn add_scale(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let selector = args.string(0, "selector")?;
    let scale = args.string_or(1, "scale", "1.1");
    let duration = args.string_or(2, "duration", "0.3s");
    ctx.push_css(format!(
        "{selector} {{ transition: transform {}; }} {selector}:hover {{ transform: scale({}); }}",
        duration,
        scale,
        selector = selector
    ));
    Ok(())
}

/// Shake an element.
pub fn add_shake(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let selector = args.string(0, "selector")?;
    let duration = args.string_or(1, "duration", "0.5s");
    ctx.push_css(format!(
        "{} {{ animation: shake {}; }} @keyframes shake {{ 0%, 100% {{ transform: translateX(0); }} 10%, 30%, 50%, 70%, 90% {{ transform: translateX(-10px); }} 20%, 40%, 60%, 80% {{ transform: translateX(10px); }} }}",
        selector, duration
    ));
    Ok(())
}

/// Pulse an element.
pub fn add_pulse(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let selector = args.string(0, "selector")?;
    let duration = args.string_or(1, "duration", "1s");
    ctx.push_css(format!(
        "{} {{ animation: pulse {} infinite; }} @keyframes pulse {{ 0% {{ transform: scale(1); }} 50% {{ transform: scale(1.05); }} 100% {{ transform: scale(1); }} }}",
        selector, duration
    ));
    Ok(())
}

/// Transition one property on hover.
pub fn add_hover_effect(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let selector = args.string(0, "selector")?;
    let property_name = args.string(1, "property_name")?;
    let value = args.string(2, "value")?;
    let duration = args.string_or(3, "duration", "0.3s");
    ctx.push_css(format!(
        "{selector} {{ transition: {property} {}; }} {selector}:hover {{ {property}: {}; }}",
        duration,
        value,
        selector = selector,
        property = property_name
    ));
    Ok(())
}

/// Change text color on hover.
pub fn add_hover_color(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let selector = args.string(0, "selector")?;
    let color = args.string(1, "color")?;
    ctx.push_css(format!(
        "{selector} {{ transition: color 0.3s; }} {selector}:hover {{ color: {}; }}",
        color,
        selector = selector
    ));
    Ok(())
}

/// Change background color on hover.
pub fn add_hover_background(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let selector = args.string(0, "selector")?;
    let color = args.string(1, "color")?;
    ctx.push_css(format!(
        "{selector} {{ transition: background-color 0.3s; }} {selector}:hover {{ background-color: {}; }}",
        color,
        selector = selector
    ));
    Ok(())
}

/// Run a script snippet when an element is clicked.
pub fn add_click_effect(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let element_id = args.string(0, "element_id")?;
    let effect = args.string(1, "effect")?;
    ctx.push_js(format!(
        "document.getElementById(\"{}\").addEventListener(\"click\", function() {{ {} }});",
        element_id, effect
    ));
    Ok(())
}

/// Move an element slower than the page scroll.
pub fn add_parallax(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let selector = args.string(0, "selector")?;
    let speed = args.string_or(1, "speed", "0.5");
    ctx.push_js(format!(
        r#"
    window.addEventListener('scroll', function() {{
        const elem = document.querySelector('{}');
        if (elem) {{
            const scrolled = window.pageYOffset;
            elem.style.transform = 'translateY(' + (scrolled * {}) + 'px)';
        }}
    }});
    "#,
        selector, speed
    ));
    Ok(())
}

/// Reveal elements as they scroll into view.
pub fn add_scroll_reveal(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let selector = args.string(0, "selector")?;
    ctx.push_css(format!(
        "{selector} {{ opacity: 0; transform: translateY(50px); transition: opacity 0.6s, transform 0.6s; }} {selector}.revealed {{ opacity: 1; transform: translateY(0); }}",
        selector = selector
    ));
    ctx.push_js(format!(
        r#"
    window.addEventListener('scroll', function() {{
        document.querySelectorAll('{}').forEach(elem => {{
            const rect = elem.getBoundingClientRect();
            if (rect.top < window.innerHeight * 0.8) {{
                elem.classList.add('revealed');
            }}
        }});
    }});
    "#,
        selector
    ));
    Ok(())
}

/// Keep a header pinned to the top while scrolling.
pub fn add_sticky_header(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let selector = args.string(0, "selector")?;
    ctx.push_css(format!(
        "{} {{ position: sticky; top: 0; z-index: 100; background: white; }}",
        selector
    ));
    Ok(())
}

/// Switch the page into dark mode immediately.
pub fn enable_dark_mode(ctx: &mut Context, _args: &Args) -> Result<(), BuiltinError> {
    ctx.push_css("body.dark-mode { background: #1a1a1a; color: #f0f0f0; } body.dark-mode a { color: #64b5f6; }");
    ctx.push_js("document.body.classList.add(\"dark-mode\");");
    Ok(())
}

/// Add a button that toggles dark mode.
pub fn add_dark_mode_toggle(ctx: &mut Context, _args: &Args) -> Result<(), BuiltinError> {
    ctx.push_html("<button id=\"dark-mode-toggle\">Toggle Dark Mode</button>");
    ctx.push_js(
        r#"
    document.getElementById('dark-mode-toggle').addEventListener('click', function() {
        document.body.classList.toggle('dark-mode');
    });
    "#,
    );
    ctx.push_css("body.dark-mode { background: #1a1a1a; color: #f0f0f0; transition: background 0.3s, color 0.3s; }");
    Ok(())
}

/// Type text into an element character by character.
pub fn add_typing_effect(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let selector = args.string(0, "selector")?;
    let text = args.string(1, "text")?;
    let speed = args.string_or(2, "speed", "100");
    ctx.push_js(format!(
        r#"
    const element = document.querySelector('{}');
    const text = '{}';
    let i = 0;
    element.innerHTML = '';
    function typeWriter() {{
        if (i < text.length) {{
            element.innerHTML += text.charAt(i);
            i++;
            setTimeout(typeWriter, {});
        }}
    }}
    typeWriter();
    "#,
        selector, text, speed
    ));
    Ok(())
}

/// Fade elements in the first time they become visible.
pub fn add_fade_in_on_scroll(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let selector = args.string(0, "selector")?;
    ctx.push_css(format!(
        "{selector} {{ opacity: 0; transform: translateY(30px); transition: opacity 0.6s, transform 0.6s; }} {selector}.visible {{ opacity: 1; transform: translateY(0); }}",
        selector = selector
    ));
    ctx.push_js(format!(
        r#"
    const observer = new IntersectionObserver(entries => {{
        entries.forEach(entry => {{
            if (entry.isIntersecting) {{
                entry.target.classList.add('visible');
            }}
        }});
    }});
    document.querySelectorAll('{}').forEach(el => observer.observe(el));
    "#,
        selector
    ));
    Ok(())
}

/// Float an element up and down.
pub fn add_float_animation(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let selector = args.string(0, "selector")?;
    let duration = args.string_or(1, "duration", "3s");
    ctx.push_css(format!(
        "{} {{ animation: float {} ease-in-out infinite; }} @keyframes float {{ 0%, 100% {{ transform: translateY(0px); }} 50% {{ transform: translateY(-20px); }} }}",
        selector, duration
    ));
    Ok(())
}

/// Give an element a pulsing glow.
pub fn add_glow_effect(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let selector = args.string(0, "selector")?;
    let color = args.string_or(1, "color", "#667eea");
    ctx.push_css(format!(
        "{} {{ animation: glow 2s ease-in-out infinite alternate; }} @keyframes glow {{ from {{ box-shadow: 0 0 10px {color}, 0 0 20px {color}, 0 0 30px {color}; }} to {{ box-shadow: 0 0 20px {color}, 0 0 30px {color}, 0 0 40px {color}; }} }}",
        selector,
        color = color
    ));
    Ok(())
}

/// Pin an element at a given offset while scrolling.
pub fn make_sticky(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let selector = args.string(0, "selector")?;
    let top = args.string_or(1, "top", "0px");
    ctx.push_css(format!(
        "{} {{ position: sticky; top: {}; z-index: 100; }}",
        selector, top
    ));
    Ok(())
}

/// Add a floating call-to-action button in a page corner.
pub fn add_sticky_cta(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let text = args.string(0, "text")?;
    let link = args.string_or(1, "link", "#");
    let position = args.string_or(2, "position", "bottom-right");
    let pos_css = match position.as_str() {
        "bottom-left" => "bottom: 20px; left: 20px;",
        "top-right" => "top: 20px; right: 20px;",
        "top-left" => "top: 20px; left: 20px;",
        _ => "bottom: 20px; right: 20px;",
    };
    ctx.push_css(format!(
        ".sticky-cta {{ position: fixed; {} z-index: 1000; padding: 15px 30px; background: linear-gradient(135deg, #667eea, #764ba2); color: white; text-decoration: none; border-radius: 50px; box-shadow: 0 4px 15px rgba(102, 126, 234, 0.4); transition: transform 0.3s; }} .sticky-cta:hover {{ transform: scale(1.05); }}",
        pos_css
    ));
    ctx.push_html(format!("<a href=\"{}\" class=\"sticky-cta\">{}</a>", link, text));
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
    fn test_add_fade_in() {
        let ctx = call("add_fade_in", "\".box\", \"2s\"");
        assert_eq!(
            ctx.css,
            vec![".box { animation: fadeIn 2s; } @keyframes fadeIn { from { opacity: 0; } to { opacity: 1; } }"]
        );
    }

    #[test]
    fn test_add_slide_in_capitalizes_direction() {
        let ctx = call("add_slide_in", "\".box\", direction=\"top\"");
        assert_eq!(
            ctx.css,
            vec![concat!(
                ".box { animation: slideInTop 0.5s; } @keyframes slideInTop ",
                "{ from { transform: translateY(-100%); } to { transform: translateX(0); } }"
            )]
        );
    }

    #[test]
    fn test_add_slide_in_unknown_direction_slides_left() {
        let ctx = call("add_slide_in", "\".box\", direction=\"diagonal\"");
        assert!(ctx.css[0].contains("slideInDiagonal"));
        assert!(ctx.css[0].contains("translateX(-100%)"));
    }

    #[test]
    fn test_add_hover_effect() {
        let ctx = call("add_hover_effect", "\"button\", \"color\", \"red\"");
        assert_eq!(
            ctx.css,
            vec!["button { transition: color 0.3s; } button:hover { color: red; }"]
        );
    }

    #[test]
    fn test_add_click_effect() {
        let ctx = call("add_click_effect", "\"btn\", \"alert('hi');\"");
        assert_eq!(
            ctx.js,
            vec!["document.getElementById(\"btn\").addEventListener(\"click\", function() { alert('hi'); });"]
        );
    }

    #[test]
    fn test_add_parallax_script_shape() {
        let ctx = call("add_parallax", "\".bg\", speed=0.3");
        assert!(ctx.js[0].starts_with("\n    window.addEventListener('scroll'"));
        assert!(ctx.js[0].contains("(scrolled * 0.3)"));
        assert!(ctx.js[0].ends_with("});\n    "));
    }

    #[test]
    fn test_enable_dark_mode() {
        let ctx = call("enable_dark_mode", "");
        assert_eq!(ctx.js, vec!["document.body.classList.add(\"dark-mode\");"]);
    }

    #[test]
    fn test_add_typing_effect_embeds_text() {
        let ctx = call("add_typing_effect", "\"#intro\", \"Hello!\"");
        assert!(ctx.js[0].contains("const text = 'Hello!';"));
        assert!(ctx.js[0].contains("setTimeout(typeWriter, 100);"));
    }

    #[test]
    fn test_add_sticky_cta_position_lookup() {
        let ctx = call("add_sticky_cta", "\"Buy\", \"/buy\", position=\"top-left\"");
        assert!(ctx.css[0].contains("position: fixed; top: 20px; left: 20px;"));
        assert_eq!(
            ctx.html,
            vec!["<a href=\"/buy\" class=\"sticky-cta\">Buy</a>"]
        );
    }

    #[test]
    fn test_add_sticky_cta_unknown_position_defaults() {
        let ctx = call("add_sticky_cta", "\"Buy\", position=\"center\"");
        assert!(ctx.css[0].contains("bottom: 20px; right: 20px;"));
    }

    #[test]
    fn test_capitalize_lowercases_rest() {
        assert_eq!(capitalize("tOP"), "Top");
        assert_eq!(capitalize(""), "");
    }
}
