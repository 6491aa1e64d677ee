//! Media embeds, galleries, charts and form scripting
//!
//! The chart builtins render percentages the way the value formatter
//! does, so whole-number ratios keep a trailing `.0` and a zero or
//! missing maximum degrades to a zero-width bar chart instead of
//! dividing by zero.

use crate::weave::context::Context;
use crate::weave::error::BuiltinError;
use crate::weave::registry::Args;
use crate::weave::values::{format_float, Value};

use super::attr_if;

const PIE_COLORS: [&str; 6] = [
    "#667eea", "#764ba2", "#f093fb", "#4facfe", "#43e97b", "#fa709a",
];

fn numbers_from(args: &Args, key: &str, values: &[Value]) -> Result<Vec<f64>, BuiltinError> {
    values
        .iter()
        .map(|value| {
            value
                .as_number()
                .ok_or_else(|| args.error(format!("'{}' must contain numbers, got {}", key, value)))
        })
        .collect()
}

/// Add a video element.
pub fn add_video(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let src = args.string(0, "src")?;
    let width_attr = attr_if(args.truthy(1, "width"), "width");
    let height_attr = attr_if(args.truthy(2, "height"), "height");
    let controls_attr = if args.flag_or(3, "controls", true) {
        " controls"
    } else {
        ""
    };
    ctx.push_html(format!(
        "<video src=\"{}\"{}{}{}></video>",
        src, width_attr, height_attr, controls_attr
    ));
    Ok(())
}

/// Add an audio element.
pub fn add_audio(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let src = args.string(0, "src")?;
    let controls_attr = if args.flag_or(1, "controls", true) {
        " controls"
    } else {
        ""
    };
    ctx.push_html(format!("<audio src=\"{}\"{}></audio>", src, controls_attr));
    Ok(())
}

/// Add an iframe.
pub fn add_iframe(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let src = args.string(0, "src")?;
    let width = args.string_or(1, "width", "100%");
    let height = args.string_or(2, "height", "400px");
    ctx.push_html(format!(
        "<iframe src=\"{}\" width=\"{}\" height=\"{}\"></iframe>",
        src, width, height
    ));
    Ok(())
}

/// Add embedded content.
pub fn add_embed(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let src = args.string(0, "src")?;
    let width_attr = attr_if(args.truthy(1, "width"), "width");
    let height_attr = attr_if(args.truthy(2, "height"), "height");
    ctx.push_html(format!("<embed src=\"{}\"{}{}>", src, width_attr, height_attr));
    Ok(())
}

/// Create a grid image gallery.
///
/// Images may be plain sources or maps with `src` and `alt` keys.
pub fn create_image_gallery(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let images = args.items(0, "images")?;
    let columns = args.string_or(1, "columns", "3");
    let gap = args.string_or(2, "gap", "10px");
    let css_class = args.string_or(3, "css_class", "gallery");
    ctx.push_css(format!(
        ".{css} {{ display: grid; grid-template-columns: repeat({}, 1fr); gap: {}; }} .{css} img {{ width: 100%; height: 200px; object-fit: cover; border-radius: 8px; cursor: pointer; transition: transform 0.3s; }} .{css} img:hover {{ transform: scale(1.05); }}",
        columns,
        gap,
        css = css_class
    ));
    let mut gallery_html = format!("<div class=\"{}\">", css_class);
    for img in &images {
        let (src, alt) = match img {
            Value::Map(_) => (
                img.entry("src").map(|v| v.to_string()).unwrap_or_default(),
                img.entry("alt").map(|v| v.to_string()).unwrap_or_default(),
            ),
            other => (other.to_string(), String::new()),
        };
        gallery_html.push_str(&format!("<img src=\"{}\" alt=\"{}\">", src, alt));
    }
    gallery_html.push_str("</div>");
    ctx.push_html(gallery_html);
    Ok(())
}

/// Create a masonry-style gallery.
pub fn create_masonry_gallery(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let images = args.items(0, "images")?;
    let css_class = args.string_or(1, "css_class", "masonry");
    ctx.push_css(format!(
        ".{css} {{ column-count: 3; column-gap: 15px; }} .{css} img {{ width: 100%; margin-bottom: 15px; border-radius: 8px; }} @media (max-width: 768px) {{ .{css} {{ column-count: 2; }} }} @media (max-width: 480px) {{ .{css} {{ column-count: 1; }} }}",
        css = css_class
    ));
    let mut gallery_html = format!("<div class=\"{}\">", css_class);
    for img in &images {
        gallery_html.push_str(&format!("<img src=\"{}\">", img));
    }
    gallery_html.push_str("</div>");
    ctx.push_html(gallery_html);
    Ok(())
}

/// Open matching images in a fullscreen lightbox when clicked.
pub fn add_lightbox(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let image_selector = args.string_or(0, "image_selector", ".gallery img");
    ctx.push_css(".lightbox { display: none; position: fixed; z-index: 9999; left: 0; top: 0; width: 100%; height: 100%; background: rgba(0,0,0,0.9); } .lightbox img { position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); max-width: 90%; max-height: 90%; } .lightbox-close { position: absolute; top: 20px; right: 40px; color: white; font-size: 40px; cursor: pointer; }");
    ctx.push_html("<div class=\"lightbox\"><span class=\"lightbox-close\">&times;</span><img src=\"\" alt=\"\"></div>");
    ctx.push_js(format!(
        r#"
    document.querySelectorAll('{}').forEach(img => {{
        img.addEventListener('click', function() {{
            const lightbox = document.querySelector('.lightbox');
            const lightboxImg = lightbox.querySelector('img');
            lightboxImg.src = this.src;
            lightbox.style.display = 'block';
        }});
    }});
    document.querySelector('.lightbox-close').addEventListener('click', function() {{
        document.querySelector('.lightbox').style.display = 'none';
    }});
    document.querySelector('.lightbox').addEventListener('click', function(e) {{
        if (e.target === this) this.style.display = 'none';
    }});
    "#,
        image_selector
    ));
    Ok(())
}

/// Create an image slider with prev/next buttons and dots.
pub fn create_image_slider(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let images = args.items(0, "images")?;
    let auto_play = args.flag_or(1, "auto_play", true);
    let interval = args.string_or(2, "interval", "3000");
    let css_class = args.string_or(3, "css_class", "slider");
    ctx.push_css(format!(
        ".{css} {{ position: relative; width: 100%; max-width: 800px; margin: 0 auto; overflow: hidden; border-radius: 12px; }} .{css}-track {{ display: flex; transition: transform 0.5s ease; }} .{css}-slide {{ min-width: 100%; height: 400px; }} .{css}-slide img {{ width: 100%; height: 100%; object-fit: cover; }} .{css}-btn {{ position: absolute; top: 50%; transform: translateY(-50%); background: rgba(255,255,255,0.8); border: none; padding: 15px; cursor: pointer; font-size: 20px; border-radius: 50%; }} .{css}-prev {{ left: 20px; }} .{css}-next {{ right: 20px; }} .{css}-dots {{ text-align: center; padding: 15px 0; }} .{css}-dot {{ display: inline-block; width: 12px; height: 12px; border-radius: 50%; background: #ddd; margin: 0 5px; cursor: pointer; }} .{css}-dot.active {{ background: #667eea; }}",
        css = css_class
    ));

    let mut slider_html = format!(
        "<div class=\"{css}\"><div class=\"{css}-track\">",
        css = css_class
    );
    for img in &images {
        slider_html.push_str(&format!(
            "<div class=\"{}-slide\"><img src=\"{}\"></div>",
            css_class, img
        ));
    }
    slider_html.push_str(&format!(
        "</div><button class=\"{css}-btn {css}-prev\">&#10094;</button><button class=\"{css}-btn {css}-next\">&#10095;</button><div class=\"{css}-dots\">",
        css = css_class
    ));
    for i in 0..images.len() {
        let active = if i == 0 { " active" } else { "" };
        slider_html.push_str(&format!(
            "<span class=\"{}-dot{}\" data-slide=\"{}\"></span>",
            css_class, active, i
        ));
    }
    slider_html.push_str("</div></div>");
    ctx.push_html(slider_html);

    let auto_play_js = if auto_play {
        format!("setInterval(() => goToSlide(current + 1), {});", interval)
    } else {
        String::new()
    };
    ctx.push_js(format!(
        r#"
    (function() {{
        const slider = document.querySelector('.{css}');
        const track = slider.querySelector('.{css}-track');
        const slides = slider.querySelectorAll('.{css}-slide');
        const prev = slider.querySelector('.{css}-prev');
        const next = slider.querySelector('.{css}-next');
        const dots = slider.querySelectorAll('.{css}-dot');
        let current = 0;

        function goToSlide(n) {{
            current = (n + slides.length) % slides.length;
            track.style.transform = `translateX(-${{current * 100}}%)`;
            dots.forEach((dot, i) => dot.classList.toggle('active', i === current));
        }}

        prev.addEventListener('click', () => goToSlide(current - 1));
        next.addEventListener('click', () => goToSlide(current + 1));
        dots.forEach((dot, i) => dot.addEventListener('click', () => goToSlide(i)));

        {auto_play}
    }})();
    "#,
        css = css_class,
        auto_play = auto_play_js
    ));
    Ok(())
}

/// Create a horizontal bar chart.
pub fn create_bar_chart(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let data = args.items(0, "data")?;
    let labels = args.items(1, "labels")?;
    let css_class = args.string_or(3, "css_class", "bar-chart");
    let numbers = numbers_from(args, "data", &data)?;
    let max_val = if numbers.is_empty() {
        1.0
    } else {
        numbers.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
    };
    ctx.push_css(format!(
        ".{css} {{ max-width: 600px; margin: 20px auto; }} .{css}-title {{ text-align: center; font-size: 20px; font-weight: bold; margin-bottom: 20px; }} .{css}-bar {{ display: flex; align-items: center; margin: 10px 0; }} .{css}-label {{ width: 100px; text-align: right; padding-right: 15px; }} .{css}-bar-fill {{ height: 30px; background: linear-gradient(90deg, #667eea, #764ba2); border-radius: 4px; transition: width 0.5s; }} .{css}-value {{ margin-left: 10px; font-weight: bold; }}",
        css = css_class
    ));

    let mut chart_html = format!("<div class=\"{}\">", css_class);
    if let Some(title) = args.truthy(2, "title") {
        chart_html.push_str(&format!("<div class=\"{}-title\">{}</div>", css_class, title));
    }
    for (label, (value, number)) in labels.iter().zip(data.iter().zip(numbers.iter())) {
        let percentage = if max_val > 0.0 {
            format_float(number / max_val * 100.0)
        } else {
            "0".to_string()
        };
        chart_html.push_str(&format!(
            "<div class=\"{css}-bar\"><div class=\"{css}-label\">{}</div><div class=\"{css}-bar-fill\" style=\"width: {}%;\"></div><div class=\"{css}-value\">{}</div></div>",
            label,
            percentage,
            value,
            css = css_class
        ));
    }
    chart_html.push_str("</div>");
    ctx.push_html(chart_html);
    Ok(())
}

/// Create a pie chart from a CSS conic gradient.
pub fn create_pie_chart(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let data = args.items(0, "data")?;
    let labels = args.items(1, "labels")?;
    let colors: Vec<String> = match args.truthy(2, "colors") {
        Some(value) => value
            .items()
            .ok_or_else(|| args.error(format!("'colors' must be a list, got {}", value)))?
            .iter()
            .map(|v| v.to_string())
            .collect(),
        None => PIE_COLORS.iter().map(|c| c.to_string()).collect(),
    };
    let css_class = args.string_or(3, "css_class", "pie-chart");
    let numbers = numbers_from(args, "data", &data)?;
    let total: f64 = numbers.iter().sum();

    let mut gradient_stops = Vec::new();
    if total > 0.0 {
        let mut cumulative = 0.0;
        for (i, number) in numbers.iter().enumerate() {
            let pct = number / total * 100.0;
            let color = &colors[i % colors.len()];
            // The running lower bound starts as a bare integer zero.
            let lower = if i == 0 {
                "0".to_string()
            } else {
                format_float(cumulative)
            };
            gradient_stops.push(format!("{} {}% {}%", color, lower, format_float(cumulative + pct)));
            cumulative += pct;
        }
    } else {
        for (i, _) in numbers.iter().enumerate() {
            gradient_stops.push(format!("{} 0% 0%", colors[i % colors.len()]));
        }
    }
    let gradient = gradient_stops.join(", ");

    ctx.push_css(format!(
        ".{css} {{ width: 300px; height: 300px; border-radius: 50%; background: conic-gradient({}); margin: 20px auto; }} .{css}-legend {{ max-width: 300px; margin: 20px auto; }} .{css}-legend-item {{ display: flex; align-items: center; margin: 8px 0; }} .{css}-legend-color {{ width: 20px; height: 20px; border-radius: 4px; margin-right: 10px; }}",
        gradient,
        css = css_class
    ));

    let mut chart_html = format!(
        "<div class=\"{css}\"></div><div class=\"{css}-legend\">",
        css = css_class
    );
    for (i, (label, value)) in labels.iter().zip(data.iter()).enumerate() {
        let color = &colors[i % colors.len()];
        chart_html.push_str(&format!(
            "<div class=\"{css}-legend-item\"><div class=\"{css}-legend-color\" style=\"background: {};\"></div><span>{}: {}</span></div>",
            color,
            label,
            value,
            css = css_class
        ));
    }
    chart_html.push_str("</div>");
    ctx.push_html(chart_html);
    Ok(())
}

/// Create a countdown timer to a target date.
pub fn create_countdown(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let target_date = args.string(0, "target_date")?;
    let css_class = args.string_or(1, "css_class", "countdown");
    ctx.push_css(format!(
        ".{css} {{ display: flex; justify-content: center; gap: 30px; padding: 30px; }} .{css}-item {{ text-align: center; }} .{css}-number {{ font-size: 48px; font-weight: bold; color: #667eea; }} .{css}-label {{ font-size: 14px; color: #666; text-transform: uppercase; }}",
        css = css_class
    ));
    ctx.push_html(format!(
        "<div class=\"{css}\"><div class=\"{css}-item\"><div class=\"{css}-number\" id=\"days\">0</div><div class=\"{css}-label\">Days</div></div><div class=\"{css}-item\"><div class=\"{css}-number\" id=\"hours\">0</div><div class=\"{css}-label\">Hours</div></div><div class=\"{css}-item\"><div class=\"{css}-number\" id=\"minutes\">0</div><div class=\"{css}-label\">Minutes</div></div><div class=\"{css}-item\"><div class=\"{css}-number\" id=\"seconds\">0</div><div class=\"{css}-label\">Seconds</div></div></div>",
        css = css_class
    ));
    ctx.push_js(format!(
        r#"
    const targetDate = new Date('{}').getTime();
    function updateCountdown() {{
        const now = new Date().getTime();
        const distance = targetDate - now;

        if (distance < 0) {{
            document.getElementById('days').innerHTML = '0';
            document.getElementById('hours').innerHTML = '0';
            document.getElementById('minutes').innerHTML = '0';
            document.getElementById('seconds').innerHTML = '0';
            return;
        }}

        const days = Math.floor(distance / (1000 * 60 * 60 * 24));
        const hours = Math.floor((distance % (1000 * 60 * 60 * 24)) / (1000 * 60 * 60));
        const minutes = Math.floor((distance % (1000 * 60 * 60)) / (1000 * 60));
        const seconds = Math.floor((distance % (1000 * 60)) / 1000);

        document.getElementById('days').innerHTML = days;
        document.getElementById('hours').innerHTML = hours;
        document.getElementById('minutes').innerHTML = minutes;
        document.getElementById('seconds').innerHTML = seconds;
    }}
    updateCountdown();
    setInterval(updateCountdown, 1000);
    "#,
        target_date
    ));
    Ok(())
}

/// Play a muted looping video behind the page.
pub fn add_video_background(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let video_src = args.string(0, "video_src")?;
    let css_class = args.string_or(1, "css_class", "video-bg");
    ctx.push_css(format!(
        ".{css} {{ position: fixed; top: 0; left: 0; width: 100%; height: 100%; object-fit: cover; z-index: -1; }} .{css}-overlay {{ position: fixed; top: 0; left: 0; width: 100%; height: 100%; background: rgba(0,0,0,0.5); z-index: -1; }}",
        css = css_class
    ));
    ctx.push_html(format!(
        "<video class=\"{css}\" autoplay muted loop><source src=\"{}\" type=\"video/mp4\"></video><div class=\"{css}-overlay\"></div>",
        video_src,
        css = css_class
    ));
    Ok(())
}

/// Embed a YouTube video.
pub fn embed_youtube(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let video_id = args.string(0, "video_id")?;
    let width = args.string_or(1, "width", "560");
    let height = args.string_or(2, "height", "315");
    ctx.push_html(format!(
        "<iframe width=\"{}\" height=\"{}\" src=\"https://www.youtube.com/embed/{}\" frameborder=\"0\" allow=\"accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture\" allowfullscreen></iframe>",
        width, height, video_id
    ));
    Ok(())
}

/// Embed a Twitter timeline.
pub fn embed_twitter_timeline(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let username = args.string(0, "username")?;
    ctx.push_html(format!(
        "<a class=\"twitter-timeline\" href=\"https://twitter.com/{username}\">Tweets by {username}</a>",
        username = username
    ));
    ctx.push_head("<script async src=\"https://platform.twitter.com/widgets.js\"></script>");
    Ok(())
}

/// Add share buttons for Twitter, Facebook and LinkedIn.
///
/// Without arguments the buttons share the current page; the defaults
/// are spliced into the click handlers as script expressions.
pub fn add_social_share_buttons(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let share_url = args
        .truthy(0, "url")
        .map(|v| v.to_string())
        .unwrap_or_else(|| "window.location.href".to_string());
    let share_text = args
        .truthy(1, "text")
        .map(|v| v.to_string())
        .unwrap_or_else(|| "document.title".to_string());
    ctx.push_css(".social-share { display: flex; gap: 10px; margin: 20px 0; } .social-share button { padding: 10px 20px; border: none; border-radius: 4px; color: white; cursor: pointer; font-size: 14px; } .social-share .twitter { background: #1DA1F2; } .social-share .facebook { background: #4267B2; } .social-share .linkedin { background: #0077B5; }");
    ctx.push_html(format!(
        "<div class=\"social-share\"><button class=\"twitter\" onclick=\"window.open('https://twitter.com/intent/tweet?url='+encodeURIComponent({url})+'&text='+encodeURIComponent({text}), '_blank')\">Share on Twitter</button><button class=\"facebook\" onclick=\"window.open('https://www.facebook.com/sharer/sharer.php?u='+encodeURIComponent({url}), '_blank')\">Share on Facebook</button><button class=\"linkedin\" onclick=\"window.open('https://www.linkedin.com/sharing/share-offsite/?url='+encodeURIComponent({url}), '_blank')\">Share on LinkedIn</button></div>",
        url = share_url,
        text = share_text
    ));
    Ok(())
}

/// Embed a Google Map centered on an address.
pub fn embed_google_map(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let address = args.string(0, "address")?;
    let width = args.string_or(1, "width", "100%");
    let height = args.string_or(2, "height", "400px");
    let encoded_address = address.replace(' ', "+");
    ctx.push_html(format!(
        "<iframe width=\"{}\" height=\"{}\" frameborder=\"0\" src=\"https://www.google.com/maps?q={}&output=embed\"></iframe>",
        width, height, encoded_address
    ));
    Ok(())
}

/// Block submission of a form until its required fields are filled.
pub fn add_form_validation(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let form_id = args.string(0, "form_id")?;
    ctx.push_js(format!(
        r#"
    document.getElementById('{}').addEventListener('submit', function(e) {{
        const inputs = this.querySelectorAll('input[required], textarea[required]');
        let valid = true;
        inputs.forEach(input => {{
            if (!input.value.trim()) {{
                input.style.borderColor = 'red';
                valid = false;
            }} else {{
                input.style.borderColor = '';
            }}
        }});
        if (!valid) {{
            e.preventDefault();
            alert('Please fill in all required fields');
        }}
    }});
    "#,
        form_id
    ));
    Ok(())
}

/// Show a strength bar under a password input.
pub fn add_password_strength_meter(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let input_id = args.string(0, "input_id")?;
    ctx.push_css(format!(
        "#{}-strength {{ height: 5px; margin-top: 5px; border-radius: 3px; transition: all 0.3s; }} .strength-weak {{ background: #ff4444; width: 33%; }} .strength-medium {{ background: #ffaa00; width: 66%; }} .strength-strong {{ background: #00C851; width: 100%; }}",
        input_id
    ));
    ctx.push_html(format!("<div id=\"{}-strength\"></div>", input_id));
    ctx.push_js(format!(
        r#"
    document.getElementById('{id}').addEventListener('input', function(e) {{
        const password = e.target.value;
        const strength = document.getElementById('{id}-strength');
        let score = 0;
        if (password.length >= 8) score++;
        if (/[A-Z]/.test(password)) score++;
        if (/[0-9]/.test(password)) score++;
        if (/[^A-Za-z0-9]/.test(password)) score++;

        strength.className = '';
        if (score <= 1) strength.className = 'strength-weak';
        else if (score <= 3) strength.className = 'strength-medium';
        else strength.className = 'strength-strong';
    }});
    "#,
        id = input_id
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
    fn test_add_video_without_controls() {
        let ctx = call("add_video", "\"clip.mp4\", controls=False");
        assert_eq!(ctx.html, vec!["<video src=\"clip.mp4\"></video>"]);
    }

    #[test]
    fn test_add_video_with_size() {
        let ctx = call("add_video", "\"clip.mp4\", 640, 480");
        assert_eq!(
            ctx.html,
            vec!["<video src=\"clip.mp4\" width=\"640\" height=\"480\" controls></video>"]
        );
    }

    #[test]
    fn test_create_image_gallery_map_entries() {
        let ctx = call(
            "create_image_gallery",
            "[{src: \"a.jpg\", alt: \"First\"}, \"b.jpg\"]",
        );
        assert_eq!(
            ctx.html,
            vec!["<div class=\"gallery\"><img src=\"a.jpg\" alt=\"First\"><img src=\"b.jpg\" alt=\"\"></div>"]
        );
    }

    #[test]
    fn test_create_image_slider_auto_play_line() {
        let ctx = call("create_image_slider", "[\"a.jpg\"], interval=5000");
        assert!(ctx.js[0].contains("setInterval(() => goToSlide(current + 1), 5000);"));
    }

    #[test]
    fn test_create_image_slider_no_auto_play() {
        let ctx = call("create_image_slider", "[\"a.jpg\"], auto_play=False");
        assert!(!ctx.js[0].contains("setInterval"));
    }

    #[test]
    fn test_create_bar_chart_percentages() {
        let ctx = call("create_bar_chart", "[10, 20], [\"A\", \"B\"]");
        let html = &ctx.html[0];
        assert!(html.contains("style=\"width: 50.0%;\""));
        assert!(html.contains("style=\"width: 100.0%;\""));
        assert!(html.contains("<div class=\"bar-chart-value\">10</div>"));
    }

    #[test]
    fn test_create_bar_chart_zips_shortest() {
        let ctx = call("create_bar_chart", "[10, 20, 30], [\"A\"]");
        let html = &ctx.html[0];
        assert_eq!(html.matches("bar-chart-bar\"").count(), 1);
    }

    #[test]
    fn test_create_bar_chart_rejects_text_data() {
        let registry = BuiltinRegistry::with_defaults();
        let mut ctx = Context::new();
        let (positional, named) = parse_arguments("[\"x\"], [\"A\"]");
        let func = registry.get("create_bar_chart").unwrap();
        let args = Args::new("create_bar_chart", positional, named);
        assert!(func(&mut ctx, &args).is_err());
    }

    #[test]
    fn test_create_pie_chart_gradient_stops() {
        let ctx = call("create_pie_chart", "[1, 1], [\"A\", \"B\"]");
        assert!(ctx.css[0].contains("conic-gradient(#667eea 0% 50.0%, #764ba2 50.0% 100.0%)"));
    }

    #[test]
    fn test_create_pie_chart_zero_total() {
        let ctx = call("create_pie_chart", "[0, 0], [\"A\", \"B\"]");
        assert!(ctx.css[0].contains("conic-gradient(#667eea 0% 0%, #764ba2 0% 0%)"));
    }

    #[test]
    fn test_create_pie_chart_custom_colors_cycle() {
        let ctx = call("create_pie_chart", "[1, 1, 2], [\"A\", \"B\", \"C\"], [\"red\", \"blue\"]");
        assert!(ctx.css[0].contains("red 0%"));
        assert!(ctx.html[0].contains("background: red;"));
        // Third slice wraps around to the first color.
        assert_eq!(ctx.html[0].matches("background: red;").count(), 2);
    }

    #[test]
    fn test_embed_google_map_encodes_spaces() {
        let ctx = call("embed_google_map", "\"1 Main St Springfield\"");
        assert!(ctx.html[0].contains("maps?q=1+Main+St+Springfield&output=embed"));
    }

    #[test]
    fn test_add_social_share_buttons_defaults_to_page() {
        let ctx = call("add_social_share_buttons", "");
        assert!(ctx.html[0].contains("encodeURIComponent(window.location.href)"));
        assert!(ctx.html[0].contains("encodeURIComponent(document.title)"));
    }

    #[test]
    fn test_embed_twitter_timeline_adds_head_script() {
        let ctx = call("embed_twitter_timeline", "\"rustlang\"");
        assert_eq!(
            ctx.head,
            vec!["<script async src=\"https://platform.twitter.com/widgets.js\"></script>"]
        );
        assert_eq!(
            ctx.html,
            vec!["<a class=\"twitter-timeline\" href=\"https://twitter.com/rustlang\">Tweets by rustlang</a>"]
        );
    }

    #[test]
    fn test_add_password_strength_meter_streams() {
        let ctx = call("add_password_strength_meter", "\"pw\"");
        assert_eq!(ctx.html, vec!["<div id=\"pw-strength\"></div>"]);
        assert!(ctx.css[0].starts_with("#pw-strength {"));
        assert!(ctx.js[0].contains("document.getElementById('pw-strength')"));
    }
}
