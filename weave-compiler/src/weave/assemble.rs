//! Final document assembly
//!
//! Joins the four accumulated streams into one self-contained HTML
//! page. The shape of the page is fixed: head entries land between the
//! viewport meta tag and the style block, CSS after a small reset,
//! body markup before the script block. Nothing here escapes or
//! reorders fragments; the streams arrive in emission order and leave
//! in emission order.

use crate::weave::context::Context;

/// Render the finished page from an executed context.
pub fn assemble_document(ctx: &Context) -> String {
    let head_parts = ctx.head.join("\n");
    let css_content = ctx.css.join("\n");
    let js_content = ctx.js.join("\n");
    let html_content = ctx.html.join("\n");

    let head = if head_parts.is_empty() {
        "<title>Weave Page</title>".to_string()
    } else {
        head_parts
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    {head}
    <style>
        * {{
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }}
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
            line-height: 1.6;
            color: #333;
        }}
        {css_content}
    </style>
</head>
<body>
    {html_content}
    <script>
        {js_content}
    </script>
</body>
</html>"#
    )
}
