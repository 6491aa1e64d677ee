//! Tables, forms and input fields

use crate::weave::context::Context;
use crate::weave::error::BuiltinError;
use crate::weave::registry::Args;
use crate::weave::values::Value;

use super::attr_if;

fn input_tag(input_type: &str, name: &str, placeholder: &str, value: &str, required: bool) -> String {
    let required_attr = if required { " required" } else { "" };
    format!(
        "<input type=\"{}\" name=\"{}\" placeholder=\"{}\" value=\"{}\"{}>",
        input_type, name, placeholder, value, required_attr
    )
}

/// Create a table from a list of headers and a list of rows.
pub fn create_table(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let headers = args.items(0, "headers")?;
    let rows = args.items(1, "rows")?;
    let class_attr = attr_if(args.truthy(2, "css_class"), "class");
    let mut table_html = format!("<table{}><thead><tr>", class_attr);
    for header in &headers {
        table_html.push_str(&format!("<th>{}</th>", header));
    }
    table_html.push_str("</tr></thead><tbody>");
    for row in &rows {
        let cells = row
            .items()
            .ok_or_else(|| args.error(format!("'rows' must contain lists, got {}", row)))?;
        table_html.push_str("<tr>");
        for cell in &cells {
            table_html.push_str(&format!("<td>{}</td>", cell));
        }
        table_html.push_str("</tr>");
    }
    table_html.push_str("</tbody></table>");
    ctx.push_html(table_html);
    Ok(())
}

/// Add a table row (use within table context).
pub fn add_table_row(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let cells = args.items(0, "cells")?;
    let mut row_html = String::from("<tr>");
    for cell in &cells {
        row_html.push_str(&format!("<td>{}</td>", cell));
    }
    row_html.push_str("</tr>");
    ctx.push_html(row_html);
    Ok(())
}

/// Start a form.
pub fn create_form(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let action = args.string_or(0, "action", "");
    let method = args.string_or(1, "method", "post");
    let id_attr = attr_if(args.truthy(2, "form_id"), "id");
    ctx.push_html(format!(
        "<form action=\"{}\" method=\"{}\"{}>",
        action, method, id_attr
    ));
    Ok(())
}

/// End a form.
pub fn end_form(ctx: &mut Context, _args: &Args) -> Result<(), BuiltinError> {
    ctx.push_html("</form>");
    Ok(())
}

/// Add an input field.
pub fn add_input(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let input_type = args.string_or(0, "input_type", "text");
    let name = args.string_or(1, "name", "");
    let placeholder = args.string_or(2, "placeholder", "");
    let value = args.string_or(3, "value", "");
    let required = args.flag_or(4, "required", false);
    ctx.push_html(input_tag(&input_type, &name, &placeholder, &value, required));
    Ok(())
}

/// Add a text input.
pub fn add_text_input(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let name = args.string(0, "name")?;
    let placeholder = args.string_or(1, "placeholder", "");
    let value = args.string_or(2, "value", "");
    ctx.push_html(input_tag("text", &name, &placeholder, &value, false));
    Ok(())
}

/// Add an email input.
pub fn add_email_input(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let name = args.string(0, "name")?;
    let placeholder = args.string_or(1, "placeholder", "");
    let value = args.string_or(2, "value", "");
    ctx.push_html(input_tag("email", &name, &placeholder, &value, false));
    Ok(())
}

/// Add a password input.
pub fn add_password_input(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let name = args.string(0, "name")?;
    let placeholder = args.string_or(1, "placeholder", "");
    ctx.push_html(input_tag("password", &name, &placeholder, "", false));
    Ok(())
}

/// Add a number input.
pub fn add_number_input(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let name = args.string(0, "name")?;
    let placeholder = args.string_or(1, "placeholder", "");
    let min_attr = attr_if(args.truthy(2, "min_val"), "min");
    let max_attr = attr_if(args.truthy(3, "max_val"), "max");
    ctx.push_html(format!(
        "<input type=\"number\" name=\"{}\" placeholder=\"{}\"{}{}>",
        name, placeholder, min_attr, max_attr
    ));
    Ok(())
}

/// Add a textarea.
pub fn add_textarea(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let name = args.string(0, "name")?;
    let placeholder = args.string_or(1, "placeholder", "");
    let rows = args.string_or(2, "rows", "4");
    let cols = args.string_or(3, "cols", "50");
    ctx.push_html(format!(
        "<textarea name=\"{}\" placeholder=\"{}\" rows=\"{}\" cols=\"{}\"></textarea>",
        name, placeholder, rows, cols
    ));
    Ok(())
}

/// Add a button.
pub fn add_button(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let text = args.string(0, "text")?;
    let button_type = args.string_or(1, "button_type", "button");
    let onclick_attr = attr_if(args.truthy(2, "onclick"), "onclick");
    ctx.push_html(format!(
        "<button type=\"{}\"{}>{}</button>",
        button_type, onclick_attr, text
    ));
    Ok(())
}

/// Add a submit button.
pub fn add_submit_button(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let text = args.string_or(0, "text", "Submit");
    ctx.push_html(format!("<button type=\"submit\">{}</button>", text));
    Ok(())
}

/// Add a checkbox.
pub fn add_checkbox(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let name = args.string(0, "name")?;
    let label = args.string(1, "label")?;
    let value = args.string_or(2, "value", "");
    let checked_attr = if args.flag_or(3, "checked", false) {
        " checked"
    } else {
        ""
    };
    ctx.push_html(format!(
        "<label><input type=\"checkbox\" name=\"{}\" value=\"{}\"{}> {}</label>",
        name, value, checked_attr, label
    ));
    Ok(())
}

/// Add a radio button.
pub fn add_radio(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let name = args.string(0, "name")?;
    let label = args.string(1, "label")?;
    let value = args.string(2, "value")?;
    let checked_attr = if args.flag_or(3, "checked", false) {
        " checked"
    } else {
        ""
    };
    ctx.push_html(format!(
        "<label><input type=\"radio\" name=\"{}\" value=\"{}\"{}> {}</label>",
        name, value, checked_attr, label
    ));
    Ok(())
}

/// Add a select dropdown.
///
/// Options may be plain values or maps with `value` and `label` keys.
pub fn add_select(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let name = args.string(0, "name")?;
    let options = args.items(1, "options")?;
    let fallback = Value::Str(String::new());
    let selected = args.get(2, "selected").unwrap_or(&fallback);
    let mut select_html = format!("<select name=\"{}\">", name);
    for option in &options {
        let (value, label) = match option {
            Value::Map(_) => {
                let value = option
                    .entry("value")
                    .or_else(|| option.entry("label"))
                    .unwrap_or(&Value::None);
                let label = option.entry("label").unwrap_or(value);
                (value, label)
            }
            other => (other, other),
        };
        let selected_attr = if value == selected { " selected" } else { "" };
        select_html.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>",
            value, selected_attr, label
        ));
    }
    select_html.push_str("</select>");
    ctx.push_html(select_html);
    Ok(())
}

/// Add a label.
pub fn add_label(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let text = args.string(0, "text")?;
    let for_attr = attr_if(args.truthy(1, "for_id"), "for");
    ctx.push_html(format!("<label{}>{}</label>", for_attr, text));
    Ok(())
}

/// Add a file input.
pub fn add_file_input(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let name = args.string(0, "name")?;
    let accept_attr = attr_if(args.truthy(1, "accept"), "accept");
    ctx.push_html(format!("<input type=\"file\" name=\"{}\"{}>", name, accept_attr));
    Ok(())
}

/// Add a date input.
pub fn add_date_input(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let name = args.string(0, "name")?;
    let value = args.string_or(1, "value", "");
    ctx.push_html(input_tag("date", &name, "", &value, false));
    Ok(())
}

/// Add a color picker.
pub fn add_color_input(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let name = args.string(0, "name")?;
    let value = args.string_or(1, "value", "#000000");
    ctx.push_html(input_tag("color", &name, "", &value, false));
    Ok(())
}

/// Add a range slider.
pub fn add_range_input(ctx: &mut Context, args: &Args) -> Result<(), BuiltinError> {
    let name = args.string(0, "name")?;
    let min_val = args.string_or(1, "min_val", "0");
    let max_val = args.string_or(2, "max_val", "100");
    let value = args.string_or(3, "value", "50");
    ctx.push_html(format!(
        "<input type=\"range\" name=\"{}\" min=\"{}\" max=\"{}\" value=\"{}\">",
        name, min_val, max_val, value
    ));
    Ok(())
}
