//! The builtin catalog
//!
//! Every callable primitive lives here, grouped by what it emits:
//! elements, forms, styling, layout, widgets, effects, media, head
//! entries, and the library primitives. Builtins only ever append to
//! the context's streams; none of them read the document back, which
//! keeps them order-independent apart from the streams themselves.
//!
//! [`register_defaults`] installs the whole catalog into a registry.

pub mod effects;
pub mod elements;
pub mod forms;
pub mod head;
pub mod layout;
pub mod library;
pub mod media;
pub mod styling;
pub mod widgets;

use crate::weave::registry::BuiltinRegistry;
use crate::weave::values::Value;

/// Render an optional attribute: ` name="value"` when the value is set,
/// nothing otherwise.
pub(crate) fn attr_if(value: Option<&Value>, name: &str) -> String {
    value
        .map(|v| format!(" {}=\"{}\"", name, v))
        .unwrap_or_default()
}

/// Install the full builtin catalog.
pub(crate) fn register_defaults(registry: &mut BuiltinRegistry) {
    // Basic elements, text formatting, separators
    registry.register("add_title", elements::add_title);
    registry.register("add_text", elements::add_text);
    registry.register("add_heading", elements::add_heading);
    registry.register("add_paragraph", elements::add_paragraph);
    registry.register("add_div", elements::add_div);
    registry.register("add_span", elements::add_span);
    registry.register("add_link", elements::add_link);
    registry.register("add_image", elements::add_image);
    registry.register("add_list", elements::add_list);
    registry.register("add_ordered_list", elements::add_ordered_list);
    registry.register("add_unordered_list", elements::add_unordered_list);
    registry.register("add_bold", elements::add_bold);
    registry.register("add_italic", elements::add_italic);
    registry.register("add_underline", elements::add_underline);
    registry.register("add_strikethrough", elements::add_strikethrough);
    registry.register("add_code", elements::add_code);
    registry.register("add_code_block", elements::add_code_block);
    registry.register("add_superscript", elements::add_superscript);
    registry.register("add_subscript", elements::add_subscript);
    registry.register("add_quote", elements::add_quote);
    registry.register("add_small", elements::add_small);
    registry.register("add_mark", elements::add_mark);
    registry.register("add_br", elements::add_br);
    registry.register("add_hr", elements::add_hr);
    registry.register("add_space", elements::add_space);

    // Tables, forms and inputs
    registry.register("create_table", forms::create_table);
    registry.register("add_table_row", forms::add_table_row);
    registry.register("create_form", forms::create_form);
    registry.register("end_form", forms::end_form);
    registry.register("add_input", forms::add_input);
    registry.register("add_text_input", forms::add_text_input);
    registry.register("add_email_input", forms::add_email_input);
    registry.register("add_password_input", forms::add_password_input);
    registry.register("add_number_input", forms::add_number_input);
    registry.register("add_textarea", forms::add_textarea);
    registry.register("add_button", forms::add_button);
    registry.register("add_submit_button", forms::add_submit_button);
    registry.register("add_checkbox", forms::add_checkbox);
    registry.register("add_radio", forms::add_radio);
    registry.register("add_select", forms::add_select);
    registry.register("add_label", forms::add_label);
    registry.register("add_file_input", forms::add_file_input);
    registry.register("add_date_input", forms::add_date_input);
    registry.register("add_color_input", forms::add_color_input);
    registry.register("add_range_input", forms::add_range_input);

    // Styling, responsive rules, typography
    registry.register("set_background", styling::set_background);
    registry.register("set_background_gradient", styling::set_background_gradient);
    registry.register("set_font", styling::set_font);
    registry.register("set_text_color", styling::set_text_color);
    registry.register("set_page_margin", styling::set_page_margin);
    registry.register("set_page_padding", styling::set_page_padding);
    registry.register("add_custom_css", styling::add_custom_css);
    registry.register("add_style_to_element", styling::add_style_to_element);
    registry.register("add_box_shadow", styling::add_box_shadow);
    registry.register("add_text_shadow", styling::add_text_shadow);
    registry.register("add_border", styling::add_border);
    registry.register("add_border_radius", styling::add_border_radius);
    registry.register("set_opacity", styling::set_opacity);
    registry.register("add_transform", styling::add_transform);
    registry.register("add_transition", styling::add_transition);
    registry.register("set_mobile_breakpoint", styling::set_mobile_breakpoint);
    registry.register("add_responsive_text", styling::add_responsive_text);
    registry.register("hide_on_mobile", styling::hide_on_mobile);
    registry.register("hide_on_desktop", styling::hide_on_desktop);
    registry.register("add_dropcap", styling::add_dropcap);
    registry.register("add_text_gradient", styling::add_text_gradient);

    // Layout, cards, navigation
    registry.register("create_container", layout::create_container);
    registry.register("create_section", layout::create_section);
    registry.register("create_row", layout::create_row);
    registry.register("create_column", layout::create_column);
    registry.register("create_grid", layout::create_grid);
    registry.register("end_grid", layout::end_grid);
    registry.register("create_flex_container", layout::create_flex_container);
    registry.register("end_flex_container", layout::end_flex_container);
    registry.register("add_spacer", layout::add_spacer);
    registry.register("create_card", layout::create_card);
    registry.register("create_info_box", layout::create_info_box);
    registry.register("create_warning_box", layout::create_warning_box);
    registry.register("create_success_box", layout::create_success_box);
    registry.register("create_error_box", layout::create_error_box);
    registry.register("create_panel", layout::create_panel);
    registry.register("create_navbar", layout::create_navbar);
    registry.register("create_menu", layout::create_menu);
    registry.register("create_breadcrumbs", layout::create_breadcrumbs);
    registry.register("create_tabs", layout::create_tabs);
    registry.register("create_accordion", layout::create_accordion);

    // Modals, alerts, progress, badges and other widgets
    registry.register("create_modal", widgets::create_modal);
    registry.register("add_alert", widgets::add_alert);
    registry.register("add_toast", widgets::add_toast);
    registry.register("add_progress_bar", widgets::add_progress_bar);
    registry.register("add_spinner", widgets::add_spinner);
    registry.register("add_skeleton_loader", widgets::add_skeleton_loader);
    registry.register("add_badge", widgets::add_badge);
    registry.register("add_pill", widgets::add_pill);
    registry.register("add_tooltip", widgets::add_tooltip);
    registry.register("create_carousel", widgets::create_carousel);
    registry.register("create_pricing_card", widgets::create_pricing_card);
    registry.register("create_timeline", widgets::create_timeline);
    registry.register("create_dropdown_menu", widgets::create_dropdown_menu);
    registry.register("create_sidebar", widgets::create_sidebar);
    registry.register("create_footer", widgets::create_footer);
    registry.register("create_hero_section", widgets::create_hero_section);
    registry.register("create_color_palette", widgets::create_color_palette);

    // Animations, hover, scroll and dark mode effects
    registry.register("add_fade_in", effects::add_fade_in);
    registry.register("add_slide_in", effects::add_slide_in);
    registry.register("add_bounce", effects::add_bounce);
    registry.register("add_rotate", effects::add_rotate);
    registry.register("add_scale", effects::add_scale);
    registry.register("add_shake", effects::add_shake);
    registry.register("add_pulse", effects::add_pulse);
    registry.register("add_hover_effect", effects::add_hover_effect);
    registry.register("add_hover_color", effects::add_hover_color);
    registry.register("add_hover_background", effects::add_hover_background);
    registry.register("add_click_effect", effects::add_click_effect);
    registry.register("add_parallax", effects::add_parallax);
    registry.register("add_scroll_reveal", effects::add_scroll_reveal);
    registry.register("add_sticky_header", effects::add_sticky_header);
    registry.register("enable_dark_mode", effects::enable_dark_mode);
    registry.register("add_dark_mode_toggle", effects::add_dark_mode_toggle);
    registry.register("add_typing_effect", effects::add_typing_effect);
    registry.register("add_fade_in_on_scroll", effects::add_fade_in_on_scroll);
    registry.register("add_float_animation", effects::add_float_animation);
    registry.register("add_glow_effect", effects::add_glow_effect);
    registry.register("make_sticky", effects::make_sticky);
    registry.register("add_sticky_cta", effects::add_sticky_cta);

    // Media, galleries, charts, embeds and form scripting
    registry.register("add_video", media::add_video);
    registry.register("add_audio", media::add_audio);
    registry.register("add_iframe", media::add_iframe);
    registry.register("add_embed", media::add_embed);
    registry.register("create_image_gallery", media::create_image_gallery);
    registry.register("create_masonry_gallery", media::create_masonry_gallery);
    registry.register("add_lightbox", media::add_lightbox);
    registry.register("create_image_slider", media::create_image_slider);
    registry.register("create_bar_chart", media::create_bar_chart);
    registry.register("create_pie_chart", media::create_pie_chart);
    registry.register("create_countdown", media::create_countdown);
    registry.register("add_video_background", media::add_video_background);
    registry.register("embed_youtube", media::embed_youtube);
    registry.register("embed_twitter_timeline", media::embed_twitter_timeline);
    registry.register("add_social_share_buttons", media::add_social_share_buttons);
    registry.register("embed_google_map", media::embed_google_map);
    registry.register("add_form_validation", media::add_form_validation);
    registry.register("add_password_strength_meter", media::add_password_strength_meter);

    // Head entries and icons
    registry.register("set_title", head::set_title);
    registry.register("add_favicon", head::add_favicon);
    registry.register("add_meta", head::add_meta);
    registry.register("add_external_css", head::add_external_css);
    registry.register("add_external_js", head::add_external_js);
    registry.register("add_google_font", head::add_google_font);
    registry.register("add_icon", head::add_icon);
    registry.register("add_emoji", head::add_emoji);

    // Library and component primitives
    registry.register("import_library", library::import_library);
    registry.register("define_component", library::define_component);
    registry.register("use_component", library::use_component);
}
