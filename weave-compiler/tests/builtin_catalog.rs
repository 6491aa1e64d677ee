//! Parameterized checks over builtin families
//!
//! Several builtins come in groups that share one template: the four
//! bordered boxes, the alert variants, the typed inputs, the slide-in
//! directions and the heading levels. Each family member runs through
//! the full compiler and the shared shape is checked once per variant.

use rstest::rstest;
use weave_compiler::weave::Compiler;

#[rstest(kind => ["info", "warning", "success", "error"])]
fn test_bordered_box_family(kind: &str) {
    let compiler = Compiler::new();
    let page = compiler
        .compile_source(&format!("create_{kind}_box(\"Take note\")\n"))
        .unwrap();

    assert!(page.contains(&format!("<div class=\"{kind}-box\">Take note</div>")));
    assert!(page.contains(&format!(".{kind}-box {{ background:")));
}

#[rstest(alert_type => ["info", "success", "warning", "error"])]
fn test_alert_family(alert_type: &str) {
    let compiler = Compiler::new();
    let page = compiler
        .compile_source(&format!("add_alert(\"Heads up\", \"{alert_type}\")\n"))
        .unwrap();

    let color = match alert_type {
        "info" => "#2196F3",
        "success" => "#4CAF50",
        "warning" => "#ff9800",
        _ => "#f44336",
    };
    assert!(page.contains(&format!("<div class=\"alert-{alert_type}\">Heads up</div>")));
    assert!(page.contains(&format!(".alert-{alert_type} {{ background: {color};")));
}

#[rstest(input_type => ["text", "email", "password", "date", "color"])]
fn test_typed_input_family(input_type: &str) {
    let compiler = Compiler::new();
    let page = compiler
        .compile_source(&format!("add_{input_type}_input(\"field\")\n"))
        .unwrap();

    assert!(page.contains(&format!("<input type=\"{input_type}\" name=\"field\"")));
}

#[rstest(direction => ["left", "right", "top", "bottom"])]
fn test_slide_in_direction_family(direction: &str) {
    let compiler = Compiler::new();
    let page = compiler
        .compile_source(&format!("add_slide_in(\".hero\", \"{direction}\")\n"))
        .unwrap();

    let mut name = direction.to_string();
    name[..1].make_ascii_uppercase();
    let from = match direction {
        "left" => "translateX(-100%)",
        "right" => "translateX(100%)",
        "top" => "translateY(-100%)",
        _ => "translateY(100%)",
    };
    assert!(page.contains(&format!(".hero {{ animation: slideIn{name} 0.5s; }}")));
    assert!(page.contains(&format!("from {{ transform: {from}; }}")));
}

#[rstest(level => [1, 2, 3, 4, 5, 6])]
fn test_heading_levels(level: u32) {
    let compiler = Compiler::new();
    let page = compiler
        .compile_source(&format!("add_heading(\"Depth\", level={level})\n"))
        .unwrap();

    assert!(page.contains(&format!("<h{level}>Depth</h{level}>")));
}
