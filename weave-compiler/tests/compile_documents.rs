//! End-to-end compilation of whole weave documents
//!
//! These tests run real programs through [`Compiler::compile_source`]
//! and check the finished page: stream placement, default title, line
//! numbers in errors, and the forgiving treatment of lines that are
//! not calls.

use weave_compiler::weave::Compiler;

#[test]
fn test_minimal_document_exact_output() {
    let compiler = Compiler::new();
    let page = compiler
        .compile_source("set_title(\"Demo\")\nadd_text(\"Hi\")\n")
        .unwrap();

    // The page shell is fixed; empty CSS and JS sections keep their
    // indented placeholder lines.
    let expected = concat!(
        "<!DOCTYPE html>\n",
        "<html lang=\"en\">\n",
        "<head>\n",
        "    <meta charset=\"UTF-8\">\n",
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        "    <title>Demo</title>\n",
        "    <style>\n",
        "        * {\n",
        "            margin: 0;\n",
        "            padding: 0;\n",
        "            box-sizing: border-box;\n",
        "        }\n",
        "        body {\n",
        "            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;\n",
        "            line-height: 1.6;\n",
        "            color: #333;\n",
        "        }\n",
        "        \n",
        "    </style>\n",
        "</head>\n",
        "<body>\n",
        "    <p>Hi</p>\n",
        "    <script>\n",
        "        \n",
        "    </script>\n",
        "</body>\n",
        "</html>",
    );
    assert_eq!(page, expected);
}

#[test]
fn test_streams_accumulate_across_statement_kinds() {
    let source = "\
set_title(\"Landing\")
add_title(\"Welcome\")
add_text(\"First paragraph\")
set_background(\"#fafafa\")
add_custom_css(\".hero { padding: 4rem; }\")
add_click_effect(\"#go\", \"alert('hi')\")
";
    let compiler = Compiler::new();
    let page = compiler.compile_source(source).unwrap();

    assert!(page.contains("<title>Landing</title>"));
    assert!(page.contains("<h1>Welcome</h1>"));
    assert!(page.contains("<p>First paragraph</p>"));
    assert!(page.contains("body { background-color: #fafafa; }"));
    assert!(page.contains(".hero { padding: 4rem; }"));
    assert!(page.contains("addEventListener"));
}

#[test]
fn test_markup_keeps_statement_order() {
    let source = "add_text(\"one\")\nadd_text(\"two\")\nadd_text(\"three\")\n";
    let compiler = Compiler::new();
    let page = compiler.compile_source(source).unwrap();
    let one = page.find("<p>one</p>").unwrap();
    let two = page.find("<p>two</p>").unwrap();
    let three = page.find("<p>three</p>").unwrap();
    assert!(one < two && two < three);
}

#[test]
fn test_empty_source_gets_default_title() {
    let compiler = Compiler::new();
    let page = compiler.compile_source("").unwrap();
    assert!(page.contains("<title>Weave Page</title>"));
}

#[test]
fn test_comments_and_blank_lines_count_toward_line_numbers() {
    let source = "# heading comes next\n\nadd_title(\"ok\")\nboom()\n";
    let compiler = Compiler::new();
    let err = compiler.compile_source(source).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Error on line 4: Function 'boom' is not defined"
    );
}

#[test]
fn test_prose_lines_are_ignored() {
    let source = "notes to self\nadd_text(\"kept\")\nTODO tidy this up\n";
    let compiler = Compiler::new();
    let page = compiler.compile_source(source).unwrap();
    assert!(page.contains("<p>kept</p>"));
    assert!(!page.contains("notes to self"));
}

#[test]
fn test_mixed_positional_and_named_arguments() {
    let source = "add_heading(\"Section, one\", level=3)\n";
    let compiler = Compiler::new();
    let page = compiler.compile_source(source).unwrap();
    assert!(page.contains("<h3>Section, one</h3>"));
}

#[test]
fn test_argument_error_carries_function_and_line() {
    let compiler = Compiler::new();
    let err = compiler.compile_source("add_image()\n").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Error on line 1: add_image() missing required argument: 'src'"
    );
}

#[test]
fn test_unquoted_words_become_text() {
    // The permissive parser keeps bare words as strings.
    let compiler = Compiler::new();
    let page = compiler.compile_source("add_text(hello there)\n").unwrap();
    assert!(page.contains("<p>hello there</p>"));
}

#[test]
fn test_compiling_twice_is_identical() {
    // The navbar line exercises list and mapping literals.
    let source = "\
add_title(\"Repeatable\")
create_navbar(\"Brand\", [{url: '/a', text: 'A'}, {url: '/b', text: 'B'}])
just a closing prose line
";
    let compiler = Compiler::new();
    let first = compiler.compile_source(source).unwrap();
    let second = compiler.compile_source(source).unwrap();
    assert_eq!(first, second);
    assert!(first.contains("<nav class=\"navbar\">"));
    assert!(first.contains("<a href=\"/a\">A</a>"));
}
