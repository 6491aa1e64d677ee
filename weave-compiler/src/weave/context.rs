//! Accumulation state for one compilation
//!
//! A [`Context`] collects everything the statement interpreter produces:
//! body markup, CSS rules, script snippets and head entries, in call
//! order, each stream kept separate until the final document is
//! assembled. It also carries the component table and the list of
//! libraries imported so far. One compilation owns one context; nothing
//! is shared between runs.

use std::collections::HashMap;
use std::path::PathBuf;

/// Mutable state threaded through a single compilation.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Body markup fragments, in emission order.
    pub html: Vec<String>,
    /// CSS rules destined for the document's style block.
    pub css: Vec<String>,
    /// Script snippets destined for the document's script block.
    pub js: Vec<String>,
    /// Entries for the document head (title, meta, external resources).
    pub head: Vec<String>,
    /// Names of libraries imported during this compilation.
    pub imported_libraries: Vec<String>,
    /// Component name to markup template.
    pub components: HashMap<String, String>,
    /// Extra directories searched when resolving library imports.
    pub library_dirs: Vec<PathBuf>,
}

impl Context {
    pub fn new() -> Self {
        Context::default()
    }

    /// A fresh context that also searches `dirs` when resolving
    /// library imports.
    pub fn with_library_dirs(dirs: Vec<PathBuf>) -> Self {
        Context {
            library_dirs: dirs,
            ..Context::default()
        }
    }

    pub fn push_html(&mut self, fragment: impl Into<String>) {
        self.html.push(fragment.into());
    }

    pub fn push_css(&mut self, rule: impl Into<String>) {
        self.css.push(rule.into());
    }

    pub fn push_js(&mut self, snippet: impl Into<String>) {
        self.js.push(snippet.into());
    }

    pub fn push_head(&mut self, entry: impl Into<String>) {
        self.head.push(entry.into());
    }

    /// Register a component template. A later definition with the same
    /// name replaces the earlier one.
    pub fn define_component(&mut self, name: impl Into<String>, template: impl Into<String>) {
        self.components.insert(name.into(), template.into());
    }

    pub fn component(&self, name: &str) -> Option<&str> {
        self.components.get(name).map(String::as_str)
    }

    pub fn has_component(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }
}
