//! Top-level compilation entry points
//!
//! A [`Compiler`] owns the builtin registry and the library search
//! path and turns weave source into a finished HTML page. Each call to
//! [`Compiler::compile_source`] runs against a fresh [`Context`], so
//! compiling the same source twice yields the same document and one
//! compiler can serve many inputs.

use std::fs;
use std::path::{Path, PathBuf};

use crate::weave::assemble::assemble_document;
use crate::weave::context::Context;
use crate::weave::error::{format_error, CompileError};
use crate::weave::registry::BuiltinRegistry;
use crate::weave::statements::run_source;

pub struct Compiler {
    registry: BuiltinRegistry,
    library_dirs: Vec<PathBuf>,
}

impl Compiler {
    /// A compiler with the full builtin catalog and no extra library
    /// search directories.
    pub fn new() -> Self {
        Compiler {
            registry: BuiltinRegistry::with_defaults(),
            library_dirs: Vec::new(),
        }
    }

    /// A compiler that also searches `dirs` when resolving
    /// `import_library` calls.
    pub fn with_library_dirs(dirs: Vec<PathBuf>) -> Self {
        Compiler {
            registry: BuiltinRegistry::with_defaults(),
            library_dirs: dirs,
        }
    }

    /// The registry of callable builtins.
    pub fn registry(&self) -> &BuiltinRegistry {
        &self.registry
    }

    /// Compile weave source text into a complete HTML document.
    pub fn compile_source(&self, source: &str) -> Result<String, CompileError> {
        let mut ctx = Context::with_library_dirs(self.library_dirs.clone());
        run_source(source, &mut ctx, &self.registry)?;
        Ok(assemble_document(&ctx))
    }

    /// Compile a weave source file. Failures come back already rendered
    /// as the beginner-facing error report.
    pub fn compile_file(&self, path: &Path) -> Result<String, String> {
        let source = fs::read_to_string(path).map_err(|err| {
            format_error(&CompileError::Io {
                path: path.display().to_string(),
                message: err.to_string(),
            })
        })?;
        self.compile_source(&source).map_err(|err| format_error(&err))
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Compiler::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_source_produces_full_page() {
        let compiler = Compiler::new();
        let page = compiler
            .compile_source("add_title(\"Welcome\")\nadd_text(\"Hello\")\n")
            .unwrap();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<h1>Welcome</h1>"));
        assert!(page.contains("<p>Hello</p>"));
    }

    #[test]
    fn test_empty_source_still_yields_a_page() {
        let compiler = Compiler::new();
        let page = compiler.compile_source("").unwrap();
        assert!(page.contains("<title>Weave Page</title>"));
    }

    #[test]
    fn test_compile_is_deterministic() {
        let compiler = Compiler::new();
        let source = "set_title(\"Page\")\nadd_text(\"body\")\nset_background(\"#fafafa\")\n";
        let first = compiler.compile_source(source).unwrap();
        let second = compiler.compile_source(source).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_runs_do_not_leak_state() {
        let compiler = Compiler::new();
        let with_text = compiler.compile_source("add_text(\"once\")\n").unwrap();
        let empty = compiler.compile_source("").unwrap();
        assert!(with_text.contains("<p>once</p>"));
        assert!(!empty.contains("<p>once</p>"));
    }

    #[test]
    fn test_compile_file_reports_missing_file() {
        let compiler = Compiler::new();
        let report = compiler
            .compile_file(Path::new("definitely_missing.weave"))
            .unwrap_err();
        assert!(report.contains("WEAVE ERROR"));
        assert!(report.contains("Error Type: IoError"));
        assert!(report.contains("definitely_missing.weave"));
    }

    #[test]
    fn test_compile_file_reads_and_compiles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.weave");
        std::fs::write(&path, "add_title(\"From a file\")\n").unwrap();
        let compiler = Compiler::new();
        let page = compiler.compile_file(&path).unwrap();
        assert!(page.contains("<h1>From a file</h1>"));
    }

    #[test]
    fn test_compile_file_formats_compile_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.weave");
        std::fs::write(&path, "add_text(\"ok\")\nnope()\n").unwrap();
        let compiler = Compiler::new();
        let report = compiler.compile_file(&path).unwrap_err();
        assert!(report.contains("Error Type: UnknownIdentifier"));
        assert!(report.contains("Error on line 2: Function 'nope' is not defined"));
    }
}
