//! Error types for compilation
//!
//! Every failure surfaces as a [`CompileError`]. Errors raised while a
//! statement line is being executed are wrapped in [`CompileError::AtLine`]
//! with the 1-indexed line number; the wrapped kind is preserved so the
//! formatted report can still pick a suggestion that fits the actual
//! problem. [`format_error`] renders the beginner-facing report shown by
//! front ends.

use std::fmt;

/// A failure raised inside a builtin, usually a missing or badly typed
/// argument.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltinError {
    pub function: String,
    pub message: String,
}

impl BuiltinError {
    pub fn new(function: impl Into<String>, message: impl Into<String>) -> Self {
        BuiltinError {
            function: function.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for BuiltinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}() {}", self.function, self.message)
    }
}

impl std::error::Error for BuiltinError {}

/// Any error produced while compiling a weave document.
#[derive(Debug, Clone, PartialEq)]
pub enum CompileError {
    /// A call line named something that is neither a builtin nor a
    /// component.
    UnknownIdentifier { name: String },
    /// An imported library could not be found in any search location.
    LibraryNotFound { name: String },
    /// Argument text that could not be understood.
    MalformedArgument { message: String },
    /// A builtin rejected its arguments.
    Builtin(BuiltinError),
    /// A file could not be read.
    Io { path: String, message: String },
    /// Any of the above, annotated with the source line it came from.
    AtLine { line: usize, source: Box<CompileError> },
}

impl CompileError {
    /// Short kind tag used by [`format_error`] to pick a suggestion.
    /// Line wrappers report the kind of the error they carry.
    pub fn kind(&self) -> &'static str {
        match self {
            CompileError::UnknownIdentifier { .. } => "UnknownIdentifier",
            CompileError::LibraryNotFound { .. } => "LibraryNotFound",
            CompileError::MalformedArgument { .. } => "MalformedArgument",
            CompileError::Builtin(_) => "BuiltinError",
            CompileError::Io { .. } => "IoError",
            CompileError::AtLine { source, .. } => source.kind(),
        }
    }

    /// Wrap an error with the 1-indexed line it was raised on.
    pub fn at_line(self, line: usize) -> Self {
        CompileError::AtLine {
            line,
            source: Box::new(self),
        }
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::UnknownIdentifier { name } => {
                write!(f, "Function '{}' is not defined", name)
            }
            CompileError::LibraryNotFound { name } => {
                write!(f, "Library '{}' not found", name)
            }
            CompileError::MalformedArgument { message } => write!(f, "{}", message),
            CompileError::Builtin(err) => write!(f, "{}", err),
            CompileError::Io { path, message } => {
                write!(f, "Could not read {}: {}", path, message)
            }
            CompileError::AtLine { line, source } => {
                write!(f, "Error on line {}: {}", line, source)
            }
        }
    }
}

impl std::error::Error for CompileError {}

impl From<BuiltinError> for CompileError {
    fn from(err: BuiltinError) -> Self {
        CompileError::Builtin(err)
    }
}

/// Render an error as the plain-language report front ends print.
///
/// The report names the error kind, the message, and a suggestion keyed
/// on the kind; kinds without a specific suggestion fall back to a
/// generic one.
pub fn format_error(error: &CompileError) -> String {
    let suggestion = match error.kind() {
        "UnknownIdentifier" => {
            "Check if the function name is spelled correctly. \
             Available functions are listed in the documentation."
        }
        "MalformedArgument" => {
            "Check if your parentheses (), quotes \", and brackets [] are properly closed."
        }
        "BuiltinError" => {
            "Check if you're passing the right type of values to the function \
             (text in quotes, numbers without quotes)."
        }
        "LibraryNotFound" | "IoError" => {
            "The file or library you're trying to load doesn't exist. Check the file path."
        }
        _ => "Check your code for any mistakes.",
    };

    format!(
        "WEAVE ERROR\n\n\
         Error Type: {}\n\
         Message: {}\n\n\
         Suggestion: {}\n",
        error.kind(),
        error,
        suggestion
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_identifier_display() {
        let err = CompileError::UnknownIdentifier {
            name: "add_titel".to_string(),
        };
        assert_eq!(err.to_string(), "Function 'add_titel' is not defined");
    }

    #[test]
    fn test_line_wrapper_prefixes_message() {
        let err = CompileError::UnknownIdentifier {
            name: "spin".to_string(),
        }
        .at_line(3);
        assert_eq!(err.to_string(), "Error on line 3: Function 'spin' is not defined");
    }

    #[test]
    fn test_line_wrapper_preserves_kind() {
        let err = CompileError::LibraryNotFound {
            name: "greetings".to_string(),
        }
        .at_line(1);
        assert_eq!(err.kind(), "LibraryNotFound");
    }

    #[test]
    fn test_builtin_error_display() {
        let err = CompileError::from(BuiltinError::new(
            "add_title",
            "missing required argument: 'text'",
        ));
        assert_eq!(
            err.to_string(),
            "add_title() missing required argument: 'text'"
        );
        assert_eq!(err.kind(), "BuiltinError");
    }

    #[test]
    fn test_format_error_names_kind_and_suggestion() {
        let err = CompileError::UnknownIdentifier {
            name: "add_titel".to_string(),
        }
        .at_line(2);
        let report = format_error(&err);
        assert!(report.contains("WEAVE ERROR"));
        assert!(report.contains("Error Type: UnknownIdentifier"));
        assert!(report.contains("Error on line 2: Function 'add_titel' is not defined"));
        assert!(report.contains("spelled correctly"));
    }

    #[test]
    fn test_format_error_for_missing_library() {
        let err = CompileError::LibraryNotFound {
            name: "nope".to_string(),
        };
        let report = format_error(&err);
        assert!(report.contains("Error Type: LibraryNotFound"));
        assert!(report.contains("Check the file path"));
    }

    #[test]
    fn test_format_error_for_malformed_argument() {
        let err = CompileError::MalformedArgument {
            message: "unbalanced call".to_string(),
        };
        let report = format_error(&err);
        assert!(report.contains("properly closed"));
    }
}
