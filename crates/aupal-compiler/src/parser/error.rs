//! Parse errors and their rendering.

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};
use aupal_bytecode::{Opcode, ValueError};

/// Number of arguments a command accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    ZeroOrTwo,
    AtMost(usize),
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exactly(n) => write!(f, "{n}"),
            Self::ZeroOrTwo => f.write_str("either 0 or 2"),
            Self::AtMost(n) => write!(f, "at most {n}"),
        }
    }
}

/// What went wrong on a line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("indentation expected")]
    IndentationExpected,

    #[error("not enough indentation")]
    NotEnoughIndentation,

    #[error("too much indentation")]
    TooMuchIndentation,

    #[error("unknown command {0:?}")]
    UnknownCommand(char),

    #[error("found {found} arguments for command {command}, expecting {expected}")]
    ArgumentCount {
        command: Opcode,
        expected: Arity,
        found: usize,
    },

    #[error("assignment expected")]
    AssignmentExpected,

    #[error("identifier expected on left-hand side of assignment, found \"{0}\"")]
    IdentifierExpected(String),

    #[error("invalid value specification \"{0}\"")]
    InvalidValueSpec(String),

    #[error("invalid string \"{0}\" (only ASCII without NUL is allowed)")]
    InvalidString(String),

    #[error("too many assignments for element \"{element}\" (at most {max})")]
    TooManyAssignments { element: String, max: usize },

    #[error(transparent)]
    Value(#[from] ValueError),
}

/// A fatal error on a 1-based source line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(line: usize, kind: ParseErrorKind) -> Self {
        Self { line, kind }
    }

    /// Render with the offending source line annotated.
    ///
    /// `source_line` is the text of line `self.line`, without its newline.
    pub fn render(&self, source_line: &str, path: Option<&str>, colored: bool) -> String {
        let renderer = if colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let message = self.kind.to_string();
        let content = source_line.trim_end();
        let start = content.len() - content.trim_start().len();
        let end = if content.len() > start {
            content.len()
        } else {
            (start + 1).min(source_line.len())
        };

        let mut snippet = Snippet::source(source_line)
            .line_start(self.line)
            .annotation(AnnotationKind::Primary.span(start..end).label(&message));
        if let Some(p) = path {
            snippet = snippet.path(p);
        }

        let report: Vec<Group> = vec![Level::ERROR.primary_title(&message).element(snippet)];
        renderer.render(&report).to_string()
    }
}
