//! Error codes for all recast diagnostics.
//!
//! The first digit names the phase; a `W` prefix marks rule warnings.

use std::fmt;

/// Error codes for all recast diagnostics.
///
/// - E0xxx: lexer errors
/// - E1xxx: parser errors
/// - E4xxx: pattern configuration errors
/// - W3xxx: rule findings
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Unexpected character in source
    E0002,
    /// Invalid number literal
    E0003,
    /// Unterminated template literal
    E0004,
    /// Unterminated block comment
    E0005,
    /// Unterminated regular expression
    E0006,
    /// Source file too large
    E0007,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Invalid assignment target
    E1004,
    /// Expected identifier
    E1005,

    // Configuration Errors (E4xxx)
    /// Malformed configuration file
    E4001,
    /// `match` string does not parse
    E4002,
    /// Replacement references an unknown placeholder
    E4003,
    /// `when` guard does not parse
    E4004,
    /// Optional position followed by a required one
    E4005,

    // Rule Findings (W3xxx)
    /// Call site has a preferred replacement
    W3001,
    /// Replacement skipped because it would shadow a binding
    W3002,
}

impl ErrorCode {
    /// All variants, for exhaustive testing and `FromStr`.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E0005,
        ErrorCode::E0006,
        ErrorCode::E0007,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E4001,
        ErrorCode::E4002,
        ErrorCode::E4003,
        ErrorCode::E4004,
        ErrorCode::E4005,
        ErrorCode::W3001,
        ErrorCode::W3002,
    ];

    /// Get the code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E0006 => "E0006",
            ErrorCode::E0007 => "E0007",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E4001 => "E4001",
            ErrorCode::E4002 => "E4002",
            ErrorCode::E4003 => "E4003",
            ErrorCode::E4004 => "E4004",
            ErrorCode::E4005 => "E4005",
            ErrorCode::W3001 => "W3001",
            ErrorCode::W3002 => "W3002",
        }
    }

    /// Stable kind name used by machine-readable output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminatedString",
            ErrorCode::E0002 => "unexpectedCharacter",
            ErrorCode::E0003 => "invalidNumber",
            ErrorCode::E0004 => "unterminatedTemplate",
            ErrorCode::E0005 => "unterminatedComment",
            ErrorCode::E0006 => "unterminatedRegex",
            ErrorCode::E0007 => "sourceTooLarge",
            ErrorCode::E1001 => "unexpectedToken",
            ErrorCode::E1002 => "expectedExpression",
            ErrorCode::E1003 => "unclosedDelimiter",
            ErrorCode::E1004 => "invalidAssignmentTarget",
            ErrorCode::E1005 => "expectedIdentifier",
            ErrorCode::E4001 => "invalidConfig",
            ErrorCode::E4002 => "invalidMatch",
            ErrorCode::E4003 => "unknownPlaceholder",
            ErrorCode::E4004 => "invalidGuard",
            ErrorCode::E4005 => "misplacedOptional",
            ErrorCode::W3001 => "preferReplacement",
            ErrorCode::W3002 => "skippedDueToConflict",
        }
    }

    /// Check if this is a lexer error (E0xxx range).
    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    /// Check if this is a parser error (E1xxx range).
    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    /// Check if this is a configuration error (E4xxx range).
    pub fn is_config_error(&self) -> bool {
        self.as_str().starts_with("E4")
    }

    /// Check if this is a rule warning (Wxxx range).
    pub fn is_warning(&self) -> bool {
        self.as_str().starts_with('W')
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E1001"` or `"w3001"`.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
