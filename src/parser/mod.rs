//! Parser module: comment blocks and the declarations they document.

pub mod decl;
pub mod header;

use crate::model::FunctionDoc;
use std::fmt;

/// Result of a parse, including the blocks that never produced a record.
#[derive(Debug, Default)]
pub struct ParseReport {
    pub functions: Vec<FunctionDoc>,
    pub skipped: Vec<Skipped>,
}

/// A comment block that was dropped, or a declaration candidate that did not match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skipped {
    /// A new `/**` opened before the block at `opened_at` found its declaration.
    Superseded { opened_at: usize, by: usize },
    /// Input ended while the block at `opened_at` was still pending.
    Unterminated { opened_at: usize },
    /// Line looked like a declaration but is not `type name(args);`.
    Unrecognized { line: usize },
}

impl fmt::Display for Skipped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Skipped::Superseded { opened_at, by } => write!(
                f,
                "comment at line {} has no declaration (next comment starts at line {})",
                opened_at, by
            ),
            Skipped::Unterminated { opened_at } => {
                write!(f, "comment at line {} has no declaration", opened_at)
            }
            Skipped::Unrecognized { line } => {
                write!(f, "line {}: declaration not recognized", line)
            }
        }
    }
}

/// Parse header lines into documented functions, in source order.
///
/// Never fails: malformed blocks and declarations only show up in `skipped`.
pub fn parse<S: AsRef<str>>(lines: &[S]) -> ParseReport {
    header::parse(lines)
}
