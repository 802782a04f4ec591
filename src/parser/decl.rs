//! Function declaration matching: `type name(args);` on a single line.

use regex::Regex;
use std::sync::LazyLock;

// Return type and name must be single word tokens; no pointer or qualifier syntax.
static RE_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)\s+(\w+)\s*\((.*)\);").unwrap());

/// A matched declaration line.
#[derive(Debug, PartialEq, Eq)]
pub struct Declaration<'a> {
    pub return_type: &'a str,
    pub name: &'a str,
    /// Type of each comma-separated argument, in order
    pub arg_types: Vec<String>,
}

/// Cheap pre-check applied before the regex.
pub fn is_candidate(line: &str) -> bool {
    line.ends_with(';') && line.contains('(') && line.contains(')')
}

/// Match a trimmed line against the declaration pattern.
pub fn parse(line: &str) -> Option<Declaration<'_>> {
    let caps = RE_DECL.captures(line)?;
    let return_type = caps.get(1)?.as_str();
    let name = caps.get(2)?.as_str();
    let args = caps.get(3)?.as_str();

    let arg_types = if args.trim().is_empty() {
        Vec::new()
    } else {
        args.split(',').map(arg_type).collect()
    };

    Some(Declaration {
        return_type,
        name,
        arg_types,
    })
}

/// Everything but the last token is the type: `const char *name` → `const char`.
fn arg_type(arg: &str) -> String {
    let tokens: Vec<&str> = arg.split_whitespace().collect();
    match tokens.split_last() {
        Some((_, ty)) => ty.join(" "),
        None => String::new(),
    }
}
