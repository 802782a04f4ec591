//! Doc comment parser for C headers: line-by-line state machine.
//!
//! Recognizes `/** ... */` blocks carrying `@brief`, `@param` and `@return`
//! tags. A block stays pending after `*/` until a declaration line claims it
//! or the next block replaces it.

use super::{decl, ParseReport, Skipped};
use crate::model::{ParamDoc, PendingDoc};

const OPEN: &str = "/**";
const CLOSE: &str = "*/";
const TAG_BRIEF: &str = "* @brief";
const TAG_PARAM: &str = "* @param";
const TAG_RETURN: &str = "* @return";

#[derive(Default)]
struct ParserState {
    report: ParseReport,
    inside_comment: bool,
    pending: Option<PendingDoc>,
}

/// Parse header lines into a report of documented functions.
pub fn parse<S: AsRef<str>>(lines: &[S]) -> ParseReport {
    let mut state = ParserState::default();

    for (idx, line) in lines.iter().enumerate() {
        process_line(&mut state, idx + 1, line.as_ref().trim());
    }

    if let Some(doc) = state.pending.take() {
        state.report.skipped.push(Skipped::Unterminated {
            opened_at: doc.opened_at,
        });
    }

    state.report
}

fn process_line(s: &mut ParserState, lineno: usize, line: &str) {
    if line.starts_with(OPEN) {
        if let Some(prev) = s.pending.replace(PendingDoc::new(lineno)) {
            s.report.skipped.push(Skipped::Superseded {
                opened_at: prev.opened_at,
                by: lineno,
            });
        }
        s.inside_comment = true;
        return;
    }

    if s.inside_comment {
        if let Some(doc) = s.pending.as_mut() {
            if process_comment_line(doc, line) {
                return;
            }
        }
    }

    if line.starts_with(CLOSE) {
        s.inside_comment = false;
        return;
    }

    if decl::is_candidate(line) {
        if let Some(mut doc) = s.pending.take() {
            match decl::parse(line) {
                Some(d) => {
                    for (param, ty) in doc.params.iter_mut().zip(d.arg_types) {
                        param.type_name = ty;
                    }
                    s.report.functions.push(doc.finalize(d.name, d.return_type));
                }
                None => {
                    s.report.skipped.push(Skipped::Unrecognized { line: lineno });
                    s.pending = Some(doc);
                }
            }
        }
    }
}

/// Apply the tag rules to a line inside an open block.
///
/// Returns `false` when the line is not a comment body line, leaving it to
/// the close-marker and declaration rules.
fn process_comment_line(doc: &mut PendingDoc, line: &str) -> bool {
    if let Some(rest) = line.strip_prefix(TAG_BRIEF) {
        push_text(&mut doc.description, rest.trim());
    } else if let Some(rest) = line.strip_prefix(TAG_PARAM) {
        // A bare `@param` with no description is ignored.
        if let Some((name, desc)) = rest.trim().split_once(char::is_whitespace) {
            doc.params.push(ParamDoc {
                name: name.to_string(),
                description: desc.to_string(),
                type_name: String::new(),
            });
        }
    } else if let Some(rest) = line.strip_prefix(TAG_RETURN) {
        push_text(&mut doc.returns, rest.trim());
    } else if line.starts_with('*') && !line.starts_with(CLOSE) {
        let text = line.replace('*', "");
        let text = text.trim();
        // Routing is by substring, not by the preceding tag.
        if line.contains("returns") {
            push_text(&mut doc.returns, text);
        } else if line.contains("param") {
            if let Some(last) = doc.params.last_mut() {
                push_text(&mut last.description, text);
            }
        } else {
            push_text(&mut doc.description, text);
        }
    } else {
        return false;
    }
    true
}

fn push_text(buf: &mut String, text: &str) {
    buf.push_str(text);
    buf.push(' ');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(input: &str) -> Vec<&str> {
        input.lines().collect()
    }

    const ADD: &str = "\
/**
 * @brief Adds two integers.
 * @param a first addend
 * @param b second addend
 * @return the sum
 */
int add(int a, int b);
";

    #[test]
    fn well_formed_pair() {
        let report = parse(&lines(ADD));
        assert!(report.skipped.is_empty());
        let funcs = report.functions;
        assert_eq!(funcs.len(), 1);
        let f = &funcs[0];
        assert_eq!(f.name, "add");
        assert_eq!(f.return_type, "int");
        assert_eq!(f.description, "Adds two integers. ");
        assert_eq!(f.returns, "the sum ");
        assert_eq!(f.params.len(), 2);
        assert_eq!(f.params[0].name, "a");
        assert_eq!(f.params[0].description, "first addend");
        assert_eq!(f.params[0].type_name, "int");
        assert_eq!(f.params[1].name, "b");
        assert_eq!(f.params[1].type_name, "int");
    }

    #[test]
    fn types_assigned_by_position() {
        let input = "/**\n * @param x first\n * @param y second\n */\nT(int x, double y);\nint T(int x, double y);\n";
        let funcs = parse(&lines(input)).functions;
        assert_eq!(funcs.len(), 1);
        assert_eq!(funcs[0].params[0].type_name, "int");
        assert_eq!(funcs[0].params[1].type_name, "double");
    }

    #[test]
    fn extra_params_keep_empty_type() {
        let input = "/**\n * @param a one\n * @param b two\n */\nint f(int a);\n";
        let funcs = parse(&lines(input)).functions;
        assert_eq!(funcs[0].params[0].type_name, "int");
        assert_eq!(funcs[0].params[1].type_name, "");
    }

    #[test]
    fn comment_without_declaration_is_dropped() {
        let report = parse(&lines("/**\n * @brief Lonely.\n */\n"));
        assert!(report.functions.is_empty());
        assert_eq!(report.skipped, vec![Skipped::Unterminated { opened_at: 1 }]);
    }

    #[test]
    fn new_comment_supersedes_pending() {
        let input = "/**\n * @brief Enum.\n */\nenum { A, B };\n/**\n * @brief Real.\n */\nint g(void);\n";
        let report = parse(&lines(input));
        assert_eq!(report.functions.len(), 1);
        assert_eq!(report.functions[0].description, "Real. ");
        assert_eq!(
            report.skipped,
            vec![Skipped::Superseded { opened_at: 1, by: 5 }]
        );
    }

    #[test]
    fn unrecognized_declaration_keeps_block_pending() {
        let input = "/**\n * @brief Init.\n */\nstruct ctx *init(int flags);\nint init2(int flags);\n";
        let report = parse(&lines(input));
        assert_eq!(report.functions.len(), 1);
        assert_eq!(report.functions[0].name, "init2");
        assert_eq!(report.functions[0].description, "Init. ");
        assert_eq!(report.skipped, vec![Skipped::Unrecognized { line: 4 }]);
    }

    #[test]
    fn declaration_inside_open_block_finalizes() {
        let input = "/**\n * @brief Inside.\nint f(int a);\n * @brief late\n */\n";
        let report = parse(&lines(input));
        assert!(report.skipped.is_empty());
        assert_eq!(report.functions.len(), 1);
        assert_eq!(report.functions[0].name, "f");
        assert_eq!(report.functions[0].description, "Inside. ");
    }

    #[test]
    fn declaration_without_comment_is_ignored() {
        let report = parse(&lines("int f(int a);\n"));
        assert!(report.functions.is_empty());
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn bare_param_tag_ignored() {
        let input = "/**\n * @param\n * the param is described here\n */\nint f(int a);\n";
        let funcs = parse(&lines(input)).functions;
        assert!(funcs[0].params.is_empty());
        assert_eq!(funcs[0].description, "");
    }

    #[test]
    fn continuation_routing_by_substring() {
        let input = "\
/**
 * @brief Scales a value.
 * The factor may be negative.
 * @param x value
 * param x is copied
 * @return scaled
 * returns zero on overflow
 */
double scale(double x);
";
        let funcs = parse(&lines(input)).functions;
        let f = &funcs[0];
        assert_eq!(f.description, "Scales a value. The factor may be negative. ");
        assert_eq!(f.params[0].description, "valueparam x is copied ");
        assert_eq!(f.returns, "scaled returns zero on overflow ");
    }

    #[test]
    fn blank_comment_line_adds_space() {
        let input = "/**\n * @brief One.\n *\n * @return int two\n */\nint f(void);\n";
        let funcs = parse(&lines(input)).functions;
        let f = &funcs[0];
        assert_eq!(f.description, "One.  ");
        assert_eq!(f.returns, "int two ");
    }

    #[test]
    fn continuation_strips_every_asterisk() {
        let input = "/**\n * @brief Get.\n * yields a char* value\n */\nint f(void);\n";
        let funcs = parse(&lines(input)).functions;
        let f = &funcs[0];
        assert_eq!(f.description, "Get. yields a char value ");
    }

    #[test]
    fn tags_outside_comment_ignored() {
        let input = "/**\n */\n * @brief stray\nint f(void);\n";
        let funcs = parse(&lines(input)).functions;
        let f = &funcs[0];
        assert_eq!(f.description, "");
    }
}
