//! Body-level members: constants, properties and enum cases.
//!
//! Only the stretch between the body brace and the first method is looked
//! at. Method bodies are never scanned.

use crate::constants::{FUNCTION_KEYWORD, MULTILINE_ARRAY_MARKER, TRAILING_COMMENT};
use crate::line::{LineKind, SourceLine};

/// Members declared directly in the type body, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BodyMembers {
    /// `const` declarations.
    pub constants: Vec<String>,
    /// Everything that is neither a constant nor an enum case.
    pub properties: Vec<String>,
    /// `case` declarations.
    pub enum_cases: Vec<String>,
}

impl BodyMembers {
    /// Collects members from classified lines.
    #[must_use]
    pub fn scan<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a SourceLine>,
    {
        let mut members = Self::default();
        let mut in_body = false;

        for line in lines {
            if line.kind == LineKind::BodyOpen {
                in_body = true;
            }

            if in_body && !line.has_parenthesis() {
                if !line.kind.is_word_led() {
                    continue;
                }
                let member = clean_member(&line.text);
                let reached_function = member.contains(FUNCTION_KEYWORD);
                members.push(member);
                if reached_function {
                    break;
                }
                continue;
            }

            if line.text.contains(FUNCTION_KEYWORD) {
                break;
            }
        }

        members
    }

    fn push(&mut self, member: String) {
        if member.contains("const ") {
            self.constants.push(member);
        } else if member.contains("case ") {
            self.enum_cases.push(member);
        } else {
            self.properties.push(member);
        }
    }
}

/// Drops a same-line comment and the terminator. An array literal left open
/// on this line is closed with a placeholder.
fn clean_member(text: &str) -> String {
    let text = match text.find('/') {
        Some(at) if text.contains(TRAILING_COMMENT) => text[..at].trim(),
        _ => text,
    };
    let text = text.trim_matches(|c: char| c == ' ' || c == ';');
    if text.ends_with('[') {
        format!("{text}{MULTILINE_ARRAY_MARKER}")
    } else {
        text.to_owned()
    }
}
