//! Every physical line is classified exactly once. The later phases (header,
//! members, methods, atypical detection) only look at [`LineKind`]s and the
//! cleaned text, never at the raw input again.

use crate::constants::{
    BODY_OPEN, DECLARATION_PREFIXES, FUNCTION_KEYWORD, IMPORT_PREFIX, METHOD_LEAD_CHARS,
    NAMESPACE_PREFIX,
};

/// Which declaration prefix a signature line starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationSignature {
    /// `abstract class Foo`
    AbstractClass,
    /// `final class Foo`
    FinalClass,
    /// `class Foo`
    Class,
    /// `interface Foo`
    Interface,
    /// `trait Foo`
    Trait,
    /// `enum Foo`
    Enum,
}

impl DeclarationSignature {
    const ALL: [Self; 6] = [
        Self::AbstractClass,
        Self::FinalClass,
        Self::Class,
        Self::Interface,
        Self::Trait,
        Self::Enum,
    ];

    /// Matches the fixed declaration prefixes against a trimmed line.
    #[must_use]
    pub fn detect(text: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .zip(DECLARATION_PREFIXES)
            .find(|(_, prefix)| text.starts_with(*prefix))
            .map(|(signature, _)| signature)
    }

    /// Leading word of the signature, used as the tally key.
    ///
    /// `abstract class` counts as `abstract` and `final class` as `final`.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::AbstractClass => "abstract",
            Self::FinalClass => "final",
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Trait => "trait",
            Self::Enum => "enum",
        }
    }
}

/// Classification of one physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty after trimming.
    Blank,
    /// Starts with `/`, `*` or `#`.
    Comment,
    /// Any other line not starting with a letter (braces, array items, ...).
    Punctuation,
    /// Exactly `{`.
    BodyOpen,
    /// Unindented `namespace ...`.
    Namespace,
    /// Unindented `use ...`.
    Import,
    /// Type declaration signature.
    Declaration(DeclarationSignature),
    /// Method signature.
    Method,
    /// Any other line starting with a letter.
    Statement,
}

impl LineKind {
    /// Whether the cleaned text starts with an ASCII letter.
    #[must_use]
    pub fn is_word_led(self) -> bool {
        matches!(
            self,
            Self::Namespace | Self::Import | Self::Declaration(_) | Self::Method | Self::Statement
        )
    }
}

/// A classified line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// Trimmed text. Unindented lines additionally have every `;` removed.
    pub text: String,
    /// The raw line starts with a letter in its first column.
    pub top_level: bool,
    /// Classification.
    pub kind: LineKind,
}

impl SourceLine {
    /// Classifies a single raw line.
    #[must_use]
    pub fn classify(raw: &str) -> Self {
        let top_level = starts_with_letter(raw);
        let trimmed = raw.trim();
        let text = if top_level {
            trimmed.replace(';', "")
        } else {
            trimmed.to_owned()
        };
        let kind = kind_of(&text, top_level);
        Self {
            text,
            top_level,
            kind,
        }
    }

    /// Namespace name when this is a namespace statement.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        match self.kind {
            LineKind::Namespace => self.text.strip_prefix(NAMESPACE_PREFIX),
            _ => None,
        }
    }

    /// Imported name when this is an import statement.
    #[must_use]
    pub fn import(&self) -> Option<String> {
        match self.kind {
            LineKind::Import => Some(self.text.replace(IMPORT_PREFIX, "")).filter(|s| !s.is_empty()),
            _ => None,
        }
    }

    /// The line holds a parenthesis, i.e. a call or a signature.
    #[must_use]
    pub fn has_parenthesis(&self) -> bool {
        self.text.contains('(')
    }
}

/// Splits source text into classified lines, one per physical line.
///
/// A trailing newline does not produce an extra line.
#[must_use]
pub fn classify(source: &str) -> Vec<SourceLine> {
    source.lines().map(SourceLine::classify).collect()
}

fn starts_with_letter(text: &str) -> bool {
    text.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
}

fn kind_of(text: &str, top_level: bool) -> LineKind {
    if text.is_empty() {
        return LineKind::Blank;
    }
    if text == BODY_OPEN {
        return LineKind::BodyOpen;
    }
    if let Some(signature) = DeclarationSignature::detect(text) {
        return LineKind::Declaration(signature);
    }
    if is_method(text) {
        return LineKind::Method;
    }
    if top_level && text.starts_with(NAMESPACE_PREFIX) {
        return LineKind::Namespace;
    }
    if top_level && text.starts_with(IMPORT_PREFIX) {
        return LineKind::Import;
    }
    if starts_with_letter(text) {
        return LineKind::Statement;
    }
    if text.starts_with(['/', '*', '#']) {
        return LineKind::Comment;
    }
    LineKind::Punctuation
}

fn is_method(text: &str) -> bool {
    let has_function =
        text.starts_with(FUNCTION_KEYWORD) || text.contains(&format!(" {FUNCTION_KEYWORD}"));
    has_function && text.starts_with(METHOD_LEAD_CHARS)
}
