//! Declaration head analysis.

/// Stands in for an `extends`/`implements` keyword while splitting off the head.
const CLAUSE_MARK: &str = "\0";

/// The declaration line split into its head and inheritance clauses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassHeader {
    head: String,
    tail: String,
    tokens: Vec<String>,
    extends: String,
    implements: Vec<String>,
}

impl ClassHeader {
    /// Parses a declaration line such as
    /// `final class Foo extends Bar implements Baz, Qux`.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim_matches(|c: char| c == ' ' || c == ';').replace("  ", " ");
        let marked = line
            .replace(" implements ", CLAUSE_MARK)
            .replace(" extends ", CLAUSE_MARK);
        let head = marked
            .split(CLAUSE_MARK)
            .next()
            .unwrap_or_default()
            .trim()
            .to_owned();
        if head.is_empty() {
            return Self::default();
        }

        let tail = line.replace(&head, "").trim().to_owned();
        let tokens = head.split(' ').map(str::to_owned).collect();
        let extends = extends_target(&tail);
        let implements = implements_targets(&tail);

        Self {
            head,
            tail,
            tokens,
            extends,
            implements,
        }
    }

    /// Everything before `extends`/`implements`, modifiers included.
    #[must_use]
    pub fn head(&self) -> &str {
        &self.head
    }

    /// The `extends`/`implements` clauses.
    #[must_use]
    pub fn tail(&self) -> &str {
        &self.tail
    }

    /// Head split on single spaces.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Declared name: the last head token.
    #[must_use]
    pub fn name(&self) -> &str {
        self.tokens.last().map_or("", String::as_str)
    }

    /// Declaration keyword: the token before the name.
    ///
    /// A one-token head yields that token.
    #[must_use]
    pub fn keyword(&self) -> &str {
        let skip = self.tokens.len().saturating_sub(2);
        self.tokens.get(skip).map_or("", String::as_str)
    }

    /// Parent type, empty when there is none.
    #[must_use]
    pub fn extends(&self) -> &str {
        &self.extends
    }

    /// Implemented interfaces in declared order.
    #[must_use]
    pub fn implements(&self) -> &[String] {
        &self.implements
    }
}

fn clause_body<'a>(padded: &'a str, keyword: &str) -> &'a str {
    padded.rsplit(keyword).next().unwrap_or_default()
}

fn extends_target(tail: &str) -> String {
    if !tail.contains("extends ") {
        return String::new();
    }
    let padded = format!(" {tail}");
    clause_body(&padded, " extends ")
        .split(' ')
        .next()
        .unwrap_or_default()
        .to_owned()
}

fn implements_targets(tail: &str) -> Vec<String> {
    if !tail.contains("implements ") {
        return Vec::new();
    }
    let padded = format!(" {tail}");
    clause_body(&padded, " implements ")
        .split(',')
        .map(|item| item.trim().split(' ').next().unwrap_or_default().trim().to_owned())
        .collect()
}
