//! The extracted fact record and its classification queries.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use crate::constants::{
    ABSTRACT_MARKER, CONSTRUCTOR_MARKER, TYPE_CLASS, TYPE_ENUM, TYPE_INTERFACE, TYPE_TRAIT,
};
use crate::error::ExplorerError;
use crate::header::ClassHeader;
use crate::line::{self, LineKind, SourceLine};
use crate::members::BodyMembers;

/// Kind of the declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    /// `class`
    Class,
    /// `interface`
    Interface,
    /// `trait`
    Trait,
    /// `enum`
    Enum,
}

impl DeclarationKind {
    /// Parses a declaration keyword.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            TYPE_CLASS => Some(Self::Class),
            TYPE_INTERFACE => Some(Self::Interface),
            TYPE_TRAIT => Some(Self::Trait),
            TYPE_ENUM => Some(Self::Enum),
            _ => None,
        }
    }

    /// The keyword as written in source.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Class => TYPE_CLASS,
            Self::Interface => TYPE_INTERFACE,
            Self::Trait => TYPE_TRAIT,
            Self::Enum => TYPE_ENUM,
        }
    }
}

impl std::fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural facts of one inspected source file.
///
/// Built once by [`SourceUnit::extract`] or [`SourceUnit::from_source`] and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    lines_count: usize,
    namespace: String,
    header: ClassHeader,
    imports: Vec<String>,
    members: BodyMembers,
    methods: Vec<String>,
    declaration_counts: BTreeMap<&'static str, usize>,
}

impl SourceUnit {
    /// Reads and inspects a file.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::SourceNotFound`] if the path is not a
    /// readable file.
    pub fn extract(path: impl AsRef<Path>) -> Result<Self, ExplorerError> {
        let path = path.as_ref();
        let not_found = || ExplorerError::SourceNotFound {
            path: path.to_path_buf(),
        };

        if !path.is_file() {
            return Err(not_found());
        }
        let bytes = std::fs::read(path).map_err(|e| {
            debug!("Failed to read {}: {e}", path.display());
            not_found()
        })?;

        let unit = Self::from_source(&String::from_utf8_lossy(&bytes));
        debug!(
            "Extracted {}: {} lines, declarations {:?}",
            path.display(),
            unit.lines_count,
            unit.declaration_counts
        );
        Ok(unit)
    }

    /// Inspects in-memory source text.
    #[must_use]
    pub fn from_source(source: &str) -> Self {
        let lines = line::classify(source);
        let lines_count = lines.len();

        let mut namespace: Option<&str> = None;
        let mut main: Vec<&SourceLine> = Vec::new();
        let mut body: Vec<&SourceLine> = Vec::new();
        let mut methods = Vec::new();
        let mut declaration_counts = BTreeMap::new();

        for line in &lines {
            match line.kind {
                LineKind::Blank => continue,
                LineKind::Namespace => {
                    namespace = namespace.or_else(|| line.namespace());
                }
                LineKind::Method => methods.push(line.text.clone()),
                LineKind::Declaration(signature) => {
                    *declaration_counts.entry(signature.keyword()).or_insert(0) += 1;
                }
                _ => {}
            }
            if line.top_level {
                main.push(line);
            }
            body.push(line);
        }

        if is_atypical(&declaration_counts) {
            debug!("Atypical source, declarations {:?}", declaration_counts);
            main.clear();
            body.clear();
            methods.clear();
        }

        let header = main
            .last()
            .map(|line| ClassHeader::parse(&line.text))
            .unwrap_or_default();
        let imports = main.iter().filter_map(|line| line.import()).collect();
        let members = BodyMembers::scan(body);

        Self {
            lines_count,
            namespace: namespace.unwrap_or_default().to_owned(),
            header,
            imports,
            members,
            methods,
            declaration_counts,
        }
    }

    /// Number of physical lines, blank ones included.
    #[must_use]
    pub fn lines_count(&self) -> usize {
        self.lines_count
    }

    /// Declared namespace, empty when there is none.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Declared type name without modifiers.
    #[must_use]
    pub fn class_name(&self) -> &str {
        self.header.name()
    }

    /// Declaration head as written, modifiers included
    /// (`final class Foo`).
    #[must_use]
    pub fn full_class_name(&self) -> &str {
        self.header.head()
    }

    /// `\Namespace\Name`.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        format!("\\{}\\{}", self.namespace(), self.class_name())
    }

    /// Declaration keyword as found in the head, empty for atypical files.
    #[must_use]
    pub fn class_type(&self) -> &str {
        self.header.keyword()
    }

    /// Typed form of [`Self::class_type`].
    #[must_use]
    pub fn declaration_kind(&self) -> Option<DeclarationKind> {
        DeclarationKind::from_keyword(self.class_type())
    }

    /// Head tokens of the declaration line.
    #[must_use]
    pub fn class_head_tokens(&self) -> &[String] {
        self.header.tokens()
    }

    /// `extends`/`implements` clauses of the declaration line.
    #[must_use]
    pub fn class_tail(&self) -> &str {
        self.header.tail()
    }

    /// Imported names in file order.
    #[must_use]
    pub fn imports(&self) -> &[String] {
        &self.imports
    }

    /// Parent type, empty when there is none.
    #[must_use]
    pub fn extends(&self) -> &str {
        self.header.extends()
    }

    /// Implemented interfaces in declared order.
    #[must_use]
    pub fn implements(&self) -> &[String] {
        self.header.implements()
    }

    /// Body-level constants.
    #[must_use]
    pub fn constants(&self) -> &[String] {
        &self.members.constants
    }

    /// Body-level properties.
    #[must_use]
    pub fn properties(&self) -> &[String] {
        &self.members.properties
    }

    /// Enum cases.
    #[must_use]
    pub fn enum_cases(&self) -> &[String] {
        &self.members.enum_cases
    }

    /// Method signatures in file order.
    #[must_use]
    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    /// How often each declaration keyword starts a line.
    #[must_use]
    pub fn declaration_signature_counts(&self) -> &BTreeMap<&'static str, usize> {
        &self.declaration_counts
    }

    /// The file does not hold exactly one unambiguous declaration.
    #[must_use]
    pub fn is_atypical_class(&self) -> bool {
        is_atypical(&self.declaration_counts)
    }

    /// Explicitly or implicitly abstract.
    #[must_use]
    pub fn is_abstract(&self) -> bool {
        self.is_explicit_abstract() || self.is_implicit_abstract()
    }

    /// The head says `abstract`.
    #[must_use]
    pub fn is_explicit_abstract(&self) -> bool {
        self.header.head().contains("abstract")
    }

    /// Abstract because of abstract methods.
    #[must_use]
    pub fn is_implicit_abstract(&self) -> bool {
        self.has_abstract_methods()
    }

    /// The head says `final`.
    #[must_use]
    pub fn is_final(&self) -> bool {
        self.header.head().contains("final")
    }

    /// The head says `readonly`.
    #[must_use]
    pub fn is_readonly(&self) -> bool {
        self.header.head().contains("readonly")
    }

    /// Declared with `class`.
    #[must_use]
    pub fn is_class(&self) -> bool {
        self.declaration_kind() == Some(DeclarationKind::Class)
    }

    /// Declared with `interface`.
    #[must_use]
    pub fn is_interface(&self) -> bool {
        self.declaration_kind() == Some(DeclarationKind::Interface)
    }

    /// Declared with `trait`.
    #[must_use]
    pub fn is_trait(&self) -> bool {
        self.declaration_kind() == Some(DeclarationKind::Trait)
    }

    /// Declared with `enum`.
    #[must_use]
    pub fn is_enum(&self) -> bool {
        self.declaration_kind() == Some(DeclarationKind::Enum)
    }

    /// Some method signature is a constructor.
    #[must_use]
    pub fn has_constructor(&self) -> bool {
        self.has_method_containing(CONSTRUCTOR_MARKER)
    }

    /// Some method signature is abstract.
    #[must_use]
    pub fn has_abstract_methods(&self) -> bool {
        self.has_method_containing(ABSTRACT_MARKER)
    }

    fn has_method_containing(&self, needle: &str) -> bool {
        self.methods.iter().any(|m| m.contains(needle))
    }
}

/// More than one declaration keyword, a repeated keyword, or none at all.
fn is_atypical(counts: &BTreeMap<&'static str, usize>) -> bool {
    let max = counts.values().copied().max().unwrap_or(0);
    max > 1 || counts.is_empty() || counts.len() > 1
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE_CASE: &str = "<?php

namespace App\\Fixtures;

use App\\Fixtures\\Nested\\UseIt;

class BaseCase
{
    const HELLO = 'world';
    private string $line;

    public function __construct()
    {
        $this->line = UseIt::WORLD;
    }
}
";

    #[test]
    fn base_case() {
        let unit = SourceUnit::from_source(BASE_CASE);
        assert!(!unit.is_atypical_class());
        assert_eq!(unit.lines_count(), 16);
        assert_eq!(unit.namespace(), "App\\Fixtures");
        assert_eq!(unit.imports(), ["App\\Fixtures\\Nested\\UseIt"]);
        assert_eq!(unit.class_head_tokens(), ["class", "BaseCase"]);
        assert_eq!(unit.constants(), ["const HELLO = 'world'"]);
        assert_eq!(unit.properties(), ["private string $line"]);
        assert_eq!(unit.methods(), ["public function __construct()"]);
        assert_eq!(unit.declaration_kind(), Some(DeclarationKind::Class));
        assert!(unit.is_class());
        assert!(unit.has_constructor());
        assert_eq!(unit.qualified_name(), "\\App\\Fixtures\\BaseCase");
    }

    #[test]
    fn class_plus_trait_is_atypical() {
        let unit = SourceUnit::from_source("class A\n{\n}\ntrait B\n{\n}\n");
        assert!(unit.is_atypical_class());
        assert_eq!(unit.declaration_signature_counts().get("class"), Some(&1));
        assert_eq!(unit.declaration_signature_counts().get("trait"), Some(&1));
    }

    #[test]
    fn repeated_keyword_is_atypical() {
        let unit = SourceUnit::from_source("class A\n{\n}\nclass B\n{\n}\n");
        assert!(unit.is_atypical_class());
        assert_eq!(unit.declaration_signature_counts().get("class"), Some(&2));
    }

    #[test]
    fn atypical_unit_is_empty_but_counts_lines() {
        let unit = SourceUnit::from_source(
            "namespace App;\nuse Foo;\nclass A\n{\n    const X = 1;\n    public function a()\n    {\n    }\n}\nenum B\n{\n}\n",
        );
        assert!(unit.is_atypical_class());
        assert_eq!(unit.lines_count(), 12);
        assert_eq!(unit.namespace(), "App");
        assert!(unit.imports().is_empty());
        assert!(unit.class_head_tokens().is_empty());
        assert!(unit.constants().is_empty());
        assert!(unit.methods().is_empty());
        assert_eq!(unit.class_name(), "");
        assert_eq!(unit.class_type(), "");
        assert_eq!(unit.declaration_kind(), None);
        assert_eq!(unit.qualified_name(), "\\App\\");
    }

    #[test]
    fn no_declaration_is_atypical() {
        let unit = SourceUnit::from_source("<?php\n\n$x = 1;\n");
        assert!(unit.is_atypical_class());
        assert_eq!(unit.lines_count(), 3);
        assert!(unit.declaration_signature_counts().is_empty());
    }

    #[test]
    fn abstract_class_tallies_under_abstract() {
        let unit = SourceUnit::from_source("abstract class A\n{\n    abstract public function a();\n}\n");
        assert!(!unit.is_atypical_class());
        assert_eq!(unit.declaration_signature_counts().get("abstract"), Some(&1));
        assert!(unit.is_explicit_abstract());
        assert!(unit.is_implicit_abstract());
        assert!(unit.is_abstract());
        assert!(unit.is_class());
    }

    #[test]
    fn implicit_abstract_without_modifier() {
        let unit =
            SourceUnit::from_source("class A\n{\n    abstract protected function a(): void;\n}\n");
        assert!(!unit.is_explicit_abstract());
        assert!(unit.is_implicit_abstract());
        assert!(unit.is_abstract());
        assert_eq!(unit.methods(), ["abstract protected function a(): void;"]);
    }

    #[test]
    fn first_namespace_wins() {
        let unit = SourceUnit::from_source("namespace First;\nnamespace Second;\nclass A\n{\n}\n");
        assert_eq!(unit.namespace(), "First");
    }

    #[test]
    fn final_class_with_parents() {
        let unit = SourceUnit::from_source(
            "final class A extends B implements C, D\n{\n}\n",
        );
        assert!(unit.is_final());
        assert!(!unit.is_readonly());
        assert_eq!(unit.full_class_name(), "final class A");
        assert_eq!(unit.class_tail(), "extends B implements C, D");
        assert_eq!(unit.extends(), "B");
        assert_eq!(unit.implements(), ["C", "D"]);
    }

    #[test]
    fn members_stop_at_first_method() {
        let unit = SourceUnit::from_source(
            "class A\n{\n    const X = 1;\n    public function a()\n    {\n    }\n    const Y = 2;\n    private $late;\n}\n",
        );
        assert_eq!(unit.constants(), ["const X = 1"]);
        assert!(unit.properties().is_empty());
    }

    #[test]
    fn declaration_kind_round_trips_keyword() {
        for kind in [
            DeclarationKind::Class,
            DeclarationKind::Interface,
            DeclarationKind::Trait,
            DeclarationKind::Enum,
        ] {
            assert_eq!(DeclarationKind::from_keyword(kind.as_str()), Some(kind));
        }
        assert_eq!(DeclarationKind::from_keyword("abstract"), None);
    }
}
