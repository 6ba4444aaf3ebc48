//! The engine keeps no process-wide state; everything it matches against is
//! listed here.

/// Message carried by [`crate::ExplorerError::SourceNotFound`].
pub const SOURCE_NOT_FOUND_MESSAGE: &str = "There is no such file.";

/// Declaration keyword of a class.
pub const TYPE_CLASS: &str = "class";
/// Declaration keyword of an interface.
pub const TYPE_INTERFACE: &str = "interface";
/// Declaration keyword of a trait.
pub const TYPE_TRAIT: &str = "trait";
/// Declaration keyword of an enum.
pub const TYPE_ENUM: &str = "enum";

/// Prefixes that mark a declaration signature line, checked in order.
pub const DECLARATION_PREFIXES: [&str; 6] = [
    "abstract class ",
    "final class ",
    "class ",
    "interface ",
    "trait ",
    "enum ",
];

/// First letters of every modifier a method signature may start with
/// (`abstract`, `public`/`private`/`protected`, `final`/`function`, `static`).
pub const METHOD_LEAD_CHARS: [char; 4] = ['a', 'p', 'f', 's'];

/// Keyword introducing a function.
pub const FUNCTION_KEYWORD: &str = "function ";

/// A method signature containing this is a constructor.
pub const CONSTRUCTOR_MARKER: &str = " __construct";

/// A method signature containing this is abstract.
pub const ABSTRACT_MARKER: &str = "abstract ";

/// Line that opens the declaration body.
pub const BODY_OPEN: &str = "{";

/// Prefix of the namespace statement.
pub const NAMESPACE_PREFIX: &str = "namespace ";

/// Prefix of an import statement.
pub const IMPORT_PREFIX: &str = "use ";

/// Start of a same-line comment after a member declaration.
pub const TRAILING_COMMENT: &str = " //";

/// Appended to a member whose array literal continues on the next lines.
pub const MULTILINE_ARRAY_MARKER: &str = "...]";

/// Rendering of an empty list in the text view.
pub const EMPTY_LIST_MARKER: &str = "[]";

/// File extensions scanned when no configuration overrides them.
pub const DEFAULT_EXTENSIONS: [&str; 1] = ["php"];
