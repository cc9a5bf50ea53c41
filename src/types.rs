use serde::Deserialize;

/// What the parser does when a library appears on the left-hand side of
/// more than one line.
///
/// - `Overwrite`: the later line replaces the dependency set; the library
///   keeps the position of its first declaration (default behaviour).
/// - `Reject`: the second declaration fails the parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RedeclarationPolicy {
    Overwrite,
    Reject,
}

impl Default for RedeclarationPolicy {
    fn default() -> Self {
        RedeclarationPolicy::Overwrite
    }
}
