use std::fmt;

use crate::{ident::QualifiedIdentifier, location::Location};

/// A user-facing diagnostic raised while normalizing a module.
///
/// Every variant other than [`NormalizeError::ImportCycle`] carries the exact
/// message text the downstream compiler asserts on verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizeError {
    pub location: Location,
    pub kind: NormalizeErrorKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NormalizeErrorKind {
    DataConstructorNotFound,
    AmbiguousDataConstructor { name: String, candidates: Vec<String> },
    InfixOpNotFound,
    InfixDefinitionNotFound,
    InfixAliasNotFound,
    TypeNotFound,
    /// Not one of the six fixed diagnostic messages above: raised when the import
    /// graph rooted at the driver's target module contains a cycle. Fatal —
    /// never accumulated alongside the other kinds (see `driver::normalize`).
    ImportCycle { chain: Vec<QualifiedIdentifier> },
}

impl NormalizeError {
    pub fn new(location: Location, kind: NormalizeErrorKind) -> Self {
        Self { location, kind }
    }
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            NormalizeErrorKind::DataConstructorNotFound => write!(f, "data constructor not found"),
            NormalizeErrorKind::AmbiguousDataConstructor { name, candidates } => write!(
                f,
                "ambiguous data constructor `{name}`, it can be one of {}. Use import or qualified identifer to \
                 clarify which one to use",
                candidates.join(", ")
            ),
            NormalizeErrorKind::InfixOpNotFound => write!(f, "infix op not found"),
            NormalizeErrorKind::InfixDefinitionNotFound => write!(f, "infix definition not found"),
            NormalizeErrorKind::InfixAliasNotFound => write!(f, "infix alias not found"),
            NormalizeErrorKind::TypeNotFound => write!(f, "type not found"),
            NormalizeErrorKind::ImportCycle { chain } => {
                write!(f, "import cycle detected: ")?;
                for (i, name) in chain.iter().enumerate() {
                    if i > 0 {
                        write!(f, " -> ")?;
                    }
                    write!(f, "{name}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for NormalizeError {}

/// Accumulates non-fatal diagnostics across a definition's subtrees.
///
/// Passed by `&mut` through every normalizer function so that a failure deep
/// in one branch (say, an unresolved type alias in a pattern's declared
/// type) does not prevent normalization of its siblings from being attempted
/// and reported too.
#[derive(Debug, Default)]
pub struct Errors(Vec<NormalizeError>);

impl Errors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, location: Location, kind: NormalizeErrorKind) {
        self.0.push(NormalizeError::new(location, kind));
    }

    pub fn extend(&mut self, other: Errors) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<NormalizeError> {
        self.0
    }
}
