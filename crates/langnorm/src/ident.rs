use std::{fmt, sync::Arc};

macro_rules! interned_identifier {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        pub struct $name(Arc<str>);

        impl $name {
            pub fn new(s: impl Into<Arc<str>>) -> Self {
                Self(s.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::new(s)
            }
        }
    };
}

interned_identifier!(Identifier, "An unqualified name, e.g. `foo`.");
interned_identifier!(QualifiedIdentifier, "A dot-separated name, e.g. `Pkg.Mod.foo`; may be unqualified.");
interned_identifier!(InfixIdentifier, "An operator symbol, e.g. `+`, `|>`.");

impl QualifiedIdentifier {
    /// The substring after the last `.`, or the whole name if there is none.
    pub fn last_segment(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }
}

/// A canonical `(ModuleName, Identifier)` pair, formatted as `ModuleName.Identifier`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ExternalIdentifier {
    pub module: QualifiedIdentifier,
    pub name: Identifier,
}

impl ExternalIdentifier {
    pub fn new(module: QualifiedIdentifier, name: Identifier) -> Self {
        Self { module, name }
    }
}

impl fmt::Display for ExternalIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.module, self.name)
    }
}

/// Declared fixity of a user-defined infix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Associativity {
    Left,
    Right,
    /// Treated identically to `Right` during precedence climbing — see
    /// the section on shunting-yard precedence climbing in the expression normalizer.
    Non,
}

/// A literal value shared verbatim between the parsed and normalized trees.
/// Normalization never inspects or evaluates these — constant folding is out of scope.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ConstValue {
    Unit,
    Int(i64),
    Float(f64),
    Char(char),
    Str(Arc<str>),
}
