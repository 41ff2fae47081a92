//! Semantic normalization pass for a small ML-family functional language.
//!
//! Consumes a set of parsed modules and produces a set of normalized
//! modules in which every identifier is resolved to the module and
//! definition that introduces it, data types are expanded into alias plus
//! constructor-function definitions, imports are flattened into every
//! visible name form, infix expressions are rebuilt as nested function
//! applications by precedence, accessor/negate sugar is desugared, record
//! updates are routed to their local or global form, and named type aliases
//! are eagerly unfolded.
//!
//! [`driver::normalize`] is the single entry point.

pub mod data_types;
pub mod definitions;
pub mod driver;
pub mod error;
pub mod expressions;
pub mod ident;
pub mod ids;
pub mod imports;
pub mod location;
pub mod lookup;
pub mod normalized;
pub mod parsed;
pub mod patterns;
pub mod types;

pub use driver::normalize;
pub use error::{NormalizeError, NormalizeErrorKind};
pub use ids::DefinitionIdAllocator;
pub use lookup::ModuleMap;
