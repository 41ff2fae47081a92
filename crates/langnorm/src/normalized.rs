//! The output AST family. Mirrors [`crate::parsed`] minus what normalization
//! desugars away: `BinOp`, `Accessor`, `Negate`, `InfixVar`, `TNamed`, and
//! the single `Update` variant (split into [`Expression::UpdateLocal`] and
//! [`Expression::UpdateGlobal`]).

use indexmap::IndexMap;

use crate::{
    ident::{ConstValue, ExternalIdentifier, Identifier, QualifiedIdentifier},
    location::Location,
};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Module {
    pub name: QualifiedIdentifier,
    pub dependencies: Vec<QualifiedIdentifier>,
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Definition {
    pub id: u64,
    pub name: Identifier,
    pub location: Location,
    pub hidden: bool,
    pub params: Vec<Pattern>,
    pub expression: Expression,
    pub type_: Option<Type>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RecordField {
    pub location: Location,
    pub name: Identifier,
    pub value: Expression,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SelectCase {
    pub location: Location,
    pub pattern: Pattern,
    pub expression: Expression,
}

/// A resolved variable reference. Invariant:
/// `module_name` is `Some` iff `definition_name` is `Some` — `None`/`None`
/// means "unresolved at this scope, expected to bind to a local introduced
/// by an enclosing `Let`/`Lambda`/pattern".
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct VarRef {
    pub name: QualifiedIdentifier,
    pub module_name: Option<QualifiedIdentifier>,
    pub definition_name: Option<Identifier>,
}

impl VarRef {
    pub fn unresolved(name: QualifiedIdentifier) -> Self {
        Self { name, module_name: None, definition_name: None }
    }

    pub fn resolved(name: QualifiedIdentifier, module_name: QualifiedIdentifier, definition_name: Identifier) -> Self {
        Self { name, module_name: Some(module_name), definition_name: Some(definition_name) }
    }

    pub fn is_resolved(&self) -> bool {
        self.module_name.is_some() && self.definition_name.is_some()
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum Expression {
    Access { location: Location, record: Box<Expression>, field_name: Identifier },
    Apply { location: Location, func: Box<Expression>, args: Vec<Expression> },
    Const { location: Location, value: ConstValue },
    Constructor { location: Location, data_name: ExternalIdentifier, option_name: Identifier, args: Vec<Expression> },
    If { location: Location, condition: Box<Expression>, positive: Box<Expression>, negative: Box<Expression> },
    Let { location: Location, pattern: Box<Pattern>, value: Box<Expression>, body: Box<Expression> },
    List { location: Location, items: Vec<Expression> },
    NativeCall { location: Location, name: String, args: Vec<Expression> },
    Record { location: Location, fields: Vec<RecordField> },
    Select { location: Location, condition: Box<Expression>, cases: Vec<SelectCase> },
    Tuple { location: Location, items: Vec<Expression> },
    UpdateLocal { location: Location, record_name: Identifier, fields: Vec<RecordField> },
    UpdateGlobal { location: Location, module_name: QualifiedIdentifier, definition_name: Identifier, fields: Vec<RecordField> },
    Lambda { location: Location, params: Vec<Pattern>, body: Box<Expression> },
    Var { location: Location, var: VarRef },
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PRecordField {
    pub location: Location,
    pub name: Identifier,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum Pattern {
    PAlias { location: Location, type_: Option<Type>, alias: Identifier, nested: Box<Pattern> },
    PAny { location: Location, type_: Option<Type> },
    PCons { location: Location, type_: Option<Type>, head: Box<Pattern>, tail: Box<Pattern> },
    PConst { location: Location, type_: Option<Type>, value: ConstValue },
    PDataOption { location: Location, type_: Option<Type>, module_name: QualifiedIdentifier, definition_name: Identifier, values: Vec<Pattern> },
    PList { location: Location, type_: Option<Type>, items: Vec<Pattern> },
    PNamed { location: Location, type_: Option<Type>, name: Identifier },
    PRecord { location: Location, type_: Option<Type>, fields: Vec<PRecordField> },
    PTuple { location: Location, type_: Option<Type>, items: Vec<Pattern> },
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum Type {
    TFunc { location: Location, params: Vec<Type>, return_: Box<Type> },
    TRecord { location: Location, fields: IndexMap<Identifier, Type> },
    TTuple { location: Location, items: Vec<Type> },
    TUnit { location: Location },
    TData { location: Location, name: ExternalIdentifier, args: Vec<Type> },
    TExternal { location: Location, name: ExternalIdentifier, args: Vec<Type> },
    TTypeParameter { location: Location, name: Identifier },
}
