//! The input AST family, produced by an earlier (out-of-scope) parsing
//! stage. Mutated in place by [`crate::data_types::flatten_data_types`] and
//! [`crate::imports::unwrap_imports`] before being walked read-only by the
//! component normalizers.

use indexmap::IndexMap;

use crate::{
    ident::{Associativity, ConstValue, ExternalIdentifier, Identifier, InfixIdentifier, QualifiedIdentifier},
    location::Location,
};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Module {
    pub name: QualifiedIdentifier,
    pub imports: Vec<Import>,
    pub definitions: Vec<Definition>,
    pub aliases: Vec<Alias>,
    pub data_types: Vec<DataType>,
    pub infix_fns: Vec<Infix>,
}

impl Module {
    pub fn new(name: QualifiedIdentifier) -> Self {
        Self { name, imports: Vec::new(), definitions: Vec::new(), aliases: Vec::new(), data_types: Vec::new(), infix_fns: Vec::new() }
    }
}

/// A module import, before (`exposing`/`exposing_all` as written by the
/// programmer) and after (`exposing` fully enumerated, see
/// [`crate::imports::unwrap_imports`]) normalization mutates it in place.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Import {
    pub module_identifier: QualifiedIdentifier,
    pub alias: Option<QualifiedIdentifier>,
    /// Before unwrapping: the names written after `exposing (...)`.
    /// After unwrapping: every identifier form reachable through this
    /// import (bare, `modName.name`, `shortModName.name`).
    pub exposing: Vec<String>,
    pub exposing_all: bool,
}

impl Import {
    pub fn new(module_identifier: QualifiedIdentifier) -> Self {
        Self { module_identifier, alias: None, exposing: Vec::new(), exposing_all: false }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Definition {
    pub location: Location,
    pub hidden: bool,
    pub name: Identifier,
    pub params: Vec<Pattern>,
    pub expression: Expression,
    pub type_: Option<Type>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Alias {
    pub location: Location,
    pub name: Identifier,
    pub params: Vec<Identifier>,
    /// `None` marks an abstract/external alias with no defining structure
    /// (see the type normalizer's `TNamed` case).
    pub type_: Option<Type>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DataType {
    pub location: Location,
    pub name: Identifier,
    pub hidden: bool,
    pub params: Vec<Identifier>,
    pub options: Vec<DataTypeOption>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DataTypeOption {
    pub location: Location,
    pub hidden: bool,
    pub name: Identifier,
    pub params: Vec<Type>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Infix {
    pub location: Location,
    pub name: InfixIdentifier,
    pub alias: Identifier,
    pub alias_location: Location,
    pub precedence: i32,
    pub associativity: Associativity,
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

/// One element of a flat infix chain: either an operand or an operator
/// symbol, as written before precedence climbing groups the chain into a
/// tree (see `crate::expressions`).
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum BinOpItem {
    Operand(Box<Expression>),
    Operator(InfixIdentifier),
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum Expression {
    Access { location: Location, record: Box<Expression>, field_name: Identifier },
    Accessor { location: Location, field_name: Identifier },
    Apply { location: Location, func: Box<Expression>, args: Vec<Expression> },
    BinOp { location: Location, items: Vec<BinOpItem> },
    Const { location: Location, value: ConstValue },
    Constructor { location: Location, data_name: ExternalIdentifier, option_name: Identifier, args: Vec<Expression> },
    If { location: Location, condition: Box<Expression>, positive: Box<Expression>, negative: Box<Expression> },
    Let { location: Location, pattern: Box<Pattern>, value: Box<Expression>, body: Box<Expression> },
    List { location: Location, items: Vec<Expression> },
    NativeCall { location: Location, name: String, args: Vec<Expression> },
    Record { location: Location, fields: Vec<RecordField> },
    Select { location: Location, condition: Box<Expression>, cases: Vec<SelectCase> },
    Tuple { location: Location, items: Vec<Expression> },
    Update { location: Location, record_name: QualifiedIdentifier, fields: Vec<RecordField> },
    Lambda { location: Location, params: Vec<Pattern>, body: Box<Expression> },
    Negate { location: Location, nested: Box<Expression> },
    Var { location: Location, name: QualifiedIdentifier },
    InfixVar { location: Location, infix: InfixIdentifier },
}

impl Expression {
    pub fn location(&self) -> &Location {
        match self {
            Expression::Access { location, .. }
            | Expression::Accessor { location, .. }
            | Expression::Apply { location, .. }
            | Expression::BinOp { location, .. }
            | Expression::Const { location, .. }
            | Expression::Constructor { location, .. }
            | Expression::If { location, .. }
            | Expression::Let { location, .. }
            | Expression::List { location, .. }
            | Expression::NativeCall { location, .. }
            | Expression::Record { location, .. }
            | Expression::Select { location, .. }
            | Expression::Tuple { location, .. }
            | Expression::Update { location, .. }
            | Expression::Lambda { location, .. }
            | Expression::Negate { location, .. }
            | Expression::Var { location, .. }
            | Expression::InfixVar { location, .. } => location,
        }
    }
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
    PDataOption { location: Location, type_: Option<Type>, name: QualifiedIdentifier, values: Vec<Pattern> },
    PList { location: Location, type_: Option<Type>, items: Vec<Pattern> },
    PNamed { location: Location, type_: Option<Type>, name: Identifier },
    PRecord { location: Location, type_: Option<Type>, fields: Vec<PRecordField> },
    PTuple { location: Location, type_: Option<Type>, items: Vec<Pattern> },
}

impl Pattern {
    pub fn location(&self) -> &Location {
        match self {
            Pattern::PAlias { location, .. }
            | Pattern::PAny { location, .. }
            | Pattern::PCons { location, .. }
            | Pattern::PConst { location, .. }
            | Pattern::PDataOption { location, .. }
            | Pattern::PList { location, .. }
            | Pattern::PNamed { location, .. }
            | Pattern::PRecord { location, .. }
            | Pattern::PTuple { location, .. } => location,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum Type {
    TFunc { location: Location, params: Vec<Type>, return_: Box<Type> },
    TRecord { location: Location, fields: IndexMap<Identifier, Type> },
    TTuple { location: Location, items: Vec<Type> },
    TUnit { location: Location },
    TData { location: Location, name: ExternalIdentifier, args: Vec<Type>, options: Vec<Identifier> },
    TExternal { location: Location, name: ExternalIdentifier, args: Vec<Type> },
    TTypeParameter { location: Location, name: Identifier },
    TNamed { location: Location, name: QualifiedIdentifier, args: Vec<Type> },
}

impl Type {
    pub fn location(&self) -> &Location {
        match self {
            Type::TFunc { location, .. }
            | Type::TRecord { location, .. }
            | Type::TTuple { location, .. }
            | Type::TUnit { location, .. }
            | Type::TData { location, .. }
            | Type::TExternal { location, .. }
            | Type::TTypeParameter { location, .. }
            | Type::TNamed { location, .. } => location,
        }
    }
}
