//! The type normalizer: structural rewrite of parsed types, plus eager
//! unfolding of named alias references with argument substitution.

use indexmap::IndexMap;

use crate::{
    error::{Errors, NormalizeErrorKind},
    ident::{ExternalIdentifier, Identifier, QualifiedIdentifier},
    lookup::{self, ModuleMap},
    normalized as n, parsed as p,
};

/// Substitute `args` into a parsed alias body. Non-parametric
/// shapes (`TFunc`, `TRecord`, `TTuple`, `TUnit`, `TTypeParameter`) ignore
/// `args` entirely and pass through unchanged; the three named-reference
/// shapes require exact arity.
pub fn apply_type_args(t: p::Type, args: &[p::Type]) -> Option<p::Type> {
    match t {
        p::Type::TFunc { .. } | p::Type::TRecord { .. } | p::Type::TTuple { .. } | p::Type::TUnit { .. } | p::Type::TTypeParameter { .. } => Some(t),
        p::Type::TData { location, name, args: old_args, options } => {
            if old_args.len() != args.len() {
                return None;
            }
            Some(p::Type::TData { location, name, args: args.to_vec(), options })
        }
        p::Type::TNamed { location, name, args: old_args } => {
            if old_args.len() != args.len() {
                return None;
            }
            Some(p::Type::TNamed { location, name, args: args.to_vec() })
        }
        p::Type::TExternal { location, name, args: old_args } => {
            if old_args.len() != args.len() {
                return None;
            }
            Some(p::Type::TExternal { location, name, args: args.to_vec() })
        }
    }
}

pub fn normalize_type(modules: &ModuleMap, module: &p::Module, t: Option<p::Type>, errors: &mut Errors) -> Option<n::Type> {
    let t = t?;
    Some(normalize_type_inner(modules, module, t, errors))
}

fn normalize_type_inner(modules: &ModuleMap, module: &p::Module, t: p::Type, errors: &mut Errors) -> n::Type {
    match t {
        p::Type::TFunc { location, params, return_ } => n::Type::TFunc {
            location: location.clone(),
            params: params.into_iter().map(|p| normalize_type_inner(modules, module, p, errors)).collect(),
            return_: Box::new(normalize_type_inner(modules, module, *return_, errors)),
        },
        p::Type::TRecord { location, fields } => {
            let mut out = IndexMap::with_capacity(fields.len());
            for (name, field_type) in fields {
                out.insert(name, normalize_type_inner(modules, module, field_type, errors));
            }
            n::Type::TRecord { location, fields: out }
        }
        p::Type::TTuple { location, items } => {
            n::Type::TTuple { location, items: items.into_iter().map(|i| normalize_type_inner(modules, module, i, errors)).collect() }
        }
        p::Type::TUnit { location } => n::Type::TUnit { location },
        p::Type::TData { location, name, args, .. } => n::Type::TData {
            location,
            name,
            args: args.into_iter().map(|a| normalize_type_inner(modules, module, a, errors)).collect(),
        },
        p::Type::TExternal { location, name, args } => n::Type::TExternal {
            location,
            name,
            args: args.into_iter().map(|a| normalize_type_inner(modules, module, a, errors)).collect(),
        },
        p::Type::TTypeParameter { location, name } => n::Type::TTypeParameter { location, name },
        p::Type::TNamed { location, name, args } => {
            match lookup::find_parsed_type(modules, module, name.as_str(), &args) {
                Some(resolved) => normalize_type_inner(modules, module, resolved, errors),
                None => {
                    errors.push(location.clone(), NormalizeErrorKind::TypeNotFound);
                    n::Type::TExternal {
                        location,
                        name: ExternalIdentifier::new(module.name.clone(), Identifier::new("<unresolved>")),
                        args: args.into_iter().map(|a| normalize_type_inner(modules, module, a, errors)).collect(),
                    }
                }
            }
        }
    }
}
