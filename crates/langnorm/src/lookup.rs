//! Name resolution used by the component normalizers.
//!
//! `modules` is the already-processed parsed-module map (imports are
//! normalized — data types flattened, imports unwrapped — before the
//! current module is walked, per the driver's traversal order). Passing
//! `allow_import_hop = false` reproduces the reference algorithm's "modules
//! = nil" recursive call: only the directly imported module is searched,
//! transitive re-exports are not followed.

use ahash::AHashMap;

use crate::{
    ident::{Identifier, InfixIdentifier, QualifiedIdentifier},
    parsed::{Infix, Module, Type},
};

pub type ModuleMap = AHashMap<QualifiedIdentifier, Module>;

/// Resolves a module name to its parsed form, checking `module` itself
/// before falling back to the already-processed import map — `module` is
/// not necessarily present in `modules` yet (the driver inserts it only
/// after this module finishes normalizing).
pub fn module_by_name<'a>(modules: &'a ModuleMap, module: &'a Module, name: &QualifiedIdentifier) -> Option<&'a Module> {
    if *name == module.name { Some(module) } else { modules.get(name) }
}

/// A name resolved to the module that defines it and the definition's own
/// name (usually, but not always, the last segment of the name looked up).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub module_name: QualifiedIdentifier,
    pub definition_name: Identifier,
}

/// First-match lookup: own module first, then the one
/// import (if any) that exposes `name`.
pub fn find_definition(modules: &ModuleMap, module: &Module, name: &str) -> Option<Resolved> {
    find_definition_hop(modules, module, name, true)
}

/// Checks `module.definitions` only, with no import hop at all — the
/// `modules = nil` recursive call the reference algorithm uses to resolve
/// an infix's alias within the infix's own defining module.
pub fn find_definition_local(module: &Module, name: &str) -> Option<Resolved> {
    module.definitions.iter().find(|d| d.name.as_str() == name).map(|def| Resolved {
        module_name: module.name.clone(),
        definition_name: def.name.clone(),
    })
}

fn find_definition_hop(modules: &ModuleMap, module: &Module, name: &str, allow_import_hop: bool) -> Option<Resolved> {
    if let Some(def) = module.definitions.iter().find(|d| d.name.as_str() == name) {
        return Some(Resolved { module_name: module.name.clone(), definition_name: def.name.clone() });
    }
    if !allow_import_hop {
        return None;
    }
    let last_segment = QualifiedIdentifier::new(name).last_segment().to_owned();
    for imp in &module.imports {
        if imp.exposing.iter().any(|e| e == name)
            && let Some(imported) = modules.get(&imp.module_identifier)
        {
            return find_definition_hop(modules, imported, &last_segment, false);
        }
    }
    None
}

/// Ambiguity-aware lookup for `PDataOption` patterns. A
/// local definition is an unambiguous match on its own; otherwise every
/// import exposing `name` contributes a candidate, and the caller decides
/// what to do with zero, one, or many results.
pub fn find_data_option_candidates(modules: &ModuleMap, module: &Module, name: &str) -> Vec<Resolved> {
    if let Some(def) = module.definitions.iter().find(|d| d.name.as_str() == name) {
        return vec![Resolved { module_name: module.name.clone(), definition_name: def.name.clone() }];
    }
    let last_segment = QualifiedIdentifier::new(name).last_segment().to_owned();
    let mut candidates = Vec::new();
    for imp in &module.imports {
        if imp.exposing.iter().any(|e| e == name)
            && let Some(imported) = modules.get(&imp.module_identifier)
            && let Some(def) = imported.definitions.iter().find(|d| d.name.as_str() == last_segment)
        {
            candidates.push(Resolved { module_name: imported.name.clone(), definition_name: def.name.clone() });
        }
    }
    candidates
}

/// Infix lookup, structurally identical to
/// [`find_definition`] but over `InfixFns`.
pub fn find_infix_fn(modules: &ModuleMap, module: &Module, name: &InfixIdentifier) -> Option<(QualifiedIdentifier, Infix)> {
    find_infix_fn_hop(modules, module, name, true)
}

fn find_infix_fn_hop(modules: &ModuleMap, module: &Module, name: &InfixIdentifier, allow_import_hop: bool) -> Option<(QualifiedIdentifier, Infix)> {
    if let Some(inf) = module.infix_fns.iter().find(|i| &i.name == name) {
        return Some((module.name.clone(), inf.clone()));
    }
    if !allow_import_hop {
        return None;
    }
    for imp in &module.imports {
        if imp.exposing.iter().any(|e| e == name.as_str())
            && let Some(imported) = modules.get(&imp.module_identifier)
        {
            return find_infix_fn_hop(modules, imported, name, false);
        }
    }
    None
}

/// Resolve a `TNamed` reference to its defining alias
/// structure, with `args` substituted in. Returns `None` both when no alias
/// by that name is reachable and when it is reachable but arity does not
/// match (e.g. `Pair Int` against `type alias Pair a b = (a, b)`) — the caller cannot tell those
/// apart, which matches the reference's single `type not found` message for
/// both cases.
pub fn find_parsed_type(modules: &ModuleMap, module: &Module, name: &str, args: &[Type]) -> Option<Type> {
    find_parsed_type_hop(modules, module, name, args, true)
}

fn find_parsed_type_hop(modules: &ModuleMap, module: &Module, name: &str, args: &[Type], allow_import_hop: bool) -> Option<Type> {
    if let Some(alias) = module.aliases.iter().find(|a| a.name.as_str() == name) {
        return match &alias.type_ {
            None => Some(Type::TExternal {
                location: alias.location.clone(),
                name: crate::ident::ExternalIdentifier::new(module.name.clone(), alias.name.clone()),
                args: args.to_vec(),
            }),
            Some(t) => crate::types::apply_type_args(t.clone(), args),
        };
    }
    if !allow_import_hop {
        return None;
    }
    let last_segment = QualifiedIdentifier::new(name).last_segment().to_owned();
    for imp in &module.imports {
        if imp.exposing.iter().any(|e| e == name)
            && let Some(imported) = modules.get(&imp.module_identifier)
        {
            return find_parsed_type_hop(modules, imported, &last_segment, args, false);
        }
    }
    None
}
