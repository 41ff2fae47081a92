//! Entry point: recursively normalizes a target module and every module it
//! transitively imports, memoizing on the output map so a module already
//! normalized is never revisited.

use crate::{
    data_types::flatten_data_types,
    definitions::normalize_definition,
    error::{Errors, NormalizeError, NormalizeErrorKind},
    ident::QualifiedIdentifier,
    ids::DefinitionIdAllocator,
    imports::unwrap_imports,
    lookup::ModuleMap,
    normalized,
};

/// Normalizes `target_name` and everything it imports, writing results into
/// `out`. Returns the accumulated user-facing errors across every module
/// visited, or a fatal [`NormalizeError::ImportCycle`] if the import graph
/// rooted at `target_name` is not a DAG.
pub fn normalize(
    target_name: &QualifiedIdentifier,
    modules: &mut ModuleMap,
    out: &mut ahash::AHashMap<QualifiedIdentifier, normalized::Module>,
    ids: &mut DefinitionIdAllocator,
) -> Result<Errors, NormalizeError> {
    let mut errors = Errors::new();
    let mut visiting = Vec::new();
    normalize_inner(target_name, modules, out, ids, &mut errors, &mut visiting)?;
    Ok(errors)
}

fn normalize_inner(
    target_name: &QualifiedIdentifier,
    modules: &mut ModuleMap,
    out: &mut ahash::AHashMap<QualifiedIdentifier, normalized::Module>,
    ids: &mut DefinitionIdAllocator,
    errors: &mut Errors,
    visiting: &mut Vec<QualifiedIdentifier>,
) -> Result<(), NormalizeError> {
    if out.contains_key(target_name) {
        return Ok(());
    }

    if let Some(pos) = visiting.iter().position(|m| m == target_name) {
        let mut chain = visiting[pos..].to_vec();
        chain.push(target_name.clone());
        return Err(NormalizeError::new(crate::location::Location::synthetic(), NormalizeErrorKind::ImportCycle { chain }));
    }

    let Some(mut module) = modules.remove(target_name) else {
        // Unknown module name: nothing to normalize, nothing to report —
        // the caller is responsible for supplying a complete module map.
        return Ok(());
    };

    visiting.push(target_name.clone());
    for imp in module.imports.clone() {
        if let Err(e) = normalize_inner(&imp.module_identifier, modules, out, ids, errors, visiting) {
            modules.insert(target_name.clone(), module);
            visiting.pop();
            return Err(e);
        }
    }
    visiting.pop();

    flatten_data_types(&mut module);
    unwrap_imports(&mut module, modules);

    let mut normalized_module =
        normalized::Module { name: module.name.clone(), dependencies: Vec::new(), definitions: Vec::new() };
    for imp in &module.imports {
        normalized_module.dependencies.push(imp.module_identifier.clone());
    }
    for def in module.definitions.clone() {
        normalized_module.definitions.push(normalize_definition(modules, &module, def, ids, errors));
    }

    modules.insert(target_name.clone(), module);
    out.insert(target_name.clone(), normalized_module);

    Ok(())
}
