//! Assembles a normalized top-level definition out of the three component
//! normalizers, tagging it with a fresh id from the caller-owned allocator.

use crate::{
    error::Errors,
    expressions::normalize_expression,
    ids::DefinitionIdAllocator,
    lookup::ModuleMap,
    normalized as n, parsed as p,
    patterns::normalize_pattern,
    types::normalize_type,
};

pub fn normalize_definition(
    modules: &ModuleMap,
    module: &p::Module,
    def: p::Definition,
    ids: &mut DefinitionIdAllocator,
    errors: &mut Errors,
) -> n::Definition {
    n::Definition {
        id: ids.next(),
        name: def.name,
        location: def.location,
        hidden: def.hidden,
        params: def.params.into_iter().map(|p| normalize_pattern(modules, module, p, errors)).collect(),
        expression: normalize_expression(modules, module, def.expression, errors),
        type_: normalize_type(modules, module, def.type_, errors),
    }
}
