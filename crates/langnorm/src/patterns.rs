//! Structural rewrite of parsed patterns into their normalized form.
//!
//! Every variant is a straightforward element-wise translation except
//! `PDataOption`, which resolves the constructor name to its defining
//! module and definition. That lookup is ambiguity-aware: a local
//! definition wins outright, otherwise every import exposing the name
//! contributes a candidate and the caller is told if there was more than
//! one.

use crate::{
    error::{Errors, NormalizeErrorKind},
    lookup::{self, ModuleMap},
    normalized as n, parsed as p,
    types::normalize_type,
};

pub fn normalize_pattern(modules: &ModuleMap, module: &p::Module, pattern: p::Pattern, errors: &mut Errors) -> n::Pattern {
    match pattern {
        p::Pattern::PAlias { location, type_, alias, nested } => n::Pattern::PAlias {
            location: location.clone(),
            type_: normalize_type(modules, module, type_, errors),
            alias,
            nested: Box::new(normalize_pattern(modules, module, *nested, errors)),
        },
        p::Pattern::PAny { location, type_ } => {
            n::Pattern::PAny { location: location.clone(), type_: normalize_type(modules, module, type_, errors) }
        }
        p::Pattern::PCons { location, type_, head, tail } => n::Pattern::PCons {
            location: location.clone(),
            type_: normalize_type(modules, module, type_, errors),
            head: Box::new(normalize_pattern(modules, module, *head, errors)),
            tail: Box::new(normalize_pattern(modules, module, *tail, errors)),
        },
        p::Pattern::PConst { location, type_, value } => {
            n::Pattern::PConst { location: location.clone(), type_: normalize_type(modules, module, type_, errors), value }
        }
        p::Pattern::PDataOption { location, type_, name, values } => {
            let type_ = normalize_type(modules, module, type_, errors);
            let values: Vec<_> = values.into_iter().map(|v| normalize_pattern(modules, module, v, errors)).collect();
            let candidates = lookup::find_data_option_candidates(modules, module, name.as_str());
            match candidates.as_slice() {
                [] => {
                    errors.push(location.clone(), NormalizeErrorKind::DataConstructorNotFound);
                    n::Pattern::PAny { location, type_: None }
                }
                [one] => n::Pattern::PDataOption {
                    location,
                    type_,
                    module_name: one.module_name.clone(),
                    definition_name: one.definition_name.clone(),
                    values,
                },
                many => {
                    let candidate_names = many.iter().map(|r| format!("{}.{}", r.module_name, r.definition_name)).collect();
                    errors.push(
                        location.clone(),
                        NormalizeErrorKind::AmbiguousDataConstructor { name: name.as_str().to_owned(), candidates: candidate_names },
                    );
                    n::Pattern::PAny { location, type_: None }
                }
            }
        }
        p::Pattern::PList { location, type_, items } => n::Pattern::PList {
            location: location.clone(),
            type_: normalize_type(modules, module, type_, errors),
            items: items.into_iter().map(|i| normalize_pattern(modules, module, i, errors)).collect(),
        },
        p::Pattern::PNamed { location, type_, name } => {
            n::Pattern::PNamed { location: location.clone(), type_: normalize_type(modules, module, type_, errors), name }
        }
        p::Pattern::PRecord { location, type_, fields } => n::Pattern::PRecord {
            location: location.clone(),
            type_: normalize_type(modules, module, type_, errors),
            fields: fields.into_iter().map(|f| n::PRecordField { location: f.location, name: f.name }).collect(),
        },
        p::Pattern::PTuple { location, type_, items } => n::Pattern::PTuple {
            location: location.clone(),
            type_: normalize_type(modules, module, type_, errors),
            items: items.into_iter().map(|i| normalize_pattern(modules, module, i, errors)).collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ident::{Identifier, QualifiedIdentifier}, location::Location};

    fn module_with_def(name: &str) -> p::Module {
        let mut m = p::Module::new(QualifiedIdentifier::new("M"));
        m.definitions.push(p::Definition {
            location: Location::dummy(),
            hidden: false,
            name: Identifier::new(name),
            params: vec![],
            expression: p::Expression::Const { location: Location::dummy(), value: crate::ident::ConstValue::Unit },
            type_: None,
        });
        m
    }

    #[test]
    fn local_constructor_is_unambiguous() {
        let module = module_with_def("Nil");
        let modules = ModuleMap::default();
        let pattern = p::Pattern::PDataOption {
            location: Location::dummy(),
            type_: None,
            name: QualifiedIdentifier::new("Nil"),
            values: vec![],
        };
        let mut errors = Errors::new();
        let result = normalize_pattern(&modules, &module, pattern, &mut errors);
        assert!(errors.is_empty());
        match result {
            n::Pattern::PDataOption { definition_name, .. } => assert_eq!(definition_name.as_str(), "Nil"),
            other => panic!("expected PDataOption, got {other:?}"),
        }
    }

    #[test]
    fn missing_constructor_is_not_found() {
        let module = p::Module::new(QualifiedIdentifier::new("M"));
        let modules = ModuleMap::default();
        let pattern = p::Pattern::PDataOption {
            location: Location::dummy(),
            type_: None,
            name: QualifiedIdentifier::new("Nope"),
            values: vec![],
        };
        let mut errors = Errors::new();
        normalize_pattern(&modules, &module, pattern, &mut errors);
        assert_eq!(errors.into_vec().len(), 1);
    }
}
