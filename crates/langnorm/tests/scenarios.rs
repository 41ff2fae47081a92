//! End-to-end scenarios run through the public `normalize` entry point.

use langnorm::ident::{Associativity, ConstValue, Identifier, InfixIdentifier, QualifiedIdentifier};
use langnorm::location::Location;
use langnorm::lookup::ModuleMap;
use langnorm::normalized;
use langnorm::parsed::{
    BinOpItem, DataType, DataTypeOption, Definition, Expression, Import, Infix, Module, RecordField, Type,
};
use langnorm::DefinitionIdAllocator;
use pretty_assertions::assert_eq;

fn def(name: &str, expr: Expression) -> Definition {
    Definition { location: Location::synthetic(), hidden: false, name: Identifier::new(name), params: vec![], expression: expr, type_: None }
}

// ===== S1: data type expansion =====

#[test]
fn s1_maybe_expands_and_some_applies_constructor() {
    let mut m = Module::new(QualifiedIdentifier::new("M"));
    m.data_types.push(DataType {
        location: Location::synthetic(),
        name: Identifier::new("Maybe"),
        hidden: false,
        params: vec![Identifier::new("a")],
        options: vec![
            DataTypeOption { location: Location::synthetic(), hidden: false, name: Identifier::new("None"), params: vec![] },
            DataTypeOption {
                location: Location::synthetic(),
                hidden: false,
                name: Identifier::new("Some"),
                params: vec![Type::TTypeParameter { location: Location::synthetic(), name: Identifier::new("a") }],
            },
        ],
    });
    m.definitions.push(def(
        "useSome",
        Expression::Apply {
            location: Location::synthetic(),
            func: Box::new(Expression::Var { location: Location::synthetic(), name: QualifiedIdentifier::new("Some") }),
            args: vec![Expression::Const { location: Location::synthetic(), value: ConstValue::Int(1) }],
        },
    ));

    let mut modules = ModuleMap::default();
    modules.insert(m.name.clone(), m);
    let mut out = ahash::AHashMap::default();
    let mut ids = DefinitionIdAllocator::new();
    let errors = langnorm::normalize(&QualifiedIdentifier::new("M"), &mut modules, &mut out, &mut ids).expect("no cycle");
    assert!(errors.into_vec().is_empty());

    let normalized = out.get(&QualifiedIdentifier::new("M")).unwrap();
    assert!(normalized.definitions.iter().any(|d| d.name.as_str() == "None"));
    let some = normalized.definitions.iter().find(|d| d.name.as_str() == "Some").unwrap();
    assert_eq!(some.params.len(), 1);

    let use_some = normalized.definitions.iter().find(|d| d.name.as_str() == "useSome").unwrap();
    match &use_some.expression {
        normalized::Expression::Apply { func, .. } => match func.as_ref() {
            normalized::Expression::Var { var, .. } => {
                assert_eq!(var.definition_name.as_ref().unwrap().as_str(), "Some");
            }
            other => panic!("expected Var, got {other:?}"),
        },
        other => panic!("expected Apply, got {other:?}"),
    }
}

// ===== S2: precedence climbing over a three-operator chain =====

#[test]
fn s2_precedence_and_left_associativity_combine() {
    let mut m = Module::new(QualifiedIdentifier::new("M"));
    m.infix_fns.push(Infix {
        location: Location::synthetic(),
        name: InfixIdentifier::new("+"),
        alias: Identifier::new("plus"),
        alias_location: Location::synthetic(),
        precedence: 6,
        associativity: Associativity::Left,
    });
    m.infix_fns.push(Infix {
        location: Location::synthetic(),
        name: InfixIdentifier::new("*"),
        alias: Identifier::new("times"),
        alias_location: Location::synthetic(),
        precedence: 7,
        associativity: Associativity::Left,
    });
    m.definitions.push(def("plus", Expression::Const { location: Location::synthetic(), value: ConstValue::Unit }));
    m.definitions.push(def("times", Expression::Const { location: Location::synthetic(), value: ConstValue::Unit }));

    let c = |n: i64| Expression::Const { location: Location::synthetic(), value: ConstValue::Int(n) };
    // 1 + 2 * 3 + 4
    let items = vec![
        BinOpItem::Operand(Box::new(c(1))),
        BinOpItem::Operator(InfixIdentifier::new("+")),
        BinOpItem::Operand(Box::new(c(2))),
        BinOpItem::Operator(InfixIdentifier::new("*")),
        BinOpItem::Operand(Box::new(c(3))),
        BinOpItem::Operator(InfixIdentifier::new("+")),
        BinOpItem::Operand(Box::new(c(4))),
    ];
    m.definitions.push(def("result", Expression::BinOp { location: Location::synthetic(), items }));

    let mut modules = ModuleMap::default();
    modules.insert(m.name.clone(), m);
    let mut out = ahash::AHashMap::default();
    let mut ids = DefinitionIdAllocator::new();
    let errors = langnorm::normalize(&QualifiedIdentifier::new("M"), &mut modules, &mut out, &mut ids).expect("no cycle");
    assert!(errors.into_vec().is_empty());

    let normalized = out.get(&QualifiedIdentifier::new("M")).unwrap();
    let result = normalized.definitions.iter().find(|d| d.name.as_str() == "result").unwrap();
    // Apply(plus, Apply(plus, 1, Apply(times, 2, 3)), 4)
    match &result.expression {
        normalized::Expression::Apply { func, args, .. } => {
            assert_eq!(var_name(func), "plus");
            assert_eq!(args.len(), 2);
            match &args[0] {
                normalized::Expression::Apply { func, args: inner_args, .. } => {
                    assert_eq!(var_name(func), "plus");
                    match &inner_args[1] {
                        normalized::Expression::Apply { func, .. } => assert_eq!(var_name(func), "times"),
                        other => panic!("expected times application, got {other:?}"),
                    }
                }
                other => panic!("expected nested plus application, got {other:?}"),
            }
        }
        other => panic!("expected Apply, got {other:?}"),
    }
}

fn var_name(expr: &normalized::Expression) -> &str {
    match expr {
        normalized::Expression::Var { var, .. } => var.definition_name.as_ref().unwrap().as_str(),
        other => panic!("expected Var, got {other:?}"),
    }
}

// ===== S3: cross-module resolution and unresolved locals =====

#[test]
fn s3_imported_name_resolves_and_unbound_name_does_not() {
    let mut a = Module::new(QualifiedIdentifier::new("A"));
    a.definitions.push(def("foo", Expression::Const { location: Location::synthetic(), value: ConstValue::Unit }));

    let mut b = Module::new(QualifiedIdentifier::new("B"));
    let mut import = Import::new(QualifiedIdentifier::new("A"));
    import.exposing = vec!["foo".to_owned()];
    b.imports.push(import);
    b.definitions.push(def("useFoo", Expression::Var { location: Location::synthetic(), name: QualifiedIdentifier::new("foo") }));
    b.definitions.push(def("useX", Expression::Var { location: Location::synthetic(), name: QualifiedIdentifier::new("x") }));

    let mut modules = ModuleMap::default();
    modules.insert(a.name.clone(), a);
    modules.insert(b.name.clone(), b);
    let mut out = ahash::AHashMap::default();
    let mut ids = DefinitionIdAllocator::new();
    langnorm::normalize(&QualifiedIdentifier::new("B"), &mut modules, &mut out, &mut ids).expect("no cycle");

    let normalized_b = out.get(&QualifiedIdentifier::new("B")).unwrap();
    let use_foo = normalized_b.definitions.iter().find(|d| d.name.as_str() == "useFoo").unwrap();
    match &use_foo.expression {
        normalized::Expression::Var { var, .. } => {
            assert!(var.is_resolved());
            assert_eq!(var.module_name.as_ref().unwrap().as_str(), "A");
            assert_eq!(var.definition_name.as_ref().unwrap().as_str(), "foo");
        }
        other => panic!("expected Var, got {other:?}"),
    }

    let use_x = normalized_b.definitions.iter().find(|d| d.name.as_str() == "useX").unwrap();
    match &use_x.expression {
        normalized::Expression::Var { var, .. } => assert!(!var.is_resolved()),
        other => panic!("expected Var, got {other:?}"),
    }
}

// ===== S4: ambiguous constructor pattern =====

#[test]
fn s4_ambiguous_constructor_across_two_imports_is_reported() {
    let mut a = Module::new(QualifiedIdentifier::new("A"));
    a.definitions.push(def("Nil", Expression::Const { location: Location::synthetic(), value: ConstValue::Unit }));
    let mut c = Module::new(QualifiedIdentifier::new("C"));
    c.definitions.push(def("Nil", Expression::Const { location: Location::synthetic(), value: ConstValue::Unit }));

    let mut b = Module::new(QualifiedIdentifier::new("B"));
    let mut import_a = Import::new(QualifiedIdentifier::new("A"));
    import_a.exposing = vec!["Nil".to_owned()];
    let mut import_c = Import::new(QualifiedIdentifier::new("C"));
    import_c.exposing = vec!["Nil".to_owned()];
    b.imports.push(import_a);
    b.imports.push(import_c);
    b.definitions.push(Definition {
        location: Location::synthetic(),
        hidden: false,
        name: Identifier::new("useNil"),
        params: vec![],
        expression: Expression::Select {
            location: Location::synthetic(),
            condition: Box::new(Expression::Const { location: Location::synthetic(), value: ConstValue::Unit }),
            cases: vec![langnorm::parsed::SelectCase {
                location: Location::synthetic(),
                pattern: langnorm::parsed::Pattern::PDataOption {
                    location: Location::synthetic(),
                    type_: None,
                    name: QualifiedIdentifier::new("Nil"),
                    values: vec![],
                },
                expression: Expression::Const { location: Location::synthetic(), value: ConstValue::Unit },
            }],
        },
        type_: None,
    });

    let mut modules = ModuleMap::default();
    modules.insert(a.name.clone(), a);
    modules.insert(c.name.clone(), c);
    modules.insert(b.name.clone(), b);
    let mut out = ahash::AHashMap::default();
    let mut ids = DefinitionIdAllocator::new();
    let errors = langnorm::normalize(&QualifiedIdentifier::new("B"), &mut modules, &mut out, &mut ids).expect("no cycle").into_vec();

    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0].kind, langnorm::NormalizeErrorKind::AmbiguousDataConstructor { .. }));
}

// ===== S5: alias unfolding with argument substitution =====

#[test]
fn s5_pair_alias_unfolds_to_tuple_and_arity_mismatch_fails() {
    let mut m = Module::new(QualifiedIdentifier::new("M"));
    m.aliases.push(langnorm::parsed::Alias {
        location: Location::synthetic(),
        name: Identifier::new("Pair"),
        params: vec![Identifier::new("a"), Identifier::new("b")],
        type_: Some(Type::TTuple {
            location: Location::synthetic(),
            items: vec![
                Type::TTypeParameter { location: Location::synthetic(), name: Identifier::new("a") },
                Type::TTypeParameter { location: Location::synthetic(), name: Identifier::new("b") },
            ],
        }),
    });
    m.definitions.push(Definition {
        location: Location::synthetic(),
        hidden: false,
        name: Identifier::new("good"),
        params: vec![],
        expression: Expression::Const { location: Location::synthetic(), value: ConstValue::Unit },
        type_: Some(Type::TNamed {
            location: Location::synthetic(),
            name: QualifiedIdentifier::new("Pair"),
            args: vec![
                Type::TTypeParameter { location: Location::synthetic(), name: Identifier::new("Int") },
                Type::TTypeParameter { location: Location::synthetic(), name: Identifier::new("String") },
            ],
        }),
    });
    m.definitions.push(Definition {
        location: Location::synthetic(),
        hidden: false,
        name: Identifier::new("bad"),
        params: vec![],
        expression: Expression::Const { location: Location::synthetic(), value: ConstValue::Unit },
        type_: Some(Type::TNamed {
            location: Location::synthetic(),
            name: QualifiedIdentifier::new("Pair"),
            args: vec![Type::TTypeParameter { location: Location::synthetic(), name: Identifier::new("Int") }],
        }),
    });

    let mut modules = ModuleMap::default();
    modules.insert(m.name.clone(), m);
    let mut out = ahash::AHashMap::default();
    let mut ids = DefinitionIdAllocator::new();
    let errors = langnorm::normalize(&QualifiedIdentifier::new("M"), &mut modules, &mut out, &mut ids).expect("no cycle").into_vec();

    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0].kind, langnorm::NormalizeErrorKind::TypeNotFound));

    let normalized = out.get(&QualifiedIdentifier::new("M")).unwrap();
    let good = normalized.definitions.iter().find(|d| d.name.as_str() == "good").unwrap();
    assert!(matches!(good.type_, Some(normalized::Type::TTuple { .. })));
}

// ===== S6: record update routing =====

#[test]
fn s6_update_routes_to_local_or_global_by_resolution() {
    let mut m = Module::new(QualifiedIdentifier::new("M"));
    m.definitions.push(def("point", Expression::Record { location: Location::synthetic(), fields: vec![] }));
    m.definitions.push(def(
        "updateGlobal",
        Expression::Update {
            location: Location::synthetic(),
            record_name: QualifiedIdentifier::new("point"),
            fields: vec![RecordField { location: Location::synthetic(), name: Identifier::new("x"), value: Expression::Const { location: Location::synthetic(), value: ConstValue::Int(0) } }],
        },
    ));
    m.definitions.push(Definition {
        location: Location::synthetic(),
        hidden: false,
        name: Identifier::new("updateLocal"),
        params: vec![langnorm::parsed::Pattern::PNamed { location: Location::synthetic(), type_: None, name: Identifier::new("other") }],
        expression: Expression::Update {
            location: Location::synthetic(),
            record_name: QualifiedIdentifier::new("other"),
            fields: vec![RecordField { location: Location::synthetic(), name: Identifier::new("x"), value: Expression::Const { location: Location::synthetic(), value: ConstValue::Int(0) } }],
        },
        type_: None,
    });

    let mut modules = ModuleMap::default();
    modules.insert(m.name.clone(), m);
    let mut out = ahash::AHashMap::default();
    let mut ids = DefinitionIdAllocator::new();
    langnorm::normalize(&QualifiedIdentifier::new("M"), &mut modules, &mut out, &mut ids).expect("no cycle");

    let normalized = out.get(&QualifiedIdentifier::new("M")).unwrap();
    let global = normalized.definitions.iter().find(|d| d.name.as_str() == "updateGlobal").unwrap();
    assert!(matches!(global.expression, normalized::Expression::UpdateGlobal { .. }));
    let local = normalized.definitions.iter().find(|d| d.name.as_str() == "updateLocal").unwrap();
    assert!(matches!(local.expression, normalized::Expression::UpdateLocal { .. }));
}
