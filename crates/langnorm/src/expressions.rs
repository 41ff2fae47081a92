//! Structural rewrite of parsed expressions. Most variants are element-wise
//! translations; the interesting ones desugar syntax (`Accessor`, `Negate`),
//! resolve names (`Var`, `InfixVar`, `Update`), or rebuild a flat infix
//! chain into a tree (`BinOp`).

use smallvec::SmallVec;

use crate::{
    error::{Errors, NormalizeErrorKind},
    ident::{Associativity, Identifier, QualifiedIdentifier},
    lookup::{self, ModuleMap},
    normalized as n, parsed as p,
    patterns::normalize_pattern,
};

/// Native-call name the code generator recognizes for numeric negation.
pub const NEG_NATIVE_CALL: &str = "Oak.Core.Basics.neg";

pub fn normalize_expression(modules: &ModuleMap, module: &p::Module, expr: p::Expression, errors: &mut Errors) -> n::Expression {
    match expr {
        p::Expression::Access { location, record, field_name } => n::Expression::Access {
            location,
            record: Box::new(normalize_expression(modules, module, *record, errors)),
            field_name,
        },
        p::Expression::Apply { location, func, args } => n::Expression::Apply {
            location,
            func: Box::new(normalize_expression(modules, module, *func, errors)),
            args: args.into_iter().map(|a| normalize_expression(modules, module, a, errors)).collect(),
        },
        p::Expression::Const { location, value } => n::Expression::Const { location, value },
        p::Expression::Constructor { location, data_name, option_name, args } => n::Expression::Constructor {
            location,
            data_name,
            option_name,
            args: args.into_iter().map(|a| normalize_expression(modules, module, a, errors)).collect(),
        },
        p::Expression::If { location, condition, positive, negative } => n::Expression::If {
            location,
            condition: Box::new(normalize_expression(modules, module, *condition, errors)),
            positive: Box::new(normalize_expression(modules, module, *positive, errors)),
            negative: Box::new(normalize_expression(modules, module, *negative, errors)),
        },
        p::Expression::Let { location, pattern, value, body } => n::Expression::Let {
            location,
            pattern: Box::new(normalize_pattern(modules, module, *pattern, errors)),
            value: Box::new(normalize_expression(modules, module, *value, errors)),
            body: Box::new(normalize_expression(modules, module, *body, errors)),
        },
        p::Expression::List { location, items } => {
            n::Expression::List { location, items: items.into_iter().map(|i| normalize_expression(modules, module, i, errors)).collect() }
        }
        p::Expression::NativeCall { location, name, args } => n::Expression::NativeCall {
            location,
            name,
            args: args.into_iter().map(|a| normalize_expression(modules, module, a, errors)).collect(),
        },
        p::Expression::Record { location, fields } => n::Expression::Record {
            location,
            fields: fields
                .into_iter()
                .map(|f| n::RecordField { location: f.location, name: f.name, value: normalize_expression(modules, module, f.value, errors) })
                .collect(),
        },
        p::Expression::Select { location, condition, cases } => n::Expression::Select {
            location: location.clone(),
            condition: Box::new(normalize_expression(modules, module, *condition, errors)),
            cases: cases
                .into_iter()
                .map(|c| n::SelectCase {
                    location: location.clone(),
                    pattern: normalize_pattern(modules, module, c.pattern, errors),
                    expression: normalize_expression(modules, module, c.expression, errors),
                })
                .collect(),
        },
        p::Expression::Tuple { location, items } => {
            n::Expression::Tuple { location, items: items.into_iter().map(|i| normalize_expression(modules, module, i, errors)).collect() }
        }
        p::Expression::Update { location, record_name, fields } => {
            let fields: Vec<_> = fields
                .into_iter()
                .map(|f| n::RecordField { location: f.location, name: f.name, value: normalize_expression(modules, module, f.value, errors) })
                .collect();
            match lookup::find_definition(modules, module, record_name.as_str()) {
                Some(resolved) => n::Expression::UpdateGlobal {
                    location,
                    module_name: resolved.module_name,
                    definition_name: resolved.definition_name,
                    fields,
                },
                None => n::Expression::UpdateLocal { location, record_name: Identifier::new(record_name.as_str()), fields },
            }
        }
        p::Expression::Lambda { location, params, body } => n::Expression::Lambda {
            location,
            params: params.into_iter().map(|p| normalize_pattern(modules, module, p, errors)).collect(),
            body: Box::new(normalize_expression(modules, module, *body, errors)),
        },
        p::Expression::Accessor { location, field_name } => normalize_expression(
            modules,
            module,
            p::Expression::Lambda {
                location: location.clone(),
                params: vec![p::Pattern::PNamed { location: location.clone(), type_: None, name: Identifier::new("x") }],
                body: Box::new(p::Expression::Access {
                    location: location.clone(),
                    record: Box::new(p::Expression::Var { location: location.clone(), name: QualifiedIdentifier::new("x") }),
                    field_name,
                }),
            },
            errors,
        ),
        p::Expression::Negate { location, nested } => n::Expression::NativeCall {
            location,
            name: NEG_NATIVE_CALL.to_owned(),
            args: vec![normalize_expression(modules, module, *nested, errors)],
        },
        p::Expression::Var { location, name } => match lookup::find_definition(modules, module, name.as_str()) {
            Some(resolved) => {
                n::Expression::Var { location, var: n::VarRef::resolved(name, resolved.module_name, resolved.definition_name) }
            }
            None => n::Expression::Var { location, var: n::VarRef::unresolved(name) },
        },
        p::Expression::InfixVar { location, infix } => match lookup::find_infix_fn(modules, module, &infix) {
            None => {
                errors.push(location.clone(), NormalizeErrorKind::InfixDefinitionNotFound);
                n::Expression::Var { location: location.clone(), var: n::VarRef::unresolved(QualifiedIdentifier::new(infix.as_str())) }
            }
            Some((defining_module_name, infix_def)) => {
                let defining_module = lookup::module_by_name(modules, module, &defining_module_name);
                let found = defining_module.and_then(|m| lookup::find_definition_local(m, infix_def.alias.as_str()));
                match found {
                    None => {
                        errors.push(infix_def.alias_location.clone(), NormalizeErrorKind::InfixAliasNotFound);
                        n::Expression::Var { location, var: n::VarRef::unresolved(QualifiedIdentifier::new(infix.as_str())) }
                    }
                    Some(resolved) => n::Expression::Var {
                        location,
                        var: n::VarRef::resolved(QualifiedIdentifier::new(infix.as_str()), resolved.module_name, resolved.definition_name),
                    },
                }
            }
        },
        p::Expression::BinOp { location, items } => normalize_binop(modules, module, location, items, errors),
    }
}

/// One slot of the shunting-yard working stacks: either an unnormalized
/// operand or an operator already resolved to its defining module and
/// declaration (so tree-building never looks it up a second time).
enum ShuntItem {
    Operand(p::Expression),
    Operator { module_name: QualifiedIdentifier, alias: Identifier, precedence: i32, associativity: Associativity },
}

fn normalize_binop(modules: &ModuleMap, module: &p::Module, location: crate::location::Location, items: Vec<p::BinOpItem>, errors: &mut Errors) -> n::Expression {
    let mut output: SmallVec<[ShuntItem; 8]> = SmallVec::new();
    let mut operators: SmallVec<[ShuntItem; 8]> = SmallVec::new();

    for item in items {
        match item {
            p::BinOpItem::Operand(expr) => output.push(ShuntItem::Operand(*expr)),
            p::BinOpItem::Operator(infix_name) => {
                let (module_name, alias, precedence, associativity) = match lookup::find_infix_fn(modules, module, &infix_name) {
                    Some((m, inf)) => (m, inf.alias, inf.precedence, inf.associativity),
                    None => {
                        errors.push(location.clone(), NormalizeErrorKind::InfixOpNotFound);
                        // A synthetic, lowest-precedence entry lets the remaining
                        // chain finish parsing instead of aborting the whole tree.
                        (module.name.clone(), Identifier::new(infix_name.as_str()), 0, Associativity::Left)
                    }
                };
                while let Some(ShuntItem::Operator { precedence: top_prec, .. }) = operators.last() {
                    let pops = *top_prec > precedence || (*top_prec == precedence && associativity == Associativity::Left);
                    if !pops {
                        break;
                    }
                    output.push(operators.pop().unwrap());
                }
                operators.push(ShuntItem::Operator { module_name, alias, precedence, associativity });
            }
        }
    }
    while let Some(op) = operators.pop() {
        output.push(op);
    }

    build_binop_tree(modules, module, &location, &mut output, errors)
}

fn build_binop_tree(
    modules: &ModuleMap,
    module: &p::Module,
    location: &crate::location::Location,
    output: &mut SmallVec<[ShuntItem; 8]>,
    errors: &mut Errors,
) -> n::Expression {
    let Some(top) = output.pop() else {
        errors.push(location.clone(), NormalizeErrorKind::InfixOpNotFound);
        return n::Expression::Const { location: location.clone(), value: crate::ident::ConstValue::Unit };
    };
    let ShuntItem::Operator { module_name, alias, .. } = top else {
        // An operand with no operator above it: malformed chain, already
        // reported. Normalize it in place so the caller gets a best-effort tree.
        let ShuntItem::Operand(expr) = top else { unreachable!() };
        return normalize_expression(modules, module, expr, errors);
    };

    let right = pop_operand_or_subtree(modules, module, location, output, errors);
    let left = pop_operand_or_subtree(modules, module, location, output, errors);

    n::Expression::Apply {
        location: location.clone(),
        func: Box::new(n::Expression::Var { location: location.clone(), var: n::VarRef::resolved(QualifiedIdentifier::new(alias.as_str()), module_name, alias) }),
        args: vec![left, right],
    }
}

fn pop_operand_or_subtree(
    modules: &ModuleMap,
    module: &p::Module,
    location: &crate::location::Location,
    output: &mut SmallVec<[ShuntItem; 8]>,
    errors: &mut Errors,
) -> n::Expression {
    match output.last() {
        Some(ShuntItem::Operand(_)) => {
            let ShuntItem::Operand(expr) = output.pop().unwrap() else { unreachable!() };
            normalize_expression(modules, module, expr, errors)
        }
        Some(ShuntItem::Operator { .. }) => build_binop_tree(modules, module, location, output, errors),
        None => {
            errors.push(location.clone(), NormalizeErrorKind::InfixOpNotFound);
            n::Expression::Const { location: location.clone(), value: crate::ident::ConstValue::Unit }
        }
    }
}
