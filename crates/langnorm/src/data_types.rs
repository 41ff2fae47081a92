//! Lowers each `data Name = Opt1 T1 T2 | Opt2 | ...` declaration into a
//! `TData` alias plus one synthesized constructor definition per option,
//! mutating the module in place. Run before import unwrapping so the
//! synthesized definitions participate in exported-name enumeration.

use crate::ident::{ExternalIdentifier, Identifier, QualifiedIdentifier};
use crate::parsed::{Alias, Definition, Expression, Module, Pattern, Type};

pub fn flatten_data_types(module: &mut Module) {
    let module_name = module.name.clone();
    let data_types = std::mem::take(&mut module.data_types);

    for dt in &data_types {
        let type_args: Vec<Type> =
            dt.params.iter().map(|p| Type::TTypeParameter { location: dt.location.clone(), name: p.clone() }).collect();

        module.aliases.push(Alias {
            location: dt.location.clone(),
            name: dt.name.clone(),
            params: dt.params.clone(),
            type_: Some(Type::TData {
                location: dt.location.clone(),
                name: ExternalIdentifier::new(module_name.clone(), dt.name.clone()),
                args: type_args.clone(),
                options: dt.options.iter().map(|o| o.name.clone()).collect(),
            }),
        });

        for option in &dt.options {
            let data_name = ExternalIdentifier::new(module_name.clone(), dt.name.clone());

            let mut type_: Type =
                Type::TExternal { location: dt.location.clone(), name: data_name.clone(), args: type_args.clone() };
            if !option.params.is_empty() {
                type_ = Type::TFunc {
                    location: dt.location.clone(),
                    params: option.params.clone(),
                    return_: Box::new(type_),
                };
            }

            let params: Vec<Pattern> = (0..option.params.len())
                .map(|i| Pattern::PNamed { location: option.location.clone(), type_: None, name: Identifier::new(format!("p{i}")) })
                .collect();
            let args: Vec<Expression> = (0..option.params.len())
                .map(|i| Expression::Var {
                    location: option.location.clone(),
                    name: QualifiedIdentifier::new(format!("p{i}")),
                })
                .collect();

            module.definitions.push(Definition {
                location: option.location.clone(),
                hidden: option.hidden || dt.hidden,
                name: option.name.clone(),
                params,
                expression: Expression::Constructor {
                    location: option.location.clone(),
                    data_name,
                    option_name: option.name.clone(),
                    args,
                },
                type_: Some(type_),
            });
        }
    }
}
