//! Normalized modules are serializable, so a host compiler can cache or
//! inspect them across process boundaries (e.g. an incremental build cache
//! keyed by module name).

use langnorm::ident::{ConstValue, Identifier, QualifiedIdentifier};
use langnorm::location::Location;
use langnorm::lookup::ModuleMap;
use langnorm::parsed::{Definition, Expression, Module};
use langnorm::DefinitionIdAllocator;

#[test]
fn normalized_module_round_trips_through_json() {
    let mut m = Module::new(QualifiedIdentifier::new("M"));
    m.definitions.push(Definition {
        location: Location::synthetic(),
        hidden: false,
        name: Identifier::new("answer"),
        params: vec![],
        expression: Expression::Const { location: Location::synthetic(), value: ConstValue::Int(42) },
        type_: None,
    });

    let mut modules = ModuleMap::default();
    modules.insert(m.name.clone(), m);
    let mut out = ahash::AHashMap::default();
    let mut ids = DefinitionIdAllocator::new();
    langnorm::normalize(&QualifiedIdentifier::new("M"), &mut modules, &mut out, &mut ids).unwrap();

    let normalized_m = out.get(&QualifiedIdentifier::new("M")).unwrap();
    let json = serde_json::to_string(normalized_m).expect("serialize");
    let round_tripped: langnorm::normalized::Module = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(round_tripped.name, normalized_m.name);
    assert_eq!(round_tripped.definitions.len(), normalized_m.definitions.len());
    assert_eq!(round_tripped.definitions[0].name.as_str(), "answer");
}
