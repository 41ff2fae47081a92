//! Expands each import's `exposing` list from the names the programmer
//! wrote into every identifier form reachable through that import: the
//! bare name (when actually exposed), `ModName.name`, and — when the
//! imported module's name has a dot in it — `ShortModName.name`.
//!
//! Must run after data-type expansion, so that data type options (which
//! expansion turns into ordinary definitions) are enumerated here too.

use ahash::AHashSet;

use crate::lookup::ModuleMap;
use crate::parsed::{Module, Type};

pub fn unwrap_imports(module: &mut Module, modules: &ModuleMap) {
    for imp in &mut module.imports {
        let Some(imported) = modules.get(&imp.module_identifier) else { continue };

        let mod_name = imp.alias.clone().unwrap_or_else(|| imported.name.clone());
        let short_mod_name = {
            let s = mod_name.as_str();
            s.rsplit_once('.').map(|(_, tail)| tail.to_owned())
        };

        let exposed: AHashSet<&str> = imp.exposing.iter().map(String::as_str).collect();
        let mut exp = Vec::new();

        for d in &imported.definitions {
            let n = d.name.as_str();
            if imp.exposing_all || exposed.contains(n) {
                exp.push(n.to_owned());
            }
            exp.push(format!("{mod_name}.{n}"));
            if let Some(short) = &short_mod_name {
                exp.push(format!("{short}.{n}"));
            }
        }

        for a in &imported.aliases {
            let n = a.name.as_str();
            if imp.exposing_all || exposed.contains(n) {
                exp.push(n.to_owned());
                if let Some(Type::TData { options, .. }) = &a.type_ {
                    for v in options {
                        exp.push(v.as_str().to_owned());
                    }
                }
            }
            exp.push(format!("{mod_name}.{n}"));
            if let Some(short) = &short_mod_name {
                exp.push(format!("{short}.{n}"));
            }
            if let Some(Type::TData { options, .. }) = &a.type_ {
                for v in options {
                    exp.push(format!("{mod_name}.{v}"));
                    if let Some(short) = &short_mod_name {
                        exp.push(format!("{short}.{v}"));
                    }
                }
            }
        }

        for i in &imported.infix_fns {
            let n = i.name.as_str();
            if imp.exposing_all || exposed.contains(n) {
                exp.push(n.to_owned());
            }
            exp.push(format!("{mod_name}.{n}"));
            if let Some(short) = &short_mod_name {
                exp.push(format!("{short}.{n}"));
            }
        }

        imp.exposing = exp;
    }
}
