//! Component E: merging root operation types across files and forming the
//! closure engine's seed set.

use std::collections::HashMap;

use crate::model::{self, Definition};

/// Compute the seed set: root operation types first, in the order they were
/// first encountered across every file, field-merged when the same root
/// type is re-declared; then the root file's other admitted definitions.
///
/// Root types are seeded before the root file's own non-root definitions -
/// see DESIGN.md for why that ordering, not the reverse, is the one that
/// keeps merged `Query`/`Mutation`/`Subscription` field order correct.
pub fn compute_seed(type_definitions: &[Vec<Definition>]) -> Vec<Definition> {
    let mut seed: Vec<Definition> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for file in type_definitions {
        for def in file {
            if model::is_root_operation_type(def.name()) {
                push_or_merge(&mut seed, &mut index, def.clone());
            }
        }
    }

    if let Some(root_file) = type_definitions.first() {
        for def in root_file {
            if !model::is_root_operation_type(def.name()) {
                push_or_merge(&mut seed, &mut index, def.clone());
            }
        }
    }

    seed
}

fn push_or_merge(seed: &mut Vec<Definition>, index: &mut HashMap<String, usize>, def: Definition) {
    match index.get(def.name()) {
        Some(&i) => {
            if let Some(extra_fields) = def.fields() {
                let extra_fields = extra_fields.clone();
                if let Some(existing_fields) = seed[i].fields_mut() {
                    existing_fields.extend(extra_fields);
                }
            }
        }
        None => {
            index.insert(def.name().to_string(), seed.len());
            seed.push(def);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast;

    fn object(name: &str, fields: &[&str]) -> Definition {
        let doc = ast::parse_schema(&format!(
            "type {name} {{ {fields} }}",
            name = name,
            fields = fields
                .iter()
                .map(|f| format!("{f}: String"))
                .collect::<Vec<_>>()
                .join(" ")
        ))
        .unwrap();
        Definition::from_ast(&doc.definitions[0]).unwrap()
    }

    #[test]
    fn merges_same_named_root_type_fields_in_visit_order() {
        let query_a = object("Query", &["helloA"]);
        let query_b = object("Query", &["posts", "hello"]);
        let query_c = object("Query", &["posts", "hello"]);
        let post = object("Post", &["field1"]);

        // file 0 = root (a), file 1 = b, file 2 = c
        let type_definitions = vec![
            vec![query_a],
            vec![query_b, post],
            vec![query_c],
        ];

        let seed = compute_seed(&type_definitions);
        let query = seed.iter().find(|d| d.name() == "Query").unwrap();
        let names: Vec<&str> = query
            .fields()
            .unwrap()
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, vec!["helloA", "posts", "hello"]);
    }
}
