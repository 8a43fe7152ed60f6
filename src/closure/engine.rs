//! Component F: the fixed-point closure of the seed set over the
//! type-reference graph.

use std::collections::{HashMap, HashSet, VecDeque};

use itertools::Itertools;

use crate::model::{self, Definition};
use crate::Error;

/// Run the closure engine and return the final, name-deduplicated
/// definition pool in traversal order (first occurrence of each name wins).
pub fn close(
    all_definitions: &[Definition],
    seed: Vec<Definition>,
    type_definitions: Vec<Definition>,
) -> Result<Vec<Definition>, Error> {
    // `all_definitions` holds each file's own, unmerged declarations, so a
    // plain last-write-wins map over it is only correct for names declared
    // in exactly one file. Root operation types are the exception: they are
    // legitimately redeclared across files and field-merged by
    // `closure::seed::compute_seed` into `seed`. Route lookups for those
    // names through the merged copy instead, or expanding an arbitrary
    // fragment's (possibly empty) field list would silently drop whatever
    // other files' fields referenced.
    let merged_roots: HashMap<String, Definition> = seed
        .iter()
        .filter(|d| model::is_root_operation_type(d.name()))
        .map(|d| (d.name().to_string(), d.clone()))
        .collect();

    let mut schema_map: HashMap<&str, &Definition> =
        all_definitions.iter().map(|d| (d.name(), d)).collect();
    for (name, def) in &merged_roots {
        schema_map.insert(name.as_str(), def);
    }

    let mut pool: Vec<Definition> = seed;
    let mut pool_names: HashSet<String> = pool.iter().map(|d| d.name().to_string()).collect();
    let mut pending: VecDeque<Definition> = type_definitions.into();
    let mut visited: HashSet<String> = HashSet::new();

    while let Some(current) = pending.pop_front() {
        if visited.contains(current.name()) {
            continue;
        }

        // Expand the authoritative copy of this name from the global pool,
        // not the (possibly import-filtered, possibly stale) instance that
        // happened to be popped - root operation types in particular are
        // seeded as a merge of every file's fields, but arrive in `pending`
        // as separate per-file fragments. Looking the name back up in
        // `schema_map` is what makes every fragment's references reachable
        // regardless of which one is popped first.
        let authoritative: &Definition = schema_map.get(current.name()).copied().unwrap_or(&current);

        let mut extension: Vec<Definition> = Vec::new();

        if !matches!(authoritative, Definition::Directive(_)) {
            for application in authoritative.directive_applications() {
                expand_directive_application(
                    application.name.as_str(),
                    &schema_map,
                    &pool_names,
                    &mut extension,
                )?;
            }
        }

        match authoritative {
            Definition::InputObject(t) => {
                for field in &t.fields {
                    push_type_ref(&field.value_type, &field.name, &schema_map, &pool_names, &mut extension)?;
                }
            }
            Definition::Interface(t) => {
                for field in &t.fields {
                    push_type_ref(&field.field_type, &field.name, &schema_map, &pool_names, &mut extension)?;
                }
                for other in all_definitions {
                    if let Definition::Object(obj) = other {
                        if obj.implements_interfaces.iter().any(|i| i == current.name()) {
                            extension.push(other.clone());
                        }
                    }
                }
            }
            Definition::Union(t) => {
                for member in &t.types {
                    if !pool_names.contains(member) {
                        let def = schema_map
                            .get(member.as_str())
                            .ok_or_else(|| Error::MissingUnionMember(member.clone()))?;
                        extension.push((*def).clone());
                    }
                }
            }
            Definition::Object(t) => {
                for iface in &t.implements_interfaces {
                    if !pool_names.contains(iface) {
                        let def = schema_map
                            .get(iface.as_str())
                            .ok_or_else(|| Error::MissingInterface(iface.clone()))?;
                        extension.push((*def).clone());
                    }
                }
                for field in &t.fields {
                    push_type_ref(&field.field_type, &field.name, &schema_map, &pool_names, &mut extension)?;
                    for arg in &field.arguments {
                        push_type_ref(&arg.value_type, &field.name, &schema_map, &pool_names, &mut extension)?;
                    }
                }
            }
            Definition::Scalar(_) | Definition::Enum(_) | Definition::Directive(_) => {}
        }

        for def in &extension {
            pool_names.insert(def.name().to_string());
        }
        pending.extend(extension.clone());
        pool.extend(extension);
        visited.insert(current.name().to_string());
    }

    Ok(dedupe_by_name(pool))
}

fn expand_directive_application(
    name: &str,
    schema_map: &HashMap<&str, &Definition>,
    pool_names: &HashSet<String>,
    extension: &mut Vec<Definition>,
) -> Result<(), Error> {
    if model::is_builtin_directive(name) || pool_names.contains(name) {
        return Ok(());
    }
    let def = schema_map
        .get(name)
        .ok_or_else(|| Error::MissingDirective {
            name: name.to_string(),
        })?;
    if let Some(arguments) = def.directive_arguments() {
        for arg in arguments {
            push_type_ref(&arg.value_type, name, schema_map, pool_names, extension)?;
        }
    }
    extension.push((*def).clone());
    Ok(())
}

/// "Recurse into a type": descend through wrappers to the named leaf; if
/// unresolved, look it up and queue it, failing with `owner_field` named in
/// the error message.
fn push_type_ref(
    ty: &crate::ast::Type,
    owner_field: &str,
    schema_map: &HashMap<&str, &Definition>,
    pool_names: &HashSet<String>,
    extension: &mut Vec<Definition>,
) -> Result<(), Error> {
    let name = model::leaf_type_name(ty);
    if model::is_builtin_scalar(name) || pool_names.contains(name) {
        return Ok(());
    }
    if extension.iter().any(|d| d.name() == name) {
        return Ok(());
    }
    let def = schema_map.get(name).ok_or_else(|| Error::MissingFieldType {
        field: owner_field.to_string(),
        type_name: name.to_string(),
    })?;
    extension.push((*def).clone());
    Ok(())
}

fn dedupe_by_name(pool: Vec<Definition>) -> Vec<Definition> {
    pool.into_iter()
        .unique_by(|def| def.name().to_string())
        .collect()
}
