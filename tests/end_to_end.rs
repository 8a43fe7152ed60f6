//! Black-box scenarios covering transitive field types, leaf pruning,
//! cycles, union and interface closure, root-field merging, and the
//! missing-type error path.

use std::collections::HashMap;

use graphql_import::{import_schema, Error};

fn sources(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn transitive_field_types_are_pulled_in() {
    let a = "# import B from \"b\"\ntype A { first:String second:Float b:B }";
    let b = "# import C from \"c\"\ntype B { c:C hello:String! }";
    let c = "type C { id:ID! }";

    let out = import_schema(a, Some(&sources(&[("b", b), ("c", c)]))).unwrap();

    assert!(out.contains("type A"));
    assert!(out.contains("type B"));
    assert!(out.contains("type C"));
    let a_pos = out.find("type A").unwrap();
    let b_pos = out.find("type B").unwrap();
    let c_pos = out.find("type C").unwrap();
    assert!(a_pos < b_pos && b_pos < c_pos);
}

#[test]
fn unused_sibling_leaf_is_pruned() {
    let a = "# import B from \"b\"\ntype A { b:B }";
    let b = "type B { x:String }\ntype Unrelated { y:Int }";

    let out = import_schema(a, Some(&sources(&[("b", b)]))).unwrap();

    assert!(out.contains("type A"));
    assert!(out.contains("type B"));
    assert!(!out.contains("Unrelated"));
}

#[test]
fn import_cycle_terminates_and_resolves_both_sides() {
    let a = "# import B from \"b\"\ntype A { first:String b:B }";
    let b = "# import A from \"a\"\ntype B { hello:String! a:A }";

    let out = import_schema(a, Some(&sources(&[("a", a), ("b", b)]))).unwrap();

    assert!(out.contains("type A"));
    assert!(out.contains("type B"));
}

#[test]
fn union_members_are_closed_over() {
    let a = "# import B from \"b\"\ntype A { b:B }";
    let b = "# import C1,C2 from \"c\"\nunion B = C1 | C2";
    let c = "type C1 { c1:ID }\ntype C2 { c2:ID }";

    let out = import_schema(a, Some(&sources(&[("b", b), ("c", c)]))).unwrap();

    assert!(out.contains("type A"));
    assert!(out.contains("union B"));
    assert!(out.contains("type C1"));
    assert!(out.contains("type C2"));
}

#[test]
fn implementing_objects_are_backfilled_for_survived_interface() {
    let a = "# import B from \"b\"\ntype A implements B { id:ID! }";
    let b = "interface B { id:ID! }\ntype B1 implements B { id:ID! }";

    let out = import_schema(a, Some(&sources(&[("b", b)]))).unwrap();

    assert!(out.contains("type A"));
    assert!(out.contains("interface B"));
    assert!(out.contains("type B1"));
}

#[test]
fn query_fields_merge_across_files_root_first() {
    let a = "# import Query.posts from \"b\"\n# import Query.hello from \"c\"\ntype Query { helloA:String }";
    let b = "type Query { posts:[Post] hello:String }\ntype Post { field1:String }";
    let c = "type Query { posts:[Post] hello:String }";

    let out = import_schema(a, Some(&sources(&[("b", b), ("c", c)]))).unwrap();

    assert!(out.contains("type Post"));
    let query_start = out.find("type Query").expect("Query present");
    let query_block = &out[query_start..];
    let helloa_pos = query_block.find("helloA").unwrap();
    let posts_pos = query_block.find("posts").unwrap();
    let hello_pos = query_block.find("hello:").unwrap();
    assert!(helloa_pos < posts_pos);
    assert!(posts_pos < hello_pos);
}

#[test]
fn merged_root_type_closes_over_every_files_field_types() {
    // `b` and `c` both extend `Query` but with different, non-overlapping
    // field sets - unlike the identical-shape merge above, this is the case
    // where a naive last-write-wins lookup of "Query" during closure would
    // substitute one file's narrow fragment and silently drop the other
    // file's referenced type.
    let a = "# import Query.x from \"b\"\n# import Query.y from \"c\"\ntype Query { z:Int }";
    let b = "type Query { x:X y:Int }\ntype X { v:Int }";
    let c = "type Query { y:Y }\ntype Y { w:Int }";

    let out = import_schema(a, Some(&sources(&[("b", b), ("c", c)]))).unwrap();

    assert!(out.contains("type X"), "output missing X:\n{out}");
    assert!(out.contains("type Y"), "output missing Y:\n{out}");
    let query_start = out.find("type Query").expect("Query present");
    let query_block = &out[query_start..];
    assert!(query_block.contains("z:"));
    assert!(query_block.contains("x:X") || query_block.contains("x: X"));
    assert!(query_block.contains("y:Y") || query_block.contains("y: Y"));
}

#[test]
fn missing_field_type_reports_owning_field() {
    let a = "type A { post:Post }";

    let err = import_schema(a, None).unwrap_err();
    match err {
        Error::MissingFieldType { field, type_name } => {
            assert_eq!(field, "post");
            assert_eq!(type_name, "Post");
        }
        other => panic!("expected MissingFieldType, got {other:?}"),
    }
    assert_eq!(
        err_to_string(a),
        "Field post: Couldn't find type Post in any of the schemas."
    );
}

fn err_to_string(a: &str) -> String {
    import_schema(a, None).unwrap_err().to_string()
}
