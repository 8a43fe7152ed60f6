//! Components A and B: recognizing `# import ...` directive comments and
//! decomposing each into a structured `ImportDirective`.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("malformed import directive: `{0}`")]
pub struct ImportParseError(pub String);

/// A single name in an import list: either a bare type name (`User`) or a
/// dotted field selector (`Query.posts`, `Query.*`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ImportedName {
    Bare(String),
    Dotted(String, FieldSelector),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FieldSelector {
    Named(String),
    Wildcard,
}

impl ImportedName {
    pub fn head(&self) -> &str {
        match self {
            ImportedName::Bare(name) => name,
            ImportedName::Dotted(name, _) => name,
        }
    }
}

/// The parsed form of an `# import ...` comment line.
///
/// `imports` is either the single-element wildcard form (`Wildcard(Vec::new())`
/// is never constructed; wildcard is represented by `ImportSelector::Wildcard`)
/// or a non-empty list of [`ImportedName`]s.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImportDirective {
    pub imports: ImportSelector,
    pub from: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ImportSelector {
    Wildcard,
    Names(Vec<ImportedName>),
}

lazy_static! {
    // `import * from "x"` or `import A, B.c, D.* from "x"`, trailing `;` tolerated.
    // The `regex` crate forbids backreferences, so the two quote styles are
    // matched as separate alternatives rather than a `(quote)...\1` pair.
    static ref IMPORT_LINE: Regex = Regex::new(
        r#"(?x)
        ^import\s+
        (?P<list>
            \*
            |
            [A-Za-z_][A-Za-z0-9_]*(?:\.(?:[A-Za-z_][A-Za-z0-9_]*|\*))?
            (?:\s*,\s*[A-Za-z_][A-Za-z0-9_]*(?:\.(?:[A-Za-z_][A-Za-z0-9_]*|\*))?)*
        )
        \s+from\s+
        (?:"(?P<dpath>[^"]*)"|'(?P<spath>[^']*)')
        ;?\s*$
        "#
    ).expect("IMPORT_LINE regex is a compile-time constant");
}

/// Parse a single logical import line. The input must already have its
/// leading comment marker and surrounding whitespace stripped.
pub fn parse_import_line(line: &str) -> Result<ImportDirective, ImportParseError> {
    let caps = IMPORT_LINE
        .captures(line)
        .ok_or_else(|| ImportParseError(line.to_string()))?;

    let path = caps
        .name("dpath")
        .or_else(|| caps.name("spath"))
        .map(|m| m.as_str())
        .unwrap_or_default();
    if path.is_empty() {
        return Err(ImportParseError(line.to_string()));
    }

    let list = &caps["list"];
    let imports = if list == "*" {
        ImportSelector::Wildcard
    } else {
        let names: Vec<ImportedName> = list
            .split(',')
            .map(str::trim)
            .map(parse_name)
            .collect::<Result<_, _>>()?;
        if names.is_empty() {
            return Err(ImportParseError(line.to_string()));
        }
        ImportSelector::Names(names)
    };

    Ok(ImportDirective {
        imports,
        from: path.to_string(),
    })
}

fn parse_name(raw: &str) -> Result<ImportedName, ImportParseError> {
    match raw.split_once('.') {
        None => Ok(ImportedName::Bare(raw.to_string())),
        Some((head, "*")) => Ok(ImportedName::Dotted(head.to_string(), FieldSelector::Wildcard)),
        Some((head, field)) => Ok(ImportedName::Dotted(
            head.to_string(),
            FieldSelector::Named(field.to_string()),
        )),
    }
}

/// Scan raw SDL text for import-directive comment lines, in source order.
/// Lines that are not recognized import directives, including
/// ordinary comments, are silently skipped; the SDL itself is never parsed
/// here.
pub fn scan_imports(sdl: &str) -> Result<Vec<ImportDirective>, ImportParseError> {
    let mut directives = Vec::new();
    for raw_line in sdl.lines() {
        if let Some(body) = import_directive_body(raw_line) {
            directives.push(parse_import_line(body)?);
        }
    }
    Ok(directives)
}

/// If `raw_line` is an import-directive comment (`# import ...` or
/// `#import ...`), return the text starting at `import`.
fn import_directive_body(raw_line: &str) -> Option<&str> {
    let after_hash = raw_line.trim_start().strip_prefix('#')?;
    let after_hash = after_hash.trim_start();
    if after_hash.starts_with("import ") {
        Some(after_hash)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_name() {
        let d = parse_import_line(r#"import A from "x""#).unwrap();
        assert_eq!(d.from, "x");
        assert_eq!(
            d.imports,
            ImportSelector::Names(vec![ImportedName::Bare("A".into())])
        );
    }

    #[test]
    fn parses_multiple_names_with_loose_whitespace() {
        let d = parse_import_line(r#"import   A ,B   from   "x""#).unwrap();
        assert_eq!(
            d.imports,
            ImportSelector::Names(vec![
                ImportedName::Bare("A".into()),
                ImportedName::Bare("B".into())
            ])
        );
    }

    #[test]
    fn parses_wildcard() {
        let d = parse_import_line(r#"import * from "x""#).unwrap();
        assert_eq!(d.imports, ImportSelector::Wildcard);
    }

    #[test]
    fn parses_dotted_field_selectors() {
        let d = parse_import_line(r#"import Query.posts, Query.hello from "b""#).unwrap();
        assert_eq!(
            d.imports,
            ImportSelector::Names(vec![
                ImportedName::Dotted("Query".into(), FieldSelector::Named("posts".into())),
                ImportedName::Dotted("Query".into(), FieldSelector::Named("hello".into())),
            ])
        );
    }

    #[test]
    fn tolerates_trailing_semicolon_and_single_quotes() {
        let d = parse_import_line(r#"import A from 'x';"#).unwrap();
        assert_eq!(d.from, "x");
    }

    #[test]
    fn rejects_missing_name_list() {
        assert!(parse_import_line(r#"import from "x""#).is_err());
    }

    #[test]
    fn rejects_empty_source() {
        assert!(parse_import_line(r#"import A from """#).is_err());
    }

    #[test]
    fn rejects_mismatched_quotes() {
        assert!(parse_import_line(r#"import A from "x'"#).is_err());
    }

    #[test]
    fn scanner_recognizes_both_spellings_and_ignores_other_comments() {
        let sdl = "# a comment\n#import A from \"x\"\n# import B from \"y\"\ntype T { f: String }";
        let directives = scan_imports(sdl).unwrap();
        assert_eq!(directives.len(), 2);
        assert_eq!(directives[0].from, "x");
        assert_eq!(directives[1].from, "y");
    }
}
