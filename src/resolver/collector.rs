//! Component D: the recursive, memoized traversal of the file graph.

use std::collections::{HashMap, HashSet};

use slog::{debug, Logger};

use crate::ast;
use crate::import_parser::{scan_imports, FieldSelector, ImportDirective, ImportSelector, ImportedName};
use crate::model::{self, Definition};
use crate::resolver::source::{self, Config, SourceMap};
use crate::Error;

/// Depth-first collector. Owns the per-invocation accumulators; discarded
/// once `import_schema` returns.
pub struct Collector<'a> {
    pub(crate) sources: &'a SourceMap,
    pub(crate) config: &'a Config,
    pub(crate) logger: &'a Logger,

    pub all_definitions: Vec<Vec<Definition>>,
    pub type_definitions: Vec<Vec<Definition>>,
    /// The root file's fully parsed document, kept around so the assembler
    /// can reuse it as the basis for the printed output.
    pub root_document: Option<ast::Document>,

    /// `(current source key) -> directives already followed from it`.
    pub(crate) processed_edges: HashMap<String, HashSet<ImportDirective>>,
}

impl<'a> Collector<'a> {
    pub fn new(sources: &'a SourceMap, config: &'a Config, logger: &'a Logger) -> Self {
        Collector {
            sources,
            config,
            logger,
            all_definitions: Vec::new(),
            type_definitions: Vec::new(),
            root_document: None,
            processed_edges: HashMap::new(),
        }
    }

    /// Visit one source. `imports` is the selector that brought us here
    /// (`ImportSelector::Wildcard` for the root call).
    pub fn collect(
        &mut self,
        current_key: &str,
        current_text: &str,
        imports: &ImportSelector,
        is_root: bool,
        is_path: bool,
    ) -> Result<(), Error> {
        debug!(self.logger, "visiting source"; "source" => current_key, "root" => is_root);

        let document = ast::parse_schema(current_text)
            .map_err(|e| Error::AstParseFailure {
                source_key: current_key.to_string(),
                message: e.to_string(),
            })?;

        let admissible: Vec<Definition> = document
            .definitions
            .iter()
            .filter_map(Definition::from_ast)
            .collect();

        if is_root {
            self.root_document = Some(document);
        }

        let previously_seen = self.names_seen_so_far();
        let current_type_definitions = filter_by_imports(&admissible, imports, is_root, &previously_seen, self.logger);

        self.all_definitions.push(admissible);
        self.type_definitions.push(current_type_definitions);

        let directives = scan_imports(current_text).map_err(Error::MalformedImport)?;
        for directive in directives {
            self.follow(current_key, is_path, directive)?;
        }

        Ok(())
    }

    fn names_seen_so_far(&self) -> HashSet<String> {
        self.all_definitions
            .iter()
            .flatten()
            .map(|d| d.name().to_string())
            .collect()
    }

    fn follow(&mut self, current_key: &str, current_is_path: bool, directive: ImportDirective) -> Result<(), Error> {
        let already_followed = self
            .processed_edges
            .entry(current_key.to_string())
            .or_default();
        if already_followed.contains(&directive) {
            return Ok(());
        }
        already_followed.insert(directive.clone());

        let resolved = source::resolve(
            current_key,
            current_is_path,
            &directive.from,
            self.sources,
            self.config,
        )
        .map_err(|e| Error::SourceReadFailure {
            source_key: directive.from.clone(),
            message: e.to_string(),
        })?;

        self.collect(&resolved.key, &resolved.text, &directive.imports, false, resolved.is_path)
    }
}

/// Restrict a source's admissible definitions to the subset its incoming
/// import directive actually asked for.
fn filter_by_imports(
    admissible: &[Definition],
    imports: &ImportSelector,
    is_root: bool,
    previously_seen: &HashSet<String>,
    logger: &Logger,
) -> Vec<Definition> {
    match imports {
        ImportSelector::Wildcard if is_root => admissible.to_vec(),
        ImportSelector::Wildcard => {
            let kept: Vec<Definition> = admissible
                .iter()
                .filter(|d| {
                    matches!(d, Definition::Object(_))
                        && !model::is_root_operation_type(d.name())
                        && previously_seen.contains(d.name())
                })
                .cloned()
                .collect();
            let dropped = admissible.len() - kept.len();
            if dropped > 0 {
                slog::warn!(
                    logger,
                    "wildcard sub-import pruned unused definitions";
                    "pruned" => dropped
                );
            }
            kept
        }
        ImportSelector::Names(names) => filter_by_names(admissible, names),
    }
}

fn filter_by_names(admissible: &[Definition], names: &[ImportedName]) -> Vec<Definition> {
    let mut heads: HashMap<&str, Vec<&ImportedName>> = HashMap::new();
    for name in names {
        heads.entry(name.head()).or_default().push(name);
    }

    admissible
        .iter()
        .filter(|d| heads.contains_key(d.name()))
        .cloned()
        .map(|mut def| {
            let group = &heads[def.name()];
            restrict_fields(&mut def, group);
            def
        })
        .collect()
}

/// Restrict `def`'s field list to the named fields in a dotted import group,
/// unless the group only ever referenced the bare name or included `*`.
fn restrict_fields(def: &mut Definition, group: &[&ImportedName]) {
    let mut wants_all = false;
    let mut wanted: HashSet<&str> = HashSet::new();
    let mut has_dotted = false;

    for name in group {
        if let ImportedName::Dotted(_, selector) = name {
            has_dotted = true;
            match selector {
                FieldSelector::Wildcard => wants_all = true,
                FieldSelector::Named(field) => {
                    wanted.insert(field.as_str());
                }
            }
        }
    }

    if !has_dotted || wants_all {
        return;
    }

    if let Some(fields) = def.fields_mut() {
        fields.retain(|f| wanted.contains(f.name.as_str()));
    }
}
