//! Bundles a modular GraphQL-like SDL corpus, linked by comment-form
//! `# import X, Y from "path"` directives, into one closed, self-contained
//! schema document.
//!
//! The pipeline is the one laid out in the design: an import-line parser
//! (A) feeds an SDL scanner (B); a source resolver (C) backs a recursive
//! collector (D) that walks the file graph; a root-type merger (E) seeds a
//! closure engine (F) that walks the type-reference graph to a fixed point;
//! a result assembler (G) hands the closed pool back to `graphql-parser` for
//! printing.

mod assembler;
mod ast;
mod closure;
mod error;
mod import_parser;
pub mod logging;
mod model;
mod resolver;

use std::collections::HashMap;

use slog::{o, Logger};

pub use ast::{Document, ParseError};
pub use error::Error;
pub use logging::terminal_logger;
pub use model::Definition;
pub use resolver::source::Config;

use resolver::collector::Collector;
use resolver::source::{self, SourceMap};

/// Bundle `source` (a filesystem path ending in `.graphql`, or a literal SDL
/// string) into a single printed schema, resolving any `# import` directives
/// it contains against `sources`, a mapping from logical source names to SDL
/// text for imports that are not filesystem paths.
pub fn import_schema(
    source: &str,
    sources: Option<&HashMap<String, String>>,
) -> Result<String, Error> {
    import_schema_with_logger(source, sources, &Config::default(), &discard_logger())
}

/// As [`import_schema`], but with an explicit [`Config`] and [`slog::Logger`]
/// rather than the defaults. All per-invocation state is local to this call;
/// two concurrent calls never interfere.
pub fn import_schema_with_logger(
    source: &str,
    sources: Option<&HashMap<String, String>>,
    config: &Config,
    logger: &Logger,
) -> Result<String, Error> {
    let source_map = SourceMap::new(sources.cloned().unwrap_or_default());

    let root = source::load_root(source, &source_map).map_err(|e| Error::SourceReadFailure {
        source_key: source.to_string(),
        message: e.to_string(),
    })?;

    let mut collector = Collector::new(&source_map, config, logger);
    collector.collect(
        &root.key,
        &root.text,
        &import_parser::ImportSelector::Wildcard,
        true,
        root.is_path,
    )?;

    let Collector {
        all_definitions,
        type_definitions,
        root_document,
        ..
    } = collector;

    let seed = closure::seed::compute_seed(&type_definitions);
    let flattened_all: Vec<Definition> = all_definitions.into_iter().flatten().collect();
    let flattened_type: Vec<Definition> = type_definitions.into_iter().flatten().collect();

    let pool = closure::engine::close(&flattened_all, seed, flattened_type)?;

    let root_document = root_document.expect("root source is always visited first");
    assembler::assemble_and_print(root_document, pool)
}

fn discard_logger() -> Logger {
    Logger::root(slog::Discard, o!())
}
