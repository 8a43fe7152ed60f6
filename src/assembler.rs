//! Component G: replace the root document's definitions with the closed
//! pool and hand it to the external printer.

use std::fmt::Write as _;

use crate::ast::Document;
use crate::model::Definition;
use crate::Error;

pub fn assemble_and_print(mut root_document: Document, pool: Vec<Definition>) -> Result<String, Error> {
    root_document.definitions = pool.into_iter().map(Definition::into_ast).collect();

    let mut out = String::new();
    write!(out, "{}", root_document)?;
    Ok(out)
}
