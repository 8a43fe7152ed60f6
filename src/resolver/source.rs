//! Component C: mapping an import target (as written in a `from` string) to
//! a canonical source key and its SDL text.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

const GRAPHQL_EXTENSION: &str = ".graphql";

/// The caller-supplied mapping from logical source names to SDL strings
/// (the "optional mapping" accepted by the public entry point).
#[derive(Clone, Debug, Default)]
pub struct SourceMap(HashMap<String, String>);

impl SourceMap {
    pub fn new(map: HashMap<String, String>) -> Self {
        SourceMap(map)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

/// Toggles for ambient, environment-dependent resolver behavior.
#[derive(Clone, Debug)]
pub struct Config {
    /// Whether a missing sibling `.graphql` file falls back to a
    /// package-style module lookup before failing.
    pub follow_module_lookup: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            follow_module_lookup: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum SourceResolveError {
    #[error("could not read `{path}`: {message}")]
    FileNotFound { path: String, message: String },
    #[error("no source named `{0}` was supplied")]
    LogicalSourceNotFound(String),
}

/// A materialized import target: its canonical key, its SDL text, and
/// whether it should itself be treated as a `.graphql` path for further
/// relative resolution.
pub struct ResolvedSource {
    pub key: String,
    pub text: String,
    pub is_path: bool,
}

/// Resolve the caller's initial argument: either a filesystem path or a
/// literal SDL string.
pub fn load_root(
    source: &str,
    sources: &SourceMap,
) -> Result<ResolvedSource, SourceResolveError> {
    let path = Path::new(source);
    if source.ends_with(GRAPHQL_EXTENSION) && path.exists() {
        let text = std::fs::read_to_string(path).map_err(|e| SourceResolveError::FileNotFound {
            path: source.to_string(),
            message: e.to_string(),
        })?;
        let canonical = std::fs::canonicalize(path).map_err(|e| SourceResolveError::FileNotFound {
            path: source.to_string(),
            message: e.to_string(),
        })?;
        Ok(ResolvedSource {
            key: canonical.to_string_lossy().into_owned(),
            text,
            is_path: true,
        })
    } else {
        // A literal SDL string handed in directly; it has no sibling
        // directory, so `is_path: false` means its imports never go through
        // the filesystem path branch of `resolve` - every `from` string it
        // declares is looked up in `sources` as a logical name, even ones
        // that end in `.graphql`.
        Ok(ResolvedSource {
            key: "<root>".to_string(),
            text: source.to_string(),
            is_path: false,
        })
    }
}

/// Resolve a single `from` string relative to the current source.
pub fn resolve(
    current_key: &str,
    current_is_path: bool,
    from: &str,
    sources: &SourceMap,
    config: &Config,
) -> Result<ResolvedSource, SourceResolveError> {
    if current_is_path && current_key.ends_with(GRAPHQL_EXTENSION) && from.ends_with(GRAPHQL_EXTENSION) {
        resolve_path(current_key, from, config)
    } else {
        match sources.get(from) {
            Some(text) => Ok(ResolvedSource {
                key: from.to_string(),
                text: text.to_string(),
                is_path: false,
            }),
            None => Err(SourceResolveError::LogicalSourceNotFound(from.to_string())),
        }
    }
}

fn resolve_path(
    current_key: &str,
    from: &str,
    config: &Config,
) -> Result<ResolvedSource, SourceResolveError> {
    let current_dir = Path::new(current_key)
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let candidate = current_dir.join(from);

    if candidate.exists() {
        return read_path(&candidate);
    }

    if config.follow_module_lookup {
        if let Some(found) = module_lookup(&current_dir, from) {
            return read_path(&found);
        }
    }

    Err(SourceResolveError::FileNotFound {
        path: candidate.to_string_lossy().into_owned(),
        message: "no such file, and module lookup found no match".to_string(),
    })
}

fn read_path(path: &Path) -> Result<ResolvedSource, SourceResolveError> {
    let text = std::fs::read_to_string(path).map_err(|e| SourceResolveError::FileNotFound {
        path: path.to_string_lossy().into_owned(),
        message: e.to_string(),
    })?;
    let canonical = std::fs::canonicalize(path).map_err(|e| SourceResolveError::FileNotFound {
        path: path.to_string_lossy().into_owned(),
        message: e.to_string(),
    })?;
    Ok(ResolvedSource {
        key: canonical.to_string_lossy().into_owned(),
        text,
        is_path: true,
    })
}

/// Best-effort package-style lookup: search the directory tree rooted at
/// `start_dir` for a file whose name matches `from`'s final path component.
/// Returns a canonical path, or nothing if no match is found.
fn module_lookup(start_dir: &Path, from: &str) -> Option<PathBuf> {
    let target_name = Path::new(from).file_name()?;
    WalkDir::new(start_dir)
        .into_iter()
        .filter_map(Result::ok)
        .find(|entry| entry.file_type().is_file() && entry.file_name() == target_name)
        .map(|entry| entry.into_path())
}
