//! A ready-made terminal [`slog::Logger`] for callers who don't want to
//! wire up `slog-term` / `slog-async` / `slog-envlogger` themselves.
//! `import_schema` itself never constructs one of these - it defaults to a
//! discarding logger - but a binary embedding this crate can reach for
//! `terminal_logger` instead.

use slog::{o, Drain, Logger};

/// An async, level-filterable terminal logger. Verbosity is controlled by
/// `RUST_LOG`, the same environment variable `slog-envlogger` reads.
pub fn terminal_logger() -> Logger {
    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_envlogger::new(drain);
    let drain = slog_async::Async::new(drain).build().fuse();
    Logger::root(drain, o!())
}
