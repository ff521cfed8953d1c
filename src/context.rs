//! Process-wide, explicitly-constructed context.
//!
//! The reference design keeps the keyword set and the debug-log flag as
//! bare module-level globals. Here both live on an immutable [`Context`]
//! value, built once behind a `OnceLock` and cheap to clone (its fields are
//! `Arc`s), so the documented global-feeling entry points
//! ([`initialize_keywords`], [`set_log`]) coexist with code that would
//! rather thread `&Context` explicitly.

use crate::lexer::KEYWORDS;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

static CONTEXT: OnceLock<Context> = OnceLock::new();

/// Immutable keyword set plus an advisory, mutable log flag.
#[derive(Debug, Clone)]
pub struct Context {
    keywords: Arc<[&'static str]>,
    log_enabled: Arc<AtomicBool>,
}

impl Context {
    fn new() -> Self {
        Self {
            keywords: Arc::from(KEYWORDS),
            log_enabled: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.binary_search(&word).is_ok()
    }

    pub fn log_enabled(&self) -> bool {
        self.log_enabled.load(Ordering::Relaxed)
    }

    pub fn set_log(&self, enabled: bool) {
        self.log_enabled.store(enabled, Ordering::Relaxed);
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

/// Idempotent: the first call builds the process-wide [`Context`]; later
/// calls are no-ops.
pub fn initialize_keywords() {
    CONTEXT.get_or_init(Context::new);
}

/// The process-wide context, initializing it on first use.
pub fn global() -> &'static Context {
    CONTEXT.get_or_init(Context::new)
}

/// Toggle the advisory debug-log flag on the process-wide context.
pub fn set_log(enabled: bool) {
    global().set_log(enabled);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_recognizes_keywords() {
        let ctx = Context::new();
        assert!(ctx.is_keyword("select"));
        assert!(!ctx.is_keyword("rowid"));
    }

    #[test]
    fn global_initialize_is_idempotent() {
        initialize_keywords();
        initialize_keywords();
        assert!(global().is_keyword("where"));
    }
}
