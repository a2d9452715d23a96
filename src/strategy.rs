//! Strategy pattern: interchangeable algorithms selected at runtime.
//!
//! A [`Context`] owns exactly one active [`Strategy`] as a trait object and
//! delegates execution to it. Replacing the strategy drops the previous
//! instance, so the holder never dispatches to a stale algorithm.

use crate::error::{PatternError, Result};

/// An interchangeable unit of behavior.
pub trait Strategy {
    /// Short selection name for this algorithm.
    fn name(&self) -> &'static str;

    /// Runs the algorithm and returns its marker line.
    fn execute(&self) -> String;
}

/// Prints the current data set.
pub struct PrintData;

impl Strategy for PrintData {
    fn name(&self) -> &'static str {
        "print"
    }

    fn execute(&self) -> String {
        "Printing data.".to_string()
    }
}

/// Persists the current data set.
pub struct SaveData;

impl Strategy for SaveData {
    fn name(&self) -> &'static str {
        "save"
    }

    fn execute(&self) -> String {
        "Saving data.".to_string()
    }
}

/// Owns the active strategy and delegates execution to it.
///
/// A context holds a strategy from construction on; there is no unset state
/// to guard against, so execution cannot fail.
pub struct Context {
    strategy: Box<dyn Strategy>,
}

impl Context {
    /// Creates a context that takes ownership of its initial strategy.
    pub fn new(initial: Box<dyn Strategy>) -> Self {
        Self { strategy: initial }
    }

    /// Replaces the active strategy. The previous one is dropped here.
    pub fn set_strategy(&mut self, next: Box<dyn Strategy>) {
        self.strategy = next;
    }

    /// Name of the currently active strategy.
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Executes the active strategy, printing and returning its marker line.
    pub fn execute_strategy(&self) -> String {
        let line = self.strategy.execute();
        println!("{line}");
        line
    }
}

/// Resolves a front-end selection to a freshly boxed strategy.
///
/// Selections use the names reported by [`Strategy::name`]; anything else,
/// including the empty string, fails with [`PatternError::InvalidArgument`].
pub fn select(name: &str) -> Result<Box<dyn Strategy>> {
    match name {
        "print" => Ok(Box::new(PrintData)),
        "save" => Ok(Box::new(SaveData)),
        other => Err(PatternError::InvalidArgument(format!(
            "no strategy named '{other}'"
        ))),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    /// Strategy whose lifetime is observable through the shared tracker.
    struct DropTracker {
        _tracker: Rc<()>,
    }

    impl Strategy for DropTracker {
        fn name(&self) -> &'static str {
            "tracked"
        }

        fn execute(&self) -> String {
            "Tracking.".to_string()
        }
    }

    #[test]
    fn test_initial_strategy_runs() {
        let context = Context::new(Box::new(PrintData));

        assert_eq!(context.strategy_name(), "print");
        assert_eq!(context.execute_strategy(), "Printing data.");
    }

    #[test]
    fn test_replaced_strategy_takes_over() {
        let mut context = Context::new(Box::new(PrintData));
        context.set_strategy(Box::new(SaveData));

        let line = context.execute_strategy();
        assert_eq!(line, "Saving data.");
        assert_ne!(line, "Printing data.");
        assert_eq!(context.strategy_name(), "save");
    }

    #[test]
    fn test_repeated_reassignment_keeps_latest() {
        let mut context = Context::new(Box::new(PrintData));
        for _ in 0..3 {
            context.set_strategy(Box::new(SaveData));
            context.set_strategy(Box::new(PrintData));
        }

        assert_eq!(context.execute_strategy(), "Printing data.");
    }

    #[test]
    fn test_replacement_drops_previous_strategy() {
        let tracker = Rc::new(());
        let mut context = Context::new(Box::new(DropTracker {
            _tracker: tracker.clone(),
        }));
        assert_eq!(Rc::strong_count(&tracker), 2);

        context.set_strategy(Box::new(PrintData));
        assert_eq!(Rc::strong_count(&tracker), 1);
    }

    #[test]
    fn test_dropping_context_drops_strategy() {
        let tracker = Rc::new(());
        let context = Context::new(Box::new(DropTracker {
            _tracker: tracker.clone(),
        }));
        assert_eq!(Rc::strong_count(&tracker), 2);

        drop(context);
        assert_eq!(Rc::strong_count(&tracker), 1);
    }

    #[test]
    fn test_select_known_names() {
        assert_eq!(select("print").unwrap().execute(), "Printing data.");
        assert_eq!(select("save").unwrap().execute(), "Saving data.");
    }

    #[test]
    fn test_select_unknown_name() {
        let err = select("export").err().unwrap();
        assert_eq!(
            err,
            PatternError::InvalidArgument("no strategy named 'export'".to_string())
        );
    }

    #[test]
    fn test_select_empty_name() {
        assert!(select("").is_err());
    }
}
