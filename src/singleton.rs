//! Singleton pattern: one lazily created, process-wide instance.

use std::sync::OnceLock;

/// Process-wide application configuration.
///
/// The only way to reach an `AppConfig` is [`AppConfig::global`], which
/// creates the instance on first access and returns the same `&'static`
/// reference from then on, no matter which thread asks first. The type is
/// neither `Clone` nor `Copy`, so the instance cannot be duplicated:
///
/// ```compile_fail
/// let copy = *pattern_library::singleton::AppConfig::global();
/// ```
pub struct AppConfig {
    app_name: &'static str,
    debug_mode: bool,
}

impl AppConfig {
    /// Returns the shared instance, creating it on first call.
    pub fn global() -> &'static AppConfig {
        static CONFIG: OnceLock<AppConfig> = OnceLock::new();
        CONFIG.get_or_init(|| AppConfig {
            app_name: "pattern-library",
            debug_mode: cfg!(debug_assertions),
        })
    }

    pub fn app_name(&self) -> &'static str {
        self.app_name
    }

    pub fn debug_mode(&self) -> bool {
        self.debug_mode
    }

    /// Performs the instance's fixed task, printing and returning its marker.
    pub fn perform_task(&self) -> String {
        let line = format!("Configuring {}.", self.app_name);
        println!("{line}");
        line
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_returns_the_same_instance() {
        let first = AppConfig::global();
        let second = AppConfig::global();

        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_instance_is_initialized() {
        let config = AppConfig::global();

        assert_eq!(config.app_name(), "pattern-library");
        assert_eq!(config.debug_mode(), cfg!(debug_assertions));
    }

    #[test]
    fn test_perform_task_marker() {
        assert_eq!(
            AppConfig::global().perform_task(),
            "Configuring pattern-library."
        );
    }
}
