//! Factory method pattern: creators that allocate one task variant each.

/// A unit of work produced by a [`TaskFactory`].
pub trait Task {
    /// Variant label, fixed at creation.
    fn label(&self) -> &'static str;

    /// Runs the task and returns its marker line.
    fn run(&self) -> String;
}

/// Creates tasks of one fixed variant.
///
/// Every call allocates a fresh task and hands ownership to the caller;
/// factories keep no reference to what they produce.
pub trait TaskFactory {
    fn create_task(&self) -> Box<dyn Task>;
}

pub struct CleanupTask {
    label: &'static str,
}

impl Task for CleanupTask {
    fn label(&self) -> &'static str {
        self.label
    }

    fn run(&self) -> String {
        "Sweeping expired entries.".to_string()
    }
}

pub struct IndexTask {
    label: &'static str,
}

impl Task for IndexTask {
    fn label(&self) -> &'static str {
        self.label
    }

    fn run(&self) -> String {
        "Rebuilding search index.".to_string()
    }
}

/// Produces [`CleanupTask`]s.
pub struct CleanupFactory;

impl TaskFactory for CleanupFactory {
    fn create_task(&self) -> Box<dyn Task> {
        Box::new(CleanupTask { label: "cleanup" })
    }
}

/// Produces [`IndexTask`]s.
pub struct IndexFactory;

impl TaskFactory for IndexFactory {
    fn create_task(&self) -> Box<dyn Task> {
        Box::new(IndexTask { label: "index" })
    }
}

/// Creates and runs one task through any factory, printing its marker line.
pub fn run_fresh_task(factory: &dyn TaskFactory) -> String {
    let task = factory.create_task();
    let line = task.run();
    println!("{line}");
    line
}

// ============================================================================
// Tests
// ============================================================================
