// Pattern 1: Creational Patterns - Factory Method, Singleton
// Demonstrates object creation through the pattern catalog.

use pattern_library::factory::{run_fresh_task, CleanupFactory, IndexFactory, TaskFactory};
use pattern_library::singleton::AppConfig;

// ============================================================================
// Example: Factory Method - Creators Allocating One Variant Each
// ============================================================================

fn factory_example() {
    let factories: [&dyn TaskFactory; 2] = [&CleanupFactory, &IndexFactory];
    for factory in factories {
        run_fresh_task(factory);
    }

    // Every call hands out a fresh allocation.
    let first = CleanupFactory.create_task();
    let second = CleanupFactory.create_task();
    println!(
        "  distinct {} tasks: {}",
        first.label(),
        !std::ptr::eq(first.as_ref(), second.as_ref())
    );
}

// ============================================================================
// Example: Singleton - One Lazily Created Process-Wide Instance
// ============================================================================

fn singleton_example() {
    let config = AppConfig::global();
    config.perform_task();
    println!("  app_name: {}", config.app_name());
    println!("  debug_mode: {}", config.debug_mode());
    println!(
        "  same instance: {}",
        std::ptr::eq(config, AppConfig::global())
    );
}

fn main() {
    println!("Pattern 1: Creational Patterns");
    println!("===============================\n");

    println!("=== Factory Method ===");
    factory_example();
    println!();

    println!("=== Singleton ===");
    singleton_example();
}
