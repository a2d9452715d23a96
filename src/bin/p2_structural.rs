// Pattern 2: Structural Patterns - Adapter, Decorator
// Demonstrates composing objects through the pattern catalog.

use pattern_library::adapter::{raise_alert, BuzzerAdapter, LegacyBuzzer};
use pattern_library::decorator::{Border, Component, Highlight, Passthrough, PlainText};

// ============================================================================
// Example: Adapter - Borrowed Wrapper Over an Incompatible Callee
// ============================================================================

fn adapter_example() {
    let buzzer = LegacyBuzzer;
    let adapter = BuzzerAdapter::new(&buzzer);
    raise_alert(&adapter);
}

// ============================================================================
// Example: Decorator - Stackable Wrappers Around One Component
// ============================================================================

fn decorator_example() {
    let plain = PlainText;
    println!("bare:\n{}\n", plain.render());

    let quiet = Passthrough::new(&plain);
    println!("passthrough:\n{}\n", quiet.render());

    let highlighted = Highlight::new(&plain);
    let bordered = Border::new(&highlighted);
    println!("nested:\n{}", bordered.render());
}

fn main() {
    println!("Pattern 2: Structural Patterns");
    println!("===============================\n");

    println!("=== Adapter ===");
    adapter_example();
    println!();

    println!("=== Decorator ===");
    decorator_example();
}
