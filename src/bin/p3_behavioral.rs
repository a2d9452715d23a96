// Pattern 3: Behavioral Patterns - Strategy, State, Observer
// Demonstrates object communication through the pattern catalog.

use std::rc::Rc;

use pattern_library::observer::{ConsoleAck, Observer, Subject, UpdateCounter};
use pattern_library::state::{DraftMode, Editor, ReviewMode};
use pattern_library::strategy::{Context, PrintData, SaveData};

// ============================================================================
// Example: Strategy - Interchangeable Algorithms Behind One Holder
// ============================================================================

fn strategy_example() {
    let mut context = Context::new(Box::new(PrintData));
    context.execute_strategy();

    context.set_strategy(Box::new(SaveData));
    context.execute_strategy();
    println!("  active strategy: {}", context.strategy_name());
}

// ============================================================================
// Example: State - Requests Follow the Holder's Current Mode
// ============================================================================

fn state_example() {
    let mut editor = Editor::new(Box::new(DraftMode));
    editor.request();

    editor.set_mode(Box::new(ReviewMode));
    editor.request();
    println!("  active mode: {}", editor.mode_name());
}

// ============================================================================
// Example: Observer - Broadcasting to Non-Owning Listeners
// ============================================================================

fn observer_example() {
    let mut subject = Subject::new();
    let ack: Rc<dyn Observer> = Rc::new(ConsoleAck);
    let counter = Rc::new(UpdateCounter::new());
    let counting: Rc<dyn Observer> = counter.clone();

    subject.attach(&ack);
    subject.attach(&counting);
    subject.notify();

    subject.detach(&ack);
    subject.notify();

    println!("  updates counted: {}", counter.count());
    println!("  observers attached: {}", subject.observer_count());
}

fn main() {
    println!("Pattern 3: Behavioral Patterns");
    println!("===============================\n");

    println!("=== Strategy ===");
    strategy_example();
    println!();

    println!("=== State ===");
    state_example();
    println!();

    println!("=== Observer ===");
    observer_example();
}
