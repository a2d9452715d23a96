// Pattern 4: Walkthrough - All Seven Patterns in Sequence
// Replays the front-end flow: select a strategy by name, execute it, and
// acknowledge the operation through the observer set.

use std::rc::Rc;

use pattern_library::adapter::{raise_alert, BuzzerAdapter, LegacyBuzzer};
use pattern_library::decorator::{Border, Component, Highlight, PlainText};
use pattern_library::factory::{run_fresh_task, CleanupFactory, IndexFactory};
use pattern_library::observer::{ConsoleAck, Observer, Subject};
use pattern_library::singleton::AppConfig;
use pattern_library::state::{DraftMode, Editor, ReviewMode};
use pattern_library::strategy::{self, Context, PrintData, SaveData};

// ============================================================================
// Example: Click Flow - Selection to Execution to Acknowledgment
// ============================================================================

// One iteration per front-end selection, valid or not. A valid selection
// swaps the strategy in, executes it, and notifies the attached observers;
// an invalid one is reported and changes nothing.
fn click_flow(context: &mut Context, subject: &mut Subject, ack: &Rc<dyn Observer>) {
    for selection in ["print", "save", "export"] {
        match strategy::select(selection) {
            Ok(next) => {
                context.set_strategy(next);
                context.execute_strategy();
                subject.attach(ack);
                subject.notify();
                subject.detach(ack);
            }
            Err(err) => println!("selection '{selection}' rejected: {err}"),
        }
    }
}

fn main() {
    println!("Pattern 4: Walkthrough");
    println!("===============================\n");

    println!("=== Strategy ===");
    let mut context = Context::new(Box::new(PrintData));
    context.execute_strategy();
    context.set_strategy(Box::new(SaveData));
    context.execute_strategy();
    println!();

    println!("=== Factory Method ===");
    run_fresh_task(&CleanupFactory);
    run_fresh_task(&IndexFactory);
    println!();

    println!("=== State ===");
    let mut editor = Editor::new(Box::new(DraftMode));
    editor.request();
    editor.set_mode(Box::new(ReviewMode));
    editor.request();
    println!();

    println!("=== Singleton ===");
    AppConfig::global().perform_task();
    println!();

    println!("=== Adapter ===");
    let buzzer = LegacyBuzzer;
    let adapter = BuzzerAdapter::new(&buzzer);
    raise_alert(&adapter);
    println!();

    println!("=== Decorator ===");
    let plain = PlainText;
    let highlighted = Highlight::new(&plain);
    let bordered = Border::new(&highlighted);
    println!("{}", bordered.render());
    println!();

    println!("=== Observer ===");
    let mut subject = Subject::new();
    let ack: Rc<dyn Observer> = Rc::new(ConsoleAck);
    subject.attach(&ack);
    subject.notify();
    subject.detach(&ack);
    println!();

    println!("=== Click Flow ===");
    click_flow(&mut context, &mut subject, &ack);
}
