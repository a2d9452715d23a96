//! State pattern: behavior that follows the holder's current mode.
//!
//! Structurally this is the strategy holder again; the difference is intent.
//! A [`Mode`] models the condition an [`Editor`] is in, and requests are
//! answered by whichever mode is active at that moment.

/// A mode of operation for the editor.
pub trait Mode {
    fn name(&self) -> &'static str;

    /// Handles one request in this mode and returns its marker line.
    fn handle_request(&self) -> String;
}

/// Content is still being written.
pub struct DraftMode;

impl Mode for DraftMode {
    fn name(&self) -> &'static str {
        "draft"
    }

    fn handle_request(&self) -> String {
        "Handling request in draft mode.".to_string()
    }
}

/// Content is frozen for review.
pub struct ReviewMode;

impl Mode for ReviewMode {
    fn name(&self) -> &'static str {
        "review"
    }

    fn handle_request(&self) -> String {
        "Handling request in review mode.".to_string()
    }
}

/// Holder whose requests are answered by its current mode.
pub struct Editor {
    mode: Box<dyn Mode>,
}

impl Editor {
    pub fn new(initial: Box<dyn Mode>) -> Self {
        Self { mode: initial }
    }

    /// Switches to the next mode, dropping the previous one.
    pub fn set_mode(&mut self, next: Box<dyn Mode>) {
        self.mode = next;
    }

    pub fn mode_name(&self) -> &'static str {
        self.mode.name()
    }

    /// Routes one request to the current mode, printing its marker line.
    pub fn request(&self) -> String {
        let line = self.mode.handle_request();
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
    fn test_requests_follow_the_initial_mode() {
        let editor = Editor::new(Box::new(DraftMode));

        assert_eq!(editor.mode_name(), "draft");
        assert_eq!(editor.request(), "Handling request in draft mode.");
    }

    #[test]
    fn test_mode_switch_changes_handling() {
        let mut editor = Editor::new(Box::new(DraftMode));
        editor.set_mode(Box::new(ReviewMode));

        assert_eq!(editor.mode_name(), "review");
        assert_eq!(editor.request(), "Handling request in review mode.");
    }

    #[test]
    fn test_switching_back_restores_behavior() {
        let mut editor = Editor::new(Box::new(DraftMode));
        editor.set_mode(Box::new(ReviewMode));
        editor.set_mode(Box::new(DraftMode));

        assert_eq!(editor.request(), "Handling request in draft mode.");
    }

    #[test]
    fn test_consecutive_requests_are_stable() {
        let editor = Editor::new(Box::new(ReviewMode));

        assert_eq!(editor.request(), editor.request());
    }
}
