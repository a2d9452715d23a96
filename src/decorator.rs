//! Decorator pattern: stackable wrappers that extend a component's output.
//!
//! Each wrapper borrows the component it decorates and is itself a
//! [`Component`], so wrappers nest to any depth. Output is one marker line
//! per layer: lines emitted before delegation read outermost-first, lines
//! emitted after delegation outermost-last.

/// A renderable unit.
pub trait Component {
    /// Renders this component, one marker line per layer, newline-joined.
    fn render(&self) -> String;
}

/// Undecorated text block.
pub struct PlainText;

impl Component for PlainText {
    fn render(&self) -> String {
        "Rendering plain text.".to_string()
    }
}

/// Wraps a component without changing its output.
pub struct Passthrough<'a> {
    inner: &'a dyn Component,
}

impl<'a> Passthrough<'a> {
    pub fn new(inner: &'a dyn Component) -> Self {
        Self { inner }
    }
}

impl Component for Passthrough<'_> {
    fn render(&self) -> String {
        self.inner.render()
    }
}

/// Surrounds the wrapped output with border markers.
pub struct Border<'a> {
    inner: &'a dyn Component,
}

impl<'a> Border<'a> {
    pub fn new(inner: &'a dyn Component) -> Self {
        Self { inner }
    }
}

impl Component for Border<'_> {
    fn render(&self) -> String {
        format!("Opening border.\n{}\nClosing border.", self.inner.render())
    }
}

/// Surrounds the wrapped output with highlight markers.
pub struct Highlight<'a> {
    inner: &'a dyn Component,
}

impl<'a> Highlight<'a> {
    pub fn new(inner: &'a dyn Component) -> Self {
        Self { inner }
    }
}

impl Component for Highlight<'_> {
    fn render(&self) -> String {
        format!("Start highlight.\n{}\nEnd highlight.", self.inner.render())
    }
}

// ============================================================================
// Tests
// ============================================================================
