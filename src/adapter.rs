//! Adapter pattern: a target-compatible wrapper over an incompatible callee.

/// The interface alert callers expect.
pub trait Alert {
    /// Raises the alert and returns its marker line.
    fn send_alert(&self) -> String;
}

/// Legacy device whose call shape [`Alert`] callers cannot use directly.
pub struct LegacyBuzzer;

impl LegacyBuzzer {
    /// The incompatible operation the adapter translates to.
    pub fn buzz(&self) -> String {
        "Buzzing legacy buzzer.".to_string()
    }
}

/// Presents a borrowed [`LegacyBuzzer`] through the [`Alert`] interface.
///
/// The adapter never owns the buzzer; the borrow ties the adapter's lifetime
/// to the device it wraps.
pub struct BuzzerAdapter<'a> {
    buzzer: &'a LegacyBuzzer,
}

impl<'a> BuzzerAdapter<'a> {
    pub fn new(buzzer: &'a LegacyBuzzer) -> Self {
        Self { buzzer }
    }
}

impl Alert for BuzzerAdapter<'_> {
    fn send_alert(&self) -> String {
        self.buzzer.buzz()
    }
}

/// Raises one alert through any target-compatible implementation, printing
/// its marker line.
pub fn raise_alert(alert: &dyn Alert) -> String {
    let line = alert.send_alert();
    println!("{line}");
    line
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapter_translates_the_call_shape_only() {
        let buzzer = LegacyBuzzer;
        let adapter = BuzzerAdapter::new(&buzzer);

        assert_eq!(adapter.send_alert(), buzzer.buzz());
        assert_eq!(adapter.send_alert(), "Buzzing legacy buzzer.");
    }

    #[test]
    fn test_adaptee_outlives_the_adapter() {
        let buzzer = LegacyBuzzer;
        {
            let adapter = BuzzerAdapter::new(&buzzer);
            assert_eq!(raise_alert(&adapter), "Buzzing legacy buzzer.");
        }

        assert_eq!(buzzer.buzz(), "Buzzing legacy buzzer.");
    }
}
