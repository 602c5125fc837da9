//! Process-wide settings.
//!
//! [`Settings`] holds an optional **evaluation date** — the date treated as
//! "today" by dimension generation when the caller does not pin one on the
//! builder itself. Resolution order at generation time is: explicit builder
//! value, then this setting, then the system clock.
//!
//! Thread safety: the evaluation date sits behind a `Mutex` so it can be
//! changed from any thread. A test that sets it should restore it when done.

use std::sync::{Mutex, OnceLock};

/// Process-wide settings used by the datedim-rs workspace.
///
/// The only setting is the evaluation date, stored as a day serial number
/// (see `dd-time`'s `Date` for the serial convention).
pub struct Settings {
    evaluation_date: Mutex<Option<i32>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            evaluation_date: Mutex::new(None),
        })
    }

    /// Return the pinned evaluation date serial, if any.
    pub fn evaluation_date_serial(&self) -> Option<i32> {
        *self
            .evaluation_date
            .lock()
            .expect("Settings mutex poisoned")
    }

    /// Pin the evaluation date as a day serial number.
    pub fn set_evaluation_date_serial(&self, serial: i32) {
        *self
            .evaluation_date
            .lock()
            .expect("Settings mutex poisoned") = Some(serial);
    }

    /// Clear the evaluation date, falling back to "use the system clock".
    pub fn reset_evaluation_date(&self) {
        *self
            .evaluation_date
            .lock()
            .expect("Settings mutex poisoned") = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_reset() {
        let s = Settings::instance();
        assert_eq!(s.evaluation_date_serial(), None);
        s.set_evaluation_date_serial(45_000);
        assert_eq!(s.evaluation_date_serial(), Some(45_000));
        s.reset_evaluation_date();
        assert_eq!(s.evaluation_date_serial(), None);
    }
}
