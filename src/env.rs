use std::{cell::RefCell, ffi::OsStr};

/// Run configuration gathered from the command line and environment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    /// Suppress status messages on stderr.
    pub quiet: bool,
}

thread_local! {
    /// Written once by `init`
    static SETTINGS: RefCell<Option<Settings>> = const { RefCell::new(None) };
}

/// Store settings for this run. `DISASM86_QUIET=1` implies `--quiet`.
pub fn init(mut settings: Settings) {
    settings.quiet |= var_is("DISASM86_QUIET", "1");
    store(settings);
}

pub fn is_quiet() -> bool {
    settings().quiet
}

fn store(value: Settings) {
    SETTINGS.with_borrow_mut(|slot| {
        assert!(slot.is_none(), "tried to initialize settings multiple times");
        *slot = Some(value);
    });
}

fn settings() -> Settings {
    SETTINGS.with_borrow(|slot| {
        slot.unwrap_or_else(|| panic!("tried to access settings before initialization"))
    })
}

fn var_is(name: impl AsRef<OsStr>, value: impl AsRef<str>) -> bool {
    std::env::var(name.as_ref()).is_ok_and(|v| v == value.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "before initialization")]
    fn access_before_init_panics() {
        is_quiet();
    }

    #[test]
    #[should_panic(expected = "multiple times")]
    fn double_init_panics() {
        store(Settings::default());
        store(Settings { quiet: true });
    }

    #[test]
    fn flag_sets_quiet() {
        init(Settings { quiet: true });
        assert!(is_quiet());
    }
}
