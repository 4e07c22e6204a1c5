/// Runs a cleanup closure when dropped.
///
/// Used to put the terminal back into cooked mode whether `main` returns
/// normally, bails with an error, or panics while the TUI is up.
///
/// # Examples
///
/// ```
/// use hist_finder::utils::guard::ExitGuard;
///
/// let _guard = ExitGuard::new(|| {
///     println!("restored");
/// });
/// // closure runs when _guard goes out of scope
/// ```
pub struct ExitGuard<F: FnOnce()> {
    on_exit: Option<F>,
}

impl<F: FnOnce()> ExitGuard<F> {
    pub fn new(f: F) -> Self {
        Self { on_exit: Some(f) }
    }
}

impl<F: FnOnce()> Drop for ExitGuard<F> {
    fn drop(&mut self) {
        if let Some(f) = self.on_exit.take() {
            f()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_runs_on_drop() {
        let ran = Cell::new(false);
        {
            let _guard = ExitGuard::new(|| ran.set(true));
        }
        assert!(ran.get());
    }

    #[test]
    fn test_runs_on_panic() {
        let ran = Cell::new(false);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = ExitGuard::new(|| ran.set(true));
            panic!("boom");
        }));
        assert!(result.is_err());
        assert!(ran.get());
    }
}
