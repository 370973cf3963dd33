//! Scanner capability consumed by the workflows.
//!
//! The camera pipeline and symbology configuration live outside the core; a
//! workflow only switches the scanner on when it enters scanning and off on
//! every way out.

use crate::domain::WorkflowError;

pub trait CodeScanner {
    fn activate(&mut self) -> Result<(), WorkflowError>;
    fn deactivate(&mut self);
    fn is_active(&self) -> bool;
}

/// Scanner fed by hand-typed codes. Only tracks whether it is listening.
#[derive(Debug, Default)]
pub struct ManualScanner {
    active: bool,
}

impl ManualScanner {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CodeScanner for ManualScanner {
    fn activate(&mut self) -> Result<(), WorkflowError> {
        self.active = true;
        Ok(())
    }

    fn deactivate(&mut self) {
        self.active = false;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

impl<S: CodeScanner + ?Sized> CodeScanner for Box<S> {
    fn activate(&mut self) -> Result<(), WorkflowError> {
        (**self).activate()
    }

    fn deactivate(&mut self) {
        (**self).deactivate()
    }

    fn is_active(&self) -> bool {
        (**self).is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_scanner_toggles() {
        let mut scanner = ManualScanner::new();
        assert!(!scanner.is_active());

        scanner.activate().unwrap();
        assert!(scanner.is_active());

        scanner.deactivate();
        assert!(!scanner.is_active());
    }
}
