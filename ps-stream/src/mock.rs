use ps_core::error::Result;
use ps_core::CommandRunner;
use std::cell::RefCell;
use std::collections::HashMap;

/// Records every script it is asked to run and answers with a canned code.
#[derive(Debug, Default)]
pub struct MockRunner {
    exit_codes: HashMap<String, i32>,
    calls: RefCell<Vec<String>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts without an explicit code exit with 0.
    pub fn with_exit_code(mut self, script: &str, code: i32) -> Self {
        self.exit_codes.insert(script.to_string(), code);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, script: &str) -> Result<i32> {
        self.calls.borrow_mut().push(script.to_string());
        Ok(self.exit_codes.get(script).copied().unwrap_or(0))
    }

    fn describe(&self, script: &str) -> String {
        format!("mock {script}")
    }
}
