//!
//! The conformance tester summary element.
//!

use colored::Colorize;

///
/// The outcome of one dispatched test case.
///
#[derive(Debug)]
pub enum Outcome {
    /// The `passed` outcome.
    Passed,
    /// The `failed` outcome. The runner observed an incorrect result.
    Failed {
        /// The mismatch description, if the runner provided one.
        details: Option<String>,
    },
    /// The `invalid` outcome. The runner itself errored or panicked.
    Invalid {
        /// The error description.
        error: String,
    },
    /// The `ignored` outcome. The test was gated out before execution.
    Ignored,
}

///
/// The conformance tester summary element.
///
#[derive(Debug)]
pub struct Element {
    /// The test identifier.
    pub name: String,
    /// The test outcome.
    pub outcome: Outcome,
}

impl Element {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(name: String, outcome: Outcome) -> Self {
        Self { name, outcome }
    }

    ///
    /// Prints the element. Passed and ignored outcomes are reported only in
    /// verbose mode.
    ///
    pub fn print(&self, verbosity: bool) -> Option<String> {
        let outcome = match self.outcome {
            Outcome::Passed if !verbosity => return None,
            Outcome::Ignored if !verbosity => return None,
            Outcome::Passed => "PASSED".green(),
            Outcome::Failed { .. } => "FAILED".bright_red(),
            Outcome::Invalid { .. } => "INVALID".red(),
            Outcome::Ignored => "IGNORED".bright_black(),
        };

        let details = match self.outcome {
            Outcome::Failed {
                details: Some(ref details),
            } => format!("({details})"),
            Outcome::Invalid { ref error } => format!("({error})"),
            _ => String::new(),
        };

        Some(format!("{:>7} {} {}", outcome, self.name, details))
    }
}
