//!
//! The suite runner interface.
//!

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use crate::suite::SuiteType;
use crate::summary::Summary;
use crate::test::TestCase;

///
/// Cross-cutting execution parameters, constructed once per invocation and
/// shared read-only with every runner call.
///
#[derive(Debug, Clone, Default)]
pub struct RunnerArgs {
    /// The active fork whose rules the run targets.
    pub fork_config: String,
    /// Whether to emit a JSON trace of executed steps.
    pub jsontrace: bool,
    /// Extra diagnostics, honoured by the blockchain suite.
    pub debug: bool,
    /// The data index override for the general state suite.
    pub data: Option<usize>,
    /// The gas index override for the general state suite.
    pub gas_limit: Option<usize>,
    /// The value index override for the general state suite.
    pub value: Option<usize>,
}

///
/// A suite test runner.
///
/// Pass/fail is recorded through the summary handle; returning from `run`
/// is the completion signal the dispatcher waits for before advancing to
/// the next test. An `Err` (or a panic) is that single test's problem, not
/// the run's: the dispatcher records it and continues.
///
pub trait Runner {
    ///
    /// Executes one test case.
    ///
    fn run(
        &self,
        arguments: &RunnerArgs,
        test: TestCase,
        summary: Arc<Mutex<Summary>>,
    ) -> anyhow::Result<()>;
}

///
/// The static suite-to-runner mapping, populated at startup.
///
#[derive(Default)]
pub struct RunnerRegistry {
    /// The registered runners.
    runners: HashMap<SuiteType, Box<dyn Runner>>,
}

impl RunnerRegistry {
    ///
    /// A shortcut constructor.
    ///
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Registers the runner for the suite, replacing any previous one.
    ///
    pub fn register(&mut self, suite: SuiteType, runner: Box<dyn Runner>) {
        self.runners.insert(suite, runner);
    }

    ///
    /// Resolves the runner for the suite.
    ///
    pub fn resolve(&self, suite: SuiteType) -> anyhow::Result<&dyn Runner> {
        self.runners
            .get(&suite)
            .map(|runner| runner.as_ref())
            .ok_or_else(|| anyhow::anyhow!("No runner registered for suite `{suite}`"))
    }
}
