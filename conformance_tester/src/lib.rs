//!
//! The conformance tester library.
//!

pub(crate) mod filters;
pub(crate) mod runner;
pub(crate) mod skip;
pub(crate) mod suite;
pub(crate) mod summary;
pub(crate) mod test;
pub(crate) mod walker;

use std::panic;
use std::panic::AssertUnwindSafe;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::Mutex;

use anyhow::Context;
use regex::Regex;

pub use crate::filters::covered;
pub use crate::filters::Filters;
pub use crate::runner::Runner;
pub use crate::runner::RunnerArgs;
pub use crate::runner::RunnerRegistry;
pub use crate::skip::selection::resolve_skip_list;
pub use crate::skip::SkipRegistry;
pub use crate::skip::TestCategory;
pub use crate::skip::FORK_CONFIG;
pub use crate::suite::SuiteType;
pub use crate::summary::Summary;
pub use crate::test::TestCase;
pub use crate::walker::single::load_fixture;
pub use crate::walker::single::load_single;

///
/// The fixture discovery and filtering arguments.
///
#[derive(Debug, Clone, Default)]
pub struct GetterArgs {
    /// The resolved skip list for the general and blockchain suites.
    pub skip_tests: Vec<String>,
    /// The resolved re-run list: when non-empty, only fixture files whose
    /// identifier is a member are dispatched.
    pub run_skipped: Vec<String>,
    /// The fixed skip list of the VM suite.
    pub skip_vm: Vec<String>,
    /// The active fork identifier.
    pub fork_config: String,
    /// The fixture file-name filter regex.
    pub file: Option<String>,
    /// The exact test name to isolate, superseding all skip logic.
    pub test: Option<String>,
    /// The subdirectory to restrict discovery to.
    pub dir: Option<String>,
    /// The directory exclusion regex.
    pub exclude_dir: Option<String>,
    /// The fixture tree root override.
    pub tests_path: Option<PathBuf>,
    /// A single fixture file to run via the narrow loader, bypassing
    /// discovery entirely.
    pub custom_state_test: Option<PathBuf>,
}

impl GetterArgs {
    ///
    /// Resolves the selection strings against the registry.
    ///
    /// When a re-run selection is present the skip default flips from
    /// `ALL` to `NONE`, so the tests being re-run are not excluded again.
    ///
    pub fn new(
        registry: &SkipRegistry,
        skip: Option<&str>,
        run_skipped: Option<&str>,
    ) -> Self {
        let default_skip = if run_skipped.is_some() { "NONE" } else { "ALL" };

        Self {
            skip_tests: resolve_skip_list(skip, default_skip, registry),
            run_skipped: resolve_skip_list(run_skipped, "NONE", registry),
            skip_vm: registry.prefixes(TestCategory::VmSpecific).to_vec(),
            fork_config: FORK_CONFIG.to_owned(),
            ..Self::default()
        }
    }
}

///
/// The conformance tester: discovers fixtures, applies the layered skip
/// policies and drives the suite runner over the surviving test cases,
/// strictly one at a time.
///
pub struct ConformanceTester {
    /// The summary.
    pub summary: Arc<Mutex<Summary>>,
    /// The discovery and filtering arguments.
    pub getter_args: GetterArgs,
    /// The runner arguments.
    pub runner_args: RunnerArgs,
}

impl ConformanceTester {
    /// The default fixture tree root.
    const DEFAULT_TESTS_PATH: &'static str = "tests";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        summary: Arc<Mutex<Summary>>,
        getter_args: GetterArgs,
        runner_args: RunnerArgs,
    ) -> Self {
        Self {
            summary,
            getter_args,
            runner_args,
        }
    }

    ///
    /// Runs the suite, returning the number of fixture files processed.
    ///
    /// Discovery errors (unreadable tree, malformed fixture) abort the run;
    /// errors inside a runner are recorded against that test only and the
    /// dispatch sequence continues. The next test is never dispatched
    /// before the previous runner call has returned.
    ///
    pub fn run(&self, suite: SuiteType, runners: &RunnerRegistry) -> anyhow::Result<usize> {
        if let Some(ref path) = self.getter_args.custom_state_test {
            return self.run_single(path.as_path(), runners);
        }

        let runner = runners.resolve(suite)?;
        let skip_fn = self.skip_fn(suite);
        let filters = self.filters()?;
        let tests_path = self.tests_path();

        let run_skipped = self.getter_args.run_skipped.as_slice();
        let mut on_case = |test: TestCase| -> anyhow::Result<()> {
            if suite != SuiteType::VMTests
                && !run_skipped.is_empty()
                && !run_skipped.iter().any(|file| file == test.file.as_str())
            {
                Summary::ignored(self.summary.clone(), test.full_name());
                return Ok(());
            }

            self.dispatch(runner, test);
            Ok(())
        };

        walker::walk(
            tests_path.as_path(),
            suite,
            self.getter_args.dir.as_deref(),
            &filters,
            skip_fn.as_ref(),
            &mut on_case,
        )
    }

    ///
    /// Runs the single explicitly selected fixture through the general
    /// state runner, bypassing discovery.
    ///
    /// A load failure is reported as the fixture's failure, not as a
    /// discovery error: the run itself completes.
    ///
    fn run_single(&self, path: &Path, runners: &RunnerRegistry) -> anyhow::Result<usize> {
        let runner = runners.resolve(SuiteType::GeneralStateTests)?;

        match load_single(path) {
            Ok(test) => {
                self.dispatch(runner, test);
                Ok(1)
            }
            Err(error) => {
                Summary::failed(
                    self.summary.clone(),
                    path.display().to_string(),
                    Some(format!("{error:#}")),
                );
                Ok(0)
            }
        }
    }

    ///
    /// Invokes the runner for one test case, isolating its errors.
    ///
    fn dispatch(&self, runner: &dyn Runner, test: TestCase) {
        let name = test.full_name();

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            runner.run(&self.runner_args, test, self.summary.clone())
        }));

        match result {
            Ok(Ok(())) => {}
            Ok(Err(error)) => {
                Summary::invalid(self.summary.clone(), name, format!("{error:#}"));
            }
            Err(payload) => {
                let message = payload
                    .downcast_ref::<&str>()
                    .map(|message| (*message).to_owned())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "Runner panicked".to_owned());
                Summary::invalid(self.summary.clone(), name, message);
            }
        }
    }

    ///
    /// Builds the effective skip function for the suite.
    ///
    /// An exact test-name selection supersedes every other rule. The
    /// blockchain suite additionally requires the active fork as a name
    /// suffix; the VM suite uses its own fixed list.
    ///
    fn skip_fn(&self, suite: SuiteType) -> Box<dyn Fn(&str) -> bool + '_> {
        let args = &self.getter_args;

        if let Some(ref requested) = args.test {
            let requested = requested.clone();
            return Box::new(move |name: &str| name != requested.as_str());
        }

        match suite {
            SuiteType::VMTests => Box::new(|name: &str| covered(name, args.skip_vm.as_slice())),
            SuiteType::BlockchainTests => Box::new(|name: &str| {
                !name.ends_with(args.fork_config.as_str())
                    || covered(name, args.skip_tests.as_slice())
            }),
            SuiteType::GeneralStateTests => {
                Box::new(|name: &str| covered(name, args.skip_tests.as_slice()))
            }
        }
    }

    ///
    /// Compiles the file and directory filters.
    ///
    fn filters(&self) -> anyhow::Result<Filters> {
        let file_filter = self
            .getter_args
            .file
            .as_deref()
            .map(Regex::new)
            .transpose()
            .context("Invalid file filter regex")?;
        let exclude_dir = self
            .getter_args
            .exclude_dir
            .as_deref()
            .map(Regex::new)
            .transpose()
            .context("Invalid directory exclusion regex")?;

        Ok(Filters::new(file_filter, exclude_dir))
    }

    ///
    /// The fixture tree root.
    ///
    fn tests_path(&self) -> PathBuf {
        self.getter_args
            .tests_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_TESTS_PATH))
    }
}
