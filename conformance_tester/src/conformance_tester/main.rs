//!
//! The conformance tester executable.
//!

pub(crate) mod arguments;

use std::sync::Arc;
use std::sync::Mutex;
use std::time::Instant;

use colored::Colorize;

use conformance_tester::ConformanceTester;
use conformance_tester::GetterArgs;
use conformance_tester::Runner;
use conformance_tester::RunnerArgs;
use conformance_tester::RunnerRegistry;
use conformance_tester::SkipRegistry;
use conformance_tester::Summary;
use conformance_tester::SuiteType;
use conformance_tester::TestCase;

use self::arguments::Arguments;

/// The success exit code.
const EXIT_CODE_SUCCESS: i32 = 0;

/// The failure exit code.
const EXIT_CODE_FAILURE: i32 = 1;

///
/// The application entry point.
///
fn main() {
    let exit_code = match main_inner(Arguments::new()) {
        Ok(()) => EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let summary = Summary::new(arguments.verbosity, arguments.quiet).wrap();

    let registry = SkipRegistry::default();
    let mut getter_args = GetterArgs::new(
        &registry,
        arguments.skip.as_deref(),
        arguments.run_skipped.as_deref(),
    );
    getter_args.file = arguments.file;
    getter_args.test = arguments.test;
    getter_args.dir = arguments.dir;
    getter_args.exclude_dir = arguments.exclude_dir;
    getter_args.tests_path = arguments.tests_path;
    getter_args.custom_state_test = arguments.custom_state_test;

    let runner_args = RunnerArgs {
        fork_config: getter_args.fork_config.clone(),
        jsontrace: arguments.jsontrace,
        debug: arguments.debug,
        data: arguments.data,
        gas_limit: arguments.gas,
        value: arguments.value,
    };

    let mut runners = RunnerRegistry::new();
    for suite in SuiteType::all() {
        runners.register(suite, Box::new(DryRunner));
    }

    let tester = ConformanceTester::new(summary.clone(), getter_args, runner_args);

    let run_time_start = Instant::now();
    println!(
        "     {} {} fixtures",
        "Running".bright_green().bold(),
        arguments.suite,
    );

    let files = tester.run(arguments.suite, &runners)?;

    let summary = Summary::unwrap_arc(summary);
    print!("{summary}");
    println!(
        "    {} {} fixture files in {}m{:02}s",
        "Finished".bright_green().bold(),
        files,
        run_time_start.elapsed().as_secs() / 60,
        run_time_start.elapsed().as_secs() % 60,
    );

    if !summary.is_successful() {
        anyhow::bail!("");
    }

    Ok(())
}

///
/// Records every dispatched test as passed without executing it.
///
/// The harness's smallest useful consumer: running a suite with this
/// runner checks the skip configuration and fixture well-formedness end
/// to end. Real execution runners are registered by the embedding VM
/// implementation.
///
struct DryRunner;

impl Runner for DryRunner {
    fn run(
        &self,
        _arguments: &RunnerArgs,
        test: TestCase,
        summary: Arc<Mutex<Summary>>,
    ) -> anyhow::Result<()> {
        Summary::passed(summary, test.full_name());
        Ok(())
    }
}
