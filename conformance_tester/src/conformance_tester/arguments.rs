//!
//! The conformance tester arguments.
//!

use std::path::PathBuf;

use structopt::StructOpt;

use conformance_tester::SuiteType;

///
/// The conformance tester arguments.
///
#[derive(Debug, StructOpt)]
#[structopt(
    name = "conformance-tester",
    about = "Fixture discovery, filtering and dispatch harness for VM conformance suites"
)]
pub struct Arguments {
    /// The logging level.
    #[structopt(short = "v", long = "verbose")]
    pub verbosity: bool,

    /// Suppresses the output completely.
    #[structopt(short = "q", long = "quiet")]
    pub quiet: bool,

    /// The test suite to run.
    /// Available suites: `GeneralStateTests`, `BlockchainTests`, `VMTests`.
    #[structopt(long = "suite", default_value = "GeneralStateTests")]
    pub suite: SuiteType,

    /// Skip categories, comma-separated: `broken`, `permanent`, `slow`,
    /// `all`, `none`. Defaults to `all`, or `none` when `--run-skipped`
    /// is set.
    #[structopt(long = "skip")]
    pub skip: Option<String>,

    /// Re-runs normally skipped tests: a comma-separated category
    /// selection whose fixture files are dispatched despite the skip
    /// lists.
    #[structopt(long = "run-skipped")]
    pub run_skipped: Option<String>,

    /// Restricts discovery to fixture files matching the regex.
    #[structopt(long = "file")]
    pub file: Option<String>,

    /// Isolates one test by exact name, superseding all skip logic.
    #[structopt(long = "test")]
    pub test: Option<String>,

    /// Restricts discovery to the specified subdirectory.
    #[structopt(long = "dir")]
    pub dir: Option<String>,

    /// Never descends into directories matching the regex.
    #[structopt(long = "exclude-dir")]
    pub exclude_dir: Option<String>,

    /// Overrides the fixture tree root.
    #[structopt(long = "tests-path", parse(from_os_str))]
    pub tests_path: Option<PathBuf>,

    /// Runs a single state-test fixture file, bypassing discovery.
    #[structopt(long = "custom-state-test", parse(from_os_str))]
    pub custom_state_test: Option<PathBuf>,

    /// Emits a JSON trace of executed steps.
    #[structopt(long = "jsontrace")]
    pub jsontrace: bool,

    /// Extra diagnostics for the blockchain suite.
    #[structopt(long = "debug")]
    pub debug: bool,

    /// The data index override for the general state suite.
    #[structopt(long = "data")]
    pub data: Option<usize>,

    /// The gas index override for the general state suite.
    #[structopt(long = "gas")]
    pub gas: Option<usize>,

    /// The value index override for the general state suite.
    #[structopt(long = "value")]
    pub value: Option<usize>,
}

impl Arguments {
    ///
    /// A shortcut constructor.
    ///
    pub fn new() -> Self {
        Self::from_args()
    }
}
