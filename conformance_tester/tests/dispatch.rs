//!
//! The dispatch sequencing and filtering tests.
//!

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::sync::Mutex;

use tempfile::TempDir;

use conformance_tester::ConformanceTester;
use conformance_tester::GetterArgs;
use conformance_tester::Runner;
use conformance_tester::RunnerArgs;
use conformance_tester::RunnerRegistry;
use conformance_tester::SkipRegistry;
use conformance_tester::Summary;
use conformance_tester::SuiteType;
use conformance_tester::TestCase;

///
/// Records every invocation, bracketing it with start/end events, and
/// records each test as passed unless its name is listed as failing.
///
struct RecordingRunner {
    events: Arc<Mutex<Vec<String>>>,
    failing: Vec<String>,
    panicking: Vec<String>,
}

impl RecordingRunner {
    fn new(events: Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            events,
            failing: Vec::new(),
            panicking: Vec::new(),
        }
    }

    fn failing(mut self, names: &[&str]) -> Self {
        self.failing = names.iter().map(|name| (*name).to_owned()).collect();
        self
    }

    fn panicking(mut self, names: &[&str]) -> Self {
        self.panicking = names.iter().map(|name| (*name).to_owned()).collect();
        self
    }
}

impl Runner for RecordingRunner {
    fn run(
        &self,
        _arguments: &RunnerArgs,
        test: TestCase,
        summary: Arc<Mutex<Summary>>,
    ) -> anyhow::Result<()> {
        self.events
            .lock()
            .expect("Sync")
            .push(format!("start {}", test.full_name()));

        if self.panicking.contains(&test.name) {
            panic!("runner blew up on {}", test.name);
        }

        let result = if self.failing.contains(&test.name) {
            Err(anyhow::anyhow!("refusing to run {}", test.name))
        } else {
            Summary::passed(summary, test.full_name());
            Ok(())
        };

        self.events
            .lock()
            .expect("Sync")
            .push(format!("end {}", test.full_name()));
        result
    }
}

fn write_fixture(root: &Path, suite: SuiteType, name: &str, content: &str) {
    let directory = root.join(suite.to_string());
    fs::create_dir_all(directory.as_path()).expect("Directory creation failed");
    fs::write(directory.join(name), content).expect("Fixture write failed");
}

fn tester(root: &TempDir, getter_args: GetterArgs) -> (ConformanceTester, Arc<Mutex<Summary>>) {
    let summary = Summary::new(false, true).wrap();
    let mut getter_args = getter_args;
    getter_args.tests_path = Some(root.path().to_path_buf());
    let tester = ConformanceTester::new(summary.clone(), getter_args, RunnerArgs::default());
    (tester, summary)
}

fn registry_with(events: Arc<Mutex<Vec<String>>>) -> RunnerRegistry {
    let mut runners = RunnerRegistry::new();
    for suite in SuiteType::all() {
        runners.register(suite, Box::new(RecordingRunner::new(events.clone())));
    }
    runners
}

fn started(events: &Arc<Mutex<Vec<String>>>) -> Vec<String> {
    events
        .lock()
        .expect("Sync")
        .iter()
        .filter_map(|event| event.strip_prefix("start ").map(str::to_owned))
        .collect()
}

#[test]
fn skip_list_drops_covered_tests() {
    let root = tempfile::tempdir().expect("Temporary directory failure");
    write_fixture(
        root.path(),
        SuiteType::GeneralStateTests,
        "foo.json",
        r#"{"A": {"x": 1}, "B": {"x": 2}}"#,
    );

    let events = Arc::new(Mutex::new(Vec::new()));
    let (tester, _summary) = tester(
        &root,
        GetterArgs {
            skip_tests: vec!["A".to_owned()],
            ..GetterArgs::default()
        },
    );

    let files = tester
        .run(SuiteType::GeneralStateTests, &registry_with(events.clone()))
        .expect("Run failed");

    assert_eq!(files, 1);
    assert_eq!(started(&events), vec!["foo::B"]);
}

#[test]
fn dispatch_is_strictly_sequential() {
    let root = tempfile::tempdir().expect("Temporary directory failure");
    write_fixture(
        root.path(),
        SuiteType::GeneralStateTests,
        "first.json",
        r#"{"t1": {}, "t2": {}}"#,
    );
    write_fixture(
        root.path(),
        SuiteType::GeneralStateTests,
        "second.json",
        r#"{"t3": {}}"#,
    );

    let events = Arc::new(Mutex::new(Vec::new()));
    let (tester, _summary) = tester(&root, GetterArgs::default());

    tester
        .run(SuiteType::GeneralStateTests, &registry_with(events.clone()))
        .expect("Run failed");

    // Every start must be followed by its own end before the next start.
    let events = events.lock().expect("Sync").clone();
    assert_eq!(events.len(), 6);
    for pair in events.chunks(2) {
        let name = pair[0].strip_prefix("start ").expect("Start event");
        assert_eq!(pair[1], format!("end {name}"));
    }
}

#[test]
fn runner_errors_do_not_abort_the_sequence() {
    let root = tempfile::tempdir().expect("Temporary directory failure");
    write_fixture(
        root.path(),
        SuiteType::GeneralStateTests,
        "foo.json",
        r#"{"bad": {}, "good": {}}"#,
    );

    let events = Arc::new(Mutex::new(Vec::new()));
    let mut runners = RunnerRegistry::new();
    runners.register(
        SuiteType::GeneralStateTests,
        Box::new(RecordingRunner::new(events.clone()).failing(&["bad"])),
    );

    let (tester, summary) = tester(&root, GetterArgs::default());
    tester
        .run(SuiteType::GeneralStateTests, &runners)
        .expect("Run failed");

    assert_eq!(started(&events), vec!["foo::bad", "foo::good"]);
    let summary = summary.lock().expect("Sync");
    assert_eq!(summary.invalid_count(), 1);
    assert_eq!(summary.passed_count(), 1);
    assert!(!summary.is_successful());
}

#[test]
fn runner_panics_are_contained() {
    let root = tempfile::tempdir().expect("Temporary directory failure");
    write_fixture(
        root.path(),
        SuiteType::GeneralStateTests,
        "foo.json",
        r#"{"boom": {}, "calm": {}}"#,
    );

    let events = Arc::new(Mutex::new(Vec::new()));
    let mut runners = RunnerRegistry::new();
    runners.register(
        SuiteType::GeneralStateTests,
        Box::new(RecordingRunner::new(events.clone()).panicking(&["boom"])),
    );

    let (tester, summary) = tester(&root, GetterArgs::default());
    tester
        .run(SuiteType::GeneralStateTests, &runners)
        .expect("Run failed");

    assert_eq!(started(&events), vec!["foo::boom", "foo::calm"]);
    let summary = summary.lock().expect("Sync");
    assert_eq!(summary.invalid_count(), 1);
    assert_eq!(summary.passed_count(), 1);
}

#[test]
fn blockchain_suite_requires_the_fork_suffix() {
    let root = tempfile::tempdir().expect("Temporary directory failure");
    write_fixture(
        root.path(),
        SuiteType::BlockchainTests,
        "forked.json",
        r#"{"fooByzantium": {}, "fooFrontier": {}, "barByzantium": {}}"#,
    );

    let events = Arc::new(Mutex::new(Vec::new()));
    let (tester, _summary) = tester(
        &root,
        GetterArgs {
            skip_tests: vec!["bar".to_owned()],
            fork_config: "Byzantium".to_owned(),
            ..GetterArgs::default()
        },
    );

    tester
        .run(SuiteType::BlockchainTests, &registry_with(events.clone()))
        .expect("Run failed");

    assert_eq!(started(&events), vec!["forked::fooByzantium"]);
}

#[test]
fn vm_suite_uses_its_own_skip_list() {
    let root = tempfile::tempdir().expect("Temporary directory failure");
    write_fixture(
        root.path(),
        SuiteType::VMTests,
        "vmArithmetic.json",
        r#"{"loop-mul": {}, "add0": {}, "Call50000": {}}"#,
    );

    let registry = SkipRegistry::default();
    let events = Arc::new(Mutex::new(Vec::new()));
    let (tester, _summary) = tester(&root, GetterArgs::new(&registry, None, None));

    tester
        .run(SuiteType::VMTests, &registry_with(events.clone()))
        .expect("Run failed");

    // `loop-mul` is VM-specific, `Call50000` only lives in the generic
    // slow list which does not apply to the VM suite.
    assert_eq!(
        started(&events),
        vec!["vmArithmetic::add0", "vmArithmetic::Call50000"]
    );
}

#[test]
fn exact_test_selection_supersedes_the_skip_lists() {
    let root = tempfile::tempdir().expect("Temporary directory failure");
    write_fixture(
        root.path(),
        SuiteType::GeneralStateTests,
        "foo.json",
        r#"{"A": {}, "B": {}, "C": {}}"#,
    );

    let events = Arc::new(Mutex::new(Vec::new()));
    let (tester, _summary) = tester(
        &root,
        GetterArgs {
            skip_tests: vec!["B".to_owned()],
            test: Some("B".to_owned()),
            ..GetterArgs::default()
        },
    );

    tester
        .run(SuiteType::GeneralStateTests, &registry_with(events.clone()))
        .expect("Run failed");

    assert_eq!(started(&events), vec!["foo::B"]);
}

#[test]
fn run_skipped_gates_on_file_identifiers() {
    let root = tempfile::tempdir().expect("Temporary directory failure");
    write_fixture(
        root.path(),
        SuiteType::GeneralStateTests,
        "foo.json",
        r#"{"t1": {}}"#,
    );
    write_fixture(
        root.path(),
        SuiteType::GeneralStateTests,
        "bar.json",
        r#"{"t2": {}}"#,
    );

    let events = Arc::new(Mutex::new(Vec::new()));
    let (tester, summary) = tester(
        &root,
        GetterArgs {
            run_skipped: vec!["foo".to_owned()],
            ..GetterArgs::default()
        },
    );

    tester
        .run(SuiteType::GeneralStateTests, &registry_with(events.clone()))
        .expect("Run failed");

    assert_eq!(started(&events), vec!["foo::t1"]);
    assert_eq!(summary.lock().expect("Sync").ignored_count(), 1);
}

#[test]
fn file_filter_restricts_visited_fixtures() {
    let root = tempfile::tempdir().expect("Temporary directory failure");
    write_fixture(
        root.path(),
        SuiteType::GeneralStateTests,
        "add11.json",
        r#"{"a": {}}"#,
    );
    write_fixture(
        root.path(),
        SuiteType::GeneralStateTests,
        "mul11.json",
        r#"{"m": {}}"#,
    );

    let events = Arc::new(Mutex::new(Vec::new()));
    let (tester, _summary) = tester(
        &root,
        GetterArgs {
            file: Some("^add".to_owned()),
            ..GetterArgs::default()
        },
    );

    let files = tester
        .run(SuiteType::GeneralStateTests, &registry_with(events.clone()))
        .expect("Run failed");

    assert_eq!(files, 1);
    assert_eq!(started(&events), vec!["add11::a"]);
}

#[test]
fn custom_state_test_bypasses_discovery() {
    let root = tempfile::tempdir().expect("Temporary directory failure");
    let path = root.path().join("custom.json");
    fs::write(path.as_path(), r#"{"onlyTest": {"env": {}}}"#).expect("Fixture write failed");

    let events = Arc::new(Mutex::new(Vec::new()));
    // No fixture tree exists under the tests path; the narrow loader must
    // not require one.
    let (tester, summary) = tester(
        &root,
        GetterArgs {
            custom_state_test: Some(path),
            ..GetterArgs::default()
        },
    );

    let files = tester
        .run(SuiteType::GeneralStateTests, &registry_with(events.clone()))
        .expect("Run failed");

    assert_eq!(files, 1);
    assert_eq!(started(&events), vec!["custom::onlyTest"]);
    assert_eq!(summary.lock().expect("Sync").passed_count(), 1);
}

#[test]
fn custom_state_test_load_failure_is_reported_not_fatal() {
    let root = tempfile::tempdir().expect("Temporary directory failure");
    let path = root.path().join("broken.json");
    fs::write(path.as_path(), "{ not json").expect("Fixture write failed");

    let events = Arc::new(Mutex::new(Vec::new()));
    let (tester, summary) = tester(
        &root,
        GetterArgs {
            custom_state_test: Some(path),
            ..GetterArgs::default()
        },
    );

    let files = tester
        .run(SuiteType::GeneralStateTests, &registry_with(events.clone()))
        .expect("Run must complete");

    assert_eq!(files, 0);
    assert!(started(&events).is_empty());
    let summary = summary.lock().expect("Sync");
    assert_eq!(summary.failed_count(), 1);
    assert!(!summary.is_successful());
}

#[test]
fn malformed_fixture_in_the_tree_aborts_the_run() {
    let root = tempfile::tempdir().expect("Temporary directory failure");
    write_fixture(
        root.path(),
        SuiteType::GeneralStateTests,
        "broken.json",
        "{ not json",
    );

    let events = Arc::new(Mutex::new(Vec::new()));
    let (tester, _summary) = tester(&root, GetterArgs::default());

    let error = tester
        .run(SuiteType::GeneralStateTests, &registry_with(events.clone()))
        .expect_err("Run must fail");

    assert!(error.to_string().contains("Malformed fixture"));
    assert!(started(&events).is_empty());
}

#[test]
fn default_selection_skips_known_broken_tests() {
    let root = tempfile::tempdir().expect("Temporary directory failure");
    write_fixture(
        root.path(),
        SuiteType::GeneralStateTests,
        "stCreate.json",
        r#"{"CreateHashCollision": {}, "CreateFresh": {}}"#,
    );

    let registry = SkipRegistry::default();
    let events = Arc::new(Mutex::new(Vec::new()));
    let (tester, _summary) = tester(&root, GetterArgs::new(&registry, None, None));

    tester
        .run(SuiteType::GeneralStateTests, &registry_with(events.clone()))
        .expect("Run failed");

    assert_eq!(started(&events), vec!["stCreate::CreateFresh"]);
}
