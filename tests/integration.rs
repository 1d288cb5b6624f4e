//! End-to-end tests for the scenario runner
//!
//! These drive the real runner against `sh`, using temporary directories as
//! the suite base so step side effects can be observed on disk.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use smoketest::suite::{resolve_step, run_suite, RunOptions, Scenario, TestStep};
use smoketest::template::Context;
use smoketest::Error;

fn context(pairs: &[(&str, &str)]) -> Context {
    Context::new(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<BTreeMap<_, _>>(),
    )
}

fn scenario(steps: Vec<TestStep>) -> Scenario {
    Scenario {
        name: "test".to_string(),
        description: None,
        steps,
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[tokio::test]
async fn passing_suite_runs_every_step_in_order() {
    let base = tempfile::tempdir().unwrap();
    let suite = scenario(vec![
        TestStep::new("", "echo one >> log"),
        TestStep::new("", "echo two >> log"),
        TestStep::new("", "echo three >> log"),
    ]);

    let result = run_suite(&suite, &context(&[]), base.path(), &RunOptions::default()).await;

    assert!(result.passed);
    assert_eq!(result.steps_run, 3);
    assert_eq!(result.steps_total, 3);
    assert!(result.failure.is_none());
    // Declaration order is execution order.
    assert_eq!(read(&base.path().join("log")), "one\ntwo\nthree\n");
}

#[tokio::test]
async fn failing_step_short_circuits_the_rest() {
    let base = tempfile::tempdir().unwrap();
    let suite = scenario(vec![
        TestStep::new("", "touch first"),
        TestStep::new("", "exit 1"),
        TestStep::new("", "touch third"),
    ]);

    let result = run_suite(&suite, &context(&[]), base.path(), &RunOptions::default()).await;

    assert!(!result.passed);
    assert_eq!(result.steps_run, 2);
    let failure = result.failure.unwrap();
    assert_eq!(failure.step, 2);
    assert!(matches!(failure.error, Error::CommandFailed { code: 1, .. }));

    assert!(base.path().join("first").exists());
    // Step 3 never ran.
    assert!(!base.path().join("third").exists());
}

#[tokio::test]
async fn captured_output_is_attached_to_the_failure() {
    let base = tempfile::tempdir().unwrap();
    let suite = scenario(vec![TestStep::new("", "echo boom; exit 1")]);

    let result = run_suite(&suite, &context(&[]), base.path(), &RunOptions::default()).await;

    match result.failure.unwrap().error {
        Error::CommandFailed { command, output, .. } => {
            assert_eq!(command.trim(), "echo boom; exit 1");
            assert!(output.contains("boom"));
        }
        other => panic!("expected CommandFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn directory_carries_over_to_steps_without_one() {
    let base = tempfile::tempdir().unwrap();
    fs::create_dir(base.path().join("app")).unwrap();

    let suite = scenario(vec![
        TestStep::new("app", "touch first"),
        // No directory template: this step inherits "app", not the base.
        TestStep::new("", "touch second"),
    ]);

    let result = run_suite(&suite, &context(&[]), base.path(), &RunOptions::default()).await;

    assert!(result.passed);
    assert!(base.path().join("app").join("first").exists());
    assert!(base.path().join("app").join("second").exists());
    assert!(!base.path().join("second").exists());
}

#[tokio::test]
async fn directories_resolve_from_the_base_not_the_previous_step() {
    let base = tempfile::tempdir().unwrap();
    fs::create_dir(base.path().join("a")).unwrap();
    fs::create_dir(base.path().join("b")).unwrap();

    let suite = scenario(vec![
        TestStep::new("a", "touch in_a"),
        // "b" means <base>/b, not <base>/a/b.
        TestStep::new("b", "touch in_b"),
    ]);

    let result = run_suite(&suite, &context(&[]), base.path(), &RunOptions::default()).await;

    assert!(result.passed);
    assert!(base.path().join("a").join("in_a").exists());
    assert!(base.path().join("b").join("in_b").exists());
}

#[tokio::test]
async fn templated_directory_and_command_resolve_together() {
    let base = tempfile::tempdir().unwrap();
    fs::create_dir(base.path().join("demo-app")).unwrap();

    let suite = scenario(vec![TestStep::new(
        "{{.ExampleApp}}",
        "echo {{.Domain}} > domain",
    )]);
    let ctx = context(&[("ExampleApp", "demo-app"), ("Domain", "example.com")]);

    let result = run_suite(&suite, &ctx, base.path(), &RunOptions::default()).await;

    assert!(result.passed);
    assert_eq!(
        read(&base.path().join("demo-app").join("domain")),
        "example.com\n"
    );
}

#[tokio::test]
async fn unknown_field_aborts_before_any_process_runs() {
    let base = tempfile::tempdir().unwrap();
    let suite = scenario(vec![
        TestStep::new("", "touch ran && echo {{.Missing}}"),
        TestStep::new("", "touch later"),
    ]);

    let result = run_suite(&suite, &context(&[]), base.path(), &RunOptions::default()).await;

    assert!(!result.passed);
    assert_eq!(result.steps_run, 1);
    let failure = result.failure.unwrap();
    assert_eq!(failure.step, 1);
    assert!(matches!(failure.error, Error::Resolution { .. }));

    // Resolution failed, so the shell was never invoked.
    assert!(!base.path().join("ran").exists());
    assert!(!base.path().join("later").exists());
}

#[tokio::test]
async fn malformed_template_aborts_the_suite() {
    let base = tempfile::tempdir().unwrap();
    let suite = scenario(vec![TestStep::new("", "echo {{.Domain")]);

    let result = run_suite(
        &suite,
        &context(&[("Domain", "example.com")]),
        base.path(),
        &RunOptions::default(),
    )
    .await;

    assert!(!result.passed);
    assert!(matches!(
        result.failure.unwrap().error,
        Error::Template { .. }
    ));
}

#[tokio::test]
async fn missing_directory_is_a_directory_error() {
    let base = tempfile::tempdir().unwrap();
    let suite = scenario(vec![TestStep::new("nope", "true")]);

    let result = run_suite(&suite, &context(&[]), base.path(), &RunOptions::default()).await;

    assert!(!result.passed);
    assert!(matches!(
        result.failure.unwrap().error,
        Error::Directory { .. }
    ));
}

#[tokio::test]
async fn dry_run_resolves_steps_but_executes_nothing() {
    let base = tempfile::tempdir().unwrap();
    let suite = scenario(vec![
        TestStep::new("", "touch marker"),
        // Directories need not exist in a dry run.
        TestStep::new("created-later", "touch other"),
    ]);
    let options = RunOptions {
        dry_run: true,
        ..Default::default()
    };

    let result = run_suite(&suite, &context(&[]), base.path(), &options).await;

    assert!(result.passed);
    assert_eq!(result.steps_run, 2);
    assert!(!base.path().join("marker").exists());
}

#[tokio::test]
async fn dry_run_still_fails_on_unresolvable_templates() {
    let base = tempfile::tempdir().unwrap();
    let suite = scenario(vec![TestStep::new("", "echo {{.Missing}}")]);
    let options = RunOptions {
        dry_run: true,
        ..Default::default()
    };

    let result = run_suite(&suite, &context(&[]), base.path(), &options).await;

    assert!(!result.passed);
    assert!(matches!(
        result.failure.unwrap().error,
        Error::Resolution { .. }
    ));
}

#[tokio::test]
async fn scenario_file_round_trips_through_the_runner() {
    let base = tempfile::tempdir().unwrap();
    let path = base.path().join("scenario.yaml");
    fs::write(
        &path,
        r#"
name: file-backed
steps:
  - cmd: echo {{.Domain}} > domain
  - cmd: cat domain
"#,
    )
    .unwrap();

    let suite = Scenario::load(&path).unwrap();
    let ctx = context(&[("Domain", "example.com")]);
    let result = run_suite(&suite, &ctx, base.path(), &RunOptions::default()).await;

    assert!(result.passed);
    assert_eq!(read(&base.path().join("domain")), "example.com\n");
}

#[test]
fn resolved_steps_serialize_for_machine_consumption() {
    let ctx = context(&[("ExampleApp", "demo-app")]);
    let step = TestStep::new("{{.ExampleApp}}", "git push deis master");
    let resolved = resolve_step(&step, &ctx, Path::new("/work")).unwrap();

    let json = serde_json::to_value(&resolved).unwrap();
    assert_eq!(json["dir"], "/work/demo-app");
    assert_eq!(json["cmd"], "git push deis master");
}
