mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn site_mode_is_updated() {
    let ctx = TestContext::new();

    ctx.cli_with_snapshot()
        .args(["--type", "site", "--mode", "disable_all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated materialized views settings for site: Finance"));

    assert_eq!(ctx.site_mode(), "disable_all");
}

#[test]
fn site_rejects_materialize_now() {
    let ctx = TestContext::new();

    ctx.cli_with_snapshot()
        .args(["-t", "site", "-m", "enable_all", "--materialize-now"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("only applies to workbook/project type"));

    assert_eq!(ctx.site_mode(), "enable");
}

#[test]
fn site_rejects_non_site_wide_mode() {
    let ctx = TestContext::new();

    ctx.cli_with_snapshot()
        .args(["--type", "site", "--mode", "enable"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("enable_all"));
}

#[test]
fn workbook_rejects_site_wide_mode() {
    let ctx = TestContext::new();

    ctx.cli_with_snapshot()
        .args(["--type", "workbook", "--mode", "enable_all"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("do not apply to workbook/project type"));
}

#[test]
fn type_without_mode_is_rejected() {
    let ctx = TestContext::new();

    ctx.cli_with_snapshot()
        .args(["--type", "workbook"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--type <content type> --mode <mode>"));
}

#[test]
fn nothing_to_do_is_rejected() {
    let ctx = TestContext::new();

    ctx.cli_with_snapshot().assert().failure().stderr(predicate::str::contains("--status"));
}

#[test]
fn unknown_mode_value_is_a_usage_error() {
    let ctx = TestContext::new();

    ctx.cli_with_snapshot()
        .args(["--type", "site", "--mode", "enable-all"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn workbooks_by_path_list() {
    let ctx = TestContext::new();
    let list = ctx.write_file(
        "sample_workbook_path_list.txt",
        "Book1,Default\nBook2,Project1\nBook2,Project1/Project2\n",
    );

    ctx.cli_with_snapshot()
        .args(["--type", "workbook", "--mode", "enable", "--path-list"])
        .arg(&list)
        .assert()
        .success()
        .stdout(predicate::str::contains("workbook: Default/Book1"))
        .stdout(predicate::str::contains("workbook: Project1/Project2/Book2"));

    assert!(ctx.workbook_enabled("w1"));
    assert!(ctx.workbook_enabled("w2"));
    assert!(ctx.workbook_enabled("w3"));
    assert!(!ctx.workbook_enabled("w5"));
}

#[test]
fn malformed_path_lines_are_skipped() {
    let ctx = TestContext::new();
    let list = ctx.write_file(
        "sample_workbook_path_list_comma_separated.txt",
        "Book1,Project1,Project2\nBook2,Project1/Project2\n",
    );

    ctx.cli_with_snapshot()
        .args(["--type", "workbook", "--mode", "enable", "--path-list"])
        .arg(&list)
        .assert()
        .success();

    assert!(!ctx.workbook_enabled("w1"));
    assert!(!ctx.workbook_enabled("w2"));
    assert!(ctx.workbook_enabled("w3"));
}

#[test]
fn unmatched_paths_are_reported() {
    let ctx = TestContext::new();
    let list = ctx.write_file("paths.txt", "Book3,Default\n");

    ctx.cli_with_snapshot()
        .args(["--type", "workbook", "--mode", "enable", "--path-list"])
        .arg(&list)
        .assert()
        .success()
        .stdout(predicate::str::contains("Cannot find workbook path: Default/Book3"));

    assert!(!ctx.workbook_enabled("w4"));
}

#[test]
fn workbooks_by_name_list() {
    let ctx = TestContext::new();
    let list = ctx.write_file("sample_workbook_name_list.txt", "Report\n\nGhost\n");

    ctx.cli_with_snapshot()
        .args(["--type", "workbook", "--mode", "enable", "--materialize-now", "--name-list"])
        .arg(&list)
        .assert()
        .success()
        .stdout(predicate::str::contains("Ghost is not in site"));

    assert!(ctx.workbook_enabled("w6"));
    assert!(ctx.workbook_enabled("w7"));
    let snapshot = ctx.read_snapshot();
    assert_eq!(
        snapshot["workbooks"][5]["materialized_views_config"]["run_materialization_now"],
        true
    );
}

#[test]
fn project_name_updates_descendants() {
    let ctx = TestContext::new();

    ctx.cli_with_snapshot()
        .args(["--type", "project_name", "--mode", "enable", "--project-name", "Project1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated materialized views settings for project: Project1"));

    for id in ["w2", "w3", "w4", "w7"] {
        assert!(ctx.workbook_enabled(id), "{} should be enabled", id);
    }
    for id in ["w1", "w5", "w6"] {
        assert!(!ctx.workbook_enabled(id), "{} should stay disabled", id);
    }
}

#[test]
fn ambiguous_project_name_lists_paths() {
    let ctx = TestContext::new();

    ctx.cli_with_snapshot()
        .args(["--type", "project_name", "--mode", "enable", "--project-name", "Sales"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project1/Sales"))
        .stderr(predicate::str::contains("--project-path"));
}

#[test]
fn project_path_selects_one_project() {
    let ctx = TestContext::new();

    ctx.cli_with_snapshot()
        .args(["--type", "project_path", "--mode", "enable", "--project-path", "Project1/Sales"])
        .assert()
        .success();

    assert!(ctx.workbook_enabled("w7"));
    assert!(!ctx.workbook_enabled("w6"));
}

#[test]
fn unknown_project_fails() {
    let ctx = TestContext::new();

    ctx.cli_with_snapshot()
        .args(["--type", "project_name", "--mode", "enable", "--project-name", "Marketing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot find project: Marketing"));
}

#[test]
fn disabled_site_blocks_project_updates() {
    let ctx = TestContext::new();
    let mut snapshot = common::default_snapshot();
    snapshot["site"]["materialized_views_mode"] = "disable".into();
    ctx.write_snapshot(&snapshot);

    ctx.cli_with_snapshot()
        .args(["--type", "project_name", "--mode", "enable", "--project-name", "Project1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("disabled for materialized views"));
}

#[test]
fn dry_run_leaves_snapshot_untouched() {
    let ctx = TestContext::new();
    let before = ctx.read_snapshot();

    ctx.cli_with_snapshot()
        .args(["--type", "project_name", "--mode", "enable", "--project-name", "Project1"])
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert_eq!(ctx.read_snapshot(), before);
}

#[test]
fn dangling_parent_fails_instead_of_guessing() {
    let ctx = TestContext::new();
    let mut snapshot = common::default_snapshot();
    snapshot["projects"][2]["parent_id"] = "missing".into();
    ctx.write_snapshot(&snapshot);

    ctx.cli_with_snapshot()
        .args(["--type", "project_path", "--mode", "enable", "--project-path", "Project1/Project2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown parent 'missing'"));
}

#[test]
fn config_file_supplies_snapshot_and_site() {
    let ctx = TestContext::new();
    let config = ctx.write_file(
        "materialize.toml",
        "[server]\nurl = \"https://analytics.example.com\"\nsite = \"finance\"\n\n[snapshot]\npath = \"site.json\"\n",
    );

    ctx.cli()
        .arg("--config")
        .arg(&config)
        .args(["--type", "site", "--mode", "enable_all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Server: https://analytics.example.com/"));

    assert_eq!(ctx.site_mode(), "enable_all");
}

#[test]
fn site_mismatch_is_rejected() {
    let ctx = TestContext::new();

    ctx.cli_with_snapshot()
        .args(["--site", "marketing", "--type", "site", "--mode", "enable_all"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("site 'marketing' was requested"));

    assert_eq!(ctx.site_mode(), "enable");
}

#[test]
fn missing_snapshot_is_reported() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--type", "site", "--mode", "enable_all"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--snapshot"));
}
