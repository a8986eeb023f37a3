use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tariq(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tariq").unwrap();
    cmd.current_dir(dir.path()).env("TARIQ_ROOT", dir.path());
    cmd
}

fn init_board(dir: &TempDir) {
    tariq(dir).arg("init").assert().success();
}

fn json_out(cmd: &mut Command) -> serde_json::Value {
    let out = cmd.arg("--json").assert().success().get_output().stdout.clone();
    serde_json::from_slice(&out).unwrap()
}

fn add(dir: &TempDir, table: &str, text: &str) -> String {
    let value = json_out(tariq(dir).args([table, "add", text]));
    value["id"].as_str().unwrap().to_string()
}

/// Residents A-D, supervisor X plus both managers, tasks T1-T5.
fn seed_board(dir: &TempDir) {
    init_board(dir);
    for r in ["A", "B", "C", "D"] {
        add(dir, "resident", r);
    }
    for s in ["X", "هشام القاضي", "سيف حماد"] {
        add(dir, "supervisor", s);
    }
    for t in ["T1", "T2", "T3", "T4", "T5"] {
        add(dir, "task", t);
    }
}

// ---------------------------------------------------------------------------
// tariq init
// ---------------------------------------------------------------------------

#[test]
fn init_creates_board_files() {
    let dir = TempDir::new().unwrap();
    tariq(&dir)
        .args(["init", "--name", "ward"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized tariq board 'ward'"));

    assert!(dir.path().join(".tariq/config.yaml").exists());
    assert!(dir.path().join(".tariq/tasks.yaml").exists());
    assert!(dir.path().join(".tariq/residents.yaml").exists());
    assert!(dir.path().join(".tariq/supervisors.yaml").exists());
}

#[test]
fn init_is_idempotent() {
    let dir = TempDir::new().unwrap();
    init_board(&dir);
    add(&dir, "resident", "A");
    tariq(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already initialized"));

    let rows = json_out(tariq(&dir).args(["resident", "list"]));
    assert_eq!(rows.as_array().unwrap().len(), 1);
}

#[test]
fn commands_fail_before_init() {
    let dir = TempDir::new().unwrap();
    tariq(&dir)
        .args(["task", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not initialized"));
}

// ---------------------------------------------------------------------------
// shifts / config
// ---------------------------------------------------------------------------

#[test]
fn shifts_lists_both_managers() {
    let dir = TempDir::new().unwrap();
    init_board(&dir);
    tariq(&dir)
        .arg("shifts")
        .assert()
        .success()
        .stdout(predicate::str::contains("هشام القاضي"))
        .stdout(predicate::str::contains("سيف حماد"));
}

#[test]
fn config_validate_default_is_clean() {
    let dir = TempDir::new().unwrap();
    init_board(&dir);
    tariq(&dir)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config is valid"));
}

#[test]
fn config_validate_fails_on_inverted_quota() {
    let dir = TempDir::new().unwrap();
    init_board(&dir);
    let path = dir.path().join(".tariq/config.yaml");
    let yaml = std::fs::read_to_string(&path).unwrap();
    std::fs::write(&path, yaml.replace("min_tasks: 4", "min_tasks: 9")).unwrap();

    tariq(&dir)
        .args(["config", "validate"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("[error]"));
}

#[test]
fn config_show_prints_yaml() {
    let dir = TempDir::new().unwrap();
    init_board(&dir);
    tariq(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sessions_per_supervisor"));
}

// ---------------------------------------------------------------------------
// resident / supervisor / task
// ---------------------------------------------------------------------------

#[test]
fn resident_add_list_edit() {
    let dir = TempDir::new().unwrap();
    init_board(&dir);
    let id = add(&dir, "resident", "Omar");

    tariq(&dir)
        .args(["resident", "edit", &id, "Omar", "Said"])
        .assert()
        .success();

    tariq(&dir)
        .args(["resident", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Omar Said"));
}

#[test]
fn task_add_blank_fails() {
    let dir = TempDir::new().unwrap();
    init_board(&dir);
    tariq(&dir)
        .args(["task", "add", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("task title"));
}

#[test]
fn edit_unknown_id_fails() {
    let dir = TempDir::new().unwrap();
    init_board(&dir);
    tariq(&dir)
        .args(["supervisor", "edit", "missing", "X"])
        .assert()
        .failure();
}

#[test]
fn delete_with_yes() {
    let dir = TempDir::new().unwrap();
    init_board(&dir);
    let id = add(&dir, "task", "Rounds");

    tariq(&dir)
        .args(["task", "delete", &id, "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted"));

    let rows = json_out(tariq(&dir).args(["task", "list"]));
    assert_eq!(rows, serde_json::json!([]));
}

#[test]
fn delete_declined_keeps_row() {
    let dir = TempDir::new().unwrap();
    init_board(&dir);
    let id = add(&dir, "supervisor", "X");

    tariq(&dir)
        .args(["supervisor", "delete", &id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("هل أنت متأكد من حذف المشرف؟"))
        .stdout(predicate::str::contains("Cancelled"));

    let rows = json_out(tariq(&dir).args(["supervisor", "list"]));
    assert_eq!(rows.as_array().unwrap().len(), 1);
}

#[test]
fn delete_confirmed_on_stdin() {
    let dir = TempDir::new().unwrap();
    init_board(&dir);
    let id = add(&dir, "resident", "A");

    tariq(&dir)
        .args(["resident", "delete", &id])
        .write_stdin("y\n")
        .assert()
        .success();

    let rows = json_out(tariq(&dir).args(["resident", "list"]));
    assert_eq!(rows, serde_json::json!([]));
}

// ---------------------------------------------------------------------------
// tariq distribute
// ---------------------------------------------------------------------------

#[test]
fn distribute_skips_shift_manager() {
    let dir = TempDir::new().unwrap();
    seed_board(&dir);

    let board = json_out(tariq(&dir).args(["distribute", "--shift", "second", "--seed", "5"]));
    assert_eq!(board["manager"], "سيف حماد");
    let names: Vec<&str> = board["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["supervisor"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["X", "هشام القاضي"]);
}

#[test]
fn distribute_same_seed_is_reproducible() {
    let dir = TempDir::new().unwrap();
    seed_board(&dir);

    let a = json_out(tariq(&dir).args(["distribute", "--seed", "11"]));
    let b = json_out(tariq(&dir).args(["distribute", "--seed", "11"]));
    assert_eq!(a["rows"], b["rows"]);
}

#[test]
fn distribute_report_output() {
    let dir = TempDir::new().unwrap();
    seed_board(&dir);

    tariq(&dir)
        .args(["distribute", "--seed", "2", "--report"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("🗓️ الشفت الأول"))
        .stdout(predicate::str::contains("👤 مدير الشفت: هشام القاضي"))
        .stdout(predicate::str::contains("المهام:"));
}

#[test]
fn distribute_rejects_unknown_shift() {
    let dir = TempDir::new().unwrap();
    seed_board(&dir);
    tariq(&dir)
        .args(["distribute", "--shift", "third"])
        .assert()
        .failure();
}

// ---------------------------------------------------------------------------
// tariq analyze
// ---------------------------------------------------------------------------

fn point_analysis_at(dir: &TempDir, endpoint: &str) {
    let path = dir.path().join(".tariq/config.yaml");
    let yaml = std::fs::read_to_string(&path).unwrap();
    let yaml = yaml.replace("https://openrouter.ai/api/analyze", endpoint);
    std::fs::write(&path, yaml).unwrap();
}

#[test]
fn analyze_prints_service_output() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/analyze")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"output":"تحليل الجلسة"}"#)
        .create();

    let dir = TempDir::new().unwrap();
    init_board(&dir);
    point_analysis_at(&dir, &format!("{}/analyze", server.url()));

    tariq(&dir)
        .args(["analyze", "patient", "was", "calm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("تحليل الجلسة"));
}

#[test]
fn analyze_failure_prints_fallback() {
    let mut server = mockito::Server::new();
    let _mock = server.mock("POST", "/analyze").with_status(503).create();

    let dir = TempDir::new().unwrap();
    init_board(&dir);
    point_analysis_at(&dir, &format!("{}/analyze", server.url()));

    let outcome = json_out(tariq(&dir).args(["analyze", "summary"]));
    assert_eq!(outcome["kind"], "fallback");
    assert_eq!(outcome["text"], "حدث خطأ أثناء التحليل");
}
