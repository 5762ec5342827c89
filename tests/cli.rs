#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn demo_walks_through_both_shops() {
    let mut cmd = Command::cargo_bin("planning-cli").unwrap();
    cmd.arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("eScooters R Us"))
        .stdout(predicate::str::contains("statut {}"))
        .stdout(predicate::str::contains("statut {no roster has been created}"))
        .stdout(predicate::str::contains(
            "Monday[09:00-12:00] Manager: Darell, Bayta Workers: (no workers)",
        ))
        .stdout(predicate::str::contains("(planning vide)"));
}

#[test]
fn run_executes_a_script_from_stdin() {
    let script = "\
# boutique de démonstration
roster Test Shop
hours Monday 09:00 17:00
shift Monday 09:00 12:00 0
staff Bayta Darell
assign Monday 09:00 12:00 Bayta Darell worker
show day Monday
";
    let mut cmd = Command::cargo_bin("planning-cli").unwrap();
    cmd.args(["run", "-"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Test Shop"))
        .stdout(predicate::str::contains("Monday 09:00-17:00"))
        .stdout(predicate::str::contains("Workers: [Bayta Darell]"));
}

#[test]
fn run_exits_2_when_a_command_is_rejected() {
    let script = "\
roster Test Shop
hours Monday 09:00 17:00
hours Monday 08:00 12:00
show staff
";
    let mut cmd = Command::cargo_bin("planning-cli").unwrap();
    cmd.args(["run", "-"])
        .write_stdin(script)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("error: working hours already set for Monday"))
        // le script continue après un refus
        .stdout(predicate::str::contains("(aucun résultat)"));
}

#[test]
fn run_reads_a_script_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("semaine.txt");
    std::fs::write(&path, "roster Boutique\nshow staff\n").unwrap();

    let mut cmd = Command::cargo_bin("planning-cli").unwrap();
    cmd.arg("run")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("(aucun résultat)"));
}

#[test]
fn run_rejects_unknown_commands_without_stopping() {
    let script = "\
roster Test Shop
frobnicate Monday
show week
";
    let mut cmd = Command::cargo_bin("planning-cli").unwrap();
    cmd.args(["run", "-"])
        .write_stdin(script)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("commande inconnue : frobnicate"))
        .stdout(predicate::str::contains("(aucun résultat)"));
}

#[test]
fn missing_script_file_is_a_hard_error() {
    let mut cmd = Command::cargo_bin("planning-cli").unwrap();
    cmd.args(["run", "/nonexistent/script.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("lecture de /nonexistent/script.txt"));
}
