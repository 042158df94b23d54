use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn wallet(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("wallet-watch").unwrap();
    cmd.env("WALLET_WATCH_DATA_DIR", dir.path())
        .env_remove("WALLET_WATCH_LOG");
    cmd
}

fn saved(dir: &TempDir) -> Vec<Value> {
    let path = dir.path().join("data").join("walletWatchTransactions.json");
    let text = std::fs::read_to_string(path).unwrap();
    serde_json::from_str::<Value>(&text)
        .unwrap()
        .as_array()
        .unwrap()
        .clone()
}

fn saved_id(dir: &TempDir, description: &str) -> String {
    saved(dir)
        .iter()
        .find(|t| t["description"] == description)
        .map(|t| t["id"].to_string())
        .unwrap()
}

#[test]
fn test_first_run_shows_examples() {
    let dir = TempDir::new().unwrap();
    wallet(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("Allowance"))
        .stdout(predicate::str::contains("$700.00"))
        .stdout(predicate::str::contains("$420.00"))
        .stdout(predicate::str::contains("$280.00"));
}

#[test]
fn test_add_updates_totals_and_persists() {
    let dir = TempDir::new().unwrap();
    wallet(&dir)
        .args(["add", "Bonus", "150"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created transaction"))
        .stdout(predicate::str::contains("$850.00"))
        .stdout(predicate::str::contains("$430.00"));

    let records = saved(&dir);
    assert_eq!(records.len(), 4);
    assert_eq!(records[3]["description"], "Bonus");
    assert_eq!(records[3]["amount"], "150.00");
    assert_eq!(records[3]["type"], "Income");

    wallet(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("$430.00"));
}

#[test]
fn test_invalid_add_is_rejected() {
    let dir = TempDir::new().unwrap();
    wallet(&dir)
        .args(["add", "Lunch", "-3", "--type", "expense"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Please enter a valid description and a positive amount.",
        ));

    wallet(&dir)
        .args(["add", "Lunch", "abc"])
        .assert()
        .failure();

    // Only the example entries were written
    let names: Vec<_> = saved(&dir)
        .iter()
        .map(|t| t["description"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["Food", "Allowance", "Party"]);
}

#[test]
fn test_delete() {
    let dir = TempDir::new().unwrap();
    wallet(&dir)
        .args(["add", "Coffee", "4.50", "-t", "expense"])
        .assert()
        .success();

    let id = saved_id(&dir, "Allowance");
    wallet(&dir)
        .args(["delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted transaction: Allowance"))
        .stdout(predicate::str::contains("$-424.50"));

    assert_eq!(saved(&dir).len(), 3);
}

/// Read the ID column of the row whose description is `description`
fn listed_id(stdout: &str, description: &str) -> String {
    stdout
        .lines()
        .find(|line| line.contains(description))
        .and_then(|line| line.split('│').nth(1))
        .map(|cell| cell.trim().to_string())
        .unwrap()
}

#[test]
fn test_listed_ids_work_on_fresh_install() {
    let dir = TempDir::new().unwrap();
    let output = wallet(&dir).arg("list").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    let food = listed_id(&stdout, "Food");
    assert_eq!(food, saved_id(&dir, "Food"));

    wallet(&dir)
        .args(["delete", &food])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted transaction: Food"));

    let party = listed_id(&stdout, "Party");
    wallet(&dir)
        .args(["edit", &party, "--amount", "450"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$450.00"));
}

#[test]
fn test_delete_unknown_id_fails() {
    let dir = TempDir::new().unwrap();
    wallet(&dir)
        .args(["delete", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Transaction not found"));

    // The slot is still rewritten with the unchanged ledger
    assert_eq!(saved(&dir).len(), 3);
}

#[test]
fn test_edit_resubmits_with_new_id() {
    let dir = TempDir::new().unwrap();
    wallet(&dir).args(["add", "Bonus", "1"]).assert().success();
    let food = saved_id(&dir, "Food");

    wallet(&dir)
        .args(["edit", &food, "--amount", "35"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated transaction"))
        .stdout(predicate::str::contains("$435.00"));

    let records = saved(&dir);
    let last = records.last().unwrap();
    assert_eq!(last["description"], "Food");
    assert_eq!(last["amount"], "35.00");
    assert_ne!(last["id"].to_string(), food);
}

#[test]
fn test_rejected_edit_warns_original_removed() {
    let dir = TempDir::new().unwrap();
    wallet(&dir).args(["add", "Bonus", "1"]).assert().success();
    let party = saved_id(&dir, "Party");

    wallet(&dir)
        .args(["edit", &party, "--amount", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("was already removed"));

    assert!(saved(&dir).iter().all(|t| t["description"] != "Party"));
}

#[test]
fn test_list_filter() {
    let dir = TempDir::new().unwrap();
    wallet(&dir)
        .args(["list", "--filter", "income"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing: Income"))
        .stdout(predicate::str::contains("Allowance"))
        .stdout(predicate::str::contains("Party").not())
        // Totals ignore the filter
        .stdout(predicate::str::contains("$420.00"));
}

#[test]
fn test_corrupt_data_recovers() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(data.join("walletWatchTransactions.json"), "{not json").unwrap();

    wallet(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("$280.00"));

    let backup = std::fs::read_to_string(data.join("walletWatchTransactions.corrupt.json")).unwrap();
    assert_eq!(backup, "{not json");
}

#[test]
fn test_no_subcommand_prints_hint() {
    let dir = TempDir::new().unwrap();
    wallet(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("wallet-watch --help"));
}

#[test]
fn test_init_keeps_existing_settings() {
    let dir = TempDir::new().unwrap();
    wallet(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    let settings = dir.path().join("config.json");
    std::fs::write(&settings, r#"{"currency_symbol":"€"}"#).unwrap();

    wallet(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already initialized"));
    assert_eq!(
        std::fs::read_to_string(&settings).unwrap(),
        r#"{"currency_symbol":"€"}"#
    );
}
