use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

fn cli(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("showbiz_cli").unwrap();
    cmd.env("SHOWBIZ_CLI_SCRIPT", "1")
        .env("SHOWBIZ_HOME", home.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn script_mode_computes_balance_and_autosaves() {
    let home = TempDir::new().unwrap();
    let input = "\
add income 1000 Concert 2024-01-10 INCOME_TICKET_SALES
add expense 300 \"Hall rental\" 2024-01-10 EXPENSE_VENUE_RENTAL
add expense 200 Flyers 2024-01-09 EXPENSE_MARKETING
balance 2024-01-09 2024-01-10
exit
";

    cli(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Record added"))
        .stdout(contains("Balance:  500.00 EUR (3 records)"));

    let saved = fs::read_to_string(home.path().join("finance_records.csv")).unwrap();
    let lines: Vec<&str> = saved.lines().collect();
    assert_eq!(lines[0], "kind,amount,description,date,category");
    assert_eq!(lines.len(), 4);
    assert!(saved.contains("EXPENSE,300,Hall rental,2024-01-10,EXPENSE_VENUE_RENTAL"));
}

#[test]
fn script_mode_reports_rejected_input_and_keeps_running() {
    let home = TempDir::new().unwrap();
    let input = "\
add income 10 Advance 2999-01-01
add income -5 Refund 2024-01-01
balance 2024-02-01 2024-01-01
list
exit
";

    cli(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("date cannot be in the future"))
        .stdout(contains("amount must be greater than 0"))
        .stdout(contains("start date cannot be after end date"))
        .stdout(contains("No records."));

    assert!(!home.path().join("finance_records.csv").exists());
}

#[test]
fn startup_hydrates_existing_records_file() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("finance_records.csv"),
        "kind,amount,description,date,category\nINCOME,750,Sponsor deal,2024-03-01,INCOME_SPONSORSHIPS\n",
    )
    .unwrap();

    cli(&home)
        .write_stdin("list\nbalance 2024-03-01 2024-03-01\nexit\n")
        .assert()
        .success()
        .stdout(contains("Sponsor deal"))
        .stdout(contains("Balance:  750.00 EUR"));
}

#[test]
fn unreadable_records_file_survives_autosave() {
    let home = TempDir::new().unwrap();
    let records = home.path().join("finance_records.csv");
    let original = "kind,amount,description,date,category\n\
INCOME,750,Sponsor deal,2024-03-01,INCOME_SPONSORSHIPS\n\
EXPENSE,120,Stage lights,2024-03-02,EXPENSE_TECHNICAL\n\
EXPENSE,oops,Broken,2024-03-03,EXPENSE_OTHER\n";
    fs::write(&records, original).unwrap();

    cli(&home)
        .write_stdin("add income 10 Tip 2024-01-01\nsave\nexit\n")
        .assert()
        .success()
        .stdout(contains("Could not load"))
        .stdout(contains("Record added"))
        .stdout(contains("Autosave skipped"))
        .stdout(contains("could not be loaded at startup"));

    let contents = fs::read_to_string(&records).unwrap();
    assert_eq!(contents, original);
    assert!(contents.contains("Sponsor deal"));
}

#[test]
fn loading_missing_file_is_reported() {
    let home = TempDir::new().unwrap();
    let missing = home.path().join("nowhere.csv");

    cli(&home)
        .write_stdin(format!("load {}\nexit\n", missing.display()))
        .assert()
        .success()
        .stdout(contains("File not found"));
}

#[test]
fn unknown_category_falls_back_to_catch_all() {
    let home = TempDir::new().unwrap();

    cli(&home)
        .write_stdin("add expense 12.5 Taxi 2024-01-05 EXPENSE_TAXI\nlist\nexit\n")
        .assert()
        .success()
        .stdout(contains("[EXPENSE_OTHER]"));
}

#[test]
fn unknown_command_suggests_help() {
    let home = TempDir::new().unwrap();

    cli(&home)
        .write_stdin("bal\nfrobnicate\nexit\n")
        .assert()
        .success()
        .stdout(contains("Did you mean: balance?"))
        .stdout(contains("Type `help` to list available commands."));
}
