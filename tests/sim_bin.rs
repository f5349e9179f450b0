use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["1", "2"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["games"], 2);
    assert_eq!(v["draws"], 2);
}

#[test]
fn cli_suggest_reports_winning_cell() {
    let output = Command::new(env!("CARGO_BIN_EXE_tictactoe"))
        .args(["suggest", "--board", "XX.OO....", "--mark", "x"])
        .output()
        .expect("failed to run tictactoe binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    assert!(stdout.contains("X (unbeatable) plays cell 3"), "{}", stdout);
}

#[test]
fn cli_sim_prints_tally() {
    let output = Command::new(env!("CARGO_BIN_EXE_tictactoe"))
        .args(["sim", "--games", "2", "--seed", "3"])
        .output()
        .expect("failed to run tictactoe binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["draws"], 2);
}
