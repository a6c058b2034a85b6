use std::io::Write;

use assert_cmd::Command;

fn engine() -> Command {
    Command::cargo_bin("rataxx-uai").expect("binary available")
}

fn run(script: &str) -> String {
    let output = engine().write_stdin(script).assert().success().get_output().stdout.clone();
    String::from_utf8_lossy(&output).into_owned()
}

fn bestmoves(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|l| l.strip_prefix("bestmove "))
        .map(str::to_string)
        .collect()
}

#[test]
fn handshake_lists_id_and_options() {
    let text = run("uai\nisready\nquit\n");
    assert!(text.contains("id name rataxx"), "id missing: {text}");
    assert!(text.contains("id author rataxx developers"), "author missing: {text}");
    assert!(text.contains("option name MoveTime"), "MoveTime missing: {text}");
    assert!(text.contains("option name Rollouts"), "Rollouts missing: {text}");
    let uaiok = text.find("uaiok").expect("uaiok missing");
    let readyok = text.find("readyok").expect("readyok missing");
    assert!(uaiok < readyok);
}

#[test]
fn go_emits_single_legal_bestmove() {
    let script = r#"uai
setoption name Rollouts value 2
position startpos moves a6 b1
go movetime 50 iterations 100
quit
"#;
    let text = run(script);
    let moves = bestmoves(&text);
    assert_eq!(moves.len(), 1, "bestmove emitted {} times: {text}", moves.len());
    assert_eq!(moves[0].len(), 4, "unexpected bestmove: {text}");
    assert!(text.contains("info string iterations="), "stats missing: {text}");
}

#[test]
fn forced_pass_and_finished_game() {
    let script = r#"position fen x--4/---4/---4/7/7/7/6o x 0
go iterations 10
position fen 7/7/7/7/7/7/o6 x 0
go iterations 10
quit
"#;
    let text = run(script);
    assert_eq!(bestmoves(&text), vec!["0000".to_string(), "0000".to_string()], "{text}");
}

#[test]
fn same_seed_same_move() {
    let script = r#"setoption name Seed value 7
setoption name Rollouts value 2
position startpos
go movetime 60000 iterations 200
uainewgame
go movetime 60000 iterations 200
quit
"#;
    let text = run(script);
    let moves = bestmoves(&text);
    assert_eq!(moves.len(), 2, "{text}");
    assert_eq!(moves[0], moves[1], "{text}");
}

#[test]
fn huge_half_turn_counter_is_accepted() {
    let script = "position fen x5o/7/7/7/7/7/o5x x 4294967295 moves a6\ngo iterations 5\nquit\n";
    let text = run(script);
    assert_eq!(bestmoves(&text), vec!["0000".to_string()], "{text}");
}

#[test]
fn config_file_and_flags() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"time_budget_ms": 30, "rollouts_per_eval": 1}}"#).unwrap();

    let output = engine()
        .arg("--config")
        .arg(file.path())
        .args(["--seed", "3"])
        .write_stdin("uai\nposition startpos\ngo\nquit\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&output);
    assert!(text.contains("option name MoveTime type spin default 30"), "{text}");
    assert!(text.contains("option name Seed type string default 3"), "{text}");
    assert_eq!(bestmoves(&text).len(), 1, "{text}");
}

#[test]
fn illegal_move_is_fatal() {
    let output = engine()
        .write_stdin("position startpos moves a1\nisready\nquit\n")
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&output);
    assert!(text.contains("info string error="), "{text}");
    assert!(!text.contains("readyok"), "{text}");
}

#[test]
fn bad_fen_and_unknown_command_are_fatal() {
    engine()
        .write_stdin("position fen oooooooo/7/7/7/7/7/7 x 0\nquit\n")
        .assert()
        .failure();
    engine().write_stdin("dance\nquit\n").assert().failure();
}

#[test]
fn eof_exits_cleanly() {
    engine().write_stdin("isready\n").assert().success();
}
