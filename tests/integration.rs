use assert_cmd::Command;
use predicates::boolean::PredicateBooleanExt;
use predicates::str::contains;

const BINARY_NAME: &str = "draughts";

#[test]
fn id() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.write_stdin("id\n")
            .assert()
            .success()
            .stdout(contains("id name draughts").and(contains("id author"))),
    );
}

#[test]
fn short_game() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.write_stdin("play 5,2 4,3\nplay 2,5 3,4\nmoves\nplay 4,3 2,5\nquit\n")
            .assert()
            .success()
            .stdout(
                contains("played (5,2) -> (4,3)")
                    .and(contains("played (2,5) -> (3,4)"))
                    .and(contains("move (4,3) -> (2,5) captures (3,4)"))
                    .and(contains("played (4,3) -> (2,5) captures (3,4)")),
            ),
    );
}

#[test]
fn custom_position() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");
    let _ = cmd.args(["--position", "8/8/8/8/3l4/8/1l6/d7", "--first", "dark"]);

    drop(
        cmd.write_stdin("play 7,0 3,4\n")
            .assert()
            .success()
            .stdout(
                contains("played (7,0) -> (3,4) captures (6,1) (4,3)")
                    .and(contains("winner dark")),
            ),
    );
}

#[test]
fn invalid_position() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");
    let _ = cmd.args(["--position", "8/8/8"]);

    drop(cmd.assert().failure());
}
