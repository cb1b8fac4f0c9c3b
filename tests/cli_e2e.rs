//! End-to-end CLI tests for chatstats.
//!
//! These tests run the actual binary with various arguments and check the
//! printed summary and the files it writes.
//!
//! # Test Categories
//!
//! - **Basic functionality**: single chats, directories, several chats
//! - **Flags**: artifact switches, rankings, placeholders
//! - **Error handling**: missing inputs, invalid options, failing chats
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Creates a temporary directory with test transcripts.
fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    let trip = "\
01/06/2024, 08:00 - Alice created group \"Trip: Lisbon\"
01/06/2024, 08:01 - Alice: Flights are booked!
Leaving Friday morning
01/06/2024, 08:05 - Bob: <Media omitted>
01/06/2024, 08:06 - Bob: Friday works, booking the hotel
02/06/2024, 19:30 - Carol: Lisbon trams are the best
";
    fs::write(dir.path().join("trip.txt"), trip).unwrap();

    let work = "\
03/03/2024, 09:00 - Dana: standup moved to ten
03/03/2024, 09:02 - Eve: ok
";
    fs::write(dir.path().join("work.txt"), work).unwrap();

    dir
}

fn chatstats_cmd() -> Command {
    let cmd = std::process::Command::new(env!("CARGO_BIN_EXE_chatstats"));
    Command::from_std(cmd)
}

fn output_path(dir: &TempDir) -> PathBuf {
    dir.path().join("out")
}

// ============================================================================
// Basic Functionality Tests
// ============================================================================

mod basic_functionality {
    use super::*;

    #[test]
    fn test_single_chat() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("trip.txt");
        let output = output_path(&fixtures);

        chatstats_cmd()
            .args([input.to_str().unwrap(), "-o", output.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("Done"))
            .stdout(predicate::str::contains("6 lines, 4 messages, 3 senders"))
            .stdout(predicate::str::contains("Most active: Bob (2)"));

        let chat = output.join("trip");
        assert!(chat.join("summary.txt").exists());
        assert!(chat.join("summary.json").exists());
        assert!(chat.join("senders.csv").exists());
        assert!(chat.join("activity.png").exists());

        let alice = fs::read_to_string(chat.join("senders/Alice/messages.txt")).unwrap();
        assert_eq!(alice, "Flights are booked!\nLeaving Friday morning\n");
    }

    #[test]
    fn test_directory_input() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures);

        chatstats_cmd()
            .args([
                fixtures.path().to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("2 chat(s)"))
            .stdout(predicate::str::contains("2 processed, 0 failed"));

        assert!(output.join("trip").is_dir());
        assert!(output.join("work").is_dir());
    }

    #[test]
    fn test_summary_contents() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("work.txt");
        let output = output_path(&fixtures);

        chatstats_cmd()
            .args([input.to_str().unwrap(), "-o", output.to_str().unwrap()])
            .assert()
            .success();

        let summary = fs::read_to_string(output.join("work/summary.txt")).unwrap();
        assert!(summary.contains("Chat: work"));
        assert!(summary.contains("Valid messages: 2"));
        assert!(summary.contains("Senders: 2"));
    }
}

// ============================================================================
// Flag Tests
// ============================================================================

mod flags {
    use super::*;

    #[test]
    fn test_no_optional_artifacts() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("trip.txt");
        let output = output_path(&fixtures);

        chatstats_cmd()
            .args([
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
                "--no-charts",
                "--no-json",
                "--no-csv",
            ])
            .assert()
            .success();

        let chat = output.join("trip");
        assert!(chat.join("summary.txt").exists());
        assert!(!chat.join("summary.json").exists());
        assert!(!chat.join("senders.csv").exists());
        assert!(!chat.join("activity.png").exists());
        assert!(!chat.join("senders/Bob/activity.png").exists());
    }

    #[test]
    fn test_top_limits_rankings() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("trip.txt");
        let output = output_path(&fixtures);

        chatstats_cmd()
            .args([
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
                "--top",
                "1",
            ])
            .assert()
            .success();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(output.join("trip/summary.json")).unwrap())
                .unwrap();
        assert_eq!(json["analysis"]["top_by_messages"].as_array().unwrap().len(), 1);
        assert_eq!(json["analysis"]["top_words"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_keep_ignorable() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("trip.txt");
        let output = output_path(&fixtures);

        chatstats_cmd()
            .args([
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
                "--keep-ignorable",
            ])
            .assert()
            .success();

        let bob = fs::read_to_string(output.join("trip/senders/Bob/messages.txt")).unwrap();
        assert!(bob.starts_with("<Media omitted>\n"));
    }

    #[test]
    fn test_version() {
        chatstats_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

// ============================================================================
// Error Handling Tests
// ============================================================================

mod error_handling {
    use super::*;

    #[test]
    fn test_no_input() {
        chatstats_cmd().assert().failure();
    }

    #[test]
    fn test_missing_input() {
        let fixtures = setup_fixtures();
        chatstats_cmd()
            .args([fixtures.path().join("nope.txt").to_str().unwrap()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("does not exist"));
    }

    #[test]
    fn test_zero_top_rejected() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("trip.txt");
        chatstats_cmd()
            .args([input.to_str().unwrap(), "--top", "0"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("top_n"));
    }

    #[test]
    fn test_failing_chat_sets_exit_code() {
        let fixtures = setup_fixtures();
        let bad = fixtures.path().join("bad.txt");
        fs::write(&bad, [0xc3, 0x28, b'\n']).unwrap();
        let good = fixtures.path().join("work.txt");
        let output = output_path(&fixtures);

        chatstats_cmd()
            .args([
                bad.to_str().unwrap(),
                good.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .failure()
            .stdout(predicate::str::contains("1 processed, 1 failed"));

        assert!(output.join("work").is_dir());
        assert!(!output.join("bad").exists());
    }
}
