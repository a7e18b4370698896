//! End-to-end integration tests
//!
//! These tests drive complete menu sessions against a ledger file. Each test:
//! 1. Copies initial.csv (if present) from a fixture directory into a temp dir
//! 2. Opens the tracker there, creating the ledger if needed
//! 3. Replays session.txt as the user's input
//! 4. Compares the resulting ledger with expected.csv and checks the transcript
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - Happy path scenarios
//! - Quoting of commas and double quotes
//! - Validation failures that must not touch the ledger
//! - Hand-corrupted ledgers (unparsable amounts, short rows)
//! - Appending to an existing ledger

#[cfg(test)]
mod tests {
    use expense_tracker::cli::Menu;
    use expense_tracker::ExpenseTracker;
    use rstest::rstest;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    /// Normalize line endings so fixtures compare equal on every platform
    fn normalize(text: &str) -> String {
        text.replace("\r\n", "\n")
    }

    /// Replay a fixture session and return (transcript, ledger contents)
    ///
    /// # Panics
    ///
    /// Panics if fixture files cannot be read or the session fails.
    fn run_test_fixture(fixture_name: &str) -> (String, String) {
        let fixture_dir = Path::new("tests/fixtures").join(fixture_name);
        let session_path = fixture_dir.join("session.txt");
        let initial_path = fixture_dir.join("initial.csv");

        assert!(
            session_path.exists(),
            "Session file not found: {}",
            session_path.display()
        );

        let dir = TempDir::new().expect("Failed to create temp dir");
        let ledger_path = dir.path().join("expenses.csv");
        if initial_path.exists() {
            fs::copy(&initial_path, &ledger_path).expect("Failed to copy initial ledger");
        }

        let tracker = ExpenseTracker::open(&ledger_path)
            .unwrap_or_else(|e| panic!("Failed to open tracker: {}", e));
        let session = fs::read_to_string(&session_path)
            .unwrap_or_else(|e| panic!("Failed to read session {}: {}", session_path.display(), e));

        let mut transcript = Vec::new();
        Menu::new(&tracker, normalize(&session).as_bytes(), &mut transcript)
            .run()
            .unwrap_or_else(|e| panic!("Session failed: {}", e));

        let ledger = fs::read_to_string(&ledger_path).expect("Failed to read ledger");
        (
            String::from_utf8(transcript).expect("Transcript is not UTF-8"),
            normalize(&ledger),
        )
    }

    fn expected_ledger(fixture_name: &str) -> String {
        let path = Path::new("tests/fixtures")
            .join(fixture_name)
            .join("expected.csv");
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", path.display(), e));
        normalize(&content)
    }

    /// End-to-end test for all fixtures
    #[rstest]
    #[case::happy_path(
        "happy_path",
        &["₹10.00 | Food | Lunch\n₹20.00 | Travel | Bus\n", "Total Spent: ₹30.00"]
    )]
    #[case::quoting(
        "quoting",
        &["₹3.00 | A,B | He said \"hi\"\n", "Total Spent: ₹3.00"]
    )]
    #[case::validation_errors(
        "validation_errors",
        &[
            "Invalid number. Try again.",
            "Amount must be greater than 0.",
            "Category cannot be empty.",
            "Description cannot be empty.",
            "Total Spent: ₹7.26",
        ]
    )]
    #[case::corrupted_ledger(
        "corrupted_ledger",
        &[
            "₹10.00 | Food | Lunch\n₹bad | Food | Snack\n₹5.50 | Travel | Bus\n\n",
            "Total Spent: ₹15.50",
        ]
    )]
    #[case::existing_ledger("existing_ledger", &["Total Spent: ₹20.50"])]
    fn test_fixtures(#[case] fixture: &str, #[case] expected_output: &[&str]) {
        let (transcript, ledger) = run_test_fixture(fixture);

        assert_eq!(
            ledger,
            expected_ledger(fixture),
            "\n\nLedger mismatch for fixture: {}\n\nTranscript:\n{}\n",
            fixture,
            transcript
        );
        for expected in expected_output {
            assert!(
                transcript.contains(expected),
                "\n\nTranscript for fixture {} is missing {:?}\n\nTranscript:\n{}\n",
                fixture,
                expected,
                transcript
            );
        }
        assert!(transcript.ends_with("Goodbye 👋\n"));
    }

    #[test]
    fn test_ledger_persists_between_sessions() {
        let dir = TempDir::new().unwrap();
        let ledger_path = dir.path().join("expenses.csv");

        let first = ExpenseTracker::open(&ledger_path).unwrap();
        Menu::new(&first, "1\n10\nFood\nLunch\n4\n".as_bytes(), Vec::new())
            .run()
            .unwrap();

        let second = ExpenseTracker::open(&ledger_path).unwrap();
        let mut transcript = Vec::new();
        Menu::new(&second, "1\n20\nFood\nDinner\n3\n4\n".as_bytes(), &mut transcript)
            .run()
            .unwrap();

        let transcript = String::from_utf8(transcript).unwrap();
        assert!(transcript.contains("Total Spent: ₹30.00"));
        assert_eq!(second.expenses().unwrap().len(), 2);
    }
}
