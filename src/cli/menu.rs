//! Interactive menu loop
//!
//! A plain request/response loop: print the menu, read one line, dispatch,
//! print the result. Input comes through [`LineSource`] so sessions can be
//! scripted in tests with an in-memory reader.
//!
//! Every failure is reported as a message and the loop carries on; only
//! terminal I/O errors (stdout closed, stdin unreadable) end it early.

use crate::core::validation::{parse_amount, round_to_cents, validate_non_empty};
use crate::core::ExpenseTracker;
use crate::types::{Expense, TrackerError};
use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;
use tracing::warn;

const MENU: &str = "\
=========================
💰 Expense Tracker
1. Add Expense
2. View All Expenses
3. View Total Spent
4. Exit
=========================
";

/// Something that yields lines of text
pub trait LineSource {
    /// Read the next line without its terminator, `None` at end of input
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

impl<R: BufRead> LineSource for R {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

/// Menu entries, numbered as printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddExpense,
    ViewExpenses,
    ViewTotal,
    Exit,
}

impl MenuAction {
    /// Parse a menu choice, ignoring surrounding whitespace
    pub fn parse(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(MenuAction::AddExpense),
            "2" => Some(MenuAction::ViewExpenses),
            "3" => Some(MenuAction::ViewTotal),
            "4" => Some(MenuAction::Exit),
            _ => None,
        }
    }
}

/// The interactive menu over a tracker
pub struct Menu<'a, I, W> {
    tracker: &'a ExpenseTracker,
    input: I,
    output: W,
}

impl<'a, I: LineSource, W: Write> Menu<'a, I, W> {
    pub fn new(tracker: &'a ExpenseTracker, input: I, output: W) -> Self {
        Menu {
            tracker,
            input,
            output,
        }
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        while self.step()?.is_continue() {}
        Ok(())
    }

    fn step(&mut self) -> io::Result<ControlFlow<()>> {
        writeln!(self.output, "{}", MENU)?;
        let Some(choice) = self.prompt("Choose an option: ")? else {
            return self.end_of_input();
        };

        match MenuAction::parse(&choice) {
            Some(MenuAction::AddExpense) => self.add_expense(),
            Some(MenuAction::ViewExpenses) => self.view_expenses(),
            Some(MenuAction::ViewTotal) => self.view_total(),
            Some(MenuAction::Exit) => {
                writeln!(self.output, "Goodbye 👋")?;
                Ok(ControlFlow::Break(()))
            }
            None => {
                writeln!(self.output, "Invalid option. Try again.\n")?;
                Ok(ControlFlow::Continue(()))
            }
        }
    }

    fn add_expense(&mut self) -> io::Result<ControlFlow<()>> {
        let Some(amount) = self.prompt("Amount: ")? else {
            return self.end_of_input();
        };
        let amount = match parse_amount(&amount) {
            Ok(amount) => amount,
            Err(e) => return self.report(&TrackerError::from(e)),
        };

        let Some(category) = self.prompt("Category: ")? else {
            return self.end_of_input();
        };
        let category = match validate_non_empty(&category, "Category") {
            Ok(category) => category,
            Err(e) => return self.report(&TrackerError::from(e)),
        };

        let Some(description) = self.prompt("Description: ")? else {
            return self.end_of_input();
        };
        let expense = match Expense::new(amount, &category, &description) {
            Ok(expense) => expense,
            Err(e) => return self.report(&TrackerError::from(e)),
        };

        match self.tracker.add(&expense) {
            Ok(()) => {
                writeln!(self.output, "✅ Expense added successfully\n")?;
                Ok(ControlFlow::Continue(()))
            }
            Err(e) => self.report(&e),
        }
    }

    fn view_expenses(&mut self) -> io::Result<ControlFlow<()>> {
        writeln!(self.output, "\n--- All Expenses ---")?;
        let expenses = match self.tracker.expenses() {
            Ok(expenses) => expenses,
            Err(e) => return self.report(&e),
        };

        for expense in &expenses {
            writeln!(self.output, "{}", expense)?;
        }
        writeln!(self.output)?;
        Ok(ControlFlow::Continue(()))
    }

    fn view_total(&mut self) -> io::Result<ControlFlow<()>> {
        let total = match self.tracker.total() {
            Ok(total) => total,
            Err(e) => return self.report(&e),
        };

        writeln!(
            self.output,
            "\n💸 Total Spent: ₹{:.2}\n",
            round_to_cents(total)
        )?;
        Ok(ControlFlow::Continue(()))
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.input.next_line()
    }

    fn report(&mut self, error: &TrackerError) -> io::Result<ControlFlow<()>> {
        if let Some(path) = error.path() {
            warn!(path, error = %error, "ledger operation failed");
        }
        writeln!(self.output, "{}\n", error)?;
        Ok(ControlFlow::Continue(()))
    }

    fn end_of_input(&mut self) -> io::Result<ControlFlow<()>> {
        writeln!(self.output, "\nGoodbye 👋")?;
        Ok(ControlFlow::Break(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    fn run_session(tracker: &ExpenseTracker, script: &str) -> String {
        let mut output = Vec::new();
        Menu::new(tracker, script.as_bytes(), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    fn open_tracker(dir: &TempDir) -> ExpenseTracker {
        ExpenseTracker::open(dir.path().join("expenses.csv")).unwrap()
    }

    #[rstest]
    #[case::add("1", Some(MenuAction::AddExpense))]
    #[case::view(" 2 ", Some(MenuAction::ViewExpenses))]
    #[case::total("3", Some(MenuAction::ViewTotal))]
    #[case::exit("4\t", Some(MenuAction::Exit))]
    #[case::unknown("5", None)]
    #[case::empty("", None)]
    #[case::word("add", None)]
    fn test_menu_action_parse(#[case] choice: &str, #[case] expected: Option<MenuAction>) {
        assert_eq!(MenuAction::parse(choice), expected);
    }

    #[rstest]
    #[case::lf("first\nsecond\n", vec!["first", "second"])]
    #[case::crlf("first\r\nsecond\r\n", vec!["first", "second"])]
    #[case::no_trailing_newline("only", vec!["only"])]
    #[case::blank_line("\n", vec![""])]
    fn test_line_source_strips_terminators(#[case] input: &str, #[case] expected: Vec<&str>) {
        let mut source = input.as_bytes();
        let mut lines = Vec::new();
        while let Some(line) = source.next_line().unwrap() {
            lines.push(line);
        }
        assert_eq!(lines, expected);
    }

    #[test]
    fn test_exit_prints_goodbye() {
        let dir = TempDir::new().unwrap();
        let tracker = open_tracker(&dir);

        let output = run_session(&tracker, "4\n");
        assert!(output.starts_with(MENU));
        assert!(output.ends_with("Choose an option: Goodbye 👋\n"));
    }

    #[test]
    fn test_add_then_view_and_total() {
        let dir = TempDir::new().unwrap();
        let tracker = open_tracker(&dir);

        let output = run_session(&tracker, "1\n12.5\nFood\nLunch, with \"friends\"\n2\n3\n4\n");

        assert!(output.contains("Amount: Category: Description: ✅ Expense added successfully\n"));
        assert!(output.contains("\n--- All Expenses ---\n₹12.50 | Food | Lunch, with \"friends\"\n\n"));
        assert!(output.contains("\n💸 Total Spent: ₹12.50\n"));
    }

    #[rstest]
    #[case::non_numeric("1\nabc\n4\n", "Invalid number. Try again.\n")]
    #[case::non_positive("1\n-5\n4\n", "Amount must be greater than 0.\n")]
    #[case::out_of_range("1\n1e100\n4\n", "Amount is too large.\n")]
    #[case::empty_category("1\n5\n   \n4\n", "Category cannot be empty.\n")]
    #[case::empty_description("1\n5\nFood\n\n4\n", "Description cannot be empty.\n")]
    fn test_add_validation_failures(#[case] script: &str, #[case] message: &str) {
        let dir = TempDir::new().unwrap();
        let tracker = open_tracker(&dir);

        let output = run_session(&tracker, script);

        assert!(output.contains(message));
        assert!(!output.contains("Expense added successfully"));
        assert!(tracker.expenses().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_amount_aborts_before_category_prompt() {
        let dir = TempDir::new().unwrap();
        let tracker = open_tracker(&dir);

        let output = run_session(&tracker, "1\n0\n4\n");
        assert!(!output.contains("Category: "));
    }

    #[test]
    fn test_invalid_option() {
        let dir = TempDir::new().unwrap();
        let tracker = open_tracker(&dir);

        let output = run_session(&tracker, "9\n4\n");
        assert!(output.contains("Invalid option. Try again.\n"));
        assert_eq!(output.matches(MENU).count(), 2);
    }

    #[test]
    fn test_end_of_input_exits() {
        let dir = TempDir::new().unwrap();
        let tracker = open_tracker(&dir);

        let output = run_session(&tracker, "1\n10\n");
        assert!(output.ends_with("Category: \nGoodbye 👋\n"));
        assert!(tracker.expenses().unwrap().is_empty());
    }

    #[test]
    fn test_total_of_empty_ledger() {
        let dir = TempDir::new().unwrap();
        let tracker = open_tracker(&dir);

        let output = run_session(&tracker, "3\n4\n");
        assert!(output.contains("💸 Total Spent: ₹0.00\n"));
    }

    #[test]
    fn test_ledger_failures_do_not_end_the_session() {
        let dir = TempDir::new().unwrap();
        let tracker = open_tracker(&dir);
        fs::remove_file(tracker.ledger().path()).unwrap();

        let output = run_session(&tracker, "1\n5\nFood\nLunch\n2\n3\n4\n");

        assert!(output.contains("Error writing to file: "));
        assert_eq!(output.matches("Error reading file: ").count(), 2);
        assert!(output.ends_with("Goodbye 👋\n"));
    }
}
