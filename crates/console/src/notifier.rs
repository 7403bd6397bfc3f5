//! Blocking user notifications (alerts and yes/no confirmations).

use std::io::{self, BufRead, Write};

pub trait Notifier: Send + Sync {
    /// Show a message the user must see before continuing.
    fn alert(&self, message: &str);

    /// Ask a yes/no question. `true` means the user confirmed.
    fn confirm(&self, message: &str) -> bool;
}

/// Notifier for an interactive terminal: alerts go to stdout, answers are
/// read from stdin.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&self, message: &str) {
        println!("[!] {message}");
    }

    fn confirm(&self, message: &str) -> bool {
        print!("{message} [s/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(0) | Err(_) => false,
            Ok(_) => is_affirmative(&answer),
        }
    }
}

/// Portuguese and English "yes" answers.
fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "sim" | "y" | "yes"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_yes_answers() {
        for answer in ["s\n", "Sim", " y ", "YES"] {
            assert!(is_affirmative(answer), "{answer:?}");
        }
    }

    #[test]
    fn anything_else_is_no() {
        for answer in ["", "\n", "n", "não", "talvez"] {
            assert!(!is_affirmative(answer), "{answer:?}");
        }
    }
}
