//! Snippet commands that print a result and exit

use std::collections::HashMap;
use std::io::{self, Write};

use tracing::debug;

use crate::domain::{greeting, reverse_str, sum_floats, sum_ints, sum_nums, sum_numbers, HELLO_WORLD};

/// Write "Hello, World!"
pub fn hello(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", HELLO_WORLD)
}

/// Write the welcome message for `name`
pub fn greet(out: &mut impl Write, name: &str) -> io::Result<()> {
    writeln!(out, "{}", greeting(name))
}

/// Write the sums of the sample maps, once per summation style
pub fn sums(out: &mut impl Write) -> io::Result<()> {
    let ints: HashMap<String, i64> =
        HashMap::from([("first".to_string(), 34), ("second".to_string(), 12)]);
    let floats: HashMap<String, f64> =
        HashMap::from([("first".to_string(), 35.98), ("second".to_string(), 26.99)]);

    writeln!(
        out,
        "Non-Generic Sums: {} and {:.2}",
        sum_ints(&ints),
        sum_floats(&floats)
    )?;
    writeln!(
        out,
        "Generic Sums, type parameters explicit: {} and {:.2}",
        sum_nums::<String, i64, _>(&ints),
        sum_nums::<String, f64, _>(&floats)
    )?;
    writeln!(
        out,
        "Generic Sums, type parameters inferred: {} and {:.2}",
        sum_nums(&ints),
        sum_nums(&floats)
    )?;
    writeln!(
        out,
        "Generic Sums with Constraint: {} and {:.2}",
        sum_numbers(&ints),
        sum_numbers(&floats)
    )
}

/// Write `text` reversed by character
pub fn reverse(out: &mut impl Write, text: &str) -> io::Result<()> {
    let reversed = reverse_str(text);
    debug!(chars = text.chars().count(), "Reversed text");

    writeln!(out, "{}", reversed)
}

/// Run a snippet against stdout
pub fn run(snippet: impl FnOnce(&mut io::StdoutLock<'static>) -> io::Result<()>) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    snippet(&mut stdout)?;
    stdout.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(snippet: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        snippet(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_hello() {
        assert_eq!(capture(|out| hello(out)), "Hello, World!\n");
    }

    #[test]
    fn test_greet() {
        assert_eq!(capture(|out| greet(out, "Gladys")), "Hi, Gladys. Welcome!\n");
    }

    #[test]
    fn test_sums() {
        let output = capture(|out| sums(out));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Non-Generic Sums: 46 and 62.97",
                "Generic Sums, type parameters explicit: 46 and 62.97",
                "Generic Sums, type parameters inferred: 46 and 62.97",
                "Generic Sums with Constraint: 46 and 62.97",
            ]
        );
    }

    #[test]
    fn test_reverse() {
        assert_eq!(capture(|out| reverse(out, "Hello, world")), "dlrow ,olleH\n");
    }
}
