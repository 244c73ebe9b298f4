//! Line-oriented input helpers for the console shell. Bad input is reported
//! and re-prompted locally; it never reaches the tracker.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Read one line, trimmed of surrounding whitespace. Returns None once the
/// input is exhausted.
pub fn read_line<R: BufRead>(input: &mut R) -> Option<String> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

/// Prompt until a line parses as a `T`. Lines that fail to parse are
/// reported and the prompt is shown again. Returns None once the input is
/// exhausted.
pub fn read_value<T: FromStr, R: BufRead>(prompt: &str, input: &mut R) -> Option<T> {
    loop {
        print!("{}", prompt);
        let _ = io::stdout().flush();
        let line = read_line(input)?;
        match line.parse() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter valid numbers!"),
        }
    }
}

#[test]
fn test_read_line_trims_and_ends() {
    let mut input = io::Cursor::new("  first \nsecond\n");
    assert_eq!(read_line(&mut input), Some("first".to_string()));
    assert_eq!(read_line(&mut input), Some("second".to_string()));
    assert_eq!(read_line(&mut input), None);
}

#[test]
fn test_read_value_skips_bad_lines() {
    let mut input = io::Cursor::new("ten\n\n3.5\n42\n");
    let value: Option<u64> = read_value("? ", &mut input);
    assert_eq!(value, Some(42));
}

#[test]
fn test_read_value_parses_reals() {
    let mut input = io::Cursor::new("0.25\n");
    let value: Option<f64> = read_value("? ", &mut input);
    assert_eq!(value, Some(0.25));
}

#[test]
fn test_read_value_reports_exhausted_input() {
    let mut input = io::Cursor::new("junk\n");
    let value: Option<u64> = read_value("? ", &mut input);
    assert_eq!(value, None);
}
