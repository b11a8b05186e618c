use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Asks a yes/no question. Only "y" or "yes" count as yes; anything else,
/// including end of input, is a no.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<bool> {
    write!(output, "{} [y/N] ", question)?;
    output.flush()?;

    let mut answer = String::new();
    let read = input
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;
    if read == 0 {
        writeln!(output)?;
        return Ok(false);
    }

    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ask(answer: &str) -> (bool, String) {
        let mut input = Cursor::new(answer.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = confirm(&mut input, &mut output, "Proceed?").unwrap();
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn accepts_yes_variants() {
        for answer in ["y\n", "Y\n", "yes\n", "  YES  \n"] {
            assert!(ask(answer).0, "{:?}", answer);
        }
    }

    #[test]
    fn rejects_everything_else() {
        for answer in ["n\n", "no\n", "\n", "sure\n", "yess\n"] {
            assert!(!ask(answer).0, "{:?}", answer);
        }
    }

    #[test]
    fn end_of_input_is_no() {
        assert!(!ask("").0);
    }

    #[test]
    fn shows_question() {
        let (_, shown) = ask("n\n");
        assert_eq!(shown, "Proceed? [y/N] ");
    }
}
