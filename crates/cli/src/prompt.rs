use std::io::{self, BufRead, Write};

/// Asks `question` on `out` and reads one answer line from `input`.
///
/// Only `yes` or `y` (any case) confirm; end of input counts as a refusal.
pub fn confirm<R, W>(input: &mut R, out: &mut W, question: &str) -> io::Result<bool>
where
    R: BufRead,
    W: Write,
{
    write!(out, "{question} (yes/no): ")?;
    out.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        writeln!(out)?;
        return Ok(false);
    }

    Ok(is_affirmative(&answer))
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "yes" | "y")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn is_affirmative_cases() {
        let cases: &[(&str, bool)] = &[
            ("yes\n", true),
            ("y\n", true),
            ("YES\n", true),
            ("Y", true),
            ("  yes  \r\n", true),
            ("no\n", false),
            ("n\n", false),
            ("yep\n", false),
            ("\n", false),
            ("", false),
        ];

        for (answer, expected) in cases {
            assert_eq!(is_affirmative(answer), *expected, "answer {:?}", answer);
        }
    }

    #[test]
    fn confirm_writes_question_and_reads_answer() {
        let mut input = Cursor::new("y\nleftover\n");
        let mut out = Vec::new();

        let ok = confirm(&mut input, &mut out, "Proceed?").expect("confirm");

        assert!(ok);
        assert_eq!(String::from_utf8(out).expect("utf8"), "Proceed? (yes/no): ");
    }

    #[test]
    fn confirm_on_closed_input_declines() {
        let mut input = Cursor::new("");
        let mut out = Vec::new();

        assert!(!confirm(&mut input, &mut out, "Proceed?").expect("confirm"));
    }
}
