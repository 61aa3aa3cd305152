use std::io::{self, BufRead, Write};

pub const TITLE_PROMPT: &str = "Enter the post title:";

/// Asks for the post title and reads one line back.
/// Only the line terminator is removed, the title is otherwise kept as typed.
pub fn prompt_title<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<String> {
    writeln!(output, "{}", TITLE_PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no title was entered"));
    }

    Ok(strip_line_ending(&line).to_string())
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
