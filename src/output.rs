//! Writing extracted lines.

use serde::Deserialize;
use std::io::{self, Write};

/// Shape of the program output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per extracted line
    #[default]
    Text,
    /// A single JSON array of strings
    Json,
}

/// Write `lines` to `writer` in the given format
pub fn write_lines<W, I>(writer: &mut W, lines: I, format: OutputFormat) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = String>,
{
    match format {
        OutputFormat::Text => {
            let mut count = 0;
            for line in lines {
                writeln!(writer, "{}", line)?;
                count += 1;
            }
            Ok(count)
        }
        OutputFormat::Json => {
            let lines: Vec<String> = lines.into_iter().collect();
            serde_json::to_writer(&mut *writer, &lines)?;
            writeln!(writer)?;
            Ok(lines.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(lines: &[&str], format: OutputFormat) -> String {
        let mut buf = Vec::new();
        let owned = lines.iter().map(|s| s.to_string());
        write_lines(&mut buf, owned, format).expect("write lines");
        String::from_utf8(buf).expect("utf-8 output")
    }

    #[test]
    fn test_text_output() {
        assert_eq!(
            render(&["Hello world", "second line"], OutputFormat::Text),
            "Hello world\nsecond line\n"
        );
    }

    #[test]
    fn test_text_output_empty() {
        assert_eq!(render(&[], OutputFormat::Text), "");
    }

    #[test]
    fn test_json_output() {
        assert_eq!(
            render(&["Hello world", "say \"hi\""], OutputFormat::Json),
            "[\"Hello world\",\"say \\\"hi\\\"\"]\n"
        );
    }

    #[test]
    fn test_json_output_empty() {
        assert_eq!(render(&[], OutputFormat::Json), "[]\n");
    }
}
