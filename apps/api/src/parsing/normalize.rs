//! Lexical normalization: line splitting, compact-block folding, preview text.

/// Splits raw text into trimmed lines. `\r\n`, lone `\r`, form feeds and the
/// Unicode line/paragraph separators all count as line breaks.
/// Blank lines are kept as empty strings; they separate blocks downstream.
pub fn split_lines(text: &str) -> Vec<String> {
    text.replace("\r\n", "\n")
        .split(is_line_break)
        .map(|line| line.trim().to_string())
        .collect()
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Folds a section's raw lines into logical entries.
///
/// Consecutive non-blank lines are joined with single spaces; a blank line
/// closes the current entry. Empty entries never reach the output.
pub fn compact_blocks(lines: &[String]) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            flush_block(&mut current, &mut blocks);
            continue;
        }
        current.push(line);
    }
    flush_block(&mut current, &mut blocks);

    blocks
}

fn flush_block(current: &mut Vec<&str>, blocks: &mut Vec<String>) {
    if current.is_empty() {
        return;
    }
    let joined = current.join(" ");
    let joined = joined.trim();
    if !joined.is_empty() {
        blocks.push(joined.to_string());
    }
    current.clear();
}

/// Builds the short preview returned alongside an upload: newlines normalized,
/// every line trimmed, truncated to `max_chars` characters.
pub fn build_preview(text: &str, max_chars: usize) -> String {
    split_lines(text).join("\n").chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_split_lines_trims_and_handles_crlf() {
        let out = split_lines("  Ada Lovelace \r\nada@example.com\r\rSkills:");
        assert_eq!(out, vec!["Ada Lovelace", "ada@example.com", "", "Skills:"]);
    }

    #[test]
    fn test_split_lines_breaks_on_form_feed_and_unicode_separators() {
        let out = split_lines("Page one\x0cPage two\u{2028}Skills\u{2029}Rust\u{85}Go");
        assert_eq!(out, vec!["Page one", "Page two", "Skills", "Rust", "Go"]);
    }

    #[test]
    fn test_split_lines_empty_input() {
        assert_eq!(split_lines(""), vec![String::new()]);
    }

    #[test]
    fn test_compact_blocks_joins_runs() {
        let raw = lines(&[
            "Data Analyst",
            "Acme Corp",
            "",
            "Intern",
            "Globex",
            "Jan 2020 - Jun 2020",
        ]);
        assert_eq!(
            compact_blocks(&raw),
            vec![
                "Data Analyst Acme Corp".to_string(),
                "Intern Globex Jan 2020 - Jun 2020".to_string(),
            ]
        );
    }

    #[test]
    fn test_compact_blocks_drops_leading_and_trailing_blanks() {
        let raw = lines(&["", "", "BSc Computer Science", "", ""]);
        assert_eq!(compact_blocks(&raw), vec!["BSc Computer Science".to_string()]);
    }

    #[test]
    fn test_compact_blocks_empty() {
        assert!(compact_blocks(&[]).is_empty());
        assert!(compact_blocks(&lines(&["", "  "])).is_empty());
    }

    #[test]
    fn test_build_preview_truncates_by_chars() {
        let preview = build_preview("  Şükrü Öztürk  \r\nİstanbul", 10);
        assert_eq!(preview.chars().count(), 10);
        assert!(preview.starts_with("Şükrü Öztü"));
    }

    #[test]
    fn test_build_preview_short_text_untouched() {
        assert_eq!(build_preview("a\n  b  ", 1200), "a\nb");
    }
}
