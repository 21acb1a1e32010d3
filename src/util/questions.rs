//! Custom-question list helpers.

#[cfg(test)]
#[path = "questions_test.rs"]
mod questions_test;

/// Split a stored numbered list (`"1. First\n2. Second"`) into bare questions.
pub fn parse_numbered(text: &str) -> Vec<String> {
    text.lines()
        .map(strip_numbering)
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_owned)
        .collect()
}

fn strip_numbering(line: &str) -> &str {
    let trimmed = line.trim_start();
    let digits = trimmed.len() - trimmed.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return trimmed;
    }
    match trimmed[digits..].strip_prefix('.') {
        Some(rest) => rest,
        None => trimmed,
    }
}

/// Drop blank entries, keeping order and the original text of the rest.
pub fn non_blank(questions: &[String]) -> Vec<String> {
    questions.iter().filter(|q| !q.trim().is_empty()).cloned().collect()
}

/// Button caption summarizing the configured questions.
pub fn summary(count: usize) -> String {
    if count == 0 {
        "Click to add custom questions".to_owned()
    } else {
        format!("{count} questions configured")
    }
}
