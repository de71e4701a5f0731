/// Reserved first option of the language control, meaning "no language chosen".
pub const PLACEHOLDER_LANGUAGE: &str = "Select language...";

/// Parses the newline-separated language catalog served at `languages.txt`.
///
/// Each line is trimmed; empty lines are dropped; source order is preserved.
pub fn parse_language_list(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}
