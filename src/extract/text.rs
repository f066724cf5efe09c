/// Punctuation that absorbs the space preceding it during cleanup
const ABSORBING_PUNCTUATION: &[char] = &[',', '.', '!', '?', ';', ':'];

/// Normalizes whitespace in extracted text
///
/// Collapses every run of whitespace (spaces, tabs, newlines) into a single
/// space, removes the space immediately preceding `,.!?;:`, and trims the
/// ends. Total over arbitrary input, including the empty string, and
/// idempotent: `clean_text(clean_text(s)) == clean_text(s)`.
///
/// # Examples
///
/// ```
/// use sitegrab::clean_text;
///
/// assert_eq!(clean_text("Hello\n\n   world ."), "Hello world.");
/// assert_eq!(clean_text(""), "");
/// ```
pub fn clean_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for token in input.split_whitespace() {
        let absorbs = token
            .chars()
            .next()
            .is_some_and(|c| ABSORBING_PUNCTUATION.contains(&c));

        if !out.is_empty() && !absorbs {
            out.push(' ');
        }
        out.push_str(token);
    }

    out
}
