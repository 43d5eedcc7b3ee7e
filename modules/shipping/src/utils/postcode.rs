/// Matches a zone postcode entry against a destination postcode.
/// Entries are either literals (case-insensitive) or globs where `*`
/// matches any run of characters, e.g. `30*` or `*-TAS`.
pub fn postcode_matches(pattern: &str, postcode: &str) -> bool {
    glob_match(
        &pattern.trim().to_ascii_lowercase(),
        &postcode.trim().to_ascii_lowercase(),
    )
}

fn glob_match(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();
    let mut p = 0;
    let mut t = 0;
    // Backtracking point for the most recent `*`.
    let mut star: Option<usize> = None;
    let mut mark = 0;
    while t < text.len() {
        if p < pattern.len() && pattern[p] == '*' {
            star = Some(p);
            mark = t;
            p += 1;
        } else if p < pattern.len() && pattern[p] == text[t] {
            p += 1;
            t += 1;
        } else if let Some(star_at) = star {
            p = star_at + 1;
            mark += 1;
            t = mark;
        } else {
            return false;
        }
    }
    while p < pattern.len() && pattern[p] == '*' {
        p += 1;
    }
    p == pattern.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_entries_match_exactly_and_case_insensitively() {
        assert!(postcode_matches("3000", "3000"));
        assert!(postcode_matches("EC1A 1BB", "ec1a 1bb"));
        assert!(!postcode_matches("3000", "3001"));
        assert!(!postcode_matches("3000", "300"));
    }

    #[test]
    fn globs_match_any_run() {
        assert!(postcode_matches("30*", "3000"));
        assert!(postcode_matches("30*", "30"));
        assert!(!postcode_matches("30*", "3100"));
        assert!(postcode_matches("*-TAS", "7000-tas"));
        assert!(postcode_matches("3*0", "3550"));
        assert!(!postcode_matches("3*0", "3551"));
        assert!(postcode_matches("*", "anything"));
    }
}
