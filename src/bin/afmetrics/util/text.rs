/// Greedy word wrap; always yields at least one (possibly empty) line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Shortens `s` to at most `max_len` characters, marking the cut with `…`.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    match max_len {
        0 => String::new(),
        n => s.chars().take(n - 1).chain(std::iter::once('…')).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_keeps_short_messages_on_one_line() {
        assert_eq!(wrap("no ranking found", 40), vec!["no ranking found"]);
        assert_eq!(wrap("", 10), vec![""]);
    }

    #[test]
    fn wrap_breaks_between_words() {
        assert_eq!(
            wrap("structure file for ranked_3 not found", 16),
            vec!["structure file", "for ranked_3 not", "found"]
        );
    }

    #[test]
    fn wrap_never_splits_long_paths() {
        let path = "/scratch/screens/P69905_P68871/ranked_0.pdb";
        assert_eq!(wrap(path, 10), vec![path]);
    }

    #[test]
    fn truncate_leaves_fitting_text_alone() {
        assert_eq!(truncate("ranked_0", 9), "ranked_0");
        assert_eq!(truncate("ranked_0*", 9), "ranked_0*");
    }

    #[test]
    fn truncate_marks_the_cut() {
        assert_eq!(truncate("P69905_P68871", 8), "P69905_…");
        assert_eq!(truncate("abc", 1), "…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate("count ≥ 3 of 5", 9), "count ≥ …");
    }
}
