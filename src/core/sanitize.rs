// src/core/sanitize.rs

/// Team name → filename fragment: spaces become underscores.
/// Path separators are folded the same way so a name can't escape the output dir.
pub fn team_file_fragment(name: &str) -> String {
    name.trim()
        .chars()
        .map(|ch| match ch {
            ' ' | '/' | '\\' => '_',
            c => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_become_underscores() {
        assert_eq!(team_file_fragment("Ohio State"), "Ohio_State");
        assert_eq!(team_file_fragment("Miami (OH)"), "Miami_(OH)");
        assert_eq!(team_file_fragment("Texas A&M"), "Texas_A&M");
    }

    #[test]
    fn separators_are_neutralized() {
        assert_eq!(team_file_fragment("a/b\\c"), "a_b_c");
        assert_eq!(team_file_fragment("  Utah "), "Utah");
    }
}
