use regex::Regex;
use std::sync::LazyLock;

static ELEMENT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z][a-z]?").expect("Failed to compile element token pattern"));

/// Extracts element symbols from a formula-like string, in order of appearance.
///
/// A token is one uppercase ASCII letter optionally followed by one lowercase letter. Every
/// other character (digits, bonds, brackets, aromatic lowercase atoms) is skipped, so this
/// never fails; it may return an empty vector.
pub fn tokenize(formula: &str) -> Vec<String> {
    ELEMENT_TOKEN
        .find_iter(formula)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Number of tokens equal to `element`.
pub fn count_element(tokens: &[String], element: &str) -> usize {
    tokens.iter().filter(|t| t.as_str() == element).count()
}

/// Number of non-overlapping occurrences of `pattern` in the raw formula text.
pub fn count_pattern(formula: &str, pattern: &str) -> usize {
    formula.matches(pattern).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_simple_chain() {
        assert_eq!(tokenize("CCO"), vec!["C", "C", "O"]);
    }

    #[test]
    fn two_letter_symbols_are_single_tokens() {
        assert_eq!(tokenize("ClCBr"), vec!["Cl", "C", "Br"]);
    }

    #[test]
    fn tokenizer_skips_unmatched_characters() {
        assert_eq!(tokenize("C1=CC(=O)N[H]"), vec!["C", "C", "C", "O", "N", "H"]);
        assert_eq!(tokenize("c1ccccc1"), Vec::<String>::new());
    }

    #[test]
    fn empty_and_garbage_input_yield_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("1234-=#()[]").is_empty());
    }

    #[test]
    fn greedy_lowercase_follow_is_kept() {
        // "Co" reads as cobalt, not carbon + aromatic oxygen.
        assert_eq!(tokenize("Co"), vec!["Co"]);
    }

    #[test]
    fn counts_elements_and_patterns() {
        let tokens = tokenize("CC(C)CH3");
        assert_eq!(count_element(&tokens, "C"), 4);
        assert_eq!(count_element(&tokens, "H"), 1);
        assert_eq!(count_pattern("CH3-CH2-CH3", "CH3"), 2);
        assert_eq!(count_pattern("CH3-CH2-CH3", "-"), 2);
    }
}
