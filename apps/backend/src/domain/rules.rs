//! Word-chain rules.

/// The syllable that ends the chain: a word-final ん loses the game for
/// whoever produced it.
pub const TERMINAL_SYLLABLE: char = 'ん';

/// True when `word` ends the chain under the shiritori rule.
pub fn ends_chain(word: &str) -> bool {
    word.chars().next_back() == Some(TERMINAL_SYLLABLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_syllable_ends_chain() {
        assert!(ends_chain("みかん"));
        assert!(ends_chain("ん"));
    }

    #[test]
    fn ordinary_words_do_not_end_chain() {
        assert!(!ends_chain("りんご"));
        assert!(!ends_chain("ごりら"));
        assert!(!ends_chain(""));
    }

    #[test]
    fn only_the_final_position_counts() {
        // ん in the middle is legal play
        assert!(!ends_chain("さんま"));
    }
}
