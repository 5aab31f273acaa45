use serde::{Deserialize, Serialize};

use crate::value_trie::ValueTrie;

/// Settings for [`Hyphenator`].
///
/// Every field has a default, so a partial config deserializes cleanly:
///
/// ```
/// # use hyphtrie::HyphenatorConfig;
/// let config: HyphenatorConfig = serde_json::from_str(r#"{ "left_min": 1 }"#).unwrap();
/// assert_eq!(config.left_min, 1);
/// assert_eq!(config.right_min, 3);
/// assert_eq!(config.boundary, '.');
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HyphenatorConfig {
    /// Fewest characters allowed before the first break.
    pub left_min: usize,
    /// Fewest characters allowed after the last break.
    pub right_min: usize,
    /// Marker that pattern tables use for a word edge.
    pub boundary: char,
}

impl Default for HyphenatorConfig {
    fn default() -> Self {
        HyphenatorConfig {
            left_min: 2,
            right_min: 3,
            boundary: '.',
        }
    }
}

/// Finds hyphenation points by combining every pattern that matches a word.
///
/// The word is lower-cased, wrapped in boundary markers and scanned with
/// [`ValueTrie::substrings`]. Each match contributes the values its pattern
/// was added with, and for each gap between characters the largest value
/// wins. Odd values allow a break.
///
/// # Examples
///
/// ```
/// use hyphtrie::{Hyphenator, HyphenatorConfig, ValueTrie};
///
/// let patterns = ValueTrie::from_patterns([
///     "hy3ph", "he2n", "hena4", "hen5at", "1na", "n2at", "1tio", "2io", "o2n",
/// ]);
/// let hyphenator = Hyphenator::new(patterns, HyphenatorConfig::default());
/// assert_eq!(hyphenator.hyphenate("hyphenation"), vec!["hy", "phen", "ation"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Hyphenator {
    patterns: ValueTrie,
    config: HyphenatorConfig,
}

impl Hyphenator {
    /// Creates a hyphenator over a pattern trie.
    pub fn new(patterns: ValueTrie, config: HyphenatorConfig) -> Self {
        Hyphenator { patterns, config }
    }

    /// The pattern trie matches are drawn from.
    pub fn patterns(&self) -> &ValueTrie {
        &self.patterns
    }

    /// The active settings.
    pub fn config(&self) -> &HyphenatorConfig {
        &self.config
    }

    /// The combined value for every gap of `word`.
    ///
    /// Entry `i` is the gap in front of the `i`-th character, so the result is
    /// one longer than the word's char count.
    pub fn points(&self, word: &str) -> Vec<i32> {
        let boundary = self.config.boundary;
        let text: String = std::iter::once(boundary)
            .chain(word.chars().map(fold_case))
            .chain(std::iter::once(boundary))
            .collect();
        let text_len = text.chars().count();

        // gap `g` sits in front of char `g` of the wrapped text
        let mut gaps = vec![0; text_len + 1];
        for found in self.patterns.substrings(&text) {
            let values = &found.member_values;
            let first_gap = found.start + found.char_len() + 1 - values.len();
            for (offset, value) in values.iter().enumerate() {
                let gap = &mut gaps[first_gap + offset];
                *gap = (*gap).max(*value);
            }
        }

        // drop the gaps around the boundary markers
        gaps[1..text_len].to_vec()
    }

    /// Char offsets inside `word` where a hyphen may go.
    pub fn break_positions(&self, word: &str) -> Vec<usize> {
        let points = self.points(word);
        let word_len = points.len() - 1;

        let positions: Vec<usize> = points
            .iter()
            .enumerate()
            .filter(|&(pos, &value)| {
                value % 2 == 1
                    && pos >= self.config.left_min.max(1)
                    && word_len.saturating_sub(pos) >= self.config.right_min.max(1)
            })
            .map(|(pos, _)| pos)
            .collect();

        tracing::debug!(word, ?positions, "hyphenation points");
        positions
    }

    /// Splits `word` at every allowed break.
    pub fn hyphenate(&self, word: &str) -> Vec<String> {
        let chars: Vec<char> = word.chars().collect();
        let mut pieces = Vec::new();
        let mut last = 0;

        for pos in self.break_positions(word) {
            pieces.push(chars[last..pos].iter().collect());
            last = pos;
        }
        pieces.push(chars[last..].iter().collect());

        pieces
    }
}

/// Lower-cases a char when that keeps it a single char.
fn fold_case(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => c,
    }
}
