//! Fuzzy word matching for catalog searches.
//!
//! The match distance between a set of query words and an item is the sum,
//! over the query words, of each word's distance to its closest word in the
//! item's name and description. A single word distance is the Levenshtein
//! edit distance normalized by the longer word's length, so it always falls
//! in `[0, 1]`. Comparison is case-insensitive.

/// Levenshtein edit distance over Unicode scalar values.
fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0_usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;

        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != cb);
            current[j + 1] = substitution.min(previous[j + 1] + 1).min(current[j] + 1);
        }

        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

/// Distance between two single words, normalized to `[0, 1]`.
#[allow(clippy::cast_precision_loss)]
fn word_distance(a: &str, b: &str) -> f32 {
    let longest = a.chars().count().max(b.chars().count());

    if longest == 0 {
        return 0.0;
    }

    edit_distance(a, b) as f32 / longest as f32
}

/// Sum over `words` of the distance to the closest word in `text`.
///
/// A query word with no candidate in `text` contributes the maximal single
/// word distance of `1.0`.
pub(crate) fn words_match_distance(words: &[String], text: &str) -> f32 {
    let text_words: Vec<String> = text.split_whitespace().map(str::to_lowercase).collect();

    words
        .iter()
        .map(|word| {
            let word = word.to_lowercase();
            text_words
                .iter()
                .map(|candidate| word_distance(&word, candidate))
                .fold(1.0_f32, f32::min)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_words_have_zero_distance() {
        assert_eq!(edit_distance("chair", "chair"), 0);
        assert!(words_match_distance(&["chair".to_owned()], "wooden chair") < f32::EPSILON);
    }

    #[test]
    fn distance_counts_edits() {
        assert_eq!(edit_distance("chair", "chairs"), 1);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("", "abc"), 3);
    }

    #[test]
    fn comparison_is_case_insensitive() {
        let distance = words_match_distance(&["Chair".to_owned()], "CHAIR for kids");
        assert!(distance < f32::EPSILON);
    }

    #[test]
    fn unmatched_word_contributes_one() {
        let distance = words_match_distance(&["zzzzzzzz".to_owned()], "chair");
        assert!((distance - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn multiple_words_sum_their_distances() {
        let one = words_match_distance(&["chair".to_owned()], "chair table");
        let two = words_match_distance(&["chair".to_owned(), "table".to_owned()], "chair table");
        assert!((two - one) < f32::EPSILON);

        let miss =
            words_match_distance(&["chair".to_owned(), "zzzzzzzz".to_owned()], "chair table");
        assert!((miss - 1.0).abs() < f32::EPSILON);
    }
}
