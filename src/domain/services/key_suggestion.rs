//! "Did you mean" suggestions for misspelled keys

/// Largest edit distance still offered as a suggestion
pub const MAX_SUGGESTION_DISTANCE: usize = 2;

/// Closest candidate to `unknown` within [`MAX_SUGGESTION_DISTANCE`] edits.
///
/// Case is ignored, so `pagedir` finds `pageDir`. Ties go to the earlier
/// candidate.
pub fn suggest_key(unknown: &str, candidates: &[&'static str]) -> Option<&'static str> {
    let unknown = unknown.to_lowercase();
    candidates
        .iter()
        .map(|&candidate| (candidate, edit_distance(&unknown, &candidate.to_lowercase())))
        .filter(|&(_, dist)| dist <= MAX_SUGGESTION_DISTANCE)
        .min_by_key(|&(_, dist)| dist)
        .map(|(candidate, _)| candidate)
}

/// Levenshtein distance over chars
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ac) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &bc) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = (above + 1)
                .min(row[j] + 1)
                .min(diagonal + usize::from(ac != bc));
            diagonal = above;
        }
    }

    row[b.len()]
}
