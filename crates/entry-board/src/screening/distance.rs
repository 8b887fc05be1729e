/// Levenshtein distance between `a` and `b`, counted in chars.
///
/// Row 0 and column 0 of the table hold the index (pure insertions or
/// deletions); every other cell is the cheapest of a substitution from the
/// diagonal, an insertion from the left, or a deletion from above. Only two
/// rows are kept alive at a time.
pub fn edit_distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let mismatch = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            curr[j] = (prev[j - 1] + mismatch)
                .min(curr[j - 1] + 1)
                .min(prev[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Whether `a` and `b` are at most `max` edits apart.
///
/// The length difference is a lower bound on the distance, so pairs that
/// differ in length by more than `max` are rejected without filling a table.
pub fn within_distance(a: &str, b: &str, max: usize) -> bool {
    let a_len = a.chars().count();
    let b_len = b.chars().count();
    if a_len.abs_diff(b_len) > max {
        return false;
    }

    edit_distance(a, b) <= max
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &[
        "",
        "a",
        "yrs",
        "years",
        "senior",
        "experience",
        "experiencd",
        "kitten",
        "sitting",
        "café",
    ];

    #[test]
    fn identical_strings_have_zero_distance() {
        for word in WORDS {
            assert_eq!(edit_distance(word, word), 0, "{word}");
        }
    }

    #[test]
    fn distance_is_symmetric() {
        for a in WORDS {
            for b in WORDS {
                assert_eq!(edit_distance(a, b), edit_distance(b, a), "{a} / {b}");
            }
        }
    }

    #[test]
    fn distance_never_exceeds_longer_length() {
        for a in WORDS {
            for b in WORDS {
                let bound = a.chars().count().max(b.chars().count());
                assert!(edit_distance(a, b) <= bound, "{a} / {b}");
            }
        }
    }

    #[test]
    fn triangle_inequality_holds() {
        for a in WORDS {
            for b in WORDS {
                for c in WORDS {
                    assert!(
                        edit_distance(a, c) <= edit_distance(a, b) + edit_distance(b, c),
                        "{a} / {b} / {c}"
                    );
                }
            }
        }
    }

    #[test]
    fn classic_examples() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("experience", "experiencd"), 1);
        assert_eq!(edit_distance("experience", "experiencedd"), 2);
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(edit_distance("café", "cafe"), 1);
    }

    #[test]
    fn within_distance_agrees_with_full_computation() {
        for a in WORDS {
            for b in WORDS {
                for max in 0..4 {
                    assert_eq!(
                        within_distance(a, b, max),
                        edit_distance(a, b) <= max,
                        "{a} / {b} / {max}"
                    );
                }
            }
        }
    }
}
