use std::cmp::Ordering;

/// Case-folding string ordering, tuned for the ASCII labels the mock data uses.
///
/// Letters compare case-insensitively first; on a tie lowercase sorts before
/// uppercase, then raw code points decide: `"apple" < "banana" < "Banana"`.
/// Diacritics are not folded, so accented letters order by code point after
/// every ASCII letter (`"zebra" < "éclair"`).
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    if primary != Ordering::Equal {
        return primary;
    }

    for (x, y) in a.chars().zip(b.chars()) {
        if x != y {
            return match (x.is_lowercase(), y.is_lowercase()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => x.cmp(&y),
            };
        }
    }

    a.len().cmp(&b.len())
}
