//! # Name Collation
//!
//! Locale-aware ordering for product names.
//!
//! A plain `str::cmp` sorts by code point, which puts every uppercase letter
//! before every lowercase one and every accented letter after `z`. Users
//! expect a dictionary order instead.
//!
//! ## Comparison Levels
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Multi-Level Comparison                               │
//! │                                                                         │
//! │  Level 1 (primary)   character class, then base letter with case       │
//! │                      and accents folded                                │
//! │                      space < punctuation/symbols < digits < letters    │
//! │                      "açúcar" ~ "Acucar" ~ "ACUCAR"                    │
//! │           │ tie                                                         │
//! │           ▼                                                             │
//! │  Level 2 (secondary) accents: unaccented < accented                    │
//! │                      "acucar" < "açúcar"                               │
//! │           │ tie                                                         │
//! │           ▼                                                             │
//! │  Level 3 (tertiary)  case: lowercase < uppercase                       │
//! │                      "apple" < "Apple"                                 │
//! │           │ tie                                                         │
//! │           ▼                                                             │
//! │  Level 4             code points (makes the order total)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Diacritic folding covers the Latin-1 Supplement and the common Latin
//! Extended-A letters; other scripts fall through with their lowercase form
//! as the base letter.

use std::cmp::Ordering;

/// A single collation element: (class, base letter, accent weight, case weight).
type Element = (u8, char, u8, u8);

/// Compares two product names in dictionary order.
///
/// ## Example
/// ```rust
/// use std::cmp::Ordering;
/// use stockroom_core::collation::compare_names;
///
/// assert_eq!(compare_names("apple", "Banana"), Ordering::Less);
/// assert_eq!(compare_names("Óleo", "Pão"), Ordering::Less);
/// ```
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let ka = elements(a);
    let kb = elements(b);

    ka.iter()
        .map(|e| (e.0, e.1))
        .cmp(kb.iter().map(|e| (e.0, e.1)))
        .then_with(|| ka.iter().map(|e| e.2).cmp(kb.iter().map(|e| e.2)))
        .then_with(|| ka.iter().map(|e| e.3).cmp(kb.iter().map(|e| e.3)))
        .then_with(|| a.cmp(b))
}

fn elements(s: &str) -> Vec<Element> {
    let mut out = Vec::with_capacity(s.len());
    for c in s.chars() {
        let case = if c.is_uppercase() { 1 } else { 0 };
        for lower in c.to_lowercase() {
            let (base, accent) = fold_diacritic(lower);
            out.push((class(base), base, accent, case));
        }
    }
    out
}

/// Primary-level group of a character.
fn class(c: char) -> u8 {
    if c.is_whitespace() {
        0
    } else if c.is_numeric() {
        2
    } else if c.is_alphabetic() {
        3
    } else {
        1
    }
}

/// Maps a lowercase letter to its base letter and an accent weight.
///
/// Weight 0 means unaccented. Distinct diacritics get distinct weights so
/// "é" and "è" still order deterministically at the secondary level.
fn fold_diacritic(c: char) -> (char, u8) {
    match c {
        'á' => ('a', 1),
        'à' => ('a', 2),
        'â' => ('a', 3),
        'ã' => ('a', 4),
        'ä' => ('a', 5),
        'å' => ('a', 6),
        'ā' | 'ă' | 'ą' => ('a', 7),
        'ç' => ('c', 8),
        'ć' | 'č' | 'ĉ' | 'ċ' => ('c', 7),
        'ď' | 'đ' => ('d', 7),
        'é' => ('e', 1),
        'è' => ('e', 2),
        'ê' => ('e', 3),
        'ë' => ('e', 5),
        'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => ('e', 7),
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => ('g', 7),
        'í' => ('i', 1),
        'ì' => ('i', 2),
        'î' => ('i', 3),
        'ï' => ('i', 5),
        'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => ('i', 7),
        'ł' | 'ľ' | 'ĺ' | 'ļ' => ('l', 7),
        'ñ' => ('n', 4),
        'ń' | 'ň' | 'ņ' => ('n', 7),
        'ó' => ('o', 1),
        'ò' => ('o', 2),
        'ô' => ('o', 3),
        'õ' => ('o', 4),
        'ö' => ('o', 5),
        'ø' => ('o', 6),
        'ō' | 'ŏ' | 'ő' => ('o', 7),
        'ŕ' | 'ř' | 'ŗ' => ('r', 7),
        'ś' | 'š' | 'ş' | 'ŝ' => ('s', 7),
        'ť' | 'ţ' => ('t', 7),
        'ú' => ('u', 1),
        'ù' => ('u', 2),
        'û' => ('u', 3),
        'ü' => ('u', 5),
        'ů' => ('u', 6),
        'ũ' | 'ū' | 'ŭ' | 'ű' | 'ų' => ('u', 7),
        'ý' => ('y', 1),
        'ÿ' => ('y', 5),
        'ź' | 'ž' | 'ż' => ('z', 7),
        other => (other, 0),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut v: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        v.sort_by(|a, b| compare_names(a, b));
        v
    }

    #[test]
    fn test_case_is_folded_at_primary_level() {
        assert_eq!(sorted(&["banana", "Apple", "cherry"]), ["Apple", "banana", "cherry"]);
        assert_eq!(sorted(&["Zebra", "apple"]), ["apple", "Zebra"]);
    }

    #[test]
    fn test_lowercase_before_uppercase_on_tie() {
        assert_eq!(compare_names("apple", "Apple"), Ordering::Less);
        assert_eq!(compare_names("Apple", "apple"), Ordering::Greater);
    }

    #[test]
    fn test_accents_are_folded_at_primary_level() {
        assert_eq!(
            sorted(&["Pão", "Óleo", "Açúcar", "Banana"]),
            ["Açúcar", "Banana", "Óleo", "Pão"]
        );
        assert_eq!(compare_names("café", "cafe"), Ordering::Greater);
        assert_eq!(compare_names("café", "cafes"), Ordering::Less);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(compare_names("Milk", "Milk 2L"), Ordering::Less);
    }

    #[test]
    fn test_equal_names_compare_equal() {
        assert_eq!(compare_names("Apple", "Apple"), Ordering::Equal);
    }

    #[test]
    fn test_symbols_sort_before_letters() {
        assert_eq!(
            sorted(&["apple", "~tilde", "{brace}", "|pipe", "_under", "zebra"]),
            ["_under", "{brace}", "|pipe", "~tilde", "apple", "zebra"]
        );
        assert_eq!(compare_names("a~", "ab"), Ordering::Less);
        assert_eq!(compare_names("a{", "a1"), Ordering::Less);
    }

    #[test]
    fn test_class_order() {
        assert_eq!(
            sorted(&["b", "2kg", "-x", " a"]),
            [" a", "-x", "2kg", "b"]
        );
    }

    #[test]
    fn test_order_is_antisymmetric() {
        let names = ["a", "A", "á", "Á", "b", "B", "ç", "c"];
        for x in names {
            for y in names {
                assert_eq!(compare_names(x, y), compare_names(y, x).reverse());
            }
        }
    }

    proptest! {
        #[test]
        fn prop_total_order(a in "\\PC{0,8}", b in "\\PC{0,8}", c in "\\PC{0,8}") {
            let ab = compare_names(&a, &b);
            prop_assert_eq!(ab, compare_names(&b, &a).reverse());
            prop_assert_eq!(ab == Ordering::Equal, a == b);

            if ab != Ordering::Greater && compare_names(&b, &c) != Ordering::Greater {
                prop_assert_ne!(compare_names(&a, &c), Ordering::Greater);
            }
        }

        #[test]
        fn prop_case_never_beats_letters(a in "[a-zA-Z]{1,6}", b in "[a-zA-Z]{1,6}") {
            let folded = a.to_lowercase().cmp(&b.to_lowercase());
            if folded != Ordering::Equal {
                prop_assert_eq!(compare_names(&a, &b), folded);
            }
        }
    }
}
