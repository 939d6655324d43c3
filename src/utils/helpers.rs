#[must_use]
pub fn index_to_col_name(index: usize) -> String {
    let mut col_name = String::new();
    let mut n = index;

    while n > 0 {
        let remainder = (n - 1) % 26;
        col_name.insert(0, (b'A' + remainder as u8) as char);
        n = (n - 1) / 26;
    }

    if col_name.is_empty() {
        col_name.push('A');
    }

    col_name
}

/// Resolve a column label such as `A`, `z` or `AA` to its 1-based index.
///
/// Letters are digits 1..=26 in base 26. Returns `None` for an empty label,
/// for any non-letter character and for labels too long to fit in `usize`.
#[must_use]
pub fn col_name_to_index(name: &str) -> Option<usize> {
    if name.is_empty() {
        return None;
    }

    let mut result: usize = 0;

    for c in name.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }

        let val = (c.to_ascii_uppercase() as u8 - b'A' + 1) as usize;
        result = result.checked_mul(26)?.checked_add(val)?;
    }

    Some(result)
}

// Format cell reference (e.g., A1, B2)
#[must_use]
pub fn cell_reference(cell: (usize, usize)) -> String {
    format!("{}{}", index_to_col_name(cell.1), cell.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_labels() {
        assert_eq!(col_name_to_index("A"), Some(1));
        assert_eq!(col_name_to_index("Z"), Some(26));
        assert_eq!(col_name_to_index("AA"), Some(27));
        assert_eq!(col_name_to_index("AZ"), Some(52));
        assert_eq!(col_name_to_index("BA"), Some(53));
        assert_eq!(col_name_to_index("XFD"), Some(16_384));
    }

    #[test]
    fn case_is_not_significant() {
        assert_eq!(col_name_to_index("ab"), col_name_to_index("AB"));
        assert_eq!(col_name_to_index("xFd"), Some(16_384));
    }

    #[test]
    fn rejects_non_letters() {
        for label in ["", "A1", "A-", " A", "1", "Ä"] {
            assert_eq!(col_name_to_index(label), None, "label {label:?}");
        }
    }

    #[test]
    fn rejects_overflowing_labels() {
        let label = "Z".repeat(64);
        assert_eq!(col_name_to_index(&label), None);
    }

    #[test]
    fn index_and_name_are_inverse() {
        let mut previous = 0;
        for index in 1..=2_000 {
            let name = index_to_col_name(index);
            let resolved = col_name_to_index(&name).unwrap();
            assert_eq!(resolved, index);
            assert!(resolved > previous);
            previous = resolved;
        }
    }

    #[test]
    fn formats_cell_references() {
        assert_eq!(cell_reference((5, 2)), "B5");
        assert_eq!(cell_reference((1, 27)), "AA1");
    }
}
