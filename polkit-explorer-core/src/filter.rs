//! Case-insensitive substring filter over the action-id list.

/// Indices of the ids containing `needle`, case-insensitively.
///
/// An empty needle matches everything. The result preserves the original
/// relative order; this is a read-only projection that never touches the
/// document itself.
pub fn filter<S: AsRef<str>>(ids: &[S], needle: &str) -> Vec<usize> {
    if needle.is_empty() {
        return (0..ids.len()).collect();
    }
    let needle = needle.to_lowercase();
    ids.iter()
        .enumerate()
        .filter(|(_, id)| id.as_ref().to_lowercase().contains(&needle))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDS: [&str; 3] = ["org.foo.bar", "org.Foo.baz", "com.other"];

    /// Case-insensitive match, original relative order preserved.
    #[test]
    fn matches_case_insensitively_in_order() {
        assert_eq!(filter(&IDS, "foo"), [0, 1]);
        assert_eq!(filter(&IDS, "FOO"), [0, 1]);
        assert_eq!(filter(&IDS, "other"), [2]);
    }

    /// Empty needle is the identity projection.
    #[test]
    fn empty_needle_matches_all() {
        assert_eq!(filter(&IDS, ""), [0, 1, 2]);
    }

    /// A needle matching nothing yields an empty index list.
    #[test]
    fn no_match_yields_empty() {
        assert!(filter(&IDS, "zzz").is_empty());
        assert!(filter::<&str>(&[], "foo").is_empty());
    }
}
