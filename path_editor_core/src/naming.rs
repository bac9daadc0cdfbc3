//! Default names and renames

use crate::collection::PathCollection;
use crate::error::PathError;

/// Lowest-numbered free `"<prefix> N"` name, N starting at 1
///
/// Always computed against the names passed in, never cached.
pub fn default_name<'a>(prefix: &str, existing: impl IntoIterator<Item = &'a str>) -> String {
    let taken: std::collections::HashSet<&str> = existing.into_iter().collect();
    let mut index: u64 = 1;
    loop {
        let candidate = format!("{} {}", prefix, index);
        if !taken.contains(candidate.as_str()) {
            return candidate;
        }
        index += 1;
    }
}

/// Result of applying a rename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOutcome {
    pub old_name: String,
    pub new_name: String,
    /// Another path already carries `new_name`
    pub duplicate: bool,
}

/// Applies `proposed` to the path at `index` unconditionally
///
/// Creation guarantees unique names, renames do not: a colliding name is
/// applied and reported through [`RenameOutcome::duplicate`].
pub fn rename_path(
    collection: &mut PathCollection,
    index: usize,
    proposed: &str,
) -> Result<RenameOutcome, PathError> {
    let duplicate = collection
        .iter()
        .enumerate()
        .any(|(i, p)| i != index && p.name == proposed);
    let old_name = collection.rename(index, proposed)?;
    Ok(RenameOutcome {
        old_name,
        new_name: proposed.to_string(),
        duplicate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIX: &str = "Unnamed path";

    #[test]
    fn test_first_name() {
        assert_eq!(default_name(PREFIX, []), "Unnamed path 1");
    }

    #[test]
    fn test_next_after_consecutive() {
        let existing = ["Unnamed path 1", "Unnamed path 2"];
        assert_eq!(default_name(PREFIX, existing), "Unnamed path 3");
    }

    #[test]
    fn test_fills_lowest_gap() {
        assert_eq!(default_name(PREFIX, ["Unnamed path 2"]), "Unnamed path 1");
        let existing = ["Unnamed path 1", "Unnamed path 3"];
        assert_eq!(default_name(PREFIX, existing), "Unnamed path 2");
    }

    #[test]
    fn test_ignores_unrelated_names() {
        let existing = ["River", "Unnamed path 10", "Unnamed path"];
        assert_eq!(default_name(PREFIX, existing), "Unnamed path 1");
    }

    #[test]
    fn test_never_returns_existing() {
        let mut names: Vec<String> = Vec::new();
        for _ in 0..25 {
            let name = default_name(PREFIX, names.iter().map(String::as_str));
            assert!(!names.contains(&name));
            names.push(name);
        }
    }

    #[test]
    fn test_custom_prefix() {
        assert_eq!(default_name("Route", ["Route 1"]), "Route 2");
    }

    #[test]
    fn test_rename_reports_duplicate_but_applies() {
        let mut c = PathCollection::with_default_path("a");
        let b = c.create_path("b").unwrap();
        c.append(b);

        let outcome = rename_path(&mut c, 1, "a").unwrap();
        assert!(outcome.duplicate);
        assert_eq!(outcome.old_name, "b");
        assert_eq!(c.get(1).unwrap().name, "a");
    }

    #[test]
    fn test_rename_to_own_name_is_not_duplicate() {
        let mut c = PathCollection::with_default_path("a");
        let outcome = rename_path(&mut c, 0, "a").unwrap();
        assert!(!outcome.duplicate);
    }

    #[test]
    fn test_rename_out_of_range() {
        let mut c = PathCollection::with_default_path("a");
        assert!(rename_path(&mut c, 4, "x").is_err());
    }
}
