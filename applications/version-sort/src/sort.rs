use anyhow::{Context as _, Result};
use tracing::debug;

use version::Version;

use crate::configuration::SortOrder;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Arrangement {
    pub order: SortOrder,
    /// Versions lesser than this one are dropped.
    pub minimum: Option<Version>,
    pub deduplicate: bool,
}

impl Arrangement {
    #[must_use]
    pub fn apply(&self, mut versions: Vec<Version>) -> Vec<Version> {
        if let Some(minimum) = &self.minimum {
            versions.retain(|version| {
                let keep = version >= minimum;

                if !keep {
                    debug!("Dropping {version}, as it is below {minimum}.");
                }

                keep
            });
        }

        match self.order {
            SortOrder::Ascending => versions.sort(),
            SortOrder::Descending => versions.sort_by(|lhs, rhs| rhs.cmp(lhs)),
        }

        if self.deduplicate {
            versions.dedup();
        }

        versions
    }
}

/// Splits a list of versions separated by commas and/or whitespace.
pub fn split_list(list: &str) -> impl Iterator<Item = &str> {
    list.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|version| !version.is_empty())
}

pub fn parse_all<'r, I>(versions: I) -> Result<Vec<Version>>
where
    I: IntoIterator<Item = &'r str>,
{
    versions
        .into_iter()
        .map(|version| {
            version.parse::<Version>().with_context(|| {
                format!("Failed to parse {version:?} as a version!")
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use version::Version;

    use crate::configuration::SortOrder;

    use super::{parse_all, split_list, Arrangement};

    fn versions(list: &str) -> Vec<Version> {
        parse_all(split_list(list)).unwrap()
    }

    #[test]
    fn test_split_list() {
        assert_eq!(
            split_list("1.0.0, 1.0.1\n0.9.95\t 0.8.97,,").collect::<Vec<_>>(),
            ["1.0.0", "1.0.1", "0.9.95", "0.8.97"],
        );
        assert_eq!(split_list(" , ").count(), 0);
    }

    #[test]
    fn test_parse_all() {
        assert_eq!(
            versions("2023.3.5 2023.03.05.0"),
            [Version::new([2023, 3, 5]), Version::new([2023, 3, 5, 0])],
        );

        let error = parse_all(["1.2", "3.4.5.abc"]).unwrap_err();

        assert!(error.to_string().contains("3.4.5.abc"));
    }

    #[test]
    fn test_ascending() {
        assert_eq!(
            Arrangement::default().apply(versions(
                "1.0.0 1.0.1 0.9.95 0.8.97 2024.2.25.101 1.0.0.0",
            )),
            versions("0.8.97 0.9.95 1.0.0 1.0.0.0 1.0.1 2024.2.25.101"),
        );
    }

    #[test]
    fn test_descending() {
        assert_eq!(
            Arrangement {
                order: SortOrder::Descending,
                ..Arrangement::default()
            }
            .apply(versions("2023.3 2023.3.5 2022.12.1")),
            versions("2023.3.5 2023.3 2022.12.1"),
        );
    }

    #[test]
    fn test_minimum() {
        assert_eq!(
            Arrangement {
                minimum: Some(Version::new([1, 0])),
                ..Arrangement::default()
            }
            .apply(versions("0.9.95 1 1.0 1.0.0 2")),
            versions("1.0 1.0.0 2"),
        );
    }

    #[test]
    fn test_deduplicate() {
        let input = versions("1.2 01.2 1.2.0 1.02");

        assert_eq!(
            Arrangement::default().apply(input.clone()),
            versions("1.2 1.2 1.2 1.2.0"),
        );

        assert_eq!(
            Arrangement {
                deduplicate: true,
                ..Arrangement::default()
            }
            .apply(input),
            versions("1.2 1.2.0"),
        );
    }
}
