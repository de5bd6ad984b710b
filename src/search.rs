// Match engine.
// Line-level keyword filtering over description and README text.

use crate::github::StarredRepo;

/// Record-inclusion policy across keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Any keyword anywhere in the record selects it.
    Any,
    /// Every keyword must appear in at least one matched line of the record.
    All,
}

/// One record selected by the filter, with the lines that matched.
/// Borrows the record so the cached data stays untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct StarMatch<'a> {
    pub star: &'a StarredRepo,
    pub lines: Vec<&'a str>,
}

/// Select records whose description or README lines contain the keywords.
///
/// A line is kept when it contains any keyword as a literal, case-sensitive
/// substring. Description lines come before README lines, each field in its
/// own order. Under All, a record is kept only when every keyword appears in
/// at least one of its kept lines — not necessarily the same line.
pub fn filter_stars<'a>(
    stars: &'a [StarredRepo],
    greps: &[String],
    mode: MatchMode,
) -> Vec<StarMatch<'a>> {
    let mut matches = Vec::new();

    for star in stars {
        let lines = matching_lines(star, greps);
        if lines.is_empty() {
            continue;
        }

        let selected = match mode {
            MatchMode::Any => true,
            MatchMode::All => greps
                .iter()
                .all(|grep| lines.iter().any(|line| line.contains(grep.as_str()))),
        };

        if selected {
            matches.push(StarMatch { star, lines });
        }
    }

    matches
}

/// Collect a record's candidate lines: description first, then README.
fn matching_lines<'a>(star: &'a StarredRepo, greps: &[String]) -> Vec<&'a str> {
    let description = star.description.as_deref().unwrap_or_default();

    [description, star.readme.as_str()]
        .into_iter()
        .filter(|text| !text.is_empty())
        .flat_map(str::lines)
        .filter(|line| greps.iter().any(|grep| line.contains(grep.as_str())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star(id: u64, description: Option<&str>, readme: &str) -> StarredRepo {
        StarredRepo {
            id,
            name: format!("repo{}", id),
            owner: "alice".to_string(),
            full_name: format!("alice/repo{}", id),
            html_url: format!("https://github.com/alice/repo{}", id),
            default_branch: "main".to_string(),
            description: description.map(str::to_string),
            readme: readme.to_string(),
        }
    }

    fn greps(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_or_mode_selects_any_keyword() {
        let stars = vec![star(1, Some("a caching proxy"), "")];

        let matches = filter_stars(&stars, &greps(&["cache", "proxy"]), MatchMode::Any);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].lines, vec!["a caching proxy"]);
    }

    #[test]
    fn test_and_mode_spans_fields() {
        // "cache" only in the description, "proxy" only in the README:
        // still a match, the correspondence is per record, not per line.
        let stars = vec![star(1, Some("an http cache"), "## About\na proxy for the rest\n")];

        let matches = filter_stars(&stars, &greps(&["cache", "proxy"]), MatchMode::All);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].lines, vec!["an http cache", "a proxy for the rest"]);
    }

    #[test]
    fn test_and_mode_excludes_partial_match() {
        let stars = vec![star(1, Some("an http cache"), "nothing else here")];

        assert!(filter_stars(&stars, &greps(&["cache", "proxy"]), MatchMode::All).is_empty());
        assert_eq!(
            filter_stars(&stars, &greps(&["cache", "proxy"]), MatchMode::Any).len(),
            1
        );
    }

    #[test]
    fn test_record_without_candidates_is_excluded() {
        let stars = vec![star(1, Some("a web framework"), "nothing relevant")];

        assert!(filter_stars(&stars, &greps(&["cache"]), MatchMode::Any).is_empty());
        assert!(filter_stars(&stars, &greps(&["cache"]), MatchMode::All).is_empty());
    }

    #[test]
    fn test_empty_fields_are_safe() {
        let stars = vec![
            star(1, None, ""),
            star(2, Some(""), ""),
            star(3, Some("a cache"), ""),
        ];

        let matches = filter_stars(&stars, &greps(&["cache"]), MatchMode::Any);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].star.id, 3);
    }

    #[test]
    fn test_description_lines_precede_readme_lines() {
        let stars = vec![star(
            1,
            Some("cache line one\nnothing\ncache line two"),
            "readme cache a\nskip me\nreadme cache b",
        )];

        let matches = filter_stars(&stars, &greps(&["cache"]), MatchMode::Any);

        assert_eq!(
            matches[0].lines,
            vec![
                "cache line one",
                "cache line two",
                "readme cache a",
                "readme cache b"
            ]
        );
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let stars = vec![star(1, Some("a Cache layer"), "")];

        assert!(filter_stars(&stars, &greps(&["cache"]), MatchMode::Any).is_empty());
        assert_eq!(filter_stars(&stars, &greps(&["Cache"]), MatchMode::Any).len(), 1);
    }

    #[test]
    fn test_no_keywords_selects_nothing() {
        let stars = vec![star(1, Some("anything at all"), "more text")];

        assert!(filter_stars(&stars, &[], MatchMode::Any).is_empty());
        assert!(filter_stars(&stars, &[], MatchMode::All).is_empty());
    }
}
