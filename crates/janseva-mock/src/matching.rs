//! Name comparison for advanced voter search.

use janseva_core::search::{MatchType, NameCriterion};

/// Queries up to this many characters tolerate one edit in fuzzy mode;
/// longer ones tolerate [`FUZZY_MAX_EDITS`].
pub const FUZZY_SHORT_QUERY_CHARS: usize = 5;

/// Edit budget for fuzzy queries longer than [`FUZZY_SHORT_QUERY_CHARS`].
pub const FUZZY_MAX_EDITS: usize = 2;

/// Compare `name` against `criterion`, case-insensitively.
///
/// `Fuzzy` accepts the name when the Levenshtein distance between the query
/// and either the whole name or any single word of it is within the edit
/// budget: 1 for queries of at most [`FUZZY_SHORT_QUERY_CHARS`] characters,
/// [`FUZZY_MAX_EDITS`] otherwise. An empty query matches everything.
pub fn name_matches(name: &str, criterion: &NameCriterion) -> bool {
  let needle = criterion.value.trim().to_lowercase();
  let hay    = name.to_lowercase();

  match criterion.match_type {
    MatchType::Exact => hay == needle,
    MatchType::Partial => hay.contains(&needle),
    MatchType::StartsWith => hay.starts_with(&needle),
    MatchType::EndsWith => hay.ends_with(&needle),
    MatchType::Fuzzy => fuzzy_matches(&hay, &needle),
  }
}

fn fuzzy_matches(hay: &str, needle: &str) -> bool {
  if needle.is_empty() {
    return true;
  }
  let budget = fuzzy_budget(needle);
  std::iter::once(hay)
    .chain(hay.split_whitespace())
    .any(|candidate| strsim::levenshtein(candidate, needle) <= budget)
}

fn fuzzy_budget(needle: &str) -> usize {
  if needle.chars().count() <= FUZZY_SHORT_QUERY_CHARS { 1 } else { FUZZY_MAX_EDITS }
}
