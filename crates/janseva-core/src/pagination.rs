//! List envelopes and the pagination contract shared by the mock router and
//! the real API.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PER_PAGE: usize = 20;

/// Position of a page within a result set. `page` is 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
  pub page:        usize,
  pub per_page:    usize,
  pub total:       usize,
  pub total_pages: usize,
}

/// `{ data: T[], meta?: {...} }`: the shape of every list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
  pub data: Vec<T>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub meta: Option<PaginationMeta>,
}

impl<T> ListResponse<T> {
  /// A list with no pagination block (hierarchy endpoints).
  pub fn unpaged(data: Vec<T>) -> Self { Self { data, meta: None } }
}

/// Slice `items` into the requested page.
///
/// `page` and `per_page` default to [`DEFAULT_PAGE`] / [`DEFAULT_PER_PAGE`]
/// and are clamped to at least 1. A page past the end yields an empty `data`
/// with a valid `meta`.
pub fn paginate<T: Clone>(
  items: &[T],
  page: Option<usize>,
  per_page: Option<usize>,
) -> ListResponse<T> {
  let page     = page.unwrap_or(DEFAULT_PAGE).max(1);
  let per_page = per_page.unwrap_or(DEFAULT_PER_PAGE).max(1);
  let total    = items.len();

  let start = (page - 1).saturating_mul(per_page).min(total);
  let end   = start.saturating_add(per_page).min(total);

  ListResponse {
    data: items[start..end].to_vec(),
    meta: Some(PaginationMeta {
      page,
      per_page,
      total,
      total_pages: total.div_ceil(per_page),
    }),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn pages_reassemble_the_input_exactly() {
    for n in 0..=25usize {
      let items: Vec<usize> = (0..n).collect();
      for per_page in 1..=7usize {
        let first = paginate(&items, Some(1), Some(per_page));
        let total_pages = first.meta.unwrap().total_pages;
        assert_eq!(total_pages, n.div_ceil(per_page), "n={n} per_page={per_page}");

        let mut seen = Vec::with_capacity(n);
        for page in 1..=total_pages {
          let chunk = paginate(&items, Some(page), Some(per_page));
          assert!(!chunk.data.is_empty());
          seen.extend(chunk.data);
        }
        assert_eq!(seen, items, "n={n} per_page={per_page}");
      }
    }
  }

  #[test]
  fn past_last_page_is_empty_with_meta() {
    let items = vec!['a', 'b', 'c'];
    let resp = paginate(&items, Some(5), Some(2));
    assert!(resp.data.is_empty());
    assert_eq!(
      resp.meta,
      Some(PaginationMeta { page: 5, per_page: 2, total: 3, total_pages: 2 })
    );
  }

  #[test]
  fn empty_input_has_zero_pages() {
    let resp = paginate::<u8>(&[], None, None);
    assert!(resp.data.is_empty());
    let meta = resp.meta.unwrap();
    assert_eq!(meta.total, 0);
    assert_eq!(meta.total_pages, 0);
    assert_eq!(meta.page, 1);
    assert_eq!(meta.per_page, DEFAULT_PER_PAGE);
  }

  #[test]
  fn zero_page_and_size_are_clamped() {
    let items = [1, 2, 3];
    let resp = paginate(&items, Some(0), Some(0));
    assert_eq!(resp.data, vec![1]);
    let meta = resp.meta.unwrap();
    assert_eq!((meta.page, meta.per_page, meta.total_pages), (1, 1, 3));
  }

  #[test]
  fn meta_is_omitted_from_unpaged_json() {
    let json = serde_json::to_value(ListResponse::unpaged(vec![1])).unwrap();
    assert_eq!(json, serde_json::json!({ "data": [1] }));

    let back: ListResponse<u8> = serde_json::from_value(json).unwrap();
    assert_eq!(back.meta, None);
  }
}
