//! Connection-argument resolution
//!
//! Translates relay connection arguments into the `{limit, offset}`
//! window the catalog expects.

use crate::error::{ApiError, ApiResult};

use super::cursor;

/// Page size when neither `first` nor `last` is supplied
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Hard cap on requested page sizes
pub const MAX_PAGE_SIZE: usize = 100;

/// Relay connection arguments as received from the caller
///
/// Forward (`first`/`after`) and backward (`last`/`before`) pagination
/// are mutually exclusive in intended use. When both are supplied the
/// forward interpretation wins; this is a documented policy choice,
/// not a relay guarantee.
#[derive(Debug, Clone, Default)]
pub struct ConnectionArgs {
    pub first: Option<i32>,
    pub after: Option<String>,
    pub last: Option<i32>,
    pub before: Option<String>,
}

/// Offset window derived from connection arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub limit: usize,
    pub offset: usize,
}

impl ConnectionArgs {
    pub fn new(
        first: Option<i32>,
        after: Option<String>,
        last: Option<i32>,
        before: Option<String>,
    ) -> Self {
        Self {
            first,
            after,
            last,
            before,
        }
    }

    /// Resolve the offset window for this request
    ///
    /// - forward: `offset` is the index immediately after `after`
    ///   (0 when absent), `limit` is `first` or the default page size
    /// - backward: the window ends just before `before`'s index, with
    ///   `limit = last`; without `before` the window starts at 0
    ///
    /// # Errors
    /// - `ApiError::InvalidPagination` for negative `first`/`last`
    /// - `ApiError::InvalidCursor` for malformed cursors
    pub fn page_params(&self) -> ApiResult<PageParams> {
        if let Some(first) = self.first {
            if first < 0 {
                return Err(ApiError::InvalidPagination(format!(
                    "first must be non-negative, got {first}"
                )));
            }
        }
        if let Some(last) = self.last {
            if last < 0 {
                return Err(ApiError::InvalidPagination(format!(
                    "last must be non-negative, got {last}"
                )));
            }
        }

        let backward = self.first.is_none()
            && self.after.is_none()
            && (self.last.is_some() || self.before.is_some());

        if backward {
            let last = self
                .last
                .map(|l| l as usize)
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .min(MAX_PAGE_SIZE);
            return match &self.before {
                Some(before) => {
                    let end = cursor::decode(before)?;
                    Ok(PageParams {
                        limit: last.min(end),
                        offset: end.saturating_sub(last),
                    })
                }
                None => Ok(PageParams {
                    limit: last,
                    offset: 0,
                }),
            };
        }

        let offset = match &self.after {
            Some(after) => cursor::decode(after)? + 1,
            None => 0,
        };
        let limit = self
            .first
            .map(|f| f as usize)
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .min(MAX_PAGE_SIZE);

        Ok(PageParams { limit, offset })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::relay::cursor::encode;
    use assert_matches::assert_matches;

    #[test]
    fn test_defaults_to_first_page() {
        let params = ConnectionArgs::default().page_params().unwrap();
        assert_eq!(
            params,
            PageParams {
                limit: DEFAULT_PAGE_SIZE,
                offset: 0
            }
        );
    }

    #[test]
    fn test_after_cursor_sets_offset_past_it() {
        let args = ConnectionArgs::new(None, Some(encode(5)), None, None);
        let params = args.page_params().unwrap();
        assert_eq!(params.offset, 6);
        assert_eq!(params.limit, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_first_sets_limit() {
        let args = ConnectionArgs::new(Some(25), None, None, None);
        assert_eq!(args.page_params().unwrap().limit, 25);
    }

    #[test]
    fn test_limit_is_capped() {
        let args = ConnectionArgs::new(Some(10_000), None, None, None);
        assert_eq!(args.page_params().unwrap().limit, MAX_PAGE_SIZE);
    }

    #[test]
    fn test_backward_window_ends_before_cursor() {
        // before index 10, last 4: window is [6, 10)
        let args = ConnectionArgs::new(None, None, Some(4), Some(encode(10)));
        let params = args.page_params().unwrap();
        assert_eq!(params, PageParams { limit: 4, offset: 6 });
    }

    #[test]
    fn test_backward_window_clamps_at_start() {
        // before index 2, last 5: window is [0, 2)
        let args = ConnectionArgs::new(None, None, Some(5), Some(encode(2)));
        let params = args.page_params().unwrap();
        assert_eq!(params, PageParams { limit: 2, offset: 0 });
    }

    #[test]
    fn test_last_without_before_starts_at_zero() {
        let args = ConnectionArgs::new(None, None, Some(3), None);
        let params = args.page_params().unwrap();
        assert_eq!(params, PageParams { limit: 3, offset: 0 });
    }

    #[test]
    fn test_forward_wins_when_both_directions_supplied() {
        let args = ConnectionArgs::new(Some(2), Some(encode(4)), Some(9), Some(encode(30)));
        let params = args.page_params().unwrap();
        assert_eq!(params, PageParams { limit: 2, offset: 5 });
    }

    #[test]
    fn test_negative_first_is_rejected() {
        let args = ConnectionArgs::new(Some(-1), None, None, None);
        assert_matches!(args.page_params(), Err(ApiError::InvalidPagination(_)));
    }

    #[test]
    fn test_negative_last_is_rejected() {
        let args = ConnectionArgs::new(None, None, Some(-3), None);
        assert_matches!(args.page_params(), Err(ApiError::InvalidPagination(_)));
    }

    #[test]
    fn test_malformed_after_cursor_is_rejected() {
        let args = ConnectionArgs::new(None, Some("garbage".into()), None, None);
        assert_matches!(args.page_params(), Err(ApiError::InvalidCursor(_)));
    }
}
