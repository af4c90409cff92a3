// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Page slicing for bid listings.

/// Page size used when no valid limit is supplied.
pub const DEFAULT_LIMIT: i64 = 10;

/// Offset used when no valid offset is supplied.
pub const DEFAULT_OFFSET: i64 = 0;

/// A `LIMIT`/`OFFSET` window over an ordered listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    limit: i64,
    offset: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

impl Pagination {
    /// Builds a window from already-typed values.
    ///
    /// A limit that is not positive or an offset that is negative falls back
    /// to its default. Invalid pagination is never an error.
    #[must_use]
    pub const fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit: if limit > 0 { limit } else { DEFAULT_LIMIT },
            offset: if offset >= 0 { offset } else { DEFAULT_OFFSET },
        }
    }

    /// Builds a window from raw query-string values.
    ///
    /// Missing or unparseable values fall back to their defaults
    /// independently of each other.
    #[must_use]
    pub fn from_params(limit: Option<&str>, offset: Option<&str>) -> Self {
        let limit: i64 = limit
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(DEFAULT_LIMIT);
        let offset: i64 = offset
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(DEFAULT_OFFSET);
        Self::new(limit, offset)
    }

    #[must_use]
    pub const fn limit(&self) -> i64 {
        self.limit
    }

    #[must_use]
    pub const fn offset(&self) -> i64 {
        self.offset
    }
}
