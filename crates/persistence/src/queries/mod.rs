// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! - `identity`: username to employee id resolution
//! - `authorization`: organization responsibility and creator checks
//! - `tenders`: tender and snapshot reads
//! - `bids`: bid reads and paged listings
//!
//! Every function exists as `_sqlite` and `_mysql` variants generated by
//! `backend_fn!`; the `Persistence` adapter picks one per connection.

pub mod authorization;
pub mod bids;
pub mod identity;
pub mod tenders;
