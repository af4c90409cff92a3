// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations.
//!
//! - `tenders`: tender inserts, versioned transitions and status writes
//! - `bids`: bid inserts
//! - `provisioning`: employees, organizations and responsibility links
//!
//! All mutations use Diesel DSL and work on both backends.

pub mod bids;
pub mod provisioning;
pub mod tenders;
