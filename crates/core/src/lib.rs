// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod error;
mod state;
mod timestamp;

#[cfg(test)]
mod tests;

pub use apply::{apply, apply_decision, new_tender};
pub use command::TenderCommand;
pub use error::CoreError;
pub use state::{DecisionOutcome, NewTender, TenderTransition};
pub use timestamp::current_timestamp;
