//! Built-in game definitions.
//!
//! Each game is an independent `GameUtility`:
//! - `splendor` (174430)
//! - `qwirkle` (25669)
//! - `odin` (406854), lowest score wins
//! - `wingspan` (266192)

pub mod odin;
pub mod qwirkle;
pub mod splendor;
pub mod wingspan;

use crate::rules::GameUtility;

/// Every built-in game, in a fixed order.
#[must_use]
pub fn builtin() -> Vec<GameUtility> {
    vec![
        splendor::utility(),
        qwirkle::utility(),
        odin::utility(),
        wingspan::utility(),
    ]
}
