//! Rating engine and matchup assembly.
//!
//! `rating` holds the pure rating/prediction functions; `matchup` wraps
//! them with dataset lookup and the guards the UI relies on.

pub mod rating;
pub mod matchup;
