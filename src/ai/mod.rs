//! The automated opponent: a one-ply win / block / random procedure and the
//! player that runs it.

mod automated;
pub mod decision;

pub use automated::AutomatedPlayer;
pub use decision::{decide, Decision};
