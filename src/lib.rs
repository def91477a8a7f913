//! Rules engine for 8x8 draughts (checkers): board representation, promotion,
//! win detection and move generation with multi-jump capture chains.
//!
//! [`checkers`] is the core. [`Engine`] drives a game over a line-oriented
//! text protocol and is responsible for everything the core leaves out: whose
//! turn it is and which of the generated moves the player picks.

pub mod checkers;

mod engine;
pub use engine::Engine;
use shadow_rs::shadow;

shadow!(build);

/// Returns the full engine version that can be used to identify how it was
/// built in the first place.
fn engine_version() -> String {
    format!(
        "{} (commit {}, branch {})",
        build::PKG_VERSION,
        build::SHORT_COMMIT,
        build::BRANCH
    )
}
