//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under short names so the binary, tests
//! and benches can write `blockfall::core::GameState`.

pub mod cli;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_store as store;
pub use blockfall_term as term;
pub use blockfall_types as types;
