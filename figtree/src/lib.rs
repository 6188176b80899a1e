// Include handlers module directly from handlers.rs
#[path = "handlers.rs"]
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{mask_token, resolve_path};

// Re-export run plumbing from figtree-core
pub use figtree_core::run::{RunOptions, RunSummary, execute_run};
