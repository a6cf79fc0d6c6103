//! Command implementations for vmx-cli

pub mod edit;
pub mod print;

pub use edit::{run_add, run_remove, run_set};
pub use print::{run_print, run_query};
