// crates/snip-cli/src/services/mod.rs - External tool integration

pub mod editor;
pub mod runner;

pub use editor::EditorService;
pub use runner::RunnerService;
