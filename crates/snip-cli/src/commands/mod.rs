// crates/snip-cli/src/commands/mod.rs - Command handler modules
//
// One module per subcommand. Each exposes a single `handle` function that
// takes the context plus the parsed arguments and returns anyhow::Result.
// Expected failures print a styled message and exit(1) directly; Err is
// reserved for faults worth a backtrace.

pub mod add;
pub mod delete;
pub mod edit;
pub mod export;
pub mod get;
pub mod import;
pub mod list;
pub mod path;
pub mod run;
pub mod search;
