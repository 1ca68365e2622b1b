// crates/snip-cli/src/stdin.rs - Stdin handling for snippet bodies

use std::io::{self, IsTerminal, Read};

use anyhow::Result;

/// True when stdin is an interactive terminal rather than a pipe or file.
pub fn is_interactive() -> bool {
    io::stdin().is_terminal()
}

/// Read a snippet body from stdin until EOF.
///
/// Both interactive entry (Ctrl+D ends the read) and piped input land
/// here. The body comes back exactly as typed; deciding whether an empty
/// body is an error is the caller's job.
pub fn read_body() -> Result<String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}
