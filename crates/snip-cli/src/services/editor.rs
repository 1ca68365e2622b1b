// crates/snip-cli/src/services/editor.rs - Editor integration

use std::env;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

use tracing::debug;

/// Launches the user's editor on snippet files.
///
/// Selection order: `SNIP_EDITOR`, then `EDITOR`, then `VISUAL`, then
/// `vi`. There is no PATH probing; a missing binary surfaces as a
/// NotFound launch error for the caller to turn into a friendly message.
pub struct EditorService;

impl EditorService {
    /// Resolve the editor command from the environment.
    pub fn editor_command() -> String {
        env::var("SNIP_EDITOR")
            .or_else(|_| env::var("EDITOR"))
            .or_else(|_| env::var("VISUAL"))
            .unwrap_or_else(|_| "vi".to_string())
    }

    /// Open the file and block until the editor exits.
    pub fn open_file(editor: &str, path: &Path) -> io::Result<ExitStatus> {
        debug!(editor, path = %path.display(), "launching editor");
        Command::new(editor).arg(path).status()
    }
}
