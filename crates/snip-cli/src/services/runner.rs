// crates/snip-cli/src/services/runner.rs - Snippet execution
//
// Maps languages to interpreters. Interpreters here all take program text
// inline (`-c` / `-e`), which covers the argument-less case without any
// temp files; when the user passes arguments the code goes to a suffixed
// temp file instead so argv reaches the script untouched.

use std::io::Write;
use std::process::{Command, ExitStatus};

use anyhow::{Context as AnyhowContext, Result};
use snip_core::extension_for;
use tracing::debug;

/// Language (lowercased), interpreter binary, inline-code flag.
const RUNNERS: &[(&str, &str, &str)] = &[
    ("python", "python3", "-c"),
    ("bash", "bash", "-c"),
    ("shell", "sh", "-c"),
    ("sh", "sh", "-c"),
    ("zsh", "zsh", "-c"),
    ("node", "node", "-e"),
    ("javascript", "node", "-e"),
    ("js", "node", "-e"),
    ("ruby", "ruby", "-e"),
    ("perl", "perl", "-e"),
];

/// A resolved interpreter invocation for one language.
pub struct RunnerService {
    language: &'static str,
    interpreter: &'static str,
    flag: &'static str,
}

impl RunnerService {
    /// Look up the runner for a language. The caller lowercases first;
    /// `None` means the language cannot be executed directly.
    pub fn for_language(language: &str) -> Option<Self> {
        RUNNERS
            .iter()
            .find(|(lang, _, _)| *lang == language)
            .map(|&(language, interpreter, flag)| Self {
                language,
                interpreter,
                flag,
            })
    }

    /// Run the code and hand back the child's exit status.
    ///
    /// Stdio is inherited, so the snippet talks to the user's terminal
    /// directly. The temp file used for the argument-passing form lives
    /// until the child exits and is removed on drop.
    pub fn run(&self, code: &str, args: &[String]) -> Result<ExitStatus> {
        if args.is_empty() {
            debug!(interpreter = self.interpreter, "running snippet inline");
            return Command::new(self.interpreter)
                .arg(self.flag)
                .arg(code)
                .status()
                .with_context(|| format!("Failed to launch '{}'", self.interpreter));
        }

        let mut script = tempfile::Builder::new()
            .prefix("snip-run-")
            .suffix(extension_for(self.language))
            .tempfile()
            .context("Failed to create temp file for snippet")?;
        script
            .write_all(code.as_bytes())
            .context("Failed to write temp file for snippet")?;

        debug!(
            interpreter = self.interpreter,
            script = %script.path().display(),
            "running snippet from temp file"
        );
        Command::new(self.interpreter)
            .arg(script.path())
            .args(args)
            .status()
            .with_context(|| format!("Failed to launch '{}'", self.interpreter))
    }
}
