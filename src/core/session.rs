use std::path::PathBuf;

use crate::core::alias::AliasStore;
use crate::core::env::EnvTable;
use crate::highlight::SyntaxHighlighter;
use crate::input::chain::ChainKind;
use crate::input::History;

/// Interpreter-lifetime state threaded through every dispatch stage. The
/// environment, alias, and history tables live here for the whole session;
/// everything cycle-scoped lives in [`Request`].
pub struct Session {
    pub prog_name: String,
    pub interactive: bool,
    pub quiet: bool,
    /// Input lines processed so far; diagnostics quote this.
    pub line_count: u32,
    /// Set when a fresh physical line arrives, consumed by the first
    /// external command dispatched from it.
    pub line_pending: bool,
    /// Exit status of the most recently completed command.
    pub status: i32,
    pub env: EnvTable,
    pub aliases: AliasStore,
    pub history: History,
    highlighter: SyntaxHighlighter,
}

/// How the dispatch loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    EndOfInput,
    /// An exit builtin ran; `None` means "use the last recorded status".
    Requested(Option<i32>),
}

/// Cycle-scoped state for one sub-command. Owns the argument vector and the
/// resolved path; dropping the request at the end of the cycle releases both,
/// so exactly one argument vector is ever live.
pub struct Request {
    pub line: String,
    pub argv: Vec<String>,
    pub path: Option<PathBuf>,
    /// Operator joining this sub-command to the one after it.
    pub joiner: ChainKind,
}

impl Request {
    pub fn new(line: String, argv: Vec<String>, joiner: ChainKind) -> Self {
        Self {
            line,
            argv,
            path: None,
            joiner,
        }
    }

    pub fn argc(&self) -> usize {
        self.argv.len()
    }

    pub fn command(&self) -> Option<&str> {
        self.argv.first().map(String::as_str)
    }
}

impl Session {
    pub fn new(
        prog_name: impl Into<String>,
        interactive: bool,
        quiet: bool,
        history: History,
    ) -> Self {
        Self {
            prog_name: prog_name.into(),
            interactive,
            quiet,
            line_count: 0,
            line_pending: false,
            status: 0,
            env: EnvTable::from_process(),
            aliases: AliasStore::new(),
            history,
            highlighter: SyntaxHighlighter::new(),
        }
    }

    /// One diagnostic line per error, attributable to the offending command.
    pub fn report_error(&self, command: &str, reason: &str) {
        let line = format!(
            "{}: {}: {}: {}",
            self.prog_name, self.line_count, command, reason
        );
        if self.interactive {
            eprintln!("{}", self.highlighter.highlight_error(&line));
        } else {
            eprintln!("{}", line);
        }
    }

    pub fn warn(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}: warning: {}", self.prog_name, message);
        }
    }

    /// Final process exit code once the loop has ended: an explicit exit
    /// request wins, otherwise the last recorded status (which also covers
    /// the non-interactive non-zero case) and defaults to zero.
    pub fn exit_code(&self, termination: Termination) -> i32 {
        match termination {
            Termination::Requested(Some(code)) => code,
            Termination::Requested(None) | Termination::EndOfInput => self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new("krill", false, true, History::new(16))
    }

    #[test]
    fn test_exit_code_requested_wins() {
        let mut s = session();
        s.status = 5;
        assert_eq!(s.exit_code(Termination::Requested(Some(42))), 42);
    }

    #[test]
    fn test_exit_code_bare_exit_uses_last_status() {
        let mut s = session();
        s.status = 3;
        assert_eq!(s.exit_code(Termination::Requested(None)), 3);
    }

    #[test]
    fn test_exit_code_end_of_input_propagates_status() {
        let mut s = session();
        s.status = 5;
        assert_eq!(s.exit_code(Termination::EndOfInput), 5);
        s.status = 0;
        assert_eq!(s.exit_code(Termination::EndOfInput), 0);
    }

    #[test]
    fn test_request_owns_cycle_state() {
        let request = Request::new(
            "echo hi".to_string(),
            vec!["echo".to_string(), "hi".to_string()],
            ChainKind::Normal,
        );
        assert_eq!(request.argc(), 2);
        assert_eq!(request.command(), Some("echo"));
        assert!(request.path.is_none());
    }
}
