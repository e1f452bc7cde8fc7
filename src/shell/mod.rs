use std::env;
use std::fs::File;
use std::io::{self, IsTerminal, Write};

use crate::core::builtins::{self, BuiltinOutcome};
use crate::core::rc;
use crate::core::session::{Request, Session, Termination};
use crate::error::ShellError;
use crate::flags::Flags;
use crate::input::chain::{self, ChainKind};
use crate::input::{expand, history, History, LineReader, ReadOutcome, ShellCompleter};
use crate::path::PathResolver;
use crate::process::ProcessExecutor;

const HISTORY_FILE: &str = ".krill_history";

/// The read-dispatch-execute engine: owns the session state, the input
/// source, and the two execution paths (builtin registry, resolver plus
/// executor), looping until end-of-input or an exit request.
pub struct Shell {
    session: Session,
    reader: LineReader,
    resolver: PathResolver,
    executor: ProcessExecutor,
    flags: Flags,
    current_dir: String,
}

impl Shell {
    pub fn new(prog_name: String, flags: Flags) -> Result<Self, ShellError> {
        let script = flags.positional().first().cloned();
        let command_mode = flags.get_value("command").is_some();
        let interactive = script.is_none() && !command_mode && io::stdin().is_terminal();

        let history_file = dirs::home_dir()
            .ok_or(ShellError::HomeDirNotFound)?
            .join(HISTORY_FILE);
        let history = History::open(history_file, history::MAX_ENTRIES)?;

        let session = Session::new(prog_name, interactive, flags.is_set("quiet"), history);

        let reader = if interactive {
            LineReader::interactive(ShellCompleter::new())?
        } else if let Some(path) = script {
            LineReader::buffered(Box::new(File::open(path)?))
        } else {
            LineReader::stdin()
        };

        if interactive {
            // readline re-prompts after the aborted read
            ctrlc::set_handler(|| println!())?;
        }

        let current_dir = env::current_dir()?.to_string_lossy().to_string();

        let mut shell = Shell {
            session,
            reader,
            resolver: PathResolver::new(),
            executor: ProcessExecutor::new(),
            flags,
            current_dir,
        };
        shell.load_rc();
        Ok(shell)
    }

    /// Runs to completion and yields the process exit code.
    pub fn run(&mut self) -> Result<i32, ShellError> {
        let termination = if let Some(command) = self.flags.get_value("command").cloned() {
            // single-command mode: one input line, no loop
            self.session.history.push(&command);
            self.run_line(&command).unwrap_or(Termination::EndOfInput)
        } else {
            self.read_loop()
        };

        if let Err(e) = self.session.history.save() {
            self.session.warn(&format!("could not save history: {}", e));
        }
        Ok(self.session.exit_code(termination))
    }

    fn read_loop(&mut self) -> Termination {
        loop {
            let prompt = self.prompt();
            let _ = io::stdout().flush();

            match self.reader.read_line(&prompt) {
                ReadOutcome::Line(line) => {
                    self.session.history.push(&line);
                    if let Some(termination) = self.run_line(&line) {
                        return termination;
                    }
                }
                // aborts only the current read; the loop re-prompts
                ReadOutcome::Interrupted => continue,
                ReadOutcome::EndOfInput => {
                    if self.session.interactive {
                        println!();
                    }
                    return Termination::EndOfInput;
                }
            }
        }
    }

    fn prompt(&self) -> String {
        format!("{} > ", self.current_dir)
    }

    /// One logical input unit: chain split, then one cycle per surviving
    /// segment. `Some` carries an exit request up to the loop.
    pub fn run_line(&mut self, line: &str) -> Option<Termination> {
        self.session.line_pending = true;

        let segments = chain::split(line);
        let mut gate = ChainKind::Normal;
        for segment in segments {
            let skip = match gate {
                ChainKind::And => self.session.status != 0,
                ChainKind::Or => self.session.status == 0,
                _ => false,
            };
            gate = segment.joiner;
            if skip {
                continue;
            }
            if let Some(termination) = self.run_segment(segment.text, segment.joiner) {
                return Some(termination);
            }
        }
        None
    }

    /// One cycle: expand, tokenize, try the builtin registry, else resolve
    /// and execute. The request owns the cycle state and drops here.
    fn run_segment(&mut self, text: &str, joiner: ChainKind) -> Option<Termination> {
        let expanded = expand::expand(&self.session, text.trim());
        let argv: Vec<String> = expanded.split_whitespace().map(String::from).collect();
        if argv.is_empty() {
            return None;
        }
        let mut request = Request::new(expanded, argv, joiner);

        if let Some(outcome) = builtins::dispatch(&mut self.session, &request.argv) {
            match outcome {
                BuiltinOutcome::Handled(status) => self.session.status = status,
                BuiltinOutcome::Terminate(code) => {
                    return Some(Termination::Requested(code));
                }
            }
            self.refresh_after_builtin();
            return None;
        }

        self.run_external(&mut request);
        None
    }

    fn run_external(&mut self, request: &mut Request) {
        if self.session.line_pending {
            self.session.line_count += 1;
            self.session.line_pending = false;
        }

        let Some(command) = request.command().map(String::from) else {
            return;
        };

        request.path = self.resolver.resolve(
            &command,
            self.session.env.get("PATH"),
            self.session.interactive,
        );
        let Some(path) = request.path.clone() else {
            self.session.status = 127;
            self.session.report_error(&command, "not found");
            return;
        };

        match self.executor.execute(&path, &request.argv, &self.session.env) {
            Ok(status) => {
                self.session.status = status;
                if status == 126 {
                    self.session.report_error(&command, "Permission denied");
                }
            }
            Err(e) => {
                // process creation failed: report, status unchanged
                self.session.report_error(&command, &e.to_string());
            }
        }
    }

    /// Builtins can move the working directory or change the alias table;
    /// the prompt and the completer both need to hear about it.
    fn refresh_after_builtin(&mut self) {
        if let Ok(dir) = env::current_dir() {
            self.current_dir = dir.to_string_lossy().to_string();
        }
        self.reader.sync_aliases(self.session.aliases.names());
    }

    fn load_rc(&mut self) {
        let Some(path) = rc::rc_path() else {
            return;
        };
        match rc::load(&path) {
            Ok(lines) => {
                // exit requests from rc lines are ignored
                for line in lines {
                    let _ = self.run_line(&line);
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                self.session
                    .warn(&format!("{}: {}", path.display(), e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_shell() -> Option<Shell> {
        dirs::home_dir()?;
        // non-interactive: stdin in the test harness is not a terminal
        Shell::new("krill".to_string(), Flags::new()).ok()
    }

    #[test]
    fn test_exit_request_carries_its_code() {
        let Some(mut shell) = test_shell() else {
            return;
        };
        assert_eq!(
            shell.run_line("exit 42"),
            Some(Termination::Requested(Some(42)))
        );
    }

    #[test]
    fn test_bad_exit_argument_keeps_looping() {
        let Some(mut shell) = test_shell() else {
            return;
        };
        assert_eq!(shell.run_line("exit abc"), None);
        assert_eq!(shell.session.status, 2);
    }

    #[test]
    fn test_unknown_command_records_127() {
        let Some(mut shell) = test_shell() else {
            return;
        };
        assert_eq!(shell.run_line("doesnotexist123"), None);
        assert_eq!(shell.session.status, 127);
    }

    #[test]
    fn test_blank_line_changes_nothing() {
        let Some(mut shell) = test_shell() else {
            return;
        };
        shell.session.status = 5;
        assert_eq!(shell.run_line("   "), None);
        assert_eq!(shell.session.status, 5);
    }

    #[test]
    fn test_and_gate_skips_after_failure() {
        let Some(mut shell) = test_shell() else {
            return;
        };
        // the exit after && must not run: the left side failed with 127
        assert_eq!(shell.run_line("doesnotexist123 && exit 9"), None);
        assert_eq!(shell.session.status, 127);
    }

    #[test]
    fn test_or_gate_runs_after_failure() {
        let Some(mut shell) = test_shell() else {
            return;
        };
        assert_eq!(
            shell.run_line("doesnotexist123 || exit 9"),
            Some(Termination::Requested(Some(9)))
        );
    }

    #[test]
    fn test_sequence_runs_both() {
        let Some(mut shell) = test_shell() else {
            return;
        };
        assert_eq!(
            shell.run_line("doesnotexist123 ; exit 4"),
            Some(Termination::Requested(Some(4)))
        );
    }

    #[test]
    fn test_builtins_never_reach_the_resolver() {
        let Some(mut shell) = test_shell() else {
            return;
        };
        // no PATH at all: a builtin must still dispatch
        shell.session.env.unset("PATH");
        assert_eq!(shell.run_line("setenv KRILL_LOOP_PROBE 1"), None);
        assert_eq!(shell.session.status, 0);
        assert_eq!(shell.session.env.get("KRILL_LOOP_PROBE"), Some("1"));
    }

    #[test]
    fn test_external_command_resolves_and_runs() {
        let Some(mut shell) = test_shell() else {
            return;
        };
        let path_value = shell.session.env.get("PATH").map(String::from);
        if shell
            .resolver
            .resolve("echo", path_value.as_deref(), false)
            .is_none()
        {
            return;
        }
        assert_eq!(shell.run_line("echo hi"), None);
        assert_eq!(shell.session.status, 0);
    }

    #[test]
    fn test_direct_path_command_runs() {
        let Some(mut shell) = test_shell() else {
            return;
        };
        if !shell.resolver.is_executable(std::path::Path::new("/bin/sh")) {
            return;
        }
        assert_eq!(shell.run_line("/bin/sh -c true"), None);
        assert_eq!(shell.session.status, 0);
    }

    #[test]
    fn test_line_counter_advances_once_per_line() {
        let Some(mut shell) = test_shell() else {
            return;
        };
        let before = shell.session.line_count;
        shell.run_line("doesnotexist123 ; alsonotreal456");
        assert_eq!(shell.session.line_count, before + 1);
    }
}
