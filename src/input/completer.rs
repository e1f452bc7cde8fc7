use rustyline::completion::{Completer, Pair};
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::builtins::REGISTRY;
use crate::highlight::SyntaxHighlighter;

/// Tab completion for the interactive reader: builtin and `PATH` command
/// names for the first word, filesystem paths after it.
#[derive(Clone)]
pub struct ShellCompleter {
    commands: BTreeSet<String>,
    aliases: BTreeSet<String>,
    highlighter: SyntaxHighlighter,
}

impl Default for ShellCompleter {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellCompleter {
    pub fn new() -> Self {
        let mut completer = ShellCompleter {
            commands: BTreeSet::new(),
            aliases: BTreeSet::new(),
            highlighter: SyntaxHighlighter::new(),
        };
        completer.refresh_commands();
        completer
    }

    pub fn refresh_commands(&mut self) {
        self.commands.clear();

        for (name, _) in REGISTRY {
            self.commands.insert((*name).to_string());
        }

        if let Some(path_var) = env::var_os("PATH") {
            for dir in env::split_paths(&path_var) {
                if let Ok(entries) = fs::read_dir(dir) {
                    for entry in entries.filter_map(Result::ok) {
                        if let Some(name) = entry.file_name().to_str() {
                            self.commands.insert(name.to_string());
                        }
                    }
                }
            }
        }
    }

    pub fn update_aliases<'a>(&mut self, names: impl Iterator<Item = &'a str>) {
        self.aliases = names.map(String::from).collect();
    }

    fn complete_command(&self, word: &str) -> Vec<Pair> {
        let mut matches = Vec::new();

        for name in self.aliases.iter().chain(self.commands.iter()) {
            if name.starts_with(word) {
                matches.push(Pair {
                    display: name.clone(),
                    replacement: name.clone(),
                });
            }
        }

        matches
    }

    fn complete_path(&self, incomplete: &str) -> Vec<Pair> {
        let (dir_to_search, file_prefix) = split_path_input(incomplete);
        let mut matches = Vec::new();

        if let Ok(entries) = fs::read_dir(&dir_to_search) {
            for entry in entries.filter_map(Result::ok) {
                let Some(name) = entry.file_name().to_str().map(String::from) else {
                    continue;
                };
                if !name.starts_with(&file_prefix) {
                    continue;
                }

                let mut replacement = if dir_to_search == Path::new(".") {
                    name.clone()
                } else {
                    dir_to_search.join(&name).to_string_lossy().into_owned()
                };
                if entry.path().is_dir() {
                    replacement.push('/');
                }

                matches.push(Pair {
                    display: replacement.clone(),
                    replacement,
                });
            }
        }

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        matches
    }
}

/// Directory to scan and the name prefix to match inside it.
fn split_path_input(incomplete: &str) -> (PathBuf, String) {
    if incomplete.is_empty() {
        return (PathBuf::from("."), String::new());
    }
    if incomplete.ends_with('/') {
        return (PathBuf::from(incomplete), String::new());
    }

    let path = Path::new(incomplete);
    let prefix = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_string();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    (dir, prefix)
}

impl Helper for ShellCompleter {}

impl Highlighter for ShellCompleter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Owned(self.highlighter.highlight_command(line))
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(self.highlighter.highlight_prompt(prompt))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;
}

impl Validator for ShellCompleter {}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_up_to_cursor = &line[..pos];

        let mut words: Vec<&str> = line_up_to_cursor.split_whitespace().collect();
        if line_up_to_cursor.ends_with(' ') {
            words.push("");
        }

        match words.len() {
            0 => Ok((0, self.complete_command(""))),
            1 => {
                let word = words[0];
                let start = line_up_to_cursor.rfind(word).unwrap_or(0);
                Ok((start, self.complete_command(word)))
            }
            _ => {
                let last_word = words.last().copied().unwrap_or("");
                let start = if last_word.is_empty() {
                    pos
                } else {
                    line_up_to_cursor.rfind(last_word).unwrap_or(pos)
                };
                Ok((start, self.complete_path(last_word)))
            }
        }
    }
}
