use crate::core::session::Session;

mod alias;
mod cd;
mod env;
mod exit;
mod help;
mod history;

/// Result of running a builtin: either the loop continues with a recorded
/// status, or the handler asks it to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinOutcome {
    Handled(i32),
    /// Stop looping; `None` means "exit with the last recorded status".
    Terminate(Option<i32>),
}

/// Closed set of builtin handlers. The registry order below is the match
/// precedence and never changes at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Exit,
    Env,
    Help,
    History,
    SetEnv,
    UnsetEnv,
    Cd,
    Alias,
}

pub const REGISTRY: &[(&str, Builtin)] = &[
    ("exit", Builtin::Exit),
    ("env", Builtin::Env),
    ("help", Builtin::Help),
    ("history", Builtin::History),
    ("setenv", Builtin::SetEnv),
    ("unsetenv", Builtin::UnsetEnv),
    ("cd", Builtin::Cd),
    ("alias", Builtin::Alias),
];

impl Builtin {
    fn run(self, session: &mut Session, args: &[String]) -> BuiltinOutcome {
        match self {
            Builtin::Exit => exit::run(session, args),
            Builtin::Env => env::list(session, args),
            Builtin::Help => help::run(session, args),
            Builtin::History => history::run(session, args),
            Builtin::SetEnv => env::set(session, args),
            Builtin::UnsetEnv => env::unset(session, args),
            Builtin::Cd => cd::run(session, args),
            Builtin::Alias => alias::run(session, args),
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Builtin::Exit => "exit [CODE]         leave the shell, optionally with CODE",
            Builtin::Env => "env                 list the environment",
            Builtin::Help => "help                show this text",
            Builtin::History => "history             list input lines with their numbers",
            Builtin::SetEnv => "setenv NAME VALUE   set an environment variable",
            Builtin::UnsetEnv => "unsetenv NAME...    remove environment variables",
            Builtin::Cd => "cd [DIR|-]          change directory (default $HOME)",
            Builtin::Alias => "alias [NAME[=VAL]]  list or define aliases",
        }
    }
}

/// Linear scan of the registry, exact match on the command token; the first
/// match wins and counts the input line before its handler runs. `None`
/// falls through to external resolution.
pub fn dispatch(session: &mut Session, argv: &[String]) -> Option<BuiltinOutcome> {
    let name = argv.first()?;
    for (entry, builtin) in REGISTRY {
        if name == entry {
            session.line_count += 1;
            return Some(builtin.run(session, &argv[1..]));
        }
    }
    None
}
