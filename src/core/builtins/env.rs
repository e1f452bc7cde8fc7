use super::BuiltinOutcome;
use crate::core::session::Session;

/// `env` — dump the session environment table, one `KEY=VALUE` per line.
pub fn list(session: &mut Session, _args: &[String]) -> BuiltinOutcome {
    for (key, value) in session.env.iter() {
        println!("{}={}", key, value);
    }
    BuiltinOutcome::Handled(0)
}

/// `setenv NAME VALUE` — mutates the session table; every child spawned
/// afterwards sees the new value.
pub fn set(session: &mut Session, args: &[String]) -> BuiltinOutcome {
    if args.len() != 2 {
        session.report_error("setenv", "Incorrect number of arguments");
        return BuiltinOutcome::Handled(1);
    }
    match session.env.set(&args[0], &args[1]) {
        Ok(()) => BuiltinOutcome::Handled(0),
        Err(e) => {
            session.report_error("setenv", &e.to_string());
            BuiltinOutcome::Handled(1)
        }
    }
}

/// `unsetenv NAME...` — removing an absent variable is not an error.
pub fn unset(session: &mut Session, args: &[String]) -> BuiltinOutcome {
    if args.is_empty() {
        session.report_error("unsetenv", "Too few arguments");
        return BuiltinOutcome::Handled(1);
    }
    for name in args {
        session.env.unset(name);
    }
    BuiltinOutcome::Handled(0)
}
