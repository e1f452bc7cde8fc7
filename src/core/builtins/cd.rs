use std::env;

use super::BuiltinOutcome;
use crate::core::session::Session;
use crate::path::PathExpander;

/// `cd [dir|-]`. Defaults to `$HOME`, `-` goes back to `$OLDPWD` (printed).
/// On success `PWD`/`OLDPWD` in the session table follow the move.
pub fn run(session: &mut Session, args: &[String]) -> BuiltinOutcome {
    let target = match args.first().map(String::as_str) {
        None => match session.env.get("HOME").or_else(|| session.env.get("PWD")) {
            Some(dir) => dir.to_string(),
            None => return BuiltinOutcome::Handled(0),
        },
        Some("-") => match session.env.get("OLDPWD") {
            Some(dir) => {
                let dir = dir.to_string();
                println!("{}", dir);
                dir
            }
            None => {
                session.report_error("cd", "OLDPWD not set");
                return BuiltinOutcome::Handled(1);
            }
        },
        Some(dir) => dir.to_string(),
    };

    let expanded = match PathExpander::new().expand(&target) {
        Ok(path) => path,
        Err(e) => {
            session.report_error("cd", &e.to_string());
            return BuiltinOutcome::Handled(1);
        }
    };

    let previous = env::current_dir().ok();
    if env::set_current_dir(&expanded).is_err() {
        session.report_error("cd", &format!("can't cd to {}", target));
        return BuiltinOutcome::Handled(1);
    }

    if let Some(previous) = previous {
        let _ = session
            .env
            .set("OLDPWD", &previous.to_string_lossy());
    }
    if let Ok(now) = env::current_dir() {
        let _ = session.env.set("PWD", &now.to_string_lossy());
    }
    BuiltinOutcome::Handled(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::History;

    fn session() -> Session {
        Session::new("krill", false, true, History::new(16))
    }

    // One test: cd mutates the process working directory, and cargo runs
    // tests on threads.
    #[test]
    fn test_cd_sequence() {
        let mut s = session();
        let start = env::current_dir().unwrap();
        let temp_dir = env::temp_dir().canonicalize().unwrap();

        let target = temp_dir.to_string_lossy().to_string();
        assert_eq!(run(&mut s, &[target]), BuiltinOutcome::Handled(0));
        assert_eq!(env::current_dir().unwrap(), temp_dir);
        assert_eq!(s.env.get("PWD"), Some(&*temp_dir.to_string_lossy()));
        assert_eq!(s.env.get("OLDPWD"), Some(&*start.to_string_lossy()));

        // invalid target leaves the directory alone
        assert_eq!(
            run(&mut s, &["/path/that/does/not/exist".to_string()]),
            BuiltinOutcome::Handled(1)
        );
        assert_eq!(env::current_dir().unwrap(), temp_dir);

        // `cd -` returns to where we started
        assert_eq!(run(&mut s, &["-".to_string()]), BuiltinOutcome::Handled(0));
        assert_eq!(env::current_dir().unwrap(), start);
    }
}
