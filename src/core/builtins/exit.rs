use super::BuiltinOutcome;
use crate::core::session::Session;

/// `exit [code]`. A bad code refuses the exit with status 2 rather than
/// terminating with a wrong one.
pub fn run(session: &mut Session, args: &[String]) -> BuiltinOutcome {
    match args.first() {
        None => BuiltinOutcome::Terminate(None),
        Some(arg) => match parse_exit_code(arg) {
            Some(code) => BuiltinOutcome::Terminate(Some(code)),
            None => {
                session.report_error("exit", &format!("Illegal number: {}", arg));
                BuiltinOutcome::Handled(2)
            }
        },
    }
}

/// Plain non-negative decimal integers only; a sign, stray characters, or
/// overflow all refuse.
fn parse_exit_code(arg: &str) -> Option<i32> {
    if arg.is_empty() || !arg.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    arg.parse::<i32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::History;

    fn session() -> Session {
        Session::new("krill", false, true, History::new(16))
    }

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_bare_exit_uses_last_status() {
        let mut s = session();
        assert_eq!(run(&mut s, &[]), BuiltinOutcome::Terminate(None));
    }

    #[test]
    fn test_numeric_exit_code() {
        let mut s = session();
        assert_eq!(
            run(&mut s, &args(&["42"])),
            BuiltinOutcome::Terminate(Some(42))
        );
    }

    #[test]
    fn test_non_numeric_refused_with_status_2() {
        let mut s = session();
        assert_eq!(run(&mut s, &args(&["abc"])), BuiltinOutcome::Handled(2));
    }

    #[test]
    fn test_negative_refused() {
        let mut s = session();
        assert_eq!(run(&mut s, &args(&["-1"])), BuiltinOutcome::Handled(2));
    }

    #[test]
    fn test_overflow_refused() {
        let mut s = session();
        assert_eq!(
            run(&mut s, &args(&["99999999999999999999"])),
            BuiltinOutcome::Handled(2)
        );
    }

    #[test]
    fn test_zero_is_valid() {
        assert_eq!(parse_exit_code("0"), Some(0));
    }
}
