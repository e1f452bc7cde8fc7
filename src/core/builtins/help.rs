use super::{BuiltinOutcome, REGISTRY};
use crate::core::session::Session;

pub fn run(_session: &mut Session, _args: &[String]) -> BuiltinOutcome {
    println!("krill, a small command interpreter.");
    println!("Type a command name with arguments, then enter.");
    println!("\nBuiltin commands:");
    for (_, builtin) in REGISTRY {
        println!("  {}", builtin.summary());
    }
    BuiltinOutcome::Handled(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::History;

    #[test]
    fn test_help_succeeds() {
        let mut s = Session::new("krill", false, true, History::new(16));
        assert_eq!(run(&mut s, &[]), BuiltinOutcome::Handled(0));
    }
}
