use super::BuiltinOutcome;
use crate::core::session::Session;

/// `history` — oldest first, numbered from zero like the stored file.
pub fn run(session: &mut Session, _args: &[String]) -> BuiltinOutcome {
    for (index, entry) in session.history.iter().enumerate() {
        println!("{:>5}  {}", index, entry);
    }
    BuiltinOutcome::Handled(0)
}
