use super::BuiltinOutcome;
use crate::core::session::Session;

/// `alias` lists everything, `alias name=value` defines (the value may span
/// the rest of the arguments, quotes stripped), `alias name` prints one.
pub fn run(session: &mut Session, args: &[String]) -> BuiltinOutcome {
    if args.is_empty() {
        for (name, expansion) in session.aliases.iter() {
            println!("{}='{}'", name, expansion);
        }
        return BuiltinOutcome::Handled(0);
    }

    let joined = args.join(" ");
    if let Some((name, expansion)) = joined.split_once('=') {
        let name = name.trim();
        if name.is_empty() {
            session.report_error("alias", "Usage: alias name='command'");
            return BuiltinOutcome::Handled(1);
        }
        let expansion = expansion.trim().trim_matches(|c| c == '\'' || c == '"');
        session.aliases.define(name, expansion);
        return BuiltinOutcome::Handled(0);
    }

    let mut status = 0;
    for name in args {
        match session.aliases.get(name) {
            Some(expansion) => println!("{}='{}'", name, expansion),
            None => {
                session.report_error("alias", &format!("{} not found", name));
                status = 1;
            }
        }
    }
    BuiltinOutcome::Handled(status)
}
