use crate::core::session::Session;

/// Pre-tokenization expansion for one sub-command: a single alias pass on
/// the first word, then variable substitution.
pub fn expand(session: &Session, text: &str) -> String {
    let aliased = session.aliases.expand_first_word(text);
    expand_vars(session, &aliased)
}

/// `$?` is the last recorded status, `$$` the interpreter pid, `$NAME` the
/// session environment value (empty when unset). A `$` followed by nothing
/// expandable stays literal.
fn expand_vars(session: &Session, input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            result.push(c);
            continue;
        }
        match chars.peek() {
            Some('?') => {
                chars.next();
                result.push_str(&session.status.to_string());
            }
            Some('$') => {
                chars.next();
                result.push_str(&std::process::id().to_string());
            }
            Some(&next) if next.is_alphanumeric() || next == '_' => {
                let mut name = String::new();
                while let Some(&next) = chars.peek() {
                    if next.is_alphanumeric() || next == '_' {
                        name.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }
                if let Some(value) = session.env.get(&name) {
                    result.push_str(value);
                }
            }
            _ => result.push('$'),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::History;

    fn session() -> Session {
        Session::new("krill", false, true, History::new(16))
    }

    #[test]
    fn test_status_expansion() {
        let mut s = session();
        s.status = 127;
        assert_eq!(expand(&s, "echo $?"), "echo 127");
    }

    #[test]
    fn test_pid_expansion() {
        let s = session();
        assert_eq!(expand(&s, "$$"), std::process::id().to_string());
    }

    #[test]
    fn test_env_var_expansion() {
        let mut s = session();
        s.env.set("KRILL_EXPAND_PROBE", "hello").unwrap();
        assert_eq!(expand(&s, "echo $KRILL_EXPAND_PROBE!"), "echo hello!");
    }

    #[test]
    fn test_unknown_var_expands_to_nothing() {
        let s = session();
        assert_eq!(expand(&s, "echo $KRILL_NEVER_SET_VAR"), "echo ");
    }

    #[test]
    fn test_trailing_dollar_is_literal() {
        let s = session();
        assert_eq!(expand(&s, "price $"), "price $");
    }

    #[test]
    fn test_alias_then_vars() {
        let mut s = session();
        s.status = 3;
        s.aliases.define("st", "echo status $?");
        assert_eq!(expand(&s, "st"), "echo status 3");
    }

    #[test]
    fn test_dollar_value_is_not_rescanned() {
        let mut s = session();
        s.env.set("KRILL_DOLLAR_PROBE", "$HOME").unwrap();
        assert_eq!(expand(&s, "$KRILL_DOLLAR_PROBE"), "$HOME");
    }
}
