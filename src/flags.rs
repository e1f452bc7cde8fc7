use crate::error::ShellError;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: HashMap<String, Flag>,
    positional: Vec<String>,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub takes_value: bool,
    pub value: Option<String>,
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = HashMap::new();

        flags.insert(
            "help".to_string(),
            Flag {
                short: "-h".to_string(),
                long: "--help".to_string(),
                description: "Print this help message".to_string(),
                takes_value: false,
                value: None,
            },
        );

        flags.insert(
            "version".to_string(),
            Flag {
                short: "-v".to_string(),
                long: "--version".to_string(),
                description: "Show version information".to_string(),
                takes_value: false,
                value: None,
            },
        );

        flags.insert(
            "quiet".to_string(),
            Flag {
                short: "-q".to_string(),
                long: "--quiet".to_string(),
                description: "Suppress warnings".to_string(),
                takes_value: false,
                value: None,
            },
        );

        flags.insert(
            "command".to_string(),
            Flag {
                short: "-c".to_string(),
                long: "--command".to_string(),
                description: "Run a single command string and exit".to_string(),
                takes_value: true,
                value: None,
            },
        );

        Flags {
            flags,
            positional: Vec::new(),
        }
    }

    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut i = 0;
        while i < args.len() {
            let arg = &args[i];

            if !arg.starts_with('-') || arg == "-" {
                self.positional.push(arg.clone());
                i += 1;
                continue;
            }

            let name = self
                .lookup(arg)
                .ok_or_else(|| ShellError::FlagError(format!("unknown flag: {}", arg)))?;

            if self.takes_value(&name) {
                i += 1;
                let value = args.get(i).ok_or_else(|| {
                    ShellError::FlagError(format!("flag {} requires a value", arg))
                })?;
                self.set_value(&name, value.clone());
            } else {
                self.set_value(&name, "true".to_string());
            }
            i += 1;
        }
        Ok(())
    }

    fn lookup(&self, arg: &str) -> Option<String> {
        self.flags
            .iter()
            .find(|(_, flag)| arg == flag.short || arg == flag.long)
            .map(|(name, _)| name.clone())
    }

    fn takes_value(&self, name: &str) -> bool {
        self.flags.get(name).map(|f| f.takes_value).unwrap_or(false)
    }

    fn set_value(&mut self, name: &str, value: String) {
        if let Some(flag) = self.flags.get_mut(name) {
            flag.value = Some(value);
        }
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn get_value(&self, name: &str) -> Option<&String> {
        self.flags.get(name).and_then(|f| f.value.as_ref())
    }

    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    pub fn print_help(&self) {
        println!("Usage: krill [OPTIONS] [SCRIPT]");
        println!("\nOptions:");
        let mut entries: Vec<&Flag> = self.flags.values().collect();
        entries.sort_by(|a, b| a.short.cmp(&b.short));
        for flag in entries {
            println!("  {}, {:<15} {}", flag.short, flag.long, flag.description);
        }
    }
}
