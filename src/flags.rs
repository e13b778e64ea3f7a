use crate::error::ShellError;
use std::collections::BTreeMap;

/// Command-line flags plus whatever positional arguments are left over.
#[derive(Debug, Clone)]
pub struct Flags {
    flags: BTreeMap<String, Flag>,
    positional: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub set: bool,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = BTreeMap::new();

        for (name, short, long, description) in [
            ("help", "-h", "--help", "Print this help message"),
            ("version", "-V", "--version", "Show version information"),
            ("debug", "-d", "--debug", "Enable debug output on stderr"),
        ] {
            flags.insert(
                name.to_string(),
                Flag {
                    short: short.to_string(),
                    long: long.to_string(),
                    description: description.to_string(),
                    set: false,
                },
            );
        }

        Flags {
            flags,
            positional: Vec::new(),
        }
    }

    /// Sets known flags and collects the rest as positional arguments.
    ///
    /// A lone `-` is positional; any other unknown `-`-prefixed word is an error.
    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        for arg in args {
            if arg.len() < 2 || !arg.starts_with('-') {
                self.positional.push(arg.clone());
                continue;
            }

            let flag = self
                .flags
                .values_mut()
                .find(|flag| arg == &flag.short || arg == &flag.long)
                .ok_or_else(|| ShellError::FlagError(format!("unknown flag {}", arg)))?;
            flag.set = true;
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags.get(name).is_some_and(|f| f.set)
    }

    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    pub fn print_help(&self) {
        println!("Usage: wish [OPTIONS] [BATCH_FILE]");
        println!("\nReads commands from BATCH_FILE, or interactively from stdin.");
        println!("\nOptions:");
        for flag in self.flags.values() {
            println!("  {}, {:<15} {}", flag.short, flag.long, flag.description);
        }
    }
}
