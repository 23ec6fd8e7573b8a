use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::cli::commands;
use crate::cli::core::{CommandResult, ShellContext};

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }
}

static COMMAND_TABLE: Lazy<Vec<CommandEntry>> = Lazy::new(|| {
    vec![
        CommandEntry::new("help", "Show available commands", "help [command]", commands::help),
        CommandEntry::new("version", "Show build information", "version", commands::version),
        CommandEntry::new(
            "load",
            "Load schedules and actual transactions from a JSON snapshot",
            "load <path>",
            commands::load,
        ),
        CommandEntry::new(
            "window",
            "Show or set the projection window (inclusive)",
            "window [<from YYYY-MM-DD> <to YYYY-MM-DD> | reset]",
            commands::window,
        ),
        CommandEntry::new(
            "schedules",
            "List loaded schedules with their next due date",
            "schedules",
            commands::schedules,
        ),
        CommandEntry::new(
            "project",
            "Project every schedule over the window",
            "project",
            commands::project,
        ),
        CommandEntry::new(
            "timeline",
            "Show actual and projected transactions merged by date",
            "timeline",
            commands::timeline,
        ),
        CommandEntry::new(
            "totals",
            "Summarize projected income, expense and investment",
            "totals",
            commands::totals,
        ),
        CommandEntry::new(
            "config",
            "Show or change preferences",
            "config [show | set <key> <value>]",
            commands::config,
        ),
        CommandEntry::new("exit", "Leave the shell", "exit", commands::exit),
    ]
});

pub struct CommandRegistry {
    commands: HashMap<&'static str, &'static CommandEntry>,
    order: Vec<&'static str>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Registry holding every built-in shell command.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for entry in COMMAND_TABLE.iter() {
            registry.register(entry);
        }
        registry.alias("quit", "exit");
        registry
    }

    pub fn register(&mut self, entry: &'static CommandEntry) {
        let name = entry.name;
        if self.commands.insert(name, entry).is_none() {
            self.order.push(name);
        }
    }

    fn alias(&mut self, alias: &'static str, target: &str) {
        if let Some(entry) = self.commands.get(target).copied() {
            self.commands.insert(alias, entry);
        }
    }

    pub fn get(&self, name: &str) -> Option<&'static CommandEntry> {
        self.commands.get(name).copied()
    }

    pub fn list(&self) -> Vec<&'static CommandEntry> {
        self.order
            .iter()
            .filter_map(|name| self.commands.get(name).copied())
            .collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }

    pub fn handler(&self, name: &str) -> Option<CommandHandler> {
        self.commands.get(name).map(|entry| entry.handler)
    }
}
