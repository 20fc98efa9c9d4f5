use std::fmt;
use std::sync::Arc;

use super::app_state::CommandDescription;
use crate::commands::CommandTrait;

pub type CommandRef = Box<dyn CommandTrait + Send + Sync>;

pub struct CommandInstance {
    pub command: CommandRef,
}

impl fmt::Display for CommandInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.command.command_names().first().copied().unwrap_or("?"))
    }
}

pub struct CommandManager {
    commands: Vec<Arc<CommandInstance>>,
}

impl CommandManager {
    pub const fn new() -> Self {
        Self { commands: Vec::new() }
    }

    pub fn add_command(&mut self, command: impl CommandTrait + Send + Sync + 'static) {
        self.commands.push(Arc::new(CommandInstance { command: Box::new(command) }));
    }

    pub fn get_command(&self, name: &str) -> Option<Arc<CommandInstance>> {
        self.commands
            .iter()
            .find(|c| c.command.command_names().iter().any(|command_name| *command_name == name))
            .cloned()
    }

    pub fn public_command_list(&self) -> Vec<CommandDescription> {
        self.commands
            .iter()
            .filter_map(|c| {
                let name = *c.command.command_names().first()?;
                c.command.description().map(|description| CommandDescription { name, description })
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::commands::{popup, show};

    #[test]
    fn test_get_command() {
        let mut manager = CommandManager::new();
        manager.add_command(popup::Open);
        manager.add_command(show::Show);

        assert_eq!(manager.get_command("open").unwrap().to_string(), "/open");
        assert_eq!(manager.get_command("view").unwrap().to_string(), "/show");
        assert!(manager.get_command("close").is_none());

        let names =
            manager.public_command_list().into_iter().map(|c| c.name).collect::<Vec<_>>();
        assert_eq!(names, vec!["open", "show"]);
    }
}
