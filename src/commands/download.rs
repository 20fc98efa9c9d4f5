use std::path::PathBuf;

use async_trait::async_trait;

use super::{CommandResult, CommandTrait};
use crate::utilities::command_context::CommandContext;
use crate::utilities::parse_arguments;

pub struct Download;

#[async_trait]
impl CommandTrait for Download {
    fn command_names(&self) -> &[&'static str] {
        &["download", "save"]
    }

    fn description(&self) -> Option<&'static str> {
        Some("save the generated logo as logo.png")
    }

    async fn execute(&self, ctx: &CommandContext, arguments: String) -> CommandResult {
        let dir = match parse_arguments::split_arguments(&arguments)?.as_slice() {
            [] => ctx.app_state.config.download_dir.clone(),
            [dir] => PathBuf::from(dir),
            _ => Err("download takes at most one directory.")?,
        };

        let path = ctx.app_state.controller.download(&dir)?;
        ctx.reply(format!("saved to {}.", path.display()));

        Ok(())
    }
}
