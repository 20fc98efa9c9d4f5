use async_trait::async_trait;

use super::{CommandResult, CommandTrait};
use crate::utilities::command_context::CommandContext;

pub struct Show;

#[async_trait]
impl CommandTrait for Show {
    fn command_names(&self) -> &[&'static str] {
        &["show", "view"]
    }

    fn description(&self) -> Option<&'static str> {
        Some("print the current result")
    }

    async fn execute(&self, ctx: &CommandContext, _: String) -> CommandResult {
        ctx.reply(ctx.app_state.controller.view().to_string());

        Ok(())
    }
}
