use async_trait::async_trait;

use super::{CommandResult, CommandTrait};
use crate::utilities::command_context::CommandContext;

pub struct Open;

#[async_trait]
impl CommandTrait for Open {
    fn command_names(&self) -> &[&'static str] {
        &["open"]
    }

    fn description(&self) -> Option<&'static str> {
        Some("open the logo generator")
    }

    async fn execute(&self, ctx: &CommandContext, _: String) -> CommandResult {
        ctx.app_state.controller.open_popup();
        ctx.reply(ctx.app_state.controller.view().to_string());

        Ok(())
    }
}

pub struct Close;

#[async_trait]
impl CommandTrait for Close {
    fn command_names(&self) -> &[&'static str] {
        &["close"]
    }

    fn description(&self) -> Option<&'static str> {
        Some("close the logo generator")
    }

    async fn execute(&self, ctx: &CommandContext, _: String) -> CommandResult {
        ctx.app_state.controller.close_popup();
        ctx.reply("logo generator closed.");

        Ok(())
    }
}
