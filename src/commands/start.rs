use std::fmt::Write;

use async_trait::async_trait;

use super::{CommandResult, CommandTrait};
use crate::utilities::command_context::CommandContext;

pub struct Start;

#[async_trait]
impl CommandTrait for Start {
    fn command_names(&self) -> &[&'static str] {
        &["start", "help"]
    }

    async fn execute(&self, ctx: &CommandContext, _: String) -> CommandResult {
        let mut text = String::from("commands:\n");
        for command in &ctx.app_state.command_list {
            writeln!(text, "  {:<10} {}", command.name, command.description).ok();
        }
        text.push_str(concat!(
            "example: generate title=\"Verde Vivo\" theme=\"nature,innovation\" ",
            "style=estilo1 element1=./leaf.png"
        ));

        ctx.reply(text);

        Ok(())
    }
}
