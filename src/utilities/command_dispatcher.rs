use std::sync::Arc;

use super::command_context::CommandContext;
use super::command_manager::CommandInstance;
use super::file_download::DownloadError;
use crate::commands::CommandError;

pub async fn dispatch_command(
    command: Arc<CommandInstance>,
    arguments: String,
    context: CommandContext,
) {
    log::info!("running {command} {arguments:?}");

    if let Err(err) = command.command.execute(&context, arguments).await {
        report_command_error(&command, &context, err);
    }
}

fn report_command_error(command: &CommandInstance, context: &CommandContext, error: CommandError) {
    match &error {
        CommandError::Custom(_) | CommandError::ArgumentParse(_) => {
            log::info!("{command} rejected: {error}");
        }
        CommandError::Download(DownloadError::NothingToDownload) => {
            log::info!("{command} called before a logo was generated");
        }
        CommandError::Download(DownloadError::FilesystemError(err)) => {
            log::error!("filesystem error in the {command} command: {err}");
        }
    }

    context.reply(error.to_string());
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::commands::download::Download;
    use crate::utilities::test_fixtures;

    #[tokio::test]
    async fn test_errors_are_replied() {
        let (ctx, mut replies) = test_fixtures::command_context("http://127.0.0.1:9");
        let command = Arc::new(CommandInstance { command: Box::new(Download) });

        dispatch_command(command, String::new(), ctx).await;

        assert_eq!(replies.recv().await.unwrap(), "there is no logo to download yet.");
    }
}
