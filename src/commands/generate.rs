use std::path::Path;

use async_trait::async_trait;

use super::{CommandResult, CommandTrait};
use crate::apis::logo_generator::{Attachment, LogoForm};
use crate::utilities::command_context::CommandContext;
use crate::utilities::form_controller::Submission;
use crate::utilities::parse_arguments::FormArguments;
use crate::utilities::text_utils;

pub struct Generate;

#[async_trait]
impl CommandTrait for Generate {
    fn command_names(&self) -> &[&'static str] {
        &["generate", "submit"]
    }

    fn description(&self) -> Option<&'static str> {
        Some("generate a logo: generate title=… theme=… style=… element1=… element2=…")
    }

    async fn execute(&self, ctx: &CommandContext, arguments: String) -> CommandResult {
        let arguments = FormArguments::parse(&arguments)?;

        if let Some(issue) = text_utils::check_title(&arguments.title) {
            log::info!("title rejected: {issue:?}");
            Err(issue)?;
        }

        let controller = &ctx.app_state.controller;
        if !controller.view().popup_visible() {
            controller.open_popup();
        }

        let token = controller.begin_submission();
        ctx.reply(controller.view().to_string());

        let attachments = async {
            Ok::<_, String>((
                read_attachment("element1", arguments.element1.as_deref()).await?,
                read_attachment("element2", arguments.element2.as_deref()).await?,
            ))
        };
        let (element1, element2) = match attachments.await {
            Ok(attachments) => attachments,
            Err(reason) => {
                controller.reject_submission(token, &reason);
                return Err(reason.into());
            }
        };

        let form = LogoForm {
            title: arguments.title,
            theme: arguments.theme,
            style_corpus: arguments.style_corpus,
            element1,
            element2,
        };

        let submission = controller.send(token, form);

        match submission.await {
            Submission::Rendered(token) => {
                log::debug!("submission {token} rendered");
                ctx.reply(controller.view().to_string());
            }
            Submission::Stale(token) => {
                log::info!("submission {token} finished after a newer one was started");
            }
        }

        Ok(())
    }
}

async fn read_attachment(field: &str, path: Option<&Path>) -> Result<Option<Attachment>, String> {
    let Some(path) = path else {
        return Ok(None);
    };

    let data = tokio::fs::read(path)
        .await
        .map_err(|err| format!("could not read {field} ({}): {err}", path.display()))?;

    let file_name = path
        .file_name()
        .map_or_else(|| field.to_string(), |name| name.to_string_lossy().into_owned());

    Ok(Some(Attachment { file_name, data }))
}

#[cfg(test)]
mod test {
    use std::fs;

    use reqwest::StatusCode;
    use tempfile::TempDir;

    use super::*;
    use crate::commands::CommandError;
    use crate::utilities::test_fixtures;
    use crate::utilities::view_state::GENERATING;

    #[tokio::test]
    async fn test_generate_renders_placeholder_then_result() {
        let (url, request) = test_fixtures::serve_once(test_fixtures::http_response(
            StatusCode::OK,
            "application/json",
            test_fixtures::full_response().as_bytes(),
        ))
        .await;
        let (ctx, mut replies) = test_fixtures::command_context(url.as_str());

        let dir = TempDir::new().unwrap();
        let leaf = dir.path().join("leaf.png");
        fs::write(&leaf, test_fixtures::png_bytes()).unwrap();

        Generate
            .execute(&ctx, format!("Verde Vivo theme=eco element1=\"{}\"", leaf.display()))
            .await
            .unwrap();

        let placeholder = replies.recv().await.unwrap();
        assert!(placeholder.contains(GENERATING));
        assert!(placeholder.starts_with("logo generator [open]"));

        let result = replies.recv().await.unwrap();
        assert!(result.contains("Growth with roots."));
        assert!(result.contains("logo.png ready"));

        let request = request.await.unwrap();
        assert!(request.contains("Verde Vivo"));
        assert!(request.contains("filename=\"leaf.png\""));
    }

    #[tokio::test]
    async fn test_generate_with_missing_element() {
        let (ctx, mut replies) = test_fixtures::command_context("http://127.0.0.1:9");

        let result = Generate.execute(&ctx, "Verde element1=/does/not/exist.png".into()).await;
        let Err(CommandError::Custom(text)) = result else {
            panic!("expected a custom error");
        };
        assert!(text.starts_with("could not read element1 (/does/not/exist.png)"));

        let placeholder = replies.recv().await.unwrap();
        assert!(placeholder.contains(GENERATING));

        let view = ctx.app_state.controller.view();
        assert!(view.popup_visible());
        assert_eq!(view.status(), text);
    }

    #[tokio::test]
    async fn test_older_submission_is_stale_once_files_are_read() {
        let (url, _) = test_fixtures::serve_once(test_fixtures::http_response(
            StatusCode::OK,
            "application/json",
            test_fixtures::full_response().as_bytes(),
        ))
        .await;
        let (ctx, _replies) = test_fixtures::command_context(url.as_str());
        let controller = &ctx.app_state.controller;

        let older = controller.submit(test_fixtures::logo_form());

        let result = Generate.execute(&ctx, "Verde element1=/does/not/exist.png".into()).await;
        let Err(CommandError::Custom(text)) = result else {
            panic!("expected a custom error");
        };

        let Submission::Stale(_) = older.await else {
            panic!("expected the older submission to be discarded");
        };

        let view = controller.view();
        assert_eq!(view.status(), text);
        assert_eq!(view.image(), None);
        assert_eq!(view.insight(), "");
    }

    #[tokio::test]
    async fn test_generate_requires_title() {
        let (ctx, _replies) = test_fixtures::command_context("http://127.0.0.1:9");

        let result = Generate.execute(&ctx, "theme=eco".into()).await;
        let Err(CommandError::Custom(text)) = result else {
            panic!("expected the empty title to be rejected");
        };
        assert_eq!(text, "Title is required");
        assert_eq!(ctx.app_state.controller.view().status(), "");
    }

    #[tokio::test]
    async fn test_generate_rejects_long_title() {
        let (ctx, _replies) = test_fixtures::command_context("http://127.0.0.1:9");

        let result = Generate.execute(&ctx, "a".repeat(200)).await;
        let Err(CommandError::Custom(_)) = result else {
            panic!("expected the title to be rejected");
        };
    }
}
