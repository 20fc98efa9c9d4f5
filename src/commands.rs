use std::fmt;

use async_trait::async_trait;

use crate::utilities::command_context::CommandContext;
use crate::utilities::file_download::DownloadError;
use crate::utilities::parse_arguments::ParseError;

pub mod download;
pub mod generate;
pub mod popup;
pub mod show;
pub mod start;

pub type CommandResult = Result<(), CommandError>;

#[async_trait]
pub trait CommandTrait {
    fn command_names(&self) -> &[&'static str];

    fn description(&self) -> Option<&'static str> {
        None
    }

    async fn execute(&self, ctx: &CommandContext, arguments: String) -> CommandResult;
}

#[derive(Debug)]
pub enum CommandError {
    Custom(String),
    ArgumentParse(ParseError),
    Download(DownloadError),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Custom(text) => write!(f, "{text}"),
            Self::ArgumentParse(err) => write!(f, "{err}"),
            Self::Download(err) => write!(f, "{err}"),
        }
    }
}

impl From<String> for CommandError {
    fn from(value: String) -> Self {
        Self::Custom(value)
    }
}

impl From<&str> for CommandError {
    fn from(value: &str) -> Self {
        Self::Custom(value.into())
    }
}

impl From<ParseError> for CommandError {
    fn from(value: ParseError) -> Self {
        Self::ArgumentParse(value)
    }
}

impl From<DownloadError> for CommandError {
    fn from(value: DownloadError) -> Self {
        Self::Download(value)
    }
}
