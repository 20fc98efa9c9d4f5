use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use bytes::Bytes;
use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::utilities::api_utils::{self, DetectServerError, ServerError};
use crate::utilities::config::ResponseMode;
use crate::utilities::image_utils::Logo;

pub const INVALID_RESPONSE: &str = "the response was not valid structured data.";

/// a file uploaded with the form
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub data: Vec<u8>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogoForm {
    pub title: String,
    pub theme: String,
    pub style_corpus: Vec<String>,
    pub element1: Option<Attachment>,
    pub element2: Option<Attachment>,
}

impl LogoForm {
    pub fn to_multipart(&self) -> Form {
        let mut form =
            Form::new().text("title", self.title.clone()).text("theme", self.theme.clone());

        for style in &self.style_corpus {
            form = form.text("style_corpus", style.clone());
        }

        for (name, attachment) in [("element1", &self.element1), ("element2", &self.element2)] {
            if let Some(attachment) = attachment {
                form = form.part(
                    name,
                    Part::bytes(attachment.data.clone()).file_name(attachment.file_name.clone()),
                );
            }
        }

        form
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MarketingStrategy {
    pub tone: Option<String>,
    pub social_media: Option<Vec<String>>,
    pub events: Option<Vec<String>>,
}

#[derive(Deserialize)]
struct RawResult {
    error: Option<String>,
    logo: Option<String>,
    insight: Option<String>,
    brand_strategy: Option<String>,
    marketing_strategy: Option<MarketingStrategy>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

/// the JSON result of one submission, with the logo already decoded
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationResult {
    pub logo: Option<Logo>,
    pub error: Option<String>,
    pub insight: Option<String>,
    pub brand_strategy: Option<String>,
    pub marketing_strategy: Option<MarketingStrategy>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Payload {
    Image(Logo),
    Result(GenerationResult),
}

#[derive(Debug)]
pub enum GenerateError {
    Transport(reqwest::Error),
    Server(StatusCode),
    Malformed(String),
    Backend(String),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(err) => match std::error::Error::source(err) {
                Some(source) => write!(f, "generating the logo failed: {err}: {source}"),
                None => write!(f, "generating the logo failed: {err}"),
            },
            Self::Server(status) => {
                write!(f, "the logo service is currently offline ({status}).")
            }
            Self::Malformed(_) => write!(f, "{INVALID_RESPONSE}"),
            Self::Backend(message) => write!(f, "{message}"),
        }
    }
}

impl From<reqwest::Error> for GenerateError {
    fn from(value: reqwest::Error) -> Self {
        // the endpoint is logged on submission, keep the message short
        Self::Transport(value.without_url())
    }
}

impl From<ServerError> for GenerateError {
    fn from(value: ServerError) -> Self {
        Self::Server(value.0)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

pub fn parse_result(body: &[u8]) -> Result<GenerationResult, GenerateError> {
    let value = serde_json::from_slice::<Value>(body)
        .map_err(|err| GenerateError::Malformed(format!("body is not JSON: {err}")))?;

    if !value.is_object() {
        return Err(GenerateError::Malformed("body is not a JSON object".into()));
    }

    let raw = serde_json::from_value::<RawResult>(value)
        .map_err(|err| GenerateError::Malformed(format!("unexpected result shape: {err}")))?;

    let logo = match non_empty(raw.logo) {
        Some(logo) => Some(Logo::new(
            BASE64
                .decode(logo.trim())
                .map_err(|err| GenerateError::Malformed(format!("logo is not base64: {err}")))?,
        )),
        None => None,
    };

    Ok(GenerationResult {
        logo,
        error: non_empty(raw.error),
        insight: non_empty(raw.insight),
        brand_strategy: non_empty(raw.brand_strategy),
        marketing_strategy: raw.marketing_strategy,
    })
}

/// turns a received response into a payload according to the response mode
pub fn interpret(
    mode: ResponseMode,
    status: StatusCode,
    content_type: Option<&str>,
    body: Bytes,
) -> Result<Payload, GenerateError> {
    match mode {
        ResponseMode::Lenient => Ok(Payload::Result(parse_result(&body)?)),
        ResponseMode::Strict if !status.is_success() => {
            let error = serde_json::from_slice::<ErrorResponse>(&body).map_err(|_| {
                GenerateError::Malformed(format!("{status} with an unreadable error body"))
            })?;
            // an empty message would leave the status blank
            let message = non_empty(Some(error.error)).unwrap_or_else(|| status.to_string());
            Err(GenerateError::Backend(message))
        }
        ResponseMode::Strict if api_utils::is_json(content_type) => {
            Ok(Payload::Result(parse_result(&body)?))
        }
        ResponseMode::Strict if body.is_empty() => {
            Err(GenerateError::Malformed("empty image body".into()))
        }
        ResponseMode::Strict => Ok(Payload::Image(Logo::new(body))),
    }
}

pub async fn generate(
    http_client: &reqwest::Client,
    url: Url,
    form: &LogoForm,
    mode: ResponseMode,
) -> Result<Payload, GenerateError> {
    let response =
        http_client.post(url).multipart(form.to_multipart()).send().await?.server_error()?;

    let status = response.status();
    let content_type = api_utils::content_type(&response).map(ToOwned::to_owned);
    let body = response.bytes().await?;

    log::debug!("received {status} with {} bytes of {content_type:?}", body.len());

    interpret(mode, status, content_type.as_deref(), body)
}
