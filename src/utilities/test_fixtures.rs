use std::io::Cursor;
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use image::{DynamicImage, ImageFormat, RgbaImage};
use reqwest::StatusCode;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use url::Url;

use super::app_state::AppState;
use super::command_context::CommandContext;
use super::config::{Config, ResponseMode};
use super::form_controller::FormSubmissionController;
use crate::apis::logo_generator::{Attachment, LogoForm};
use crate::app;

pub fn png_bytes() -> Vec<u8> {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(RgbaImage::new(2, 3))
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

pub fn full_response() -> String {
    serde_json::json!({
        "logo": BASE64.encode(png_bytes()),
        "insight": "Growth with roots.",
        "brand_strategy": "Lead with sustainability.\nSpeak plainly.",
        "marketing_strategy": {
            "tone": "bold",
            "social_media": ["post A"],
            "events": []
        }
    })
    .to_string()
}

pub fn logo_form() -> LogoForm {
    LogoForm {
        title: "Verde Vivo".into(),
        theme: "naturaleza,innovación".into(),
        style_corpus: vec!["estilo1".into(), "estilo2".into()],
        element1: Some(Attachment { file_name: "leaf.png".into(), data: png_bytes() }),
        element2: None,
    }
}

pub fn config(base_url: &str, mode: ResponseMode) -> Config {
    let base_url = base_url.to_string();
    let mode = mode.to_string();
    Config::from_lookup(|key| match key {
        "LOGO_GENERATOR_URL" => Some(base_url.clone()),
        "LOGO_GENERATOR_MODE" => Some(mode.clone()),
        "LOGO_GENERATOR_TIMEOUT" => Some("5".into()),
        _ => None,
    })
    .unwrap()
}

pub fn controller(base_url: &str, mode: ResponseMode) -> FormSubmissionController {
    FormSubmissionController::new(reqwest::Client::new(), &config(base_url, mode))
}

pub fn http_response(status: StatusCode, content_type: &str, body: &[u8]) -> Vec<u8> {
    let mut response = format!(
        "HTTP/1.1 {status}\r\ncontent-type: {content_type}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n",
        body.len()
    )
    .into_bytes();
    response.extend_from_slice(body);
    response
}

/// answers the first request with `response` and yields that request as text
pub async fn serve_once(response: Vec<u8>) -> (Url, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = Url::parse(&format!("http://{}/", listener.local_addr().unwrap())).unwrap();

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let request = read_request(&mut stream).await;
        stream.write_all(&response).await.unwrap();
        stream.shutdown().await.ok();
        String::from_utf8_lossy(&request).into_owned()
    });

    (url, handle)
}

/// a URL that refuses connections
pub async fn unreachable_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = Url::parse(&format!("http://{}/", listener.local_addr().unwrap())).unwrap();
    drop(listener);
    url
}

async fn read_request(stream: &mut TcpStream) -> Vec<u8> {
    let mut request = Vec::new();
    let mut buffer = [0; 8192];

    loop {
        let read = stream.read(&mut buffer).await.unwrap();
        if read == 0 {
            break;
        }
        request.extend_from_slice(&buffer[..read]);

        let Some(header_end) = request.windows(4).position(|window| window == b"\r\n\r\n") else {
            continue;
        };

        let headers = String::from_utf8_lossy(&request[..header_end]).to_ascii_lowercase();
        let content_length = headers.lines().find_map(|line| {
            line.strip_prefix("content-length:").and_then(|value| value.trim().parse::<usize>().ok())
        });

        let complete = match content_length {
            Some(length) => request.len() >= header_end + 4 + length,
            None if headers.contains("transfer-encoding: chunked") => {
                request.ends_with(b"0\r\n\r\n")
            }
            None => true,
        };

        if complete {
            break;
        }
    }

    request
}

pub fn command_context(base_url: &str) -> (CommandContext, mpsc::UnboundedReceiver<String>) {
    let app_state = AppState::new(
        config(base_url, ResponseMode::Lenient),
        app::command_manager().public_command_list(),
    )
    .unwrap();
    let (tx, rx) = mpsc::unbounded_channel();

    (CommandContext::new(Arc::new(app_state), tx), rx)
}
