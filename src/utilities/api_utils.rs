use reqwest::header::CONTENT_TYPE;
use reqwest::{Response, StatusCode};

pub struct ServerError(pub StatusCode);

pub trait DetectServerError {
    fn server_error(self) -> Result<Response, ServerError>;
}

impl DetectServerError for Response {
    fn server_error(self) -> Result<Response, ServerError> {
        if is_html_server_error(self.status(), content_type(&self)) {
            return Err(ServerError(self.status()));
        }

        Ok(self)
    }
}

pub fn content_type(response: &Response) -> Option<&str> {
    response.headers().get(CONTENT_TYPE).and_then(|header| header.to_str().ok())
}

/// a 5xx answered with an HTML page comes from a proxy or a crashed backend, not from the API
pub fn is_html_server_error(status: StatusCode, content_type: Option<&str>) -> bool {
    status.is_server_error() && content_type.is_some_and(|header| header.starts_with("text/html"))
}

pub fn is_json(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|header| {
        header.split(';').next().is_some_and(|mime| {
            let mime = mime.trim();
            mime == "application/json" || mime.ends_with("+json")
        })
    })
}
