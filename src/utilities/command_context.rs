use std::sync::Arc;

use tokio::sync::mpsc;

use super::app_state::AppState;

pub struct CommandContext {
    pub app_state: Arc<AppState>,
    replies: mpsc::UnboundedSender<String>,
}

impl CommandContext {
    pub const fn new(app_state: Arc<AppState>, replies: mpsc::UnboundedSender<String>) -> Self {
        Self { app_state, replies }
    }

    pub fn reply(&self, text: impl Into<String>) {
        if self.replies.send(text.into()).is_err() {
            log::warn!("reply dropped, the output is already closed");
        }
    }
}
