use std::fmt;

use super::file_download::{DOWNLOAD_FILENAME, DownloadAction};
use super::image_utils::Logo;

pub const GENERATING: &str = "generating your logo…";

/// the output slots of the logo generator popup
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    popup_visible: bool,
    image: Option<Logo>,
    status: String,
    insight: String,
    strategy: String,
    download: Option<DownloadAction>,
}

impl ViewState {
    pub const fn popup_visible(&self) -> bool {
        self.popup_visible
    }

    pub const fn image(&self) -> Option<&Logo> {
        self.image.as_ref()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn insight(&self) -> &str {
        &self.insight
    }

    pub fn strategy(&self) -> &str {
        &self.strategy
    }

    pub const fn download(&self) -> Option<&DownloadAction> {
        self.download.as_ref()
    }

    pub const fn show_popup(&mut self) {
        self.popup_visible = true;
    }

    pub const fn hide_popup(&mut self) {
        self.popup_visible = false;
    }

    pub fn set_image(&mut self, image: Option<Logo>) {
        self.image = image;
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    pub fn set_insight(&mut self, insight: impl Into<String>) {
        self.insight = insight.into();
    }

    pub fn set_strategy(&mut self, strategy: impl Into<String>) {
        self.strategy = strategy.into();
    }

    pub fn bind_download(&mut self, logo: Logo) {
        self.download = Some(DownloadAction::new(logo));
    }

    pub fn unbind_download(&mut self) {
        self.download = None;
    }

    /// blanks every result slot and shows the placeholder, leaving the popup as it is
    pub fn show_generating(&mut self) {
        self.set_image(None);
        self.set_status(GENERATING);
        self.set_insight(String::new());
        self.set_strategy(String::new());
        self.unbind_download();
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "logo generator [{}]", if self.popup_visible() { "open" } else { "closed" })?;

        match self.image() {
            Some(logo) => writeln!(f, "  logo:     {logo}")?,
            None => writeln!(f, "  logo:     -")?,
        }

        writeln!(f, "  status:   {}", self.status())?;
        writeln!(f, "  insight:  {}", self.insight())?;

        if self.strategy().is_empty() {
            writeln!(f, "  strategy: -")?;
        } else {
            writeln!(f, "  strategy:")?;
            for line in self.strategy().lines() {
                writeln!(f, "    {line}")?;
            }
        }

        match self.download() {
            Some(_) => write!(f, "  download: {DOWNLOAD_FILENAME} ready"),
            None => write!(f, "  download: -"),
        }
    }
}
