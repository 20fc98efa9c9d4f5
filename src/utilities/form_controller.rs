use std::fmt;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use url::Url;

use super::config::{Config, ResponseMode};
use super::file_download::DownloadError;
use super::reconciler;
use super::text_utils::{self, TruncateWithEllipsis};
use super::view_state::ViewState;
use crate::apis::logo_generator::{self, GenerateError, LogoForm, Payload};

/// identifies one submission, later submissions always get a larger token
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct SubmissionToken(u64);

impl fmt::Display for SubmissionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Submission {
    Rendered(SubmissionToken),
    /// a newer submission was started before this one finished
    Stale(SubmissionToken),
}

#[derive(Default)]
struct State {
    view: ViewState,
    latest: u64,
}

pub struct FormSubmissionController {
    http_client: reqwest::Client,
    endpoint: Url,
    mode: ResponseMode,
    state: Mutex<State>,
}

impl FormSubmissionController {
    pub fn new(http_client: reqwest::Client, config: &Config) -> Self {
        Self {
            http_client,
            endpoint: config.generate_url(),
            mode: config.mode,
            state: Mutex::new(State::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn view(&self) -> ViewState {
        self.state().view.clone()
    }

    pub fn open_popup(&self) {
        self.state().view.show_popup();
    }

    /// hides the popup, requests that are still running will render once they finish
    pub fn close_popup(&self) {
        self.state().view.hide_popup();
    }

    /// issues a new token and clears the previous result before anything is sent
    pub fn begin_submission(&self) -> SubmissionToken {
        let mut state = self.state();
        state.latest += 1;
        state.view.show_generating();
        SubmissionToken(state.latest)
    }

    /// renders the outcome unless a newer submission has been started in the meantime
    pub fn finish_submission(
        &self,
        token: SubmissionToken,
        outcome: &Result<Payload, GenerateError>,
    ) -> Submission {
        let mut state = self.state();

        if token.0 != state.latest {
            log::debug!("discarding the result of {token}, the latest submission is #{}", state.latest);
            return Submission::Stale(token);
        }

        match outcome {
            Ok(payload) => reconciler::reconcile(&mut state.view, payload.clone()),
            Err(err) => reconciler::render_failure(&mut state.view, err),
        }

        Submission::Rendered(token)
    }

    /// shows a submission that failed before anything was sent, unless a newer one has started
    pub fn reject_submission(&self, token: SubmissionToken, reason: &str) -> Submission {
        let mut state = self.state();

        if token.0 != state.latest {
            log::debug!(
                "discarding the rejection of {token}, the latest submission is #{}",
                state.latest
            );
            return Submission::Stale(token);
        }

        state.view.set_status(reason);
        Submission::Rendered(token)
    }

    /// resets the view right away, the returned future performs the request and renders it
    pub fn submit(&self, form: LogoForm) -> impl Future<Output = Submission> + Send + '_ {
        let token = self.begin_submission();
        self.send(token, form)
    }

    /// performs the request of a submission started with [`Self::begin_submission`]
    pub fn send(
        &self,
        token: SubmissionToken,
        form: LogoForm,
    ) -> impl Future<Output = Submission> + Send + '_ {
        async move {
            log::info!(
                "submission {token}: {:?} to {} ({} mode)",
                form.title.clone().truncate_with_ellipsis(64),
                self.endpoint,
                self.mode
            );

            let start = Instant::now();
            let outcome =
                logo_generator::generate(&self.http_client, self.endpoint.clone(), &form, self.mode)
                    .await;
            let duration = text_utils::format_duration(start.elapsed().as_secs());

            match &outcome {
                Ok(Payload::Image(logo)) => {
                    log::info!("submission {token} returned {logo} in {duration}");
                }
                Ok(Payload::Result(result)) => log::info!(
                    "submission {token} returned a result in {duration} (logo: {}, error: {:?})",
                    result.logo.as_ref().map_or_else(|| "none".into(), ToString::to_string),
                    result.error
                ),
                Err(GenerateError::Malformed(reason)) => {
                    log::warn!("submission {token} returned an invalid response: {reason}");
                }
                Err(err) => log::warn!("submission {token} failed in {duration}: {err}"),
            }

            self.finish_submission(token, &outcome)
        }
    }

    pub fn download(&self, dir: &Path) -> Result<PathBuf, DownloadError> {
        let download = self.state().view.download().cloned().ok_or(DownloadError::NothingToDownload)?;
        download.save(dir)
    }
}
