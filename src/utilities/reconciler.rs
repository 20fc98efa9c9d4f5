//! Maps a generation payload onto the view slots.
//!
//! Every slot is resolved on its own: an error message does not hide a logo that came with it,
//! and missing text falls back to a fixed string instead of blanking the rest of the view.

use super::view_state::ViewState;
use crate::apis::logo_generator::{GenerateError, GenerationResult, MarketingStrategy, Payload};

pub const LOGO_GENERATED: &str = "logo generated.";
pub const NO_LOGO: &str = "the server did not return a logo.";
pub const INSIGHT_UNAVAILABLE: &str = "insight not available.";
pub const STRATEGY_UNAVAILABLE: &str = "brand strategy not available.";

pub fn reconcile(view: &mut ViewState, payload: Payload) {
    let result = match payload {
        Payload::Image(logo) => GenerationResult { logo: Some(logo), ..Default::default() },
        Payload::Result(result) => result,
    };

    let status = match (&result.error, &result.logo) {
        (Some(error), _) => error.clone(),
        (None, Some(_)) => LOGO_GENERATED.into(),
        (None, None) => NO_LOGO.into(),
    };

    view.set_insight(resolve_insight(&result));
    view.set_strategy(resolve_strategy(&result));
    view.set_status(status);

    match result.logo {
        Some(logo) => {
            view.set_image(Some(logo.clone()));
            view.bind_download(logo);
        }
        None => {
            view.set_image(None);
            view.unbind_download();
        }
    }
}

/// shows a failed submission, nothing from the response is kept
pub fn render_failure(view: &mut ViewState, error: &GenerateError) {
    view.set_image(None);
    view.unbind_download();
    view.set_status(error.to_string());
    view.set_insight(String::new());
    view.set_strategy(String::new());
}

fn resolve_insight(result: &GenerationResult) -> String {
    if let Some(insight) = &result.insight {
        return insight.clone();
    }

    result
        .brand_strategy
        .as_deref()
        .and_then(|strategy| strategy.lines().map(str::trim).find(|line| !line.is_empty()))
        .unwrap_or(INSIGHT_UNAVAILABLE)
        .to_string()
}

fn resolve_strategy(result: &GenerationResult) -> String {
    if let Some(text) = result.marketing_strategy.as_ref().and_then(format_marketing_strategy) {
        return text;
    }

    result.brand_strategy.clone().unwrap_or_else(|| STRATEGY_UNAVAILABLE.into())
}

fn format_marketing_strategy(strategy: &MarketingStrategy) -> Option<String> {
    let mut sections = Vec::new();

    if let Some(tone) = strategy.tone.as_deref().map(str::trim).filter(|tone| !tone.is_empty()) {
        sections.push(format!("Tone: {tone}"));
    }

    for (title, items) in [("Social media", &strategy.social_media), ("Events", &strategy.events)] {
        if let Some(items) = items.as_ref().filter(|items| !items.is_empty()) {
            let bullets = items.iter().map(|item| format!("• {item}")).collect::<Vec<_>>();
            sections.push(format!("{title}:\n{}", bullets.join("\n")));
        }
    }

    if sections.is_empty() { None } else { Some(sections.join("\n\n")) }
}
