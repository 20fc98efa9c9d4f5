use reqwest::Client;

use super::config::Config;
use super::form_controller::FormSubmissionController;

pub struct CommandDescription {
    pub name: &'static str,
    pub description: &'static str,
}

pub struct AppState {
    pub config: Config,
    pub controller: FormSubmissionController,
    pub command_list: Vec<CommandDescription>,
}

impl AppState {
    pub fn new(config: Config, command_list: Vec<CommandDescription>) -> reqwest::Result<Self> {
        let mut http_client = Client::builder();

        if let Some(user_agent) = &config.user_agent {
            http_client = http_client.user_agent(user_agent);
        }

        let http_client = http_client.timeout(config.timeout).build()?;

        Ok(Self {
            controller: FormSubmissionController::new(http_client, &config),
            config,
            command_list,
        })
    }
}
