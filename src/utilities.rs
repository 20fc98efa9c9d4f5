pub mod api_utils;
pub mod app_state;
pub mod command_context;
pub mod command_dispatcher;
pub mod command_manager;
pub mod config;
pub mod file_download;
pub mod form_controller;
pub mod image_utils;
pub mod logchamp;
pub mod parse_arguments;
pub mod parsed_command;
pub mod reconciler;
pub mod text_utils;
pub mod view_state;

#[cfg(test)]
pub mod test_fixtures;
