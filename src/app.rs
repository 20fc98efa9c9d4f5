use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::commands::{download, generate, popup, show, start};
use crate::utilities::app_state::AppState;
use crate::utilities::command_context::CommandContext;
use crate::utilities::command_dispatcher;
use crate::utilities::command_manager::CommandManager;
use crate::utilities::config::Config;
use crate::utilities::parsed_command::ParsedCommand;

pub fn command_manager() -> CommandManager {
    let mut command_manager = CommandManager::new();
    command_manager.add_command(start::Start);
    command_manager.add_command(popup::Open);
    command_manager.add_command(popup::Close);
    command_manager.add_command(generate::Generate);
    command_manager.add_command(download::Download);
    command_manager.add_command(show::Show);
    command_manager
}

pub struct App {
    app_state: Arc<AppState>,
    command_manager: CommandManager,
    replies: mpsc::UnboundedSender<String>,
    output: JoinHandle<()>,
    tasks: Vec<JoinHandle<()>>,
}

impl App {
    pub fn new(config: Config) -> reqwest::Result<Self> {
        let command_manager = command_manager();
        let app_state = Arc::new(AppState::new(config, command_manager.public_command_list())?);

        let (replies, mut receiver) = mpsc::unbounded_channel::<String>();
        let output = tokio::spawn(async move {
            while let Some(reply) = receiver.recv().await {
                println!("{reply}");
            }
        });

        Ok(Self { app_state, command_manager, replies, output, tasks: Vec::new() })
    }

    pub async fn run(mut self) {
        log::info!(
            "logo generator ready, sending to {} ({} mode)",
            self.app_state.config.generate_url(),
            self.app_state.config.mode
        );
        self.on_line("start");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            tokio::select! {
                line = lines.next_line() => match line {
                    Ok(Some(line)) => self.on_line(&line),
                    Ok(None) => {
                        log::info!("end of input");
                        break;
                    }
                    Err(err) => {
                        log::error!("reading input failed: {err}");
                        break;
                    }
                },
                result = signal::ctrl_c() => {
                    if let Err(err) = result {
                        log::error!("listening for Ctrl+C failed: {err}");
                    } else {
                        log::warn!("Ctrl+C received");
                    }
                    break;
                }
            }

            self.tasks.retain(|task| !task.is_finished());
        }

        self.close().await;
    }

    fn on_line(&mut self, line: &str) {
        let Some(parsed_command) = ParsedCommand::parse(line) else {
            return;
        };

        let Some(command) = self.command_manager.get_command(&parsed_command.name) else {
            self.replies
                .send(format!("unknown command {:?}, try help.", parsed_command.name))
                .ok();
            return;
        };

        let context = CommandContext::new(self.app_state.clone(), self.replies.clone());
        self.tasks.push(tokio::spawn(command_dispatcher::dispatch_command(
            command,
            parsed_command.arguments,
            context,
        )));
    }

    async fn close(self) {
        let task_count = self.tasks.iter().filter(|task| !task.is_finished()).count();
        if task_count > 0 {
            log::info!("waiting for {task_count} task(s) to finish…");
        }

        for task in self.tasks {
            if let Err(err) = task.await {
                log::error!("command task failed: {err}");
            }
        }

        drop(self.replies);
        self.output.await.ok();
        log::logger().flush();
    }
}
