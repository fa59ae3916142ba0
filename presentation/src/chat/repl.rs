//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::config::ReplConfig;
use crate::credentials::form::{CredentialForm, FormOutcome};
use crate::output::console::ConsoleFormatter;
use crate::output::formatter::OutputFormatter;
use crate::progress::reporter;
use battle_application::{Credentials, DualChatController, SubmitOutcome};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::io::{self, BufRead, Write};
use tracing::warn;

const HISTORY_SIZE: usize = 500;

/// Interactive chat REPL
///
/// Every line that is not a `/command` goes to both providers; each column
/// keeps its own conversation across turns.
pub struct ChatRepl {
    controller: DualChatController,
    form: CredentialForm,
    formatter: ConsoleFormatter,
    config: ReplConfig,
    env_keys: Credentials,
    form_input: Box<dyn BufRead>,
    form_output: Box<dyn Write>,
}

impl ChatRepl {
    pub fn new(
        controller: DualChatController,
        form: CredentialForm,
        formatter: ConsoleFormatter,
    ) -> Self {
        Self {
            controller,
            form,
            formatter,
            config: ReplConfig::default(),
            env_keys: Credentials::default(),
            form_input: Box::new(io::BufReader::new(io::stdin())),
            form_output: Box::new(io::stdout()),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Keys from the environment; they keep winning over keys typed in the form
    pub fn with_env_keys(mut self, env_keys: Credentials) -> Self {
        self.env_keys = env_keys;
        self
    }

    /// Where the credential form reads answers and writes its prompts
    pub fn with_form_io(mut self, input: Box<dyn BufRead>, output: Box<dyn Write>) -> Self {
        self.form_input = input;
        self.form_output = output;
        self
    }

    pub fn controller(&self) -> &DualChatController {
        &self.controller
    }

    fn line_editor(&self) -> Reedline {
        let editor = Reedline::create();
        let Some(path) = self.config.history_path() else {
            return editor;
        };
        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!("Could not create history directory {}: {}", parent.display(), e);
        }
        match FileBackedHistory::with_file(HISTORY_SIZE, path.clone()) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                warn!("History disabled, cannot use {}: {}", path.display(), e);
                editor
            }
        }
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) {
        let mut editor = self.line_editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic(">>> ".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        if !self.controller.has_credentials() {
            self.collect_keys();
        }

        loop {
            match editor.read_line(&prompt) {
                Ok(Signal::Success(buffer)) => {
                    if self.handle_line(&buffer).await {
                        break;
                    }
                }
                Ok(Signal::CtrlC) => {
                    println!("^C");
                    continue;
                }
                Ok(Signal::CtrlD) => {
                    println!("Bye!");
                    break;
                }
                #[allow(unreachable_patterns)]
                Ok(_) => continue,
                Err(err) => {
                    eprintln!("Error: {}", err);
                    break;
                }
            }
        }
    }

    /// Dispatch one line of input. Returns true if should exit.
    ///
    /// Questions are sent exactly as typed; trimming only decides whether
    /// the line is empty or a command.
    async fn handle_line(&mut self, buffer: &str) -> bool {
        let line = buffer.trim();

        if line.is_empty() {
            return false;
        }

        if line.starts_with('/') {
            return self.handle_command(line);
        }

        self.ask(buffer).await;
        false
    }

    fn print_welcome(&self) {
        let [left, right] = self.controller.providers();
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│           Search Battle - Chat Mode         │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("{}  vs  {}", left.display_name(), right.display_name());
        println!();
        Self::print_commands();
    }

    fn print_commands() {
        println!("Commands:");
        println!("  /help, /h, /?     - Show this help");
        println!("  /keys             - Enter API keys again");
        println!("  /clear            - Start both conversations over");
        println!("  /history          - Show both full conversations");
        println!("  /quit, /exit, /q  - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&mut self, cmd: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                Self::print_commands();
                false
            }
            "/keys" => {
                self.collect_keys();
                false
            }
            "/clear" => {
                self.controller.reset();
                println!("Both conversations cleared.");
                false
            }
            "/history" => {
                println!();
                print!("{}", self.formatter.format(&self.controller.snapshot()));
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    /// Show the credential form; returns true once usable keys are in place
    fn collect_keys(&mut self) -> bool {
        match self
            .form
            .prompt_with(&mut self.form_input, &mut self.form_output)
        {
            Ok(FormOutcome::Saved(saved)) => {
                self.controller
                    .set_credentials(saved.overlay(&self.env_keys));
                true
            }
            Ok(FormOutcome::Rejected | FormOutcome::Failed) => false,
            Err(e) => {
                eprintln!("Error: {}", e);
                false
            }
        }
    }

    async fn ask(&mut self, question: &str) {
        println!();
        let mut outcome = self.submit(question).await;

        if matches!(outcome, SubmitOutcome::CredentialsRequired) && self.collect_keys() {
            outcome = self.submit(question).await;
        }

        if let SubmitOutcome::Completed(_) = outcome {
            println!();
            print!("{}", self.formatter.format_latest(&self.controller.snapshot()));
        }
        println!();
    }

    async fn submit(&mut self, question: &str) -> SubmitOutcome {
        if self.config.show_progress {
            let progress = reporter::for_stderr();
            self.controller
                .submit_with_progress(question, progress.as_ref())
                .await
        } else {
            self.controller.submit(question).await
        }
    }
}
