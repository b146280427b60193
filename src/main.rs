//! Terminal presentation layer for the create-item screen.
//!
//! Reads one command per line from stdin and re-renders after every change:
//!
//! ```text
//! name <text>   set the item name        submit   submit the form
//! desc <text>   set the description      retry    retry after a failure
//! ok            dismiss success notice   edit     dismiss error and edit
//! appear        leave and re-show screen show     render again
//! quit          exit
//! ```
//!
//! Run with: cargo run -- [config.json]

use anyhow::{Context, Result};
use screenflow::config::SimulatedSaveConfig;
use screenflow::core::{Binding, State, Trigger};
use screenflow::effects::{SaveOperation, ScreenStateMachine};
use screenflow::{Item, SimulatedSaveBuilder};
use stillwater::validation::Validation;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Name(String),
    Description(String),
    Submit,
    Retry,
    AcknowledgeSuccess,
    AcknowledgeErrorAndEdit,
    Appear,
    Show,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word {
        "name" => Some(Command::Name(rest.to_string())),
        "desc" => Some(Command::Description(rest.to_string())),
        "submit" => Some(Command::Submit),
        "retry" => Some(Command::Retry),
        "ok" => Some(Command::AcknowledgeSuccess),
        "edit" => Some(Command::AcknowledgeErrorAndEdit),
        "appear" => Some(Command::Appear),
        "show" => Some(Command::Show),
        "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

/// Form contents plus the screen they belong to.
struct Screen<O: SaveOperation> {
    machine: ScreenStateMachine<O>,
    item: Item,
}

impl<O: SaveOperation> Screen<O> {
    fn new(machine: ScreenStateMachine<O>) -> Self {
        Self {
            machine,
            item: Item::default(),
        }
    }

    /// Handle one command. Returns `false` when the user asked to quit.
    fn handle(&mut self, command: Command) -> bool {
        match command {
            Command::Name(name) if self.machine.is_editing() => self.item.name = name,
            Command::Description(desc) if self.machine.is_editing() => {
                self.item.description = desc
            }
            Command::Name(_) | Command::Description(_) => {
                println!("(input is locked while {})", self.machine.state());
            }
            Command::Submit => {
                if let Validation::Failure(violations) = self.item.validate() {
                    for violation in violations.iter() {
                        println!("! {violation}");
                    }
                } else if !self.machine.submit(&self.item) {
                    println!("(cannot submit while {})", self.machine.state());
                }
            }
            Command::Retry => {
                if !self.machine.retry(&self.item) {
                    println!("(nothing to retry)");
                }
            }
            Command::AcknowledgeSuccess => {
                self.machine.acknowledge_success();
            }
            Command::AcknowledgeErrorAndEdit => {
                self.machine.acknowledge_error_and_edit();
            }
            Command::Appear => {
                if self.machine.should_navigate_to_results() {
                    self.item = Item::default();
                }
                self.machine.on_appear();
            }
            Command::Show => {}
            Command::Quit => return false,
        }
        true
    }

    fn render(&self) -> String {
        let m = &self.machine;

        if m.results_navigation_binding().get() {
            let attempts = m.history().count_of(&Trigger::Submit) + m.history().count_of(&Trigger::Retry);
            return format!(
                "== Results ==\n  created: {}\n  description: {}\n  attempts: {}\n(type `appear` to create another item)",
                self.item.name,
                display_or_dash(&self.item.description),
                attempts
            );
        }

        let mut out = format!(
            "== New item [{}] ==\n  name: {}\n  description: {}",
            m.state().name(),
            display_or_dash(&self.item.name),
            display_or_dash(&self.item.description)
        );

        if m.is_editing() {
            let hint = if self.item.is_submittable() {
                "`submit` to save"
            } else {
                "set a `name` to enable submit"
            };
            out.push_str(&format!("\n  {hint}"));
        }
        if m.is_pending() {
            out.push_str("\n  saving...");
        }
        if m.success_notice_binding().get() {
            out.push_str("\n  [Saved] The item was created. `ok` to continue.");
        }
        if m.error_notice_binding().get() {
            out.push_str("\n  [Error] The item could not be saved. `retry` or `edit`.");
        }
        out
    }
}

fn display_or_dash(text: &str) -> &str {
    if text.is_empty() {
        "-"
    } else {
        text
    }
}

fn load_config() -> Result<SimulatedSaveConfig> {
    match std::env::args().nth(1) {
        Some(path) => SimulatedSaveConfig::load(&path)
            .with_context(|| format!("Failed to load config from {path}")),
        None => Ok(SimulatedSaveConfig::default()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("screenflow=info,warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = load_config()?;
    tracing::info!(
        latency_ms = config.latency_ms,
        success_rate = config.success_rate,
        "Starting screenflow v{}",
        env!("CARGO_PKG_VERSION")
    );

    let machine = SimulatedSaveBuilder::from_config(config).build_screen()?;
    let mut screen = Screen::new(machine);
    screen.machine.on_appear();
    println!("{}", screen.render());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read stdin")? else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match parse_command(&line) {
                    Some(command) => {
                        if !screen.handle(command) {
                            break;
                        }
                    }
                    None => {
                        println!("unknown command: {}", line.trim());
                        continue;
                    }
                }
            }
            resolution = screen.machine.next_resolution() => {
                let Some(resolution) = resolution else {
                    break;
                };
                if !screen.machine.on_save_resolved(resolution) {
                    continue;
                }
            }
        }
        println!("{}", screen.render());
    }

    tracing::info!(transitions = screen.machine.history().len(), "screen closed");
    Ok(())
}
