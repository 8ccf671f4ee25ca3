// Shopfront Assistant prototype interaction core.
// CLI entry point: interactive shell, Figma asset export, one-shot patch.

mod assets;
mod classifier;
mod config;
mod error;
mod patch;
mod router;
mod ui;

#[cfg(test)]
mod tests;

use crate::assets::{tokens, AssetExporter, FigmaClient};
use crate::classifier::{Bubble, BubbleState, ClickSource, MessageWatcherHandle, ShellEvent, Surface};
use crate::config::{AppConfig, FigmaConfig, ShellConfig};
use crate::error::AppError;
use crate::patch::PatchOutcome;
use crate::router::{Dispatcher, Navigation, Navigator, PathContext, RouteTable};
use crate::ui::{Debouncer, LayoutClass, NotificationCenter, PanelId, PanelRegistry, TabStrip, UiEvent};
use async_trait::async_trait;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio::io::AsyncBufReadExt;
use tracing::{error, info};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry};

#[derive(Parser)]
#[command(name = "shopfront", version, about = "Shopfront Assistant prototype interaction core")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the interactive prototype shell (default)
    Shell,
    /// Export icons, images and color tokens from Figma
    ExportAssets,
    /// Apply the one-shot logo page header fix to an HTML file
    Patch {
        /// HTML file to patch
        #[arg(default_value = "pages/generate-logo.html")]
        file: PathBuf,
    },
}

fn init_telemetry() -> Result<(), AppError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let formatting_layer = BunyanFormattingLayer::new("shopfront-core".into(), std::io::stderr);
    let subscriber = Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer);
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| AppError::Internal(format!("failed to install tracing subscriber: {}", e)))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_telemetry()?;

    let cli = Cli::parse();
    let config = AppConfig::load()?;

    match cli.command.unwrap_or(Command::Shell) {
        Command::Shell => run_shell(&config).await?,
        Command::ExportAssets => run_export(&config).await?,
        Command::Patch { file } => run_patch(file)?,
    }

    Ok(())
}

/// Navigator for the interactive shell: resolves page ids against the route
/// table, tracks the simulated location, and surfaces notices through the
/// notification center.
struct ConsoleNavigator {
    routes: RouteTable,
    location: Mutex<PathContext>,
    notifications: Mutex<NotificationCenter>,
}

impl ConsoleNavigator {
    fn new(shell: &ShellConfig) -> Self {
        Self {
            routes: RouteTable::new(),
            location: Mutex::new(PathContext::Root),
            notifications: Mutex::new(NotificationCenter::new(shell.notification_ttl)),
        }
    }
}

#[async_trait]
impl Navigator for ConsoleNavigator {
    async fn navigate(&self, page_id: &str) -> Result<(), AppError> {
        let location = *self
            .location
            .lock()
            .map_err(|_| AppError::Internal("location lock poisoned".to_string()))?;

        match self.routes.resolve(page_id, location) {
            Navigation::Open(url) => {
                info!(%url, "navigating");
                println!("opening {}", url);
                *self
                    .location
                    .lock()
                    .map_err(|_| AppError::Internal("location lock poisoned".to_string()))? =
                    PathContext::from_location(&url);
            }
            Navigation::Notice(message) => self.notify(&message).await?,
        }
        Ok(())
    }

    async fn notify(&self, message: &str) -> Result<(), AppError> {
        let mut center = self
            .notifications
            .lock()
            .map_err(|_| AppError::Internal("notification lock poisoned".to_string()))?;
        center.post(message);
        println!("[notice] {}", message);
        Ok(())
    }
}

const SHELL_HELP: &str = "\
Type a chat message to route it, or one of:
  /click <label>    simulate a CTA button click in the chat interface
  /panel <actions|chats>   toggle a shell panel
  /tab [tag]        switch the active nav tab (no tag: show the active one)
  /esc              press Escape (closes open panels)
  /out              click outside the panels (closes them too)
  /resize <width>   resize the viewport (debounced)
  /notice           show the visible notification, if any
  /bubbles          list tracked message bubbles and their states
  quit              exit";

async fn run_shell(config: &AppConfig) -> Result<(), AppError> {
    let navigator = Arc::new(ConsoleNavigator::new(&config.shell));
    let dispatcher = Dispatcher::new(navigator.clone(), config.shell.nav_delay);
    let watcher = MessageWatcherHandle::new();

    // The pages ship with a pre-rendered transcript; sweep it the way the
    // page does on load.
    let seeded = watcher
        .seed(vec![
            Bubble::new(
                "how do customers find my shop online",
                vec![Surface::ChatInterface, Surface::ChatMessages],
            ),
            Bubble::new("Looks Good", vec![Surface::ChatInterface, Surface::ChatMessages]),
        ])
        .await?;
    info!(count = seeded, "seeded existing chat transcript");

    let mut panels = PanelRegistry::new();
    panels.wire();
    let mut tabs = TabStrip::new(["overview", "websites", "marketing", "domains"]);
    let mut debouncer = Debouncer::new(config.shell.resize_debounce);

    println!("Shopfront Assistant prototype shell");
    println!("tabs: {}", tabs.tags().join(", "));
    println!("{}", SHELL_HELP);

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim().to_string();

        if input == "quit" || input == "exit" {
            break;
        }
        if let Some(command) = input.strip_prefix('/') {
            handle_shell_command(command, &watcher, &mut panels, &mut tabs, &mut debouncer, &navigator)
                .await?;
            continue;
        }
        if input.is_empty() {
            dispatcher.submit("").await?;
            continue;
        }

        // A typed message becomes a bubble first, then gets routed. The
        // explicit sent-mark only fires for bubbles still in the typing
        // state, so the classifier's verdict on short replies stands.
        let bubble = Bubble::new(&input, vec![Surface::ChatInterface, Surface::ChatMessages]);
        let id = bubble.id;
        watcher.publish(ShellEvent::BubbleAdded(bubble)).await?;

        dispatcher.submit(&input).await?;

        if watcher.state_of(id).await? == Some(BubbleState::Typing) {
            watcher.mark(id, BubbleState::Sent).await?;
        }
    }

    Ok(())
}

async fn handle_shell_command(
    command: &str,
    watcher: &MessageWatcherHandle,
    panels: &mut PanelRegistry,
    tabs: &mut TabStrip,
    debouncer: &mut Debouncer,
    navigator: &Arc<ConsoleNavigator>,
) -> Result<(), AppError> {
    let (name, arg) = match command.split_once(' ') {
        Some((name, arg)) => (name, arg.trim()),
        None => (command, ""),
    };

    match name {
        "click" if !arg.is_empty() => {
            let source = ClickSource {
                tag: "button".to_string(),
                classes: vec!["action-btn".to_string()],
                surfaces: vec![Surface::ChatInterface],
            };
            watcher
                .publish(ShellEvent::ButtonClicked {
                    label: arg.to_string(),
                    source,
                })
                .await?;
            // CTA buttons mirror their label into the chat.
            watcher
                .publish(ShellEvent::BubbleAdded(Bubble::new(
                    arg,
                    vec![Surface::ChatInterface, Surface::ChatMessages],
                )))
                .await?;
            println!("clicked \"{}\"", arg);
        }
        "panel" => {
            let panel = match arg {
                "actions" => Some(PanelId::QuickActions),
                "chats" => Some(PanelId::RecentChats),
                _ => None,
            };
            match panel {
                Some(panel) => {
                    panels.handle(UiEvent::TriggerPressed(panel));
                    print_panel_state(panels);
                }
                None => println!("usage: /panel <actions|chats>"),
            }
        }
        "tab" if !arg.is_empty() => match tabs.activate(arg) {
            Some(message) => navigator.notify(&message).await?,
            None => println!("unknown tab: {}", arg),
        },
        "tab" => println!("active tab: {}", tabs.active_tag().unwrap_or("none")),
        "esc" => {
            panels.handle(UiEvent::EscapePressed);
            print_panel_state(panels);
        }
        "out" => {
            panels.handle(UiEvent::OutsideClick);
            print_panel_state(panels);
        }
        "notice" => {
            let mut center = navigator
                .notifications
                .lock()
                .map_err(|_| AppError::Internal("notification lock poisoned".to_string()))?;
            center.sweep();
            match center.active() {
                Some(message) => println!("visible: {}", message),
                None => println!("no visible notification"),
            }
        }
        "resize" => match arg.parse::<u32>() {
            Ok(width) => {
                debouncer.call(move || {
                    println!("layout: {:?}", LayoutClass::from_width(width));
                });
            }
            Err(_) => println!("usage: /resize <width>"),
        },
        "bubbles" => {
            for bubble in watcher.snapshot().await? {
                let state = bubble
                    .state
                    .map(|s| s.class_name())
                    .unwrap_or("unclassified");
                println!("  [{}] {}", state, bubble.text);
            }
        }
        _ => println!("{}", SHELL_HELP),
    }

    Ok(())
}

fn print_panel_state(panels: &PanelRegistry) {
    println!(
        "open: {:?} (actions active: {}, chats active: {})",
        panels.open_panel(),
        panels.is_active(PanelId::QuickActions),
        panels.is_active(PanelId::RecentChats)
    );
}

async fn run_export(config: &AppConfig) -> Result<(), AppError> {
    let figma = FigmaConfig::from_env()?;
    let client = FigmaClient::new(&figma.token);
    let exporter = AssetExporter::new(&client, &figma.file_key);

    info!("starting Figma asset export");

    // Each step is isolated: a failed step logs and the run moves on.
    match exporter.export(&config.export.icons).await {
        Ok(count) => info!(count, "icons exported"),
        Err(e) => error!(error = %e, "icon export failed"),
    }
    match exporter.export(&config.export.images).await {
        Ok(count) => info!(count, "images exported"),
        Err(e) => error!(error = %e, "image export failed"),
    }
    match tokens::extract_colors(&client, &figma.file_key, &config.export.tokens_path).await {
        Ok(count) => info!(count, "color tokens extracted"),
        Err(e) => error!(error = %e, "token extraction failed"),
    }

    info!("Figma export finished");
    Ok(())
}

fn run_patch(file: PathBuf) -> Result<(), AppError> {
    let patch = patch::logo_sidebar_header_fix(file);
    match patch.apply()? {
        PatchOutcome::Applied => println!("Header restoration fix applied successfully!"),
        PatchOutcome::NotFound => println!("Target block not found; file left unchanged."),
    }
    Ok(())
}
