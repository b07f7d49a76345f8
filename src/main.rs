// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use comments_dashboard::utils::LoadingSpinner;
use comments_dashboard::utils::logging::{
    format_error, format_info, format_success, format_warning,
};
use comments_dashboard::view::{footer, nav_bar};
use comments_dashboard::{
    ApiClient, Config, DashboardView, LoadState, PageSize, ProfileView, Route, SortColumn,
    ViewAction, ViewLifetime, ViewStateStore,
};
use std::path::PathBuf;
use tracing::{debug, info, warn};

#[derive(Parser)]
#[command(name = "comments_dashboard")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Browse remote comments with search, sorting and pagination", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the comments table, applying any interactions given
    Dashboard {
        #[command(flatten)]
        interactions: Interactions,
    },

    /// Show the profile of the first user
    Profile,

    /// Open a view by its path ("/" or "/profile")
    Open { path: Route },

    /// Inspect or clear the saved dashboard state
    State {
        #[command(subcommand)]
        action: StateCommand,
    },
}

#[derive(Subcommand)]
enum StateCommand {
    Show,
    Reset,
}

/// Applied in declaration order: filters, rows per page, sort toggles, then
/// page navigation.
#[derive(clap::Args)]
struct Interactions {
    /// Search by name
    #[arg(long, value_name = "TEXT")]
    name: Option<String>,

    /// Search by email
    #[arg(long, value_name = "TEXT")]
    email: Option<String>,

    /// Search by phone (not provided by the API)
    #[arg(long, value_name = "TEXT")]
    phone: Option<String>,

    /// Rows per page: 10, 50 or 100
    #[arg(long, value_name = "N", value_parser = parse_rows)]
    rows: Option<PageSize>,

    /// Toggle sorting on a column (postId, name, email, ...); repeatable
    #[arg(long, value_name = "COLUMN")]
    sort: Vec<SortColumn>,

    /// Jump to a page
    #[arg(long, value_name = "N")]
    page: Option<usize>,

    #[arg(long, action = ArgAction::SetTrue)]
    first: bool,

    #[arg(long, action = ArgAction::SetTrue)]
    prev: bool,

    #[arg(long, action = ArgAction::SetTrue)]
    next: bool,

    #[arg(long, action = ArgAction::SetTrue)]
    last: bool,
}

impl Interactions {
    fn into_actions(self) -> Vec<ViewAction> {
        let mut actions = Vec::new();

        if let Some(name) = self.name {
            actions.push(ViewAction::FilterName(name));
        }
        if let Some(email) = self.email {
            actions.push(ViewAction::FilterEmail(email));
        }
        if let Some(phone) = self.phone {
            actions.push(ViewAction::FilterPhone(phone));
        }
        if let Some(rows) = self.rows {
            actions.push(ViewAction::RowsPerPage(rows));
        }
        actions.extend(self.sort.into_iter().map(ViewAction::ToggleSort));
        if let Some(page) = self.page {
            actions.push(ViewAction::GoToPage(page));
        }
        if self.first {
            actions.push(ViewAction::FirstPage);
        }
        if self.prev {
            actions.push(ViewAction::PreviousPage);
        }
        if self.next {
            actions.push(ViewAction::NextPage);
        }
        if self.last {
            actions.push(ViewAction::LastPage);
        }

        actions
    }
}

fn parse_rows(value: &str) -> std::result::Result<PageSize, String> {
    let rows: usize = value
        .parse()
        .map_err(|_| format!("not a number: {}", value))?;
    PageSize::try_from(rows).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    comments_dashboard::utils::logging::init_logger(cli.color, cli.verbose);
    colored::control::set_override(cli.color);

    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        debug!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::default_config()
    };

    match cli.command {
        Commands::Dashboard { interactions } => {
            cmd_dashboard(&config, interactions.into_actions(), cli.color).await?;
        }
        Commands::Profile => {
            cmd_profile(&config, cli.color).await?;
        }
        Commands::Open { path } => match path {
            Route::Dashboard => cmd_dashboard(&config, Vec::new(), cli.color).await?,
            Route::Profile => cmd_profile(&config, cli.color).await?,
        },
        Commands::State { action } => {
            cmd_state(&config, action)?;
        }
    }

    Ok(())
}

/// A lifetime that is cancelled when the user interrupts the process.
fn interruptible_lifetime() -> ViewLifetime {
    let lifetime = ViewLifetime::new();
    let watcher = lifetime.clone();

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            debug!("Interrupted, closing view");
            watcher.cancel();
        }
    });

    lifetime
}

async fn cmd_dashboard(config: &Config, actions: Vec<ViewAction>, color: bool) -> Result<()> {
    let api = ApiClient::new(&config.api).context("Failed to create API client")?;
    let store = ViewStateStore::open(&config.storage.path, config.storage.state_key.as_str());
    let mut view = DashboardView::mount(store, &config.dashboard);

    let lifetime = interruptible_lifetime();
    let spinner = LoadingSpinner::new("Loading comments…", color);
    let outcome = lifetime.run(api.fetch_comments()).await;
    spinner.finish();

    if !lifetime.commit(view.comments_mut(), outcome) {
        warn!("Dashboard closed before comments arrived");
        return Ok(());
    }

    if let LoadState::Failed(message) = view.comments() {
        debug!("Comments unavailable: {}", message);
        if !actions.is_empty() {
            warn!("Ignoring {} interaction(s), no data to act on", actions.len());
        }
        print_page(Route::Dashboard, &view.render());
        return Ok(());
    }

    if let Some(comments) = view.comments().loaded() {
        info!("Loaded {} comments", comments.len());
    }

    view.apply_all(actions);
    print_page(Route::Dashboard, &view.render());

    Ok(())
}

async fn cmd_profile(config: &Config, color: bool) -> Result<()> {
    let api = ApiClient::new(&config.api).context("Failed to create API client")?;
    let mut view = ProfileView::mount();

    let lifetime = interruptible_lifetime();
    let spinner = LoadingSpinner::new("Loading profile…", color);
    let outcome = lifetime.run(api.fetch_profile()).await;
    spinner.finish();

    if !lifetime.commit(view.user_mut(), outcome) {
        warn!("Profile closed before data arrived");
        return Ok(());
    }

    print_page(Route::Profile, &view.render());
    Ok(())
}

fn cmd_state(config: &Config, action: StateCommand) -> Result<()> {
    let mut store = ViewStateStore::open(&config.storage.path, config.storage.state_key.as_str());

    match action {
        StateCommand::Show => {
            match store.raw() {
                Some(raw) => println!("{}", format_info(&format!("{} = {}", store.key(), raw))),
                None => println!("{}", format_info("No saved view state, showing defaults")),
            }
            match store.peek() {
                Ok(state) => println!(
                    "{}",
                    serde_json::to_string_pretty(&state).context("Failed to encode view state")?
                ),
                Err(e) => println!(
                    "{}",
                    format_error(&format!("{}; the dashboard will start from defaults", e))
                ),
            }
        }
        StateCommand::Reset => {
            if store.clear().context("Failed to clear saved view state")? {
                println!("{}", format_success("Saved view state cleared"));
            } else {
                println!("{}", format_warning("Nothing to clear"));
            }
        }
    }

    Ok(())
}

fn print_page(route: Route, body: &str) {
    println!("{}", nav_bar(route));
    println!();
    println!("{}", body);
    println!();
    println!("{}", footer());
}
