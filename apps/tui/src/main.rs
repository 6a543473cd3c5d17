use clap::Parser;
use color_eyre::Result;
use ner_dashboard::api::ApiClient;
use ner_dashboard::app::{App, AppActions};
use ner_dashboard::cli::CliArgs;
use ner_dashboard::config::Config;
use ner_dashboard::{event, logging, terminal};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let config = Config::from_env()?;
    let client = ApiClient::new(&config.api_url)?;

    // Check if we're running in a terminal
    if args.wants_headless() || !is_terminal() {
        logging::init_stderr(config.debug);
        return event::run_headless(&client, args.predict.as_deref(), args.json).await;
    }

    logging::init_file(&config.log_file, config.debug)?;
    info!(api_url = %config.api_url, "starting dashboard");

    let (actions, mut events) = AppActions::new(client);
    let mut app = App::new(actions);

    // Setup terminal
    let mut terminal = terminal::setup()?;

    // Run the application
    let result = event::run(&mut terminal, &mut app, &mut events).await;

    // Restore terminal
    terminal::cleanup(true, true);

    result
}

fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
