use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use navlink_cli::{
    config::{ConfigError, RuntimeConfig},
    error::AppError,
    feedback,
    input::{self, RouteArgs, RouteRequest},
    service,
};
use navlink_core::{App, DeepLink, TransportMode, build, supported_modes, supports};

#[derive(Debug, Parser)]
#[command(author, version, about = "Directions deep-link workflow CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Build app deep links for a route and print them.
    Route {
        #[command(flatten)]
        route: RouteOptions,
        /// Build a single link for this app id instead of one per configured app.
        #[arg(long)]
        app: Option<String>,
        /// Output mode: Alfred JSON, service envelope JSON, or plain URLs.
        #[arg(long, value_enum, default_value_t = OutputMode::Alfred)]
        output: OutputMode,
    },
    /// List the app catalog and which transport modes each app accepts.
    Apps {
        /// Transport mode to check support for.
        #[arg(long)]
        mode: Option<String>,
        /// Output mode: Alfred JSON, service envelope JSON, or plain lines.
        #[arg(long, value_enum, default_value_t = OutputMode::Alfred)]
        output: OutputMode,
    },
}

#[derive(Debug, Args)]
struct RouteOptions {
    /// Destination as "lat,lng".
    #[arg(long)]
    to: String,
    /// Destination display name.
    #[arg(long)]
    to_name: Option<String>,
    /// Destination street address.
    #[arg(long)]
    to_address: Option<String>,
    /// Origin as "lat,lng"; omit to start from the current location.
    #[arg(long)]
    from: Option<String>,
    /// Origin display name.
    #[arg(long)]
    from_name: Option<String>,
    /// Origin street address.
    #[arg(long)]
    from_address: Option<String>,
    /// Transport mode: driving, walking, bicycling, transit or taxi.
    #[arg(long)]
    mode: Option<String>,
}

impl From<RouteOptions> for RouteArgs {
    fn from(options: RouteOptions) -> Self {
        Self {
            to: options.to,
            to_name: options.to_name,
            to_address: options.to_address,
            from: options.from,
            from_name: options.from_name,
            from_address: options.from_address,
            mode: options.mode,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
enum OutputMode {
    Alfred,
    ServiceJson,
    Plain,
}

impl Cli {
    fn command_name(&self) -> &'static str {
        match &self.command {
            Commands::Route { .. } => "route",
            Commands::Apps { .. } => "apps",
        }
    }

    fn output_mode(&self) -> OutputMode {
        match &self.command {
            Commands::Route { output, .. } => *output,
            Commands::Apps { output, .. } => *output,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command_name();
    let output = cli.output_mode();

    match run(cli) {
        Ok(rendered) => {
            println!("{rendered}");
        }
        Err(error) => {
            match output {
                OutputMode::ServiceJson => {
                    println!("{}", service::error_envelope(command, &error));
                }
                OutputMode::Alfred | OutputMode::Plain => {
                    eprintln!("error: {}", error.message);
                }
            }
            std::process::exit(error.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<String, AppError> {
    run_with(cli, RuntimeConfig::from_env)
}

fn run_with<LoadConfig>(cli: Cli, load_config: LoadConfig) -> Result<String, AppError>
where
    LoadConfig: Fn() -> Result<RuntimeConfig, ConfigError>,
{
    let command = cli.command_name();
    match cli.command {
        Commands::Route { route, app, output } => {
            let mut request = input::parse_route(&RouteArgs::from(route))?;
            let app = app
                .as_deref()
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::parse::<App>)
                .transpose()?;
            let config = load_config()?;
            request.mode = config.effective_mode(request.mode);

            match app {
                Some(app) => render_single_link(command, app, &request, output),
                None => render_route(command, &request, &config, output),
            }
        }
        Commands::Apps { mode, output } => {
            let mode = input::parse_mode(mode.as_deref())?;
            let config = load_config()?;
            let mode = config.effective_mode(mode);
            render_apps(command, mode, &config, output)
        }
    }
}

#[derive(Debug, Serialize)]
struct LinkResult<'a> {
    app: App,
    name: &'static str,
    mode: Option<TransportMode>,
    link: &'a DeepLink,
}

#[derive(Debug, Serialize)]
struct CatalogEntry {
    app: App,
    name: &'static str,
    scheme: &'static str,
    modes: Vec<TransportMode>,
    supported: bool,
}

fn render_single_link(
    command: &'static str,
    app: App,
    request: &RouteRequest,
    output: OutputMode,
) -> Result<String, AppError> {
    let link = build(app, request.origin(), &request.destination, request.mode)
        .ok_or_else(|| AppError::user(feedback::unsupported_reason(app, request.mode)))?;
    let url = checked_url(&link)?;

    match output {
        OutputMode::Plain => Ok(url),
        OutputMode::Alfred => {
            alfred_core::Feedback::single(feedback::link_item(app, &link, request.mode))
                .to_json()
                .map_err(|err| AppError::runtime(format!("failed to serialize feedback: {err}")))
        }
        OutputMode::ServiceJson => service::success_envelope(
            command,
            &LinkResult {
                app,
                name: app.display_name(),
                mode: request.mode,
                link: &link,
            },
        ),
    }
}

fn render_route(
    command: &'static str,
    request: &RouteRequest,
    config: &RuntimeConfig,
    output: OutputMode,
) -> Result<String, AppError> {
    match output {
        OutputMode::Plain => {
            let lines = config
                .apps
                .iter()
                .filter_map(|app| {
                    build(*app, request.origin(), &request.destination, request.mode)
                        .map(|link| (*app, link))
                })
                .map(|(app, link)| {
                    checked_url(&link).map(|url| format!("{}\t{url}", app.as_str()))
                })
                .collect::<Result<Vec<_>, _>>()?;

            if lines.is_empty() {
                return Err(AppError::user("no configured app can open this route"));
            }
            Ok(lines.join("\n"))
        }
        OutputMode::Alfred => feedback::route_feedback(request, config)
            .to_json()
            .map_err(|err| AppError::runtime(format!("failed to serialize feedback: {err}"))),
        OutputMode::ServiceJson => {
            service::success_envelope(command, &feedback::route_feedback(request, config))
        }
    }
}

fn render_apps(
    command: &'static str,
    mode: Option<TransportMode>,
    config: &RuntimeConfig,
    output: OutputMode,
) -> Result<String, AppError> {
    match output {
        OutputMode::Plain => Ok(config
            .apps
            .iter()
            .filter(|app| mode.is_none() || (supports(**app, mode) && !app.is_platform_native()))
            .map(|app| {
                let modes = supported_modes(*app)
                    .into_iter()
                    .map(TransportMode::as_str)
                    .collect::<Vec<_>>()
                    .join(",");
                format!("{}\t{}\t{modes}", app.as_str(), app.display_name())
            })
            .collect::<Vec<_>>()
            .join("\n")),
        OutputMode::Alfred => feedback::apps_feedback(mode, config)
            .to_json()
            .map_err(|err| AppError::runtime(format!("failed to serialize feedback: {err}"))),
        OutputMode::ServiceJson => {
            let entries: Vec<CatalogEntry> = config
                .apps
                .iter()
                .map(|app| CatalogEntry {
                    app: *app,
                    name: app.display_name(),
                    scheme: app.url_scheme(),
                    modes: supported_modes(*app),
                    supported: supports(*app, mode),
                })
                .collect();
            service::success_envelope(command, &entries)
        }
    }
}

/// Renders `link` after checking that it parses as an absolute URL.
fn checked_url(link: &DeepLink) -> Result<String, AppError> {
    link.to_url()
        .map(|_| link.to_string())
        .map_err(|err| AppError::runtime(format!("invalid deep link {link}: {err}")))
}
