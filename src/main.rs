use clap::{Parser, Subcommand};
use filmstrip::catalog::{FileTemplateProvider, HttpTemplateProvider, TemplateProvider};
use filmstrip::core::config::{self, CliOverrides, ResolvedConfig};
use filmstrip::server::{self, AppState};
use filmstrip::tui;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, SharedLogger, TermLogger,
    TerminalMode, WriteLogger,
};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

const LOG_FILE: &str = "filmstrip.log";

#[derive(Parser)]
#[command(name = "filmstrip", about = "Paginated template filmstrip: JSON endpoint and terminal viewer")]
struct Args {
    /// Config file to use instead of ~/.filmstrip/config.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve GET /api/templates and the image assets
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Templates JSON document
        #[arg(short, long)]
        data: Option<PathBuf>,
        /// Directory served under /imagesList
        #[arg(long)]
        public: Option<PathBuf>,
    },
    /// Browse the templates in the terminal
    View {
        /// Base URL of a running `filmstrip serve`
        #[arg(short, long, conflicts_with = "data")]
        endpoint: Option<String>,
        /// Read the templates document directly instead of over HTTP
        #[arg(short, long)]
        data: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    init_logging(matches!(args.command, Command::Serve { .. }));

    let file_config = match args.config {
        Some(ref path) => config::load_config_from(path)?,
        None => config::load_config().unwrap_or_else(|e| {
            log::warn!("Ignoring unreadable config: {}", e);
            Default::default()
        }),
    };

    match args.command {
        Command::Serve {
            host,
            port,
            data,
            public,
        } => {
            let cli = CliOverrides {
                host,
                port,
                data_file: data,
                public_dir: public,
                ..Default::default()
            };
            let resolved = config::resolve(&file_config, &cli);
            serve(resolved).await?;
        }
        Command::View { endpoint, data } => {
            let direct = data.is_some();
            let cli = CliOverrides {
                data_file: data,
                endpoint,
                ..Default::default()
            };
            let resolved = config::resolve(&file_config, &cli);
            let provider: Arc<dyn TemplateProvider> = if direct {
                log::info!("Viewer reading {}", resolved.data_file.display());
                Arc::new(FileTemplateProvider::new(resolved.data_file))
            } else {
                log::info!("Viewer fetching from {}", resolved.endpoint);
                Arc::new(HttpTemplateProvider::new(resolved.endpoint))
            };
            tui::run(provider)?;
        }
    }

    Ok(())
}

async fn serve(config: ResolvedConfig) -> Result<(), Box<dyn std::error::Error>> {
    log::info!("Templates document: {}", config.data_file.display());
    if let Some(ref dir) = config.public_dir {
        log::info!("Public directory: {}", dir.display());
    } else {
        log::warn!("No public directory, image assets will not be served");
    }

    let addr: std::net::SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let state = AppState {
        provider: Arc::new(FileTemplateProvider::new(config.data_file)),
        public_dir: config.public_dir,
    };
    server::serve(state, addr).await?;
    Ok(())
}

/// File logger always; terminal logger too when the terminal isn't owned by the UI.
fn init_logging(to_terminal: bool) {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if to_terminal {
        loggers.push(TermLogger::new(
            LevelFilter::Info,
            log_config.clone(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }
    if let Ok(log_file) = File::create(LOG_FILE) {
        loggers.push(WriteLogger::new(LevelFilter::Debug, log_config, log_file));
    }
    let _ = CombinedLogger::init(loggers);
}
