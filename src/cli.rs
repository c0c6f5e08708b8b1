use clap::{Parser, Subcommand};

use research_console::ColorMode;

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Command {
    /// List modules in sidebar order with their effective URLs
    Modules {
        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
        /// Page origin used when GATEWAY_URL is unset (default: RESEARCH_CONSOLE_ORIGIN or http://localhost:8080)
        #[arg(long)]
        origin: Option<String>,
    },

    /// List image tagger surfaces with their effective URLs
    Surfaces {
        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
        /// Page origin used when GATEWAY_URL is unset
        #[arg(long)]
        origin: Option<String>,
    },

    /// Print the effective URL for one module (or one tagger surface)
    Resolve {
        /// Module id: graphical, tagger, article or graph
        module: String,
        /// Tagger surface: workbench, monitor, explorer or admin
        #[arg(long)]
        surface: Option<String>,
        /// Page origin used when GATEWAY_URL is unset
        #[arg(long)]
        origin: Option<String>,
    },

    /// Show configuration sources and probe each module endpoint
    Doctor {
        /// Page origin used when GATEWAY_URL is unset
        #[arg(long)]
        origin: Option<String>,
        /// TCP connect timeout per endpoint in milliseconds
        #[arg(long, default_value_t = 300)]
        timeout_ms: u64,
    },

    /// Serve the console shell over HTTP
    Serve {
        /// Listen address (default: RESEARCH_CONSOLE_BIND or 127.0.0.1:8080)
        #[arg(long)]
        bind: Option<String>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "research-console",
    version,
    about = "Unified research console: resolve module URLs from the environment and serve the embedding shell.",
    after_long_help = "Configuration:\n  GATEWAY_URL        gateway origin (default: page origin)\n  GRAPHICAL_UI_URL   graphical model override\n  TAGGER_UI_URL      image tagger override (any surface URL works)\n  ARTICLE_UI_URL     article eater override\n  GRAPH_UI_URL       knowledge graph override\n\nExamples:\n  research-console modules --json\n  research-console resolve tagger --surface admin\n  research-console serve --bind 0.0.0.0:8080\n"
)]
pub(crate) struct Cli {
    /// Print detailed execution info (enables info-level logging)
    #[arg(long, global = true)]
    pub(crate) verbose: bool,

    /// Suppress startup banner output
    #[arg(long, short = 'q', global = true)]
    pub(crate) quiet: bool,

    /// Colorize output: auto|always|never
    #[arg(long = "color", value_enum, global = true)]
    pub(crate) color: Option<ColorMode>,

    #[command(subcommand)]
    pub(crate) command: Command,
}
