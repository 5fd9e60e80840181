use framescout::cli::commands::{CliArgs, Commands};
use framescout::cli::handlers::{handle_detect, handle_frameworks, handle_template};
use framescout::config::ScoutConfig;
use framescout::util::logging::{init_logging, parse_level, LoggingConfig};
use framescout::VERSION;

use clap::Parser;
use tracing::{debug, Level};

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();
    let config = match ScoutConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    init_logging_from_args(&args, &config);

    debug!("framescout v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Detect(detect_args) => handle_detect(detect_args, &config).await,
        Commands::Template(template_args) => handle_template(template_args),
        Commands::Frameworks(frameworks_args) => handle_frameworks(frameworks_args),
    };

    std::process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs, config: &ScoutConfig) {
    let mut logging = LoggingConfig::from_scout_config(config);

    if let Some(level_str) = &args.log_level {
        logging.level = parse_level(level_str);
    } else if args.verbose {
        logging.level = Level::DEBUG;
    } else if args.quiet {
        logging.level = Level::ERROR;
    }

    init_logging(logging);
}
