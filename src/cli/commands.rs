use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Framework detection for deployment scaffolding
#[derive(Parser, Debug)]
#[command(
    name = "framescout",
    about = "Detect the web framework of a source tree and emit a deployment manifest",
    version,
    author,
    long_about = "framescout inspects a directory tree, ranks the frameworks it finds by \
                  weighted evidence (files, directories, file contents, manifest \
                  dependencies) including nested sub-projects, and prints a matching \
                  deployment-manifest template."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Detect frameworks in a directory tree",
        long_about = "Scores every known framework against the directory and every nested \
                      project below it, then prints the candidates ranked by certainty.\n\n\
                      Examples:\n  \
                      framescout detect\n  \
                      framescout detect /path/to/repo\n  \
                      framescout detect --format json --top 3"
    )]
    Detect(DetectArgs),

    #[command(
        about = "Print the deployment manifest template for a framework",
        long_about = "Prints the manifest template registered for a framework id. Frameworks \
                      with build-mode variants inspect --path to pick one. Unknown ids \
                      print the default template.\n\n\
                      Examples:\n  \
                      framescout template nextjs\n  \
                      framescout template nuxt --path ./web -o deploy.yaml"
    )]
    Template(TemplateArgs),

    #[command(about = "List the frameworks framescout can detect")]
    Frameworks(FrameworksArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct DetectArgs {
    #[arg(
        value_name = "PATH",
        help = "Directory to scan (defaults to current directory)"
    )]
    pub path: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(
        long,
        value_name = "N",
        help = "Deepest directory level scanned for nested projects (overrides FRAMESCOUT_MAX_DEPTH)"
    )]
    pub max_depth: Option<usize>,

    #[arg(long, value_name = "N", help = "Only show the N most likely frameworks")]
    pub top: Option<usize>,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write output to file instead of stdout"
    )]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct TemplateArgs {
    #[arg(value_name = "FRAMEWORK", help = "Framework id, e.g. nextjs or spring-boot")]
    pub framework: String,

    #[arg(
        short = 'p',
        long,
        value_name = "DIR",
        help = "Directory inspected to choose a template variant (defaults to current directory)"
    )]
    pub path: Option<PathBuf>,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write the template to file instead of stdout"
    )]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct FrameworksArgs {
    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}
