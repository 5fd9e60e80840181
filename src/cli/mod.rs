pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{CliArgs, Commands, DetectArgs, FrameworksArgs, OutputFormatArg, TemplateArgs};
pub use handlers::{handle_detect, handle_frameworks, handle_template};
pub use output::{OutputFormat, OutputFormatter};
