use clap::{Parser, Subcommand};

use harf_cli::commands::{config_ops, convert_ops};

#[derive(Parser)]
#[command(name = "harftool", about = "Arabic-to-Latin transliteration tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate a text argument
    Convert {
        /// Text to transliterate
        text: String,
        /// Custom scheme TOML file (default: embedded scheme)
        #[arg(long)]
        scheme: Option<String>,
    },
    /// Transliterate a file ("-" for stdin)
    ConvertFile {
        /// Input file
        input_file: String,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
        /// Custom scheme TOML file (default: embedded scheme)
        #[arg(long)]
        scheme: Option<String>,
    },
    /// Report how much of a file the scheme maps
    Coverage {
        /// Input file ("-" for stdin)
        input_file: String,
        /// Custom scheme TOML file (default: embedded scheme)
        #[arg(long)]
        scheme: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Export the default scheme as TOML
    SchemeExport,
    /// Validate a custom scheme TOML file
    SchemeValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Convert { text, scheme } => convert_ops::convert_cmd(&text, scheme.as_deref()),
        Command::ConvertFile {
            input_file,
            output,
            scheme,
        } => convert_ops::convert_file_cmd(&input_file, output.as_deref(), scheme.as_deref()),
        Command::Coverage {
            input_file,
            scheme,
            json,
        } => convert_ops::coverage_cmd(&input_file, scheme.as_deref(), json),
        Command::SchemeExport => config_ops::scheme_export(),
        Command::SchemeValidate { file } => config_ops::scheme_validate(&file),
    }
}
