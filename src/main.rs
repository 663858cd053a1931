use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;

use stringops::config::{ConfigOverrides, StringOpsConfig};
use stringops::logging::{init_logging, LogContext, PerformanceLogger};
use stringops::{CaseUtils, EscapeUtils, JoinUtils, StringUtils, UnicodeUtils};

#[derive(Parser)]
#[command(name = "stringops")]
#[command(about = "Lenient string helpers from the command line")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    verbose: bool,

    #[arg(short, long, global = true, help = "Configuration file path")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Truncate text and append a suffix if anything was cut
    Truncate {
        text: String,

        #[arg(short, long, help = "Maximum number of chars to keep")]
        size: Option<usize>,

        #[arg(long, help = "Suffix appended when truncated")]
        suffix: Option<String>,
    },

    /// Char-indexed substring with lenient bounds
    Substring {
        text: String,
        offset: usize,
        size: usize,
    },

    /// Backslash-escape control characters
    Encode {
        text: String,

        #[arg(long, help = "Control characters (defaults to config)")]
        chars: Option<String>,
    },

    /// Remove backslash escapes in front of control characters
    Decode {
        text: String,

        #[arg(long, help = "Control characters (defaults to config)")]
        chars: Option<String>,
    },

    /// Generate random strings
    Random {
        length: Option<usize>,

        #[arg(short, long, help = "Characters to draw from")]
        alphabet: Option<String>,

        #[arg(short = 'n', long, default_value_t = 1, help = "Number of strings")]
        count: usize,
    },

    /// under_score to camelCase
    Camel { text: String },

    /// camelCase to under_score
    Snake { text: String },

    /// Keep only XML-legal code points
    EscapeEmoji { text: String },

    /// Strip chars outside the BMP; reads raw bytes from stdin without TEXT
    FilterMb4 {
        text: Option<String>,

        #[arg(long, help = "Fail on malformed input instead of printing nothing")]
        strict: bool,
    },

    /// Wrap in SQL LIKE wildcards
    SqlLike { text: String },

    /// Lowercase and trim
    Normalize { text: String },

    /// Join non-blank values
    Join {
        values: Vec<String>,

        #[arg(short, long, help = "Delimiter placed between values")]
        delimiter: Option<String>,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a default configuration file
    Init {
        path: Option<PathBuf>,

        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },

    /// Print the effective configuration
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => StringOpsConfig::load_from_file(path)?,
        None => StringOpsConfig::load()?,
    };
    ConfigOverrides::apply(&mut config);
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    config.validate()?;

    init_logging(&config.logging)?;
    let context = LogContext::new("cli", "startup")
        .with_string_field("version", env!("CARGO_PKG_VERSION"));
    stringops::log_info!(context, "stringops starting");

    match cli.command {
        Commands::Truncate { text, size, suffix } => {
            let size = size.unwrap_or(config.truncate.default_size);
            let suffix = suffix.unwrap_or_else(|| config.truncate.default_suffix.clone());
            println!("{}", StringUtils::truncate(text.as_str(), Some(size), &suffix));
        }
        Commands::Substring { text, offset, size } => {
            println!("{}", StringUtils::substring(text.as_str(), offset, size));
        }
        Commands::Encode { text, chars } => {
            let set = chars.map_or_else(|| config.control_set(), |chars| chars.as_str().into());
            println!("{}", EscapeUtils::encode_with(Some(text.as_str()), &set).unwrap_or_default());
        }
        Commands::Decode { text, chars } => {
            let set = chars.map_or_else(|| config.control_set(), |chars| chars.as_str().into());
            println!("{}", EscapeUtils::decode_with(Some(text.as_str()), &set).unwrap_or_default());
        }
        Commands::Random { length, alphabet, count } => {
            generate_random(&config, length, alphabet, count);
        }
        Commands::Camel { text } => println!("{}", CaseUtils::underline_to_camel(text.as_str())),
        Commands::Snake { text } => println!("{}", CaseUtils::camel_to_underline(text.as_str())),
        Commands::EscapeEmoji { text } => println!("{}", UnicodeUtils::escape_emoji(&text)),
        Commands::FilterMb4 { text, strict } => filter_mb4(text, strict)?,
        Commands::SqlLike { text } => println!("{}", StringUtils::sql_like(text.as_str())),
        Commands::Normalize { text } => println!("{}", StringUtils::normalize(text.as_str())),
        Commands::Join { values, delimiter } => {
            let values: Vec<Option<&str>> = values.iter().map(|v| Some(v.as_str())).collect();
            println!("{}", JoinUtils::concate(&values, delimiter.as_deref()));
        }
        Commands::Config { action } => run_config(&config, action)?,
    }

    Ok(())
}

fn generate_random(config: &StringOpsConfig, length: Option<usize>, alphabet: Option<String>, count: usize) {
    let length = length.unwrap_or(config.random.default_length);
    let options: Vec<char> = match alphabet {
        Some(alphabet) => alphabet.chars().collect(),
        None => config.alphabet(),
    };

    let context = LogContext::new("cli", "random")
        .with_number_field("length", length as i64)
        .with_number_field("count", count as i64);
    stringops::log_debug!(context, "Generating random strings");

    let perf = PerformanceLogger::new(context);
    let mut generator = config.generator();
    for _ in 0..count {
        println!("{}", generator.generate(length, &options));
    }
    perf.finish("Random strings generated");
}

fn filter_mb4(text: Option<String>, strict: bool) -> Result<()> {
    let bytes = match text {
        Some(text) => text.into_bytes(),
        None => {
            let mut buffer = Vec::new();
            std::io::stdin().read_to_end(&mut buffer)?;
            buffer
        }
    };

    let context = LogContext::new("cli", "filter_mb4")
        .with_number_field("bytes", bytes.len() as i64)
        .with_string_field("mode", if strict { "strict" } else { "lenient" });
    let perf = PerformanceLogger::new(context);

    if !strict {
        println!("{}", UnicodeUtils::filter_off_utf8mb4_bytes(&bytes));
        perf.finish("Filtered input");
        return Ok(());
    }

    match UnicodeUtils::try_filter_off_utf8mb4(&bytes) {
        Ok(filtered) => {
            println!("{}", filtered);
            perf.finish("Filtered input");
            Ok(())
        }
        Err(e) if e.is_input_error() => {
            perf.finish_with_error("Rejected malformed input", &e);
            eprintln!("stringops: {}", e);
            // EX_DATAERR
            std::process::exit(65);
        }
        Err(e) => {
            perf.finish_with_error("Filtering failed", &e);
            Err(e.into())
        }
    }
}

fn run_config(config: &StringOpsConfig, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Init { path, force } => {
            let target = path.unwrap_or_else(stringops::config::get_config_path);
            if target.exists() && !force {
                anyhow::bail!("{} already exists, pass --force to overwrite", target.display());
            }
            let saved = StringOpsConfig::default().save(Some(target.as_path()))?;
            println!("Configuration written to: {}", saved.display());
        }
        ConfigAction::Show => {
            print!("{}", toml::to_string_pretty(config)?);
        }
    }

    Ok(())
}
