use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser};
use clap_complete::{generate, Shell};
use log::LevelFilter;
use spellcheck::cli::output::{self, OutputFormat};
use spellcheck::{dict, Config, SpellChecker};
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spellcheck")]
#[command(version, about = "A minimal dictionary spellchecker", long_about = None)]
struct Cli {
    /// Files to check (reads stdin when empty or "-")
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Language of the installed dictionary to use (e.g., en_US)
    #[arg(short, long)]
    language: Option<String>,

    /// Word list to use instead of an installed dictionary
    #[arg(short, long, value_name = "PATH")]
    dictionary: Option<PathBuf>,

    /// Personal dictionary file
    #[arg(long, value_name = "PATH")]
    personal_dict: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if errors are found
    #[arg(long)]
    no_fail: bool,

    /// Scan the dictionary on a single thread
    #[arg(long)]
    sequential: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Dictionary management
    Dict {
        #[command(subcommand)]
        action: DictCommands,
    },
}

#[derive(Parser, Debug)]
enum DictCommands {
    /// List installed dictionaries
    List,
    /// Install a dictionary from a word list (one word per line)
    Install {
        /// Language code (e.g., en_US, en_GB, fr_FR)
        language: String,
        /// Word list file
        wordlist: PathBuf,
    },
    /// Show dictionary info
    Info {
        /// Language code
        language: String,
    },
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "spellcheck", &mut io::stdout());
        return Ok(());
    }

    // Handle subcommands
    if let Some(command) = cli.command {
        return handle_command(command);
    }

    let mut config = Config::load(
        cli.language.clone(),
        cli.dictionary.clone(),
        cli.personal_dict.clone(),
    )?;
    if cli.sequential {
        config.parallel = false;
    }

    let checker = SpellChecker::new(&config)?;
    let colored = !cli.no_color;

    let inputs = if cli.files.is_empty() {
        vec![PathBuf::from("-")]
    } else {
        cli.files.clone()
    };

    let mut total_errors = 0;
    let mut files_checked = 0;

    for file_path in &inputs {
        let (name, report) = if file_path.as_os_str() == "-" {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read stdin")?;
            ("<stdin>".to_string(), checker.check_str(&source))
        } else {
            if !file_path.exists() {
                log::error!("File not found: {}", file_path.display());
                continue;
            }
            (
                file_path.display().to_string(),
                checker.check_file(file_path)?,
            )
        };

        output::print_errors(&name, &report, colored, cli.format, config.max_suggestions)?;
        total_errors += report.error_count();
        files_checked += 1;
    }

    if cli.format == OutputFormat::Text {
        output::print_check_summary(total_errors, files_checked, colored);
    }

    // Exit with appropriate code
    if total_errors > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}

fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Dict { action } => match action {
            DictCommands::List => {
                dict::manager::list_dictionaries()?;
            }
            DictCommands::Install { language, wordlist } => {
                dict::manager::install_dictionary(&language, &wordlist)?;
            }
            DictCommands::Info { language } => {
                dict::manager::show_info(&language)?;
            }
        },
    }
    Ok(())
}
