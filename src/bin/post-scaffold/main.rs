use std::env;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use spdlog::{error, info, warn};

use post_scaffold::clock::SystemClock;
use post_scaffold::config::LogLevel;
use post_scaffold::editor::{resolve_editor, CommandLauncher, EditorLauncher};
use post_scaffold::logger::{configure_logger, LogSettings};
use post_scaffold::prompt::prompt_title;
use post_scaffold::{ScaffoldError, ScaffoldOptions, Scaffolder};

use crate::config::open_config;

mod config;

const MAX_TITLE_ATTEMPTS: usize = 3;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Title of the post. If empty, it is asked for on the terminal
    #[arg(short, long)]
    title: Option<String>,

    /// Config path
    #[arg(short, long = "config")]
    config_path: Option<PathBuf>,

    /// Site directory where the posts directory lives. Defaults to the current directory
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Editor command. Overrides the config file, $VISUAL and $EDITOR
    #[arg(short, long)]
    editor: Option<String>,

    /// Create the post without opening an editor
    #[arg(long)]
    no_edit: bool,

    /// Post category. Can be repeated and replaces the configured categories
    #[arg(long = "category")]
    categories: Vec<String>,

    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,
}

struct SkipEditor;

impl EditorLauncher for SkipEditor {
    fn launch(&self, path: &Path) -> post_scaffold::Result<()> {
        info!("Not opening {}", path.display());
        Ok(())
    }
}

/// Asks for a title until one produces a usable slug.
fn run_interactive<R: BufRead, W: Write>(scaffolder: &Scaffolder, input: &mut R, output: &mut W) -> Result<PathBuf> {
    for attempt in 1..=MAX_TITLE_ATTEMPTS {
        let title = prompt_title(&mut *input, &mut *output).map_err(ScaffoldError::Input)?;
        match scaffolder.run(&title) {
            Err(err @ ScaffoldError::DegenerateSlug { .. }) if attempt < MAX_TITLE_ATTEMPTS => {
                eprintln!("{}. Please use at least one letter or digit.", err);
            }
            result => return Ok(result?),
        }
    }

    unreachable!("the last attempt always returns")
}

fn run(args: Args) -> Result<PathBuf> {
    let work_dir = match args.dir {
        Some(dir) => dir,
        None => env::current_dir()?,
    };

    let config = open_config(args.config_path, &work_dir)?;

    let mut log_settings = LogSettings::default();
    if let Some(ref log) = config.log {
        log_settings.level = log.level;
        log_settings.log_to_console = log.log_to_console;
        log_settings.location = log.location.as_deref();
    }
    if let Some(level) = args.log_level {
        log_settings.level = level;
    }
    if let Err(err) = configure_logger(&log_settings) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    let mut options = ScaffoldOptions::from(&config);
    if !args.categories.is_empty() {
        options.defaults.categories = args.categories;
    }

    let launcher: Box<dyn EditorLauncher> = if args.no_edit {
        Box::new(SkipEditor)
    } else {
        let editor = resolve_editor(args.editor.as_deref(), config.editor.as_deref(), |name| env::var(name).ok());
        Box::new(CommandLauncher::new(editor))
    };

    let clock = SystemClock;
    let scaffolder = Scaffolder::new(&work_dir, &clock, launcher.as_ref(), options);
    info!("Creating post under {}", scaffolder.posts_dir().display());

    match args.title {
        Some(title) => Ok(scaffolder.run(&title)?),
        None => run_interactive(&scaffolder, &mut io::stdin().lock(), &mut io::stdout()),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(path) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{:#}", err);
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use chrono::NaiveDate;
    use post_scaffold::clock::FixedClock;

    use super::*;

    fn new_year() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
    }

    #[test]
    fn test_asks_again_after_degenerate_title() {
        let dir = tempfile::tempdir().unwrap();
        let clock = new_year();
        let scaffolder = Scaffolder::new(dir.path(), &clock, &SkipEditor, ScaffoldOptions::default());
        let mut input = Cursor::new("!!!\nHello\n");
        let mut output = Vec::new();

        let path = run_interactive(&scaffolder, &mut input, &mut output).unwrap();

        assert_eq!(path, dir.path().join("_posts").join("2025-01-01-hello.md"));
        assert!(path.is_file());
        assert_eq!(String::from_utf8(output).unwrap().matches("Enter the post title:").count(), 2);
    }

    #[test]
    fn test_gives_up_after_three_degenerate_titles() {
        let dir = tempfile::tempdir().unwrap();
        let clock = new_year();
        let scaffolder = Scaffolder::new(dir.path(), &clock, &SkipEditor, ScaffoldOptions::default());
        let mut input = Cursor::new("!!!\n???\n   \nNever read\n");

        let err = run_interactive(&scaffolder, &mut input, &mut Vec::new()).unwrap_err();

        assert!(matches!(err.downcast_ref::<ScaffoldError>(), Some(ScaffoldError::DegenerateSlug { .. })));
        assert!(!dir.path().join("_posts").exists());
    }

    #[test]
    fn test_input_ends_before_a_title() {
        let dir = tempfile::tempdir().unwrap();
        let clock = new_year();
        let scaffolder = Scaffolder::new(dir.path(), &clock, &SkipEditor, ScaffoldOptions::default());

        let err = run_interactive(&scaffolder, &mut Cursor::new("!!!\n"), &mut Vec::new()).unwrap_err();

        assert!(matches!(err.downcast_ref::<ScaffoldError>(), Some(ScaffoldError::Input(_))));
    }

    #[test]
    fn test_config_flag() {
        let args = Args::try_parse_from(["post-scaffold", "--config", "site.toml", "--category", "rust", "--category", "cli"]).unwrap();
        assert_eq!(args.config_path, Some(PathBuf::from("site.toml")));
        assert_eq!(args.categories, vec!["rust".to_string(), "cli".to_string()]);

        let args = Args::try_parse_from(["post-scaffold", "-c", "other.toml", "--no-edit"]).unwrap();
        assert_eq!(args.config_path, Some(PathBuf::from("other.toml")));
        assert!(args.no_edit);
    }
}
