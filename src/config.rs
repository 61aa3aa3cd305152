use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{fs, io};

use clap::ValueEnum;
use serde::Deserialize;

use crate::front_matter::PostDefaults;

pub const CFG_FILE_NAME: &str = "post-scaffold.toml";

#[derive(Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct Paths {
    /// Directory, relative to the working directory, where posts are created
    pub posts_dir: PathBuf,
    pub extension: String,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            posts_dir: PathBuf::from("_posts"),
            extension: "md".to_string(),
        }
    }
}

#[derive(Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct Slug {
    pub transliterate: bool,
}

impl Default for Slug {
    fn default() -> Self {
        Self { transliterate: true }
    }
}

#[derive(Deserialize, Debug, PartialEq)]
pub struct Log {
    pub level: LogLevel,
    #[serde(default = "log_to_console_default")]
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

fn log_to_console_default() -> bool {
    true
}

#[derive(Deserialize, ValueEnum, Debug, Copy, Clone, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Editor command, takes precedence over $VISUAL and $EDITOR
    pub editor: Option<String>,
    pub paths: Paths,
    pub post: PostDefaults,
    pub slug: Slug,
    pub log: Option<Log>,
}

/// Looks for the configuration file in the working directory, then in the
/// user config directory.
pub fn find_config(work_dir: &Path) -> Option<PathBuf> {
    let local = work_dir.join(CFG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    let user = dirs::config_dir()?.join(CFG_FILE_NAME);
    if user.exists() {
        return Some(user);
    }

    None
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    toml::from_str::<Config>(cfg_content).map_err(|e| {
        io::Error::new(ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))
    })
}

pub fn read_config(cfg_path: &Path) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    parse_config(&cfg_content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.paths.posts_dir, PathBuf::from("_posts"));
        assert_eq!(cfg.paths.extension, "md");
        assert_eq!(cfg.post, PostDefaults::default());
        assert!(cfg.slug.transliterate);
        assert!(cfg.editor.is_none());
        assert!(cfg.log.is_none());
    }

    #[test]
    fn test_partial_override() {
        let toml_str = r##"
editor = "code --wait"

[paths]
posts_dir = "content/posts"

[post]
categories = ["rust", "cli"]

[log]
level = "Debug"
"##;
        let cfg = parse_config(toml_str).unwrap();
        assert_eq!(cfg.editor.as_deref(), Some("code --wait"));
        assert_eq!(cfg.paths.posts_dir, PathBuf::from("content/posts"));
        assert_eq!(cfg.paths.extension, "md");
        assert_eq!(cfg.post.categories, vec!["rust".to_string(), "cli".to_string()]);
        assert_eq!(cfg.post.layout, "post");
        assert!(cfg.post.published);

        let log = cfg.log.unwrap();
        assert_eq!(log.level, LogLevel::Debug);
        assert!(log.log_to_console);
        assert!(log.location.is_none());
    }

    #[test]
    fn test_invalid_config() {
        let err = parse_config("[paths]\nposts_dir = 42\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn test_read_and_find_config() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_config(&dir.path().join(CFG_FILE_NAME)).is_err());

        fs::write(dir.path().join(CFG_FILE_NAME), "[slug]\ntransliterate = false\n").unwrap();
        let found = find_config(dir.path()).unwrap();
        assert_eq!(found, dir.path().join(CFG_FILE_NAME));

        let cfg = read_config(&found).unwrap();
        assert!(!cfg.slug.transliterate);
    }
}
