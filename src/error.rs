use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Title \"{title}\" has no letters or digits to build a slug from")]
    DegenerateSlug { title: String },
    #[error("Post already exists, refusing to overwrite: {}", path.display())]
    Collision { path: PathBuf },
    #[error("Error creating directory {}: {source}", path.display())]
    DirectoryCreate { path: PathBuf, source: io::Error },
    #[error("Error writing post file {}: {source}", path.display())]
    FileWrite { path: PathBuf, source: io::Error },
    #[error("No editor configured. Set $VISUAL or $EDITOR, or pass --editor")]
    EditorNotConfigured,
    #[error("Error launching editor '{editor}': {source}")]
    EditorLaunch { editor: String, source: io::Error },
    #[error("Error reading title: {0}")]
    Input(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
