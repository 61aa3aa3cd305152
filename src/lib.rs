pub mod clock;
pub mod config;
pub mod editor;
pub mod error;
pub mod front_matter;
pub mod logger;
pub mod post_name;
pub mod prompt;
pub mod scaffold;
pub mod slug;

pub use error::{Result, ScaffoldError};
pub use scaffold::{NewPost, ScaffoldOptions, Scaffolder};
