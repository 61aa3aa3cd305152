use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use spdlog::{debug, info};

use crate::clock::{Clock, CreationDate};
use crate::config::Config;
use crate::editor::EditorLauncher;
use crate::error::{Result, ScaffoldError};
use crate::front_matter::{FrontMatter, PostDefaults};
use crate::post_name::PostName;
use crate::slug::{is_valid_slug, slugify};

#[derive(Clone, Debug, PartialEq)]
pub struct ScaffoldOptions {
    pub posts_dir: PathBuf,
    pub extension: String,
    pub transliterate: bool,
    pub defaults: PostDefaults,
}

impl Default for ScaffoldOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for ScaffoldOptions {
    fn from(config: &Config) -> Self {
        Self {
            posts_dir: config.paths.posts_dir.clone(),
            extension: config.paths.extension.clone(),
            transliterate: config.slug.transliterate,
            defaults: config.post.clone(),
        }
    }
}

/// A post file that was just written to disk.
#[derive(Clone, Debug, PartialEq)]
pub struct NewPost {
    pub path: PathBuf,
    pub name: PostName,
    pub front_matter: FrontMatter,
}

/// Creates a new post from a title: slug, file name and permalink are derived
/// from the title and today's date, the front matter is written to a new file
/// under the posts directory and the file is handed to the editor.
pub struct Scaffolder<'a> {
    work_dir: PathBuf,
    clock: &'a dyn Clock,
    launcher: &'a dyn EditorLauncher,
    options: ScaffoldOptions,
}

impl<'a> Scaffolder<'a> {
    pub fn new(work_dir: &Path, clock: &'a dyn Clock, launcher: &'a dyn EditorLauncher, options: ScaffoldOptions) -> Self {
        Self {
            work_dir: work_dir.to_path_buf(),
            clock,
            launcher,
            options,
        }
    }

    pub fn posts_dir(&self) -> PathBuf {
        self.work_dir.join(&self.options.posts_dir)
    }

    /// Creates the post and opens it in the editor. The post is kept even
    /// when the editor can't be launched.
    pub fn run(&self, title: &str) -> Result<PathBuf> {
        let post = self.create(title)?;
        self.launcher.launch(&post.path)?;
        Ok(post.path)
    }

    /// Creates the post without opening it.
    pub fn create(&self, title: &str) -> Result<NewPost> {
        let date = CreationDate::capture(self.clock);

        let slug = slugify(title, self.options.transliterate);
        if slug.is_empty() {
            return Err(ScaffoldError::DegenerateSlug { title: title.to_string() });
        }
        debug_assert!(is_valid_slug(&slug), "bad slug {}", slug);
        debug!("Slug for \"{}\" is {}", title, slug);

        let posts_dir = self.posts_dir();
        ensure_dir(&posts_dir)?;

        let name = PostName::new(date, &slug);
        let path = posts_dir.join(name.file_name(&self.options.extension));
        let front_matter = FrontMatter::new(title, &name, &self.options.defaults);

        write_new_file(&path, &front_matter.render())?;
        info!("Created post {} with permalink {}", path.display(), front_matter.permalink);

        Ok(NewPost {
            path,
            name,
            front_matter,
        })
    }
}

/// Creates `dir` and its parents when missing. An existing directory is left untouched.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }

    debug!("Creating directory {}", dir.display());
    fs::create_dir_all(dir).map_err(|source| ScaffoldError::DirectoryCreate {
        path: dir.to_path_buf(),
        source,
    })
}

/// Writes `content` to a file that must not exist yet. The file is flushed
/// and closed when this returns.
fn write_new_file(path: &Path, content: &str) -> Result<()> {
    let write_error = |source: io::Error| ScaffoldError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            return Err(ScaffoldError::Collision { path: path.to_path_buf() });
        }
        Err(e) => return Err(write_error(e)),
    };

    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes()).map_err(write_error)?;
    writer.flush().map_err(write_error)
}
