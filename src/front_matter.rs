use std::fmt::Write;

use serde::Deserialize;

use crate::post_name::PostName;

pub const DELIMITER: &str = "---";

/// Header written on top of a new post. Keys are written in a fixed order,
/// which is the order the site generator expects.
#[derive(Clone, Debug, PartialEq)]
pub struct FrontMatter {
    pub title: String,
    pub layout: String,
    pub published: bool,
    pub date: String,
    pub permalink: String,
    pub image_url: String,
    pub categories: Vec<String>,
}

impl FrontMatter {
    pub fn new(title: &str, name: &PostName, defaults: &PostDefaults) -> Self {
        Self {
            title: title.to_string(),
            layout: defaults.layout.clone(),
            published: defaults.published,
            date: name.date.to_string(),
            permalink: name.permalink(),
            image_url: defaults.image_url.clone(),
            categories: defaults.categories.clone(),
        }
    }

    pub fn render(&self) -> String {
        let mut buf = String::new();

        let _ = writeln!(&mut buf, "{}", DELIMITER);
        let _ = writeln!(&mut buf, "title: \"{}\"", quote_escape(&self.title));
        let _ = writeln!(&mut buf, "layout: {}", self.layout);
        let _ = writeln!(&mut buf, "published: {}", self.published);
        let _ = writeln!(&mut buf, "date: {}", self.date);
        let _ = writeln!(&mut buf, "permalink: {}", self.permalink);
        let _ = writeln!(&mut buf, "image_url: {}", self.image_url);
        let _ = writeln!(&mut buf, "categories:");
        for category in &self.categories {
            let _ = writeln!(&mut buf, "    - {}", category);
        }
        let _ = writeln!(&mut buf, "{}", DELIMITER);
        let _ = writeln!(&mut buf);

        buf
    }
}

/// Values of the header that don't come from the title or the date.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PostDefaults {
    pub layout: String,
    pub published: bool,
    pub image_url: String,
    pub categories: Vec<String>,
}

impl Default for PostDefaults {
    fn default() -> Self {
        Self {
            layout: "post".to_string(),
            published: true,
            image_url: "<replaceme>".to_string(),
            categories: vec!["ruby".to_string()],
        }
    }
}

/// Escapes a value for a double quoted yaml scalar kept on a single line.
fn quote_escape(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}
