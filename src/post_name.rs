use crate::clock::CreationDate;

/// Date and slug pair that names a post on disk and on the site.
#[derive(Clone, Debug, PartialEq)]
pub struct PostName {
    pub date: CreationDate,
    pub slug: String,
}

impl PostName {
    pub fn new(date: CreationDate, slug: &str) -> Self {
        Self {
            date,
            slug: slug.to_string(),
        }
    }

    /// `yyyy-mm-dd-slug.ext`, the name static site generators bind to a date.
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}-{}.{}", self.date, self.slug, extension)
    }

    /// `/yyyy/mm/dd/slug/`
    pub fn permalink(&self) -> String {
        format!("/{}/{}/{}/{}/", self.date.year(), self.date.month(), self.date.day(), self.slug)
    }
}
