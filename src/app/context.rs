use std::path::Path;

use crate::app::Result;
use crate::domain::{BlogPost, Course};
use crate::seed::SeedData;
use crate::store::WorkingList;

/// Session state shared by the CLI listings and the TUI.
pub struct AppContext {
    pub blog_posts: Vec<BlogPost>,
    pub courses: WorkingList<Course>,
}

impl AppContext {
    pub fn new(data_path: Option<&Path>) -> Result<Self> {
        let seed = match data_path {
            Some(path) => SeedData::from_path(path)?,
            None => SeedData::bundled()?,
        };
        Ok(Self::from_seed(seed))
    }

    pub fn from_seed(seed: SeedData) -> Self {
        Self {
            blog_posts: seed.blog_posts,
            courses: WorkingList::new(seed.courses),
        }
    }
}
