use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::store::Record;

/// Placeholder image for courses created from the admin screen.
pub const DEFAULT_COURSE_IMAGE: &str = "https://source.unsplash.com/random/?law";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Level::Beginner => Level::Intermediate,
            Level::Intermediate => Level::Advanced,
            Level::Advanced => Level::Beginner,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Level::Beginner => Level::Advanced,
            Level::Intermediate => Level::Beginner,
            Level::Advanced => Level::Intermediate,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub price: f64,
    pub duration: String,
    pub level: Level,
    pub image: String,
    pub featured: bool,
}

impl Course {
    /// An unsaved course with blank fields, as opened by "Add Course".
    pub fn draft(id: String) -> Self {
        Self {
            id,
            title: String::new(),
            description: String::new(),
            instructor: String::new(),
            price: 0.0,
            duration: String::new(),
            level: Level::default(),
            image: DEFAULT_COURSE_IMAGE.to_string(),
            featured: false,
        }
    }

    /// Generate an id from the current time in milliseconds.
    ///
    /// Two drafts created within the same millisecond share an id.
    pub fn generate_id() -> String {
        Utc::now().timestamp_millis().to_string()
    }

    pub fn display_price(&self) -> String {
        format!("${}", self.price)
    }

    pub fn status_label(&self) -> &'static str {
        if self.featured {
            "Featured"
        } else {
            "Regular"
        }
    }
}

impl Record for Course {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_featured(&self) -> bool {
        self.featured
    }
}
