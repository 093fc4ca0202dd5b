use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::store::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub author: String,
    pub category: String,
    pub date: NaiveDate,
    pub featured: bool,
    #[serde(default)]
    pub excerpt: String,
}

impl BlogPost {
    /// Publication date in month/day/year form, without zero padding.
    pub fn display_date(&self) -> String {
        self.date.format("%-m/%-d/%Y").to_string()
    }

    pub fn status_label(&self) -> &'static str {
        if self.featured {
            "Featured"
        } else {
            "Regular"
        }
    }
}

impl Record for BlogPost {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_featured(&self) -> bool {
        self.featured
    }
}
