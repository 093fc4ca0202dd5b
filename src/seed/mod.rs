//! Static sample data the admin screens start from.
//!
//! The bundled data set is compiled into the binary. A JSON file with the
//! same shape can be supplied instead with `--data <path>`.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::app::Result;
use crate::domain::{BlogPost, Course};
use crate::store::Record;

const BUNDLED_SEED: &str = include_str!("../../data/seed.json");

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedData {
    #[serde(default)]
    pub blog_posts: Vec<BlogPost>,
    #[serde(default)]
    pub courses: Vec<Course>,
}

impl SeedData {
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_SEED)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let seed = Self::from_json(&content)?;
        tracing::info!(
            path = %path.as_ref().display(),
            posts = seed.blog_posts.len(),
            courses = seed.courses.len(),
            "loaded seed data"
        );
        Ok(seed)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let seed: SeedData = serde_json::from_str(content)?;
        warn_duplicate_ids("blog post", &seed.blog_posts);
        warn_duplicate_ids("course", &seed.courses);
        Ok(seed)
    }
}

/// Returns the ids that appear more than once, in first-repeat order.
pub fn duplicate_ids<T: Record>(records: &[T]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut dups = Vec::new();
    for record in records {
        if !seen.insert(record.id()) && !dups.iter().any(|d| d == record.id()) {
            dups.push(record.id().to_string());
        }
    }
    dups
}

fn warn_duplicate_ids<T: Record>(kind: &str, records: &[T]) {
    for id in duplicate_ids(records) {
        tracing::warn!(kind, id = %id, "duplicate id in seed data; edits will target the first match");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_bundled_seed_parses() {
        let seed = SeedData::bundled().expect("bundled seed should be valid JSON");
        assert!(!seed.blog_posts.is_empty());
        assert!(!seed.courses.is_empty());
        assert!(duplicate_ids(&seed.blog_posts).is_empty());
        assert!(duplicate_ids(&seed.courses).is_empty());
    }

    #[test]
    fn test_bundled_seed_has_both_statuses() {
        let seed = SeedData::bundled().unwrap();
        assert!(seed.courses.iter().any(|c| c.featured));
        assert!(seed.courses.iter().any(|c| !c.featured));
        assert!(seed.blog_posts.iter().any(|p| p.featured));
        assert!(seed.blog_posts.iter().any(|p| !p.featured));
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let seed = SeedData::from_json("{}").unwrap();
        assert!(seed.blog_posts.is_empty());
        assert!(seed.courses.is_empty());
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(SeedData::from_json("{ not json").is_err());
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"courses": [{{
                "id": "10",
                "title": "Evidence",
                "description": "",
                "instructor": "A. Lawyer",
                "price": 80,
                "duration": "3 weeks",
                "level": "Intermediate",
                "image": "",
                "featured": false
            }}]}}"#
        )
        .unwrap();

        let seed = SeedData::from_path(file.path()).unwrap();
        assert_eq!(seed.courses.len(), 1);
        assert_eq!(seed.courses[0].price, 80.0);
        assert!(seed.blog_posts.is_empty());
    }

    #[test]
    fn test_duplicate_ids_reported_once() {
        let courses = vec![
            Course::draft("1".into()),
            Course::draft("2".into()),
            Course::draft("1".into()),
            Course::draft("1".into()),
        ];
        assert_eq!(duplicate_ids(&courses), vec!["1".to_string()]);
    }
}
