use std::time::{Duration, Instant};

/// A short confirmation shown in the corner of the screen until it expires.
#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub description: String,
    shown_at: Instant,
    ttl: Duration,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>, ttl: Duration) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            shown_at: Instant::now(),
            ttl,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.ttl
    }

    pub fn course_added(ttl: Duration) -> Self {
        Self::new(
            "Course added",
            "The new course has been successfully added.",
            ttl,
        )
    }

    pub fn course_updated(ttl: Duration) -> Self {
        Self::new(
            "Course updated",
            "The course has been successfully updated.",
            ttl,
        )
    }

    pub fn course_deleted(ttl: Duration) -> Self {
        Self::new(
            "Course deleted",
            "The course has been successfully deleted.",
            ttl,
        )
    }
}
