pub mod blog_post;
pub mod course;
pub mod filter;

pub use blog_post::BlogPost;
pub use course::{Course, Level, DEFAULT_COURSE_IMAGE};
pub use filter::{filter, StatusFilter};
