use crate::app::{AppContext, Result};
use crate::domain::{filter, BlogPost, Course, StatusFilter};

pub fn list_posts(ctx: &AppContext, mode: StatusFilter) -> Result<()> {
    let posts = filter(&ctx.blog_posts, mode);

    if posts.is_empty() {
        println!("No blog posts");
        return Ok(());
    }

    for post in posts {
        println!("{}", format_post(post));
    }

    Ok(())
}

pub fn list_courses(ctx: &AppContext, mode: StatusFilter) -> Result<()> {
    let courses = ctx.courses.filtered(mode);

    if courses.is_empty() {
        println!("No courses");
        return Ok(());
    }

    for course in courses {
        println!("{}", format_course(course));
    }

    Ok(())
}

fn status_marker(featured: bool) -> &'static str {
    if featured {
        "★"
    } else {
        " "
    }
}

fn format_post(post: &BlogPost) -> String {
    format!(
        "{} {:>10}  {}\n  {} · {}",
        status_marker(post.featured),
        post.display_date(),
        post.title,
        post.author,
        post.category
    )
}

fn format_course(course: &Course) -> String {
    format!(
        "{} {:>8}  {} [{}]\n  {} · {} · {}",
        status_marker(course.featured),
        course.display_price(),
        course.title,
        course.id,
        course.instructor,
        course.level,
        course.duration
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_course() {
        let mut course = Course::draft("2".into());
        course.title = "Advanced Contract Drafting".into();
        course.instructor = "James Patterson".into();
        course.price = 100.0;
        course.duration = "6 weeks".into();
        course.featured = true;

        assert_eq!(
            format_course(&course),
            "★     $100  Advanced Contract Drafting [2]\n  James Patterson · Beginner · 6 weeks"
        );
    }

    #[test]
    fn test_format_post() {
        let post = BlogPost {
            id: "4".into(),
            title: "Preparing for the Bar Exam".into(),
            author: "David Wilson".into(),
            category: "Legal Education".into(),
            date: NaiveDate::from_ymd_opt(2023, 11, 8).unwrap(),
            featured: false,
            excerpt: String::new(),
        };

        assert_eq!(
            format_post(&post),
            "   11/8/2023  Preparing for the Bar Exam\n  David Wilson · Legal Education"
        );
    }

    #[test]
    fn test_listings_succeed_on_bundled_data() {
        let ctx = AppContext::new(None).unwrap();
        for mode in StatusFilter::ALL {
            list_posts(&ctx, mode).unwrap();
            list_courses(&ctx, mode).unwrap();
        }
    }
}
