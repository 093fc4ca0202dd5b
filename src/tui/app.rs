use std::time::{Duration, Instant};

use clap::ValueEnum;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::TableState;
use serde::Deserialize;

use crate::app::AppContext;
use crate::config::KeybindingConfig;
use crate::domain::{BlogPost, Course, StatusFilter};
use crate::store::{SaveOutcome, WorkingList};
use crate::tui::event::Action;
use crate::tui::form::CourseForm;
use crate::tui::toast::Toast;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    Blog,
    #[default]
    Courses,
}

/// Overlay drawn above the table. Table actions are suspended while one is open.
#[derive(Debug, Clone)]
pub enum Modal {
    CourseForm(CourseForm),
    ConfirmCourseDelete { id: String, title: String },
    ConfirmPostDelete { id: String, title: String },
    PostPreview(BlogPost),
}

/// Row selection over a filtered table.
#[derive(Debug)]
pub struct TableCursor {
    pub index: usize,
    pub state: TableState,
}

impl TableCursor {
    fn new() -> Self {
        let mut state = TableState::default();
        state.select(Some(0));
        Self { index: 0, state }
    }

    fn select(&mut self, index: usize) {
        self.index = index;
        self.state.select(Some(index));
    }

    fn move_up(&mut self) {
        if self.index > 0 {
            self.select(self.index - 1);
        }
    }

    fn move_down(&mut self, len: usize) {
        if len > 0 && self.index < len - 1 {
            self.select(self.index + 1);
        }
    }

    fn clamp(&mut self, len: usize) {
        if self.index >= len {
            self.select(len.saturating_sub(1));
        }
    }
}

pub struct TuiApp {
    pub screen: Screen,
    pub blog_posts: Vec<BlogPost>,
    pub blog_filter: StatusFilter,
    pub blog_cursor: TableCursor,
    pub courses: WorkingList<Course>,
    pub course_filter: StatusFilter,
    pub course_cursor: TableCursor,
    pub modal: Option<Modal>,
    pub toast: Option<Toast>,
    pub status_message: Option<String>,
    pub should_quit: bool,
    toast_ttl: Duration,
}

impl TuiApp {
    pub fn new(ctx: AppContext, screen: Screen, toast_ttl: Duration) -> Self {
        Self {
            screen,
            blog_posts: ctx.blog_posts,
            blog_filter: StatusFilter::All,
            blog_cursor: TableCursor::new(),
            courses: ctx.courses,
            course_filter: StatusFilter::All,
            course_cursor: TableCursor::new(),
            modal: None,
            toast: None,
            status_message: None,
            should_quit: false,
            toast_ttl,
        }
    }

    pub fn visible_posts(&self) -> Vec<&BlogPost> {
        crate::domain::filter(&self.blog_posts, self.blog_filter)
    }

    pub fn visible_courses(&self) -> Vec<&Course> {
        self.courses.filtered(self.course_filter)
    }

    pub fn selected_post(&self) -> Option<&BlogPost> {
        self.visible_posts().get(self.blog_cursor.index).copied()
    }

    pub fn selected_course(&self) -> Option<&Course> {
        self.visible_courses().get(self.course_cursor.index).copied()
    }

    pub fn active_filter(&self) -> StatusFilter {
        match self.screen {
            Screen::Blog => self.blog_filter,
            Screen::Courses => self.course_filter,
        }
    }

    pub fn show(&mut self, screen: Screen) {
        self.screen = screen;
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        match self.screen {
            Screen::Blog => {
                self.blog_filter = filter;
                self.blog_cursor.select(0);
            }
            Screen::Courses => {
                self.course_filter = filter;
                self.course_cursor.select(0);
            }
        }
    }

    pub fn move_up(&mut self) {
        match self.screen {
            Screen::Blog => self.blog_cursor.move_up(),
            Screen::Courses => self.course_cursor.move_up(),
        }
    }

    pub fn move_down(&mut self) {
        match self.screen {
            Screen::Blog => {
                let len = self.visible_posts().len();
                self.blog_cursor.move_down(len);
            }
            Screen::Courses => {
                let len = self.visible_courses().len();
                self.course_cursor.move_down(len);
            }
        }
    }

    /// Open the form on a fresh draft. Nothing enters the working list until save.
    pub fn begin_add_course(&mut self, id: String) {
        let is_new = !self.courses.contains(&id);
        self.modal = Some(Modal::CourseForm(CourseForm::new(Course::draft(id), is_new)));
    }

    /// Open the form on a copy of the selected course.
    pub fn begin_edit_course(&mut self) {
        if let Some(course) = self.selected_course().cloned() {
            let is_new = !self.courses.contains(&course.id);
            self.modal = Some(Modal::CourseForm(CourseForm::new(course, is_new)));
        }
    }

    /// Commit the open form's draft and close the dialog.
    pub fn save_course_form(&mut self) -> Option<SaveOutcome> {
        let form = match self.modal.take() {
            Some(Modal::CourseForm(form)) => form,
            other => {
                self.modal = other;
                return None;
            }
        };

        let draft = form.into_draft();
        let id = draft.id.clone();
        let outcome = self.courses.save(draft);
        // an edit can move the row out of the current filter
        let len = self.visible_courses().len();
        self.course_cursor.clamp(len);
        self.toast = Some(match outcome {
            SaveOutcome::Added => Toast::course_added(self.toast_ttl),
            SaveOutcome::Updated => Toast::course_updated(self.toast_ttl),
        });
        tracing::info!(course_id = %id, ?outcome, total = self.courses.len(), "course saved");
        Some(outcome)
    }

    pub fn request_delete(&mut self) {
        self.modal = match self.screen {
            Screen::Blog => self.selected_post().map(|p| Modal::ConfirmPostDelete {
                id: p.id.clone(),
                title: p.title.clone(),
            }),
            Screen::Courses => self.selected_course().map(|c| Modal::ConfirmCourseDelete {
                id: c.id.clone(),
                title: c.title.clone(),
            }),
        };
    }

    pub fn confirm_delete(&mut self) {
        match self.modal.take() {
            Some(Modal::ConfirmCourseDelete { id, .. }) => {
                let removed = self.courses.delete(&id);
                let len = self.visible_courses().len();
                self.course_cursor.clamp(len);
                self.toast = Some(Toast::course_deleted(self.toast_ttl));
                tracing::info!(course_id = %id, found = removed.is_some(), "course deleted");
            }
            Some(Modal::ConfirmPostDelete { id, .. }) => {
                // blog posts are read-only; the dialog only closes
                tracing::debug!(post_id = %id, "blog post delete confirmed without effect");
            }
            other => self.modal = other,
        }
    }

    pub fn view_selected_post(&mut self) {
        if let Some(post) = self.selected_post().cloned() {
            self.modal = Some(Modal::PostPreview(post));
        }
    }

    /// Dismiss whatever overlay is open, discarding any unsaved draft.
    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    pub fn expire_toast(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
        }
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::MoveUp => self.move_up(),
            Action::MoveDown => self.move_down(),
            Action::NextFilter => self.set_filter(self.active_filter().next()),
            Action::PrevFilter => self.set_filter(self.active_filter().prev()),
            Action::ShowBlog => self.show(Screen::Blog),
            Action::ShowCourses => self.show(Screen::Courses),
            Action::Add => {
                if self.screen == Screen::Courses {
                    self.begin_add_course(Course::generate_id());
                }
            }
            Action::Edit => {
                if self.screen == Screen::Courses {
                    self.begin_edit_course();
                }
            }
            Action::View => {
                if self.screen == Screen::Blog {
                    self.view_selected_post();
                }
            }
            Action::Delete => self.request_delete(),
            Action::None => {}
        }
    }

    /// Route a key press: Ctrl-modified quit bindings always apply, everything
    /// else goes to the open overlay first and then to the table bindings.
    pub fn handle_key(&mut self, key: KeyEvent, keybindings: &KeybindingConfig) {
        self.clear_status();
        let action = keybindings.get_action(&key);
        if action == Action::Quit && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        if !self.handle_modal_key(key) {
            self.handle_action(action);
        }
    }

    /// Route a key to the open overlay. Returns false when no overlay is open.
    pub fn handle_modal_key(&mut self, key: KeyEvent) -> bool {
        let Some(modal) = self.modal.as_mut() else {
            return false;
        };

        match modal {
            Modal::CourseForm(form) => match key.code {
                KeyCode::Esc => self.close_modal(),
                KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.save_course_form();
                }
                KeyCode::Tab | KeyCode::Down => form.focus_next(),
                KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
                KeyCode::Left => form.cycle_level(false),
                KeyCode::Right => form.cycle_level(true),
                KeyCode::Backspace => form.backspace(),
                KeyCode::Enter => {
                    if form.focus.is_last() {
                        self.save_course_form();
                    } else if !form.insert_newline() {
                        form.focus_next();
                    }
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    form.insert_char(c);
                }
                _ => {}
            },
            Modal::ConfirmCourseDelete { .. } | Modal::ConfirmPostDelete { .. } => match key.code
            {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => self.confirm_delete(),
                _ => {
                    self.close_modal();
                    self.set_status("Delete cancelled".to_string());
                }
            },
            Modal::PostPreview(_) => self.close_modal(),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::SeedData;
    use crate::tui::form::FormField;

    fn course(id: &str, price: f64, featured: bool) -> Course {
        let mut c = Course::draft(id.to_string());
        c.title = format!("Course {}", id);
        c.price = price;
        c.featured = featured;
        c
    }

    fn app_with(courses: Vec<Course>) -> TuiApp {
        let seed = SeedData {
            blog_posts: SeedData::bundled().unwrap().blog_posts,
            courses,
        };
        TuiApp::new(
            AppContext::from_seed(seed),
            Screen::Courses,
            Duration::from_secs(3),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ids(app: &TuiApp) -> Vec<&str> {
        app.courses.records().iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_add_course_scenario() {
        let mut app = app_with(vec![course("1", 50.0, true), course("2", 100.0, false)]);

        app.begin_add_course("1700000000000".to_string());
        assert_eq!(app.courses.len(), 2, "draft must not enter the list before save");
        match &app.modal {
            Some(Modal::CourseForm(form)) => assert_eq!(form.title(), "Add New Course"),
            other => panic!("expected course form, got {:?}", other),
        }

        assert_eq!(app.save_course_form(), Some(SaveOutcome::Added));
        assert_eq!(app.courses.len(), 3);
        assert!(app.courses.contains("1700000000000"));
        assert!(app.modal.is_none());
        assert_eq!(app.toast.as_ref().unwrap().title, "Course added");
    }

    #[test]
    fn test_edit_price_scenario() {
        let mut app = app_with(vec![course("1", 50.0, true), course("2", 100.0, false)]);
        app.move_down();
        app.begin_edit_course();

        let Some(Modal::CourseForm(form)) = app.modal.as_mut() else {
            panic!("expected course form");
        };
        assert_eq!(form.title(), "Edit Course");
        form.focus = FormField::Price;
        for _ in 0..3 {
            form.backspace();
        }
        for c in "150".chars() {
            form.insert_char(c);
        }

        assert_eq!(app.save_course_form(), Some(SaveOutcome::Updated));
        assert_eq!(app.courses.len(), 2);
        assert_eq!(app.courses.get("2").unwrap().price, 150.0);
        assert_eq!(ids(&app), vec!["1", "2"]);
        assert_eq!(app.toast.as_ref().unwrap().title, "Course updated");
    }

    #[test]
    fn test_edit_works_on_a_copy_until_saved() {
        let mut app = app_with(vec![course("1", 50.0, true)]);
        app.begin_edit_course();
        app.handle_modal_key(key(KeyCode::Char('!')));
        assert_eq!(app.courses.get("1").unwrap().title, "Course 1");

        app.handle_modal_key(key(KeyCode::Esc));
        assert!(app.modal.is_none());
        assert_eq!(app.courses.get("1").unwrap().title, "Course 1");
        assert!(app.toast.is_none());
    }

    #[test]
    fn test_delete_course_scenario() {
        let mut app = app_with(vec![course("1", 50.0, true), course("2", 100.0, false)]);
        app.move_down();
        app.request_delete();
        assert!(matches!(
            app.modal,
            Some(Modal::ConfirmCourseDelete { ref id, .. }) if id == "2"
        ));

        app.handle_modal_key(key(KeyCode::Char('y')));
        assert_eq!(ids(&app), vec!["1"]);
        assert_eq!(app.course_cursor.index, 0);
        assert_eq!(app.toast.as_ref().unwrap().title, "Course deleted");
    }

    #[test]
    fn test_cancel_delete_keeps_course() {
        let mut app = app_with(vec![course("1", 50.0, true)]);
        app.request_delete();
        app.handle_modal_key(key(KeyCode::Char('n')));

        assert!(app.modal.is_none());
        assert_eq!(app.courses.len(), 1);
        assert_eq!(app.status_message.as_deref(), Some("Delete cancelled"));
    }

    #[test]
    fn test_filter_targets_visible_rows() {
        let mut app = app_with(vec![
            course("1", 50.0, true),
            course("2", 100.0, false),
            course("3", 75.0, true),
        ]);
        app.handle_action(Action::NextFilter);
        assert_eq!(app.course_filter, StatusFilter::Featured);
        app.move_down();
        assert_eq!(app.selected_course().unwrap().id, "3");

        app.handle_action(Action::NextFilter);
        assert_eq!(app.course_filter, StatusFilter::Regular);
        assert_eq!(app.course_cursor.index, 0);
        assert_eq!(app.selected_course().unwrap().id, "2");
        app.move_down();
        assert_eq!(app.course_cursor.index, 0);
    }

    #[test]
    fn test_enter_walks_fields_then_saves() {
        let mut app = app_with(vec![]);
        app.begin_add_course("77".into());
        app.handle_modal_key(key(KeyCode::Char('X')));
        // Title -> Description
        app.handle_modal_key(key(KeyCode::Enter));
        // newline inside description, then leave it with Tab
        app.handle_modal_key(key(KeyCode::Enter));
        app.handle_modal_key(key(KeyCode::Tab));
        for _ in 0..4 {
            app.handle_modal_key(key(KeyCode::Enter));
        }
        let Some(Modal::CourseForm(form)) = &app.modal else {
            panic!("form should still be open");
        };
        assert_eq!(form.focus, FormField::Featured);

        app.handle_modal_key(key(KeyCode::Enter));
        assert!(app.modal.is_none());
        let saved = app.courses.get("77").unwrap();
        assert_eq!(saved.title, "X");
        assert_eq!(saved.description, "\n");
    }

    #[test]
    fn test_ctrl_s_saves_from_any_field() {
        let mut app = app_with(vec![]);
        app.begin_add_course("5".into());
        app.handle_modal_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert!(app.courses.contains("5"));
        assert!(app.courses.get("5").unwrap().title.is_empty());
    }

    #[test]
    fn test_blog_screen_is_read_only() {
        let mut app = app_with(vec![]);
        app.handle_action(Action::ShowBlog);
        let before = app.blog_posts.clone();

        app.handle_action(Action::Add);
        app.handle_action(Action::Edit);
        assert!(app.modal.is_none());

        app.handle_action(Action::Delete);
        assert!(matches!(app.modal, Some(Modal::ConfirmPostDelete { .. })));
        app.handle_modal_key(key(KeyCode::Char('y')));
        assert!(app.modal.is_none());
        assert_eq!(app.blog_posts, before);
        assert!(app.toast.is_none());
    }

    #[test]
    fn test_blog_filter_and_preview() {
        let mut app = app_with(vec![]);
        app.show(Screen::Blog);
        app.set_filter(StatusFilter::Regular);
        assert!(app.visible_posts().iter().all(|p| !p.featured));

        app.handle_action(Action::View);
        let expected = app.selected_post().unwrap().id.clone();
        assert!(matches!(app.modal, Some(Modal::PostPreview(ref p)) if p.id == expected));
        app.handle_modal_key(key(KeyCode::Char('q')));
        assert!(app.modal.is_none());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_actions_on_empty_list_are_noops() {
        let mut app = app_with(vec![]);
        app.handle_action(Action::MoveDown);
        app.handle_action(Action::Edit);
        app.handle_action(Action::Delete);
        assert!(app.modal.is_none());
        assert!(app.selected_course().is_none());
    }

    #[test]
    fn test_toast_expires() {
        let mut app = app_with(vec![]);
        app.begin_add_course("1".into());
        app.save_course_form();
        app.expire_toast(Instant::now());
        assert!(app.toast.is_some());
        app.expire_toast(Instant::now() + Duration::from_secs(3));
        assert!(app.toast.is_none());
    }

    #[test]
    fn test_save_keeps_cursor_on_a_visible_row() {
        let mut app = app_with(vec![course("1", 50.0, true), course("3", 75.0, true)]);
        app.set_filter(StatusFilter::Featured);
        app.move_down();
        app.begin_edit_course();
        let Some(Modal::CourseForm(form)) = app.modal.as_mut() else {
            panic!("expected course form");
        };
        form.toggle_featured();
        app.save_course_form();

        assert_eq!(app.visible_courses().len(), 1);
        assert_eq!(app.course_cursor.index, 0);
        assert_eq!(app.selected_course().unwrap().id, "1");
        app.handle_action(Action::Delete);
        assert!(matches!(app.modal, Some(Modal::ConfirmCourseDelete { .. })));
    }

    #[test]
    fn test_cursor_resets_when_view_empties() {
        let mut app = app_with(vec![course("1", 50.0, true), course("3", 75.0, true)]);
        app.set_filter(StatusFilter::Featured);
        app.move_down();
        app.request_delete();
        app.confirm_delete();
        app.request_delete();
        app.confirm_delete();
        assert!(app.visible_courses().is_empty());
        assert_eq!(app.course_cursor.index, 0);
    }

    #[test]
    fn test_ctrl_c_quits_from_open_form() {
        let keybindings = KeybindingConfig::default();
        let mut app = app_with(vec![]);
        app.begin_add_course("1".into());

        app.handle_key(key(KeyCode::Char('q')), &keybindings);
        assert!(!app.should_quit);
        let Some(Modal::CourseForm(form)) = &app.modal else {
            panic!("expected course form");
        };
        assert_eq!(form.draft.title, "q");

        app.handle_key(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &keybindings,
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_handle_key_falls_through_to_table_bindings() {
        let keybindings = KeybindingConfig::default();
        let mut app = app_with(vec![course("1", 50.0, true)]);
        app.set_status("old".to_string());

        app.handle_key(key(KeyCode::Char('e')), &keybindings);
        assert!(app.status_message.is_none());
        assert!(matches!(app.modal, Some(Modal::CourseForm(_))));

        app.handle_key(key(KeyCode::Esc), &keybindings);
        app.handle_key(key(KeyCode::Char('q')), &keybindings);
        assert!(app.should_quit);
    }

    #[test]
    fn test_modal_key_without_modal() {
        let mut app = app_with(vec![]);
        assert!(!app.handle_modal_key(key(KeyCode::Esc)));
    }
}
