use crate::domain::Course;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    Instructor,
    Price,
    Duration,
    Level,
    Featured,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::Title,
        FormField::Description,
        FormField::Instructor,
        FormField::Price,
        FormField::Duration,
        FormField::Level,
        FormField::Featured,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Course Title",
            FormField::Description => "Description",
            FormField::Instructor => "Instructor",
            FormField::Price => "Price ($)",
            FormField::Duration => "Duration",
            FormField::Level => "Level",
            FormField::Featured => "Featured Course",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn is_last(self) -> bool {
        self == FormField::Featured
    }
}

/// Add/edit dialog state: the draft course plus field focus.
#[derive(Debug, Clone)]
pub struct CourseForm {
    pub draft: Course,
    pub focus: FormField,
    is_new: bool,
    price_input: String,
}

impl CourseForm {
    /// `is_new` is decided by the caller from whether the draft's id is
    /// already in the working list.
    pub fn new(draft: Course, is_new: bool) -> Self {
        let price_input = draft.price.to_string();
        Self {
            draft,
            focus: FormField::Title,
            is_new,
            price_input,
        }
    }

    pub fn title(&self) -> &'static str {
        if self.is_new {
            "Add New Course"
        } else {
            "Edit Course"
        }
    }

    pub fn price_input(&self) -> &str {
        &self.price_input
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Text shown for a field in the dialog.
    pub fn value(&self, field: FormField) -> String {
        match field {
            FormField::Title => self.draft.title.clone(),
            FormField::Description => self.draft.description.clone(),
            FormField::Instructor => self.draft.instructor.clone(),
            FormField::Price => self.price_input.clone(),
            FormField::Duration => self.draft.duration.clone(),
            FormField::Level => self.draft.level.to_string(),
            FormField::Featured => {
                if self.draft.featured {
                    "[x]".to_string()
                } else {
                    "[ ]".to_string()
                }
            }
        }
    }

    pub fn insert_char(&mut self, c: char) {
        match self.focus {
            FormField::Price => {
                // number input: digits, signs, decimal point and exponent
                if c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E') {
                    self.price_input.push(c);
                    self.sync_price();
                }
            }
            FormField::Level => match c {
                ' ' | 'l' => self.cycle_level(true),
                'h' => self.cycle_level(false),
                _ => {}
            },
            FormField::Featured => {
                if c == ' ' {
                    self.toggle_featured();
                }
            }
            _ => {
                if let Some(text) = self.text_mut() {
                    text.push(c);
                }
            }
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            FormField::Price => {
                self.price_input.pop();
                self.sync_price();
            }
            _ => {
                if let Some(text) = self.text_mut() {
                    text.pop();
                }
            }
        }
    }

    /// Only the description is multi-line. Returns whether a newline was inserted.
    pub fn insert_newline(&mut self) -> bool {
        if self.focus == FormField::Description {
            self.draft.description.push('\n');
            true
        } else {
            false
        }
    }

    pub fn cycle_level(&mut self, forward: bool) {
        self.draft.level = if forward {
            self.draft.level.next()
        } else {
            self.draft.level.prev()
        };
    }

    pub fn toggle_featured(&mut self) {
        self.draft.featured = !self.draft.featured;
    }

    pub fn into_draft(self) -> Course {
        self.draft
    }

    fn text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Title => Some(&mut self.draft.title),
            FormField::Description => Some(&mut self.draft.description),
            FormField::Instructor => Some(&mut self.draft.instructor),
            FormField::Duration => Some(&mut self.draft.duration),
            FormField::Price | FormField::Level | FormField::Featured => None,
        }
    }

    fn sync_price(&mut self) {
        self.draft.price = self.price_input.parse().unwrap_or(0.0);
    }
}
