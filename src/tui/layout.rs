use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Tabs, Wrap},
    Frame,
};

use crate::config::ColorConfig;
use crate::domain::{BlogPost, StatusFilter};
use crate::tui::app::{Modal, Screen, TuiApp};
use crate::tui::form::{CourseForm, FormField};
use crate::tui::toast::Toast;

pub const ADMIN_LOGIN_PATH: &str = "/admin/login";

pub fn render(frame: &mut Frame, app: &mut TuiApp, colors: &ColorConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(6),    // Screen content
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Admin login link
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0], colors);
    match app.screen {
        Screen::Blog => render_blog_screen(frame, app, chunks[1], colors),
        Screen::Courses => render_courses_screen(frame, app, chunks[1], colors),
    }
    render_status_bar(frame, app, chunks[2], colors);
    render_admin_link(frame, chunks[3], colors);

    match &app.modal {
        Some(Modal::CourseForm(form)) => render_course_form(frame, form, colors),
        Some(Modal::ConfirmCourseDelete { title, .. }) => render_confirm_delete(
            frame,
            "Delete Course",
            "Are you sure you want to delete this course? This action cannot be undone.",
            title,
            colors,
        ),
        Some(Modal::ConfirmPostDelete { title, .. }) => render_confirm_delete(
            frame,
            "Delete Blog Post",
            "Are you sure you want to delete this blog post? This action cannot be undone.",
            title,
            colors,
        ),
        Some(Modal::PostPreview(post)) => render_post_preview(frame, post, colors),
        None => {}
    }

    if let Some(toast) = &app.toast {
        render_toast(frame, toast, colors);
    }
}

fn render_header(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let base = Style::default().fg(colors.header_fg).bg(colors.header_bg);
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(colors.inactive_border))
        .style(base);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(18), Constraint::Min(10)])
        .split(inner);

    let brand = Paragraph::new(Span::styled(
        " Academy Admin",
        Style::default().add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(brand, chunks[0]);

    let selected = match app.screen {
        Screen::Blog => 0,
        Screen::Courses => 1,
    };
    let tabs = Tabs::new(vec!["1 Blog Posts", "2 Courses"])
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(colors.active_tab)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|");
    frame.render_widget(tabs, chunks[1]);
}

/// Title, subtitle and primary-action hint above a table, then the filter tabs.
/// Returns the area left for the table.
fn render_page_header(
    frame: &mut Frame,
    area: Rect,
    heading: (&str, &str, &str),
    filter: StatusFilter,
    filter_labels: [&str; 3],
    colors: &ColorConfig,
) -> Rect {
    let (title, subtitle, action) = heading;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .split(area);

    let header = Text::from(vec![
        Line::from(vec![
            Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(action, Style::default().fg(colors.active_tab)),
        ]),
        Line::from(Span::styled(
            subtitle,
            Style::default().fg(colors.inactive_border),
        )),
    ]);
    frame.render_widget(Paragraph::new(header), chunks[0]);

    let tabs = Tabs::new(filter_labels.to_vec())
        .select(filter.index())
        .highlight_style(
            Style::default()
                .fg(colors.selection_fg)
                .bg(colors.selection_bg)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" ");
    frame.render_widget(tabs, chunks[1]);

    chunks[2]
}

fn status_cell(featured: bool, colors: &ColorConfig) -> Cell<'static> {
    let (label, color) = if featured {
        ("Featured", colors.featured_badge)
    } else {
        ("Regular", colors.regular_badge)
    };
    Cell::from(Span::styled(label, Style::default().fg(color)))
}

fn table_block(title: String, colors: &ColorConfig) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.active_border))
}

fn render_blog_screen(frame: &mut Frame, app: &mut TuiApp, area: Rect, colors: &ColorConfig) {
    let area = render_page_header(
        frame,
        area,
        ("Blog Posts", "Manage your blog content.", "[+] New Post"),
        app.blog_filter,
        ["All Posts", "Featured", "Regular"],
        colors,
    );

    let rows: Vec<Row> = app
        .visible_posts()
        .into_iter()
        .map(|post| {
            Row::new(vec![
                Cell::from(Span::styled(
                    post.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Cell::from(post.author.clone()),
                Cell::from(post.category.clone()),
                Cell::from(post.display_date()),
                status_cell(post.featured, colors),
            ])
        })
        .collect();
    let count = rows.len();

    let header = Row::new(vec!["Title", "Author", "Category", "Published", "Status"])
        .style(Style::default().add_modifier(Modifier::BOLD));
    let widths = [
        Constraint::Percentage(38),
        Constraint::Percentage(17),
        Constraint::Percentage(19),
        Constraint::Length(11),
        Constraint::Length(9),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(table_block(format!(" Posts ({}) ", count), colors))
        .row_highlight_style(
            Style::default()
                .bg(colors.selection_bg)
                .fg(colors.selection_fg),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(table, area, &mut app.blog_cursor.state);
}

fn render_courses_screen(frame: &mut Frame, app: &mut TuiApp, area: Rect, colors: &ColorConfig) {
    let area = render_page_header(
        frame,
        area,
        ("Courses", "Manage your course offerings.", "[a] Add Course"),
        app.course_filter,
        ["All Courses", "Featured", "Regular"],
        colors,
    );

    let rows: Vec<Row> = app
        .visible_courses()
        .into_iter()
        .map(|course| {
            Row::new(vec![
                Cell::from(Span::styled(
                    course.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Cell::from(course.instructor.clone()),
                Cell::from(course.display_price()),
                status_cell(course.featured, colors),
            ])
        })
        .collect();
    let count = rows.len();

    let header = Row::new(vec!["Title", "Instructor", "Price", "Status"])
        .style(Style::default().add_modifier(Modifier::BOLD));
    let widths = [
        Constraint::Percentage(45),
        Constraint::Percentage(30),
        Constraint::Length(10),
        Constraint::Length(9),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(table_block(format!(" Courses ({}) ", count), colors))
        .row_highlight_style(
            Style::default()
                .bg(colors.selection_bg)
                .fg(colors.selection_fg),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(table, area, &mut app.course_cursor.state);
}

fn render_status_bar(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let status = match (&app.modal, &app.status_message) {
        (Some(Modal::CourseForm(_)), _) => {
            "Tab/Shift+Tab:Field  Enter:Next  Space/Left/Right:Toggle  Ctrl+s:Save Changes  Esc:Cancel"
                .to_string()
        }
        (Some(Modal::ConfirmCourseDelete { .. } | Modal::ConfirmPostDelete { .. }), _) => {
            "y:Delete  n:Cancel".to_string()
        }
        (Some(Modal::PostPreview(_)), _) => "Any key: Close".to_string(),
        (None, Some(msg)) => msg.clone(),
        (None, None) => match app.screen {
            Screen::Blog => "j/k:Nav  Tab:Filter  v:View  d:Delete  1/2:Screen  q:Quit".to_string(),
            Screen::Courses => {
                "j/k:Nav  Tab:Filter  a:Add  e:Edit  d:Delete  1/2:Screen  q:Quit".to_string()
            }
        },
    };

    let paragraph =
        Paragraph::new(status).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));
    frame.render_widget(paragraph, area);
}

fn render_admin_link(frame: &mut Frame, area: Rect, colors: &ColorConfig) {
    let line = Line::from(vec![
        Span::styled(
            "Admin Login",
            Style::default()
                .fg(colors.link)
                .add_modifier(Modifier::UNDERLINED),
        ),
        Span::styled(
            format!(" ({})", ADMIN_LOGIN_PATH),
            Style::default().fg(colors.inactive_border),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn dialog_block(title: &str, colors: &ColorConfig) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.active_border))
}

fn render_course_form(frame: &mut Frame, form: &CourseForm, colors: &ColorConfig) {
    let description_lines = form.draft.description.split('\n').count();
    let height = (2 * FormField::ALL.len() + description_lines + 4).min(u16::MAX as usize) as u16;
    let area = centered_rect(72, height, frame.area());

    let mut lines = vec![
        Line::from(Span::styled(
            "Fill in the course details below.",
            Style::default().fg(colors.inactive_border),
        )),
        Line::from(""),
    ];

    for field in FormField::ALL {
        let focused = form.focus == field;
        let label_style = if focused {
            Style::default()
                .fg(colors.active_tab)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let marker = if focused { "> " } else { "  " };

        let value = match field {
            FormField::Level => format!("< {} >", form.value(field)),
            FormField::Duration if form.draft.duration.is_empty() && !focused => {
                "e.g., 8 weeks".to_string()
            }
            _ => form.value(field),
        };
        let cursor = if focused && !matches!(field, FormField::Level | FormField::Featured) {
            "_"
        } else {
            ""
        };

        if field == FormField::Featured {
            lines.push(Line::from(vec![
                Span::styled(marker, label_style),
                Span::raw(format!("{} ", value)),
                Span::styled(field.label(), label_style),
            ]));
            continue;
        }

        lines.push(Line::from(vec![
            Span::styled(marker, label_style),
            Span::styled(field.label(), label_style),
        ]));
        let mut value_lines = value.split('\n').peekable();
        while let Some(text) = value_lines.next() {
            let tail = if value_lines.peek().is_none() { cursor } else { "" };
            lines.push(Line::from(format!("    {}{}", text, tail)));
        }
    }

    let block = dialog_block(form.title(), colors);
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

fn render_confirm_delete(
    frame: &mut Frame,
    heading: &str,
    question: &str,
    title: &str,
    colors: &ColorConfig,
) {
    let area = centered_rect(60, 9, frame.area());
    let lines = vec![
        Line::from(question.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            format!("\"{}\"", title),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("[n] Cancel   "),
            Span::styled(
                "[y] Delete",
                Style::default()
                    .fg(colors.danger)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(dialog_block(heading, colors))
        .wrap(Wrap { trim: true });

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

fn render_post_preview(frame: &mut Frame, post: &BlogPost, colors: &ColorConfig) {
    let area = centered_rect(70, 12, frame.area());
    let meta = Style::default().fg(colors.inactive_border);
    let status_color = if post.featured {
        colors.featured_badge
    } else {
        colors.regular_badge
    };

    let mut lines = vec![
        Line::from(Span::styled(
            post.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(format!("By: {}", post.author), meta)),
        Line::from(Span::styled(format!("Category: {}", post.category), meta)),
        Line::from(Span::styled(
            format!("Published: {}", post.display_date()),
            meta,
        )),
        Line::from(Span::styled(
            post.status_label(),
            Style::default().fg(status_color),
        )),
        Line::from(""),
    ];
    if !post.excerpt.is_empty() {
        lines.push(Line::from(post.excerpt.clone()));
    }

    let paragraph = Paragraph::new(lines)
        .block(dialog_block("Blog Post", colors))
        .wrap(Wrap { trim: true });

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

fn render_toast(frame: &mut Frame, toast: &Toast, colors: &ColorConfig) {
    let full = frame.area();
    let width = 46.min(full.width);
    let area = Rect::new(full.x + full.width - width, full.y, width, 5.min(full.height));

    let style = Style::default().fg(colors.toast_fg).bg(colors.toast_bg);
    let lines = vec![
        Line::from(Span::styled(
            toast.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(toast.description.clone()),
    ];
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.active_border)),
        )
        .style(style)
        .wrap(Wrap { trim: true });

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
