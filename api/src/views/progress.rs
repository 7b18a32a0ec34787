//! Progress pages
//!
//! Student list, per-student section history, and single-section detail.

use urlencoding::encode;

use super::renderer::{escape_html, page};
use crate::app::{SectionDetail, StudentProgress};
use crate::domain::entities::Student;

const NEUTRAL_BORDER: &str = "#ccc";

fn student_href(name: &str) -> String {
    format!("/progress/student/{}", encode(name))
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Render the progress index: every enrolled student with a link to details
pub fn render_progress_index(students: &[Student]) -> String {
    let mut body = String::from("<h2>Student Progress</h2>\n");

    if students.is_empty() {
        body.push_str("<p><em>No students yet.</em></p>\n");
        return page("Progress", &body);
    }

    body.push_str("<ul>\n");
    for student in students {
        body.push_str(&format!(
            "  <li><a href=\"{}\">{}</a> ({}) - {} sections, {} points</li>\n",
            escape_html(&student_href(&student.name)),
            escape_html(&student.name),
            escape_html(&student.team),
            student.sections_completed,
            student.points
        ));
    }
    body.push_str("</ul>\n");

    page("Progress", &body)
}

/// Render one student's section history and credit totals
pub fn render_student_progress(progress: &StudentProgress) -> String {
    let color = progress.color.as_deref().unwrap_or(NEUTRAL_BORDER);
    let mut body = format!(
        "<div class=\"team-card\" style=\"border-color: {}\">\n<h2>{}</h2>\n",
        escape_html(color),
        escape_html(&progress.name)
    );

    match &progress.student {
        Some(student) => body.push_str(&format!(
            "<p>Team: {} &middot; Points: {}</p>\n",
            escape_html(&student.team),
            student.points
        )),
        None => body.push_str("<p><em>No longer on the roster.</em></p>\n"),
    }

    body.push_str(&format!(
        "<p class=\"team-points\">Sections: {}</p>\n<p>Silver credits: {} &middot; Gold credits: {}</p>\n</div>\n",
        progress.total_sections, progress.silver_earned, progress.gold_earned
    ));

    if progress.sections.is_empty() {
        body.push_str("<p><em>No sections recorded yet.</em></p>\n");
        return page("Progress", &body);
    }

    body.push_str(
        "<table class=\"sections\">\n<tr><th>Date</th><th>Section</th><th>Complete</th><th>Silver</th><th>Gold</th></tr>\n",
    );
    let base = student_href(&progress.name);
    for (index, section) in progress.sections.iter().enumerate() {
        body.push_str(&format!(
            "<tr><td>{}</td><td><a href=\"{}/section/{}\">{}</a></td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape_html(&section.date),
            escape_html(&base),
            index,
            escape_html(&section.section),
            yes_no(section.section_complete),
            yes_no(section.silver_credit),
            yes_no(section.gold_credit)
        ));
    }
    body.push_str("</table>\n");

    page("Progress", &body)
}

/// Render a single recorded section
pub fn render_section_detail(detail: &SectionDetail) -> String {
    let record = &detail.record;
    let body = format!(
        "<h2>{} - Section {}</h2>\n<dl>\n<dt>Team</dt><dd>{}</dd>\n<dt>Date</dt><dd>{}</dd>\n<dt>Section complete</dt><dd>{}</dd>\n<dt>Silver credit</dt><dd>{}</dd>\n<dt>Gold credit</dt><dd>{}</dd>\n</dl>\n<p><a href=\"{}\">Back to {}</a></p>\n",
        escape_html(&detail.name),
        escape_html(&record.section),
        escape_html(&record.team),
        escape_html(&record.date),
        yes_no(record.section_complete),
        yes_no(record.silver_credit),
        yes_no(record.gold_credit),
        escape_html(&student_href(&detail.name)),
        escape_html(&detail.name)
    );

    page("Section", &body)
}
