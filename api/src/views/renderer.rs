//! Page renderer
//!
//! Renders the roster and dashboard projections to HTML.

use crate::app::{RosterView, Standings, TeamStanding};

const STYLE: &str = "\
body { font-family: sans-serif; margin: 2em; }
nav a { margin-right: 1em; }
.team-card { border: 3px solid #ccc; margin: 10px 0; padding: 15px; border-radius: 5px; }
.team-points { font-size: 24px; font-weight: bold; }
.delete-student { margin-left: 0.5em; }
table.sections td, table.sections th { padding: 4px 12px; text-align: left; }
";

const DELETE_SCRIPT: &str = "\
document.querySelectorAll('.delete-student').forEach(function (button) {
  button.addEventListener('click', function () {
    var name = button.dataset.name;
    if (!confirm('Remove ' + name + ' from the roster?')) { return; }
    fetch('/delete_student', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({ name: name })
    }).then(function (response) {
      if (response.ok) {
        window.location.reload();
      } else {
        response.json()
          .then(function (body) { alert('Could not delete ' + name + ': ' + (body.details || body.error)); })
          .catch(function () { alert('Could not delete ' + name); });
      }
    }).catch(function () { alert('Could not delete ' + name); });
  });
});
";

/// Render the roster page: members per team plus add/delete controls
pub fn render_roster(view: &RosterView) -> String {
    let mut body = String::new();

    body.push_str("<h2>Add New Student</h2>\n");
    body.push_str("<form action=\"/add_student\" method=\"POST\">\n");
    body.push_str("  <input type=\"text\" name=\"name\" placeholder=\"Student Name\" required>\n");
    body.push_str("  <select name=\"team\" required>\n");
    for team in &view.teams {
        let team = escape_html(team);
        body.push_str(&format!(
            "    <option value=\"{}\">{}</option>\n",
            team, team
        ));
    }
    body.push_str("  </select>\n");
    body.push_str("  <button type=\"submit\">Add Student</button>\n");
    body.push_str("</form>\n\n");

    body.push_str("<h2>Roster</h2>\n");
    if view.groups.is_empty() {
        body.push_str("<p><em>No students yet.</em></p>\n");
    }
    for (team, members) in &view.groups {
        body.push_str(&format!(
            "<section class=\"team\">\n<h3>{} ({})</h3>\n<ul>\n",
            escape_html(team),
            members.len()
        ));
        for student in members {
            let name = escape_html(&student.name);
            body.push_str(&format!(
                "  <li>{}<button type=\"button\" class=\"delete-student\" data-name=\"{}\">Delete</button></li>\n",
                name, name
            ));
        }
        body.push_str("</ul>\n</section>\n");
    }

    body.push_str(&format!("<script>\n{}</script>\n", DELETE_SCRIPT));

    page("Roster", &body)
}

/// Render the dashboard page: one card per team with its point total
pub fn render_dashboard(standings: &Standings) -> String {
    let mut body = String::new();

    body.push_str("<h2>Team Standings</h2>\n");
    if standings.is_empty() {
        body.push_str("<p><em>No teams configured.</em></p>\n");
    }
    for (name, team) in standings {
        body.push_str(&render_team_card(name, team));
    }

    page("Dashboard", &body)
}

fn render_team_card(name: &str, team: &TeamStanding) -> String {
    let mut card = format!(
        "<div class=\"team-card\" style=\"border-color: {}\">\n<h3>{}</h3>\n<p class=\"team-points\">Total Points: {}</p>\n",
        escape_html(&team.color),
        escape_html(name),
        team.points
    );

    if team.members.is_empty() {
        card.push_str("<p><em>No members yet.</em></p>\n");
    } else {
        card.push_str("<h4>Team Members:</h4>\n<ul>\n");
        for member in &team.members {
            card.push_str(&format!(
                "  <li>{} - {} sections completed ({} points)</li>\n",
                escape_html(&member.name),
                member.sections_completed,
                member.points
            ));
        }
        card.push_str("</ul>\n");
    }

    card.push_str("</div>\n");
    card
}

pub(super) fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{} - Reading Teams Tracker</title>\n<style>\n{}</style>\n</head>\n<body>\n<h1>Reading Teams Tracker</h1>\n<nav><a href=\"/roster\">Roster</a><a href=\"/dashboard\">Dashboard</a><a href=\"/progress\">Progress</a></nav>\n{}</body>\n</html>\n",
        title, STYLE, body
    )
}

/// Escape text for use in HTML element content and quoted attributes
pub(super) fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
