use super::{text, text_or, Layout};
use crate::resume::ResumeData;

/// `layout-2`: header with name and contact details side by side, summary
/// under a divider, then a two-by-two grid of experience, education,
/// projects and skills.
pub struct Modern;

impl Layout for Modern {
    fn id(&self) -> &'static str {
        "layout-2"
    }

    fn render(&self, data: &ResumeData) -> String {
        let b = &data.basic;
        let mut html = String::new();

        html.push_str("<div class=\"cv cv-modern\">\n");
        html.push_str("<header>\n<div class=\"identity\">\n");
        html.push_str(&format!("<h1>{}</h1>\n", text_or(&b.name, "Your Name")));
        html.push_str(&format!(
            "<p class=\"role\">{}</p>\n",
            text_or(&b.title, "Professional Title")
        ));
        html.push_str("</div>\n<div class=\"contact\">\n");
        for line in [&b.email, &b.phone] {
            let value = text(line);
            if !value.is_empty() {
                html.push_str(&format!("<p>{value}</p>\n"));
            }
        }
        if b.city.is_some() || b.state.is_some() {
            html.push_str(&format!(
                "<p>{}, {}</p>\n",
                text(&b.city),
                text(&b.state)
            ));
        }
        html.push_str("</div>\n</header>\n<hr/>\n");

        html.push_str(&format!(
            "<p class=\"intro\">{}</p>\n",
            text_or(&b.intro, "Short summary about you.")
        ));

        html.push_str("<div class=\"grid\">\n");

        html.push_str("<section class=\"experience\">\n<h2>Experience</h2>\n");
        if data.experience.is_empty() {
            html.push_str("<p class=\"placeholder\">Add your experience</p>\n");
        } else {
            for ex in &data.experience {
                html.push_str(&format!(
                    "<div class=\"entry\"><strong>{}</strong><span>{} \u{2022} {} - {}</span></div>\n",
                    text_or(&ex.position, "Position"),
                    text(&ex.org),
                    text(&ex.start),
                    text(&ex.end),
                ));
            }
        }
        html.push_str("</section>\n");

        html.push_str("<section class=\"education\">\n<h2>Education</h2>\n");
        if data.education.is_empty() {
            html.push_str("<p class=\"placeholder\">Add your education</p>\n");
        } else {
            for ed in &data.education {
                html.push_str(&format!(
                    "<div class=\"entry\"><strong>{}</strong><span>{} \u{2022} {}</span></div>\n",
                    text_or(&ed.degree, "Degree"),
                    text(&ed.institution),
                    text(&ed.year),
                ));
            }
        }
        html.push_str("</section>\n");

        html.push_str("<section class=\"projects\">\n<h2>Projects</h2>\n");
        if data.projects.is_empty() {
            html.push_str("<p class=\"placeholder\">Add projects</p>\n");
        } else {
            for project in &data.projects {
                html.push_str(&format!(
                    "<div class=\"entry\"><strong>{}</strong><span>{}</span><p>{}</p></div>\n",
                    text_or(&project.title, "Project"),
                    text(&project.technologies),
                    text(&project.description),
                ));
            }
        }
        html.push_str("</section>\n");

        html.push_str("<section class=\"skills\">\n<h2>Skills</h2>\n");
        if data.skills.is_empty() {
            html.push_str("<p class=\"placeholder\">Add skills</p>\n");
        } else {
            html.push_str("<ul>\n");
            for skill in &data.skills {
                let level = skill.level.unwrap_or(0).min(100);
                html.push_str(&format!(
                    "<li><span>{}</span><meter value=\"{level}\" max=\"100\">{level}%</meter></li>\n",
                    text_or(&skill.name, "Skill"),
                ));
            }
            html.push_str("</ul>\n");
        }
        html.push_str("</section>\n</div>\n");

        html.push_str("<footer class=\"social\">\n");
        if data.social.is_empty() {
            html.push_str("<p class=\"placeholder\">Add social links</p>\n");
        } else {
            for link in &data.social {
                let url = text(&link.url);
                html.push_str(&format!(
                    "<a href=\"{url}\">{}</a>\n",
                    text_or(&link.platform, &url),
                ));
            }
        }
        html.push_str("</footer>\n</div>\n");

        html
    }
}
