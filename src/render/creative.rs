use super::{esc, text, text_or, Layout};
use crate::resume::ResumeData;

/// `layout-3`: dark sidebar carrying the monogram, contact details, skills
/// and social links; profile, experience, education and projects in the
/// main panel.
pub struct Creative;

impl Layout for Creative {
    fn id(&self) -> &'static str {
        "layout-3"
    }

    fn render(&self, data: &ResumeData) -> String {
        let b = &data.basic;
        let mut html = String::new();

        let monogram = b
            .name
            .as_deref()
            .and_then(|n| n.trim().chars().next())
            .unwrap_or('U');

        html.push_str("<div class=\"cv cv-creative\">\n");
        html.push_str("<aside class=\"sidebar\">\n");
        html.push_str(&format!(
            "<div class=\"monogram\">{}</div>\n",
            esc(&monogram.to_string())
        ));
        html.push_str(&format!("<h1>{}</h1>\n", text_or(&b.name, "Your Name")));
        html.push_str(&format!(
            "<p class=\"role\">{}</p>\n",
            text_or(&b.title, "Creative Designer")
        ));

        html.push_str("<section class=\"contact\">\n<h2>Contact</h2>\n");
        for line in [&b.email, &b.phone] {
            let value = text(line);
            if !value.is_empty() {
                html.push_str(&format!("<p>{value}</p>\n"));
            }
        }
        if b.city.is_some() || b.state.is_some() {
            html.push_str(&format!("<p>{}, {}</p>\n", text(&b.city), text(&b.state)));
        }
        html.push_str("</section>\n");

        html.push_str("<section class=\"skills\">\n<h2>Skills</h2>\n");
        if data.skills.is_empty() {
            html.push_str("<p class=\"placeholder\">Add skills</p>\n");
        } else {
            html.push_str("<ul>\n");
            for skill in &data.skills {
                html.push_str(&format!("<li>{}</li>\n", text_or(&skill.name, "Skill")));
            }
            html.push_str("</ul>\n");
        }
        html.push_str("</section>\n");

        html.push_str("<section class=\"social\">\n<h2>Social</h2>\n");
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
        html.push_str("</section>\n</aside>\n");

        html.push_str("<div class=\"main\">\n");
        html.push_str("<section class=\"profile\">\n<h2>Profile</h2>\n");
        html.push_str(&format!(
            "<p>{}</p>\n",
            text_or(
                &b.intro,
                "Creative professional with a passion for design and innovation."
            )
        ));
        html.push_str("</section>\n");

        html.push_str("<section class=\"experience\">\n<h2>Experience</h2>\n");
        if data.experience.is_empty() {
            html.push_str("<p class=\"placeholder\">Add your experience</p>\n");
        } else {
            for ex in &data.experience {
                html.push_str(&format!(
                    "<div class=\"entry\"><strong>{}</strong><em>{}</em><span>{} - {} \u{2022} {}</span><p>{}</p></div>\n",
                    text_or(&ex.position, "Position"),
                    text(&ex.org),
                    text(&ex.start),
                    text(&ex.end),
                    text(&ex.location),
                    text(&ex.description),
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
                    "<div class=\"entry\"><strong>{}</strong><span>{} \u{2022} {} \u{2022} {}</span></div>\n",
                    text_or(&ed.degree, "Degree"),
                    text(&ed.institution),
                    text(&ed.year),
                    text(&ed.percentage),
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
                    "<div class=\"entry\"><strong>{}</strong><span>{} \u{2022} {}</span><p>{}</p></div>\n",
                    text_or(&project.title, "Project"),
                    text(&project.duration),
                    text(&project.technologies),
                    text(&project.description),
                ));
            }
        }
        html.push_str("</section>\n</div>\n</div>\n");

        html
    }
}
