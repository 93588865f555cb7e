use super::{text, text_or, Layout};
use crate::resume::ResumeData;

/// `layout-1`: two-column document — education and experience in the main
/// column, contact, skills and projects in the sidebar, social links in the
/// footer.
pub struct Classic;

impl Layout for Classic {
    fn id(&self) -> &'static str {
        "layout-1"
    }

    fn render(&self, data: &ResumeData) -> String {
        let b = &data.basic;
        let mut html = String::new();

        html.push_str("<div class=\"cv cv-classic\">\n");
        html.push_str("<div class=\"main\">\n");
        html.push_str(&format!("<h1>{}</h1>\n", text_or(&b.name, "Your Name")));
        html.push_str(&format!(
            "<p class=\"role\">{}</p>\n",
            text_or(&b.title, "Professional Title")
        ));
        html.push_str(&format!(
            "<p class=\"intro\">{}</p>\n",
            text_or(
                &b.intro,
                "Short professional summary about you. Keep it crisp and focused on your strengths."
            )
        ));

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

        html.push_str("<section class=\"experience\">\n<h2>Experience</h2>\n");
        if data.experience.is_empty() {
            html.push_str("<p class=\"placeholder\">Add your experience</p>\n");
        } else {
            for ex in &data.experience {
                html.push_str(&format!(
                    "<div class=\"entry\"><strong>{} \u{2014} {}</strong><span>{} - {} \u{2022} {}</span><p>{}</p></div>\n",
                    text_or(&ex.position, "Position"),
                    text(&ex.org),
                    text(&ex.start),
                    text(&ex.end),
                    text(&ex.location),
                    text(&ex.description),
                ));
            }
        }
        html.push_str("</section>\n</div>\n");

        html.push_str("<div class=\"side\">\n");
        html.push_str("<section class=\"contact\">\n<h2>Contact</h2>\n");
        for line in [&b.email, &b.phone, &b.address] {
            let value = text(line);
            if !value.is_empty() {
                html.push_str(&format!("<p>{value}</p>\n"));
            }
        }
        html.push_str("</section>\n");

        html.push_str("<section class=\"skills\">\n<h2>Skills</h2>\n");
        if data.skills.is_empty() {
            html.push_str("<p class=\"placeholder\">Add skills</p>\n");
        } else {
            html.push_str("<ul>\n");
            for skill in &data.skills {
                html.push_str(&format!(
                    "<li>{} ({}%)</li>\n",
                    text_or(&skill.name, "Skill"),
                    skill.level.unwrap_or(0).min(100),
                ));
            }
            html.push_str("</ul>\n");
        }
        html.push_str("</section>\n");

        html.push_str("<section class=\"projects\">\n<h2>Projects</h2>\n");
        if data.projects.is_empty() {
            html.push_str("<p class=\"placeholder\">Add projects</p>\n");
        } else {
            for project in &data.projects {
                html.push_str(&format!(
                    "<div class=\"entry\"><strong>{}</strong><span>{} \u{2022} Team: {}</span></div>\n",
                    text_or(&project.title, "Project"),
                    text(&project.duration),
                    text(&project.team_size),
                ));
            }
        }
        html.push_str("</section>\n</div>\n");

        html.push_str("<footer class=\"social\">\n");
        if data.social.is_empty() {
            html.push_str("<p class=\"placeholder\">Add social links</p>\n");
        } else {
            for link in &data.social {
                html.push_str(&format!(
                    "<span>{}: {}</span>\n",
                    text_or(&link.platform, "Link"),
                    text(&link.url),
                ));
            }
        }
        html.push_str("</footer>\n</div>\n");

        html
    }
}
