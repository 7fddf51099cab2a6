//! HTML writer for `View` descriptions.
//!
//! Layout: sidebar (profile + menu) on the left, page body on the right.
//! All text passes through `escape`, including the static copy.

use crate::demo::canned::ACCEPTED_RESUME_EXTENSIONS;
use crate::demo::{DemoInputs, DemoOutput};
use crate::pages::content::{self, CardAction, ContactDetails, ProjectCard, SITE_ICON};
use crate::pages::view::{MenuEntry, PageView, View};

const STYLE: &str = "\
body{margin:0;font-family:system-ui,-apple-system,Segoe UI,Roboto,Arial,sans-serif;display:flex;min-height:100vh}\
aside{width:260px;padding:24px;background:#f0f2f6}\
aside nav a{display:block;padding:6px 8px;border-radius:6px;color:#262730;text-decoration:none}\
aside nav a.selected{background:#ff4b4b;color:#fff}\
main{flex:1;padding:32px 48px}\
.cards{display:flex;gap:16px;flex-wrap:wrap}\
.card{width:280px;border:1px solid #ddd;border-radius:8px;padding:16px}\
.placeholder{height:140px;background:#eee;display:flex;align-items:center;justify-content:center;color:#888}\
.columns{display:flex;gap:32px}.columns>section{flex:1}\
.info{background:#e8f0fe;padding:12px;border-radius:6px}\
.warning{background:#fff8e1;padding:12px;border-radius:6px}\
.metric .value{font-size:2em}.metric .delta{color:#09ab3b}";

/// Escapes text for element content and double-quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

/// Renders a complete HTML document.
pub fn render_document(view: &View) -> String {
    let mut html = String::new();
    html.push_str(&format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <title>{icon} {title}</title><style>{STYLE}</style></head><body>",
        icon = SITE_ICON,
        title = escape(view.title),
    ));
    write_sidebar(&mut html, view);
    html.push_str("<main>");
    write_page(&mut html, &view.page);
    html.push_str("</main></body></html>");
    html
}

fn write_sidebar(html: &mut String, view: &View) {
    html.push_str(&format!(
        "<aside><h2>{}</h2><p><strong>{}</strong></p><p>{}</p><nav aria-label=\"Navigate\">",
        escape(view.profile.name),
        escape(view.profile.role),
        escape(view.profile.education),
    ));
    for entry in &view.menu {
        write_menu_entry(html, entry);
    }
    html.push_str("</nav></aside>");
}

fn write_menu_entry(html: &mut String, entry: &MenuEntry) {
    let class = if entry.selected { " class=\"selected\"" } else { "" };
    html.push_str(&format!(
        "<a href=\"/pages/{}\"{class}>{}</a>",
        entry.page.slug(),
        escape(entry.label),
    ));
}

fn write_page(html: &mut String, page: &PageView) {
    match page {
        PageView::Home {
            title,
            subtitle,
            intro,
            hint,
            cards,
        } => {
            html.push_str(&format!(
                "<h1>{}</h1><h3>{}</h3><p>{}</p><h3>Projects</h3><div class=\"cards\">",
                escape(title),
                escape(subtitle),
                escape(intro),
            ));
            for card in cards.iter() {
                write_card(html, card);
            }
            html.push_str(&format!("</div><p class=\"info\">{}</p>", escape(hint)));
        }
        PageView::ResumeOptimizerDemo {
            title,
            intro,
            inputs,
            outputs,
        } => {
            html.push_str(&format!(
                "<h1>{}</h1><p>{}</p><div class=\"columns\">",
                escape(title),
                escape(intro)
            ));
            write_demo_inputs(html, inputs);
            html.push_str("<section id=\"outputs\"><h3>Outputs</h3>");
            for output in outputs {
                write_demo_output(html, output);
            }
            html.push_str("</section></div>");
        }
        PageView::PublicSafetyHousing {
            title,
            summary,
            highlights,
            tools,
        } => {
            html.push_str(&format!("<h1>{}</h1><p>{}</p><ul>", escape(title), escape(summary)));
            for line in highlights.iter() {
                html.push_str(&format!("<li>{}</li>", escape(line)));
            }
            let tools = tools.join(" · ");
            html.push_str(&format!("</ul><p><strong>Tools:</strong> {}</p>", escape(&tools)));
        }
        PageView::ComingSoon { title, body } => {
            html.push_str(&format!("<h1>{}</h1><p>{}</p>", escape(title), escape(body)));
        }
        PageView::Contact { title, details } => {
            html.push_str(&format!("<h1>{}</h1>", escape(title)));
            write_contact(html, details);
        }
    }
}

fn write_card(html: &mut String, card: &ProjectCard) {
    html.push_str("<div class=\"card\">");
    match card.image {
        Some(src) => {
            html.push_str(&format!(
                "<img src=\"{}\" alt=\"{}\" width=\"100%\">",
                escape(src),
                escape(card.title)
            ));
        }
        None => html.push_str("<div class=\"placeholder\">Image coming soon</div>"),
    }
    html.push_str(&format!(
        "<h4>{}</h4><p><em>{}</em></p><p>{}</p>",
        escape(card.title),
        escape(card.subtitle),
        escape(card.description),
    ));
    match card.action {
        CardAction::Open(_) => {
            html.push_str(&format!(
                "<form method=\"post\" action=\"/projects/{}/open\"><button type=\"submit\">Open project</button></form>",
                escape(card.slug)
            ));
        }
        CardAction::ComingSoon => html.push_str("<button type=\"button\" disabled>Coming soon</button>"),
    }
    html.push_str("</div>");
}

fn write_demo_inputs(html: &mut String, inputs: &DemoInputs) {
    let accept = ACCEPTED_RESUME_EXTENSIONS
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(",");
    html.push_str(&format!(
        "<section id=\"inputs\"><h3>Inputs</h3>\
         <form method=\"post\" action=\"/demo\" enctype=\"multipart/form-data\">\
         <label>{upload}<br><input type=\"file\" name=\"resume\" accept=\"{accept}\"></label>",
        upload = escape(content::DEMO_UPLOAD_LABEL),
    ));
    if let Some(resume) = &inputs.resume {
        html.push_str(&format!(
            "<p><small>Received: {} ({} bytes)</small></p>",
            escape(&resume.file_name),
            resume.size_bytes
        ));
    }
    html.push_str(&format!(
        "<br><label>{jd_label}<br><textarea name=\"job_description\" rows=\"11\" cols=\"60\">{jd}</textarea></label><br>\
         <button type=\"submit\" name=\"action\" value=\"analyze\">{analyze}</button> \
         <button type=\"submit\" name=\"action\" value=\"suggest\">{suggest}</button>\
         </form></section>",
        jd_label = escape(content::DEMO_JD_LABEL),
        jd = escape(&inputs.job_description),
        analyze = escape(content::ANALYZE_BUTTON),
        suggest = escape(content::SUGGEST_BUTTON),
    ));
}

fn write_demo_output(html: &mut String, output: &DemoOutput) {
    match output {
        DemoOutput::MatchAnalysis {
            metric,
            checklist,
            suggestion_label,
            suggestion,
        } => {
            html.push_str(&format!(
                "<div class=\"metric\"><div>{}</div><div class=\"value\">{}</div><div class=\"delta\">{}</div></div><ul>",
                escape(metric.label),
                escape(metric.value),
                escape(metric.delta),
            ));
            for item in checklist.iter() {
                html.push_str(&format!("<li>{}</li>", escape(item)));
            }
            html.push_str(&format!(
                "</ul><p><strong>{}</strong> {}</p>",
                escape(suggestion_label),
                escape(suggestion)
            ));
        }
        DemoOutput::Suggestions {
            summary_heading,
            summary,
            bullets_heading,
            bullets,
        } => {
            html.push_str(&format!(
                "<p><strong>{}</strong></p><p>{}</p><p><strong>{}</strong></p><ul>",
                escape(summary_heading),
                escape(summary),
                escape(bullets_heading),
            ));
            for bullet in bullets.iter() {
                html.push_str(&format!("<li>{}</li>", escape(bullet)));
            }
            html.push_str("</ul>");
        }
        DemoOutput::Warning { message } => {
            html.push_str(&format!("<div class=\"warning\">⚠️ {}</div>", escape(message)));
        }
    }
}

fn write_contact(html: &mut String, details: &ContactDetails) {
    html.push_str(&format!(
        "<p><strong>Email:</strong> <a href=\"mailto:{email}\">{email}</a></p>\
         <p><strong>LinkedIn:</strong> <a href=\"{linkedin}\">{linkedin}</a></p>\
         <p><strong>GitHub:</strong> <a href=\"{github}\">{github}</a></p>\
         <p><strong>Work Authorization:</strong> {auth}</p>",
        email = escape(details.email),
        linkedin = escape(details.linkedin),
        github = escape(details.github),
        auth = escape(details.work_authorization),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::{DemoSubmission, DemoTriggers};
    use crate::pages::view::{render, RenderRequest};
    use crate::pages::PageId;

    fn page_html(page: PageId, demo: Option<DemoSubmission>) -> String {
        render_document(&render(&RenderRequest { page, demo }))
    }

    fn submission(jd: &str, analyze: bool, suggest: bool) -> DemoSubmission {
        DemoSubmission {
            inputs: DemoInputs {
                resume: None,
                job_description: jd.to_string(),
            },
            triggers: DemoTriggers { analyze, suggest },
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_menu_marks_selected_entry() {
        let html = page_html(PageId::Contact, None);
        assert!(html.contains("<a href=\"/pages/contact\" class=\"selected\">"));
        assert!(html.contains("<a href=\"/pages/home\">"));
    }

    #[test]
    fn test_home_renders_open_and_disabled_cards() {
        let html = page_html(PageId::Home, None);
        assert!(html.contains("action=\"/projects/ai-resume-optimizer/open\""));
        assert!(html.contains("<button type=\"button\" disabled>Coming soon</button>"));
        assert!(html.contains("Image coming soon"));
    }

    #[test]
    fn test_card_with_image_renders_img() {
        let card = ProjectCard {
            slug: "x",
            title: "X",
            subtitle: "",
            description: "",
            image: Some("/img/x.png"),
            action: CardAction::ComingSoon,
        };
        let mut html = String::new();
        write_card(&mut html, &card);
        assert!(html.contains("<img src=\"/img/x.png\""));
        assert!(!html.contains("placeholder"));
    }

    #[test]
    fn test_upload_picker_filters_resume_types() {
        let html = page_html(PageId::ResumeOptimizerDemo, None);
        assert!(html.contains("accept=\".pdf,.doc,.docx\""));
    }

    #[test]
    fn test_no_triggers_leave_outputs_empty() {
        let html = page_html(PageId::ResumeOptimizerDemo, Some(submission("jd", false, false)));
        assert!(html.contains("<section id=\"outputs\"><h3>Outputs</h3></section>"));
    }

    #[test]
    fn test_empty_jd_renders_warning_without_metric() {
        let html = page_html(PageId::ResumeOptimizerDemo, Some(submission("", true, false)));
        assert!(html.contains("Please paste a job description first."));
        assert!(!html.contains("74%"));
    }

    #[test]
    fn test_analyze_renders_metric() {
        let html = page_html(
            PageId::ResumeOptimizerDemo,
            Some(submission("Looking for a Python/SQL/NLP engineer", true, false)),
        );
        assert!(html.contains("<div class=\"value\">74%</div>"));
        assert!(html.contains("+12% (simulated)"));
        assert!(html.contains("<li>✅ Python</li>"));
    }

    #[test]
    fn test_job_description_is_escaped_in_textarea() {
        let html = page_html(
            PageId::ResumeOptimizerDemo,
            Some(submission("</textarea><script>", false, false)),
        );
        assert!(html.contains("&lt;/textarea&gt;&lt;script&gt;</textarea>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_contact_lists_static_links() {
        let html = page_html(PageId::Contact, None);
        assert!(html.contains("zoezhou314@gmail.com"));
        assert!(html.contains("U.S. Permanent Resident (Green Card)"));
    }
}
