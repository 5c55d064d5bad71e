use serde_yaml::Value;
use tracing::debug;

use crate::models::lenient;
use crate::models::profile::{Contact, EducationSection, ItemList, Profile, SkillsSection};
use crate::render::sections::{resolve, title_heading, Dispatch, SidebarKind};

/// Renders one sidebar section. Unknown identifiers yield an empty string.
pub fn render_sidebar_section(id: &str, profile: &Profile) -> String {
    match resolve(id, "contact", profile, SidebarKind::from_id) {
        Dispatch::Personal => render_contact(&profile.personal.contact),
        Dispatch::Bespoke(kind, section) => {
            let mut html = title_heading(section);
            html.push_str(&render_body(kind, section));
            html
        }
        Dispatch::TitleOnly(section) => {
            debug!("Sidebar section '{id}' has no bespoke layout; rendering title only");
            title_heading(section)
        }
        Dispatch::Absent => {
            debug!("Sidebar section '{id}' not found; skipping");
            String::new()
        }
    }
}

fn render_body(kind: SidebarKind, section: &Value) -> String {
    match kind {
        SidebarKind::Education => render_education(&lenient::decode(section)),
        SidebarKind::Skills => render_skills(&lenient::decode(section)),
        SidebarKind::FavoriteDishes => render_bulleted_list(&lenient::decode(section)),
        SidebarKind::Interests => render_inline_list(&lenient::decode(section)),
    }
}

fn render_contact(contact: &Contact) -> String {
    let location = &contact.location;
    let mut html = format!(
        r#"
        <h2>CONTACT</h2>
        <p>{}</p>
        <p>{}, {} {}</p>
        <br>
        <p><strong>Website:</strong></p>
        "#,
        contact.email, location.city, location.state, location.zip
    );
    for link in &contact.links {
        html.push_str(&format!("<p>{}</p>", link.display));
    }
    html
}

fn render_education(section: &EducationSection) -> String {
    section
        .degrees
        .iter()
        .map(|d| {
            format!(
                r#"
                <h3>{}</h3>
                <p>{}</p>
                <p><em>{}</em></p>
                "#,
                d.degree, d.graduation_year, d.institution
            )
        })
        .collect()
}

fn render_skills(section: &SkillsSection) -> String {
    section
        .categories
        .iter()
        .map(|c| {
            format!(
                r#"
                <div class="skills-category">
                    <strong>• {}:</strong>
                    <p>{}</p>
                </div>
                "#,
                c.name,
                c.items.join(", ")
            )
        })
        .collect()
}

fn render_bulleted_list(list: &ItemList) -> String {
    let mut html = String::from("<ul>");
    for item in &list.items {
        html.push_str(&format!("<li>• {item}</li>"));
    }
    html.push_str("</ul>");
    html
}

fn render_inline_list(list: &ItemList) -> String {
    format!("<p>{}</p>", list.items.join(" • "))
}
