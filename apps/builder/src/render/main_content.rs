use serde_yaml::Value;
use tracing::debug;

use crate::models::lenient;
use crate::models::profile::{ExperienceSection, Job, Profile, ProfileSection};
use crate::render::sections::{resolve, title_heading, Dispatch, MainKind};

/// Renders one main-column section. Unknown identifiers yield an empty string.
pub fn render_main_section(id: &str, profile: &Profile) -> String {
    match resolve(id, "header", profile, MainKind::from_id) {
        Dispatch::Personal => format!("<h1>{}</h1>", profile.personal.full_name),
        Dispatch::Bespoke(kind, section) => {
            let mut html = title_heading(section);
            html.push_str(&render_body(kind, section));
            html
        }
        Dispatch::TitleOnly(section) => {
            debug!("Main section '{id}' has no bespoke layout; rendering title only");
            title_heading(section)
        }
        Dispatch::Absent => {
            debug!("Main section '{id}' not found; skipping");
            String::new()
        }
    }
}

/// Display form of a job date: the literal `present` becomes `Present`.
pub fn format_date(date: &str) -> &str {
    if date == "present" {
        "Present"
    } else {
        date
    }
}

fn render_body(kind: MainKind, section: &Value) -> String {
    match kind {
        MainKind::Profile => {
            let profile: ProfileSection = lenient::decode(section);
            format!(r#"<p class="profile-text">{}</p>"#, profile.content)
        }
        MainKind::Experience => {
            let experience: ExperienceSection = lenient::decode(section);
            experience.jobs.iter().map(render_job).collect()
        }
    }
}

fn render_job(job: &Job) -> String {
    let mut html = format!(
        r#"
                <div class="job-header">
                    <span class="job-title">{}</span>
                    <span class="job-date">{} – {}</span>
                </div>
                <p class="job-company">{} – {}</p>
                <ul>
                "#,
        job.position,
        format_date(&job.start_date),
        format_date(&job.end_date),
        job.company,
        job.location
    );
    for achievement in &job.achievements {
        html.push_str(&format!("<li>{achievement}</li>"));
    }
    html.push_str("</ul>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Mapping;

    fn profile(yaml: &str) -> Profile {
        let doc: Mapping = serde_yaml::from_str(yaml).unwrap();
        Profile::from_document(&doc)
    }

    const SAMPLE: &str = r#"
personal:
  full_name: Jane Doe
sections:
  profile:
    title: Profile
    content: Systems engineer who likes small tools.
  experience:
    title: Experience
    jobs:
      - position: Staff Engineer
        company: Acme
        location: Remote
        start_date: "2020-01"
        end_date: present
        achievements: [Shipped X, Cut build times in half]
      - position: Engineer
        company: Initech
        location: Austin, TX
        start_date: "2016-06"
        end_date: "2019-12"
        achievements: []
  awards:
    title: Awards
"#;

    // ── format_date ─────────────────────────────────────────────────────────

    #[test]
    fn test_format_date_present() {
        assert_eq!(format_date("present"), "Present");
    }

    #[test]
    fn test_format_date_other_casing_passes_through() {
        assert_eq!(format_date("Present"), "Present");
        assert_eq!(format_date("PRESENT"), "PRESENT");
        assert_eq!(format_date("2020-01"), "2020-01");
        assert_eq!(format_date(""), "");
    }

    // ── dispatch ────────────────────────────────────────────────────────────

    #[test]
    fn test_header_is_full_name() {
        assert_eq!(render_main_section("header", &profile(SAMPLE)), "<h1>Jane Doe</h1>");
    }

    #[test]
    fn test_header_without_personal_is_empty_heading() {
        assert_eq!(render_main_section("header", &profile("sections: {}\n")), "<h1></h1>");
    }

    #[test]
    fn test_profile_paragraph() {
        let html = render_main_section("profile", &profile(SAMPLE));
        assert_eq!(
            html,
            r#"<h2>PROFILE</h2><p class="profile-text">Systems engineer who likes small tools.</p>"#
        );
    }

    #[test]
    fn test_experience_jobs_in_document_order() {
        let html = render_main_section("experience", &profile(SAMPLE));
        assert!(html.starts_with("<h2>EXPERIENCE</h2>"));
        assert!(html.contains(r#"<span class="job-title">Staff Engineer</span>"#));
        assert!(html.contains(r#"<span class="job-date">2020-01 – Present</span>"#));
        assert!(html.contains(r#"<p class="job-company">Acme – Remote</p>"#));
        assert!(html.contains("<li>Shipped X</li><li>Cut build times in half</li></ul>"));

        let first = html.find("Staff Engineer").unwrap();
        let second = html.find("Initech").unwrap();
        assert!(first < second);
        assert!(html.contains(r#"<span class="job-date">2016-06 – 2019-12</span>"#));
    }

    #[test]
    fn test_unrecognised_section_is_title_only() {
        assert_eq!(render_main_section("awards", &profile(SAMPLE)), "<h2>AWARDS</h2>");
    }

    #[test]
    fn test_sidebar_only_identifier_is_empty_in_main() {
        assert_eq!(render_main_section("contact", &profile(SAMPLE)), "");
    }
}
