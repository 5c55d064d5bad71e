use crate::models::{LayoutConfig, Profile};
use crate::render::main_content::render_main_section;
use crate::render::sidebar::render_sidebar_section;
use crate::render::style::generate_css;

/// Assembles the full HTML page.
///
/// Section order in each region is taken verbatim from the layout lists;
/// duplicates render twice. Same inputs always produce the same bytes.
pub fn generate_html(profile: &Profile, layout: &LayoutConfig) -> String {
    let personal = &profile.personal;
    let css = generate_css(layout);

    let mut sidebar_html = format!(
        r#"<div class="profile-image" style="background-image: url('{}');"></div>"#,
        personal.profile_image.path
    );
    for id in layout.sidebar_sections() {
        sidebar_html.push_str(&render_sidebar_section(id, profile));
    }

    let main_html: String = layout
        .main_sections()
        .iter()
        .map(|id| render_main_section(id, profile))
        .collect();

    let title = if personal.full_name.is_empty() {
        "Resume"
    } else {
        personal.full_name.as_str()
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        {css}
    </style>
</head>
<body>
    <div class="resume-container">
        <div class="sidebar">
            {sidebar_html}
        </div>
        <div class="main-content">
            {main_html}
        </div>
    </div>
</body>
</html>"#
    )
}
