//! Style block generation from the typed layout config.
//!
//! Pure interpolation: every value comes from `LayoutConfig`, whose fields
//! already hold their defaults, plus a handful of fixed literals.

use crate::models::LayoutConfig;

/// Accumulates CSS rules in insertion order.
struct StyleSheet {
    css: String,
}

impl StyleSheet {
    fn new() -> Self {
        Self {
            css: String::with_capacity(4096),
        }
    }

    fn rule(&mut self, selector: &str, declarations: &[(&str, &str)]) {
        self.css.push_str(&format_rule(selector, declarations, ""));
    }

    fn media(&mut self, query: &str, rules: &[(&str, &[(&str, &str)])]) {
        self.css.push_str(&format!("@media {query} {{\n"));
        for (selector, declarations) in rules {
            self.css
                .push_str(&format_rule(selector, declarations, "    "));
        }
        self.css.push_str("}\n");
    }

    fn finish(self) -> String {
        self.css
    }
}

fn format_rule(selector: &str, declarations: &[(&str, &str)], indent: &str) -> String {
    let mut out = format!("{indent}{selector} {{\n");
    for (property, value) in declarations {
        out.push_str(&format!("{indent}    {property}: {value};\n"));
    }
    out.push_str(&format!("{indent}}}\n\n"));
    out
}

/// Produces the complete inline style block for the page.
pub fn generate_css(layout: &LayoutConfig) -> String {
    let colors = &layout.colors;
    let typo = &layout.typography;
    let sizes = &typo.sizes;
    let weights = &typo.weights;
    let spacing = &layout.spacing;
    let page = &layout.arrangement.page;
    let regions = &layout.arrangement.structure;
    let image = &layout.elements.profile_image;
    let borders = &layout.elements.borders;
    let job_header = &layout.elements.job_header;

    let sidebar_padding = format!("{} {}", spacing.container_padding, spacing.sidebar_padding);
    let image_margin = format!("0 auto {}", image.margin_bottom);

    let mut sheet = StyleSheet::new();

    sheet.rule(
        "*",
        &[("margin", "0"), ("padding", "0"), ("box-sizing", "border-box")],
    );

    sheet.rule(
        "body",
        &[
            ("font-family", &typo.font_family),
            ("line-height", &typo.spacing.line_height),
            ("color", &colors.main.text),
            ("background", &colors.main.background),
        ],
    );

    sheet.rule(
        ".resume-container",
        &[
            ("max-width", &page.max_width),
            ("min-height", &page.min_height),
            ("margin", "0 auto"),
            ("display", "flex"),
            ("box-shadow", "0 0 20px rgba(0,0,0,0.1)"),
        ],
    );

    sheet.rule(
        ".sidebar",
        &[
            ("width", &regions.sidebar.width),
            ("background", &colors.sidebar.background),
            ("color", &colors.sidebar.text),
            ("padding", &sidebar_padding),
        ],
    );

    sheet.rule(
        ".main-content",
        &[
            ("width", &regions.main.width),
            ("padding", &spacing.container_padding),
            ("background", &colors.main.background),
        ],
    );

    sheet.rule(
        ".profile-image",
        &[
            ("width", &image.width),
            ("height", &image.height),
            ("border-radius", &image.border_radius),
            ("margin", &image_margin),
            ("background-size", "cover"),
            ("background-position", "center"),
            ("background-repeat", "no-repeat"),
            ("background-color", "#ddd"),
        ],
    );

    // ── sidebar ─────────────────────────────────────────────────────────────

    sheet.rule(
        ".sidebar h2",
        &[
            ("font-size", &sizes.sidebar_headings),
            ("font-weight", &weights.headings),
            ("margin-bottom", &spacing.subsection_margin),
            ("letter-spacing", "1px"),
            ("border-bottom", &borders.sidebar_headings.bottom),
            ("padding-bottom", &borders.sidebar_headings.padding_bottom),
        ],
    );

    sheet.rule(
        ".sidebar h3",
        &[
            ("font-size", &sizes.sidebar_subheadings),
            ("font-weight", &weights.headings),
            ("margin-top", &spacing.subsection_margin),
            ("margin-bottom", "5px"),
        ],
    );

    sheet.rule(
        ".sidebar p, .sidebar li",
        &[
            ("font-size", &sizes.sidebar_text),
            ("margin-bottom", "5px"),
            ("line-height", &typo.spacing.sidebar_line_height),
        ],
    );

    sheet.rule(".sidebar ul", &[("list-style", "none")]);

    sheet.rule(".sidebar li", &[("margin-bottom", &spacing.item_margin)]);

    sheet.rule(
        ".skills-category",
        &[("margin-bottom", &spacing.subsection_margin)],
    );

    sheet.rule(
        ".skills-category strong",
        &[
            ("display", "block"),
            ("font-size", &sizes.sidebar_text),
            ("margin-bottom", "3px"),
        ],
    );

    // ── main column ─────────────────────────────────────────────────────────

    sheet.rule(
        ".main-content h1",
        &[
            ("font-size", &sizes.name),
            ("font-weight", &weights.headings),
            ("color", &colors.main.headings),
            ("margin-bottom", "10px"),
            ("letter-spacing", "2px"),
        ],
    );

    sheet.rule(
        ".main-content h2",
        &[
            ("font-size", &sizes.main_headings),
            ("font-weight", &weights.headings),
            ("color", &colors.main.headings),
            ("margin-top", &spacing.section_margin),
            ("margin-bottom", &spacing.subsection_margin),
            ("border-bottom", &borders.main_headings.bottom),
            ("padding-bottom", &borders.main_headings.padding_bottom),
        ],
    );

    sheet.rule(
        ".job-header",
        &[
            ("display", &job_header.display),
            ("justify-content", &job_header.justify_content),
            ("align-items", &job_header.align_items),
            ("margin-bottom", "5px"),
        ],
    );

    sheet.rule(
        ".job-title",
        &[
            ("font-size", &sizes.job_titles),
            ("font-weight", &weights.job_titles),
            ("color", &colors.main.headings),
        ],
    );

    sheet.rule(
        ".job-date",
        &[
            ("font-size", &sizes.body_text),
            ("color", &colors.main.muted),
            ("font-style", "italic"),
        ],
    );

    sheet.rule(
        ".job-company",
        &[
            ("font-size", &sizes.body_text),
            ("color", &colors.main.muted),
            ("font-style", "italic"),
            ("margin-bottom", &spacing.item_margin),
        ],
    );

    sheet.rule(
        ".main-content ul",
        &[
            ("margin-left", &spacing.list_indent),
            ("margin-bottom", &spacing.subsection_margin),
        ],
    );

    sheet.rule(
        ".main-content li",
        &[
            ("font-size", &sizes.body_text),
            ("margin-bottom", "3px"),
            ("color", &colors.main.secondary),
        ],
    );

    sheet.rule(
        ".profile-text",
        &[
            ("font-size", &sizes.profile_text),
            ("color", &colors.main.secondary),
            ("line-height", &typo.spacing.profile_line_height),
            ("margin-bottom", "20px"),
        ],
    );

    sheet.media(
        "print",
        &[(
            ".resume-container",
            &[
                ("box-shadow", "none"),
                ("max-width", "none"),
                ("width", "100%"),
            ],
        )],
    );

    sheet.finish()
}
