//! Typed layout/style configuration.
//!
//! Every property is pre-populated with its default at construction time, so
//! the style renderer does plain field access. Defaults together produce a
//! complete two-column page with a dark sidebar from an empty document.

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use crate::models::lenient;

/// Declares a config group whose fields are all lenient text with a literal default.
macro_rules! style_group {
    ($(#[$meta:meta])* $name:ident { $($field:ident = $default:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Deserialize)]
        #[serde(default)]
        pub struct $name {
            $(
                #[serde(deserialize_with = "lenient::text")]
                pub $field: String,
            )+
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $($field: $default.to_string(),)+
                }
            }
        }
    };
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    #[serde(deserialize_with = "lenient::or_default")]
    pub colors: Colors,
    #[serde(deserialize_with = "lenient::or_default")]
    pub typography: Typography,
    #[serde(rename = "layout", deserialize_with = "lenient::or_default")]
    pub arrangement: Arrangement,
    #[serde(deserialize_with = "lenient::or_default")]
    pub spacing: Spacing,
    #[serde(deserialize_with = "lenient::or_default")]
    pub elements: Elements,
}

impl LayoutConfig {
    pub fn from_document(doc: &Mapping) -> Self {
        lenient::decode(&Value::Mapping(doc.clone()))
    }

    /// Section identifiers for the sidebar, in render order.
    pub fn sidebar_sections(&self) -> &[String] {
        &self.arrangement.structure.sidebar.sections
    }

    /// Section identifiers for the main column, in render order.
    pub fn main_sections(&self) -> &[String] {
        &self.arrangement.structure.main.sections
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Colors
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Colors {
    #[serde(deserialize_with = "lenient::or_default")]
    pub main: MainColors,
    #[serde(deserialize_with = "lenient::or_default")]
    pub sidebar: SidebarColors,
}

style_group!(MainColors {
    text = "#333",
    background = "white",
    headings = "#3a4750",
    muted = "#666",
    secondary = "#555",
});

style_group!(SidebarColors {
    background = "#3a4750",
    text = "white",
});

// ────────────────────────────────────────────────────────────────────────────
// Typography
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Typography {
    #[serde(deserialize_with = "lenient::text")]
    pub font_family: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub spacing: LineSpacing,
    #[serde(deserialize_with = "lenient::or_default")]
    pub sizes: FontSizes,
    #[serde(deserialize_with = "lenient::or_default")]
    pub weights: FontWeights,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font_family: "Arial, sans-serif".to_string(),
            spacing: LineSpacing::default(),
            sizes: FontSizes::default(),
            weights: FontWeights::default(),
        }
    }
}

style_group!(LineSpacing {
    line_height = "1.4",
    sidebar_line_height = "1.3",
    profile_line_height = "1.5",
});

style_group!(FontSizes {
    name = "36px",
    main_headings = "18px",
    sidebar_headings = "16px",
    sidebar_subheadings = "12px",
    sidebar_text = "10px",
    job_titles = "12px",
    body_text = "10px",
    profile_text = "11px",
});

style_group!(FontWeights {
    headings = "bold",
    job_titles = "bold",
});

// ────────────────────────────────────────────────────────────────────────────
// Page structure
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Arrangement {
    #[serde(deserialize_with = "lenient::or_default")]
    pub page: PageSize,
    #[serde(deserialize_with = "lenient::or_default")]
    pub structure: Regions,
}

style_group!(PageSize {
    max_width = "8.5in",
    min_height = "11in",
});

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Regions {
    #[serde(deserialize_with = "lenient::or_default")]
    pub sidebar: SidebarRegion,
    #[serde(deserialize_with = "lenient::or_default")]
    pub main: MainRegion,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SidebarRegion {
    #[serde(deserialize_with = "lenient::text")]
    pub width: String,
    #[serde(deserialize_with = "lenient::texts")]
    pub sections: Vec<String>,
}

impl Default for SidebarRegion {
    fn default() -> Self {
        Self {
            width: "35%".to_string(),
            sections: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MainRegion {
    #[serde(deserialize_with = "lenient::text")]
    pub width: String,
    #[serde(deserialize_with = "lenient::texts")]
    pub sections: Vec<String>,
}

impl Default for MainRegion {
    fn default() -> Self {
        Self {
            width: "65%".to_string(),
            sections: Vec::new(),
        }
    }
}

style_group!(Spacing {
    container_padding = "40px",
    sidebar_padding = "30px",
    section_margin = "25px",
    subsection_margin = "15px",
    item_margin = "8px",
    list_indent = "15px",
});

// ────────────────────────────────────────────────────────────────────────────
// Decorative elements
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Elements {
    #[serde(deserialize_with = "lenient::or_default")]
    pub profile_image: ProfileImageStyle,
    #[serde(deserialize_with = "lenient::or_default")]
    pub borders: Borders,
    #[serde(deserialize_with = "lenient::or_default")]
    pub job_header: JobHeaderStyle,
}

style_group!(ProfileImageStyle {
    width = "120px",
    height = "120px",
    border_radius = "50%",
    margin_bottom = "30px",
});

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Borders {
    #[serde(deserialize_with = "lenient::or_default")]
    pub sidebar_headings: SidebarHeadingBorder,
    #[serde(deserialize_with = "lenient::or_default")]
    pub main_headings: MainHeadingBorder,
}

style_group!(SidebarHeadingBorder {
    bottom = "2px solid #5a6a7a",
    padding_bottom = "8px",
});

style_group!(MainHeadingBorder {
    bottom = "2px solid #ddd",
    padding_bottom = "5px",
});

style_group!(JobHeaderStyle {
    display = "flex",
    justify_content = "space-between",
    align_items = "center",
});
