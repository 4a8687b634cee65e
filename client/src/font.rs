//! Web font loading for the document shell.
//!
//! Builds a Google Fonts CSS2 stylesheet URL and a body class for one
//! family. The shell links the stylesheet, emits the class rule, and puts
//! the class on `<body>`.

#[cfg(test)]
#[path = "font_test.rs"]
mod font_test;

const GOOGLE_FONTS_CSS2: &str = "https://fonts.googleapis.com/css2";

const KNOWN_SUBSETS: &[&str] = &[
    "latin",
    "latin-ext",
    "cyrillic",
    "cyrillic-ext",
    "greek",
    "greek-ext",
    "vietnamese",
];

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FontError {
    #[error("font family must not be empty")]
    EmptyFamily,

    #[error("at least one subset is required")]
    NoSubsets,

    #[error("unknown font subset: {0}")]
    UnknownSubset(String),

    #[error("at least one weight is required")]
    NoWeights,

    #[error("invalid font weight {0} (expected 100..=900 in steps of 100)")]
    InvalidWeight(u16),
}

/// A loaded font family ready to be referenced from markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontHandle {
    pub family: String,
    pub class_name: String,
    pub stylesheet_href: String,
    pub subsets: Vec<String>,
    pub weights: Vec<u16>,
}

impl FontHandle {
    /// CSS rule binding `class_name` to the family.
    pub fn css_rule(&self) -> String {
        format!(".{} {{ font-family: '{}', sans-serif; }}", self.class_name, self.family)
    }
}

/// Validate a family/subset/weight selection and build its handle.
///
/// # Errors
///
/// Returns an error for a blank family, an empty or unknown subset, or a
/// weight outside 100..=900 or not a multiple of 100.
pub fn load_google_font(family: &str, subsets: &[&str], weights: &[u16]) -> Result<FontHandle, FontError> {
    let family = family.split_whitespace().collect::<Vec<_>>().join(" ");
    if family.is_empty() {
        return Err(FontError::EmptyFamily);
    }

    if subsets.is_empty() {
        return Err(FontError::NoSubsets);
    }
    if let Some(unknown) = subsets.iter().find(|s| !KNOWN_SUBSETS.contains(*s)) {
        return Err(FontError::UnknownSubset((*unknown).to_owned()));
    }

    if weights.is_empty() {
        return Err(FontError::NoWeights);
    }
    if let Some(&bad) = weights.iter().find(|w| !(100..=900).contains(*w) || *w % 100 != 0) {
        return Err(FontError::InvalidWeight(bad));
    }
    let mut weights = weights.to_vec();
    weights.sort_unstable();
    weights.dedup();

    let mut subsets: Vec<String> = subsets.iter().map(|s| (*s).to_owned()).collect();
    subsets.sort_unstable();
    subsets.dedup();

    Ok(FontHandle {
        class_name: class_name(&family),
        stylesheet_href: stylesheet_href(&family, &weights),
        family,
        subsets,
        weights,
    })
}

/// The shell's typeface: Ubuntu, latin, light through bold.
///
/// # Errors
///
/// Never in practice; the selection is fixed and valid.
pub fn ubuntu() -> Result<FontHandle, FontError> {
    load_google_font("Ubuntu", &["latin"], &[300, 400, 500, 700])
}

fn class_name(family: &str) -> String {
    format!("font-{}", family.to_ascii_lowercase().replace(' ', "-"))
}

fn stylesheet_href(family: &str, weights: &[u16]) -> String {
    let weights = weights.iter().map(u16::to_string).collect::<Vec<_>>().join(";");
    format!("{GOOGLE_FONTS_CSS2}?family={}:wght@{weights}&display=swap", family.replace(' ', "+"))
}
