//! Font descriptors and the explicit font set used for text layout.

/// Font configuration for text rendering.
///
/// Describes which font to use, including family name, weight, and style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontDescriptor {
    /// Font family name (e.g., "Sans", "Monospace", "Go")
    pub family: String,

    /// Font weight (e.g., "normal", "bold", "light" or numeric 100-900)
    pub weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    pub style: String,
}

impl FontDescriptor {
    /// Creates a new font descriptor with the specified parameters.
    pub fn new(
        family: impl Into<String>,
        weight: impl Into<String>,
        style: impl Into<String>,
    ) -> Self {
        Self {
            family: family.into(),
            weight: weight.into(),
            style: style.into(),
        }
    }

    /// Regular upright face of `family`.
    pub fn regular(family: impl Into<String>) -> Self {
        Self::new(family, "normal", "normal")
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::regular("Sans")
    }
}

/// Ordered set of registered fonts.
///
/// The first entry decides weight and style; every family is offered to Pango
/// as a fallback list, so glyphs missing from the primary face still render.
/// Registration is explicit and idempotent: a canvas receives its set at
/// construction instead of relying on process-wide font state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSet {
    faces: Vec<FontDescriptor>,
}

impl Default for FontSet {
    fn default() -> Self {
        Self::new(FontDescriptor::default())
    }
}

impl FontSet {
    /// Creates a set whose primary face is `primary`.
    pub fn new(primary: FontDescriptor) -> Self {
        Self {
            faces: vec![primary],
        }
    }

    /// Registers a face. Returns `false` if an equal face was already present.
    pub fn register(&mut self, face: FontDescriptor) -> bool {
        if self.faces.contains(&face) {
            log::debug!("Font '{}' already registered", face.family);
            return false;
        }
        log::debug!("Registered font '{}'", face.family);
        self.faces.push(face);
        true
    }

    /// The face that decides weight and style.
    pub fn primary(&self) -> &FontDescriptor {
        &self.faces[0]
    }

    pub fn faces(&self) -> &[FontDescriptor] {
        &self.faces
    }

    /// Converts this set to a Pango font description string.
    ///
    /// Format: "Family[,Fallback...] Style Weight Size"
    /// Example: "Sans Bold 32" or "Go,DejaVu Sans Italic 24"
    pub fn to_pango_string(&self, size: f64) -> String {
        let mut families: Vec<&str> = Vec::with_capacity(self.faces.len());
        for face in &self.faces {
            if !families.contains(&face.family.as_str()) {
                families.push(&face.family);
            }
        }

        let primary = self.primary();
        let mut parts = vec![families.join(",")];

        if !primary.style.eq_ignore_ascii_case("normal") {
            parts.push(capitalize_first(&primary.style));
        }

        if !primary.weight.eq_ignore_ascii_case("normal") {
            parts.push(capitalize_first(&primary.weight));
        }

        parts.push(format!("{}", size.round() as i32));

        parts.join(" ")
    }
}

/// Capitalizes the first letter of a string.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pango_string_default() {
        let fonts = FontSet::default();
        assert_eq!(fonts.to_pango_string(32.0), "Sans 32");
    }

    #[test]
    fn test_pango_string_italic_bold() {
        let fonts = FontSet::new(FontDescriptor::new("Monospace", "bold", "italic"));
        assert_eq!(fonts.to_pango_string(24.0), "Monospace Italic Bold 24");
    }

    #[test]
    fn test_pango_string_lists_fallbacks() {
        let mut fonts = FontSet::new(FontDescriptor::new("Go", "light", "normal"));
        fonts.register(FontDescriptor::regular("DejaVu Sans"));
        assert_eq!(fonts.to_pango_string(16.0), "Go,DejaVu Sans Light 16");
    }

    #[test]
    fn register_is_idempotent() {
        let mut fonts = FontSet::default();
        assert!(!fonts.register(FontDescriptor::default()));
        assert!(fonts.register(FontDescriptor::regular("Serif")));
        assert!(!fonts.register(FontDescriptor::regular("Serif")));
        assert_eq!(fonts.faces().len(), 2);
    }
}
