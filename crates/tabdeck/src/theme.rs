use eframe::egui::Color32;

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub background: Color32,
    pub foreground: Color32,
    pub muted: Color32,
    pub heading_color: Color32,
    pub accent: Color32,
    pub secondary: Color32,
    pub border: Color32,
    pub card_background: Color32,
    pub code_background: Color32,
    pub code_foreground: Color32,
    pub title_size: f32,
    pub intro_title_size: f32,
    pub subtitle_size: f32,
    pub section_size: f32,
    pub body_size: f32,
    pub code_size: f32,
    pub chrome_size: f32,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color32::WHITE,
            foreground: Color32::from_rgb(0x0F, 0x17, 0x2A),
            muted: Color32::from_rgb(0x64, 0x74, 0x8B),
            heading_color: Color32::from_rgb(0x0F, 0x17, 0x2A),
            accent: Color32::from_rgb(0x1E, 0x29, 0x3B),
            secondary: Color32::from_rgb(0xF1, 0xF5, 0xF9),
            border: Color32::from_rgb(0xE2, 0xE8, 0xF0),
            card_background: Color32::WHITE,
            code_background: Color32::from_rgb(0xF8, 0xFA, 0xFC),
            code_foreground: Color32::from_rgb(0x33, 0x33, 0x33),
            title_size: 60.0,
            intro_title_size: 96.0,
            subtitle_size: 30.0,
            section_size: 34.0,
            body_size: 26.0,
            code_size: 20.0,
            chrome_size: 18.0,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color32::from_rgb(0x1E, 0x1E, 0x1E),
            foreground: Color32::from_rgb(0xC8, 0xC8, 0xC8),
            muted: Color32::from_rgb(0x8A, 0x8A, 0x8A),
            heading_color: Color32::WHITE,
            accent: Color32::from_rgb(0x52, 0x94, 0xE2),
            secondary: Color32::from_rgb(0x33, 0x33, 0x33),
            border: Color32::from_rgb(0x3A, 0x3A, 0x3A),
            card_background: Color32::from_rgb(0x26, 0x26, 0x26),
            code_background: Color32::from_rgb(0x2D, 0x2D, 0x2D),
            code_foreground: Color32::from_rgb(0xD4, 0xD4, 0xD4),
            title_size: 60.0,
            intro_title_size: 96.0,
            subtitle_size: 30.0,
            section_size: 34.0,
            body_size: 26.0,
            code_size: 20.0,
            chrome_size: 18.0,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            _ => Self::light(),
        }
    }

    pub fn toggled(&self) -> Self {
        if self.name == "dark" {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Apply opacity to a color
    pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
        let alpha = (opacity.clamp(0.0, 1.0) * 255.0) as u8;
        Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
    }

    /// Return the syntect theme name that matches this presentation theme.
    pub fn syntect_theme_name(&self) -> &str {
        if self.name == "dark" {
            "base16-ocean.dark"
        } else {
            "InspiredGitHub"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_defaults_to_light() {
        assert_eq!(Theme::from_name("dark").name, "dark");
        assert_eq!(Theme::from_name("light").name, "light");
        assert_eq!(Theme::from_name("solarized").name, "light");
    }

    #[test]
    fn test_toggle_round_trip() {
        let theme = Theme::light();
        assert_eq!(theme.toggled().name, "dark");
        assert_eq!(theme.toggled().toggled().name, "light");
    }

    #[test]
    fn test_with_opacity_clamps() {
        let c = Theme::with_opacity(Color32::from_rgb(10, 20, 30), 2.0);
        assert_eq!(c.a(), 255);
        let c = Theme::with_opacity(Color32::from_rgb(10, 20, 30), 0.0);
        assert_eq!(c.a(), 0);
    }
}
