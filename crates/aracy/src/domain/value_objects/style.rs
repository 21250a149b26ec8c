//! Style - tone family requested for a generation run

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Silly,
    Deep,
    Astro,
    General,
}

impl Style {
    /// Parse a free-form style tag. Unknown tags are `General`.
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "silly" => Self::Silly,
            "deep" => Self::Deep,
            "astro" => Self::Astro,
            _ => Self::General,
        }
    }

    /// Tone instruction appended to the identity prompt
    pub fn tone(&self) -> Option<&'static str> {
        match self {
            Self::Silly => Some(
                "Tone: Playful, whimsical, lighthearted. Include a fun chemistry pun or cosmic joke.",
            ),
            Self::Deep => Some(
                "Tone: Profound, introspective, emotionally resonant. Explore the depths of connection.",
            ),
            Self::Astro => Some(
                "Tone: Mystical, celestial, prophetic. Focus heavily on current astrological transits and their meaning.",
            ),
            Self::General => None,
        }
    }
}
