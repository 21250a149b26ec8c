//! MuseProfile - the fixed profile every alint is tailored to

use serde::{Deserialize, Serialize};

/// Natal chart placements, one free-form string per body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AstroChart {
    pub sun: String,
    pub moon: String,
    pub ascendant: String,
    pub mercury: String,
    pub venus: String,
    pub mars: String,
    pub jupiter: String,
    pub saturn: String,
    pub uranus: String,
    pub neptune: String,
    pub pluto: String,
}

impl AstroChart {
    /// Render the chart one placement per line, annotating notable patterns.
    pub fn format(&self) -> String {
        let placements = [
            ("Sun", &self.sun),
            ("Moon", &self.moon),
            ("Ascendant", &self.ascendant),
            ("Mercury", &self.mercury),
            ("Venus", &self.venus),
            ("Mars", &self.mars),
            ("Jupiter", &self.jupiter),
            ("Saturn", &self.saturn),
            ("Uranus", &self.uranus),
            ("Neptune", &self.neptune),
            ("Pluto", &self.pluto),
        ];

        let mut chart = placements
            .iter()
            .map(|(body, sign)| format!("    {body}: {sign}"))
            .collect::<Vec<_>>()
            .join("\n");

        if self.has_aquarius_stellium() {
            chart.push_str(
                "\n\n    ✧ AQUARIUS STELLIUM (Mercury, Uranus, Neptune in Aquarius) ✧\
                 \n    Signature: Scientific intuition, prophetic dreams, revolutionary thinking, cosmic connection.",
            );
        }

        if self.venus.contains("Pisces") {
            chart.push_str(
                "\n\n    ✧ Venus in Pisces: Transcendent love, artistic soul, boundless compassion.",
            );
        }

        chart
    }

    fn has_aquarius_stellium(&self) -> bool {
        [&self.mercury, &self.uranus, &self.neptune]
            .iter()
            .all(|sign| sign.contains("Aquarius"))
    }
}

/// The profile injected into every generation prompt
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MuseProfile {
    pub name: String,
    pub birth_date: String,
    pub traits: String,
    pub astro: AstroChart,
}

impl MuseProfile {
    /// Profession is the leading phrase of the traits, before any `,` or `(`.
    pub fn profession(&self) -> &str {
        let end = self
            .traits
            .find([',', '('])
            .unwrap_or(self.traits.len());
        self.traits[..end].trim()
    }
}
