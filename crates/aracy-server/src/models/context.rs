//! Context - the muse profile every generation is tailored to

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use aracy::{AstroChart, MuseProfile};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AstroPlacements {
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

impl From<&AstroChart> for AstroPlacements {
    fn from(chart: &AstroChart) -> Self {
        Self {
            sun: chart.sun.clone(),
            moon: chart.moon.clone(),
            ascendant: chart.ascendant.clone(),
            mercury: chart.mercury.clone(),
            venus: chart.venus.clone(),
            mars: chart.mars.clone(),
            jupiter: chart.jupiter.clone(),
            saturn: chart.saturn.clone(),
            uranus: chart.uranus.clone(),
            neptune: chart.neptune.clone(),
            pluto: chart.pluto.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContextResponse {
    pub name: String,
    pub birth_date: String,
    /// Leading phrase of `traits`
    pub profession: String,
    pub traits: String,
    pub astro: AstroPlacements,
    /// Chart rendered as it appears in prompts
    pub astro_chart: String,
}

impl From<&MuseProfile> for ContextResponse {
    fn from(profile: &MuseProfile) -> Self {
        Self {
            name: profile.name.clone(),
            birth_date: profile.birth_date.clone(),
            profession: profile.profession().to_string(),
            traits: profile.traits.clone(),
            astro: AstroPlacements::from(&profile.astro),
            astro_chart: profile.astro.format(),
        }
    }
}
