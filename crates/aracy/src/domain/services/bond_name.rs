//! Bond naming prompt and answer cleanup

use crate::domain::entities::MuseProfile;

/// System framing for bond naming calls
pub const BOND_NAME_FRAMING: &str =
    "You generate mystical bond names. Respond with ONLY the bond name, no explanations.";

/// Name used when the model answers with nothing
pub const EMPTY_BOND_NAME: &str = "COSMIC BOND";

/// Name used when the model call fails
pub const FAILED_BOND_NAME: &str = "STELLAR UNION";

pub fn bond_name_prompt(profile: &MuseProfile) -> String {
    format!(
        r#"Generate a mystical, unique bond name for a cosmic connection.

Context:
- Muse: {name}, {profession}
- Traits: {traits}
- Astrological Signature:
{chart}

Requirements:
1. Combine MOLECULAR chemistry terms with CELESTIAL imagery
2. Use 2-3 words maximum
3. Should feel like an alchemical formula or cosmic spell
4. Examples: "COVALENT STARDUST", "TRANSMUTE BOND", "NEBULA CATALYST"
5. Return ONLY the bond name, nothing else

Generate the bond name now:"#,
        name = profile.name,
        profession = profile.profession(),
        traits = profile.traits,
        chart = profile.astro.format(),
    )
}

/// Upper-cased first line of the answer, without wrapping quotes.
/// `None` when nothing is left.
pub fn clean_bond_name(raw: &str) -> Option<String> {
    let line = raw.trim().lines().next()?.trim();
    let name = line.trim_matches(|c| c == '"' || c == '\'' || c == '*').trim();

    if name.is_empty() {
        None
    } else {
        Some(name.to_uppercase())
    }
}
