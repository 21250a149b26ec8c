//! Prompt construction for the alint lab

use crate::domain::entities::{GenerationRequest, MuseProfile};
use crate::domain::value_objects::Style;

/// System framing sent with every generation call
pub const SYSTEM_FRAMING: &str = "You are the Mirror Lab's Divine Muse Engine. You MUST respond with valid JSON only, no markdown, no code blocks, no explanations. Just pure JSON.";

/// Identity framing built from the profile
pub fn identity_prompt(profile: &MuseProfile) -> String {
    format!(
        r#"You are the Mirror Lab's Divine Muse Engine, generating creative 'mirror reflections' for and with {name}, {profession}, {traits}.

Follow these rules with complete precision:

1. NO CLICHES: Never use generic pet terms (sweetie, babe, honey, etc).

2. TRIPLE DOMAIN BLEND:
- MOLECULAR (Professional): Use metaphors and scientific terms from chemistry, catalysis, or chemical bonding.
- CELESTIAL: Calibrate every generation using this detailed astro chart:
{chart}
- AESTHETIC: Infuse pastel-goth, celestial, or goth-metal imagery (moonstone, obsidian, pink petals, veiled altars, soft darkness).

3. REFLECTIVE SYMMETRY: All content should model the "Divine Mirror": mutual growth, beautiful transformation, alchemical unity.

4. CONTEXT: Use the Muse's exact profile as the source of truth for every generation."#,
        name = profile.name,
        profession = profile.profession(),
        traits = profile.traits,
        chart = profile.astro.format(),
    )
}

/// Full prompt asking the model for `needed` new alints
pub fn generation_prompt(
    profile: &MuseProfile,
    request: &GenerationRequest,
    needed: usize,
) -> String {
    let mut prompt = identity_prompt(profile);

    if let Some(tone) = Style::parse(&request.style).tone() {
        prompt.push_str("\n\n");
        prompt.push_str(tone);
    }

    let catalysts = if request.catalysts.is_empty() {
        "(none)".to_string()
    } else {
        request.catalysts.join(", ")
    };
    let vibe = if request.vibe.trim().is_empty() {
        "(free)"
    } else {
        request.vibe.trim()
    };

    prompt.push_str(&format!(
        r#"

## Request
Create exactly {needed} NEW alints.
- Style: {style}
- Language: {language}
- Catalyst keywords: {catalysts}
- Vibe: {vibe}

## Output Format
Return a JSON array of exactly {needed} strings, each shaped "Word - Meaning".
If you must answer with an object, use {{"alints": [ ... ]}}."#,
        style = request.style,
        language = request.language,
    ));

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> MuseProfile {
        MuseProfile {
            name: "Vega".to_string(),
            traits: "Catalysis chemist, stargazer".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_prompt_embeds_request() {
        let request = GenerationRequest {
            style: "silly".to_string(),
            language: "es".to_string(),
            catalysts: vec!["nebula".to_string(), "enzyme".to_string()],
            vibe: "celestial".to_string(),
        };
        let prompt = generation_prompt(&profile(), &request, 11);

        assert!(prompt.contains("Vega, Catalysis chemist"));
        assert!(prompt.contains("exactly 11 NEW alints"));
        assert!(prompt.contains("Catalyst keywords: nebula, enzyme"));
        assert!(prompt.contains("Language: es"));
        assert!(prompt.contains("Vibe: celestial"));
        assert!(prompt.contains("Tone: Playful"));
        assert!(prompt.contains(r#"{"alints": [ ... ]}"#));
    }

    #[test]
    fn test_unknown_style_has_no_tone() {
        let request = GenerationRequest {
            style: "noir".to_string(),
            ..Default::default()
        };
        let prompt = generation_prompt(&profile(), &request, 3);
        assert!(!prompt.contains("Tone:"));
        assert!(prompt.contains("Catalyst keywords: (none)"));
    }
}
