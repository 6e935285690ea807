use super::speech::Voice;
use crate::domain::shared::language::{normalize_tag, LanguageCode};

/// Substrings that mark a voice name as female on any platform
const GENERIC_FEMALE_MARKERS: &[&str] = &["female", "woman"];

// Well-known female voice names shipped by macOS, Windows, Android and Azure.
// Naming is vendor-specific, so this is a ranking hint rather than a guarantee.
const ENGLISH_FEMALE_MARKERS: &[&str] = &[
    "samantha", "zira", "aria", "jenny", "susan", "victoria", "karen", "moira", "allison", "ava",
];
const MALAY_FEMALE_MARKERS: &[&str] = &["yasmin", "amira", "siti"];
const CHINESE_FEMALE_MARKERS: &[&str] = &[
    "ting-ting", "tingting", "mei-jia", "meijia", "sin-ji", "sinji", "huihui", "yaoyao",
    "xiaoxiao", "xiaoyi", "hanhan", "yating", "hsiaochen", "hsiaoyu",
];

fn female_markers(language: LanguageCode) -> impl Iterator<Item = &'static str> {
    let family_markers = match language.family() {
        "zh" => CHINESE_FEMALE_MARKERS,
        "ms" => MALAY_FEMALE_MARKERS,
        _ => ENGLISH_FEMALE_MARKERS,
    };
    GENERIC_FEMALE_MARKERS.iter().chain(family_markers).copied()
}

fn is_female(voice: &Voice, language: LanguageCode) -> bool {
    let name = voice.name.to_lowercase();
    female_markers(language).any(|marker| name.contains(marker))
}

fn matches_exact(voice: &Voice, language: LanguageCode) -> bool {
    normalize_tag(&voice.lang).eq_ignore_ascii_case(language.as_str())
}

fn matches_family(voice: &Voice, language: LanguageCode) -> bool {
    let tag = normalize_tag(&voice.lang).to_ascii_lowercase();
    let family = language.family();
    tag == family || tag.starts_with(&format!("{}-", family))
}

/// Pick the voice to use for `language`.
///
/// Candidates are the voices with the exact regional tag, or if there are
/// none, the voices sharing the language family. Among candidates a voice
/// whose name looks female wins, otherwise the first candidate. None means
/// "let the platform choose".
pub fn select_voice(language: LanguageCode, voices: &[Voice]) -> Option<&Voice> {
    let exact: Vec<&Voice> = voices.iter().filter(|v| matches_exact(v, language)).collect();
    let candidates = if exact.is_empty() {
        voices.iter().filter(|v| matches_family(v, language)).collect()
    } else {
        exact
    };

    candidates
        .iter()
        .find(|v| is_female(v, language))
        .or_else(|| candidates.first())
        .copied()
}
