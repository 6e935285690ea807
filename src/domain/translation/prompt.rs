use crate::domain::shared::language::LanguageCode;

/// Build the instruction prompt sent to the remote completion service.
///
/// Returns None for the source language, which never needs translating.
pub fn build_prompt(text: &str, target: LanguageCode) -> Option<String> {
    let (language_name, instructions) = match target {
        LanguageCode::EnglishUs => return None,
        LanguageCode::MalayMalaysia => (
            "Malay (Bahasa Malaysia)",
            "Translate naturally and fluently. Use proper Malay pronunciation-friendly text.",
        ),
        LanguageCode::ChineseSimplified => (
            "Simplified Chinese (Mandarin)",
            "Translate to natural Simplified Chinese. Use common spoken Mandarin expressions \
             that text-to-speech can pronounce clearly. Avoid complex characters that might be \
             difficult for TTS engines.",
        ),
        LanguageCode::ChineseTraditional => (
            "Traditional Chinese",
            "Translate to natural Traditional Chinese. Use common spoken expressions that \
             text-to-speech can pronounce clearly.",
        ),
    };

    Some(format!(
        "{instructions}\n\nTranslate this English text to {language_name}. \
         Only return the translation, nothing else:\n\n\"{text}\""
    ))
}

/// Models sometimes echo the quotes the prompt wraps the text in
pub fn clean_completion(raw: &str) -> String {
    let trimmed = raw.trim();
    let pairs = [('"', '"'), ('“', '”'), ('「', '」')];

    for (open, close) in pairs {
        if let Some(inner) = trimmed
            .strip_prefix(open)
            .and_then(|rest| rest.strip_suffix(close))
        {
            return inner.trim().to_string();
        }
    }

    trimmed.to_string()
}
