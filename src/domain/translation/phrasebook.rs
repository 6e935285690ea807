use regex::{NoExpand, Regex, RegexBuilder};

/// An ordered English → target phrase table with one compiled matcher per phrase
///
/// Phrases are applied in table order. Each match is whole-word and
/// case-insensitive; anything the table does not cover is left untouched.
#[derive(Debug, Clone)]
pub struct Phrasebook {
    entries: Vec<(Regex, &'static str)>,
}

impl Phrasebook {
    pub fn new(phrases: &[(&'static str, &'static str)]) -> Result<Self, regex::Error> {
        let entries = phrases
            .iter()
            .map(|(english, translated)| {
                let pattern = format!(r"\b{}\b", regex::escape(english));
                RegexBuilder::new(&pattern)
                    .case_insensitive(true)
                    .build()
                    .map(|regex| (regex, *translated))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Substitute every known phrase in `text`
    pub fn apply(&self, text: &str) -> String {
        self.entries
            .iter()
            .fold(text.to_string(), |acc, (regex, translated)| {
                regex.replace_all(&acc, NoExpand(translated)).into_owned()
            })
    }
}
