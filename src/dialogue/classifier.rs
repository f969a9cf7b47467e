//! Keyword intent classifier
//!
//! Rules are evaluated in order and the first rule with any keyword occurring
//! as a substring of the normalized text wins. Matching is on raw substrings,
//! not words, so `oi` also matches inside `dois`.

use super::catalog::{self, Entry};

/// Classifier output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// A catalog entry
    Topic(&'static Entry),
    Greeting,
    Thanks,
    /// No rule matched
    Fallback,
}

impl Intent {
    /// Reply for this intent
    pub fn entry(self) -> &'static Entry {
        match self {
            Intent::Topic(entry) => entry,
            Intent::Greeting => &catalog::GREETING,
            Intent::Thanks => &catalog::THANKS,
            Intent::Fallback => &catalog::FALLBACK,
        }
    }

    pub fn tag(self) -> &'static str {
        self.entry().tag
    }
}

/// One row of the rule table
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub keywords: &'static [&'static str],
    pub intent: Intent,
}

impl Rule {
    fn matches(&self, normalized: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| normalized.contains(keyword))
    }
}

/// Rule table, highest precedence first
pub static RULES: &[Rule] = &[
    Rule {
        keywords: &[
            "missionário",
            "missionaria",
            "missão",
            "campo",
            "evangelizar",
        ],
        intent: Intent::Topic(&catalog::MISSIONARIO),
    },
    Rule {
        keywords: &[
            "apoiar",
            "contribuir",
            "doar",
            "mantenedor",
            "ajudar financeiro",
        ],
        intent: Intent::Topic(&catalog::MANTENEDOR),
    },
    Rule {
        keywords: &[
            "informação",
            "informações",
            "saber mais",
            "conhecer",
            "como funciona",
        ],
        intent: Intent::Topic(&catalog::INFORMACOES),
    },
    Rule {
        keywords: &["contato", "falar", "conversar", "humano", "pessoa"],
        intent: Intent::Topic(&catalog::CONTATO_HUMANO),
    },
    Rule {
        keywords: &[
            "oi",
            "olá",
            "ola",
            "bom dia",
            "boa tarde",
            "boa noite",
            "paz",
        ],
        intent: Intent::Greeting,
    },
    Rule {
        keywords: &["obrigado", "obrigada", "valeu", "brigado", "thanks"],
        intent: Intent::Thanks,
    },
];

/// Trim and lower-case input before matching
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Classify free text against the default rule table
pub fn classify(text: &str) -> Intent {
    classify_with(RULES, text)
}

/// Classify free text against an arbitrary rule table
pub fn classify_with(rules: &[Rule], text: &str) -> Intent {
    let normalized = normalize(text);
    rules
        .iter()
        .find(|rule| rule.matches(&normalized))
        .map_or(Intent::Fallback, |rule| rule.intent)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_of(text: &str) -> &'static str {
        classify(text).tag()
    }

    #[test]
    fn routes_each_rule() {
        assert_eq!(tag_of("Sou missionário"), "missionario");
        assert_eq!(tag_of("quero contribuir"), "mantenedor");
        assert_eq!(tag_of("quero saber mais"), "informacoes");
        assert_eq!(tag_of("posso falar com alguém?"), "contato_humano");
        assert_eq!(tag_of("Bom dia!"), "saudacao");
        assert_eq!(tag_of("valeu"), "agradecimento");
        assert_eq!(tag_of("xyz"), "padrao");
    }

    #[test]
    fn empty_and_blank_fall_through() {
        assert_eq!(classify(""), Intent::Fallback);
        assert_eq!(classify("   \n\t"), Intent::Fallback);
    }

    #[test]
    fn input_is_trimmed_and_lowercased() {
        assert_eq!(normalize("  MISSÃO  "), "missão");
        assert_eq!(tag_of("  EVANGELIZAR  "), "missionario");
    }

    #[test]
    fn first_rule_wins() {
        assert_eq!(tag_of("sou missionário e quero contribuir"), "missionario");
        assert_eq!(tag_of("quero contribuir, como funciona?"), "mantenedor");
        assert_eq!(tag_of("oi, quero falar com uma pessoa"), "contato_humano");
        assert_eq!(tag_of("olá, obrigado"), "saudacao");
    }

    #[test]
    fn substring_matches_inside_words() {
        // "dois" contains "oi", "rapaz" contains "paz", "campo" inside "acampou"
        assert_eq!(tag_of("tenho dois filhos"), "saudacao");
        assert_eq!(tag_of("o rapaz chegou"), "saudacao");
        assert_eq!(tag_of("ele acampou ontem"), "missionario");
    }

    #[test]
    fn unaccented_feminine_matches_but_accented_does_not() {
        assert_eq!(tag_of("sou missionaria"), "missionario");
        assert_eq!(tag_of("sou missionária"), "padrao");
    }

    #[test]
    fn custom_rule_table() {
        let rules = [Rule {
            keywords: &["obrigado"],
            intent: Intent::Topic(&catalog::SEGURANCA),
        }];
        assert_eq!(classify_with(&rules, "Muito obrigado").tag(), "seguranca");
        assert_eq!(classify_with(&rules, "oi"), Intent::Fallback);
        assert_eq!(classify_with(&[], "missão"), Intent::Fallback);
    }
}
