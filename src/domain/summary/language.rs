use serde::{Deserialize, Serialize};

/// Shop domain named in every mandated closing sentence
pub const SHOP_DOMAIN: &str = "helios-szklo.pl";

/// Languages a summary can be written and narrated in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "pl")]
    Polish,
    #[serde(rename = "en")]
    English,
    #[serde(rename = "de")]
    German,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Polish, Language::English, Language::German];

    /// Two-letter code used by the speech service
    pub fn speech_code(&self) -> &'static str {
        match self {
            Language::Polish => "pl",
            Language::English => "en",
            Language::German => "de",
        }
    }

    /// Name shown in language pickers
    pub fn label(&self) -> &'static str {
        match self {
            Language::Polish => "Polski",
            Language::English => "English",
            Language::German => "Deutsch",
        }
    }

    /// Sentence the generated summary must end with, verbatim
    pub fn closing_sentence(&self) -> String {
        match self {
            Language::Polish => format!("Zapraszamy do zakupów w sklepie {}.", SHOP_DOMAIN),
            Language::English => format!("We invite you to shop at {}.", SHOP_DOMAIN),
            Language::German => format!("Wir laden Sie zum Einkaufen bei {} ein.", SHOP_DOMAIN),
        }
    }

    /// Instruction sent ahead of the product text. Always ends with the
    /// quoted closing sentence.
    pub fn instruction(&self) -> String {
        let body = match self {
            Language::Polish => {
                "Jesteś copywriterem sklepu internetowego. Na podstawie poniższych danych \
                 napisz krótkie, zachęcające podsumowanie produktu w języku polskim, \
                 składające się z 3-4 zdań. Wszystkie liczby i cyfry zapisz słownie. \
                 Zakończ tekst dokładnie tym zdaniem:"
            }
            Language::English => {
                "You are a copywriter for an online shop. Based on the data below, \
                 write a short, engaging promotional summary of the product in English, \
                 3-4 sentences long. Write out all numbers and digits in words. \
                 End the text with exactly this sentence:"
            }
            Language::German => {
                "Du bist Texter für einen Online-Shop. Schreibe auf Grundlage der folgenden \
                 Daten eine kurze, ansprechende Werbezusammenfassung des Produkts auf Deutsch \
                 mit 3-4 Sätzen. Schreibe alle Zahlen und Ziffern in Worten aus. \
                 Beende den Text genau mit diesem Satz:"
            }
        };

        format!("{} \"{}\"", body, self.closing_sentence())
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.speech_code())
    }
}
