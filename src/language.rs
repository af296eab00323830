//! Language identification for documents without a language hint.
//!
//! Codes are ISO 639-1 where one exists for the detected language (`"en"`,
//! `"de"`, ...), the ISO 639-3 code otherwise.

use whatlang::Lang;

/// Guess the language of `text`.
///
/// Returns `None` if the text carries no usable signal, e.g. when it is empty
/// or consists of punctuation only.
///
/// # Examples
///
/// ```
/// use nlprep::language::detect_language;
///
/// let language = detect_language("The weather is lovely today and we are going for a walk");
/// assert_eq!(language.as_deref(), Some("en"));
/// assert_eq!(detect_language(""), None);
/// ```
pub fn detect_language(text: &str) -> Option<String> {
    whatlang::detect_lang(text).map(|lang| iso_639_1(lang).unwrap_or(lang.code()).to_string())
}

fn iso_639_1(lang: Lang) -> Option<&'static str> {
    let code = match lang {
        Lang::Eng => "en",
        Lang::Deu => "de",
        Lang::Fra => "fr",
        Lang::Spa => "es",
        Lang::Ita => "it",
        Lang::Por => "pt",
        Lang::Nld => "nl",
        Lang::Dan => "da",
        Lang::Swe => "sv",
        Lang::Fin => "fi",
        Lang::Pol => "pl",
        Lang::Ces => "cs",
        Lang::Hun => "hu",
        Lang::Tur => "tr",
        Lang::Rus => "ru",
        Lang::Ukr => "uk",
        Lang::Jpn => "ja",
        _ => return None,
    };
    Some(code)
}
