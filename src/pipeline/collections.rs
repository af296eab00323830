//! Vocabulary blocklists for German educational-resource descriptions.
//!
//! These are lemmas that carry little topical meaning in descriptions of
//! learning resources: symbols, filler words, resource types, sources and
//! target groups. The PoC topic-modeling pipeline ignores the union of all
//! of them except [`REGIONS`].

use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Symbols that survive tokenization as stand-alone tokens.
pub const SYMBOLS: &[&str] = &["-", "--", "&", "|"];

/// Filler words.
pub const FILLERS: &[&str] = &[
    "Thema",
    "Überblick",
    "um",
    "spannend",
    "umfassend",
    "thematisieren",
    "geben",
    "dein",
    "innen",
    "Verifikationsteam",
    "Inhalt",
    "Ansprache",
    "anhand",
    "erfahren",
    "eigentlich",
    "einfach",
    "Lerneffekt",
    "zahlreich",
];

/// Words describing the type of a learning resource.
pub const LEARNING_RESOURCE_TYPES: &[&str] = &[
    "Video",
    "interaktiv",
    "Internetseite",
    "Lexikon",
    "Lesepfad",
    "kostenlos",
    "Arbeitsblatt",
    "Podcast",
    "Audiobeitrag",
    "Projekt",
    "Kompetenz",
    "Lernpfad",
    "zeigen",
    "Methode",
    "Lernort",
    "Anleitung",
    "Schritt",
    "downloaden",
    "Veranschaulichung",
    "Unterricht",
    "behandeln",
    "anwenden",
    "Spiel",
    "Unterrichtseinheit",
    "Material",
    "spielerisch",
    "Unterrichtsbaustein",
    "Link",
    "Sammlung",
    "Beispiel",
    "YouTube",
    "Youtube",
    "de",
    "com",
];

/// Names of publishers and platforms.
pub const SOURCES: &[&str] = &[
    "eBildungslabor",
    "BR",
    "Universität",
    "ARD-Faktenfinder",
    "ARD",
    "Klexikon",
    "frei",
    "Internet-Lexikon",
    "Wiki",
    "Online-Spiel",
    "PHSZ",
    "Landesbildungsserver",
    "Volksschule",
];

/// Words describing the intended audience.
pub const TARGET_GROUPS: &[&str] = &[
    "Schüler",
    "Schüler*in",
    "kindgerecht",
    "Altersgruppe",
    "Schüler*innen",
    "einsteigen",
    "weiterführend",
    "Schüler/-innen",
];

/// Germany and its federal states.
pub const REGIONS: &[&str] = &[
    "Deutschland",
    "Baden-Württemberg",
    "Bayern",
    "Berlin",
    "Brandenburg",
    "Bremen",
    "Hamburg",
    "Hessen",
    "Mecklenburg-Vorpommern",
    "Niedersachsen",
    "Nordrhein-Westfalen",
    "Rheinland-Pfalz",
    "Saarland",
    "Sachsen",
    "Sachsen-Anhalt",
    "Schleswig-Holstein",
    "Thüringen",
];

/// Lemmas ignored by the PoC topic-modeling pipeline.
pub static POC_IGNORED_LEMMAS: LazyLock<BTreeSet<String>> = LazyLock::new(|| {
    [SYMBOLS, FILLERS, LEARNING_RESOURCE_TYPES, SOURCES, TARGET_GROUPS]
        .into_iter()
        .flatten()
        .map(|&s| s.to_string())
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poc_ignored_lemmas() {
        assert!(POC_IGNORED_LEMMAS.contains("&"));
        assert!(POC_IGNORED_LEMMAS.contains("Thema"));
        assert!(POC_IGNORED_LEMMAS.contains("Arbeitsblatt"));
        assert!(POC_IGNORED_LEMMAS.contains("Klexikon"));
        assert!(POC_IGNORED_LEMMAS.contains("Schüler*innen"));
        assert!(!POC_IGNORED_LEMMAS.contains("Bayern"));
        assert!(!POC_IGNORED_LEMMAS.contains("Photosynthese"));
    }
}
