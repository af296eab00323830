//! Universal part-of-speech tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{NlprepError, Result};

/// A coarse, language-independent part-of-speech category.
///
/// These are the 17 tags of the Universal Dependencies project, plus
/// `SPACE`, which spaCy-style toolkits emit for whitespace tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Upos {
    /// Adjective
    Adj,
    /// Adposition
    Adp,
    /// Adverb
    Adv,
    /// Auxiliary
    Aux,
    /// Coordinating conjunction
    Cconj,
    /// Determiner
    Det,
    /// Interjection
    Intj,
    /// Noun
    Noun,
    /// Numeral
    Num,
    /// Particle
    Part,
    /// Pronoun
    Pron,
    /// Proper noun
    Propn,
    /// Punctuation
    Punct,
    /// Subordinating conjunction
    Sconj,
    /// Symbol
    Sym,
    /// Verb
    Verb,
    /// Other
    X,
    /// Whitespace
    Space,
}

impl Upos {
    /// All tags, in declaration order.
    pub const ALL: [Upos; 18] = [
        Upos::Adj,
        Upos::Adp,
        Upos::Adv,
        Upos::Aux,
        Upos::Cconj,
        Upos::Det,
        Upos::Intj,
        Upos::Noun,
        Upos::Num,
        Upos::Part,
        Upos::Pron,
        Upos::Propn,
        Upos::Punct,
        Upos::Sconj,
        Upos::Sym,
        Upos::Verb,
        Upos::X,
        Upos::Space,
    ];

    /// The canonical upper-case tag name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Upos::Adj => "ADJ",
            Upos::Adp => "ADP",
            Upos::Adv => "ADV",
            Upos::Aux => "AUX",
            Upos::Cconj => "CCONJ",
            Upos::Det => "DET",
            Upos::Intj => "INTJ",
            Upos::Noun => "NOUN",
            Upos::Num => "NUM",
            Upos::Part => "PART",
            Upos::Pron => "PRON",
            Upos::Propn => "PROPN",
            Upos::Punct => "PUNCT",
            Upos::Sconj => "SCONJ",
            Upos::Sym => "SYM",
            Upos::Verb => "VERB",
            Upos::X => "X",
            Upos::Space => "SPACE",
        }
    }
}

impl fmt::Display for Upos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Upos {
    type Err = NlprepError;

    fn from_str(s: &str) -> Result<Self> {
        Upos::ALL
            .iter()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| NlprepError::toolkit(format!("unknown universal POS tag: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        for tag in Upos::ALL {
            assert_eq!(tag.to_string().parse::<Upos>().unwrap(), tag);
        }
        assert_eq!("propn".parse::<Upos>().unwrap(), Upos::Propn);
        assert!("NOUNS".parse::<Upos>().is_err());
    }

    #[test]
    fn test_serde_uses_tag_names() {
        let json = serde_json::to_string(&vec![Upos::Punct, Upos::Space]).unwrap();
        assert_eq!(json, r#"["PUNCT","SPACE"]"#);

        let tags: Vec<Upos> = serde_json::from_str(r#"["NOUN","CCONJ"]"#).unwrap();
        assert_eq!(tags, vec![Upos::Noun, Upos::Cconj]);
    }
}
