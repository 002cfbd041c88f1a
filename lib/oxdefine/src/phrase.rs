//! Built-in phrasing for selected object properties.
//!
//! Generated sentences read better when common relations are verbalized
//! with a hand-picked phrase instead of the property's own label. The table
//! below maps OBO property IDs to a phrase and an optional connecting word:
//! an absent connector means the default word "some", an empty connector
//! means no connecting word at all.

use crate::vocab::OBO_PREFIX;
use oxrdf::NamedNodeRef;

/// A phrase override for one object property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyPhrase {
    phrase: &'static str,
    connector: Option<&'static str>,
}

impl PropertyPhrase {
    /// Returns the human phrase for the property.
    pub fn phrase(&self) -> &'static str {
        self.phrase
    }

    /// Returns the connecting word: `None` for the default "some",
    /// `Some("")` for none at all.
    pub fn connector(&self) -> Option<&'static str> {
        self.connector
    }

    /// Returns the sentence tokens for this property.
    pub fn tokens(&self) -> Vec<&'static str> {
        match self.connector {
            None => vec![self.phrase, "some"],
            Some("") => vec![self.phrase],
            Some(word) => vec![self.phrase, word],
        }
    }
}

const fn phrase(phrase: &'static str) -> PropertyPhrase {
    PropertyPhrase {
        phrase,
        connector: None,
    }
}

const fn bare_phrase(phrase: &'static str) -> PropertyPhrase {
    PropertyPhrase {
        phrase,
        connector: Some(""),
    }
}

// OBO ID suffix -> phrasing. Kept sorted by ID.
const TABLE: &[(&str, PropertyPhrase)] = &[
    ("BFO_0000050", bare_phrase("is part of")),
    ("BFO_0000051", phrase("has part")),
    ("RO_0002100", phrase("has its soma located in")),
    ("RO_0002103", phrase("electrically synapses to")),
    ("RO_0002105", phrase("is synapsed via type Ib bouton to")),
    ("RO_0002106", phrase("is synapsed via type Is bouton to")),
    ("RO_0002107", phrase("is synapsed via type II bouton to")),
    ("RO_0002114", phrase("is synapsed via type III bouton to")),
    ("RO_0002150", phrase("is continuous with")),
    ("RO_0002160", bare_phrase("only exists in")),
    ("RO_0002170", phrase("is connected to")),
    ("RO_0002215", phrase("is capable of")),
    ("RO_0002216", phrase("is capable of part of")),
    ("RO_0002292", bare_phrase("expresses")),
    ("RO_0013009", phrase("sends synaptic output to")),
];

/// Looks up the phrase override for an object property, if any.
pub fn phrase_for(property: NamedNodeRef<'_>) -> Option<&'static PropertyPhrase> {
    let id = property.as_str().strip_prefix(OBO_PREFIX)?;
    TABLE
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, entry)| entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_connector() {
        let entry = phrase_for(NamedNodeRef::new_unchecked(
            "http://purl.obolibrary.org/obo/BFO_0000051",
        ))
        .unwrap();
        assert_eq!(entry.tokens(), vec!["has part", "some"]);
    }

    #[test]
    fn test_empty_connector() {
        let entry = phrase_for(NamedNodeRef::new_unchecked(
            "http://purl.obolibrary.org/obo/BFO_0000050",
        ))
        .unwrap();
        assert_eq!(entry.tokens(), vec!["is part of"]);
    }

    #[test]
    fn test_unmapped_property() {
        assert!(phrase_for(NamedNodeRef::new_unchecked(
            "http://purl.obolibrary.org/obo/RO_0002211",
        ))
        .is_none());
        assert!(phrase_for(NamedNodeRef::new_unchecked(
            "http://example.org/BFO_0000050",
        ))
        .is_none());
    }
}
