//! Canonical form of typed words
//!
//! Player input and word list entries go through the same folding so that
//! "élan", " Elan" and "ELAN" compare equal.

/// Normalize a raw word: trim, uppercase, strip Latin diacritics
///
/// Characters that are not letters are kept as-is; the dictionary check
/// rejects them later.
///
/// # Examples
/// ```
/// use daily_word::wordlists::normalize_word;
///
/// assert_eq!(normalize_word("  Château "), "CHATEAU");
/// assert_eq!(normalize_word("cœur"), "COEUR");
/// ```
#[must_use]
pub fn normalize_word(raw: &str) -> String {
    let mut canonical = String::with_capacity(raw.len());
    for upper in raw.trim().chars().flat_map(char::to_uppercase) {
        match fold_diacritic(upper) {
            Some(folded) => canonical.push_str(folded),
            None => canonical.push(upper),
        }
    }
    canonical
}

fn fold_diacritic(letter: char) -> Option<&'static str> {
    let folded = match letter {
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => "A",
        'Æ' => "AE",
        'Ç' => "C",
        'È' | 'É' | 'Ê' | 'Ë' => "E",
        'Ì' | 'Í' | 'Î' | 'Ï' => "I",
        'Ñ' => "N",
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => "O",
        'Œ' => "OE",
        'Ù' | 'Ú' | 'Û' | 'Ü' => "U",
        'Ý' | 'Ÿ' => "Y",
        _ => return None,
    };
    Some(folded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercases_and_trims() {
        assert_eq!(normalize_word("  garden\n"), "GARDEN");
        assert_eq!(normalize_word("GaRdEn"), "GARDEN");
    }

    #[test]
    fn strips_accents() {
        assert_eq!(normalize_word("élève"), "ELEVE");
        assert_eq!(normalize_word("garçon"), "GARCON");
        assert_eq!(normalize_word("NAÏVE"), "NAIVE");
        assert_eq!(normalize_word("ÿ"), "Y");
    }

    #[test]
    fn expands_ligatures() {
        assert_eq!(normalize_word("Œuvre"), "OEUVRE");
        assert_eq!(normalize_word("æther"), "AETHER");
        assert_eq!(normalize_word("straße"), "STRASSE");
    }

    #[test]
    fn keeps_other_characters() {
        assert_eq!(normalize_word("ab-c1"), "AB-C1");
        assert_eq!(normalize_word(""), "");
    }
}
