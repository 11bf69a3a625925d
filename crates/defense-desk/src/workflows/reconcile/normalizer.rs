/// Comparison form of a name: lowercased with the common Latin accents folded
/// to ASCII. Whitespace, punctuation and any other diacritics are kept.
pub fn normalize(name: &str) -> String {
    name.to_lowercase().chars().map(fold_accent).collect()
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'ä' | 'â' => 'a',
        'é' | 'è' | 'ë' | 'ê' => 'e',
        'í' | 'ì' | 'ï' | 'î' => 'i',
        'ó' | 'ò' | 'ö' | 'ô' => 'o',
        'ú' | 'ù' | 'ü' | 'û' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        other => other,
    }
}

/// Normalized name with underscores read as spaces, the form used for roster
/// containment and tokenization.
pub(crate) fn spaced(normalized: &str) -> String {
    normalized.replace('_', " ")
}

/// Whitespace tokens of a normalized name, underscores counting as separators.
pub(crate) fn tokens(normalized: &str) -> Vec<String> {
    spaced(normalized)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_accents_after_lowercasing() {
        assert_eq!(normalize("Á"), "a");
        assert_eq!(normalize("ñ"), "n");
        assert_eq!(normalize("ABC"), "abc");
        assert_eq!(normalize("Núria Çaballé"), "nuria caballe");
        assert_eq!(normalize("JOSÉ MARÍA"), "jose maria");
    }

    #[test]
    fn keeps_punctuation_whitespace_and_unlisted_diacritics() {
        assert_eq!(normalize("Puig-Ferrer,  Joan_"), "puig-ferrer,  joan_");
        assert_eq!(normalize("Łukasz ã"), "łukasz ã");
    }

    #[test]
    fn is_idempotent() {
        let samples = ["Garcia, María_123", "ÀÉÍÓÚ àèìòù", "", "  Ñandú  ", "Łódź"];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "sample {sample:?}");
        }
    }

    #[test]
    fn tokens_split_on_underscores_and_whitespace() {
        assert_eq!(tokens("maria_garcia  tfm"), vec!["maria", "garcia", "tfm"]);
        assert!(tokens("_ _").is_empty());
    }
}
