use alloc::vec::Vec;

/// Aligns the morphological tags of `gloss` with `n_affixes` affixes.
///
/// The first hyphen token of the gloss is the lexical meaning and is skipped.
/// Surplus tags are dropped from the left so the last tags meet the last
/// affixes; missing tags become empty strings at the front. Always returns
/// exactly `n_affixes` trimmed tags.
pub fn tags_from_gloss(gloss: &str, n_affixes: usize) -> Vec<&str> {
    if gloss.is_empty() {
        return vec![""; n_affixes];
    }

    let morph_tags: Vec<&str> = gloss.split('-').skip(1).collect();
    let mut aligned = Vec::with_capacity(n_affixes);

    if morph_tags.len() >= n_affixes {
        let skip = morph_tags.len() - n_affixes;
        aligned.extend(morph_tags[skip..].iter().map(|t| t.trim()));
    } else {
        aligned.resize(n_affixes - morph_tags.len(), "");
        aligned.extend(morph_tags.iter().map(|t| t.trim()));
    }

    aligned
}

/// Lexical meaning of a gloss: its first hyphen token, trimmed.
pub fn gloss_lexeme(gloss: &str) -> &str {
    gloss.split('-').next().unwrap_or("").trim()
}
