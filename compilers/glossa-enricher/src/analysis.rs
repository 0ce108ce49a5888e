use glossa_align::{build_gloss_index, gloss_lexeme, stem_of};
use glossa_protocol::{Analysis, DerivedFields, FieldSet};

/// Which derived fields a run fills in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnrichMode {
    /// Only `gloss_index`; words are left alone.
    #[default]
    GlossIndexOnly,
    /// Every derivable analysis field plus word offsets and indices.
    FullEnrich,
}

impl EnrichMode {
    pub fn fields(self) -> FieldSet {
        match self {
            EnrichMode::GlossIndexOnly => FieldSet::GLOSS_INDEX,
            EnrichMode::FullEnrich => FieldSet::all(),
        }
    }

    pub fn indexes_words(self) -> bool {
        matches!(self, EnrichMode::FullEnrich)
    }
}

/// Computes the requested fields that `analysis` is still missing.
pub fn derive_fields(analysis: &Analysis, fields: FieldSet) -> DerivedFields {
    let wants = |field: FieldSet| fields.contains(field) && analysis.is_missing(field);

    let parts = analysis.parts();
    let gloss = analysis.gloss();
    // gloss_index_ru follows gloss_ru as it will be after merging
    let gloss_ru = match analysis.gloss_ru.as_deref() {
        Some(existing) if !existing.is_empty() => existing,
        _ => gloss,
    };

    DerivedFields {
        lex: wants(FieldSet::LEX).then(|| stem_of(parts).to_string()),
        trans_ru: wants(FieldSet::TRANS_RU).then(|| gloss_lexeme(gloss).to_string()),
        gloss_ru: wants(FieldSet::GLOSS_RU).then(|| gloss.to_string()),
        gloss_index: wants(FieldSet::GLOSS_INDEX).then(|| build_gloss_index(parts, gloss)),
        gloss_index_ru: wants(FieldSet::GLOSS_INDEX_RU)
            .then(|| build_gloss_index(parts, gloss_ru)),
        pos: wants(FieldSet::POS).then(String::new),
    }
}

/// Derives and merges the requested fields. Returns the fields written.
pub fn enrich_analysis(analysis: &mut Analysis, fields: FieldSet) -> FieldSet {
    let derived = derive_fields(analysis, fields);
    let written = analysis.merge_missing(derived);
    if !written.is_empty() {
        tracing::trace!(
            parts = analysis.parts(),
            fields = ?written,
            "filled analysis fields"
        );
    }
    written
}
