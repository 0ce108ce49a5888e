use bitflags::bitflags;

bitflags! {
    /// Analysis fields that can be derived from `parts` and `gloss`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct FieldSet: u8 {
        const LEX = 1;
        const TRANS_RU = 2;
        const GLOSS_RU = 4;
        const GLOSS_INDEX = 8;
        const GLOSS_INDEX_RU = 16;
        const POS = 32;
    }
}

const KEYS: [(FieldSet, &str); 6] = [
    (FieldSet::LEX, "lex"),
    (FieldSet::TRANS_RU, "trans_ru"),
    (FieldSet::GLOSS_RU, "gloss_ru"),
    (FieldSet::GLOSS_INDEX, "gloss_index"),
    (FieldSet::GLOSS_INDEX_RU, "gloss_index_ru"),
    (FieldSet::POS, "pos"),
];

impl FieldSet {
    /// JSON key of a single-field set. `None` for empty or combined sets.
    pub fn key(self) -> Option<&'static str> {
        KEYS.iter()
            .find(|(field, _)| *field == self)
            .map(|(_, key)| *key)
    }

    /// JSON keys of every field in the set, in declaration order.
    pub fn keys(self) -> impl Iterator<Item = &'static str> {
        self.iter().filter_map(FieldSet::key)
    }
}
