use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::fields::FieldSet;

/// Keys the model does not know about. Kept verbatim and in input order.
pub type Extra = Map<String, Value>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Corpus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentences: Option<Vec<Sentence>>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Corpus {
    pub fn sentences_mut(&mut self) -> impl Iterator<Item = &mut Sentence> {
        self.sentences.iter_mut().flatten()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<Word>>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Sentence {
    pub fn words_mut(&mut self) -> impl Iterator<Item = &mut Word> {
        self.words.iter_mut().flatten()
    }
}

/// A word token. Offsets count Unicode scalar values into the sentence text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Word {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wf: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ana: Option<Vec<Analysis>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub off_start: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub off_end: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentence_index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentence_index_neg: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_word: Option<usize>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Word {
    pub fn analyses_mut(&mut self) -> impl Iterator<Item = &mut Analysis> {
        self.ana.iter_mut().flatten()
    }
}

/// One morphological analysis of a word.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parts: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gloss: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gloss_index: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trans_ru: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gloss_ru: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gloss_index_ru: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Values computed for an analysis, waiting to be merged into it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedFields {
    pub lex: Option<String>,
    pub trans_ru: Option<String>,
    pub gloss_ru: Option<String>,
    pub gloss_index: Option<String>,
    pub gloss_index_ru: Option<String>,
    pub pos: Option<String>,
}

impl Analysis {
    pub fn parts(&self) -> &str {
        self.parts.as_deref().unwrap_or("")
    }

    pub fn gloss(&self) -> &str {
        self.gloss.as_deref().unwrap_or("")
    }

    /// Current value of a single derivable field.
    pub fn field(&self, field: FieldSet) -> Option<&str> {
        let slot = if field == FieldSet::LEX {
            &self.lex
        } else if field == FieldSet::TRANS_RU {
            &self.trans_ru
        } else if field == FieldSet::GLOSS_RU {
            &self.gloss_ru
        } else if field == FieldSet::GLOSS_INDEX {
            &self.gloss_index
        } else if field == FieldSet::GLOSS_INDEX_RU {
            &self.gloss_index_ru
        } else if field == FieldSet::POS {
            &self.pos
        } else {
            return None;
        };
        slot.as_deref()
    }

    /// True when `field` is absent or holds an empty string.
    pub fn is_missing(&self, field: FieldSet) -> bool {
        self.field(field).map_or(true, str::is_empty)
    }

    /// Writes every derived value whose slot is absent or empty.
    ///
    /// A slot holding a non-empty value is never touched. Returns the fields
    /// whose stored value actually changed, so a second merge of the same
    /// values returns an empty set.
    pub fn merge_missing(&mut self, derived: DerivedFields) -> FieldSet {
        let mut written = FieldSet::empty();
        let pairs = [
            (FieldSet::LEX, &mut self.lex, derived.lex),
            (FieldSet::TRANS_RU, &mut self.trans_ru, derived.trans_ru),
            (FieldSet::GLOSS_RU, &mut self.gloss_ru, derived.gloss_ru),
            (FieldSet::GLOSS_INDEX, &mut self.gloss_index, derived.gloss_index),
            (FieldSet::GLOSS_INDEX_RU, &mut self.gloss_index_ru, derived.gloss_index_ru),
            (FieldSet::POS, &mut self.pos, derived.pos),
        ];

        for (flag, slot, value) in pairs {
            if fill_slot(slot, value) {
                written |= flag;
            }
        }
        written
    }
}

fn fill_slot(slot: &mut Option<String>, value: Option<String>) -> bool {
    let Some(value) = value else {
        return false;
    };
    if slot
        .as_deref()
        .is_some_and(|current| !current.is_empty() || current == value)
    {
        return false;
    }
    *slot = Some(value);
    true
}
