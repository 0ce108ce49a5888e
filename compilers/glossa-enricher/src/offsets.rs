use glossa_protocol::{Sentence, Word};

/// What indexing one sentence changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OffsetStats {
    /// Words that received at least one new offset.
    pub offsets_written: usize,
    /// Words that received at least one new sequence index.
    pub indices_written: usize,
    /// Words whose form could not be found in the sentence text.
    pub unlocated: usize,
}

/// Greedy left-to-right search cursor over a sentence text.
struct TextCursor<'t> {
    text: &'t str,
    /// Byte position where the next search starts.
    pos: usize,
}

impl<'t> TextCursor<'t> {
    fn new(text: &'t str) -> Self {
        Self { text, pos: 0 }
    }

    /// Finds `form` at or after the cursor, else anywhere from the start.
    /// Returns character offsets and moves the cursor past the match.
    fn locate(&mut self, form: &str) -> Option<(usize, usize)> {
        let start = self.text[self.pos..]
            .find(form)
            .map(|i| i + self.pos)
            .or_else(|| self.text.find(form))?;
        let end = start + form.len();
        self.pos = end;
        Some((self.char_offset(start), self.char_offset(end)))
    }

    /// Moves the cursor to a character offset recorded earlier.
    fn seek_char(&mut self, offset: usize) {
        self.pos = self
            .text
            .char_indices()
            .nth(offset)
            .map_or(self.text.len(), |(byte, _)| byte);
    }

    fn char_offset(&self, byte: usize) -> usize {
        self.text[..byte].chars().count()
    }
}

/// Fills in offsets and sequence indices for the words of a sentence.
///
/// Existing values are never replaced. A word with both offsets already set
/// moves the cursor to its `off_end` instead of being searched for.
pub fn index_words(sentence: &mut Sentence) -> OffsetStats {
    let mut stats = OffsetStats::default();
    let Some(words) = sentence.words.as_mut() else {
        return stats;
    };

    let total = words.len();
    let mut cursor = sentence.text.as_deref().map(TextCursor::new);

    for (i, word) in words.iter_mut().enumerate() {
        if assign_indices(word, i, total) {
            stats.indices_written += 1;
        }

        let Some(cursor) = cursor.as_mut() else {
            continue;
        };
        if let (Some(_), Some(end)) = (word.off_start, word.off_end) {
            cursor.seek_char(end);
            continue;
        }
        let Some(form) = word.wf.as_deref() else {
            continue;
        };

        match cursor.locate(form) {
            Some((start, end)) => {
                word.off_start.get_or_insert(start);
                word.off_end.get_or_insert(end);
                stats.offsets_written += 1;
            }
            None => {
                tracing::warn!(form, index = i, "word form not found in sentence text");
                stats.unlocated += 1;
            }
        }
    }

    stats
}

fn assign_indices(word: &mut Word, i: usize, total: usize) -> bool {
    let mut changed = false;
    changed |= fill(&mut word.sentence_index, i);
    changed |= fill(&mut word.sentence_index_neg, total - 1 - i);
    if i + 1 < total {
        changed |= fill(&mut word.next_word, i + 1);
    }
    changed
}

fn fill(slot: &mut Option<usize>, value: usize) -> bool {
    if slot.is_some() {
        return false;
    }
    *slot = Some(value);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(text: &str, forms: &[&str]) -> Sentence {
        Sentence {
            text: Some(text.to_string()),
            words: Some(
                forms
                    .iter()
                    .map(|wf| Word {
                        wf: Some(wf.to_string()),
                        ..Default::default()
                    })
                    .collect(),
            ),
            ..Default::default()
        }
    }

    fn offsets(sentence: &Sentence) -> Vec<(Option<usize>, Option<usize>)> {
        sentence
            .words
            .iter()
            .flatten()
            .map(|w| (w.off_start, w.off_end))
            .collect()
    }

    #[test]
    fn test_character_offsets() {
        let mut s = sentence("Ворон, лиса.", &["Ворон", ",", "лиса", "."]);
        let stats = index_words(&mut s);

        assert_eq!(stats.offsets_written, 4);
        assert_eq!(stats.unlocated, 0);
        assert_eq!(
            offsets(&s),
            [
                (Some(0), Some(5)),
                (Some(5), Some(6)),
                (Some(7), Some(11)),
                (Some(11), Some(12))
            ]
        );
    }

    #[test]
    fn test_sequence_indices() {
        let mut s = sentence("a b c", &["a", "b", "c"]);
        index_words(&mut s);
        let words = s.words.as_ref().unwrap();

        let forward: Vec<_> = words.iter().map(|w| w.sentence_index).collect();
        let reverse: Vec<_> = words.iter().map(|w| w.sentence_index_neg).collect();
        let next: Vec<_> = words.iter().map(|w| w.next_word).collect();
        assert_eq!(forward, [Some(0), Some(1), Some(2)]);
        assert_eq!(reverse, [Some(2), Some(1), Some(0)]);
        assert_eq!(next, [Some(1), Some(2), None]);
    }

    #[test]
    fn test_repeated_forms_advance_left_to_right() {
        let mut s = sentence("та та", &["та", "та"]);
        index_words(&mut s);
        assert_eq!(offsets(&s), [(Some(0), Some(2)), (Some(3), Some(5))]);
    }

    #[test]
    fn test_fallback_search_from_start() {
        // The third form only occurs before the cursor, so the search restarts
        // from the beginning and lands on the first occurrence.
        let mut s = sentence("ab cd", &["ab", "cd", "ab"]);
        index_words(&mut s);
        assert_eq!(
            offsets(&s),
            [(Some(0), Some(2)), (Some(3), Some(5)), (Some(0), Some(2))]
        );
    }

    #[test]
    fn test_unlocated_and_missing_forms() {
        let mut s = sentence("one two", &["one", "zzz", "two"]);
        s.words.as_mut().unwrap().push(Word::default());
        let stats = index_words(&mut s);

        assert_eq!(stats.unlocated, 1);
        assert_eq!(stats.offsets_written, 2);
        assert_eq!(
            offsets(&s),
            [(Some(0), Some(3)), (None, None), (Some(4), Some(7)), (None, None)]
        );
    }

    #[test]
    fn test_existing_offsets_move_the_cursor() {
        let mut s = sentence("x y x", &["x", "x"]);
        {
            let words = s.words.as_mut().unwrap();
            words[0].off_start = Some(4);
            words[0].off_end = Some(5);
            words[0].sentence_index = Some(7);
        }
        index_words(&mut s);

        let words = s.words.as_ref().unwrap();
        assert_eq!(words[0].sentence_index, Some(7));
        assert_eq!((words[0].off_start, words[0].off_end), (Some(4), Some(5)));
        // Nothing after position 5, fall back to the first "x"
        assert_eq!((words[1].off_start, words[1].off_end), (Some(0), Some(1)));
    }

    #[test]
    fn test_second_pass_changes_nothing() {
        let mut s = sentence("Ворон, лиса.", &["Ворон", ",", "лиса", "."]);
        index_words(&mut s);
        let snapshot = s.clone();

        let stats = index_words(&mut s);
        assert_eq!(stats, OffsetStats::default());
        assert_eq!(s, snapshot);
    }

    #[test]
    fn test_sentence_without_text_gets_indices_only() {
        let mut s = sentence("", &["a"]);
        s.text = None;
        let stats = index_words(&mut s);

        assert_eq!(stats.indices_written, 1);
        assert_eq!(offsets(&s), [(None, None)]);
    }
}
