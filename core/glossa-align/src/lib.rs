#![cfg_attr(not(test), no_std)]

#[macro_use]
extern crate alloc;

pub mod segment;
pub mod tags;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use core::fmt;

pub use segment::{split_segmentation, stem_of, Affix, Delimiter, Segmentation};
pub use tags::{gloss_lexeme, tags_from_gloss};

/// Label wrapped around the stem.
pub const STEM_TAG: &str = "STEM";
/// Tag written for an affix the gloss has no tag for.
pub const PLACEHOLDER_TAG: &str = "MORPH";

/// One affix paired with its tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaggedAffix<'a> {
    pub delimiter: Delimiter,
    pub tag: &'a str,
    pub text: &'a str,
}

/// A segmentation aligned with the tags of a gloss.
///
/// Renders as `STEM{stem}-` followed by one `TAG{affix}-` block per affix,
/// prefixed with `=` when the affix sits behind a clitic boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment<'a> {
    pub stem: &'a str,
    pub affixes: Vec<TaggedAffix<'a>>,
}

impl<'a> Alignment<'a> {
    /// Aligns `parts` with `gloss`. `None` when `parts` is blank.
    pub fn new(parts: &'a str, gloss: &'a str) -> Option<Self> {
        let parts = parts.trim();
        if parts.is_empty() {
            return None;
        }

        let Segmentation { stem, affixes } = split_segmentation(parts);
        let tags = tags_from_gloss(gloss, affixes.len());

        let affixes = affixes
            .into_iter()
            .zip(tags)
            .map(|(affix, tag)| TaggedAffix {
                delimiter: affix.delimiter,
                tag: if tag.is_empty() { PLACEHOLDER_TAG } else { tag },
                text: affix.text,
            })
            .collect();

        Some(Self { stem, affixes })
    }
}

impl fmt::Display for Alignment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{{}}}-", STEM_TAG, self.stem)?;
        for affix in &self.affixes {
            if affix.delimiter == Delimiter::Clitic {
                f.write_str("=")?;
            }
            write!(f, "{}{{{}}}-", affix.tag, affix.text)?;
        }
        Ok(())
    }
}

/// Builds the gloss index of a segmentation and its gloss.
///
/// Total: a blank segmentation gives an empty string, an unsegmented one gives
/// `STEM{parts}-`, and tag count mismatches are resolved by [`tags_from_gloss`].
pub fn build_gloss_index(parts: &str, gloss: &str) -> String {
    Alignment::new(parts, gloss)
        .map(|alignment| alignment.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_pads_missing_tags_with_placeholder() {
        assert_eq!(
            build_gloss_index("dokum'ent-vlä-m", "кончаться-NPST.3SG"),
            "STEM{dokum'ent}-MORPH{vlä}-NPST.3SG{m}-"
        );
    }

    #[test]
    fn test_clitic_without_gloss() {
        assert_eq!(build_gloss_index("r'ejs=ät", ""), "STEM{r'ejs}-=MORPH{ät}-");
    }

    #[test]
    fn test_blank_and_unsegmented() {
        assert_eq!(build_gloss_index("", "ворон"), "");
        assert_eq!(build_gloss_index("   ", ""), "");
        assert_eq!(build_gloss_index(" qaʁ ", "ворон-PL"), "STEM{qaʁ}-");
    }

    #[test]
    fn test_surplus_tags_align_right() {
        assert_eq!(
            build_gloss_index("aglaχ-ma-t", "спускаться-БЕСКОНЕЧНО-CVB.DELIM-3PL.O"),
            "STEM{aglaχ}-CVB.DELIM{ma}-3PL.O{t}-"
        );
    }

    #[test]
    fn test_trailing_delimiter_keeps_empty_block() {
        assert_eq!(build_gloss_index("a-", "x-PL"), "STEM{a}-PL{}-");
    }

    #[test]
    fn test_alignment_blocks() {
        let alignment = Alignment::new("nuna=mi", "земля-ABL").unwrap();
        assert_eq!(alignment.stem, "nuna");
        assert_eq!(
            alignment.affixes,
            [TaggedAffix {
                delimiter: Delimiter::Clitic,
                tag: "ABL",
                text: "mi"
            }]
        );
    }

    fn delimiter() -> impl Strategy<Value = char> {
        prop_oneof![Just('-'), Just('=')]
    }

    proptest! {
        #[test]
        fn test_unsegmented_is_stem_only(stem in "[a-zäʁɣχŋ']{1,12}", gloss in "[a-zа-я.A-Z-]{0,20}") {
            prop_assert_eq!(build_gloss_index(&stem, &gloss), format!("STEM{{{}}}-", stem));
        }

        #[test]
        fn test_one_block_per_affix(
            stem in "[a-z']{1,6}",
            affixes in prop::collection::vec((delimiter(), "[a-zä]{1,4}"), 1..6),
            tags in prop::collection::vec("[A-Z][A-Z0-9.]{0,4}", 0..8),
        ) {
            let mut parts = stem.clone();
            for (delim, text) in &affixes {
                parts.push(*delim);
                parts.push_str(text);
            }
            let gloss = if tags.is_empty() {
                "лексема".to_string()
            } else {
                format!("лексема-{}", tags.join("-"))
            };

            // Tag i of n affixes is gloss tag i + (m - n) when that index exists
            let n = affixes.len() as isize;
            let m = tags.len() as isize;
            let mut expected = format!("STEM{{{}}}-", stem);
            for (i, (delim, text)) in affixes.iter().enumerate() {
                let idx = i as isize + m - n;
                let tag = if idx >= 0 { tags[idx as usize].as_str() } else { PLACEHOLDER_TAG };
                if *delim == '=' {
                    expected.push('=');
                }
                expected.push_str(&format!("{}{{{}}}-", tag, text));
            }

            let built = build_gloss_index(&parts, &gloss);
            prop_assert_eq!(&built, &expected);
            prop_assert_eq!(Alignment::new(&parts, &gloss).unwrap().affixes.len(), affixes.len());
        }

        #[test]
        fn test_clitic_blocks_match_clitic_delimiters(
            delims in prop::collection::vec(delimiter(), 1..8),
        ) {
            let mut parts = String::from("stem");
            for d in &delims {
                parts.push(*d);
                parts.push('x');
            }
            let built = build_gloss_index(&parts, "");
            let clitics = delims.iter().filter(|d| **d == '=').count();
            prop_assert_eq!(built.matches("=MORPH{x}-").count(), clitics);
            prop_assert_eq!(built.matches("MORPH{x}-").count(), delims.len());
        }
    }
}
