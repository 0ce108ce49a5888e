use alloc::vec::Vec;

use nom::{
    branch::alt,
    bytes::complete::take_till,
    character::complete::char,
    combinator::{map, value},
    multi::many0,
    sequence::pair,
    IResult,
};

/// Boundary that introduces an affix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    /// `-`, ordinary affixation
    Hyphen,
    /// `=`, clitic boundary
    Clitic,
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Hyphen => '-',
            Delimiter::Clitic => '=',
        }
    }

    pub fn is_delimiter(c: char) -> bool {
        c == '-' || c == '='
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affix<'a> {
    pub delimiter: Delimiter,
    pub text: &'a str,
}

/// A segmentation string split into its stem and delimited affixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation<'a> {
    pub stem: &'a str,
    pub affixes: Vec<Affix<'a>>,
}

impl<'a> Segmentation<'a> {
    /// Stem followed by affix texts.
    pub fn segments(&self) -> impl Iterator<Item = &'a str> + '_ {
        core::iter::once(self.stem).chain(self.affixes.iter().map(|a| a.text))
    }

    /// Delimiters in order; `delimiters()[i]` introduces `segments()[i + 1]`.
    pub fn delimiters(&self) -> impl Iterator<Item = Delimiter> + '_ {
        self.affixes.iter().map(|a| a.delimiter)
    }
}

fn chunk(input: &str) -> IResult<&str, &str> {
    take_till(Delimiter::is_delimiter)(input)
}

fn delimiter(input: &str) -> IResult<&str, Delimiter> {
    alt((
        value(Delimiter::Hyphen, char('-')),
        value(Delimiter::Clitic, char('=')),
    ))(input)
}

fn affix(input: &str) -> IResult<&str, Affix<'_>> {
    map(pair(delimiter, chunk), |(delimiter, text)| Affix { delimiter, text })(input)
}

/// Splits `parts` on `-` and `=`, keeping which delimiter introduced each affix.
///
/// Grammar: `chunk (delimiter chunk)*`. Chunks may be empty, so `"a-"` has one
/// affix with empty text and `"-a"` has an empty stem.
pub fn split_segmentation(parts: &str) -> Segmentation<'_> {
    match pair(chunk, many0(affix))(parts) {
        Ok((_, (stem, affixes))) => Segmentation { stem, affixes },
        // Every input matches the grammar; keep the whole string as a stem otherwise.
        Err(_) => Segmentation {
            stem: parts,
            affixes: Vec::new(),
        },
    }
}

/// Lexeme of a segmentation: the trimmed input up to the first delimiter.
pub fn stem_of(parts: &str) -> &str {
    split_segmentation(parts.trim()).stem
}
