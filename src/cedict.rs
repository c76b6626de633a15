/*
CC-CEDICT Format

- encoded in utf-8, one entry per line
- lines starting with # are comments (header, license)

entry = traditional " " simplified " " "[" pinyin "]" " " "/" definition "/" {definition "/"}
traditional = hanzi_word
simplified = hanzi_word
pinyin = syllable {" " syllable}
syllable = letter {letter} [tone]    -- ü is written as u:
tone = "1" | "2" | "3" | "4" | "5"

Example:
中國 中国 [Zhong1 guo2] /China/
*/

use nom::{
    IResult, Parser,
    bytes::complete::{take_till1, take_while1},
    character::complete::char,
    combinator::all_consuming,
    multi::many1,
    sequence::{delimited, preceded, terminated},
};
use std::{fmt, io};
use std::io::BufRead;

use itertools::Itertools;

use crate::config;
use crate::entry::{DictEntry, format_hanzi};

#[derive(Debug, PartialEq, Clone)]
pub struct CedictLine {
    pub trad: String,
    pub simp: String,
    /// tone numbers, syllables separated by spaces
    pub pinyin: String,
    pub definitions: Vec<String>,
}

impl CedictLine {
    pub fn to_entry(&self) -> DictEntry {
        DictEntry {
            hanzi: format_hanzi(&self.trad, &self.simp),
            pinyin: self.pinyin.clone(),
            translation: self.definitions.iter().join(config::TRANSLATION_SEP),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct ParsedLine {
    pub line_num: u32,
    pub line: Result<CedictLine, String>,
}

#[derive(Debug)]
pub enum CedictError {
    Parse { line_num: u32, message: String },
    Io { source: io::Error },
}

impl fmt::Display for CedictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { line_num, message } => {
                write!(f, "Parser Error in line {}: {}", line_num, message)
            }
            Self::Io { source } => write!(f, "{}", source),
        }
    }
}

impl From<io::Error> for CedictError {
    fn from(err: io::Error) -> Self {
        Self::Io { source: err }
    }
}

impl std::error::Error for CedictError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            CedictError::Parse { .. } => None,
            CedictError::Io { ref source } => Some(source),
        }
    }
}

/// Entries of a dictionary file and the lines that could not be parsed
#[derive(Debug, Default)]
pub struct CedictReport {
    pub entries: Vec<CedictLine>,
    pub errors: Vec<CedictError>,
}

#[derive(Debug)]
pub struct CedictReader<I>
where
    I: Iterator<Item = String>,
{
    inner: I,
    inner_line_count: u32,
}

impl<I> CedictReader<I>
where
    I: Iterator<Item = String>,
{
    pub fn new(inner: I) -> Self {
        CedictReader {
            inner,
            inner_line_count: 0,
        }
    }
}

impl<I> Iterator for CedictReader<I>
where
    I: Iterator<Item = String>,
{
    type Item = ParsedLine;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.inner.next()?;
            self.inner_line_count += 1;
            let line_content = line.trim();
            if line_content.is_empty() || line_content.starts_with('#') {
                continue;
            }
            return Some(ParsedLine {
                line_num: self.inner_line_count,
                line: parse_line(line_content),
            });
        }
    }
}

/// Read a whole dictionary, parse errors are collected, reading stops at the first I/O error.
/// With `limit` only the first `limit` entries are kept.
pub fn read_cedict(reader: impl BufRead, limit: Option<usize>) -> Result<CedictReport, CedictError> {
    let mut io_error = None;
    let mut report = CedictReport::default();
    {
        let lines = reader.lines().map_while(|line| match line {
            Ok(line) => Some(line),
            Err(e) => {
                io_error = Some(e);
                None
            }
        });
        for parsed in CedictReader::new(lines) {
            if limit.is_some_and(|l| report.entries.len() >= l) {
                break;
            }
            match parsed.line {
                Ok(entry) => report.entries.push(entry),
                Err(message) => {
                    log::warn!("skipping line {}: {}", parsed.line_num, message);
                    report.errors.push(CedictError::Parse {
                        line_num: parsed.line_num,
                        message,
                    });
                }
            }
        }
    }
    if let Some(e) = io_error {
        return Err(e.into());
    }
    log::debug!(
        "read {} entries, {} invalid lines",
        report.entries.len(),
        report.errors.len()
    );
    Ok(report)
}

pub fn parse_line(line: &str) -> Result<CedictLine, String> {
    match parse_entry(line) {
        Ok((_remainder, entry)) => Ok(entry),
        Err(e) => Err(e.to_string()),
    }
}

fn parse_hanzi(hanzi: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c != ' ').parse(hanzi)
}

fn parse_pinyin(pinyin: &str) -> IResult<&str, &str> {
    delimited(char('['), take_till1(|c: char| c == ']'), char(']')).parse(pinyin)
}

fn parse_definitions(definitions: &str) -> IResult<&str, Vec<&str>> {
    preceded(
        char('/'),
        many1(terminated(take_till1(|c: char| c == '/'), char('/'))),
    )
    .parse(definitions)
}

fn parse_entry(line: &str) -> IResult<&str, CedictLine> {
    let (remainder, (trad, _, simp, _, pinyin, _, definitions)) = all_consuming((
        parse_hanzi,
        char(' '),
        parse_hanzi,
        char(' '),
        parse_pinyin,
        char(' '),
        parse_definitions,
    ))
    .parse(line)?;
    Ok((
        remainder,
        CedictLine {
            trad: trad.to_owned(),
            simp: simp.to_owned(),
            pinyin: pinyin.trim().to_owned(),
            definitions: definitions.iter().map(|d| d.trim().to_owned()).collect(),
        },
    ))
}

#[cfg(test)]
mod tests;
