use std::str::FromStr;

use logos::Logos;
use thiserror::Error;
use time::{format_description::FormatItem, macros::format_description, Date};

const DATE_FORMAT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

#[derive(Logos, Debug, PartialEq)]
#[logos(skip r"[ \t]+")] // Ignore this regex pattern between tokens
enum Token {
    #[regex(r"[0-9]{4}-[0-9]{2}-[0-9]{2}")]
    Date,

    #[regex(r"-?[0-9]+(\.[0-9]+)?")]
    Number,

    // Region names carry Polish diacritics and sometimes an inner
    // hyphen, e.g. `warmińsko-mazurskie`.
    #[regex(r"[a-zA-ZąćęłńóśźżĄĆĘŁŃÓŚŹŻ]+(-[a-zA-ZąćęłńóśźżĄĆĘŁŃÓŚŹŻ]+)*")]
    Word,

    #[token(",")]
    Comma,
}

/// One region column: the region name and its daily values, in row order.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub region: String,
    pub values: Vec<f64>,
}

/// A rectangular table of daily case counts: one date per row, one
/// numeric column per region. Column order is the order of the source
/// data and is preserved everywhere downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseTable {
    pub dates: Vec<Date>,
    pub series: Vec<Series>,
}

impl CaseTable {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|series| series.region.as_str())
    }

    pub fn column(&self, region: &str) -> Option<&[f64]> {
        self.series
            .iter()
            .find(|series| series.region == region)
            .map(|series| series.values.as_slice())
    }

    /// Dates rendered as `YYYY-MM-DD`, one label per row.
    pub fn date_labels(&self) -> Vec<String> {
        self.dates
            .iter()
            .map(|date| {
                format!(
                    "{:04}-{:02}-{:02}",
                    date.year(),
                    date.month() as u8,
                    date.day()
                )
            })
            .collect()
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("empty input")]
    Empty,
    #[error("bad header, expected `date` as the first column")]
    BadHeader,
    #[error("bad region name in header: `{0}`")]
    BadRegion(String),
    #[error("bad date `{0}` on line {1}")]
    BadDate(String, usize),
    #[error("bad value `{0}` on line {1}")]
    BadValue(String, usize),
    #[error("line {line}: expected {expected} values, got {got}")]
    WrongColumnCount {
        line: usize,
        expected: usize,
        got: usize,
    },
}

impl FromStr for CaseTable {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines().enumerate();
        let (_, header) = lines.next().ok_or(ParseError::Empty)?;
        let regions = parse_header(header)?;

        let mut dates = Vec::new();
        let mut columns: Vec<Vec<f64>> = vec![Vec::new(); regions.len()];

        for (index, line) in lines {
            if line.trim().is_empty() {
                continue;
            }
            let date = parse_row(line, index + 1, &mut columns)?;
            dates.push(date);
        }

        let series = regions
            .into_iter()
            .zip(columns)
            .map(|(region, values)| Series { region, values })
            .collect();

        Ok(Self { dates, series })
    }
}

/// Header: `date` followed by comma-separated region names.
fn parse_header(line: &str) -> Result<Vec<String>, ParseError> {
    let mut lex = Token::lexer(line);
    match lex.next() {
        Some(Ok(Token::Word)) if lex.slice() == "date" => (),
        _ => return Err(ParseError::BadHeader),
    }

    let mut regions = Vec::new();
    loop {
        match lex.next() {
            None => break,
            Some(Ok(Token::Comma)) => (),
            _ => return Err(ParseError::BadRegion(lex.slice().to_string())),
        }
        match lex.next() {
            Some(Ok(Token::Word)) => regions.push(lex.slice().to_string()),
            _ => return Err(ParseError::BadRegion(lex.slice().to_string())),
        }
    }

    Ok(regions)
}

/// Row: a date followed by one comma-separated number per region column.
/// Pushes each value onto its column and returns the row's date.
fn parse_row(line: &str, line_no: usize, columns: &mut [Vec<f64>]) -> Result<Date, ParseError> {
    let mut lex = Token::lexer(line);

    let date = match lex.next() {
        Some(Ok(Token::Date)) => Date::parse(lex.slice(), DATE_FORMAT)
            .map_err(|_| ParseError::BadDate(lex.slice().to_string(), line_no))?,
        _ => return Err(ParseError::BadDate(lex.slice().to_string(), line_no)),
    };

    let mut got = 0;
    loop {
        match lex.next() {
            None => break,
            Some(Ok(Token::Comma)) => (),
            _ => return Err(ParseError::BadValue(lex.slice().to_string(), line_no)),
        }
        let value: f64 = match lex.next() {
            Some(Ok(Token::Number)) => lex.slice().parse().unwrap(),
            _ => return Err(ParseError::BadValue(lex.slice().to_string(), line_no)),
        };
        if got == columns.len() {
            return Err(ParseError::WrongColumnCount {
                line: line_no,
                expected: columns.len(),
                got: got + 1,
            });
        }
        columns[got].push(value);
        got += 1;
    }

    if got != columns.len() {
        return Err(ParseError::WrongColumnCount {
            line: line_no,
            expected: columns.len(),
            got,
        });
    }

    Ok(date)
}
