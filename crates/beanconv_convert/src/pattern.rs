//! Date patterns in the `yyyy-MM-dd` letter style.
//!
//! A pattern is compiled once into chrono format items and then used for
//! strict parsing and for formatting. Pattern letters:
//!
//! | letters | field |
//! |---|---|
//! | `yy` / `y`, `yyyy` | two-digit year / full year |
//! | `M`, `MM`, `MMM`, `MMMM` | month number, padded number, short name, long name |
//! | `d`, `dd` | day of month |
//! | `D` | day of year |
//! | `E`, `EEEE` | short / long weekday name |
//! | `H`, `HH` | hour (0-23) |
//! | `h`, `hh` | hour (1-12), only together with `a` |
//! | `m`, `mm` | minute |
//! | `s`, `ss` | second |
//! | `S` | fractional second (`SSS` millis, `SSSSSS` micros, longer runs nanos) |
//! | `a` | AM/PM marker |
//! | `Z` | numeric UTC offset |
//!
//! Text inside single quotes is literal and `''` is a literal quote. Any
//! other non-letter character is literal.
//!
//! Parsing is strict. Numeric fields take only ASCII digits, with no sign or
//! surrounding whitespace. A doubled letter (`MM`, `dd`, `HH`, `mm`, `ss`)
//! needs exactly two digits, a single letter takes one or two, and `yyyy`
//! needs at least four. Literal text must match exactly.

use std::fmt::{self, Write as _};
use std::iter::Peekable;
use std::str::{Chars, FromStr};

use beanconv_foundation::{Error, Result};
use chrono::format::{self, Item, Parsed, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// A compiled date pattern.
#[derive(Clone)]
pub struct DatePattern {
    /// Pattern text as given.
    source: String,
    /// Compiled chrono format items.
    items: Vec<Item<'static>>,
    /// Input shape checked before chrono parses the fields.
    shape: Vec<Segment>,
    /// Whether any year, month, or day field is present.
    has_date: bool,
    /// Whether any hour, minute, or second field is present.
    has_time: bool,
}

impl DatePattern {
    /// Compiles a pattern such as `yyyy-MM-dd`.
    ///
    /// # Errors
    /// Returns `InvalidPattern` for an empty pattern, an unterminated quote,
    /// or an unsupported pattern letter.
    pub fn compile(pattern: &str) -> Result<Self> {
        Compiler::new(pattern).run()
    }

    /// Returns the pattern text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns true if the pattern has year, month, or day fields.
    #[must_use]
    pub const fn has_date_fields(&self) -> bool {
        self.has_date
    }

    /// Returns true if the pattern has hour, minute, or second fields.
    #[must_use]
    pub const fn has_time_fields(&self) -> bool {
        self.has_time
    }

    /// Parses a date, ignoring any time fields.
    ///
    /// # Errors
    /// Returns `FormatMismatch` if the text does not match the pattern
    /// exactly or names an impossible date, and `InvalidPattern` if the
    /// pattern has no date fields.
    pub fn parse_date(&self, text: &str) -> Result<NaiveDate> {
        if !self.has_date {
            return Err(Error::invalid_pattern(&self.source, "pattern has no date fields"));
        }
        self.parse_fields(text)?
            .to_naive_date()
            .map_err(|_| self.mismatch(text))
    }

    /// Parses a time of day, ignoring any date fields.
    ///
    /// # Errors
    /// Returns `FormatMismatch` if the text does not match, and
    /// `InvalidPattern` if the pattern has no time fields.
    pub fn parse_time(&self, text: &str) -> Result<NaiveTime> {
        if !self.has_time {
            return Err(Error::invalid_pattern(&self.source, "pattern has no time fields"));
        }
        self.parse_fields(text)?
            .to_naive_time()
            .map_err(|_| self.mismatch(text))
    }

    /// Parses a timestamp. A pattern without time fields yields midnight.
    ///
    /// # Errors
    /// Returns `FormatMismatch` if the text does not match, and
    /// `InvalidPattern` if the pattern has no date fields.
    pub fn parse_timestamp(&self, text: &str) -> Result<NaiveDateTime> {
        if !self.has_date {
            return Err(Error::invalid_pattern(&self.source, "pattern has no date fields"));
        }
        let parsed = self.parse_fields(text)?;
        let date = parsed.to_naive_date().map_err(|_| self.mismatch(text))?;
        let time = if self.has_time {
            parsed.to_naive_time().map_err(|_| self.mismatch(text))?
        } else {
            NaiveTime::default()
        };
        Ok(date.and_time(time))
    }

    /// Formats a timestamp with this pattern.
    ///
    /// # Errors
    /// Returns `InvalidPattern` if the pattern needs a field the value does
    /// not carry (a UTC offset).
    pub fn format(&self, value: &NaiveDateTime) -> Result<String> {
        let mut out = String::new();
        write!(out, "{}", value.format_with_items(self.items.iter()))
            .map_err(|_| Error::invalid_pattern(&self.source, "cannot format a value without an offset"))?;
        Ok(out)
    }

    /// Formats a date at midnight.
    ///
    /// # Errors
    /// See [`DatePattern::format`].
    pub fn format_date(&self, date: NaiveDate) -> Result<String> {
        self.format(&date.and_time(NaiveTime::default()))
    }

    /// Formats a time of day on 1970-01-01.
    ///
    /// # Errors
    /// See [`DatePattern::format`].
    pub fn format_time(&self, time: NaiveTime) -> Result<String> {
        self.format(&NaiveDate::default().and_time(time))
    }

    fn parse_fields(&self, text: &str) -> Result<Parsed> {
        self.check_shape(text)?;
        let mut parsed = Parsed::new();
        format::parse(&mut parsed, text, self.items.iter()).map_err(|_| self.mismatch(text))?;
        Ok(parsed)
    }

    /// Checks field widths and literals, which chrono scans leniently.
    fn check_shape(&self, text: &str) -> Result<()> {
        let mut rest = text;
        for (i, segment) in self.shape.iter().enumerate() {
            let next = match segment {
                Segment::Literal(literal) => rest.strip_prefix(literal.as_str()),
                Segment::Digits { min, max } => {
                    // Abutting numeric fields take their minimum width.
                    let max = match self.shape.get(i + 1) {
                        Some(Segment::Digits { .. }) => *min,
                        _ => *max,
                    };
                    let len = rest.bytes().take(max).take_while(u8::is_ascii_digit).count();
                    (len >= *min).then(|| &rest[len..])
                }
                Segment::Word => {
                    let len: usize = rest
                        .chars()
                        .take_while(|c| c.is_alphabetic())
                        .map(char::len_utf8)
                        .sum();
                    (len > 0).then(|| &rest[len..])
                }
                Segment::Offset => rest
                    .strip_prefix('+')
                    .or_else(|| rest.strip_prefix('-'))
                    .map(|r| r.trim_start_matches(|c: char| c.is_ascii_digit() || c == ':')),
            };
            rest = next.ok_or_else(|| self.mismatch(text))?;
        }
        if rest.is_empty() {
            Ok(())
        } else {
            Err(self.mismatch(text))
        }
    }

    fn mismatch(&self, text: &str) -> Error {
        Error::format_mismatch(text, &self.source)
    }
}

impl FromStr for DatePattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::compile(s)
    }
}

impl PartialEq for DatePattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for DatePattern {}

impl fmt::Debug for DatePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DatePattern({:?})", self.source)
    }
}

impl fmt::Display for DatePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Which part of a value a pattern letter reads.
#[derive(Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Date,
    Time,
    Offset,
}

/// What one stretch of input must look like.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    /// Exact text.
    Literal(String),
    /// A run of ASCII digits.
    Digits { min: usize, max: usize },
    /// A month or weekday name, or an AM/PM marker.
    Word,
    /// A signed numeric UTC offset.
    Offset,
}

/// A compiled pattern letter run.
struct Field {
    /// strftime specifier.
    strftime: &'static str,
    kind: FieldKind,
    segment: Segment,
}

impl Field {
    const fn new(strftime: &'static str, kind: FieldKind, segment: Segment) -> Self {
        Self {
            strftime,
            kind,
            segment,
        }
    }

    /// One or two digits for a single letter, exactly two otherwise.
    const fn two_digit(
        unpadded: &'static str,
        padded: &'static str,
        kind: FieldKind,
        count: usize,
    ) -> Self {
        if count == 1 {
            Self::new(unpadded, kind, Segment::Digits { min: 1, max: 2 })
        } else {
            Self::new(padded, kind, Segment::Digits { min: 2, max: 2 })
        }
    }
}

/// Maps a run of one pattern letter to its field.
fn field_for(letter: char, count: usize) -> Option<Field> {
    use FieldKind::{Date, Offset, Time};

    let field = match (letter, count) {
        ('y', 2) => Field::new("%y", Date, Segment::Digits { min: 2, max: 2 }),
        ('y', _) => Field::new(
            "%Y",
            Date,
            Segment::Digits {
                min: count.min(4),
                max: usize::MAX,
            },
        ),
        ('M', 1 | 2) => Field::two_digit("%-m", "%m", Date, count),
        ('M', 3) => Field::new("%b", Date, Segment::Word),
        ('M', _) => Field::new("%B", Date, Segment::Word),
        ('d', _) => Field::two_digit("%-d", "%d", Date, count),
        ('D', _) => Field::new(
            "%j",
            Date,
            Segment::Digits {
                min: count.min(3),
                max: 3,
            },
        ),
        ('E', 1..=3) => Field::new("%a", Date, Segment::Word),
        ('E', _) => Field::new("%A", Date, Segment::Word),
        ('H', _) => Field::two_digit("%-H", "%H", Time, count),
        ('h', _) => Field::two_digit("%-I", "%I", Time, count),
        ('m', _) => Field::two_digit("%-M", "%M", Time, count),
        ('s', _) => Field::two_digit("%-S", "%S", Time, count),
        ('S', 1..=3) => Field::new("%3f", Time, Segment::Digits { min: 3, max: 3 }),
        ('S', 4..=6) => Field::new("%6f", Time, Segment::Digits { min: 6, max: 6 }),
        ('S', _) => Field::new("%9f", Time, Segment::Digits { min: 9, max: 9 }),
        ('a', _) => Field::new("%p", Time, Segment::Word),
        ('Z', _) => Field::new("%z", Offset, Segment::Offset),
        _ => return None,
    };
    Some(field)
}

/// Single-pass pattern compiler.
struct Compiler<'p> {
    /// Pattern text.
    pattern: &'p str,
    /// Remaining characters.
    chars: Peekable<Chars<'p>>,
    /// Items compiled so far.
    items: Vec<Item<'static>>,
    /// Input shape compiled so far.
    shape: Vec<Segment>,
    /// Literal text not yet emitted.
    literal: String,
    has_date: bool,
    has_time: bool,
    has_twelve_hour: bool,
    has_marker: bool,
}

impl<'p> Compiler<'p> {
    fn new(pattern: &'p str) -> Self {
        Self {
            pattern,
            chars: pattern.chars().peekable(),
            items: Vec::new(),
            shape: Vec::new(),
            literal: String::new(),
            has_date: false,
            has_time: false,
            has_twelve_hour: false,
            has_marker: false,
        }
    }

    fn run(mut self) -> Result<DatePattern> {
        if self.pattern.is_empty() {
            return Err(Error::invalid_pattern(self.pattern, "empty pattern"));
        }

        while let Some(c) = self.chars.next() {
            match c {
                '\'' => self.scan_quoted()?,
                c if c.is_ascii_alphabetic() => {
                    let mut count = 1;
                    while self.chars.next_if_eq(&c).is_some() {
                        count += 1;
                    }
                    self.push_field(c, count)?;
                }
                c => self.literal.push(c),
            }
        }
        self.flush_literal();

        if self.has_twelve_hour && !self.has_marker {
            return Err(Error::invalid_pattern(
                self.pattern,
                "12-hour field 'h' needs an AM/PM marker 'a'",
            ));
        }

        Ok(DatePattern {
            source: self.pattern.to_string(),
            items: self.items,
            shape: self.shape,
            has_date: self.has_date,
            has_time: self.has_time,
        })
    }

    /// Scans after an opening quote.
    fn scan_quoted(&mut self) -> Result<()> {
        if self.chars.next_if_eq(&'\'').is_some() {
            self.literal.push('\'');
            return Ok(());
        }
        loop {
            match self.chars.next() {
                Some('\'') => {
                    if self.chars.next_if_eq(&'\'').is_some() {
                        self.literal.push('\'');
                    } else {
                        return Ok(());
                    }
                }
                Some(c) => self.literal.push(c),
                None => return Err(Error::invalid_pattern(self.pattern, "unterminated quote")),
            }
        }
    }

    fn push_field(&mut self, letter: char, count: usize) -> Result<()> {
        let field = field_for(letter, count).ok_or_else(|| {
            Error::invalid_pattern(self.pattern, format!("unsupported pattern letter '{letter}'"))
        })?;
        self.flush_literal();
        self.items.extend(StrftimeItems::new(field.strftime));
        self.shape.push(field.segment);
        match letter {
            'h' => self.has_twelve_hour = true,
            'a' => self.has_marker = true,
            _ => {}
        }
        match field.kind {
            FieldKind::Date => self.has_date = true,
            FieldKind::Time => self.has_time = true,
            FieldKind::Offset => {}
        }
        Ok(())
    }

    fn flush_literal(&mut self) {
        if !self.literal.is_empty() {
            let text = std::mem::take(&mut self.literal);
            self.shape.push(Segment::Literal(text.clone()));
            self.items.push(Item::OwnedLiteral(text.into_boxed_str()));
        }
    }
}
