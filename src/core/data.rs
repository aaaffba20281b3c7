//! Sample loader: one number per line, zero-allocation float parsing.

use std::{
    error::Error,
    fmt::{self, Display},
    io::{BufRead, BufReader, Read},
};

// --- Error Handling ---
#[derive(Debug)]
pub struct ParseDataError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug)]
pub enum ParseErrorKind {
    Io(std::io::Error),
    BadFloat(String),
    NonFinite,
    Empty,
}

impl Display for ParseDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::Io(e) => write!(f, "I/O error on line {}: {}", self.line, e),
            ParseErrorKind::BadFloat(text) => {
                write!(f, "line {}: invalid value '{}'", self.line, text)
            }
            ParseErrorKind::NonFinite => write!(f, "line {}: value is not finite", self.line),
            ParseErrorKind::Empty => f.write_str("no samples found"),
        }
    }
}

impl Error for ParseDataError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            ParseErrorKind::Io(e) => Some(e),
            _ => None,
        }
    }
}

// --- Helpers ---
#[inline]
fn trim(mut b: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = b {
        if !first.is_ascii_whitespace() {
            break;
        }
        b = rest;
    }
    while let [rest @ .., last] = b {
        if !last.is_ascii_whitespace() {
            break;
        }
        b = rest;
    }
    b
}

/// Rewrite U+2212 (minus sign, `E2 88 92`) to ASCII `-` in place.
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if buf[r..].starts_with(&[0xE2, 0x88, 0x92]) {
            buf[w] = b'-';
            r += 3;
        } else {
            buf[w] = buf[r];
            r += 1;
        }
        w += 1;
    }
    buf.truncate(w);
}

fn parse_f64(bytes: &[u8], line: usize) -> Result<f64, ParseDataError> {
    let val = lexical_core::parse::<f64>(bytes).map_err(|_| ParseDataError {
        line,
        kind: ParseErrorKind::BadFloat(String::from_utf8_lossy(bytes).into_owned()),
    })?;
    if val.is_finite() {
        Ok(val)
    } else {
        Err(ParseDataError {
            line,
            kind: ParseErrorKind::NonFinite,
        })
    }
}

const BUF_CAP: usize = 1 << 16; // 64 KiB

/// Read samples from `src`.
///
/// Blank lines and `#` comments are skipped, a non-numeric first line is
/// taken as a header, and only the first comma-separated field counts.
///
/// # Errors
///
/// Fails on I/O errors, unparsable or non-finite values, or when no sample
/// was found at all.
pub fn read_samples<R: Read>(src: R) -> Result<Vec<f64>, ParseDataError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(64);
    let mut out = Vec::new();
    let mut saw_first = false;
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr.read_until(b'\n', &mut buf).map_err(|e| ParseDataError {
            line: line_no,
            kind: ParseErrorKind::Io(e),
        })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }

        normalize_unicode_minus(&mut buf);
        let end = buf.iter().position(|&b| b == b',').unwrap_or(buf.len());
        let field = trim(&buf[..end]);
        if field.is_empty() || field[0] == b'#' {
            continue;
        }

        // simple header detection (non-numeric first field)
        if !saw_first {
            saw_first = true;
            if lexical_core::parse::<f64>(field).is_err() {
                log::trace!("skipping header on line {line_no}");
                continue;
            }
        }

        out.push(parse_f64(field, line_no)?);
    }

    if out.is_empty() {
        return Err(ParseDataError {
            line: 0,
            kind: ParseErrorKind::Empty,
        });
    }
    log::trace!("loaded {} samples from {line_no} lines", out.len());
    Ok(out)
}

/// Read samples from a file path, or stdin for `-`.
///
/// # Errors
///
/// See [`read_samples`]; opening the file reports line 0.
pub fn read_samples_from_path(path: &str) -> Result<Vec<f64>, ParseDataError> {
    if path == "-" {
        read_samples(std::io::stdin())
    } else {
        use std::fs::File;
        read_samples(File::open(path).map_err(|e| ParseDataError {
            line: 0,
            kind: ParseErrorKind::Io(e),
        })?)
    }
}
