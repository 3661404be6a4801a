use anyhow::{Context, Result, bail};
use flate2::read::GzDecoder;
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

/// Load the delta series of a two-column data file.
///
/// Files ending in `.gz` are decompressed on the fly.
///
/// # Errors
/// Returns an error if the file cannot be opened or read, or if any line
/// is malformed. See [`parse_delta_series`].
pub fn load_delta_series<P: AsRef<Path>>(file: P) -> Result<Vec<f64>> {
    let reader = open_input(file.as_ref())?;
    parse_delta_series(reader)
}

/// Open a data file, wrapping it in a gzip decoder if its name ends in `.gz`.
pub fn open_input(file: &Path) -> Result<Box<dyn BufRead>> {
    let handle = File::open(file).with_context(|| format!("failed to open {file:?}"))?;

    let reader: Box<dyn Read> = if is_gzip(file) {
        Box::new(GzDecoder::new(handle))
    } else {
        Box::new(handle)
    };

    Ok(Box::new(BufReader::new(reader)))
}

/// Parse two-column lines and return the delta series of the second column.
///
/// Element `i` of the result is `-(value[i] - value[i - 1])`, with a zero
/// baseline before the first value. The first column is ignored.
///
/// # Errors
/// Returns an error on read failure, on any line that does not have exactly
/// two whitespace-separated fields, or if the second field is not a number.
pub fn parse_delta_series<R: BufRead>(reader: R) -> Result<Vec<f64>> {
    let mut delta_vec = Vec::new();
    let mut prev = 0.0;

    for (i_line, line) in reader.split(b'\n').enumerate() {
        let n_line = i_line + 1;
        let line = line.with_context(|| format!("failed to read line {n_line}"))?;
        let line = line.strip_suffix(b"\r").unwrap_or(&line);

        let val = parse_line(&String::from_utf8_lossy(line))
            .with_context(|| format!("invalid line {n_line}"))?;
        delta_vec.push(-(val - prev));
        prev = val;
    }

    Ok(delta_vec)
}

// A dotfile named `.gz` counts as compressed too.
fn is_gzip(file: &Path) -> bool {
    file.file_name()
        .is_some_and(|name| name.as_encoded_bytes().ends_with(b".gz"))
}

fn parse_line(line: &str) -> Result<f64> {
    let fields: Vec<_> = line.split_whitespace().collect();
    let [_, val] = fields[..] else {
        bail!("incorrect number of columns: expected 2, found {}", fields.len());
    };

    parse_float(val).with_context(|| format!("failed to convert {val:?} into a float"))
}

fn parse_float(token: &str) -> Result<f64> {
    let val: f64 = token.parse()?;
    if val.is_infinite() && !spells_infinity(token) {
        bail!("value out of range");
    }
    Ok(val)
}

fn spells_infinity(token: &str) -> bool {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    digits.eq_ignore_ascii_case("inf") || digits.eq_ignore_ascii_case("infinity")
}
