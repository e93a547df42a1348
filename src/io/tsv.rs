//!
//! Labeled distance table in tab separated values
//!
//! ```text
//!     a   b   c
//! a   0.0 1.0 3.0
//! b   inf 0.0 2.0
//! c   inf inf 0.0
//! ```
//!
//! Distances always have a fractional part or an exponent (`1.0`, `1e300`),
//! and INF is `inf`.
//!
use crate::common::Label;
use crate::error::{Error, Result};
use crate::matrix::Matrix;
use itertools::Itertools;
use std::borrow::Cow;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::{fs, io};

///
/// Quote a field if it contains the delimiter, a quote or a line break.
/// Quotes inside are doubled.
///
fn quote(field: &str) -> Cow<str> {
    if field.contains(|c: char| matches!(c, '\t' | '"' | '\n' | '\r')) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

///
/// Write the distance matrix with labels of rows/columns.
///
/// Header is an empty cell followed by the labels, and each row is the label
/// followed by the distances. Each distance is written in the shortest form
/// that is parsed back to the same value.
///
/// # Errors
///
/// * `MalformedInput` if the number of labels and the matrix size differ
///
pub fn write_distance_table<W: Write>(writer: &mut W, labels: &[Label], dists: &Matrix) -> Result<()> {
    if labels.len() != dists.n() {
        return Err(Error::MalformedInput {
            row: 0,
            expected: dists.n(),
            found: labels.len(),
        });
    }
    writeln!(writer, "\t{}", labels.iter().map(|l| quote(l)).join("\t"))?;
    for (label, row) in labels.iter().zip(dists.rows()) {
        writeln!(
            writer,
            "{}\t{}",
            quote(label),
            row.iter().map(|d| format!("{:?}", d)).join("\t")
        )?;
    }
    Ok(())
}

///
/// `write_distance_table` into a file
///
pub fn write_distance_table_file<P: AsRef<Path>>(
    path: P,
    labels: &[Label],
    dists: &Matrix,
) -> Result<()> {
    let file = fs::File::create(path)?;
    let mut writer = io::BufWriter::new(file);
    write_distance_table(&mut writer, labels, dists)?;
    writer.flush()?;
    Ok(())
}

///
/// `<dir>/<name>.graphml` -> `<dir>/<name>_paths.csv`
///
pub fn default_output_path<P: AsRef<Path>>(input: P) -> PathBuf {
    let input = input.as_ref();
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}_paths.csv", stem))
}
