//! Query records and tab-separated query file I/O.
//!
//! The on-disk format is one query per line, `queryID<TAB>queryText`, the
//! layout used by standard passage-retrieval query collections. Malformed
//! lines are reported and skipped; a single bad line never aborts a file.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A query: an identifier paired with its text.
///
/// Immutable once read; corruption derives a new `Query` sharing the
/// identifier with replaced text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Collection-assigned identifier, kept verbatim.
    pub id: String,
    /// The query text.
    pub text: String,
}

impl Query {
    /// Create a new query.
    pub fn new<I: Into<String>, T: Into<String>>(id: I, text: T) -> Self {
        Query {
            id: id.into(),
            text: text.into(),
        }
    }

    /// Derive a query with the same identifier and new text.
    pub fn with_text<T: Into<String>>(&self, text: T) -> Self {
        Query {
            id: self.id.clone(),
            text: text.into(),
        }
    }
}

/// Parse one `id<TAB>text` line. Returns `None` for a line with no tab
/// separator or with empty text.
pub fn parse_line(line: &str) -> Option<Query> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (id, text) = line.split_once('\t')?;
    if id.is_empty() || text.is_empty() {
        return None;
    }
    Some(Query::new(id, text))
}

/// Read queries from a tab-separated source.
///
/// Returns the parsed queries and the number of malformed lines that were
/// skipped. Blank lines are ignored silently; malformed lines are logged.
pub fn read_queries<R: BufRead>(reader: R) -> Result<(Vec<Query>, usize)> {
    let mut queries = Vec::new();
    let mut skipped = 0;

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(&line) {
            Some(query) => queries.push(query),
            None => {
                warn!("skipping malformed query on line {}: {line:?}", line_num + 1);
                skipped += 1;
            }
        }
    }

    Ok((queries, skipped))
}

/// Read queries from a tab-separated file.
pub fn read_queries_from_path<P: AsRef<Path>>(path: P) -> Result<(Vec<Query>, usize)> {
    let file = File::open(path.as_ref())?;
    read_queries(BufReader::new(file))
}

/// Write queries in the same tab-separated format they were read in.
pub fn write_queries<W: Write>(mut writer: W, queries: &[Query]) -> Result<()> {
    for query in queries {
        writeln!(writer, "{}\t{}", query.id, query.text)?;
    }
    Ok(())
}

/// Write queries to a file, creating or truncating it.
pub fn write_queries_to_path<P: AsRef<Path>>(path: P, queries: &[Query]) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write_queries(&mut writer, queries)?;
    writer.flush()?;
    Ok(())
}
