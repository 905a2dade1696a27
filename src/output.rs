use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, Terminator, WriterBuilder};

use crate::error::Error;
use crate::movie::{Movie, HEADERS};

/// UTF-8 byte-order marker, so spreadsheet tools pick the right encoding.
pub const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Write `movies` to `path` as BOM-prefixed CSV, overwriting any previous file.
///
/// The header row is written even when `movies` is empty.
pub fn write_movies(path: &Path, movies: &[Movie]) -> Result<(), Error> {
    let mut out = BufWriter::new(File::create(path)?);
    out.write_all(BOM)?;

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_writer(out);

    writer.write_record(HEADERS)?;
    for movie in movies {
        writer.serialize(movie)?;
    }

    writer.flush()?;
    Ok(())
}

/// Read back a file produced by [`write_movies`].
pub fn read_movies(path: &Path) -> Result<Vec<Movie>, Error> {
    let mut contents = Vec::new();
    BufReader::new(File::open(path)?).read_to_end(&mut contents)?;
    let body = contents.strip_prefix(BOM).unwrap_or(&contents);

    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(body);

    let mut movies = Vec::new();
    for result in reader.deserialize() {
        movies.push(result?);
    }
    Ok(movies)
}
