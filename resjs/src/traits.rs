//! Traits for reading and writing resource bundles.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Cursor, Read, Write},
    path::Path,
};

use crate::error::Error;

/// A trait for parsing and writing a resource document from/to one file.
///
/// `read_from` decodes BOM-prefixed files (UTF-8 with BOM, UTF-16) before
/// parsing, so bundles authored on Windows tooling load without preprocessing.
///
/// # Example
///
/// ```rust,no_run
/// use resjs::traits::Parser;
/// let bundle = resjs::ResourceBundle::read_from("Resources.bundle.json")?;
/// bundle.write_to("Resources.cache.json")?;
/// Ok::<(), resjs::Error>(())
/// ```
pub trait Parser {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error>
    where
        Self: Sized;

    /// Parse from file path, decoding a leading BOM if present.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let file = File::open(path).map_err(Error::Io)?;
        let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
            .bom_override(true)
            .build(file);

        let mut decoded = String::new();
        decoder.read_to_string(&mut decoded).map_err(Error::Io)?;

        Self::from_str(&decoded)
    }

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error>;

    /// Write to file path.
    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        self.to_writer(writer)
    }

    /// Parse from a string.
    fn from_str(s: &str) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(s))
    }

    /// Parse from bytes.
    fn from_bytes(bytes: &[u8]) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(bytes))
    }
}

/// Opens a file for reading with a BOM-aware decoder wrapped in a `BufReader`.
pub(crate) fn open_decoded<P: AsRef<Path>>(path: P) -> Result<impl BufRead, Error> {
    let file = File::open(path).map_err(Error::Io)?;
    let decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
        .bom_override(true)
        .build(file);
    Ok(BufReader::new(decoder))
}
