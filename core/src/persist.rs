//! Persistence for `Dictionary`.
//!
//! Two encodings are supported: compact bincode (1.x, varint, with a payload
//! limit taken from `Config::max_payload_bytes`) and pretty JSON for
//! inspection. Both store the five lemma vectors field for field in order;
//! the lexical index is never stored and is rebuilt on load.
//!
//! Decode failures are reported as `CoreError::CorruptData` with a byte
//! offset (bincode) or line/column (JSON).

use crate::dictionary::Dictionary;
use crate::error::{CoreError, DataPosition};
use crate::Config;
use bincode::Options;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Reader adapter that tracks how many bytes were consumed.
struct CountingReader<R> {
    inner: R,
    position: u64,
}

impl<R: Read> CountingReader<R> {
    fn new(inner: R) -> Self {
        Self { inner, position: 0 }
    }
}

impl<R: Read> Read for CountingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.position += n as u64;
        Ok(n)
    }
}

fn bincode_options(config: &Config) -> impl Options {
    bincode::DefaultOptions::new().with_limit(config.max_payload_bytes)
}

impl Dictionary {
    /// Encode the lemma vectors with bincode.
    pub fn write_bincode<W: Write>(&self, writer: W, config: &Config) -> Result<(), CoreError> {
        bincode_options(config)
            .serialize_into(writer, self)
            .map_err(|e| match *e {
                bincode::ErrorKind::Io(io) => CoreError::Io(io),
                other => CoreError::Encode(format!("{other}")),
            })
    }

    /// Decode a dictionary written by [`Dictionary::write_bincode`] and
    /// rebuild its index.
    pub fn read_bincode<R: Read>(reader: R, config: &Config) -> Result<Self, CoreError> {
        let mut counting = CountingReader::new(reader);
        let decoded: Result<Dictionary, _> =
            bincode_options(config).deserialize_from(&mut counting);
        let dict = decoded.map_err(|e| match *e {
            bincode::ErrorKind::Io(io) if io.kind() != std::io::ErrorKind::UnexpectedEof => {
                CoreError::Io(io)
            }
            other => CoreError::CorruptData {
                position: DataPosition::Byte(counting.position),
                message: format!("{other}"),
            },
        })?;
        dict.finish_load(config)
    }

    /// Save the dictionary to a file using bincode serialization.
    pub fn save_bincode<P: AsRef<Path>>(&self, path: P, config: &Config) -> Result<(), CoreError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_bincode(&mut writer, config)?;
        writer.flush()?;
        Ok(())
    }

    /// Load a dictionary from a bincode file produced by `save_bincode`.
    pub fn load_bincode<P: AsRef<Path>>(path: P, config: &Config) -> Result<Self, CoreError> {
        let file = File::open(path)?;
        Self::read_bincode(BufReader::new(file), config)
    }

    pub fn write_json<W: Write>(&self, writer: W) -> Result<(), CoreError> {
        serde_json::to_writer_pretty(writer, self).map_err(|e| {
            if e.is_io() {
                CoreError::Io(e.into())
            } else {
                CoreError::Encode(format!("{e}"))
            }
        })
    }

    pub fn read_json<R: Read>(reader: R, config: &Config) -> Result<Self, CoreError> {
        let dict: Dictionary = serde_json::from_reader(reader).map_err(|e| {
            if e.is_io() {
                CoreError::Io(e.into())
            } else {
                CoreError::CorruptData {
                    position: DataPosition::Line {
                        line: e.line(),
                        column: e.column(),
                    },
                    message: format!("{e}"),
                }
            }
        })?;
        dict.finish_load(config)
    }

    /// Save the dictionary as pretty-printed JSON.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<(), CoreError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_json(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    pub fn load_json<P: AsRef<Path>>(path: P, config: &Config) -> Result<Self, CoreError> {
        let file = File::open(path)?;
        Self::read_json(BufReader::new(file), config)
    }

    fn finish_load(mut self, config: &Config) -> Result<Self, CoreError> {
        if config.simplify_on_load {
            self.simplify();
        }
        self.build_map()?;
        tracing::debug!(lemmas = self.len(), "loaded dictionary");
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lemma::{Case, Gender, Noun, Number, Verb};
    use std::io::Cursor;

    fn sample() -> Dictionary {
        let mut d = Dictionary::new();
        d.add(
            Noun::new("Baum", Gender::MASCULINE)
                .with_form(Case::Nominative, Number::Plural, "Bäume"),
        );
        d.add(Verb::new("gehen"));
        d
    }

    #[test]
    fn bincode_roundtrip_in_memory() {
        let config = Config::default();
        let mut buf = Vec::new();
        sample().write_bincode(&mut buf, &config).unwrap();
        let loaded = Dictionary::read_bincode(Cursor::new(buf), &config).unwrap();
        assert!(!loaded.needs_rebuild());
        assert_eq!(loaded.nouns(), sample().nouns());
        assert_eq!(loaded.find("bäume").len(), 1);
    }

    #[test]
    fn truncated_bincode_reports_byte_position() {
        let config = Config::default();
        let mut buf = Vec::new();
        sample().write_bincode(&mut buf, &config).unwrap();
        buf.truncate(buf.len() / 2);
        match Dictionary::read_bincode(Cursor::new(buf), &config) {
            Err(CoreError::CorruptData {
                position: DataPosition::Byte(_),
                ..
            }) => {}
            other => panic!("expected corrupt data, got {other:?}"),
        }
    }

    #[test]
    fn oversized_payload_is_corrupt() {
        let config = Config {
            max_payload_bytes: 4,
            ..Config::default()
        };
        let mut buf = Vec::new();
        sample().write_bincode(&mut buf, &Config::default()).unwrap();
        let err = Dictionary::read_bincode(Cursor::new(buf), &config).unwrap_err();
        assert!(matches!(err, CoreError::CorruptData { .. }));
    }

    #[test]
    fn malformed_json_reports_line_and_column() {
        let text = "{\n  \"nouns\": [ oops ]\n}";
        let err = Dictionary::read_json(Cursor::new(text), &Config::default()).unwrap_err();
        match err {
            CoreError::CorruptData {
                position: DataPosition::Line { line, .. },
                ..
            } => assert_eq!(line, 2),
            other => panic!("expected corrupt data, got {other:?}"),
        }
    }
}
