//! Facade Pattern
//! One `convert` call hides codec detection, decoding, encoding and saving.
//!
//! Run with: cargo run --bin facade

use std::io::{self, Write};

use crate::demo::DemoContext;
use crate::error;

// ============================================================================
// Subsystem
// ============================================================================

pub struct VideoFile {
    filename: String,
}

impl VideoFile {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codec {
    name: String,
}

pub struct CodecDetector;

impl CodecDetector {
    pub fn detect(&self, file: &VideoFile, out: &mut dyn Write) -> io::Result<Codec> {
        writeln!(out, "Detecting codec for: {}", file.filename)?;
        Ok(Codec {
            name: "H.264".to_string(),
        })
    }
}

pub struct Decoder;

impl Decoder {
    pub fn decode(&self, file: &VideoFile, codec: &Codec, out: &mut dyn Write) -> io::Result<String> {
        writeln!(out, "Decoding {} using codec {}", file.filename, codec.name)?;
        Ok("RAW_DATA".to_string())
    }
}

pub struct Encoder;

impl Encoder {
    pub fn encode(&self, _raw: &str, target_format: &str, out: &mut dyn Write) -> io::Result<String> {
        writeln!(out, "Encoding raw data to {}", target_format)?;
        Ok(format!("ENCODED_DATA_{}", target_format))
    }
}

pub struct FileSaver;

impl FileSaver {
    /// Pretends to save; nothing touches disk.
    pub fn save(&self, encoded: &str, output_filename: &str, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Saving output to: {}", output_filename)?;
        tracing::debug!(bytes = encoded.len(), output_filename, "pretend save");
        Ok(())
    }
}

// ============================================================================
// Facade
// ============================================================================

pub struct VideoConverter {
    detector: CodecDetector,
    decoder: Decoder,
    encoder: Encoder,
    saver: FileSaver,
}

impl Default for VideoConverter {
    fn default() -> Self {
        Self {
            detector: CodecDetector,
            decoder: Decoder,
            encoder: Encoder,
            saver: FileSaver,
        }
    }
}

impl VideoConverter {
    /// Returns the output filename.
    pub fn convert(
        &self,
        input_filename: &str,
        target_format: &str,
        out: &mut dyn Write,
    ) -> io::Result<String> {
        let file = VideoFile::new(input_filename);

        let codec = self.detector.detect(&file, out)?;
        let raw = self.decoder.decode(&file, &codec, out)?;
        let encoded = self.encoder.encode(&raw, target_format, out)?;

        let output_filename = format!("{}.{}", input_filename, target_format);
        self.saver.save(&encoded, &output_filename, out)?;

        writeln!(out, "Done ✅")?;
        Ok(output_filename)
    }
}

pub fn run(ctx: &mut DemoContext<'_>) -> error::Result<()> {
    let converter = VideoConverter::default();
    converter.convert("movie.mp4", "avi", ctx.out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::capture;

    #[test]
    fn test_encoder_output() {
        let encoded = Encoder.encode("RAW", "mkv", &mut io::sink()).unwrap();
        assert_eq!(encoded, "ENCODED_DATA_mkv");
    }

    #[test]
    fn test_convert_returns_output_name() {
        let name = VideoConverter::default()
            .convert("clip.mov", "mp4", &mut io::sink())
            .unwrap();
        assert_eq!(name, "clip.mov.mp4");
    }

    #[test]
    fn test_transcript() {
        assert_eq!(
            capture(run, ".").unwrap(),
            "Detecting codec for: movie.mp4\n\
             Decoding movie.mp4 using codec H.264\n\
             Encoding raw data to avi\n\
             Saving output to: movie.mp4.avi\n\
             Done ✅\n"
        );
    }
}
