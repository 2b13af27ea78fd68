//! End-to-end sort pipeline: read, decode, tokenize, sort, join, encode,
//! write.
//!
//! The pipeline is generic over [`Filesystem`] so tests can run it against
//! an in-memory filesystem with the exact production code path.

use std::io::{Read, Write};

use tracing::debug;

use crate::codec;
use crate::config::SortConfig;
use crate::error::{SortError, SortResult};
use crate::filesystem::Filesystem;
use crate::natural;
use crate::tokenize;

/// Pipeline executing one sort run against a filesystem.
pub struct SortPipeline<F: Filesystem> {
    config: SortConfig,
    fs: F,
}

impl<F: Filesystem> SortPipeline<F> {
    pub fn new(config: SortConfig, fs: F) -> Self {
        Self { config, fs }
    }

    /// Run the pipeline once.
    pub fn run(&self) -> SortResult<()> {
        debug!(
            file = ?self.config.input_path(),
            gzip = self.config.input_gzip,
            base64 = self.config.input_base64,
            "input"
        );
        debug!(
            file = ?self.config.output_path(),
            gzip = self.config.output_gzip,
            base64 = self.config.output_base64,
            "output"
        );

        let raw = self.read_input()?;
        let decoded = codec::decode(&raw, self.config.input_gzip, self.config.input_base64)?;
        let text = String::from_utf8(decoded)?;

        let mut records = tokenize::split(&text, self.config.separator);
        debug!(records = records.len(), "tokenized input");

        natural::sort(&mut records);

        let joined = tokenize::join(&records, self.config.separator);
        let payload =
            codec::encode(joined.as_bytes(), self.config.output_gzip, self.config.output_base64)?;
        self.write_output(&payload)
    }

    /// Resolve the input source: an existing input file wins, a named but
    /// missing file is an error, and the inline value is the fallback.
    fn read_input(&self) -> SortResult<Vec<u8>> {
        if let Some(path) = self.config.input_path() {
            if !self.fs.exists(path) {
                return Err(SortError::file_not_found(path));
            }
            let mut file = self.fs.open(path)?;
            let mut raw = Vec::new();
            file.read_to_end(&mut raw)?;
            return Ok(raw);
        }

        match self.config.inline_input() {
            Some(input) => Ok(input.as_bytes().to_vec()),
            None => Err(SortError::MissingInput),
        }
    }

    fn write_output(&self, payload: &[u8]) -> SortResult<()> {
        match self.config.output_path() {
            Some(path) => {
                let mut file = self.fs.create(path)?;
                file.write_all(payload)?;
                file.flush()?;
            }
            None => {
                let stdout = std::io::stdout();
                let mut out = stdout.lock();
                out.write_all(payload)?;
                out.flush()?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec;
    use crate::filesystem::VirtualFilesystem;

    fn read_file(fsys: &VirtualFilesystem, path: &str) -> Vec<u8> {
        let mut file = fsys.open(path).expect("open failed");
        let mut content = Vec::new();
        file.read_to_end(&mut content).expect("read failed");
        content
    }

    fn run(config: SortConfig, fsys: &VirtualFilesystem) -> SortResult<()> {
        SortPipeline::new(config, fsys.clone()).run()
    }

    #[test]
    fn test_inline_input_to_file() {
        let fsys = VirtualFilesystem::new();
        let config = SortConfig::new()
            .with_input("001,2,30,22,0,00,3,1")
            .with_output_file("out");

        run(config, &fsys).expect("pipeline failed");
        assert_eq!(read_file(&fsys, "out"), b"0,00,1,001,2,3,22,30");
    }

    #[test]
    fn test_input_file_wins_over_inline() {
        let fsys = VirtualFilesystem::new();
        let mut file = fsys.create("in").expect("create failed");
        file.write_all(b"z11,z2").expect("write failed");

        let config = SortConfig::new()
            .with_input("b,a")
            .with_input_file("in")
            .with_output_file("out");

        run(config, &fsys).expect("pipeline failed");
        assert_eq!(read_file(&fsys, "out"), b"z2,z11");
    }

    #[test]
    fn test_missing_input_file() {
        let fsys = VirtualFilesystem::new();
        let config = SortConfig::new()
            .with_input_file("absent")
            .with_output_file("out");

        let err = run(config, &fsys).expect_err("expected failure");
        assert!(matches!(err, SortError::FileNotFound { .. }));
    }

    #[test]
    fn test_missing_input_entirely() {
        let fsys = VirtualFilesystem::new();
        let config = SortConfig::new().with_output_file("out");

        let err = run(config, &fsys).expect_err("expected failure");
        assert!(matches!(err, SortError::MissingInput));
    }

    #[test]
    fn test_trailing_newline_in_file() {
        let fsys = VirtualFilesystem::new();
        let mut file = fsys.create("in").expect("create failed");
        file.write_all(b"b,a,2,1\n").expect("write failed");

        let config = SortConfig::new().with_input_file("in").with_output_file("out");

        run(config, &fsys).expect("pipeline failed");
        assert_eq!(read_file(&fsys, "out"), b"1,2,a,b");
    }

    #[test]
    fn test_whitespace_separator() {
        let fsys = VirtualFilesystem::new();
        let config = SortConfig::new()
            .with_separator(' ')
            .with_input("b11 a2   c")
            .with_output_file("out");

        run(config, &fsys).expect("pipeline failed");
        assert_eq!(read_file(&fsys, "out"), b"a2 b11 c");
    }

    #[test]
    fn test_encoded_input_and_output() {
        for (gzip, base64) in [(true, false), (false, true), (true, true)] {
            let fsys = VirtualFilesystem::new();
            let encoded = codec::encode(b"z11,z2,a", gzip, base64).expect("encode failed");
            let mut file = fsys.create("in").expect("create failed");
            file.write_all(&encoded).expect("write failed");

            let config = SortConfig::new()
                .with_input_file("in")
                .with_input_gzip(gzip)
                .with_input_base64(base64)
                .with_output_file("out")
                .with_output_gzip(gzip)
                .with_output_base64(base64);

            run(config, &fsys).expect("pipeline failed");

            let out = read_file(&fsys, "out");
            let decoded = codec::decode(&out, gzip, base64).expect("decode failed");
            assert_eq!(decoded, b"z2,z11,a", "gzip={gzip} base64={base64}");
        }
    }

    #[test]
    fn test_invalid_utf8_input() {
        let fsys = VirtualFilesystem::new();
        let mut file = fsys.create("in").expect("create failed");
        file.write_all(&[0xff, 0xfe, b'a']).expect("write failed");

        let config = SortConfig::new().with_input_file("in").with_output_file("out");

        let err = run(config, &fsys).expect_err("expected failure");
        assert!(matches!(err, SortError::Utf8(_)));
    }
}
