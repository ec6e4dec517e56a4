// src/io/set_io.rs

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use log::{debug, info};
use crate::core::{KitError, Result};
use crate::io::scanner::Scanner;

/// Where a [`ProblemIo`] reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IoSource {
    Console,
    Files { input: PathBuf, output: PathBuf },
}

/// Buffered input/output pair for one problem run.
///
/// Output goes through a `BufWriter` and is flushed by [`ProblemIo::finish`],
/// or on drop if `finish` is never called.
pub struct ProblemIo {
    scanner: Scanner<Box<dyn BufRead>>,
    output: Box<dyn Write>,
    source: IoSource,
}

impl ProblemIo {
    pub fn new(input: Box<dyn BufRead>, output: Box<dyn Write>, source: IoSource) -> Self {
        ProblemIo {
            scanner: Scanner::new(input),
            output,
            source,
        }
    }

    pub fn console() -> Self {
        let input: Box<dyn BufRead> = Box::new(io::stdin().lock());
        let output: Box<dyn Write> = Box::new(BufWriter::new(io::stdout().lock()));
        Self::new(input, output, IoSource::Console)
    }

    pub fn source(&self) -> &IoSource {
        &self.source
    }

    pub fn scanner(&mut self) -> &mut Scanner<Box<dyn BufRead>> {
        &mut self.scanner
    }

    /// Shorthand for `scanner().next()`.
    pub fn next<T: FromStr>(&mut self) -> Result<T> {
        self.scanner.next()
    }

    pub fn finish(mut self) -> Result<()> {
        self.output.flush()?;
        Ok(())
    }
}

impl Write for ProblemIo {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.output.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }
}

/// USACO convention: with a non-empty `name`, read `<name>.in` and write `<name>.out`
/// in the current directory. An empty name keeps standard input and output.
pub fn set_io(name: &str) -> Result<ProblemIo> {
    set_io_in(Path::new("."), name)
}

/// [`set_io`] with the problem files resolved relative to `dir`.
///
/// A missing input file is reported as [`KitError::Io`] rather than read as empty input.
pub fn set_io_in<P: AsRef<Path>>(dir: P, name: &str) -> Result<ProblemIo> {
    if name.is_empty() {
        debug!("No problem name set, using standard input/output");
        return Ok(ProblemIo::console());
    }

    let input_path = dir.as_ref().join(format!("{}.in", name));
    let output_path = dir.as_ref().join(format!("{}.out", name));

    let input_file = File::open(&input_path).map_err(|source| KitError::Io {
        path: input_path.clone(),
        source,
    })?;
    let output_file = File::create(&output_path).map_err(|source| KitError::Io {
        path: output_path.clone(),
        source,
    })?;

    info!("Reading {} and writing {}", input_path.display(), output_path.display());

    let input: Box<dyn BufRead> = Box::new(BufReader::new(input_file));
    let output: Box<dyn Write> = Box::new(BufWriter::new(output_file));
    Ok(ProblemIo::new(
        input,
        output,
        IoSource::Files {
            input: input_path,
            output: output_path,
        },
    ))
}
