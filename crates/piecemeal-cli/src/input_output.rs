use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::PathBuf,
};

/// `None` and "-" both select standard io.
fn file_path(path: &Option<PathBuf>) -> Option<&PathBuf> {
    path.as_ref().filter(|p| p.as_os_str() != "-")
}

/// Input argument group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Input file of words, one batch row per line; "-" (or nothing) reads stdin.
    #[arg(long)]
    pub input: Option<PathBuf>,
}

impl InputArgs {
    /// Open a line reader for the input.
    pub fn open_reader(&self) -> std::io::Result<Box<dyn BufRead>> {
        Ok(match file_path(&self.input) {
            Some(path) => {
                log::debug!("reading words from {}", path.display());
                Box::new(BufReader::new(File::open(path)?))
            }
            None => Box::new(BufReader::new(std::io::stdin().lock())),
        })
    }
}

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Output file; "-" (or nothing) writes stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl OutputArgs {
    /// Open a buffered writer for the output.
    pub fn open_writer(&self) -> std::io::Result<Box<dyn Write>> {
        Ok(match file_path(&self.output) {
            Some(path) => Box::new(BufWriter::new(File::create(path)?)),
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}
