mod tokenize;

/// Subcommands for piecemeal
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Tokenize whitespace-separated words, one batch row per line.
    Tokenize(tokenize::TokenizeArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Tokenize(cmd) => cmd.run(),
        }
    }
}
