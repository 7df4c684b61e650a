//! # `vocab.txt` Vocabulary IO
//!
//! One piece per line; the id of a piece is its zero-based line number.
//! Blank lines hold no piece, but still consume an id.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    errors::{PMResult, PiecemealError},
    types::TokenType,
    vocab::{PieceMapVocab, map_vocab::token_for_index},
};

/// Load a [`PieceMapVocab`] from a `vocab.txt` file.
///
/// # Arguments
/// * `path` - the path to the vocabulary file.
pub fn load_vocab_txt_path<T, P>(path: P) -> PMResult<PieceMapVocab<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let vocab = read_vocab_txt(reader)?;
    log::debug!("loaded {} pieces from {}", vocab.len(), path.display());
    Ok(vocab)
}

/// Read a [`PieceMapVocab`] from a `vocab.txt` [`BufRead`] stream.
///
/// # Arguments
/// * `reader` - the line reader.
pub fn read_vocab_txt<T, R>(reader: R) -> PMResult<PieceMapVocab<T>>
where
    T: TokenType,
    R: BufRead,
{
    let mut vocab = PieceMapVocab::default();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let piece = line.strip_suffix('\r').unwrap_or(&line);
        if piece.is_empty() {
            continue;
        }
        vocab.try_add_piece(piece, token_for_index(idx)?)?;
    }
    Ok(vocab)
}

/// Save a [`PieceMapVocab`] to a `vocab.txt` file.
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `path` - the path to save the vocabulary to.
pub fn save_vocab_txt_path<T: TokenType, P: AsRef<Path>>(
    vocab: &PieceMapVocab<T>,
    path: P,
) -> PMResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    write_vocab_txt(vocab, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Save a [`PieceMapVocab`] to a [`Write`] writer.
///
/// Ids without a piece are written as blank lines.
///
/// A piece containing a line break cannot be represented, and is an
/// [`PiecemealError::InvalidArgument`]. An empty piece, or two pieces sharing
/// one id, would not survive a reload, and are a [`PiecemealError::VocabConflict`].
pub fn write_vocab_txt<T, W>(
    vocab: &PieceMapVocab<T>,
    writer: &mut W,
) -> PMResult<()>
where
    T: TokenType,
    W: Write,
{
    let mut next_line: usize = 0;
    let mut previous: Option<&str> = None;
    for (piece, token) in vocab.sorted_pieces() {
        if piece.contains(['\n', '\r']) {
            return Err(PiecemealError::InvalidArgument(format!(
                "piece {piece:?} contains a line break"
            )));
        }
        if piece.is_empty() {
            return Err(PiecemealError::VocabConflict(format!(
                "empty piece (id {token}) would be written as a blank line"
            )));
        }
        let line = token.to_usize().ok_or_else(|| {
            PiecemealError::VocabConflict(format!("token {token} is not a line number"))
        })?;
        if line < next_line {
            return Err(PiecemealError::VocabConflict(format!(
                "pieces {:?} and {piece:?} share id {token}",
                previous.unwrap_or_default()
            )));
        }
        previous = Some(piece);
        while next_line < line {
            writeln!(writer)?;
            next_line += 1;
        }
        writeln!(writer, "{piece}")?;
        next_line += 1;
    }
    Ok(())
}
