//! # Vocabulary Types

use crate::alloc::string::String;
use crate::types::PMHashMap;

/// `{ String -> T }` map.
///
/// Keys are complete pieces, including any suffix indicator
/// (`"##ing"`, not `"ing"`).
///
/// ## Style Hints
/// Instance names should prefer `piece_map`, or `piece_token_map`.
pub type PieceTokenMap<T> = PMHashMap<String, T>;
