//! Musical key arithmetic and chord transposition
//!
//! Pitch is handled in equal temperament: twelve pitch classes, C = 0 through
//! B = 11. Chord symbols are never validated; only the leading root note of the
//! chord (and of the bass note after a `/`) is rewritten, everything else is
//! carried over verbatim.
//!
//! Transposition never fails: a key that cannot be read degrades to the
//! identity transform.
//!
//! ## Modules
//!
//! - `pitch` - [PitchClass], root-note reading and sharp/flat spelling
//! - `key` - [Key], [semitone_interval] and [prefer_sharps]
//! - `chord` - [transpose_chord] for a single symbol
//! - `transpose` - [Transposition], applied to whole lines and documents

pub mod chord;
pub mod key;
pub mod pitch;
pub mod transpose;

pub use chord::transpose_chord;
pub use key::{prefer_sharps, semitone_interval, Key};
pub use pitch::{parse_root, respell, Accidentals, PitchClass};
pub use transpose::{transpose_document, Transposition};
