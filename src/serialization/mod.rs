//! Serialized board form: the plain data exchanged with agents and adapters.
//!
//! A board crosses the boundary as nested exponent arrays plus a score
//! (`SerializedBoard`). Decoding validates shape and values, so a malformed
//! payload fails fast instead of producing a corrupt `Board`. JSON text is
//! provided on top via serde.

mod board_form;

pub use board_form::{
    SerializedBoard,
    MalformedBoardError,
    SerializationError,
    to_json,
    from_json,
};
