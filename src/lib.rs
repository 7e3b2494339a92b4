// Vial keycode registry and codec
// Symbolic keycode ids ↔ raw firmware values for Vial/QMK keyboards

pub mod catalog;
pub mod codec;
pub mod error;
pub mod expression;
pub mod generator;
pub mod keycode;
pub mod protocol;
pub mod registry;

pub use catalog::KeycodeGroup;
pub use codec::KeycodeValue;
pub use error::{ExpressionError, KeycodeError, LoadError};
pub use expression::{DefaultExpressionParser, ExpressionParser, SymbolTable};
pub use generator::{Capabilities, CustomKeycode, MidiLevel};
pub use keycode::{CompositeId, Keycode, KeycodeDef};
pub use protocol::{LayerAction, Protocol, ProtocolTable};
pub use registry::{Generation, GenerationBuilder, KeycodeRegistry};
