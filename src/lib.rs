//! Text on a 4-digit, 7-segment LED display through one shared output port.
//!
//! The display's 8 segment lines are shared by all 4 digits, so digits are
//! lit one at a time, fast enough that they all look lit. The pieces:
//!
//! - [`Glyph`]: character to segment pattern.
//! - [`Frame`]: any text to exactly 4 cells, decimal points folded in.
//! - [`Multiplexer`]: one digit per [`tick`](Multiplexer::tick) through an [`OutputPort`].
//! - [`ShiftRegister`], [`OutputArray`]: ports over SN74HC595 chains or plain GPIO.
//! - [`led4`]: the embassy task and the [`Led4`](led4::Led4) handle.
#![no_std]

mod error;
mod frame;
mod glyph;
pub mod led4;
mod multiplexer;
mod output_array;
pub mod output_port;
mod shift_register;
mod text_source;

// Re-export commonly used items
pub use error::{Error, MissingCollaborator, Result};
pub use frame::{DisplayCell, Frame};
pub use glyph::Glyph;
pub use multiplexer::{DEFAULT_TICK_PERIOD, DigitCursor, MuxConfig, Multiplexer, Tick};
pub use output_array::OutputArray;
pub use output_port::{CELL_COUNT, OutputPort, PORT_BIT_COUNT, SEGMENT_COUNT};
pub use shift_register::ShiftRegister;
pub use text_source::{SharedText, TEXT_CAPACITY, TextSource};
