//! The digit-cycling scheduler.
//!
//! Each [`Multiplexer::tick`] lights exactly one digit. Called at a steady
//! cadence (see [`MuxConfig`]) the four digits appear lit together.

use embassy_time::Duration;

#[cfg(feature = "defmt")]
use defmt::{error, warn};

use crate::output_port::{CELL_COUNT_U8, OutputPort, clear_port, segment_levels, select_index};
use crate::{DisplayCell, Frame, MissingCollaborator, Result, TextSource};

/// Time between ticks; four ticks refresh the whole display (10 Hz).
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(25);

/// Settings for the device loop.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MuxConfig {
    /// Time between ticks.
    pub tick_period: Duration,
}

impl MuxConfig {
    #[must_use]
    pub const fn new(tick_period: Duration) -> Self {
        Self { tick_period }
    }

    #[must_use]
    pub const fn with_tick_period(self, tick_period: Duration) -> Self {
        Self { tick_period }
    }
}

impl Default for MuxConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_PERIOD)
    }
}

/// The digit the next tick will light, 0 through 3.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DigitCursor(u8);

impl DigitCursor {
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    #[must_use]
    pub const fn digit(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Moves to the next digit, wrapping from the last back to the first.
    pub const fn advance(&mut self) {
        let next = self.0.wrapping_add(1);
        self.0 = if next >= CELL_COUNT_U8 { 0 } else { next };
    }
}

/// What a tick did.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// `digit` was selected and shows `cell`.
    Rendered { digit: u8, cell: DisplayCell },
    /// Nothing was written; the cursor did not move.
    Skipped(MissingCollaborator),
}

/// Drives a 4-digit display through a shared [`OutputPort`].
///
/// Owns the port and the [`DigitCursor`], the only state kept between ticks.
/// The frame is rebuilt from the [`TextSource`] on every tick.
///
/// ```
/// use led4_mux::{Multiplexer, OutputPort, Tick};
///
/// struct Port([bool; 12]);
///
/// impl OutputPort for Port {
///     type Error = ();
///     fn set_bit(&mut self, index: u8, value: bool) -> Result<(), ()> {
///         *self.0.get_mut(usize::from(index)).ok_or(())? = value;
///         Ok(())
///     }
///     fn commit(&mut self) -> Result<(), ()> {
///         Ok(())
///     }
/// }
///
/// let mut mux = Multiplexer::with_collaborators("rUSt", Port([false; 12]));
/// assert!(matches!(mux.tick(), Ok(Tick::Rendered { digit: 0, .. })));
/// assert_eq!(mux.cursor().digit(), 1);
/// ```
pub struct Multiplexer<T, P> {
    text_source: Option<T>,
    output_port: Option<P>,
    cursor: DigitCursor,
    missing_reported: bool,
}

impl<T: TextSource, P: OutputPort> Multiplexer<T, P> {
    /// A multiplexer with nothing bound yet; ticks are skipped until both
    /// collaborators are set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text_source: None,
            output_port: None,
            cursor: DigitCursor::new(),
            missing_reported: false,
        }
    }

    #[must_use]
    pub const fn with_collaborators(text_source: T, output_port: P) -> Self {
        Self {
            text_source: Some(text_source),
            output_port: Some(output_port),
            cursor: DigitCursor::new(),
            missing_reported: false,
        }
    }

    /// Binds the message source, replacing any previous one.
    pub fn set_text_source(&mut self, text_source: T) {
        self.text_source = Some(text_source);
        self.missing_reported = false;
    }

    /// Binds the output port, replacing any previous one.
    pub fn set_output_port(&mut self, output_port: P) {
        self.output_port = Some(output_port);
        self.missing_reported = false;
    }

    #[must_use]
    pub const fn cursor(&self) -> DigitCursor {
        self.cursor
    }

    #[must_use]
    pub const fn output_port(&self) -> Option<&P> {
        self.output_port.as_ref()
    }

    pub const fn output_port_mut(&mut self) -> Option<&mut P> {
        self.output_port.as_mut()
    }

    /// Which collaborators are still unbound, if any.
    #[must_use]
    pub const fn missing(&self) -> Option<MissingCollaborator> {
        MissingCollaborator::check(self.text_source.is_some(), self.output_port.is_some())
    }

    /// Checks that both collaborators are bound before the first tick.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCollaborator`](crate::Error::MissingCollaborator)
    /// naming what is unbound.
    pub fn setup(&mut self) -> Result<()> {
        match self.missing() {
            None => Ok(()),
            Some(missing) => {
                #[cfg(feature = "defmt")]
                error!("Both text source and output port must be set; missing {}", missing);
                self.missing_reported = true;
                Err(missing.into())
            }
        }
    }

    /// Lights the digit under the cursor and advances the cursor.
    ///
    /// The port is cleared and committed before the next select line is
    /// raised, so two digits are never selected at once. If a collaborator
    /// is unbound nothing is written and the cursor stays put.
    ///
    /// # Errors
    ///
    /// Returns the port's error if any write or commit fails. The cursor
    /// does not advance; the next tick starts over from a clear port.
    pub fn tick(&mut self) -> Result<Tick, P::Error> {
        let (text_source, output_port) = match (&self.text_source, &mut self.output_port) {
            (Some(text_source), Some(output_port)) => (text_source, output_port),
            (text_source, output_port) => {
                let missing = MissingCollaborator::check(text_source.is_some(), output_port.is_some())
                    .unwrap_or(MissingCollaborator::Both);
                if !self.missing_reported {
                    #[cfg(feature = "defmt")]
                    warn!("Display idle, missing {}", missing);
                    self.missing_reported = true;
                }
                return Ok(Tick::Skipped(missing));
            }
        };

        clear_port(output_port)?;

        let frame = text_source.read(Frame::from_text);
        let digit = self.cursor.digit();
        let cell = frame.cell(self.cursor.index()).unwrap_or(DisplayCell::BLANK);

        output_port.set_bit(select_index(digit), true)?;
        for (index, level) in (0..).zip(segment_levels(cell.bits())) {
            output_port.set_bit(index, level)?;
        }
        output_port.commit()?;

        self.cursor.advance();
        Ok(Tick::Rendered { digit, cell })
    }

    /// Turns every segment and select line off.
    ///
    /// Does nothing if no port is bound.
    ///
    /// # Errors
    ///
    /// Returns the port's error if any write or the commit fails.
    pub fn blank(&mut self) -> Result<(), P::Error> {
        match &mut self.output_port {
            Some(output_port) => clear_port(output_port),
            None => Ok(()),
        }
    }

    /// Gives back the bound collaborators.
    pub fn into_parts(self) -> (Option<T>, Option<P>) {
        (self.text_source, self.output_port)
    }
}

impl<T: TextSource, P: OutputPort> Default for Multiplexer<T, P> {
    fn default() -> Self {
        Self::new()
    }
}
