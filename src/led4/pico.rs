use embassy_executor::Spawner;
use embassy_rp::gpio::Output;

use super::{Led4, Led4Static, run};
use crate::multiplexer::{MuxConfig, Multiplexer};
use crate::{Result, ShiftRegister};

/// The ES32A08 wiring: two chained SN74HC595s on three RP GPIO pins.
pub type Es32a08Port = ShiftRegister<Output<'static>, Output<'static>, Output<'static>, 2>;

impl Led4<'static> {
    /// Creates the display device and spawns its background task.
    ///
    /// # Errors
    ///
    /// Returns an error if the task cannot be spawned.
    ///
    /// # Example
    ///
    /// ```no_run
    /// #![no_std]
    /// #![no_main]
    ///
    /// use embassy_rp::gpio::{Level, Output};
    /// use led4_mux::{Error, MuxConfig, ShiftRegister, led4::{Led4, Led4Static}};
    /// # use embassy_executor::Spawner;
    /// # use core::panic::PanicInfo;
    /// # #[panic_handler]
    /// # fn panic(_: &PanicInfo) -> ! { loop {} }
    ///
    /// async fn example(p: embassy_rp::Peripherals, spawner: Spawner) -> Result<(), Error> {
    ///     // Two chained SN74HC595s: segments A-G + DP, then the 4 digit selects
    ///     let shift_register = ShiftRegister::new(
    ///         Output::new(p.PIN_2, Level::Low), // data
    ///         Output::new(p.PIN_3, Level::Low), // clock
    ///         Output::new(p.PIN_4, Level::Low), // latch
    ///     );
    ///
    ///     static LED4_STATIC: Led4Static = Led4::new_static();
    ///     let display = Led4::new(&LED4_STATIC, shift_register, MuxConfig::default(), spawner)?;
    ///
    ///     display.write_text("12.34");
    ///     Ok(())
    /// }
    /// ```
    #[must_use = "Must be used to manage the spawned task"]
    pub fn new(
        led4_static: &'static Led4Static,
        shift_register: Es32a08Port,
        config: MuxConfig,
        spawner: Spawner,
    ) -> Result<Self> {
        let multiplexer = Multiplexer::with_collaborators(led4_static, shift_register);
        spawner.spawn(device_loop(multiplexer, config))?;
        Ok(Self(led4_static))
    }
}

#[embassy_executor::task]
async fn device_loop(
    multiplexer: Multiplexer<&'static Led4Static, Es32a08Port>,
    config: MuxConfig,
) -> ! {
    let mut multiplexer = multiplexer;
    run(&mut multiplexer, config).await
}
