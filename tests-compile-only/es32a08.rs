//! Compile-only firmware for an ES32A08-style board: two chained SN74HC595s
//! driving a 4-digit display, showing a counter with one decimal.
//!
//! Run via: `cargo xtask check-all` (compiles this for thumbv6m-none-eabi)

#![no_std]
#![no_main]

use core::fmt::Write;

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_time::Timer;
use heapless::String;
use led4_mux::led4::{Led4, Led4Static};
use led4_mux::{MuxConfig, Result, ShiftRegister};
use panic_probe as _;

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    core::panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<core::convert::Infallible> {
    let p = embassy_rp::init(Default::default());

    let shift_register = ShiftRegister::new(
        Output::new(p.PIN_2, Level::Low), // data
        Output::new(p.PIN_3, Level::Low), // clock
        Output::new(p.PIN_4, Level::Low), // latch
    );

    static LED4_STATIC: Led4Static = Led4::new_static();
    let display = Led4::new(&LED4_STATIC, shift_register, MuxConfig::default(), spawner)?;

    let mut tenths: u16 = 0;
    loop {
        let mut text: String<8> = String::new();
        // Four digits plus one dot always fit
        write!(text, "{}.{}", tenths / 10, tenths % 10).ok();
        info!("showing {}", text.as_str());
        display.write_text(&text);
        tenths = if tenths >= 9999 { 0 } else { tenths + 1 };
        Timer::after_millis(100).await;
    }
}
