//! Writes `hi!\n` to the standard output and exits with status 0
//!
//! No libc, no `std`: one `write` and one `exit` system call.

#![deny(rust_2018_compatibility)]
#![deny(rust_2018_idioms)]
#![no_main]
#![no_std]

use linux_io::Stdout;
#[cfg(not(feature = "verbose-panic"))]
use panic_exit as _;
#[cfg(feature = "verbose-panic")]
use panic_stderr as _;

/// `b"hi!\n"` packed as a little endian 32-bit word
const HI: u32 = 0x0a21_6968;

#[linux_rt::entry]
fn main() -> ! {
    let msg = HI.to_le_bytes();

    // NOTE the result is ignored; a failed or short write still exits with 0
    let _ = Stdout.write(&msg);

    unsafe { linux_sys::exit(0) }
}
