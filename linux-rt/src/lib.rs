//! Minimal Linux runtime
//!
//! Provides the process entry point. The program's `#[entry]` function is called with nothing set
//! up besides an aligned stack and must end the process itself.

#![deny(missing_docs)]
#![deny(rust_2018_compatibility)]
#![deny(rust_2018_idioms)]
#![no_std]

mod symbols;

pub use linux_rt_macros::entry;

#[cfg(not(target_arch = "x86_64"))]
compile_error!("Only x86_64 is currently supported");

#[no_mangle]
unsafe extern "C" fn start(_stack_top: *const usize) -> ! {
    extern "Rust" {
        fn main() -> !;
    }

    main()
}
