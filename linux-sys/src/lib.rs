//! Linux system call interface (x86_64)
//!
//! Only the calls needed to put bytes on a file descriptor and to leave the process are exposed.

#![deny(missing_docs)]
#![deny(rust_2018_compatibility)]
#![deny(rust_2018_idioms)]
#![no_std]

#[macro_use]
mod macros;

use core::hint;

pub use cty;
use cty::{c_char, c_int, c_uint, size_t};
use sc::syscall;

// System calls ordered by their (x86_64) "number"

// NR = 1
/// Write to a file descriptor
///
/// Returns the number of bytes written, which may be less than `buf.len()`.
///
/// See `man 2 write` for more details
///
/// Source: https://github.com/torvalds/linux/blob/v5.0/fs/read_write.c#L607
///
/// C signature: `ssize_t write(c_uint fd, const char *buf, size_t count);`
///
/// # Safety
///
/// `fd` is not checked; writing to a descriptor the caller doesn't own can corrupt whatever else
/// is using it.
pub unsafe fn write(fd: c_uint, buf: &[u8]) -> Result<usize, Error> {
    let count: size_t = buf.len();
    let buf = buf.as_ptr() as *const c_char;
    check!(syscall!(WRITE, fd, buf, count)).map(|ret| ret as usize)
}

// NR = 60
/// Terminate the calling thread
///
/// See `man 2 exit` for more details
///
/// Source: https://github.com/torvalds/linux/blob/v5.0/kernel/exit.c#946
///
/// C signature: `void exit(int error_code)`
///
/// # Safety
///
/// Other threads keep running; in a single threaded program this ends the process.
pub unsafe fn exit(error_code: u8) -> ! {
    syscall!(EXIT, error_code as c_int);

    hint::unreachable_unchecked()
}

// NR = 231
/// Exit all threads in a process
///
/// See `man 2 exit_group` for more details
///
/// Source: https://github.com/torvalds/linux/blob/v5.0/kernel/exit.c#988
///
/// C signature: `int exit_group(int error_code)`
pub fn exit_group(error_code: u8) -> ! {
    unsafe {
        syscall!(EXIT_GROUP, error_code as c_int);

        hint::unreachable_unchecked()
    }
}

/// Thin wrapper around Linux error codes
#[derive(Clone, Copy, PartialEq)]
pub struct Error {
    code: u8,
}

impl Error {
    /// Returns the error code as an integer
    pub fn code(self) -> u8 {
        self.code
    }
}
