//! Linux I/O

#![deny(missing_docs)]
#![deny(rust_2018_compatibility)]
#![deny(rust_2018_idioms)]
#![no_std]

use cty::c_uint;
use linux_sys::Error;

/// *Unbuffered* standard output singleton
pub struct Stdout;

impl Stdout {
    /// File descriptor of the standard output
    pub const FILENO: c_uint = 1;

    /// Issues a single `write` system call, returning how many bytes were written.
    pub fn write(&self, buf: &[u8]) -> Result<usize, Error> {
        write(Self::FILENO, buf)
    }
}

/// *Unbuffered* standard error singleton
pub struct Stderr;

impl Stderr {
    /// File descriptor of the standard error
    pub const FILENO: c_uint = 2;

    /// Issues a single `write` system call, returning how many bytes were written.
    pub fn write(&self, buf: &[u8]) -> Result<usize, Error> {
        write(Self::FILENO, buf)
    }
}

fn write(fd: c_uint, buf: &[u8]) -> Result<usize, Error> {
    // NOTE the standard streams are owned by the process for its whole lifetime
    unsafe { linux_sys::write(fd, buf) }
}
