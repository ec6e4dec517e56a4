// src/io/mod.rs

pub mod scanner;
pub mod set_io;

pub use scanner::Scanner;
pub use set_io::{set_io, set_io_in, IoSource, ProblemIo};

/// Logs `expr = value` at debug level. Goes to stderr through the logger, never
/// into the judged output, so it can stay in a submission.
#[macro_export]
macro_rules! watch {
    ($x:expr) => {
        $crate::log::debug!("{} = {:?}", stringify!($x), $x)
    };
}
