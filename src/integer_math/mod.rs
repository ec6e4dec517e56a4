// src/integer_math/mod.rs

pub mod binpow;
pub mod gcd;

pub use binpow::{binpow, binpow_big, binpow_mod, mod_inverse};
pub use gcd::{checked_lcm, gcd, lcm, Gcd};
