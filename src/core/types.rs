// src/core/types.rs

/// 64-bit integer shorthand.
pub type Ll = i64;

pub type Pii = (i32, i32);
pub type Pll = (i64, i64);
pub type Vi = Vec<i32>;
pub type Vll = Vec<i64>;
pub type Vpii = Vec<Pii>;
pub type Vs = Vec<String>;

/// Large sentinel for 32-bit answers. Leaves room for `INF + INF` without overflow.
pub const INF: i32 = 1_000_000_000;

/// Large sentinel for 64-bit answers.
pub const LINF: i64 = 1_000_000_000_000_000_000;

/// Default modulus for modular arithmetic (1e9 + 7, prime).
pub const MOD: i64 = 1_000_000_007;

/// Row offsets for the four grid directions: right, left, down, up.
pub const DX: [i32; 4] = [0, 0, 1, -1];

/// Column offsets for the four grid directions: right, left, down, up.
pub const DY: [i32; 4] = [1, -1, 0, 0];
