//! Square roots modulo a prime, with the Legendre symbol, modular inverses and the byte codec
//! needed to decompress elliptic-curve points.

pub mod bytes;
pub mod curve;
mod error;
pub mod mod_sqrt;
pub mod nt;
pub mod params;

pub use bytes::{bytes_to_int, int_to_bytes};
pub use curve::CurveParams;
pub use error::Error;
pub use mod_sqrt::{sqrt_mod_prime, sqrt_mod_prime_batch, sqrt_mod_prime_with};
pub use nt::{inverse, legendre};
pub use params::Params;
