use log::debug;
use rug::{ops::Pow, Complete, Integer};

use crate::{
    bytes::{bytes_to_int, field_width, int_to_bytes},
    mod_sqrt::sqrt_mod_prime,
    nt::reduce,
    Error,
};

const PREFIX_EVEN: u8 = 0x02;
const PREFIX_ODD: u8 = 0x03;

// Short Weierstrass curve y^2 = x^3 + a*x + b over the prime field of order p. The parameters are
// trusted; nothing here checks that p is prime or that the curve is non-singular.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveParams {
    pub name: &'static str,
    pub p: Integer,
    pub a: Integer,
    pub b: Integer,
    pub byte_len: usize,
}

fn hex_const(digits: &str) -> Integer {
    Integer::from_str_radix(digits, 16).expect("curve constant is valid hex")
}

fn pow2(e: u32) -> Integer {
    Integer::from(2).pow(e)
}

impl CurveParams {
    pub fn new(name: &'static str, p: Integer, a: Integer, b: Integer) -> CurveParams {
        let a = reduce(&a, &p);
        let b = reduce(&b, &p);
        let byte_len = field_width(&p);
        CurveParams {
            name,
            p,
            a,
            b,
            byte_len,
        }
    }

    // p = 3 mod 4, square roots take the closed-form path.
    pub fn secp256k1() -> CurveParams {
        let p = pow2(256) - pow2(32) - 977u32;
        CurveParams::new("secp256k1", p, Integer::new(), Integer::from(7))
    }

    pub fn p256() -> CurveParams {
        let p = pow2(256) - pow2(224) + pow2(192) + pow2(96) - 1u32;
        CurveParams::new(
            "P-256",
            p,
            Integer::from(-3),
            hex_const("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b"),
        )
    }

    // p - 1 is divisible by 2^96, so decompression runs the full Tonelli-Shanks loop.
    pub fn p224() -> CurveParams {
        let p = pow2(224) - pow2(96) + 1u32;
        CurveParams::new(
            "P-224",
            p,
            Integer::from(-3),
            hex_const("b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4"),
        )
    }

    pub fn by_name(name: &str) -> Option<CurveParams> {
        match name.to_ascii_lowercase().as_str() {
            "secp256k1" => Some(CurveParams::secp256k1()),
            "p-256" | "p256" | "secp256r1" => Some(CurveParams::p256()),
            "p-224" | "p224" | "secp224r1" => Some(CurveParams::p224()),
            _ => None,
        }
    }

    pub fn rhs(&self, x: &Integer) -> Integer {
        let mut v = (x * x).complete();
        v += &self.a;
        v *= x;
        v += &self.b;
        reduce(&v, &self.p)
    }

    pub fn is_on_curve(&self, x: &Integer, y: &Integer) -> bool {
        reduce(&(y * y).complete(), &self.p) == self.rhs(x)
    }

    // Parity prefix byte followed by x in big-endian.
    pub fn compress(&self, x: &Integer, y: &Integer) -> Result<Vec<u8>, Error> {
        let prefix = if y.is_odd() { PREFIX_ODD } else { PREFIX_EVEN };
        let mut encoded = Vec::with_capacity(1 + self.byte_len);
        encoded.push(prefix);
        encoded.extend(int_to_bytes(x, self.byte_len)?);
        Ok(encoded)
    }

    // Picks the root whose parity matches the prefix.
    pub fn decompress(&self, encoded: &[u8]) -> Result<(Integer, Integer), Error> {
        let expected = 1 + self.byte_len;
        if encoded.len() != expected {
            return Err(Error::InvalidEncoding {
                length: encoded.len(),
                expected,
            });
        }

        let want_odd = match encoded[0] {
            PREFIX_EVEN => false,
            PREFIX_ODD => true,
            prefix => return Err(Error::InvalidPrefix(prefix)),
        };

        let x = bytes_to_int(&encoded[1..]);
        if x >= self.p {
            return Err(Error::PointNotOnCurve);
        }

        let y = match sqrt_mod_prime(&self.rhs(&x), &self.p) {
            Ok(y) => y,
            Err(Error::NoSquareRoot) => {
                debug!("{}: x has no matching y", self.name);
                return Err(Error::PointNotOnCurve);
            }
            Err(e) => return Err(e),
        };

        // y = 0 has no partner; an odd prefix for it is still accepted as y = 0.
        if y.is_odd() == want_odd || y == 0 {
            Ok((x, y))
        } else {
            let y = (&self.p - &y).complete();
            Ok((x, y))
        }
    }
}
