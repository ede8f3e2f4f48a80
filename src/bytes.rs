use rug::{integer::Order, Integer};

use crate::Error;

/// Encodes a non-negative integer as exactly `length` big-endian bytes.
///
/// Values that need more than `length` bytes are rejected instead of truncated.
pub fn int_to_bytes(value: &Integer, length: usize) -> Result<Vec<u8>, Error> {
    if *value < 0 {
        return Err(Error::NegativeValue);
    }

    let bits = value.significant_bits();
    if bits as usize > length * 8 {
        return Err(Error::ValueTooLarge { bits, length });
    }

    let digits = value.to_digits::<u8>(Order::Msf);
    let mut bytes = vec![0u8; length - digits.len()];
    bytes.extend_from_slice(&digits);
    Ok(bytes)
}

// Big-endian; the empty buffer is 0.
pub fn bytes_to_int(bytes: &[u8]) -> Integer {
    Integer::from_digits(bytes, Order::Msf)
}

// Bytes needed for any element of the field of order p.
pub fn field_width(p: &Integer) -> usize {
    (p.significant_bits() as usize + 7) / 8
}

#[cfg(test)]
mod tests {
    use rand_xoshiro::{
        rand_core::{RngCore, SeedableRng},
        Xoshiro256PlusPlus,
    };
    use rug::{ops::Pow, rand::RandState};

    use super::*;

    #[test]
    fn test_big_endian_layout() {
        assert_eq!(
            int_to_bytes(&Integer::from(0x0102_0304u32), 4).unwrap(),
            vec![1, 2, 3, 4]
        );
        assert_eq!(
            int_to_bytes(&Integer::from(0x0102u32), 4).unwrap(),
            vec![0, 0, 1, 2]
        );
        assert_eq!(bytes_to_int(&[1, 0]), 256);
        assert_eq!(bytes_to_int(&[0, 0, 0, 7]), 7);
    }

    #[test]
    fn test_zero() {
        assert_eq!(int_to_bytes(&Integer::new(), 3).unwrap(), vec![0, 0, 0]);
        assert_eq!(int_to_bytes(&Integer::new(), 0).unwrap(), Vec::<u8>::new());
        assert_eq!(bytes_to_int(&[]), 0);
        assert_eq!(bytes_to_int(&[0, 0]), 0);
    }

    #[test]
    fn test_rejects_values_that_do_not_fit() {
        assert_eq!(
            int_to_bytes(&Integer::from(256), 1),
            Err(Error::ValueTooLarge { bits: 9, length: 1 })
        );
        assert_eq!(int_to_bytes(&Integer::from(255), 1).unwrap(), vec![255]);

        let v = Integer::from(2).pow(256u32);
        assert!(int_to_bytes(&v, 32).is_err());
        assert_eq!(int_to_bytes(&v, 33).unwrap()[0], 1);
    }

    #[test]
    fn test_rejects_negative() {
        assert_eq!(
            int_to_bytes(&Integer::from(-1), 8),
            Err(Error::NegativeValue)
        );
    }

    #[test]
    fn test_roundtrip_random() {
        let mut rng = RandState::new();
        rng.seed(&Integer::from(42));
        let mut xo = Xoshiro256PlusPlus::seed_from_u64(1000000009);

        for _ in 0..500 {
            let length = (xo.next_u32() % 64) as usize;
            let bits = (length * 8) as u32;
            let v = Integer::from(Integer::random_bits(bits, &mut rng));
            let encoded = int_to_bytes(&v, length).unwrap();
            assert_eq!(encoded.len(), length);
            assert_eq!(bytes_to_int(&encoded), v);
        }
    }

    #[test]
    fn test_field_width() {
        assert_eq!(field_width(&Integer::from(7)), 1);
        assert_eq!(field_width(&Integer::from(257)), 2);
        let secp256k1_p = Integer::from(2).pow(256u32) - 4294968273u64;
        assert_eq!(field_width(&secp256k1_p), 32);
    }
}
