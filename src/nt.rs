use rug::{Complete, Integer};

// e must be non-negative and n non-zero. Every caller derives e from a modulus of at least 2.
pub(crate) fn mod_exp(a: &Integer, e: &Integer, n: &Integer) -> Integer {
    match a.pow_mod_ref(e, n) {
        Some(r) => Integer::from(r),
        None => unreachable!("negative exponent {}", e),
    }
}

// Reduces a into [0, n) for positive n, also for negative a.
pub fn reduce(a: &Integer, n: &Integer) -> Integer {
    let mut r = (a % n).complete();
    if r < 0 {
        r += n;
    }
    r
}

/// Legendre symbol of a modulo the odd prime p, computed with Euler's criterion.
///
/// Returns 1 for a non-zero quadratic residue, -1 for a non-residue and 0 if p divides a.
/// p must be at least 3; primality is not checked. If p is composite, a^((p-1)/2) may be none of 0, 1 or p - 1;
/// such values are classified as -1.
pub fn legendre(a: &Integer, p: &Integer) -> i32 {
    let exponent = (p - 1u32).complete() >> 1u32;
    let res = mod_exp(&reduce(a, p), &exponent, p);

    if res == 0 {
        0
    } else if res == 1 {
        1
    } else {
        -1
    }
}

/// Multiplicative inverse of a modulo n via the extended Euclidean algorithm, in [0, n).
///
/// n must be positive. An a divisible by n returns 0. This is a sentinel, not an inverse. For other a, gcd(a, n) must
/// be 1; otherwise the result is meaningless.
pub fn inverse(a: &Integer, n: &Integer) -> Integer {
    let mut low = reduce(a, n);
    if low == 0 {
        return Integer::new();
    }

    let (mut lm, mut hm) = (Integer::from(1), Integer::new());
    let mut high = n.clone();

    // high and low stay non-negative, so truncating division is floor division here. Only the
    // coefficients go negative, and lm is normalized at the end.
    while low > 1 {
        let r = (&high / &low).complete();
        let nm = hm - (&lm * &r).complete();
        let new = high - (&low * &r).complete();
        hm = lm;
        lm = nm;
        high = low;
        low = new;
    }

    reduce(&lm, n)
}
