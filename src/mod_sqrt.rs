use log::{debug, error, trace};
use rayon::prelude::*;
use rug::{Complete, Integer};

use crate::{
    nt::{legendre, mod_exp, reduce},
    params::Params,
    Error,
};

/// Finds a square root of n modulo the prime p with the Tonelli-Shanks algorithm.
///
/// Returns `Error::NoSquareRoot` if n is not a quadratic residue. Which of the two roots r and
/// p - r is returned is deterministic but unspecified.
pub fn sqrt_mod_prime(n: &Integer, p: &Integer) -> Result<Integer, Error> {
    sqrt_mod_prime_with(n, p, &Params::DEFAULT)
}

pub fn sqrt_mod_prime_with(n: &Integer, p: &Integer, params: &Params) -> Result<Integer, Error> {
    if *p < 2 {
        return Err(Error::InvalidModulus(p.to_string()));
    }
    let n = reduce(n, p);

    if n == 0 {
        return Ok(n);
    }
    if *p == 2 {
        return Ok(n);
    }
    if legendre(&n, p) != 1 {
        return Err(Error::NoSquareRoot);
    }

    if p.mod_u(4) == 3 {
        let e = (p + 1u32).complete() >> 2u32;
        return Ok(mod_exp(&n, &e, p));
    }

    // p - 1 = q * 2^s with q odd.
    let p_minus_one = (p - 1u32).complete();
    let s = p_minus_one.find_one(0).unwrap_or(0);
    let q = p_minus_one >> s;
    debug!("p - 1 = q * 2^{}, running general Tonelli-Shanks", s);

    let z = find_non_residue(p, params.non_residue_search_limit)?;

    // Loop invariant: r^2 = n * t and t has order dividing 2^(m - 1). m strictly decreases, so
    // there are at most s iterations.
    let mut m = s;
    let mut c = mod_exp(&z, &q, p);
    let mut t = mod_exp(&n, &q, p);
    let mut r = mod_exp(&n, &((q + 1u32) >> 1u32), p);

    loop {
        if t == 0 {
            return Ok(Integer::new());
        }
        if t == 1 {
            return Ok(r);
        }

        // Least 0 < i < m with t^(2^i) = 1.
        let mut i = 0;
        let mut t_pow = t.clone();
        while t_pow != 1 {
            i += 1;
            if i == m {
                error!(
                    "no exponent below m = {} in Tonelli-Shanks, modulus {} is probably not prime",
                    m, p
                );
                return Err(Error::ExponentNotFound);
            }
            t_pow.square_mut();
            t_pow %= p;
        }
        trace!("m = {}, i = {}", m, i);

        let b = mod_exp(&c, &(Integer::from(1) << (m - i - 1)), p);
        m = i;
        c = (&b * &b).complete() % p;
        t = (&t * &c).complete() % p;
        r = (&r * &b).complete() % p;
    }
}

// Smallest z >= 1 with legendre(z, p) = -1. About 2 candidates are expected for a prime p.
fn find_non_residue(p: &Integer, limit: u32) -> Result<Integer, Error> {
    match (1..=limit)
        .map(Integer::from)
        .find(|z| legendre(z, p) == -1)
    {
        Some(z) => Ok(z),
        None => {
            error!(
                "no quadratic non-residue among the first {} candidates, modulus {} is probably not prime",
                limit, p
            );
            Err(Error::NonResidueSearchExhausted { limit })
        }
    }
}

// Roots of many elements modulo the same prime, in parallel. Output is in input order.
pub fn sqrt_mod_prime_batch(values: &[Integer], p: &Integer) -> Vec<Result<Integer, Error>> {
    values.par_iter().map(|n| sqrt_mod_prime(n, p)).collect()
}
