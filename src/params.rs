#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Params {
    // Upper bound on the candidates 1, 2, ... tried when looking for a quadratic non-residue.
    // For a prime modulus about 2 candidates are needed, so hitting this means p is not prime.
    pub non_residue_search_limit: u32,
}

impl Params {
    pub const DEFAULT: Params = Params {
        non_residue_search_limit: 4096,
    };

    pub fn with_non_residue_search_limit(limit: u32) -> Params {
        Params {
            non_residue_search_limit: limit,
        }
    }
}

impl Default for Params {
    fn default() -> Params {
        Params::DEFAULT
    }
}
