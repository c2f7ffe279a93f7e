//! Equihash puzzle sizing
//!
//! The solver and verifier live elsewhere; this only carries the (N, K) pair
//! and the acceptability rules a parameter set must satisfy.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Serialized block header size without the solution.
const HEADER_SIZE: usize = 4 + 32 + 32 + 32 + 4 + 4 + 32;
/// Headers returned in one `headers` message.
const MAX_HEADERS_RESULTS: usize = 160;
/// Largest protocol message.
const MAX_PROTOCOL_MESSAGE_LENGTH: usize = 2 * 1024 * 1024;

/// Equihash (N, K).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquihashParams {
    n: u32,
    k: u32,
}

impl EquihashParams {
    /// Validate and wrap an (N, K) pair.
    pub fn new(n: u32, k: u32) -> Result<Self> {
        let params = Self { n, k };
        if k == 0 || k >= n || n % 8 != 0 || n / (k + 1) + 1 >= 32 || k >= 32 {
            return Err(Error::InvalidEquihashParams { n, k });
        }
        if (HEADER_SIZE + params.solution_size()) * MAX_HEADERS_RESULTS
            >= MAX_PROTOCOL_MESSAGE_LENGTH - 1000
        {
            return Err(Error::InvalidEquihashParams { n, k });
        }
        Ok(params)
    }

    /// N
    pub fn n(&self) -> u32 {
        self.n
    }

    /// K
    pub fn k(&self) -> u32 {
        self.k
    }

    /// Size in bytes of a minimal solution.
    pub fn solution_size(&self) -> usize {
        ((1usize << self.k) * (self.n as usize / (self.k as usize + 1) + 1)) / 8
    }
}
