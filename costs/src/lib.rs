#![deny(missing_docs)]
//! Cost accounting for ledger Merkle tree operations.
//!
//! Every operation of the ledger Merkle tree is pure and in-memory, so the
//! only resource worth tracking is how many times the digest function ran.

use std::ops::AddAssign;

mod context;

pub use context::{CostContext, CostResult, CostsExt};

/// Digest work done by an operation.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct OperationCost {
    /// How many times raw bytes were digested (record encodings).
    pub hash_byte_calls: u32,
    /// How many times two child digests were combined into a parent.
    pub hash_node_calls: u32,
}

impl OperationCost {
    /// Cost of digesting `hash_byte_calls` byte strings and nothing else.
    pub fn with_hash_byte_calls(hash_byte_calls: u32) -> Self {
        OperationCost {
            hash_byte_calls,
            ..Default::default()
        }
    }

    /// Total number of digest invocations of either kind.
    pub fn hash_calls(&self) -> u32 {
        self.hash_byte_calls + self.hash_node_calls
    }

    /// True if no digest was computed.
    pub fn is_nothing(&self) -> bool {
        self.hash_calls() == 0
    }
}

impl AddAssign for OperationCost {
    fn add_assign(&mut self, rhs: Self) {
        self.hash_byte_calls += rhs.hash_byte_calls;
        self.hash_node_calls += rhs.hash_node_calls;
    }
}

/// Unwrap a plain `Result` inside a function returning [`CostResult`].
///
/// On `Err` the function returns early with the error wrapped in the cost
/// accumulated so far in `$cost`.
#[macro_export]
macro_rules! cost_return_on_error_no_add {
    ( &$cost:ident, $($body:tt)+ ) => {
        {
            use $crate::CostsExt;
            let result = { $($body)+ };
            match result {
                Ok(x) => x,
                Err(e) => return Err(e).wrap_with_cost($cost),
            }
        }
    };
}
