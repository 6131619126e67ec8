use crate::OperationCost;

/// A value paired with the digest work it took to produce.
#[must_use]
#[derive(Debug, Eq, PartialEq)]
pub struct CostContext<T> {
    /// The produced value.
    pub value: T,
    /// Digest work spent on it.
    pub cost: OperationCost,
}

impl<T> CostContext<T> {
    /// Move the cost into `acc_cost` and return the value.
    pub fn unwrap_add_cost(self, acc_cost: &mut OperationCost) -> T {
        *acc_cost += self.cost;
        self.value
    }

    /// Return the value, discarding the cost.
    pub fn unwrap(self) -> T {
        self.value
    }

    /// Add work done before this value was produced.
    pub fn add_cost(mut self, cost: OperationCost) -> Self {
        self.cost += cost;
        self
    }
}

/// A fallible result paired with its cost.
pub type CostResult<T, E> = CostContext<Result<T, E>>;

/// Attaches a cost to any value.
pub trait CostsExt: Sized {
    /// Pair `self` with `cost`.
    fn wrap_with_cost(self, cost: OperationCost) -> CostContext<Self> {
        CostContext { value: self, cost }
    }
}

impl<T> CostsExt for T {}
