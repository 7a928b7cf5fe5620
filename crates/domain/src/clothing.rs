use std::fmt::{Display, Formatter};

use kapelle_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier for one clothing pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClothingPoolId(Uuid);

impl ClothingPoolId {
    /// Creates a random pool identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a pool identifier from an existing UUID value.
    #[must_use]
    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    /// Returns the underlying UUID value.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ClothingPoolId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for ClothingPoolId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// One person's share of a clothing pool.
///
/// At most one record exists per assignee; repeated assignments grow the
/// existing record instead of appending a duplicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClothingAssignment {
    assignee: NonEmptyString,
    quantity: u32,
}

impl ClothingAssignment {
    /// Returns the assignee identifier.
    #[must_use]
    pub fn assignee(&self) -> &NonEmptyString {
        &self.assignee
    }

    /// Returns the assigned quantity.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Quantity-tracked stock for one clothing category and size.
///
/// The in-use count is derived from the assignment records, so
/// `in_use() <= total_quantity()` is the only invariant the mutations have
/// to defend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClothingPool {
    pool_id: ClothingPoolId,
    category: NonEmptyString,
    size: NonEmptyString,
    total_quantity: u32,
    assignments: Vec<ClothingAssignment>,
}

impl ClothingPool {
    /// Creates a new pool with validated labels and zero assignments.
    pub fn new(
        category: impl Into<String>,
        size: impl Into<String>,
        initial_quantity: u32,
    ) -> AppResult<Self> {
        Ok(Self {
            pool_id: ClothingPoolId::new(),
            category: NonEmptyString::new(category)?,
            size: NonEmptyString::new(size)?,
            total_quantity: initial_quantity,
            assignments: Vec::new(),
        })
    }

    /// Returns the pool identifier.
    #[must_use]
    pub fn pool_id(&self) -> ClothingPoolId {
        self.pool_id
    }

    /// Returns the category label.
    #[must_use]
    pub fn category(&self) -> &NonEmptyString {
        &self.category
    }

    /// Returns the size label.
    #[must_use]
    pub fn size(&self) -> &NonEmptyString {
        &self.size
    }

    /// Returns the owned quantity.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.total_quantity
    }

    /// Returns the assignment records in insertion order.
    #[must_use]
    pub fn assignments(&self) -> &[ClothingAssignment] {
        self.assignments.as_slice()
    }

    /// Returns the quantity currently handed out.
    #[must_use]
    pub fn in_use(&self) -> u32 {
        self.assignments
            .iter()
            .map(ClothingAssignment::quantity)
            .sum()
    }

    /// Returns the quantity still on the shelf.
    #[must_use]
    pub fn available(&self) -> u32 {
        self.total_quantity.saturating_sub(self.in_use())
    }

    /// Adjusts the owned quantity by a positive or negative delta.
    ///
    /// The result is clamped at zero. A decrement that would push the total
    /// below the quantity currently handed out is rejected and leaves the
    /// pool untouched.
    pub fn adjust_total_quantity(&mut self, delta: i64) -> AppResult<()> {
        let target = i64::from(self.total_quantity).saturating_add(delta).max(0);
        let target = u32::try_from(target).map_err(|_| {
            AppError::Validation(format!(
                "total quantity {target} exceeds the supported range"
            ))
        })?;

        let in_use = self.in_use();
        if target < in_use {
            return Err(AppError::Conflict(format!(
                "cannot reduce pool '{} ({})' to {target}: {in_use} already handed out",
                self.category.as_str(),
                self.size.as_str()
            )));
        }

        self.total_quantity = target;
        Ok(())
    }

    /// Hands a quantity to an assignee, merging with any existing record.
    pub fn assign(&mut self, assignee: &str, quantity: u32) -> AppResult<()> {
        let assignee = NonEmptyString::new(assignee)?;
        if quantity == 0 {
            return Err(AppError::Validation(
                "assignment quantity must be positive".to_owned(),
            ));
        }

        let available = self.available();
        if quantity > available {
            return Err(AppError::InsufficientCapacity(format!(
                "pool '{} ({})' has {available} of {} available, requested {quantity}",
                self.category.as_str(),
                self.size.as_str(),
                self.total_quantity
            )));
        }

        match self
            .assignments
            .iter_mut()
            .find(|assignment| assignment.assignee == assignee)
        {
            Some(existing) => existing.quantity += quantity,
            None => self.assignments.push(ClothingAssignment {
                assignee,
                quantity,
            }),
        }

        Ok(())
    }

    /// Takes back an assignee's entire share.
    pub fn unassign(&mut self, assignee: &str) -> AppResult<()> {
        let position = self
            .assignments
            .iter()
            .position(|assignment| assignment.assignee.as_str() == assignee)
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "no assignment for '{assignee}' in pool '{} ({})'",
                    self.category.as_str(),
                    self.size.as_str()
                ))
            })?;

        self.assignments.remove(position);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::ClothingPool;

    fn jacket_pool(total: u32) -> ClothingPool {
        ClothingPool::new("Uniform - Jacket", "M", total).unwrap_or_else(|_| unreachable!())
    }

    #[test]
    fn new_pool_rejects_blank_labels() {
        assert!(ClothingPool::new("  ", "M", 5).is_err());
        assert!(ClothingPool::new("Uniform - Jacket", "", 5).is_err());
    }

    #[test]
    fn repeat_assignment_grows_the_existing_record() {
        let mut pool = jacket_pool(15);

        assert!(pool.assign("Jane", 1).is_ok());
        assert_eq!(pool.in_use(), 1);
        assert_eq!(pool.assignments().len(), 1);

        assert!(pool.assign("Jane", 2).is_ok());
        assert_eq!(pool.in_use(), 3);
        assert_eq!(pool.assignments().len(), 1);
        assert_eq!(pool.assignments()[0].quantity(), 3);

        let overdraw = pool.assign("Bob", 13);
        assert!(matches!(
            overdraw,
            Err(kapelle_core::AppError::InsufficientCapacity(_))
        ));
        assert_eq!(pool.in_use(), 3);
    }

    #[test]
    fn assign_rejects_zero_quantity_and_blank_assignee() {
        let mut pool = jacket_pool(5);
        assert!(pool.assign("Jane", 0).is_err());
        assert!(pool.assign("   ", 1).is_err());
        assert_eq!(pool.in_use(), 0);
    }

    #[test]
    fn exact_remaining_capacity_is_assignable() {
        let mut pool = jacket_pool(5);
        assert!(pool.assign("Jane", 2).is_ok());

        let over = pool.assign("Bob", 4);
        assert!(over.is_err());
        assert_eq!(pool.in_use(), 2);

        assert!(pool.assign("Bob", 3).is_ok());
        assert_eq!(pool.available(), 0);
    }

    #[test]
    fn assign_then_unassign_round_trips() {
        let mut pool = jacket_pool(15);
        let before = pool.clone();

        assert!(pool.assign("Jane", 4).is_ok());
        assert!(pool.unassign("Jane").is_ok());

        assert_eq!(pool, before);
    }

    #[test]
    fn unassign_unknown_assignee_is_not_found() {
        let mut pool = jacket_pool(15);
        let result = pool.unassign("Jane");
        assert!(matches!(result, Err(kapelle_core::AppError::NotFound(_))));
    }

    #[test]
    fn decrement_below_in_use_is_rejected() {
        let mut pool = jacket_pool(10);
        assert!(pool.assign("Jane", 6).is_ok());

        let result = pool.adjust_total_quantity(-5);
        assert!(matches!(result, Err(kapelle_core::AppError::Conflict(_))));
        assert_eq!(pool.total_quantity(), 10);

        assert!(pool.adjust_total_quantity(-4).is_ok());
        assert_eq!(pool.total_quantity(), 6);
        assert_eq!(pool.available(), 0);
    }

    #[test]
    fn decrement_clamps_at_zero_for_an_empty_pool() {
        let mut pool = jacket_pool(3);
        assert!(pool.adjust_total_quantity(-10).is_ok());
        assert_eq!(pool.total_quantity(), 0);
    }

    proptest! {
        #[test]
        fn capacity_invariant_survives_random_operations(
            operations in proptest::collection::vec((0u8..4u8, 1u32..8u32, 0usize..4usize), 0..64)
        ) {
            let assignees = ["Jane", "John", "Alice", "Bob"];
            let mut pool = ClothingPool::new("Uniform - Pants", "M", 12)
                .unwrap_or_else(|_| unreachable!());

            for (operation, quantity, index) in operations {
                let assignee = assignees[index];
                match operation {
                    0 => {
                        let _ = pool.assign(assignee, quantity);
                    }
                    1 => {
                        let _ = pool.unassign(assignee);
                    }
                    2 => {
                        let _ = pool.adjust_total_quantity(i64::from(quantity));
                    }
                    _ => {
                        let _ = pool.adjust_total_quantity(-i64::from(quantity));
                    }
                }

                prop_assert!(pool.in_use() <= pool.total_quantity());
                let recomputed: u32 = pool
                    .assignments()
                    .iter()
                    .map(|assignment| assignment.quantity())
                    .sum();
                prop_assert_eq!(pool.in_use(), recomputed);
            }
        }
    }
}
