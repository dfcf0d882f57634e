use std::slice::Iter;

use crate::TiniError;

/// How a [`GrowableStorage`] enlarges itself once every slot is in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthPolicy {
    /// Grow by a fixed number of slots. An increment of zero is treated as one.
    Fixed(usize),
    /// Double the current capacity, starting from one slot when empty.
    Doubling,
}

impl GrowthPolicy {
    pub fn next_capacity(self, capacity: usize) -> usize {
        match self {
            GrowthPolicy::Fixed(increment) => capacity.saturating_add(increment.max(1)),
            GrowthPolicy::Doubling => capacity.saturating_mul(2).max(1),
        }
    }
}

/// Owned, ordered storage whose capacity only grows, and only by its policy.
///
/// Every allocation goes through fallible reservation so that running out of
/// memory is reported as [`TiniError::OutOfMemory`] with the storage untouched.
#[derive(Debug)]
pub struct GrowableStorage<T> {
    items: Vec<T>,
    capacity: usize,
    policy: GrowthPolicy,
}

impl<T> GrowableStorage<T> {
    pub fn with_capacity(capacity: usize, policy: GrowthPolicy) -> Result<Self, TiniError> {
        let mut items = Vec::new();
        items.try_reserve_exact(capacity)?;
        Ok(Self { items, capacity, policy })
    }

    pub fn try_push(&mut self, item: T) -> Result<(), TiniError> {
        if self.items.len() == self.capacity {
            self.grow()?;
        }
        self.items.push(item);
        Ok(())
    }

    fn grow(&mut self) -> Result<(), TiniError> {
        let new_capacity = self.policy.next_capacity(self.capacity);
        self.items.try_reserve_exact(new_capacity - self.items.len())?;
        log::trace!("Storage grown from {} to {new_capacity} slots", self.capacity);
        self.capacity = new_capacity;
        Ok(())
    }

    pub fn position<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().position(predicate)
    }

    pub fn find_mut<P>(&mut self, mut predicate: P) -> Option<&mut T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter_mut().find(|item| predicate(item))
    }

    /// Removes the item at `index`, shifting everything after it one slot left.
    /// Capacity is left as it is.
    pub fn remove(&mut self, index: usize) -> T {
        self.items.remove(index)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

/// Copies `source` into a freshly allocated string without aborting on allocation failure.
pub fn try_copy(source: &str) -> Result<String, TiniError> {
    let mut owned = String::new();
    owned.try_reserve_exact(source.len())?;
    owned.push_str(source);
    Ok(owned)
}
