/// A value read at a known slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithSlot<T> {
    slot: u64,
    value: T,
}

impl<T> WithSlot<T> {
    /// Create a new [`WithSlot`].
    pub fn new(slot: u64, value: T) -> Self {
        Self { slot, value }
    }

    /// Context slot of the value.
    pub fn slot(&self) -> u64 {
        self.slot
    }

    /// Get a reference to the value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consume and return the value.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Split into slot and value.
    pub fn split(self) -> (u64, T) {
        (self.slot, self.value)
    }

    /// Apply a function to the value, keeping the slot.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> WithSlot<U> {
        WithSlot {
            slot: self.slot,
            value: f(self.value),
        }
    }
}

impl<T, E> WithSlot<Result<T, E>> {
    /// Transpose.
    pub fn transpose(self) -> Result<WithSlot<T>, E> {
        match self.value {
            Ok(value) => Ok(WithSlot {
                slot: self.slot,
                value,
            }),
            Err(err) => Err(err),
        }
    }
}
