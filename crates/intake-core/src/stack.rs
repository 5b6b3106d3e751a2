//! # Stack
//!
//! A last-in-first-out container whose reads fail loudly when it is empty.
//!
//! ```text
//!            push
//!   Empty ─────────► NonEmpty ◄──┐ push / pop (size > 1)
//!     ▲                 │  └─────┘
//!     └─────────────────┘
//!        pop (size == 1) / clear
//!
//!   pop / peek on Empty → Err(StackError::Empty)
//! ```
//!
//! Unlike the validators, an empty read is a bug in the caller, so it gets
//! its own error type rather than a `ValidationError`.

use crate::error::StackError;

/// A LIFO stack backed by a `Vec`. The top is the last element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    /// Creates an empty stack with room for `capacity` items before it
    /// reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Stack {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Puts `item` on top. Always succeeds.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top item.
    ///
    /// ## Example
    /// ```rust
    /// use intake_core::error::StackError;
    /// use intake_core::stack::Stack;
    ///
    /// let mut stack = Stack::new();
    /// stack.push(1);
    /// assert_eq!(stack.pop(), Ok(1));
    /// assert_eq!(stack.pop(), Err(StackError::Empty));
    /// ```
    pub fn pop(&mut self) -> Result<T, StackError> {
        self.items.pop().ok_or(StackError::Empty)
    }

    /// Returns the top item without removing it.
    pub fn peek(&self) -> Result<&T, StackError> {
        self.items.last().ok_or(StackError::Empty)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items on the stack.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Drops every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates from the top of the stack down.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter().rev()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack::new()
    }
}

/// Pushes in iteration order, so the last item ends up on top.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stack_is_empty() {
        let stack: Stack<i32> = Stack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.size(), 0);
    }

    #[test]
    fn test_push_increments_size() {
        let mut stack = Stack::new();
        stack.push(1);
        assert_eq!(stack.size(), 1);
        assert!(!stack.is_empty());
    }

    #[test]
    fn test_pop_returns_and_removes_top() {
        let mut stack = Stack::new();
        stack.push(1);

        assert_eq!(stack.pop(), Ok(1));
        assert_eq!(stack.size(), 0);
    }

    #[test]
    fn test_pop_empty_fails() {
        let mut stack: Stack<i32> = Stack::new();
        let err = stack.pop().unwrap_err();
        assert_eq!(err, StackError::Empty);
        assert!(err.to_string().to_lowercase().contains("empty"));
    }

    #[test]
    fn test_peek_returns_top_without_removing() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);

        assert_eq!(stack.peek(), Ok(&2));
        assert_eq!(stack.size(), 2);
    }

    #[test]
    fn test_peek_empty_fails() {
        let stack: Stack<&str> = Stack::default();
        assert_eq!(stack.peek(), Err(StackError::Empty));
    }

    #[test]
    fn test_clear() {
        let mut stack = Stack::with_capacity(3);
        stack.push(1);
        stack.push(2);
        stack.push(3);
        stack.clear();

        assert_eq!(stack.size(), 0);
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), Err(StackError::Empty));
    }

    #[test]
    fn test_lifo_order() {
        let mut stack: Stack<char> = "abc".chars().collect();
        stack.extend(['d']);

        assert_eq!(stack.iter().copied().collect::<String>(), "dcba");
        assert_eq!(stack.pop(), Ok('d'));
        assert_eq!(stack.pop(), Ok('c'));
        assert_eq!(stack.peek(), Ok(&'b'));
    }
}
