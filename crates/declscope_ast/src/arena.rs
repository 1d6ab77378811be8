//! Arena allocator for tree nodes.
//!
//! Uses `bumpalo` for bump allocation of declaration nodes.
//! All nodes of a translation unit are allocated in the same arena
//! and freed together once the run over that unit is complete.

use bumpalo::Bump;

/// Arena allocator for declaration nodes.
///
/// Wraps `bumpalo::Bump`. Front ends allocate child slices and name strings
/// here so that a whole tree can be handed out as borrowed `DeclNode`s.
///
/// # Example
///
/// ```rust
/// use declscope_ast::AstArena;
///
/// let arena = AstArena::new();
///
/// let value = arena.alloc(42u32);
/// assert_eq!(*value, 42);
///
/// let s = arena.alloc_str("ns::Y<int>");
/// assert_eq!(s, "ns::Y<int>");
/// ```
pub struct AstArena {
    bump: Bump,
}

impl AstArena {
    /// Creates a new arena allocator.
    #[inline]
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Creates a new arena with the specified initial capacity.
    ///
    /// The driver sizes this from the source length.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bump: Bump::with_capacity(capacity),
        }
    }

    /// Allocates a value in the arena and returns a reference to it.
    #[inline]
    pub fn alloc<T>(&self, val: T) -> &T {
        self.bump.alloc(val)
    }

    /// Allocates a string slice in the arena.
    #[inline]
    pub fn alloc_str(&self, s: &str) -> &str {
        self.bump.alloc_str(s)
    }

    /// Allocates a slice in the arena by copying from the input slice.
    #[inline]
    pub fn alloc_slice_copy<T: Copy>(&self, slice: &[T]) -> &[T] {
        self.bump.alloc_slice_copy(slice)
    }

    /// Allocates a slice in the arena from an exact-size iterator.
    #[inline]
    pub fn alloc_slice_fill_iter<T, I>(&self, iter: I) -> &[T]
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        self.bump.alloc_slice_fill_iter(iter)
    }

    /// Returns the total bytes allocated in this arena.
    #[inline]
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }
}

impl Default for AstArena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_alloc() {
        let arena = AstArena::new();
        let value = arena.alloc(42u32);
        assert_eq!(*value, 42);
    }

    #[test]
    fn test_arena_alloc_str() {
        let arena = AstArena::new();
        let s = arena.alloc_str("outer::inner");
        assert_eq!(s, "outer::inner");
    }

    #[test]
    fn test_arena_alloc_slice() {
        let arena = AstArena::new();
        let slice = arena.alloc_slice_copy(&[1, 2, 3, 4, 5]);
        assert_eq!(slice, &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_arena_alloc_slice_fill_iter() {
        let arena = AstArena::new();
        let slice = arena.alloc_slice_fill_iter((0..4).map(|n| n * 2));
        assert_eq!(slice, &[0, 2, 4, 6]);
    }

    #[test]
    fn test_arena_with_capacity_tracks_allocations() {
        let arena = AstArena::with_capacity(1024);
        let _ = arena.alloc_str("template <> class Y<int> {};");
        assert!(arena.allocated_bytes() > 0);
    }
}
