use alloc::boxed::Box;

use crate::Reflect;

// -----------------------------------------------------------------------------
// List trait

/// A trait for type-erased list operations.
///
/// Implemented for `Vec<T>` and `VecDeque<T>`.
///
/// # Examples
///
/// ```
/// use ws_structs::ops::List;
///
/// let list: &dyn List = &vec![1_i32, 2, 3];
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.get(1).unwrap().downcast_ref::<i32>(), Some(&2));
/// assert_eq!(list.iter().count(), 3);
/// ```
pub trait List: Reflect {
    /// Returns the element at `index`, or `None` if out of bounds.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the element at `index` mutably, or `None` if out of bounds.
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the list contains no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the elements, in order.
    fn iter(&self) -> Box<dyn Iterator<Item = &dyn Reflect> + '_>;
}
