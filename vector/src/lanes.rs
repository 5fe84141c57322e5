use core::ops::{Index, IndexMut};
use core::slice;

/// Exclusive borrow of `N` distinct lanes of a vector, in swizzle order.
///
/// Returned by swizzle accessors such as `zx_mut()`. Index 0 is the first lane named by the
/// swizzle, so for `v.zx_mut()`, `[0]` is `v.z` and `[1]` is `v.x`.
///
/// ```
/// use shadevec::{Vec2, Vec4};
///
/// let mut v = Vec4::new(1, 2, 3, 4);
/// v.zx_mut().set(Vec2::new(10, 20));
/// assert_eq!(v, Vec4::new(20, 2, 10, 4));
///
/// let mut lanes = v.wy_mut();
/// lanes[0] += 100;
/// assert_eq!(lanes.get(), [104, 2]);
/// ```
#[derive(Debug)]
pub struct LanesMut<'a, T, const N: usize> {
    lanes: [&'a mut T; N],
}

impl<'a, T, const N: usize> LanesMut<'a, T, N> {
    #[inline]
    pub(crate) fn new(lanes: [&'a mut T; N]) -> Self {
        Self { lanes }
    }

    /// Returns the number of borrowed lanes.
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty, reason = "never empty")]
    pub const fn len(&self) -> usize {
        N
    }

    /// Reads the borrowed lanes.
    #[inline]
    #[must_use]
    pub fn get(&self) -> [T; N]
    where
        T: Copy,
    {
        core::array::from_fn(|i| *self.lanes[i])
    }

    /// Writes the borrowed lanes; `values[0]` goes to the first lane named by the swizzle.
    #[inline]
    pub fn set(&mut self, values: impl Into<[T; N]>) {
        for (lane, value) in self.lanes.iter_mut().zip(values.into()) {
            **lane = value;
        }
    }

    /// Replaces the borrowed lanes with the result of `f` applied to their current values.
    #[inline]
    pub fn update(&mut self, f: impl FnOnce([T; N]) -> [T; N])
    where
        T: Copy,
    {
        let values = f(self.get());
        self.set(values);
    }

    /// Iterates over the borrowed lanes, in swizzle order.
    #[inline]
    pub fn iter_mut(&mut self) -> LanesIterMut<'_, 'a, T> {
        LanesIterMut(self.lanes.iter_mut())
    }
}

impl<T, const N: usize> Index<usize> for LanesMut<'_, T, N> {
    type Output = T;
    #[inline]
    fn index(&self, index: usize) -> &T {
        &*self.lanes[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for LanesMut<'_, T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut *self.lanes[index]
    }
}

impl<'s, 'a, T, const N: usize> IntoIterator for &'s mut LanesMut<'a, T, N> {
    type Item = &'s mut T;
    type IntoIter = LanesIterMut<'s, 'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Iterator over the lanes of a [`LanesMut`].
#[derive(Debug)]
pub struct LanesIterMut<'s, 'a, T>(slice::IterMut<'s, &'a mut T>);

impl<'s, T> Iterator for LanesIterMut<'s, '_, T> {
    type Item = &'s mut T;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|lane| &mut **lane)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for LanesIterMut<'_, '_, T> {}
