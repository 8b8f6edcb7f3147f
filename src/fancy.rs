//! Fancy descriptions
//!
//! This module provides a trait, [FancyDescription], for anything able to describe itself in a
//! fancy way, and a shared [proclamation](FancyDescription::proclaim_fancy) every implementor
//! gets without writing it again.

/// Requirement trait for describing a value in a fancy way
///
/// Implementors only supply [describe_fancy](Self::describe_fancy), the rest is built on top of
/// it.
pub trait FancyDescription {
    /// Return a fancy string representation of the value.
    fn describe_fancy(&self) -> String;

    /// Proclaim the fancy description even louder.
    ///
    /// The result always wraps the exact output of [describe_fancy](Self::describe_fancy).
    fn proclaim_fancy(&self) -> String {
        format!("EVEN MORE FANCY ---> {} <---", self.describe_fancy())
    }
}

impl<T> FancyDescription for &T
where
    T: FancyDescription + ?Sized,
{
    #[inline]
    fn describe_fancy(&self) -> String {
        T::describe_fancy(self)
    }
}

impl<T> FancyDescription for &mut T
where
    T: FancyDescription + ?Sized,
{
    #[inline]
    fn describe_fancy(&self) -> String {
        T::describe_fancy(self)
    }
}

impl<T> FancyDescription for Box<T>
where
    T: FancyDescription + ?Sized,
{
    #[inline]
    fn describe_fancy(&self) -> String {
        T::describe_fancy(self)
    }
}
