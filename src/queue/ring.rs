use super::{consumer::Consumer, observer::Observer, producer::Producer};

/// An owned queue: both roles at once, plus the bookkeeping that lets role
/// handles assert their exclusivity.
pub trait Ring: Observer + Consumer + Producer {
    /// Tell whether the read end is held by a consumer handle.
    ///
    /// Returns the old value.
    ///
    /// # Safety
    ///
    /// Must not be set to `false` while a consumer handle exists.
    unsafe fn hold_head(&self, flag: bool) -> bool;

    /// Tell whether the write end is held by a producer handle.
    ///
    /// Returns the old value.
    ///
    /// # Safety
    ///
    /// Must not be set to `false` while a producer handle exists.
    unsafe fn hold_tail(&self, flag: bool) -> bool;
}
