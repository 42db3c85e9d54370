use super::{consumer::Consumer, producer::Producer};

/// Split the queue into producer and consumer role handles.
pub trait Split {
    /// Producer type.
    type Prod: Producer;
    /// Consumer type.
    type Cons: Consumer;

    /// Perform the splitting.
    fn split(self) -> (Self::Prod, Self::Cons);
}

/// Split the queue by reference into producer and consumer role handles.
pub trait SplitRef {
    /// Ref producer type.
    type RefProd<'a>: Producer + 'a
    where
        Self: 'a;
    /// Ref consumer type.
    type RefCons<'a>: Consumer + 'a
    where
        Self: 'a;

    /// Perform the splitting by reference.
    fn split_ref(&mut self) -> (Self::RefProd<'_>, Self::RefCons<'_>);
}
