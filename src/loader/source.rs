use std::future::Future;

/// Something that can produce page `n` (1-based) of a listing.
///
/// Implementations must be safe to call again for the same page; the loader
/// re-requests a page after a failure.
pub trait PageSource {
    type Item;
    type Error;

    fn fetch_page(
        &self,
        page: u32,
    ) -> impl Future<Output = Result<Vec<Self::Item>, Self::Error>> + Send;
}

/// Adapts a closure `Fn(u32) -> Future<Output = Result<Vec<T>, E>>` into a [`PageSource`]
pub struct FnPageSource<F>(pub F);

impl<F, Fut, T, E> PageSource for FnPageSource<F>
where
    F: Fn(u32) -> Fut,
    Fut: Future<Output = Result<Vec<T>, E>> + Send,
{
    type Item = T;
    type Error = E;

    fn fetch_page(&self, page: u32) -> impl Future<Output = Result<Vec<T>, E>> + Send {
        (self.0)(page)
    }
}
