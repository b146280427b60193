//! The save collaborator seam.

use crate::core::SaveOutcome;
use crate::form::Item;
use std::future::Future;

/// Persists an item and reports a single outcome.
///
/// The state machine calls `save` once per accepted submit or retry and
/// spawns the returned future, so it must be `Send + 'static`: copy whatever
/// the future needs out of `self` before the `async` block.
///
/// # Example
///
/// ```rust
/// use screenflow::core::SaveOutcome;
/// use screenflow::effects::SaveOperation;
/// use screenflow::form::Item;
/// use std::future::Future;
///
/// struct AlwaysFails;
///
/// impl SaveOperation for AlwaysFails {
///     fn save(&self, _item: Item) -> impl Future<Output = SaveOutcome> + Send + 'static {
///         async { SaveOutcome::Failure }
///     }
/// }
/// ```
pub trait SaveOperation: Send + Sync + 'static {
    fn save(&self, item: Item) -> impl Future<Output = SaveOutcome> + Send + 'static;
}
