//! The screen state machine: intents in, derived flags out.

use crate::core::{
    next_state, DerivedBinding, Epoch, Resolution, SaveOutcome, ScreenState, State, StateHistory,
    StateTransition, Trigger,
};
use crate::effects::save::SaveOperation;
use crate::form::Item;
use chrono::Utc;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Clonable handle for delivering a save result back to the machine.
///
/// Safe to use from any task or thread. Resolutions are queued; the machine
/// applies them only when its owner calls [`ScreenStateMachine::settle`] or
/// [`ScreenStateMachine::poll_resolutions`], so all state changes still go
/// through one `&mut` entry point.
#[derive(Clone, Debug)]
pub struct Resolver {
    tx: mpsc::UnboundedSender<Resolution>,
}

impl Resolver {
    /// Queue `outcome` for the save scheduled under `epoch`.
    ///
    /// Returns `false` if the machine has been dropped.
    pub fn resolve(&self, epoch: Epoch, outcome: SaveOutcome) -> bool {
        match self.tx.send(Resolution::new(epoch, outcome)) {
            Ok(()) => true,
            Err(_) => {
                warn!(%epoch, ?outcome, "screen is gone, dropping save resolution");
                false
            }
        }
    }
}

/// State machine for the create-item screen.
///
/// Holds exactly one [`ScreenState`]. Intent methods that arrive in the
/// wrong state do nothing and return `false`. `submit` and `retry` spawn the
/// save on the current tokio runtime and return immediately; the outcome
/// comes back through the resolution channel tagged with the epoch it was
/// started under.
///
/// Outside a tokio runtime `submit` and `retry` are refused: they return
/// `false` and the state stays where it was.
///
/// # Example
///
/// ```rust
/// use screenflow::core::{SaveOutcome, ScreenState};
/// use screenflow::effects::{SaveOperation, ScreenStateMachine};
/// use screenflow::form::Item;
/// use std::future::Future;
///
/// struct Succeeds;
///
/// impl SaveOperation for Succeeds {
///     fn save(&self, _item: Item) -> impl Future<Output = SaveOutcome> + Send + 'static {
///         async { SaveOutcome::Success }
///     }
/// }
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let mut screen = ScreenStateMachine::new(Succeeds);
/// let item = Item::new("Groceries", "");
///
/// assert!(screen.submit(&item));
/// assert!(screen.is_pending());
///
/// screen.settle().await;
/// assert!(screen.should_show_success_notice());
///
/// screen.acknowledge_success();
/// assert!(screen.should_navigate_to_results());
/// # });
/// ```
pub struct ScreenStateMachine<O: SaveOperation> {
    state: ScreenState,
    epoch: Epoch,
    history: StateHistory<ScreenState>,
    operation: Arc<O>,
    tx: mpsc::UnboundedSender<Resolution>,
    rx: mpsc::UnboundedReceiver<Resolution>,
}

impl<O: SaveOperation> ScreenStateMachine<O> {
    /// Create a machine in `Editing` at epoch zero.
    pub fn new(operation: O) -> Self {
        Self::with_shared(Arc::new(operation))
    }

    /// Create a machine sharing an existing operation.
    pub fn with_shared(operation: Arc<O>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state: ScreenState::Editing,
            epoch: Epoch::default(),
            history: StateHistory::new(),
            operation,
            tx,
            rx,
        }
    }

    /// Current state (pure)
    pub fn state(&self) -> ScreenState {
        self.state
    }

    /// Current epoch (pure)
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// Accepted transitions in the current visit (pure)
    pub fn history(&self) -> &StateHistory<ScreenState> {
        &self.history
    }

    pub fn resolver(&self) -> Resolver {
        Resolver {
            tx: self.tx.clone(),
        }
    }

    /// The screen was shown or re-shown.
    ///
    /// Always lands in `Editing` and advances the epoch, so a save started
    /// during an earlier visit can no longer change state. The earlier save
    /// itself keeps running; only its result is ignored. The history starts
    /// over with the appear transition as its only entry.
    pub fn on_appear(&mut self) {
        self.epoch = self.epoch.next();
        self.history = StateHistory::new();
        self.apply(Trigger::Appear);
    }

    /// Submit the item. Only accepted in `Editing`.
    pub fn submit(&mut self, item: &Item) -> bool {
        self.start_save(Trigger::Submit, item)
    }

    /// Submit again after a failure. Only accepted in `Failed`.
    pub fn retry(&mut self, item: &Item) -> bool {
        self.start_save(Trigger::Retry, item)
    }

    /// Dismiss the success notice. Only accepted in `Succeeded`.
    pub fn acknowledge_success(&mut self) -> bool {
        self.apply(Trigger::AcknowledgeSuccess)
    }

    /// Dismiss the error notice and go back to editing. Only accepted in
    /// `Failed`.
    pub fn acknowledge_error_and_edit(&mut self) -> bool {
        self.apply(Trigger::AcknowledgeErrorAndEdit)
    }

    /// Apply a save result.
    ///
    /// Discarded unless it carries the current epoch and the machine is
    /// `Pending`.
    pub fn on_save_resolved(&mut self, resolution: Resolution) -> bool {
        if !resolution.is_current(self.epoch) {
            debug!(
                stale = %resolution.epoch,
                current = %self.epoch,
                outcome = ?resolution.outcome,
                "discarding stale save resolution"
            );
            return false;
        }
        self.apply(Trigger::Resolved(resolution.outcome))
    }

    /// Wait for the next delivered resolution without applying it.
    pub async fn next_resolution(&mut self) -> Option<Resolution> {
        self.rx.recv().await
    }

    /// Wait for the next delivered resolution and apply it.
    ///
    /// Returns whether it changed state. Outside `Pending` nothing can be
    /// applied, so it only takes a resolution already queued and returns
    /// `false` at once instead of waiting.
    pub async fn settle(&mut self) -> bool {
        if !self.is_pending() {
            if let Ok(resolution) = self.rx.try_recv() {
                self.on_save_resolved(resolution);
            }
            return false;
        }

        // The machine holds a sender, so `recv` only ends with a value.
        match self.rx.recv().await {
            Some(resolution) => self.on_save_resolved(resolution),
            None => false,
        }
    }

    /// Apply every resolution already delivered, without waiting.
    ///
    /// Returns how many changed state.
    pub fn poll_resolutions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(resolution) = self.rx.try_recv() {
            if self.on_save_resolved(resolution) {
                applied += 1;
            }
        }
        applied
    }

    pub fn is_editing(&self) -> bool {
        self.state.is_editing()
    }

    pub fn is_pending(&self) -> bool {
        self.state.is_pending()
    }

    pub fn should_show_success_notice(&self) -> bool {
        self.state.should_show_success_notice()
    }

    pub fn should_show_error_notice(&self) -> bool {
        self.state.should_show_error_notice()
    }

    pub fn should_navigate_to_results(&self) -> bool {
        self.state.should_navigate_to_results()
    }

    /// Two-way handle for the success alert.
    pub fn success_notice_binding(&self) -> DerivedBinding<'_, ScreenState> {
        DerivedBinding::new(
            "success-notice",
            &self.state,
            ScreenState::should_show_success_notice,
        )
    }

    /// Two-way handle for the error alert.
    pub fn error_notice_binding(&self) -> DerivedBinding<'_, ScreenState> {
        DerivedBinding::new(
            "error-notice",
            &self.state,
            ScreenState::should_show_error_notice,
        )
    }

    /// Two-way handle for the navigation link to the results screen.
    pub fn results_navigation_binding(&self) -> DerivedBinding<'_, ScreenState> {
        DerivedBinding::new(
            "results-navigation",
            &self.state,
            ScreenState::should_navigate_to_results,
        )
    }

    fn start_save(&mut self, trigger: Trigger, item: &Item) -> bool {
        let Ok(runtime) = Handle::try_current() else {
            warn!(state = self.state.name(), %trigger, "no tokio runtime, refusing to start save");
            return false;
        };
        if !self.apply(trigger) {
            return false;
        }

        let epoch = self.epoch;
        let resolver = self.resolver();
        let save = self.operation.save(item.clone());
        runtime.spawn(async move {
            let outcome = save.await;
            resolver.resolve(epoch, outcome);
        });
        true
    }

    /// The only place state is written.
    fn apply(&mut self, trigger: Trigger) -> bool {
        let Some(to) = next_state(&self.state, &trigger) else {
            debug!(state = self.state.name(), %trigger, "ignoring trigger");
            return false;
        };

        let from = self.state;
        self.history.push(StateTransition {
            from,
            to,
            trigger,
            epoch: self.epoch,
            timestamp: Utc::now(),
        });
        self.state = to;
        debug!(from = from.name(), to = to.name(), %trigger, epoch = %self.epoch, "screen transition");
        true
    }
}
