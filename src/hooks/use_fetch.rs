use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::error::AppError;

/// State of one asynchronous fetch as seen by a component.
///
/// `Loading` is both the initial state and the state at the start of every
/// cycle. Once a cycle completes, exactly one of data or error is present.
#[derive(PartialEq, Debug)]
pub enum FetchState<T> {
    Loading,
    Loaded(Rc<T>),
    Error(AppError),
}

impl<T> FetchState<T> {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the data if it is loaded
    pub const fn data(&self) -> Option<&Rc<T>> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub const fn error(&self) -> Option<&AppError> {
        match self {
            Self::Error(e) => Some(e),
            _ => None,
        }
    }
}

impl<T> Clone for FetchState<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Loading => Self::Loading,
            Self::Loaded(data) => Self::Loaded(data.clone()),
            Self::Error(e) => Self::Error(e.clone()),
        }
    }
}

/// Liveness token for a single fetch cycle.
///
/// Cancelling only stops the outcome from being applied; the request itself runs
/// to completion.
#[derive(Clone, Debug)]
pub struct FetchCycle {
    alive: Rc<Cell<bool>>,
}

impl FetchCycle {
    pub fn new() -> Self {
        Self {
            alive: Rc::new(Cell::new(true)),
        }
    }

    pub fn cancel(&self) {
        self.alive.set(false);
    }

    pub fn is_current(&self) -> bool {
        self.alive.get()
    }
}

impl Default for FetchCycle {
    fn default() -> Self {
        Self::new()
    }
}

/// Awaits `fetch` and hands its outcome to `apply` if `cycle` is still current.
///
/// Returns whether the outcome was applied.
pub async fn run_cycle<T, Fut>(
    cycle: &FetchCycle,
    fetch: Fut,
    apply: impl FnOnce(FetchState<T>),
) -> bool
where
    Fut: Future<Output = Result<T, AppError>>,
{
    let outcome = match fetch.await {
        Ok(data) => FetchState::Loaded(Rc::new(data)),
        Err(e) => FetchState::Error(e),
    };

    if cycle.is_current() {
        apply(outcome);
        true
    } else {
        false
    }
}

/// Runs `producer` whenever `deps` changes and tracks the outcome.
///
/// `deps` is compared by value, so it must not change on every render (a fresh
/// `Vec` built each render would refetch forever). A cycle superseded by a newer
/// `deps` value never writes to state.
#[hook]
pub fn use_fetch<T, D, F, Fut>(deps: D, producer: F) -> UseStateHandle<FetchState<T>>
where
    T: 'static,
    D: PartialEq + 'static,
    F: for<'a> FnOnce(&'a D) -> Fut + 'static,
    Fut: Future<Output = Result<T, AppError>> + 'static,
{
    let state = use_state(|| FetchState::Loading);

    {
        let state = state.clone();

        use_effect_with(deps, move |deps| {
            if !state.is_loading() {
                state.set(FetchState::Loading);
            }

            let cycle = FetchCycle::new();
            let fetch = producer(deps);

            {
                let cycle = cycle.clone();
                spawn_local(async move {
                    let applied = run_cycle(&cycle, fetch, |outcome| {
                        if let FetchState::Error(e) = &outcome {
                            gloo::console::warn!(&format!("Fetch failed: {e}"));
                        }
                        state.set(outcome);
                    })
                    .await;

                    if !applied {
                        gloo::console::debug!("Discarded result of a superseded fetch");
                    }
                });
            }

            move || cycle.cancel()
        });
    }

    state
}
