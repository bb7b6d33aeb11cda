use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

use crate::models::error::AppError;
use crate::services::query::{Query, QueryClientHandle};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, PartialEq, Debug)]
pub enum QueryState<T> {
    /// The query is disabled and has not dispatched anything.
    Idle,
    Loading,
    Loaded(Rc<T>),
    Error(String),
}

impl<T> QueryState<T> {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Returns the data if it is loaded
    pub const fn data(&self) -> Option<&Rc<T>> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

/// What an effect run does before any request goes out.
#[derive(Debug)]
pub enum Dispatch<T> {
    /// Disabled: nothing is sent and the state is `Idle`.
    Skip,
    /// First run or changed parameters: show `Loading`.
    Load,
    /// Same query again: `kept` stays on screen while the request runs.
    Refetch { kept: Option<Rc<T>> },
}

/// Decides how to dispatch `query`, given the query the hook last issued
/// and the state currently shown.
pub fn plan_dispatch<Q: PartialEq, T>(
    enabled: bool,
    last: Option<&Q>,
    query: &Q,
    current: &QueryState<T>,
) -> Dispatch<T> {
    if !enabled {
        Dispatch::Skip
    } else if last == Some(query) {
        Dispatch::Refetch {
            kept: current.data().cloned(),
        }
    } else {
        Dispatch::Load
    }
}

/// State to publish once a request settles. `None` leaves the current
/// state as it is: the request was superseded, or a refetch failed while
/// older data is still showing.
pub fn settle<T>(
    dispatch: &Dispatch<T>,
    result: Result<T, AppError>,
    superseded: bool,
) -> Option<QueryState<T>> {
    if superseded {
        return None;
    }
    match (result, dispatch) {
        (Ok(data), _) => Some(QueryState::Loaded(Rc::new(data))),
        (Err(e), Dispatch::Refetch { kept: Some(_) }) => {
            tracing::warn!(error = %e, "refetch failed, keeping last data");
            None
        }
        (Err(e), _) => Some(QueryState::Error(e.to_string())),
    }
}

/// Runs `query` through the shared query client.
///
/// A disabled query stays `Idle` and never reaches the network. When the
/// query or its parameters change, results of the superseded request are
/// dropped. Queries with a refetch interval poll while mounted; a failed
/// refetch keeps the last good data.
#[hook]
pub fn use_query<Q: Query>(query: Q, enabled: bool) -> UseStateHandle<QueryState<Q::Output>> {
    let client = use_context::<QueryClientHandle>();
    let state = use_state(|| {
        if enabled {
            QueryState::Loading
        } else {
            QueryState::Idle
        }
    });
    let trigger = use_state(|| 0u32); // Polling trigger
    let last_query = use_mut_ref(|| None::<Q>);

    {
        let state = state.clone();
        let trigger_value = *trigger;

        use_effect_with((query, enabled, trigger_value), move |(query, enabled, _)| {
            let aborted = Rc::new(Cell::new(false));
            let dispatch = plan_dispatch(*enabled, last_query.borrow().as_ref(), query, &*state);

            match (dispatch, client) {
                (Dispatch::Skip, _) => {
                    // Re-enabling starts from Loading again
                    *last_query.borrow_mut() = None;
                    state.set(QueryState::Idle);
                }
                (_, None) => {
                    tracing::error!("use_query called outside a QueryClientHandle provider");
                    state.set(QueryState::Error("Query client unavailable".to_string()));
                }
                (dispatch, Some(client)) => {
                    if matches!(dispatch, Dispatch::Load) {
                        state.set(QueryState::Loading);
                        *last_query.borrow_mut() = Some(query.clone());
                    }

                    let query = query.clone();
                    let aborted_check = aborted.clone();
                    spawn_local(async move {
                        let result = client.fetch(&query).await;
                        if let Some(next) = settle(&dispatch, result, aborted_check.get()) {
                            state.set(next);
                        }

                        if let Some(interval) = query.options().refetch_interval_ms {
                            if !aborted_check.get() {
                                TimeoutFuture::new(interval).await;
                                if !aborted_check.get() {
                                    trigger.set(trigger_value.wrapping_add(1));
                                }
                            }
                        }
                    });
                }
            }

            move || {
                aborted.set(true);
            }
        });
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_state_accessors() {
        let loaded = QueryState::Loaded(Rc::new(5));
        assert_eq!(loaded.data().map(|d| **d), Some(5));
        assert!(!loaded.is_loading());

        let idle: QueryState<i32> = QueryState::Idle;
        assert!(idle.data().is_none());
        assert!(!idle.is_loading());

        let err: QueryState<i32> = QueryState::Error("boom".into());
        assert!(err.is_error());
        assert_eq!(err.error(), Some("boom"));
    }

    fn upstream_failure() -> AppError {
        AppError::Upstream {
            status: 500,
            status_text: "Internal Server Error".to_string(),
            path: "/NEM/v1/PWS/NEMDashboard/priceAndDemand".to_string(),
        }
    }

    #[test]
    fn test_disabled_query_is_never_dispatched() {
        let loaded = QueryState::Loaded(Rc::new(1));
        assert!(matches!(plan_dispatch(false, None, &"NSW1", &loaded), Dispatch::Skip));
        assert!(matches!(
            plan_dispatch(false, Some(&"NSW1"), &"NSW1", &loaded),
            Dispatch::Skip
        ));
    }

    #[test]
    fn test_first_run_and_changed_query_load() {
        let idle: QueryState<i32> = QueryState::Idle;
        assert!(matches!(plan_dispatch(true, None, &"NSW1", &idle), Dispatch::Load));

        let loaded = QueryState::Loaded(Rc::new(1));
        assert!(matches!(
            plan_dispatch(true, Some(&"NSW1"), &"VIC1", &loaded),
            Dispatch::Load
        ));
    }

    #[test]
    fn test_changed_query_failure_is_an_error() {
        // Data for the old parameters must not mask a failure for the new ones
        let loaded = QueryState::Loaded(Rc::new(1));
        let dispatch = plan_dispatch(true, Some(&"NSW1"), &"VIC1", &loaded);

        let next = settle(&dispatch, Err::<i32, _>(upstream_failure()), false);
        assert_eq!(
            next,
            Some(QueryState::Error(
                "AEMO API error: 500 Internal Server Error (/NEM/v1/PWS/NEMDashboard/priceAndDemand)"
                    .to_string()
            ))
        );
    }

    #[test]
    fn test_failed_refetch_keeps_last_data() {
        let loaded = QueryState::Loaded(Rc::new(1));
        let dispatch = plan_dispatch(true, Some(&"NSW1"), &"NSW1", &loaded);
        assert!(matches!(&dispatch, Dispatch::Refetch { kept: Some(d) } if **d == 1));

        assert_eq!(settle(&dispatch, Err(upstream_failure()), false), None);
        assert_eq!(
            settle(&dispatch, Ok(2), false),
            Some(QueryState::Loaded(Rc::new(2)))
        );
    }

    #[test]
    fn test_refetch_without_data_reports_error() {
        let failed: QueryState<i32> = QueryState::Error("earlier".into());
        let dispatch = plan_dispatch(true, Some(&"NSW1"), &"NSW1", &failed);
        assert!(matches!(dispatch, Dispatch::Refetch { kept: None }));

        let next = settle(&dispatch, Err(AppError::Network("offline".into())), false);
        assert!(next.is_some_and(|s| s.is_error()));
    }

    #[test]
    fn test_superseded_result_is_dropped() {
        let idle: QueryState<i32> = QueryState::Idle;
        let dispatch = plan_dispatch(true, None, &"NSW1", &idle);
        assert_eq!(settle(&dispatch, Ok(7), true), None);
        assert_eq!(settle(&dispatch, Err(upstream_failure()), true), None);
    }
}
