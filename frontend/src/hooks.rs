use std::cell::Cell;
use std::rc::Rc;

use railease_shared::ComplaintRecord;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::use_config;
use crate::services::complaints;

/// Fetch lifecycle of a view. Only ever moves forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ComplaintsHandle {
    pub state: LoadState,
    pub complaints: Rc<Vec<ComplaintRecord>>,
}

impl ComplaintsHandle {
    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }
}

/// Fetch the complaints collection once when the calling view mounts.
///
/// A failed request is logged and leaves the collection as it was; either way
/// the view becomes ready. Responses that land after unmount are dropped.
#[hook]
pub fn use_complaints() -> ComplaintsHandle {
    let config = use_config();
    let complaints = use_state(|| Rc::new(Vec::<ComplaintRecord>::new()));
    let state = use_state(|| LoadState::Loading);

    {
        let complaints = complaints.clone();
        let state = state.clone();

        use_effect_with(config.complaints_url, move |url| {
            let mounted = Rc::new(Cell::new(true));
            let alive = mounted.clone();
            let url = url.clone();

            spawn_local(async move {
                let result = complaints::fetch_all(&url).await;
                if !alive.get() {
                    log::debug!("view unmounted before {} answered; dropping response", url);
                    return;
                }

                match result {
                    Ok(records) => {
                        log::debug!("loaded {} complaints from {}", records.len(), url);
                        complaints.set(Rc::new(records));
                    }
                    Err(e) => {
                        log::error!("Error fetching complaints from {} ({}): {}", url, e.code(), e);
                    }
                }
                state.set(LoadState::Ready);
            });

            move || mounted.set(false)
        });
    }

    ComplaintsHandle {
        state: *state,
        complaints: (*complaints).clone(),
    }
}
