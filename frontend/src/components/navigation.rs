// Selected-record channel owned by the navigation shell.
//
// The table hands a full record to the detail view instead of a fetch-by-id.
// The record rides on the history entry it was pushed with, so back and
// forward land on the record that entry was opened for. It lives only in
// memory: a page reload reaches the detail route with nothing selected.
use std::rc::Rc;

use railease_shared::ComplaintRecord;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

/// Callback that opens the detail view for a record.
#[hook]
pub fn use_open_complaint() -> Callback<ComplaintRecord> {
    let navigator = use_navigator();

    Callback::from(move |record: ComplaintRecord| match &navigator {
        Some(navigator) => {
            log::debug!("opening complaint {}", record.reference_id);
            navigator.push_with_state(&Route::ComplaintDetails, record);
        }
        None => log::warn!(
            "no router available; cannot open complaint {}",
            record.reference_id
        ),
    })
}

/// The record carried by the current history entry, if any.
#[hook]
pub fn use_selected_complaint() -> Option<Rc<ComplaintRecord>> {
    use_location().and_then(|location| location.state::<ComplaintRecord>())
}
