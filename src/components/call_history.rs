//! Call history panel for one patient, with transcript drill-down.

#[cfg(test)]
#[path = "call_history_test.rs"]
mod call_history_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::types::{CallDetail, CallRecord, Patient};

/// One-line caption for a call entry.
pub fn call_label(call: &CallRecord) -> String {
    let mut label = format!("Call #{}", call.id);
    if let Some(status) = call.status.as_deref().filter(|s| !s.is_empty()) {
        label.push_str(" - ");
        label.push_str(status);
    }
    if let Some(secs) = call.duration {
        label.push_str(&format!(" ({secs:.0}s)"));
    }
    label
}

/// Transcript text, or a placeholder when the backend has none.
pub fn transcript_text(detail: &CallDetail) -> String {
    detail
        .transcript
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map_or_else(|| "No transcript available.".to_owned(), str::to_owned)
}

/// Modal listing a patient's calls. Selecting a call loads its transcript.
#[component]
pub fn CallHistory(patient: Patient, on_close: Callback<()>) -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let patient_id = patient.id;
    let selected = RwSignal::new(None::<i64>);

    let calls = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.get_patient_calls(patient_id).await.map_err(|e| e.to_string()) }
        }
    });

    let transcript = LocalResource::new(move || {
        let client = client.clone();
        let call_id = selected.get();
        async move {
            match call_id {
                Some(id) => client.get_call_transcript(id).await.map(Some).map_err(|e| e.to_string()),
                None => Ok(None),
            }
        }
    });

    let call_list = move || {
        calls.get().map(|result| match result {
            Ok(list) if list.is_empty() => view! { <p class="call-history__empty">"No calls yet."</p> }.into_any(),
            Ok(list) => view! {
                <ul class="call-history__list">
                    {list
                        .into_iter()
                        .map(|call| {
                            let id = call.id;
                            let summary = call.summary.clone().unwrap_or_default();
                            let when = call.created_at.clone().unwrap_or_default();
                            view! {
                                <li
                                    class=move || {
                                        if selected.get() == Some(id) {
                                            "call-history__item call-history__item--active"
                                        } else {
                                            "call-history__item"
                                        }
                                    }
                                    on:click=move |_| selected.set(Some(id))
                                >
                                    <span class="call-history__label">{call_label(&call)}</span>
                                    <span class="call-history__when">{when}</span>
                                    <p class="call-history__summary">{summary}</p>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            }
            .into_any(),
            Err(e) => view! { <p class="dialog__error">{format!("Failed to load calls: {e}")}</p> }.into_any(),
        })
    };

    let transcript_view = move || {
        transcript.get().map(|result| match result {
            Ok(Some(detail)) => view! { <pre class="call-history__transcript">{transcript_text(&detail)}</pre> }.into_any(),
            Ok(None) => view! { <p class="call-history__hint">"Select a call to view its transcript."</p> }.into_any(),
            Err(e) => view! { <p class="dialog__error">{format!("Failed to load transcript: {e}")}</p> }.into_any(),
        })
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--calls" on:click=move |ev| ev.stop_propagation()>
                <div class="dialog__header">
                    <h2>{format!("Call History - {}", patient.name)}</h2>
                    <button class="dialog__close" type="button" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </div>
                <div class="call-history">
                    <Suspense fallback=move || view! { <p>"Loading calls..."</p> }>{call_list}</Suspense>
                    <Suspense fallback=move || view! { <p>"Loading transcript..."</p> }>{transcript_view}</Suspense>
                </div>
            </div>
        </div>
    }
}
