//! Patients page: list, add/edit/delete, start calls, and call history.

#[cfg(test)]
#[path = "patients_test.rs"]
mod patients_test;

use leptos::prelude::*;

use crate::components::call_history::CallHistory;
use crate::components::patient_modal::PatientModal;
use crate::config::DASHBOARD_ROUTE;
use crate::net::api::ApiClient;
use crate::net::types::Patient;
use crate::state::patients::{ModalMode, PatientsState};

/// Short age/language/type line shown under a patient's name.
fn patient_details(patient: &Patient) -> String {
    let age = patient.age.map_or_else(|| "age n/a".to_owned(), |a| format!("{a} yrs"));
    let language = if patient.language.is_empty() { "english" } else { patient.language.as_str() };
    format!("{age} · {language} · {}", patient.patient_type.label())
}

fn dial_notice(patient: &Patient, result: Result<(), String>) -> String {
    match result {
        Ok(()) => format!("Call started for {}.", patient.name),
        Err(e) => format!("Could not start call for {}: {e}", patient.name),
    }
}

#[component]
pub fn PatientsPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let state = RwSignal::new(PatientsState::default());

    let patients = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.get_patients().await.map_err(|e| e.to_string()) }
        }
    });

    let on_modal_close = Callback::new(move |()| state.update(|s| s.modal = ModalMode::Closed));
    let on_saved = Callback::new(move |()| {
        state.update(|s| s.notice = Some("Patient saved.".to_owned()));
        patients.refetch();
    });
    let on_history_close = Callback::new(move |()| state.update(|s| s.history_for = None));

    let delete_patient = {
        let client = client.clone();
        Callback::new(move |patient: Patient| {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                let notice = match client.delete_patient(patient.id).await {
                    Ok(()) => format!("Deleted {}.", patient.name),
                    Err(e) => format!("Could not delete {}: {e}", patient.name),
                };
                state.update(|s| s.notice = Some(notice));
                patients.refetch();
            });
        })
    };

    let start_call = Callback::new(move |patient: Patient| {
        let client = client.clone();
        state.update(|s| s.dialing = Some(patient.id));
        leptos::task::spawn_local(async move {
            let result = client.initiate_call(patient.id).await.map(|_| ()).map_err(|e| e.to_string());
            let notice = dial_notice(&patient, result);
            state.update(|s| {
                s.dialing = None;
                s.notice = Some(notice);
            });
        });
    });

    let rows = move || {
        patients.get().map(|result| match result {
            Ok(list) if list.is_empty() => {
                view! { <p class="patients-page__empty">"No patients yet. Add one to get started."</p> }.into_any()
            }
            Ok(list) => view! {
                <table class="patients-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Phone"</th>
                            <th>"Details"</th>
                            <th>"Questions"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {list
                            .into_iter()
                            .map(|patient| {
                                let id = patient.id;
                                let details = patient_details(&patient);
                                let question_count = patient.custom_questions.as_slice().len();
                                let (edit, history, dial, delete) =
                                    (patient.clone(), patient.clone(), patient.clone(), patient.clone());
                                view! {
                                    <tr class="patients-table__row">
                                        <td>{patient.name.clone()}</td>
                                        <td>{patient.phone.clone()}</td>
                                        <td>{details}</td>
                                        <td>{question_count}</td>
                                        <td class="patients-table__actions">
                                            <button
                                                class="btn btn--primary"
                                                disabled=move || state.with(|s| s.dialing == Some(id))
                                                on:click=move |_| start_call.run(dial.clone())
                                            >
                                                {move || if state.with(|s| s.dialing == Some(id)) { "Calling..." } else { "Call" }}
                                            </button>
                                            <button
                                                class="btn"
                                                on:click=move |_| state.update(|s| s.history_for = Some(history.clone()))
                                            >
                                                "History"
                                            </button>
                                            <button
                                                class="btn"
                                                on:click=move |_| state.update(|s| s.modal = ModalMode::Edit(edit.clone()))
                                            >
                                                "Edit"
                                            </button>
                                            <button class="btn btn--danger" on:click=move |_| delete_patient.run(delete.clone())>
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </tbody>
                </table>
            }
            .into_any(),
            Err(e) => view! { <p class="patients-page__error">{format!("Failed to load patients: {e}")}</p> }.into_any(),
        })
    };

    view! {
        <div class="patients-page">
            <header class="patients-page__header">
                <h1>"Patients"</h1>
                <div class="patients-page__actions">
                    <a class="btn" href=DASHBOARD_ROUTE>"Account"</a>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| state.update(|s| s.modal = ModalMode::Add)
                    >
                        "+ Add Patient"
                    </button>
                </div>
            </header>

            <Show when=move || state.with(|s| s.notice.is_some())>
                <p class="patients-page__notice">{move || state.with(|s| s.notice.clone().unwrap_or_default())}</p>
            </Show>

            <Suspense fallback=move || view! { <p>"Loading patients..."</p> }>{rows}</Suspense>

            {move || match state.with(|s| s.modal.clone()) {
                ModalMode::Closed => None,
                ModalMode::Add => Some(view! { <PatientModal existing=None on_close=on_modal_close on_saved=on_saved/> }.into_any()),
                ModalMode::Edit(p) => Some(
                    view! { <PatientModal existing=Some(p) on_close=on_modal_close on_saved=on_saved/> }.into_any(),
                ),
            }}

            {move || {
                state
                    .with(|s| s.history_for.clone())
                    .map(|p| view! { <CallHistory patient=p on_close=on_history_close/> })
            }}
        </div>
    }
}
