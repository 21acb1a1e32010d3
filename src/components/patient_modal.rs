//! Add/edit patient modal with an embedded custom-questions editor.

#[cfg(test)]
#[path = "patient_modal_test.rs"]
mod patient_modal_test;

use leptos::prelude::*;

use crate::components::questions_editor::QuestionsEditor;
use crate::net::api::ApiClient;
use crate::net::types::{LANGUAGES, Patient, PatientType};
use crate::state::patients::PatientForm;
use crate::util::questions;

/// Persist a draft: create or update the patient, then store its questions.
///
/// A new patient only gets a questions call when the draft has non-blank
/// questions. An edit always replaces the questions, and a failure there is
/// logged rather than failing the save.
///
/// # Errors
///
/// Returns a user-facing message when the draft is incomplete or the
/// patient request fails.
pub async fn save_patient(client: &ApiClient, editing: Option<i64>, draft: &PatientForm) -> Result<(), String> {
    let list = questions::non_blank(&draft.questions);
    match editing {
        None => {
            let new = draft.to_new_patient().map_err(str::to_owned)?;
            let created = client.create_patient(&new).await.map_err(|e| e.to_string())?;
            if !list.is_empty() {
                client
                    .set_patient_questions(created.id, &list)
                    .await
                    .map_err(|e| e.to_string())?;
            }
        }
        Some(id) => {
            let update = draft.to_update().map_err(str::to_owned)?;
            client.update_patient(id, &update).await.map_err(|e| e.to_string())?;
            if let Err(e) = client.set_patient_questions(id, &list).await {
                log::warn!("question update failed for patient {id}: {e}");
            }
        }
    }
    Ok(())
}

/// Modal form for creating (`existing = None`) or editing a patient.
#[component]
pub fn PatientModal(
    existing: Option<Patient>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let editing_id = existing.as_ref().map(|p| p.id);
    let form = RwSignal::new(existing.as_ref().map(PatientForm::from_patient).unwrap_or_default());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let show_questions = RwSignal::new(false);

    let title = if editing_id.is_some() { "Edit Patient" } else { "Add New Patient" };
    let submit_label = move || match (editing_id.is_some(), busy.get()) {
        (true, true) => "Saving...",
        (true, false) => "Save Changes",
        (false, true) => "Adding...",
        (false, false) => "Add Patient",
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let draft = form.get_untracked();
        let client = client.clone();
        busy.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            match save_patient(&client, editing_id, &draft).await {
                Ok(()) => {
                    busy.set(false);
                    on_saved.run(());
                    on_close.run(());
                }
                Err(msg) => {
                    error.set(Some(msg));
                    busy.set(false);
                }
            }
        });
    };

    let on_questions_saved = Callback::new(move |list: Vec<String>| {
        form.update(|f| f.questions = list);
        show_questions.set(false);
    });
    let on_questions_closed = Callback::new(move |()| show_questions.set(false));

    let language_options = LANGUAGES
        .iter()
        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
        .collect::<Vec<_>>();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--patient" on:click=move |ev| ev.stop_propagation()>
                <div class="dialog__header">
                    <h2>{title}</h2>
                    <button class="dialog__close" type="button" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </div>
                <form class="patient-form" on:submit=on_submit>
                    <label class="dialog__label">
                        "Patient Name *"
                        <input
                            class="dialog__input"
                            type="text"
                            required=true
                            placeholder="John Doe"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| {
                                let v = event_target_value(&ev);
                                form.update(|f| f.name = v);
                            }
                        />
                    </label>
                    <label class="dialog__label">
                        "Phone Number *"
                        <input
                            class="dialog__input"
                            type="tel"
                            required=true
                            placeholder="+919876543210"
                            prop:value=move || form.with(|f| f.phone.clone())
                            on:input=move |ev| {
                                let v = event_target_value(&ev);
                                form.update(|f| f.phone = v);
                            }
                        />
                    </label>
                    <label class="dialog__label">
                        "Patient Type *"
                        <select
                            class="dialog__input"
                            prop:value=move || form.with(|f| f.patient_type.as_str())
                            on:change=move |ev| {
                                let v = PatientType::from_form_value(&event_target_value(&ev));
                                form.update(|f| f.patient_type = v);
                            }
                        >
                            <option value="opd">"OPD"</option>
                            <option value="discharged">"Discharged"</option>
                        </select>
                    </label>
                    <label class="dialog__label">
                        "Age *"
                        <input
                            class="dialog__input"
                            type="number"
                            required=true
                            min="1"
                            max="120"
                            placeholder="35"
                            prop:value=move || form.with(|f| f.age.clone())
                            on:input=move |ev| {
                                let v = event_target_value(&ev);
                                form.update(|f| f.age = v);
                            }
                        />
                    </label>
                    <label class="dialog__label">
                        "Preferred Language *"
                        <select
                            class="dialog__input"
                            prop:value=move || form.with(|f| f.language.clone())
                            on:change=move |ev| {
                                let v = event_target_value(&ev);
                                form.update(|f| f.language = v);
                            }
                        >
                            {language_options}
                        </select>
                    </label>
                    <div class="dialog__label">
                        "Custom Questions"
                        <button
                            class="btn patient-form__questions"
                            type="button"
                            on:click=move |_| show_questions.set(true)
                        >
                            {move || form.with(|f| questions::summary(f.questions.len()))}
                        </button>
                    </div>
                    <Show when=move || error.get().is_some()>
                        <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {submit_label}
                        </button>
                    </div>
                </form>
            </div>
        </div>
        <Show when=move || show_questions.get()>
            <QuestionsEditor
                patient_name=form.with_untracked(|f| if f.name.is_empty() { "New Patient".to_owned() } else { f.name.clone() })
                initial=form.with_untracked(|f| f.questions.clone())
                on_save=on_questions_saved
                on_close=on_questions_closed
            />
        </Show>
    }
}
