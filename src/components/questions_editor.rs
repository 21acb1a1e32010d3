//! Modal editor for a patient's custom follow-up questions.

use leptos::prelude::*;

use crate::util::questions;

/// Edit a list of questions. `on_save` receives the list with blank
/// entries removed.
#[component]
pub fn QuestionsEditor(
    patient_name: String,
    initial: Vec<String>,
    on_save: Callback<Vec<String>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let seed = if initial.is_empty() { vec![String::new()] } else { initial };
    let drafts = RwSignal::new(seed);
    // Rows are rebuilt only when the count changes so typing keeps focus.
    let count = Memo::new(move |_| drafts.with(Vec::len));

    let on_add = move |_| drafts.update(|d| d.push(String::new()));
    let on_save_click = move |_| on_save.run(questions::non_blank(&drafts.get_untracked()));

    let rows = move || {
        (0..count.get())
            .map(|idx| {
                let value = move || drafts.with(|d| d.get(idx).cloned().unwrap_or_default());
                view! {
                    <div class="questions-editor__row">
                        <span class="questions-editor__index">{format!("{}.", idx + 1)}</span>
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="Type a question"
                            prop:value=value
                            on:input=move |ev| {
                                let text = event_target_value(&ev);
                                drafts.update(|d| {
                                    if let Some(slot) = d.get_mut(idx) {
                                        *slot = text;
                                    }
                                });
                            }
                        />
                        <button
                            class="btn questions-editor__remove"
                            type="button"
                            on:click=move |_| {
                                drafts.update(|d| {
                                    if idx < d.len() {
                                        d.remove(idx);
                                    }
                                });
                            }
                        >
                            "Remove"
                        </button>
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--questions" on:click=move |ev| ev.stop_propagation()>
                <h2>"Custom Questions"</h2>
                <p class="dialog__subtitle">{patient_name}</p>
                <div class="questions-editor__list">{rows}</div>
                <button class="btn questions-editor__add" type="button" on:click=on_add>
                    "+ Add Question"
                </button>
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" type="button" on:click=on_save_click>
                        "Save Questions"
                    </button>
                </div>
            </div>
        </div>
    }
}
