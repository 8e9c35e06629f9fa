use dioxus::prelude::*;

use crate::{core::format, dashboard::DashboardState, report::ColumnMap, t};

/// File picker feeding the report builder. Every upload rebuilds the dataset.
#[component]
pub fn UploadPanel(state: Signal<DashboardState>, columns: ColumnMap) -> Element {
    let mut state = state;

    let on_upload = move |evt: FormEvent| {
        let columns = columns.clone();
        async move {
            let Some(files) = evt.files() else {
                return;
            };
            let Some(file_name) = files.files().into_iter().next() else {
                return;
            };

            tracing::debug!(file = %file_name, "reading upload");
            match files.read_file(&file_name).await {
                Some(bytes) => {
                    state.with_mut(|s| s.apply_upload(file_name, &bytes, &columns));
                }
                None => state.with_mut(|s| s.apply_read_failure(file_name)),
            }
        }
    };

    let snapshot = state.read();
    let status = match (&snapshot.dataset, &snapshot.error) {
        (Some(dataset), _) => Some((
            "report-upload__status report-upload__status--ok",
            t!(
                "upload-loaded",
                rows = format::format_count(dataset.len()),
                discarded = format::format_count(dataset.discarded())
            ),
        )),
        (None, Some(_)) => Some((
            "report-upload__status report-upload__status--error",
            t!("upload-error"),
        )),
        (None, None) => None,
    };
    let detail = snapshot.error.clone();
    let file_name = snapshot.file_name.clone();
    drop(snapshot);

    rsx! {
        section { class: "report-card report-upload",
            label { class: "report-upload__drop",
                span { class: "report-upload__prompt", {t!("upload-prompt")} }
                input {
                    r#type: "file",
                    class: "report-upload__input",
                    accept: ".xlsx,.xls,.xlsb,.ods",
                    multiple: false,
                    onchange: on_upload,
                }
            }

            if let Some(name) = file_name {
                span { class: "report-card__meta", "{name}" }
            }

            match status {
                Some((class_name, message)) => rsx! {
                    p { class: "{class_name}", "{message}" }
                    if let Some(detail) = detail {
                        p { class: "report-upload__detail", "{detail}" }
                    }
                },
                None => rsx! {
                    p { class: "report-card__placeholder", {t!("upload-waiting")} }
                },
            }
        }
    }
}
