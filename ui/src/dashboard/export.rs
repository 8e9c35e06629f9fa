use dioxus::prelude::*;
use serde::Serialize;

use crate::{
    report::{Metrics, ReportView},
    t,
};

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Working(String),
    Done(String),
    Error(String),
}

/// What gets written for a JSON export: the report plus the selection that produced it.
#[derive(Debug, Clone, Serialize)]
struct ReportExport<'a> {
    view: ReportView,
    center: Option<&'a str>,
    metrics: &'a Metrics,
}

#[derive(Clone, Copy, Debug)]
enum ExportFormat {
    Json,
    Csv,
}

#[component]
pub fn ReportExportPanel(metrics: Metrics, view: ReportView, center: Option<String>) -> Element {
    let status = use_signal(|| ExportStatus::Idle);
    let busy = use_signal(|| false);

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Working(label) => Some(("report-card__meta".to_string(), label.clone())),
        ExportStatus::Done(message) => Some((
            "report-card__meta report-card__meta--success".to_string(),
            format!("✅ {message}"),
        )),
        ExportStatus::Error(err) => Some((
            "report-card__meta report-card__meta--error".to_string(),
            format!("⚠️ {err}"),
        )),
    };

    let make_handler = |format: ExportFormat| {
        let metrics = metrics.clone();
        let center = center.clone();
        let mut status_signal = status;
        let mut busy_signal = busy;
        move |_| {
            if busy_signal() {
                return;
            }
            busy_signal.set(true);
            status_signal.set(ExportStatus::Working(working_label(format)));
            let metrics = metrics.clone();
            let center = center.clone();

            #[cfg(target_arch = "wasm32")]
            {
                wasm_bindgen_futures::spawn_local(async move {
                    let outcome = perform_export(format, metrics, view, center).await;
                    match outcome {
                        Ok(message) => status_signal.set(ExportStatus::Done(message)),
                        Err(err) => status_signal.set(ExportStatus::Error(err)),
                    }
                    busy_signal.set(false);
                });
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let outcome =
                    futures::executor::block_on(perform_export(format, metrics, view, center));
                match outcome {
                    Ok(message) => status_signal.set(ExportStatus::Done(message)),
                    Err(err) => {
                        tracing::warn!("export failed: {err}");
                        status_signal.set(ExportStatus::Error(err));
                    }
                }
                busy_signal.set(false);
            }
        }
    };

    let json_handler = make_handler(ExportFormat::Json);
    let csv_handler = make_handler(ExportFormat::Csv);

    rsx! {
        section { class: "report-card report-export",
            div { class: "report-card__header",
                h2 { {t!("export-title")} }
            }
            p { {t!("export-intro")} }

            div { class: "report-export__actions",
                button {
                    r#type: "button",
                    class: "button button--primary",
                    disabled: busy(),
                    onclick: json_handler,
                    {t!("export-json")}
                }
                button {
                    r#type: "button",
                    class: "button",
                    disabled: busy(),
                    onclick: csv_handler,
                    {t!("export-csv")}
                }
            }

            if let Some((class_name, message)) = feedback {
                p { class: "{class_name}", "{message}" }
            }
        }
    }
}

async fn perform_export(
    format: ExportFormat,
    metrics: Metrics,
    view: ReportView,
    center: Option<String>,
) -> Result<String, String> {
    let (extension, mime, payload) = match format {
        ExportFormat::Json => {
            let export = ReportExport {
                view,
                center: center.as_deref(),
                metrics: &metrics,
            };
            let json = serde_json::to_string_pretty(&export).map_err(|err| err.to_string())?;
            ("json", "application/json", json)
        }
        ExportFormat::Csv => ("csv", "text/csv", build_csv(&metrics, view, center.as_deref())),
    };

    let filename = format!("alarm-report-{}.{extension}", timestamp_slug());
    let delivery = download_bytes(&filename, mime, payload.into_bytes()).await?;
    tracing::info!(file = %filename, "report exported");
    Ok(delivery_message(delivery))
}

fn working_label(format: ExportFormat) -> String {
    match format {
        ExportFormat::Json => t!("export-preparing-json"),
        ExportFormat::Csv => t!("export-preparing-csv"),
    }
}

/// Desktop exports report the saved path; web exports only start a download.
fn delivery_message(delivery: Option<String>) -> String {
    match delivery {
        Some(path) => t!("export-saved", path = path),
        None => t!("export-download-started"),
    }
}

/// Long-format CSV: one `section,key,value` row per figure.
fn build_csv(metrics: &Metrics, view: ReportView, center: Option<&str>) -> String {
    let optional = |value: Option<f64>| value.map(|v| v.to_string()).unwrap_or_default();

    let mut rows: Vec<[String; 3]> = vec![
        ["section".into(), "key".into(), "value".into()],
        ["summary".into(), "view".into(), view.slug().into()],
        [
            "summary".into(),
            "center".into(),
            center.unwrap_or_default().into(),
        ],
        ["summary".into(), "count".into(), metrics.count.to_string()],
        [
            "summary".into(),
            "mean_minutes".into(),
            optional(metrics.mean_minutes),
        ],
        [
            "summary".into(),
            "min_minutes".into(),
            optional(metrics.min_minutes),
        ],
        [
            "summary".into(),
            "max_minutes".into(),
            optional(metrics.max_minutes),
        ],
    ];

    for (band, count) in metrics.bands.iter() {
        rows.push(["band".into(), band.label().into(), count.to_string()]);
    }
    for entry in &metrics.per_center {
        rows.push(["center".into(), entry.center.clone(), entry.count.to_string()]);
    }
    for day in &metrics.daily {
        rows.push(["daily".into(), day.date.to_string(), day.count.to_string()]);
    }

    let mut csv = String::new();
    for row in rows {
        let line = row
            .iter()
            .map(|field| escape_csv(field))
            .collect::<Vec<_>>()
            .join(",");
        csv.push_str(&line);
        csv.push('\n');
    }

    csv
}

fn escape_csv(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let needs_quotes = value.contains(',') || value.contains('"') || value.contains('\n');
    if needs_quotes {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}

fn timestamp_slug() -> String {
    use time::{macros::format_description, OffsetDateTime};

    OffsetDateTime::now_utc()
        .format(&format_description!(
            "[year][month][day]_[hour][minute][second]"
        ))
        .unwrap_or_else(|_| "export".into())
}

async fn download_bytes(
    filename: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> Result<Option<String>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| "Failed to create blob".to_string())?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| "Unable to create download".to_string())?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("Document unavailable")?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| "Unable to create anchor")?
            .dyn_into()
            .map_err(|_| "Anchor cast failed")?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or("Missing body")?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::fs;
        use std::io::Write;

        let _ = mime;
        let dir = desktop_export_dir()?;
        fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
        let path = dir.join(filename);
        let mut file = fs::File::create(&path).map_err(|err| err.to_string())?;
        file.write_all(&bytes).map_err(|err| err.to_string())?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn desktop_export_dir() -> Result<std::path::PathBuf, String> {
    let dirs = directories::ProjectDirs::from("com", "Alarmdash", "Alarmdash")
        .ok_or("Unable to determine export directory")?;
    Ok(dirs.data_dir().join("exports"))
}
