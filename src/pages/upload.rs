use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader,
    CardTitle, Input, Label, Spinner, TabsList, TabsTrigger, Textarea,
};
use crate::models::{MaterialKind, NewMaterial};
use crate::routing::AppRoute;
use crate::state::AppContext;
use crate::util::{is_http_url, schedule_or_run};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use strum::IntoEnumIterator;
use wasm_bindgen::JsCast;

/// Simulated processing time before the material is saved.
const PROCESSING_DELAY_MS: i32 = 1_500;

const MAX_PDF_BYTES: f64 = 50.0 * 1024.0 * 1024.0;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SelectedFile {
    pub name: String,
    pub size_bytes: f64,
}

/// Form contents as entered, before validation.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct UploadForm {
    pub file: Option<SelectedFile>,
    pub url: String,
    pub note_title: String,
    pub note_body: String,
}

/// Toast title and description for a rejected form.
pub(crate) type Rejection = (&'static str, String);

pub(crate) fn build_material(kind: MaterialKind, form: &UploadForm) -> Result<NewMaterial, Rejection> {
    match kind {
        MaterialKind::Pdf => {
            let Some(file) = &form.file else {
                return Err(("No file selected", "Please select a PDF to upload".to_string()));
            };
            if !file.name.to_lowercase().ends_with(".pdf") {
                return Err(("Unsupported file", format!("{} is not a PDF", file.name)));
            }
            if file.size_bytes > MAX_PDF_BYTES {
                return Err(("File too large", "PDF files are limited to 50MB".to_string()));
            }
            Ok(NewMaterial {
                kind,
                name: file.name.clone(),
                url: None,
                content: None,
            })
        }
        MaterialKind::Link => {
            let url = form.url.trim();
            if !is_http_url(url) {
                return Err(("Invalid URL", "Please enter a valid URL".to_string()));
            }
            Ok(NewMaterial {
                kind,
                name: url.to_string(),
                url: Some(url.to_string()),
                content: None,
            })
        }
        MaterialKind::Note => {
            let title = form.note_title.trim();
            if title.is_empty() {
                return Err(("Missing title", "Give your note a title".to_string()));
            }
            let body = form.note_body.trim();
            Ok(NewMaterial {
                kind,
                name: title.to_string(),
                url: None,
                content: (!body.is_empty()).then(|| body.to_string()),
            })
        }
    }
}

fn tab_label(kind: MaterialKind) -> &'static str {
    match kind {
        MaterialKind::Pdf => "Upload PDF",
        MaterialKind::Link => "Enter URL",
        MaterialKind::Note => "Write Note",
    }
}

fn format_megabytes(bytes: f64) -> String {
    format!("{:.2} MB", bytes / 1024.0 / 1024.0)
}

#[component]
pub fn UploadPage() -> impl IntoView {
    let app = expect_context::<AppContext>().0;
    let toasts = app.toasts;
    let navigate = StoredValue::new(use_navigate());

    let tab: RwSignal<MaterialKind> = RwSignal::new(MaterialKind::Pdf);
    let file: RwSignal<Option<SelectedFile>> = RwSignal::new(None);
    let url: RwSignal<String> = RwSignal::new(String::new());
    let note_title: RwSignal<String> = RwSignal::new(String::new());
    let note_body: RwSignal<String> = RwSignal::new(String::new());
    let uploading: RwSignal<bool> = RwSignal::new(false);

    let on_file_change = move |ev: web_sys::Event| {
        let picked = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
            .map(|f| SelectedFile {
                name: f.name(),
                size_bytes: f.size(),
            });
        if picked.is_some() {
            file.set(picked);
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if uploading.get_untracked() {
            return;
        }

        let kind = tab.get_untracked();
        let form = UploadForm {
            file: file.get_untracked(),
            url: url.get_untracked(),
            note_title: note_title.get_untracked(),
            note_body: note_body.get_untracked(),
        };
        let material = match build_material(kind, &form) {
            Ok(m) => m,
            Err((title, description)) => {
                toasts.error(title, description);
                return;
            }
        };
        let Some(notebook) = app.notebooks.active_notebook_untracked() else {
            toasts.error("No notebook selected", "Pick a notebook on the dashboard first.");
            return;
        };

        uploading.set(true);
        let auth = app.auth();
        let notebooks = app.notebooks;
        let _ = schedule_or_run(PROCESSING_DELAY_MS, move || {
            spawn_local(async move {
                let name = material.name.clone();
                match notebooks.add_material(auth, notebook.id, material).await {
                    Ok(_) => {
                        toasts.success(
                            "Material added",
                            format!("{name} is ready to explore in {}", notebook.name),
                        );
                        let _ = uploading.try_set(false);
                        navigate.try_with_value(|nav| {
                            nav(AppRoute::SmartNotes.path(), Default::default())
                        });
                    }
                    Err(e) => {
                        toasts.error("Upload failed", e.to_string());
                        let _ = uploading.try_set(false);
                    }
                }
            });
        });
    };

    let submit_label = move || match tab.get() {
        MaterialKind::Pdf => "Upload and Process",
        MaterialKind::Link => "Process URL",
        MaterialKind::Note => "Save Note",
    };

    view! {
        <div class="mx-auto max-w-3xl space-y-6">
            <h1 class="text-3xl font-bold">"Add Learning Material"</h1>

            <TabsList class="grid w-full grid-cols-3">
                {MaterialKind::iter()
                    .map(|kind| {
                        view! {
                            <TabsTrigger
                                active=Signal::derive(move || tab.get() == kind)
                                on:click=move |_| {
                                    if !uploading.get_untracked() {
                                        tab.set(kind);
                                    }
                                }
                            >
                                {tab_label(kind)}
                            </TabsTrigger>
                        }
                    })
                    .collect_view()}
            </TabsList>

            <Card>
                <form on:submit=on_submit class="flex flex-col gap-4">
                    <CardHeader>
                        <CardTitle>{move || tab_label(tab.get())}</CardTitle>
                        <CardDescription>
                            {move || match tab.get() {
                                MaterialKind::Pdf => "Upload a PDF document to analyze and study",
                                MaterialKind::Link => "Enter a URL to a webpage or online document",
                                MaterialKind::Note => "Write a note to keep alongside your materials",
                            }}
                        </CardDescription>
                    </CardHeader>

                    <CardContent class="space-y-4">
                        <Show when=move || tab.get() == MaterialKind::Pdf fallback=|| ().into_view()>
                            <div class="grid gap-2">
                                <Label html_for="pdf">"PDF File"</Label>
                                <div class="flex flex-col items-center gap-2 rounded-md border-2 border-dashed p-8 text-center">
                                    {move || match file.get() {
                                        Some(f) => view! {
                                            <p class="text-sm font-medium">{f.name}</p>
                                            <p class="text-xs text-muted-foreground">{format_megabytes(f.size_bytes)}</p>
                                            <Button
                                                variant=ButtonVariant::Outline
                                                size=ButtonSize::Sm
                                                attr:r#type="button"
                                                attr:disabled=move || uploading.get()
                                                on:click=move |_| file.set(None)
                                            >
                                                "Change file"
                                            </Button>
                                        }
                                        .into_any(),
                                        None => view! {
                                            <p class="text-sm font-medium">"Click to choose a file"</p>
                                            <p class="text-xs text-muted-foreground">"Supports PDF files up to 50MB"</p>
                                            <input
                                                id="pdf"
                                                type="file"
                                                accept=".pdf"
                                                class="hidden"
                                                on:change=on_file_change
                                            />
                                            <label
                                                for="pdf"
                                                class="inline-flex h-9 cursor-pointer items-center justify-center rounded-md bg-primary px-4 text-sm font-medium text-primary-foreground hover:bg-primary/90"
                                            >
                                                "Select file"
                                            </label>
                                        }
                                        .into_any(),
                                    }}
                                </div>
                            </div>
                        </Show>

                        <Show when=move || tab.get() == MaterialKind::Link fallback=|| ().into_view()>
                            <div class="grid gap-2">
                                <Label html_for="url">"URL"</Label>
                                <Input
                                    id="url"
                                    r#type="url"
                                    placeholder="https://example.com/document"
                                    bind_value=url
                                    disabled=Signal::derive(move || uploading.get())
                                />
                                <p class="text-xs text-muted-foreground">
                                    "Works with articles, research papers and online documents"
                                </p>
                            </div>
                        </Show>

                        <Show when=move || tab.get() == MaterialKind::Note fallback=|| ().into_view()>
                            <div class="grid gap-2">
                                <Label html_for="note-title">"Title"</Label>
                                <Input
                                    id="note-title"
                                    placeholder="Lecture 3 recap"
                                    bind_value=note_title
                                    disabled=Signal::derive(move || uploading.get())
                                />
                                <Label html_for="note-body">"Note"</Label>
                                <Textarea
                                    id="note-body"
                                    placeholder="Write anything worth remembering..."
                                    bind_value=note_body
                                    disabled=Signal::derive(move || uploading.get())
                                />
                            </div>
                        </Show>
                    </CardContent>

                    <CardFooter>
                        <Button class="w-full" attr:r#type="submit" attr:disabled=move || uploading.get()>
                            <Show when=move || uploading.get() fallback=|| ().into_view()>
                                <Spinner />
                            </Show>
                            {move || if uploading.get() { "Processing..." } else { submit_label() }}
                        </Button>
                    </CardFooter>
                </form>
            </Card>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf(name: &str, size_bytes: f64) -> UploadForm {
        UploadForm {
            file: Some(SelectedFile {
                name: name.to_string(),
                size_bytes,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_pdf_requires_a_file() {
        let err = build_material(MaterialKind::Pdf, &UploadForm::default()).unwrap_err();
        assert_eq!(err.0, "No file selected");
    }

    #[test]
    fn test_pdf_checks_extension_and_size() {
        assert!(build_material(MaterialKind::Pdf, &pdf("notes.docx", 10.0)).is_err());
        assert!(build_material(MaterialKind::Pdf, &pdf("big.pdf", MAX_PDF_BYTES + 1.0)).is_err());

        let m = build_material(MaterialKind::Pdf, &pdf("Neural_Networks.PDF", 2048.0)).unwrap();
        assert_eq!(m.kind, MaterialKind::Pdf);
        assert_eq!(m.name, "Neural_Networks.PDF");
        assert_eq!(m.url, None);
    }

    #[test]
    fn test_link_requires_http_url() {
        let mut form = UploadForm::default();
        form.url = "not a url".to_string();
        assert_eq!(build_material(MaterialKind::Link, &form).unwrap_err().0, "Invalid URL");

        form.url = "  https://arxiv.org/abs/1706.03762 ".to_string();
        let m = build_material(MaterialKind::Link, &form).unwrap();
        assert_eq!(m.url.as_deref(), Some("https://arxiv.org/abs/1706.03762"));
    }

    #[test]
    fn test_note_requires_title_and_drops_blank_body() {
        let mut form = UploadForm::default();
        form.note_body = "body".to_string();
        assert_eq!(build_material(MaterialKind::Note, &form).unwrap_err().0, "Missing title");

        form.note_title = " Week 1 ".to_string();
        form.note_body = "   ".to_string();
        let m = build_material(MaterialKind::Note, &form).unwrap();
        assert_eq!(m.name, "Week 1");
        assert_eq!(m.content, None);
    }

    #[test]
    fn test_megabytes_format() {
        assert_eq!(format_megabytes(1024.0 * 1024.0 * 1.5), "1.50 MB");
    }
}
