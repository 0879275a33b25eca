use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u508_finance_screening::{DuplicateMode, FinanceScreening, TransformOptions};
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use web_sys::File;

use super::api::GlooTransport;
use super::controller::{UploadController, UploadView};
use super::error::UploadError;
use super::table::PreviewTable;
use crate::shared::export::{click_download, create_object_url, revoke_object_url, XLSX_MIME};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;

/// Signals and element refs of the page, bound to the controller
#[derive(Clone, Copy)]
pub struct WebView {
    file_input: NodeRef<html::Input>,
    duplicate_mode: RwSignal<String>,
    sent_label: RwSignal<String>,
    broker_label: RwSignal<String>,
    busy: RwSignal<bool>,
    summary: RwSignal<String>,
    table: RwSignal<PreviewTable>,
}

impl WebView {
    fn new(defaults: &TransformOptions) -> Self {
        Self {
            file_input: NodeRef::new(),
            duplicate_mode: RwSignal::new(defaults.duplicate_mode.clone()),
            sent_label: RwSignal::new(defaults.finance_sent_item_label.clone()),
            broker_label: RwSignal::new(defaults.finance_broker_item_label.clone()),
            busy: RwSignal::new(false),
            summary: RwSignal::new(String::new()),
            table: RwSignal::new(PreviewTable::default()),
        }
    }
}

impl UploadView for WebView {
    type File = File;

    fn selected_file(&self) -> Option<File> {
        self.file_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
    }

    fn duplicate_mode(&self) -> String {
        self.duplicate_mode.get_untracked()
    }

    fn finance_sent_item_label(&self) -> String {
        self.sent_label.get_untracked()
    }

    fn finance_broker_item_label(&self) -> String {
        self.broker_label.get_untracked()
    }

    fn set_busy(&self, busy: bool) {
        self.busy.set(busy);
    }

    fn show_summary(&self, text: String) {
        self.summary.set(text);
    }

    fn show_table(&self, table: PreviewTable) {
        self.table.set(table);
    }

    fn create_object_url(&self, content: Vec<u8>) -> Result<String, UploadError> {
        create_object_url(&content, XLSX_MIME).map_err(UploadError::Download)
    }

    fn trigger_download(&self, url: &str, filename: &str) -> Result<(), UploadError> {
        click_download(url, filename).map_err(UploadError::Download)
    }

    fn revoke_object_url(&self, url: &str) {
        revoke_object_url(url);
    }
}

#[component]
pub fn FinanceScreeningPage() -> impl IntoView {
    let web_view = WebView::new(&TransformOptions::default());
    let controller = StoredValue::new(UploadController::new(web_view, GlooTransport::new()));

    let busy = web_view.busy;
    let summary = web_view.summary;
    let table = web_view.table;

    let on_preview = move |_| {
        let controller = controller.get_value();
        spawn_local(async move { controller.preview().await });
    };
    let on_download = move |_| {
        let controller = controller.get_value();
        spawn_local(async move { controller.download().await });
    };
    let on_import = move |_| {
        let controller = controller.get_value();
        spawn_local(async move { controller.transform_and_import().await });
    };

    view! {
        <PageFrame page_id="u508_finance_screening--usecase" category=PAGE_CAT_USECASE>
            <div class="page__header">
                <h2>{FinanceScreening::display_name()}</h2>
                <p class="page__description">{FinanceScreening::description()}</p>
            </div>

            <div class="page__content finance-screening">
                <div class="finance-screening__form">
                    <label class="finance-screening__field">
                        <span>"Excel file"</span>
                        <input id="excel-file" type="file" accept=".xlsx,.xls" node_ref=web_view.file_input />
                    </label>

                    <label class="finance-screening__field">
                        <span>"Duplicate tank numbers"</span>
                        <Select value=web_view.duplicate_mode>
                            {DuplicateMode::ALL
                                .into_iter()
                                .map(|mode| view! { <option value=mode.as_str()>{mode.display_name()}</option> })
                                .collect_view()}
                        </Select>
                    </label>

                    <label class="finance-screening__field">
                        <span>"Finance sent item label"</span>
                        <Input value=web_view.sent_label />
                    </label>

                    <label class="finance-screening__field">
                        <span>"Finance broker item label"</span>
                        <Input value=web_view.broker_label />
                    </label>
                </div>

                <Space>
                    <Button appearance=ButtonAppearance::Primary on_click=on_preview disabled=busy>
                        "Preview"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=on_download disabled=busy>
                        "Download Excel"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=on_import disabled=busy>
                        "Transform & import"
                    </Button>
                </Space>

                <pre id="summary" class="finance-screening__summary">{move || summary.get()}</pre>

                <Show when=move || table.with(|t| !t.is_empty())>
                    <Table attr:id="preview-table">
                        <TableHeader>
                            <TableRow>
                                {move || table.get().header.into_iter()
                                    .map(|column| view! { <TableHeaderCell>{column}</TableHeaderCell> })
                                    .collect_view()}
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || table.get().rows.into_iter()
                                .map(|row| view! {
                                    <TableRow>
                                        {row.into_iter()
                                            .map(|cell| view! { <TableCell>{cell}</TableCell> })
                                            .collect_view()}
                                    </TableRow>
                                })
                                .collect_view()}
                        </TableBody>
                    </Table>
                </Show>
            </div>
        </PageFrame>
    }
}
