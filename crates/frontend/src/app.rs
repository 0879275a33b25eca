use crate::usecases::u508_finance_screening::FinanceScreeningPage;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <FinanceScreeningPage />
        </ConfigProvider>
    }
}
