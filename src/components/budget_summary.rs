//! Budget Summary Component
//!
//! Running total of the purchased items.

use leptos::prelude::*;

#[component]
pub fn BudgetSummary(total: Memo<f64>) -> impl IntoView {
    view! {
        <div class="budget-summary">
            <h2>"Total da Compra"</h2>
            <p class="budget-total">{move || format!("R$ {:.2}", total.get())}</p>
        </div>
    }
}
