use yew::prelude::*;
use shared::Summary;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub summary: Summary,
    pub on_reset: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_reset_click = {
        let on_reset = props.on_reset.clone();
        Callback::from(move |_: MouseEvent| on_reset.emit(()))
    };

    html! {
        <header class="header">
            <div class="container">
                <h1>{"Expense Tracker"}</h1>
                <div class="header-right">
                    <div class="summary">
                        <div class="summary-item">
                            <span class="summary-label">{"Total Expenses:"}</span>
                            <span id="totalExpenses" class="summary-value">
                                {&props.summary.total}
                            </span>
                        </div>
                        <div class="summary-item">
                            <span class="summary-label">{"Items:"}</span>
                            <span id="totalItems" class="summary-value">
                                {props.summary.item_count}
                            </span>
                        </div>
                    </div>
                    <button id="resetExpenses" class="btn btn-secondary" onclick={on_reset_click}>
                        {"Reset All"}
                    </button>
                </div>
            </div>
        </header>
    }
}
