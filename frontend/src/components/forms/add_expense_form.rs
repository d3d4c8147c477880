use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use shared::{Category, ExpenseForm};

/// Which input of the add form changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Amount,
    Date,
    Category,
}

#[derive(Properties, PartialEq)]
pub struct AddExpenseFormProps {
    // Form state
    pub form: ExpenseForm,
    pub form_error: Option<String>,
    pub form_success: bool,

    // Event handlers
    pub on_field_change: Callback<(FormField, String)>,
    pub on_submit: Callback<()>,
}

#[function_component(AddExpenseForm)]
pub fn add_expense_form(props: &AddExpenseFormProps) -> Html {
    let on_input = |field: FormField| {
        let on_field_change = props.on_field_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_field_change.emit((field, input.value()));
        })
    };

    let on_date_change = {
        let on_field_change = props.on_field_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_field_change.emit((FormField::Date, input.value()));
        })
    };

    let on_category_change = {
        let on_field_change = props.on_field_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_field_change.emit((FormField::Category, select.value()));
        })
    };

    html! {
        <section class="add-expense-section">
            <h2>{"Add Expense"}</h2>

            {if let Some(error) = props.form_error.as_ref() {
                html! {
                    <div class="form-message error">
                        {error}
                    </div>
                }
            } else { html! {} }}

            {if props.form_success {
                html! {
                    <div class="form-message success">
                        {"Expense added!"}
                    </div>
                }
            } else { html! {} }}

            <form class="expense-form" onsubmit={
                let on_submit = props.on_submit.clone();
                Callback::from(move |e: SubmitEvent| {
                    e.prevent_default();
                    on_submit.emit(());
                })
            }>
                <div class="form-group">
                    <label for="expenseName">{"Expense Name"}</label>
                    <input
                        type="text"
                        id="expenseName"
                        name="expenseName"
                        placeholder="Coffee, groceries, bus ticket..."
                        value={props.form.name.clone()}
                        oninput={on_input(FormField::Name)}
                    />
                </div>

                <div class="form-group">
                    <label for="expenseAmount">{"Amount"}</label>
                    <input
                        type="number"
                        id="expenseAmount"
                        name="expenseAmount"
                        placeholder="0.00"
                        step="0.01"
                        min="0.01"
                        value={props.form.amount.clone()}
                        oninput={on_input(FormField::Amount)}
                    />
                </div>

                <div class="form-group">
                    <label for="expenseDate">{"Date"}</label>
                    <input
                        type="date"
                        id="expenseDate"
                        name="expenseDate"
                        value={props.form.date.clone()}
                        onchange={on_date_change}
                    />
                </div>

                <div class="form-group">
                    <label for="expenseCategory">{"Category"}</label>
                    <select
                        id="expenseCategory"
                        name="expenseCategory"
                        onchange={on_category_change}
                    >
                        <option value="" selected={props.form.category.is_empty()}>
                            {"Select category"}
                        </option>
                        {for Category::ALL.iter().map(|category| html! {
                            <option
                                value={category.key().to_string()}
                                selected={props.form.category == category.key()}
                            >
                                {category.label()}
                            </option>
                        })}
                    </select>
                </div>

                <button type="submit" class="btn btn-primary add-expense-btn">
                    {"Add Expense"}
                </button>
            </form>
        </section>
    }
}
