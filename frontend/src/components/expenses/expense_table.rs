use yew::prelude::*;
use shared::table::COLUMNS;
use shared::{ExpenseId, ExpenseTable};

#[derive(Properties, PartialEq)]
pub struct ExpenseTableViewProps {
    pub table: ExpenseTable,
    pub on_delete: Callback<ExpenseId>,
}

#[function_component(ExpenseTableView)]
pub fn expense_table_view(props: &ExpenseTableViewProps) -> Html {
    let rows = match &props.table {
        ExpenseTable::Empty(empty) => {
            return html! {
                <div class="empty-state">
                    {if let Some(title) = empty.title() {
                        html! { <h3>{title}</h3> }
                    } else { html! {} }}
                    <p>{empty.message()}</p>
                </div>
            };
        }
        ExpenseTable::Rows(rows) => rows,
    };

    html! {
        <div class="table-section">
            <table>
                <thead>
                    <tr>
                        {for COLUMNS.iter().map(|heading| html! { <th>{*heading}</th> })}
                    </tr>
                </thead>
                <tbody>
                    {for rows.iter().map(|row| {
                        let on_click = {
                            let on_delete = props.on_delete.clone();
                            let id = row.id.clone();
                            Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
                        };

                        html! {
                            <tr key={row.id.to_string()}>
                                <td>{&row.name}</td>
                                <td><strong>{&row.amount}</strong></td>
                                <td>{&row.date}</td>
                                <td>
                                    <span class={classes!(
                                        "category-badge",
                                        row.category_class.clone()
                                    )}>
                                        {&row.category_label}
                                    </span>
                                </td>
                                <td>
                                    <button class="btn-delete" onclick={on_click}>
                                        {"Delete"}
                                    </button>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}
