use yew::prelude::*;
use gloo::timers::callback::Timeout;
use shared::{
    Category, ExpenseController, ExpenseForm, ExpenseId, StorageBackend, TrackerConfig,
};

mod components;
mod services;

use components::expenses::{ExpenseTableView, SearchBar};
use components::forms::{AddExpenseForm, FormField};
use components::{ConfirmModal, Header};
use services::config::load_config;
use services::date_utils::get_current_date;
use services::logging::Logger;
use services::storage::open_backend;

pub enum Msg {
    FieldChanged(FormField, String),
    Submit,
    ClearSuccess,
    RequestDelete(ExpenseId),
    ConfirmDelete,
    CancelDelete,
    RequestReset,
    ConfirmReset,
    CancelReset,
    SearchChanged(String),
    CategoryFilterChanged(Option<Category>),
}

pub struct App {
    controller: ExpenseController<Box<dyn StorageBackend>>,
    form: ExpenseForm,
    form_error: Option<String>,
    form_success: bool,
    success_timeout: Option<Timeout>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Logger::init(TrackerConfig::default().log_level_filter());
        let backend = open_backend();
        let config = load_config(backend.as_ref());
        Logger::set_level(config.log_level_filter());
        Logger::info_with_component(
            "App",
            &format!("Starting with storage key '{}'", config.storage_key),
        );

        Self {
            controller: ExpenseController::load(backend, config),
            form: ExpenseForm::blank(get_current_date()),
            form_error: None,
            form_success: false,
            success_timeout: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FieldChanged(field, value) => {
                match field {
                    FormField::Name => self.form.name = value,
                    FormField::Amount => self.form.amount = value,
                    FormField::Date => self.form.date = value,
                    FormField::Category => self.form.category = value,
                }
                true
            }
            Msg::Submit => {
                match self.controller.submit(&self.form) {
                    Ok(_) => {
                        self.form = ExpenseForm::blank(get_current_date());
                        self.form_error = None;
                        self.form_success = true;

                        let link = ctx.link().clone();
                        let duration = self.controller.config().success_message_duration_ms;
                        self.success_timeout = Some(Timeout::new(duration, move || {
                            link.send_message(Msg::ClearSuccess);
                        }));
                    }
                    Err(e) => {
                        Logger::debug_with_component(
                            "AddExpenseForm",
                            &format!("Submit rejected: {:?}", e),
                        );
                        self.form_error = Some(e.to_string());
                        self.form_success = false;
                    }
                }
                true
            }
            Msg::ClearSuccess => {
                self.form_success = false;
                self.success_timeout = None;
                true
            }
            Msg::RequestDelete(id) => self.controller.request_delete(id),
            Msg::ConfirmDelete => {
                self.controller.confirm_delete();
                true
            }
            Msg::CancelDelete => {
                self.controller.cancel_delete();
                true
            }
            Msg::RequestReset => {
                self.controller.request_reset();
                true
            }
            Msg::ConfirmReset => {
                self.controller.confirm_reset();
                true
            }
            Msg::CancelReset => {
                self.controller.cancel_reset();
                true
            }
            Msg::SearchChanged(term) => {
                self.controller.set_search_term(term);
                true
            }
            Msg::CategoryFilterChanged(category) => {
                self.controller.set_category_filter(category);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let view = self.controller.view();
        let link = ctx.link();

        let on_field_change = link.callback(|(field, value): (FormField, String)| {
            Msg::FieldChanged(field, value)
        });

        let delete_message = view
            .delete_prompt
            .as_ref()
            .map(|prompt| format!("Delete \"{}\"? This cannot be undone.", prompt.name))
            .unwrap_or_default();

        html! {
            <>
                <Header
                    summary={view.summary.clone()}
                    on_reset={link.callback(|_: ()| Msg::RequestReset)}
                />

                <main class="main">
                    <div class="container">
                        <AddExpenseForm
                            form={self.form.clone()}
                            form_error={self.form_error.clone()}
                            form_success={self.form_success}
                            on_field_change={on_field_change}
                            on_submit={link.callback(|_: ()| Msg::Submit)}
                        />

                        <section class="expenses-section">
                            <h2>{"Expenses"}</h2>
                            <SearchBar
                                query={self.controller.query().clone()}
                                on_term_change={link.callback(Msg::SearchChanged)}
                                on_category_change={link.callback(Msg::CategoryFilterChanged)}
                            />
                            <ExpenseTableView
                                table={view.active_table().clone()}
                                on_delete={link.callback(Msg::RequestDelete)}
                            />
                        </section>
                    </div>
                </main>

                <ConfirmModal
                    is_open={view.delete_prompt.is_some()}
                    title="Delete Expense"
                    message={delete_message}
                    confirm_label="Delete"
                    on_confirm={link.callback(|_: ()| Msg::ConfirmDelete)}
                    on_cancel={link.callback(|_: ()| Msg::CancelDelete)}
                />
                <ConfirmModal
                    is_open={view.reset_prompt}
                    title="Reset All Expenses"
                    message="This removes every expense. This cannot be undone."
                    confirm_label="Reset"
                    on_confirm={link.callback(|_: ()| Msg::ConfirmReset)}
                    on_cancel={link.callback(|_: ()| Msg::CancelReset)}
                />
            </>
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
