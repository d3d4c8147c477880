use yew::prelude::*;
use web_sys::MouseEvent;

#[derive(Properties, PartialEq)]
pub struct ConfirmModalProps {
    pub is_open: bool,
    pub title: AttrValue,
    pub message: AttrValue,
    #[prop_or(AttrValue::Static("Confirm"))]
    pub confirm_label: AttrValue,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Yes/no prompt shown over the page. Clicking the backdrop cancels.
#[function_component(ConfirmModal)]
pub fn confirm_modal(props: &ConfirmModalProps) -> Html {
    let on_backdrop_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_cancel.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_confirm_click = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| {
            on_confirm.emit(());
        })
    };

    let on_cancel_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| {
            on_cancel.emit(());
        })
    };

    if !props.is_open {
        return html! {};
    }

    html! {
        <div class="modal-backdrop show" onclick={on_backdrop_click}>
            <div class="modal" onclick={on_modal_click}>
                <div class="modal-content">
                    <h3 class="modal-title">{props.title.clone()}</h3>
                    <p class="modal-message">{props.message.clone()}</p>
                    <div class="modal-buttons">
                        <button type="button" class="btn btn-danger" onclick={on_confirm_click}>
                            {props.confirm_label.clone()}
                        </button>
                        <button type="button" class="btn btn-secondary" onclick={on_cancel_click}>
                            {"Cancel"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
