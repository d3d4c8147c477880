use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use shared::{Category, SearchQuery};

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub query: SearchQuery,
    pub on_term_change: Callback<String>,
    pub on_category_change: Callback<Option<Category>>,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let on_input = {
        let on_term_change = props.on_term_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_term_change.emit(input.value());
        })
    };

    let on_select = {
        let on_category_change = props.on_category_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_category_change.emit(SearchQuery::category_from_select(&select.value()));
        })
    };

    let selected = props.query.category.as_ref().map(|category| category.key().to_string());

    html! {
        <div class="search-bar">
            <input
                type="search"
                id="searchInput"
                placeholder="Search by name or amount..."
                value={props.query.term.clone()}
                oninput={on_input}
            />
            <select id="selectByCategory" onchange={on_select}>
                <option value="" selected={selected.is_none()}>{"All categories"}</option>
                {for Category::ALL.iter().map(|category| html! {
                    <option
                        value={category.key().to_string()}
                        selected={selected.as_deref() == Some(category.key())}
                    >
                        {category.label()}
                    </option>
                })}
            </select>
        </div>
    }
}
