use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

const TRIGGER_CLASS: &str = "themed-select-trigger";
const PLACEHOLDER: &str = "Theme";

#[derive(Clone, PartialEq)]
struct SelectContext {
    value: Option<AttrValue>,
}

/// The value of the `<select>` an event came from.
pub fn select_value(ev: &Event) -> Option<String> {
    ev.target()
        .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
        .map(|select| select.value())
}

/// Everything but `children` is handed to the underlying `<select>` untouched.
#[derive(Properties, PartialEq)]
pub struct SelectProps {
    #[prop_or_default]
    pub children: Html,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub name: Option<AttrValue>,
    #[prop_or_default]
    pub value: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub onchange: Callback<Event>,
}

#[function_component(Select)]
pub fn select(props: &SelectProps) -> Html {
    let SelectProps {
        children,
        id,
        name,
        value,
        disabled,
        required,
        onchange,
    } = props;

    let context = SelectContext {
        value: value.clone(),
    };

    html! {
        <ContextProvider<SelectContext> {context}>
            <select
                class={TRIGGER_CLASS}
                id={id.clone()}
                name={name.clone()}
                disabled={*disabled}
                required={*required}
                onchange={onchange.clone()}
            >
                <option value="" disabled=true hidden=true selected={value.is_none()}>
                    { PLACEHOLDER }
                </option>
                { children.clone() }
            </select>
        </ContextProvider<SelectContext>>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectItemProps {
    pub value: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(SelectItem)]
pub fn select_item(props: &SelectItemProps) -> Html {
    let selected = use_context::<SelectContext>()
        .and_then(|ctx| ctx.value)
        .is_some_and(|v| v == props.value);

    html! {
        <option value={props.value.clone()} disabled={props.disabled} {selected}>
            { props.children.clone() }
        </option>
    }
}
