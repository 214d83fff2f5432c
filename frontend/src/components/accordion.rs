use models::{AccordionItem, BuildItem, MessageId, TestItem};
use yew::prelude::*;
use yewdux::prelude::use_store;

use crate::components::build_accordion_content::BuildAccordionContent;
use crate::components::test_accordion_content::TestAccordionContent;
use crate::i18n::FormattedMessage;
use crate::store::ExpandedItems;

fn validity(valid: Option<bool>) -> Html {
    match valid {
        Some(true) => html! {
            <span class="badge-valid"><FormattedMessage id={MessageId::Valid} /></span>
        },
        Some(false) => html! {
            <span class="badge-invalid"><FormattedMessage id={MessageId::Invalid} /></span>
        },
        None => html! { <span>{ "---" }</span> },
    }
}

fn build_header(build: &BuildItem) -> Html {
    html! {
        <>
            <span>{ build.config_name.clone() }</span>
            <span>{ build.architecture.clone() }</span>
            <span>{ build.compiler.clone() }</span>
            <span>{ build.start_time.map(|t| t.format("%Y-%m-%d %H:%M").to_string()).unwrap_or("---".into()) }</span>
            { validity(build.valid) }
        </>
    }
}

fn test_header(test: &TestItem) -> Html {
    html! {
        <>
            <span>{ test.path.clone() }</span>
            <span>{ test.status.clone() }</span>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct AccordionProps {
    pub tree_id: AttrValue,
    pub items: Vec<AccordionItem>,
}

#[function_component(Accordion)]
pub fn accordion(props: &AccordionProps) -> Html {
    let (expanded, dispatch) = use_store::<ExpandedItems>();

    if props.items.is_empty() {
        return html! {
            <p class="text-dim-gray"><FormattedMessage id={MessageId::TreeNoItems} /></p>
        };
    }

    html! {
        <div class="accordion">
        {
            props.items.iter().map(|item| {
                let key = item.key();
                let onclick = {
                    let key = key.clone();
                    dispatch.reduce_mut_callback(move |state| state.toggle(&key))
                };
                let header = match item {
                    AccordionItem::Build(build) => build_header(build),
                    AccordionItem::Test(test) => test_header(test),
                };
                let body = if expanded.is_open(&key) {
                    let content = match item {
                        AccordionItem::Build(build) => html! {
                            <BuildAccordionContent tree_id={props.tree_id.clone()} build={build.clone()} />
                        },
                        AccordionItem::Test(test) => html! {
                            <TestAccordionContent test={test.clone()} />
                        },
                    };
                    html! { <div class="accordion-body">{ content }</div> }
                } else {
                    html!()
                };
                html! {
                    <div key={key} class="accordion-row">
                        <button class="accordion-header" {onclick}>{ header }</button>
                        { body }
                    </div>
                }
            }).collect::<Html>()
        }
        </div>
    }
}
