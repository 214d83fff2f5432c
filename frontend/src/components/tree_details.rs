use log::warn;
use models::panel::SearchParams;
use models::{api, AccordionItem, BuildStatusFilter, MessageId};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{query_status, use_fetch};
use crate::components::accordion::Accordion;
use crate::components::query_switcher::QuerySwitcher;
use crate::components::select::{select_value, Select, SelectItem};
use crate::i18n::{english, FormattedMessage};
use crate::Route;

const STATUS_PARAM: &str = "status";

fn filter_label(filter: BuildStatusFilter) -> MessageId {
    match filter {
        BuildStatusFilter::All => MessageId::FilterAll,
        BuildStatusFilter::Valid => MessageId::FilterValid,
        BuildStatusFilter::Invalid => MessageId::FilterInvalid,
    }
}

#[derive(Properties, PartialEq)]
pub struct TreeDetailsProps {
    pub tree_id: AttrValue,
}

#[function_component(TreeDetails)]
pub fn tree_details(props: &TreeDetailsProps) -> Html {
    let items = use_fetch::<Vec<AccordionItem>>(Some(api::tree_items(&props.tree_id)));
    let status = query_status(&items);

    let navigator = use_navigator();
    let search = use_location()
        .and_then(|location| location.query::<SearchParams>().ok())
        .unwrap_or_default();
    let filter = search
        .get(STATUS_PARAM)
        .map(BuildStatusFilter::from_query_value)
        .unwrap_or_default();

    let on_filter_change = {
        let tree_id = props.tree_id.to_string();
        let search = search.clone();
        Callback::from(move |ev: Event| {
            let (Some(navigator), Some(value)) = (navigator.as_ref(), select_value(&ev)) else {
                return;
            };
            let route = Route::TreeDetails {
                tree_id: tree_id.clone(),
            };
            let query = search.clone().with(STATUS_PARAM, &value);
            if let Err(err) = navigator.replace_with_query(&route, &query) {
                warn!("Cannot apply filter {}: {:?}", value, err);
            }
        })
    };

    let (builds, tests): (Vec<AccordionItem>, Vec<AccordionItem>) = items
        .data
        .iter()
        .flatten()
        .filter(|item| item.as_build().map_or(true, |build| filter.matches(build)))
        .cloned()
        .partition(|item| item.as_build().is_some());

    html! {
        <article>
            <h3>{ props.tree_id.clone() }</h3>
            <Select
                name="build-status"
                value={AttrValue::from(filter.to_string())}
                onchange={on_filter_change}
            >
                {
                    BuildStatusFilter::ALL.iter().map(|f| html! {
                        <SelectItem value={f.to_string()}>{ english(filter_label(*f)) }</SelectItem>
                    }).collect::<Html>()
                }
            </Select>
            <QuerySwitcher {status} skeleton_class={classes!("skeleton-chart")}>
                <>
                <h4><FormattedMessage id={MessageId::TreeBuilds} /></h4>
                <Accordion tree_id={props.tree_id.clone()} items={builds} />
                <h4><FormattedMessage id={MessageId::TreeTests} /></h4>
                <Accordion tree_id={props.tree_id.clone()} items={tests} />
                </>
            </QuerySwitcher>
        </article>
    }
}
