use log::warn;
use models::links::build_links;
use models::panel::{BuildPanel, SearchParams};
use models::{BuildItem, MessageId};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::use_build_status_count;
use crate::components::links_group::LinksGroup;
use crate::components::query_switcher::QuerySwitcher;
use crate::components::status_chart::BuildStatusChart;
use crate::i18n::FormattedMessage;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct BuildAccordionContentProps {
    pub tree_id: AttrValue,
    pub build: BuildItem,
}

#[function_component(BuildAccordionContent)]
pub fn build_accordion_content(props: &BuildAccordionContentProps) -> Html {
    let panel = BuildPanel::new(&props.tree_id, &props.build);

    let (data, status) = use_build_status_count(panel.status_query());

    let links = use_memo(props.build.artifacts.clone(), build_links);

    let navigator = use_navigator();
    let search = use_location()
        .and_then(|location| location.query::<SearchParams>().ok())
        .unwrap_or_default();

    let show_more = {
        let tree_id = props.tree_id.clone();
        let build = props.build.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(navigator) = navigator.clone() else {
                warn!("No router available for build {}", build.id);
                return;
            };
            BuildPanel::new(&tree_id, &build).show_more(|request| {
                let route = Route::BuildDetails {
                    tree_id: request.tree_id.clone(),
                    build_id: request.build_id.clone(),
                };
                if let Err(err) = navigator.push_with_query(&route, &request.resolve_search(&search)) {
                    warn!("Cannot navigate to {}: {:?}", request.path(), err);
                }
            });
        })
    };

    html! {
        <div class="build-panel">
            <QuerySwitcher {status} skeleton_class={classes!("skeleton-chart")}>
                {
                    match data {
                        Some(data) => html! {
                            <BuildStatusChart build_id={props.build.id.clone()} counts={data.build_counts} />
                        },
                        None => html!(),
                    }
                }
            </QuerySwitcher>
            <div class="build-panel-side">
                <LinksGroup links={(*links).clone()} />
                <button
                    class="pure-button show-more"
                    disabled={!panel.can_show_more()}
                    onclick={show_more}
                >
                    <FormattedMessage id={MessageId::ShowMore} />
                </button>
            </div>
        </div>
    }
}
