use log::warn;
use models::links::build_links;
use models::panel::SearchParams;
use models::query::StatusCountQuery;
use models::{api, BuildDetails as BuildDetailsData, MessageId};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{query_status, use_build_status_count, use_fetch};
use crate::components::links_group::LinksGroup;
use crate::components::query_switcher::QuerySwitcher;
use crate::components::status_chart::BuildStatusChart;
use crate::i18n::FormattedMessage;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct BuildDetailsProps {
    pub tree_id: AttrValue,
    pub build_id: AttrValue,
}

fn row(label: MessageId, value: Html) -> Html {
    html! {
        <tr>
            <th><FormattedMessage id={label} /></th>
            <td>{ value }</td>
        </tr>
    }
}

#[function_component(BuildDetails)]
pub fn build_details(props: &BuildDetailsProps) -> Html {
    let details = use_fetch::<BuildDetailsData>(Some(api::build_details(&props.build_id)));
    let status = query_status(&details);

    let (counts, counts_status) = use_build_status_count(StatusCountQuery {
        build_id: props.build_id.to_string(),
        enabled: !props.build_id.is_empty(),
    });

    let navigator = use_navigator();
    let search = use_location()
        .and_then(|location| location.query::<SearchParams>().ok())
        .unwrap_or_default();

    let back = {
        let tree_id = props.tree_id.to_string();
        Callback::from(move |ev: MouseEvent| {
            ev.prevent_default();
            let Some(ref navigator) = navigator else {
                return;
            };
            let route = Route::TreeDetails {
                tree_id: tree_id.clone(),
            };
            if let Err(err) = navigator.push_with_query(&route, &search) {
                warn!("Cannot navigate back to {}: {:?}", tree_id, err);
            }
        })
    };

    let content = match details.data {
        Some(ref data) => {
            let build = &data.build;
            html! {
                <div class="build-panel">
                    <table class="pure-table">
                        <tbody>
                            { row(MessageId::Config, html! { { build.config_name.clone() } }) }
                            { row(MessageId::Architecture, html! { { build.architecture.clone() } }) }
                            { row(MessageId::Compiler, html! { { build.compiler.clone() } }) }
                            { row(MessageId::Date, html! { { build.start_time.map(|t| t.to_rfc3339()).unwrap_or("---".into()) } }) }
                            { row(MessageId::BuildStatus, match build.valid {
                                Some(true) => html! { <FormattedMessage id={MessageId::Valid} /> },
                                Some(false) => html! { <FormattedMessage id={MessageId::Invalid} /> },
                                None => html! { { "---" } },
                            }) }
                        </tbody>
                    </table>
                    <LinksGroup links={build_links(&build.artifacts)} />
                </div>
            }
        }
        None => html!(),
    };

    html! {
        <article>
            <p>
                <a href="#" onclick={back}>{ format!("← {}", props.tree_id) }</a>
            </p>
            <h3>
                <FormattedMessage id={MessageId::BuildDetailsTitle} />
                { format!(" {}", props.build_id) }
            </h3>
            <QuerySwitcher {status} skeleton_class={classes!("skeleton-chart")}>
                { content }
            </QuerySwitcher>
            <QuerySwitcher status={counts_status} skeleton_class={classes!("skeleton-chart")}>
                {
                    match counts {
                        Some(counts) => html! {
                            <BuildStatusChart build_id={props.build_id.clone()} counts={counts.build_counts} />
                        },
                        None => html!(),
                    }
                }
            </QuerySwitcher>
        </article>
    }
}
