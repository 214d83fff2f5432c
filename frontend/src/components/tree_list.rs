use models::{api, MessageId, TreeSummary};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{query_status, use_fetch};
use crate::components::query_switcher::QuerySwitcher;
use crate::i18n::FormattedMessage;
use crate::Route;

#[function_component(TreeList)]
pub fn tree_list() -> Html {
    let trees = use_fetch::<Vec<TreeSummary>>(Some(api::TREES.to_string()));
    let status = query_status(&trees);

    html! {
        <article>
            <h3><FormattedMessage id={MessageId::TreeListTitle} /></h3>
            <QuerySwitcher {status} skeleton_class={classes!("skeleton-chart")}>
                <table class="pure-table">
                    <tbody>
                    {
                        trees.data.iter().flatten().map(|tree| {
                            html! {
                                <tr key={tree.id.clone()}>
                                    <td>
                                        <Link<Route> to={Route::TreeDetails { tree_id: tree.id.clone() }}>
                                            { tree.name.clone() }
                                        </Link<Route>>
                                    </td>
                                    <td>{ tree.git_branch.clone().unwrap_or("---".into()) }</td>
                                </tr>
                            }
                        }).collect::<Html>()
                    }
                    </tbody>
                </table>
            </QuerySwitcher>
        </article>
    }
}
