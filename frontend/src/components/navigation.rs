use models::api;
use models::config::PublicConfig;
use models::MessageId;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::use_fetch;
use crate::i18n::FormattedMessage;
use crate::Route;

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let config = use_fetch::<PublicConfig>(Some(api::CONFIG.to_string()));
    let title = config.data.clone().unwrap_or_default().title;

    let navigator = use_navigator();
    let onclick = Callback::from(move |ev: MouseEvent| {
        ev.prevent_default();
        if let Some(ref navigator) = navigator {
            navigator.push(&Route::Home)
        }
    });

    html! {
        <div class="pure-g">
            <div class="pure-u-2-3">
                <div style="padding: 1em;">
                    <h1 class="h1">{ title }</h1>
                </div>
            </div>
            <div class="pure-u-1-3">
                <div style="padding: 2em;">
                    <div class="pure-menu pure-menu-horizontal">
                    <ul class="pure-menu-list">
                        <li class="pure-menu-item">
                            <a {onclick} href="#" class="pure-menu-link">
                                <FormattedMessage id={MessageId::TreeListTitle} />
                            </a>
                        </li>
                    </ul>
                    </div>
                </div>
            </div>
        </div>
    }
}
