use components::build_details::BuildDetails;
use components::navigation::Navigation;
use components::tree_details::TreeDetails;
use components::tree_list::TreeList;
use models::MessageId;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::YewduxRoot;

use crate::i18n::FormattedMessage;

pub mod api;
pub mod components;
pub mod i18n;
pub mod store;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/tree/:tree_id")]
    TreeDetails { tree_id: String },
    #[at("/tree/:tree_id/build/:build_id")]
    BuildDetails { tree_id: String, build_id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    html! {
        <main>
            <Navigation />
            <div style="padding: 1em 2em;">
            {
                match routes {
                    Route::Home => html! {
                        <TreeList />
                    },
                    Route::TreeDetails { tree_id } => html! {
                        <TreeDetails tree_id={tree_id} />
                    },
                    Route::BuildDetails { tree_id, build_id } => html! {
                        <BuildDetails tree_id={tree_id} build_id={build_id} />
                    },
                    Route::NotFound => html! {
                        <FormattedMessage id={MessageId::GlobalNotFound} />
                    },
                }
            }
            </div>
        </main>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <YewduxRoot>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </YewduxRoot>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Trace));
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use models::panel::BuildPanel;
    use models::BuildItem;

    use super::*;

    #[test]
    fn show_more_route_matches_request_path() {
        let build = BuildItem {
            id: "maestro:9".into(),
            ..Default::default()
        };
        let request = BuildPanel::new("mainline", &build)
            .show_more_request()
            .unwrap();

        let route = Route::BuildDetails {
            tree_id: request.tree_id.clone(),
            build_id: request.build_id.clone(),
        };

        assert_eq!(route.to_path(), request.path());
        assert_eq!(Route::recognize(&request.path()), Some(route));
    }
}
