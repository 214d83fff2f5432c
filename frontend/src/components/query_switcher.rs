use models::query::QueryStatus;
use models::MessageId;
use yew::prelude::*;

use crate::i18n::FormattedMessage;

#[derive(Properties, PartialEq)]
pub struct QuerySwitcherProps {
    pub status: QueryStatus,
    #[prop_or_default]
    pub skeleton_class: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// Skeleton while pending, the error while failed, the children once loaded.
#[function_component(QuerySwitcher)]
pub fn query_switcher(props: &QuerySwitcherProps) -> Html {
    match props.status {
        QueryStatus::Pending => html! {
            <div class={classes!("skeleton", props.skeleton_class.clone())}>
                <span class="sr-only"><FormattedMessage id={MessageId::GlobalLoading} /></span>
            </div>
        },
        QueryStatus::Error(ref err) => html! {
            <div class="query-error">
                <FormattedMessage id={MessageId::GlobalError} />
                <p class="text-dim-gray">{ err.clone() }</p>
            </div>
        },
        QueryStatus::Success => props.children.clone(),
    }
}

#[cfg(test)]
mod tests {
    use yew::ServerRenderer;

    use super::*;

    async fn render(status: QueryStatus) -> String {
        ServerRenderer::<QuerySwitcher>::with_props(move || QuerySwitcherProps {
            status,
            skeleton_class: classes!("skeleton-chart"),
            children: html! { <p class="loaded">{ "chart" }</p> },
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn pending_shows_the_skeleton() {
        let html = render(QueryStatus::Pending).await;

        assert!(html.contains("skeleton skeleton-chart"), "{}", html);
        assert!(html.contains("Loading..."), "{}", html);
        assert!(!html.contains("loaded"));
    }

    #[tokio::test]
    async fn error_shows_message_and_cause() {
        let html = render(QueryStatus::Error("Error fetching data 500".into())).await;

        assert!(html.contains("Error loading data"), "{}", html);
        assert!(html.contains("Error fetching data 500"), "{}", html);
        assert!(!html.contains("skeleton"));
        assert!(!html.contains("loaded"));
    }

    #[tokio::test]
    async fn success_shows_the_children() {
        let html = render(QueryStatus::Success).await;

        assert!(html.contains(r#"<p class="loaded">chart</p>"#), "{}", html);
        assert!(!html.contains("skeleton"));
    }
}
