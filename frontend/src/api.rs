use gloo_net::http::Request;
use log::warn;
use models::query::{QueryStatus, StatusCountQuery};
use models::BuildCountsResponse;
use serde::de::DeserializeOwned;
use yew::prelude::*;
use yew_hooks::{use_async, UseAsyncHandle};

pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let resp = Request::get(url).send().await.map_err(|err| err.to_string())?;
    if !resp.ok() {
        let err = format!(
            "Error fetching data {} ({})",
            resp.status(),
            resp.status_text()
        );
        warn!("GET {}: {}", url, err);
        Err(err)
    } else {
        resp.json().await.map_err(|err| err.to_string())
    }
}

/// Fetches `url` whenever it changes. `None` disables the fetch.
#[hook]
pub fn use_fetch<T>(url: Option<String>) -> UseAsyncHandle<T, String>
where
    T: DeserializeOwned + Clone + 'static,
{
    let handle = {
        let url = url.clone();
        use_async(async move {
            match url {
                Some(url) => get_json::<T>(&url).await,
                None => Err("fetch disabled".to_string()),
            }
        })
    };

    {
        let handle = handle.clone();
        use_effect_with(url, move |url| {
            if url.is_some() {
                handle.run();
            }
            || ()
        });
    }

    handle
}

pub fn query_status<T>(handle: &UseAsyncHandle<T, String>) -> QueryStatus {
    QueryStatus::of(handle.data.as_ref(), handle.error.as_ref())
}

#[hook]
pub fn use_build_status_count(
    query: StatusCountQuery,
) -> (Option<BuildCountsResponse>, QueryStatus) {
    let handle = use_fetch::<BuildCountsResponse>(query.url());
    let status = query_status(&handle);
    (handle.data.clone(), status)
}
