use std::rc::Rc;

use serde::de::DeserializeOwned;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::api::fetch_collection;
use crate::models::{Competition, Resource, Talent, UserSummary, Workshop};

/// Read-only view of a fetched collection.
#[derive(Clone, PartialEq)]
pub struct Collection<T> {
    pub items: Rc<Vec<T>>,
    pub loading: bool,
}

impl<T> Collection<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[hook]
fn use_collection<T>(path: &'static str) -> Collection<T>
where
    T: DeserializeOwned + Clone + 'static,
{
    let handle = use_async_with_options(
        async move { fetch_collection::<T>(path).await.map(Rc::new) },
        UseAsyncOptions::enable_auto(),
    );

    // The auto run starts after the first render, so an unresolved handle counts as loading.
    let settled = handle.data.is_some() || handle.error.is_some();
    Collection {
        items: handle.data.clone().unwrap_or_default(),
        loading: handle.loading || !settled,
    }
}

#[hook]
pub fn use_talents() -> Collection<Talent> {
    use_collection("talents")
}

#[hook]
pub fn use_competitions() -> Collection<Competition> {
    use_collection("competitions")
}

#[hook]
pub fn use_workshops() -> Collection<Workshop> {
    use_collection("workshops")
}

#[hook]
pub fn use_resources() -> Collection<Resource> {
    use_collection("resources")
}

#[hook]
pub fn use_users() -> Collection<UserSummary> {
    use_collection("users")
}
