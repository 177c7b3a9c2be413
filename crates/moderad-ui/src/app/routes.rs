//! Routing definitions for the dashboard.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/list")]
    List,
    #[at("/item/:id")]
    Item { id: String },
    #[at("/stats")]
    Stats,
    #[not_found]
    #[at("/404")]
    NotFound,
}
