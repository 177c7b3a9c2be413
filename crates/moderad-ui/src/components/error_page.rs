//! Full-page error view used for unknown routes.

use crate::app::Route;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(ErrorPage)]
pub(crate) fn error_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));

    html! {
        <div class="error-page">
            <h2>{bundle.text("not_found.title", "Страница не найдена")}</h2>
            <p class="muted">{bundle.text("not_found.body", "")}</p>
            <Link<Route> to={Route::List} classes="btn">
                {bundle.text("not_found.back", "Назад к списку")}
            </Link<Route>>
        </div>
    }
}
