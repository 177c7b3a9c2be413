//! App shell: routing, locale handling, and the wasm entrypoint.

use crate::app::api::ApiCtx;
use crate::components::error_page::ErrorPage;
use crate::features::ads::view::ListPage;
use crate::features::item::view::ItemPage;
use crate::features::stats::view::StatsPage;
use crate::i18n::{LocaleCode, TranslationBundle};
use yew::prelude::*;
use yew_router::prelude::*;

pub(crate) mod api;
mod preferences;
mod routes;

pub(crate) use routes::Route;

#[function_component(ModeradApp)]
fn moderad_app() -> Html {
    let locale = use_state(preferences::load_locale);
    let bundle = {
        let locale = *locale;
        use_memo(move |_| TranslationBundle::new(locale), locale)
    };
    let api_ctx = use_memo(|_| ApiCtx::new(preferences::api_base_url()), ());

    {
        let locale = locale.clone();
        use_effect_with_deps(
            move |locale| {
                preferences::persist_locale(**locale);
                || ()
            },
            locale,
        );
    }

    let locale_selector = {
        let locale = locale.clone();
        html! {
            <select class="locale-select" onchange={{
                let locale = locale.clone();
                Callback::from(move |event: Event| {
                    if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                        if let Some(next) = LocaleCode::from_lang_tag(&select.value()) {
                            locale.set(next);
                        }
                    }
                })
            }}>
                {for LocaleCode::all().iter().map(|lc| html! {
                    <option value={lc.code()} selected={*lc == *locale}>{lc.label()}</option>
                })}
            </select>
        }
    };

    let nav_list = bundle.text("nav.list", "Объявления");
    let nav_stats = bundle.text("nav.stats", "Статистика");

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
                <BrowserRouter>
                    <header class="app-header">
                        <nav class="app-nav">
                            <Link<Route> to={Route::List} classes="app-nav-link">
                                {nav_list}
                            </Link<Route>>
                            <Link<Route> to={Route::Stats} classes="app-nav-link">
                                {nav_stats}
                            </Link<Route>>
                        </nav>
                        {locale_selector}
                    </header>
                    <main class="app-main">
                        <Switch<Route> render={switch} />
                    </main>
                </BrowserRouter>
            </ContextProvider<TranslationBundle>>
        </ContextProvider<ApiCtx>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Redirect<Route> to={Route::List} /> },
        Route::List => html! { <ListPage /> },
        Route::Item { id } => html! { <ItemPage id={id} /> },
        Route::Stats => html! { <StatsPage /> },
        Route::NotFound => html! { <ErrorPage /> },
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<ModeradApp>::with_root(root).render();
    } else {
        yew::Renderer::<ModeradApp>::new().render();
    }
}
