use yew::prelude::*;

use nem_dashboard::components::status::Status;
use nem_dashboard::components::{
    FuelMixView, HistoricalView, InterconnectorsView, MarketOverview, PriceDemandView,
    RenewablesView, ThemeProvider, ThemeToggle,
};
use nem_dashboard::hooks::use_theme::{LocalThemeStore, ThemeStoreHandle};
use nem_dashboard::services::{AemoClient, QueryClient, QueryClientHandle};
use nem_dashboard::utils::logging::init_logging;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Page {
    Overview,
    PriceDemand,
    FuelMix,
    Renewables,
    Interconnectors,
    Historical,
}

impl Page {
    const ALL: [Self; 6] = [
        Self::Overview,
        Self::PriceDemand,
        Self::FuelMix,
        Self::Renewables,
        Self::Interconnectors,
        Self::Historical,
    ];

    const fn title(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::PriceDemand => "Price & Demand",
            Self::FuelMix => "Fuel Mix",
            Self::Renewables => "Renewables",
            Self::Interconnectors => "Interconnectors",
            Self::Historical => "Historical",
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    let page = use_state(|| Page::Overview);

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"NEM Dashboard"}</h1>
                <nav class="app-nav">
                    { for Page::ALL.iter().map(|p| {
                        let onclick = {
                            let page = page.clone();
                            let p = *p;
                            Callback::from(move |_: MouseEvent| page.set(p))
                        };
                        let class = classes!("nav-link", (*page == *p).then_some("active"));
                        html! { <button {class} {onclick}>{p.title()}</button> }
                    }) }
                </nav>
                <ThemeToggle />
            </header>

            <main class="app-main">
                { match *page {
                    Page::Overview => html! { <MarketOverview /> },
                    Page::PriceDemand => html! { <PriceDemandView /> },
                    Page::FuelMix => html! { <FuelMixView /> },
                    Page::Renewables => html! { <RenewablesView /> },
                    Page::Interconnectors => html! { <InterconnectorsView /> },
                    Page::Historical => html! { <HistoricalView /> },
                } }
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

/// Wires the query client and theme store into the tree.
#[function_component(Root)]
fn root() -> Html {
    let client = use_memo((), |()| {
        AemoClient::new().map(|api| QueryClientHandle::new(QueryClient::new(api)))
    });
    let store = use_memo((), |()| ThemeStoreHandle::new(LocalThemeStore));

    match &*client {
        Ok(client) => html! {
            <ContextProvider<QueryClientHandle> context={client.clone()}>
                <ThemeProvider store={(*store).clone()}>
                    <App />
                </ThemeProvider>
            </ContextProvider<QueryClientHandle>>
        },
        Err(e) => html! {
            <Status label="dashboard" loading={false} error={AttrValue::from(e.to_string())} />
        },
    }
}

fn main() {
    if let Err(e) = init_logging() {
        web_sys::console::warn_1(&e.to_string().into());
    }
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting dashboard");
    yew::Renderer::<Root>::new().render();
}
