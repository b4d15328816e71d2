use yew::prelude::*;
use yew_router::prelude::*;

mod api;
mod candidate_detail;
mod candidate_form;
mod candidates;
mod config;
mod statistics;
mod styles;

use crate::{
    candidate_detail::CandidateDetail,
    candidate_form::CandidateForm,
    candidates::Candidates,
    statistics::Statistics,
    styles::*,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")] Candidates,
    #[at("/candidates/new")] CreateCandidate,
    #[at("/candidates/:id")] Candidate { id: u64 },
    #[at("/candidates/:id/edit")] EditCandidate { id: u64 },
    #[at("/statistics")] Statistics,
    #[not_found]
    #[at("/404")] NotFound,
}

fn nav_link(route: Route, label: &str, current: &Option<Route>) -> Html {
    let active = current.as_ref() == Some(&route);
    html! {
        <Link<Route> to={route} classes={classes!(
            "text-base", "md:text-lg", "font-medium", "px-4", "py-2", "rounded-md",
            "transition-colors", "duration-200", "ease-in-out",
            "text-gray-200", "border", "border-transparent", "hover:border-blue-400", "hover:text-blue-400",
            if active {
                "text-blue-400 border-blue-400 ring-2 ring-blue-500 ring-offset-1 ring-offset-gray-900"
            } else {
                ""
            }
        )}>
            {label.to_string()}
        </Link<Route>>
    }
}

#[function_component(Navigation)]
fn navigation() -> Html {
    let current_route = use_route::<Route>();

    html! {
        <nav class="bg-gray-900 shadow-lg fixed top-0 w-full z-50">
            <div class="container mx-auto px-6 py-4 flex justify-center space-x-8">
                {nav_link(Route::Candidates, "Candidates", &current_route)}
                {nav_link(Route::CreateCandidate, "Add Candidate", &current_route)}
                {nav_link(Route::Statistics, "Statistics", &current_route)}
            </div>
        </nav>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen bg-gray-900">
                <Navigation />
                <div class="pt-16">
                    <Switch<Route> render={switch} />
                </div>
            </div>
        </BrowserRouter>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Candidates => html! { <Candidates /> },
        Route::CreateCandidate => html! { <CandidateForm /> },
        Route::Candidate { id } => html! { <CandidateDetail {id} /> },
        Route::EditCandidate { id } => html! { <CandidateForm edit={Some(id)} /> },
        Route::Statistics => html! { <Statistics /> },
        Route::NotFound => html! {
            <div class={CONTAINER_SM}>
                <div class={alert_style("error")}>{"Page not found"}</div>
            </div>
        },
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
