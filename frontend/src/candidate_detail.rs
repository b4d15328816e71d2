use yew::prelude::*;
use yew_router::prelude::*;
use shared::models::Candidate;
use crate::{api, Route, styles::*};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: u64,
}

enum State {
    Loading,
    Ready(Candidate),
    NotFound,
    Error(String),
}

pub struct CandidateDetail {
    state: State,
}

impl Component for CandidateDetail {
    type Message = Result<Candidate, String>;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let id = ctx.props().id;
        ctx.link().send_future(async move { api::get_candidate(id).await });
        Self { state: State::Loading }
    }

    fn update(&mut self, _: &Context<Self>, msg: Self::Message) -> bool {
        self.state = match msg {
            Ok(candidate) => State::Ready(candidate),
            Err(error) if error.contains("not found") => State::NotFound,
            Err(error) => State::Error(error),
        };
        true
    }

    fn view(&self, _: &Context<Self>) -> Html {
        match &self.state {
            State::Loading => html! {
                <div class="flex justify-center p-8">
                    <div class="animate-pulse text-lg text-gray-400">{"Loading candidate..."}</div>
                </div>
            },
            State::Ready(candidate) => render_candidate(candidate),
            State::NotFound => render_error("Candidate not found"),
            State::Error(error) => render_error(error),
        }
    }
}

fn render_candidate(candidate: &Candidate) -> Html {
    html! {
        <div class={CONTAINER_SM}>
            <div class="bg-gray-800 rounded-lg shadow-xl p-6 text-white">
                <img src={candidate.image.clone()} alt={candidate.name.clone()} class="w-48 h-48 object-cover rounded-lg mx-auto mb-6" />
                <h1 class={HEADING_MD}>{&candidate.name}</h1>
                <div class={SPACE_Y_BASE}>
                    <p><strong>{"Party: "}</strong>{&candidate.party}</p>
                    <p class="break-words"><strong>{"Description: "}</strong>{&candidate.description}</p>
                    <p class={TEXT_MUTED}><strong>{"Candidate ID: "}</strong>{candidate.id}</p>
                </div>
                <div class="flex gap-4 mt-6">
                    <Link<Route> to={Route::EditCandidate { id: candidate.id }} classes={classes!(button("warning"))}>
                        {"Update"}
                    </Link<Route>>
                    <Link<Route> to={Route::Candidates} classes={classes!(button("primary"))}>
                        {"← Back to List"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}

fn render_error(error: &str) -> Html {
    html! {
        <div class={CONTAINER_SM}>
            <div class={alert_style("error")}>
                <p>{error}</p>
                <Link<Route> to={Route::Candidates} classes={classes!(button_primary(false), "mt-4")}>
                    {"Back to List"}
                </Link<Route>>
            </div>
        </div>
    }
}
