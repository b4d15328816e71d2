use std::rc::Rc;
use gloo_timers::callback::Interval;
use yew::prelude::*;
use yew_router::prelude::*;
use shared::models::Candidate;
use crate::{api, config::CONFIG, Route, styles::*};

#[derive(Clone, Default)]
pub struct CandidatesState {
    candidates: Vec<Candidate>,
    loading: bool,
    error: Option<String>,
}

pub enum Msg {
    Loaded(Vec<Candidate>),
    Added(Candidate),
    Removed(u64),
    Error(String),
}

impl Reducible for CandidatesState {
    type Action = Msg;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            Msg::Loaded(candidates) => {
                next.candidates = candidates;
                next.loading = false;
                next.error = None;
            }
            Msg::Added(candidate) => next.candidates.push(candidate),
            // The server deletes only the first record carrying a repeated id.
            Msg::Removed(id) => {
                if let Some(pos) = next.candidates.iter().position(|c| c.id == id) {
                    next.candidates.remove(pos);
                }
            }
            Msg::Error(error) => {
                next.loading = false;
                next.error = Some(error);
            }
        }
        Rc::new(next)
    }
}

// Ids can repeat after a delete, so the list position keeps keys unique.
fn card_key(index: usize, candidate: &Candidate) -> String {
    format!("{}-{}", index, candidate.id)
}

fn generate_one(state: UseReducerHandle<CandidatesState>) {
    wasm_bindgen_futures::spawn_local(async move {
        match api::generate_candidate().await {
            Ok(candidate) => state.dispatch(Msg::Added(candidate)),
            Err(e) => web_sys::console::error_1(&format!("Error generating candidate: {}", e).into()),
        }
    });
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[function_component]
pub fn Candidates() -> Html {
    let state = use_reducer(|| CandidatesState { loading: true, ..Default::default() });
    // Dropping the interval cancels it.
    let generator = use_mut_ref(|| None::<Interval>);
    let generating = use_state(|| false);

    use_effect_with_deps({
        let state = state.clone();
        let generator = generator.clone();
        move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api::get_candidates().await {
                    Ok(candidates) => state.dispatch(Msg::Loaded(candidates)),
                    Err(_) => state.dispatch(Msg::Error(
                        "Failed to load candidates. Please check if the backend server is running.".into()
                    )),
                }
            });
            move || drop(generator.borrow_mut().take())
        }
    }, ());

    let toggle_generation = {
        let state = state.clone();
        let generator = generator.clone();
        let generating = generating.clone();
        Callback::from(move |_: MouseEvent| {
            if *generating {
                generator.borrow_mut().take();
                generating.set(false);
            } else {
                generate_one(state.clone());
                let timer_state = state.clone();
                *generator.borrow_mut() = Some(Interval::new(CONFIG.auto_generate_interval_ms, move || {
                    generate_one(timer_state.clone());
                }));
                generating.set(true);
            }
        })
    };

    let on_delete = {
        let state = state.clone();
        Callback::from(move |id: u64| {
            if !confirm("Are you sure you want to delete this candidate?") {
                return;
            }
            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::delete_candidate(id).await {
                    Ok(()) => state.dispatch(Msg::Removed(id)),
                    Err(e) => state.dispatch(Msg::Error(format!("Failed to delete candidate: {}", e))),
                }
            });
        })
    };

    if state.loading {
        return html! {
            <div class={CONTAINER}>
                <div class="flex flex-col items-center p-8">
                    <h2 class={HEADING_MD}>{"Loading candidates..."}</h2>
                    <p class={combine_classes("animate-pulse", TEXT_MUTED)}>
                        {"Please wait while we fetch the data from the server."}
                    </p>
                </div>
            </div>
        };
    }

    html! {
        <div class={CONTAINER}>
            <h1 class={combine_classes(HEADING_LG, "text-white")}>{"Candidates List"}</h1>
            <p class={combine_classes(TEXT_MUTED, "text-center mb-6")}>{"Click on a candidate to see their details"}</p>

            <div class="flex flex-wrap justify-center gap-4 mb-8">
                <Link<Route> to={Route::CreateCandidate} classes={classes!(button("success"))}>
                    {"+ Add New Candidate"}
                </Link<Route>>
                <Link<Route> to={Route::Statistics} classes={classes!(button("primary"))}>
                    {"📊 Statistics"}
                </Link<Route>>
                <button class={button(if *generating { "danger" } else { "warning" })} onclick={toggle_generation}>
                    {if *generating { "⏹️ Stop Generation" } else { "🔄 Start Auto-Generate" }}
                </button>
            </div>

            {if let Some(error) = &state.error {
                html! { <div class={alert_style("error")}>{error}</div> }
            } else { html! {} }}

            <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3">
                {state.candidates.iter().enumerate().map(|(index, candidate)| html! {
                    <CandidateCard key={card_key(index, candidate)} candidate={candidate.clone()} on_delete={on_delete.clone()} />
                }).collect::<Html>()}
            </div>

            {if state.candidates.is_empty() && state.error.is_none() {
                html! { <p class={combine_classes(TEXT_MUTED, "text-center p-8")}>{"No candidates yet."}</p> }
            } else { html! {} }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CandidateCardProps {
    pub candidate: Candidate,
    pub on_delete: Callback<u64>,
}

#[function_component]
pub fn CandidateCard(props: &CandidateCardProps) -> Html {
    let navigator = use_navigator();
    let candidate = &props.candidate;
    let id = candidate.id;

    let open = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Candidate { id });
            }
        })
    };

    let edit = Callback::from(move |e: MouseEvent| {
        e.stop_propagation();
        if let Some(navigator) = &navigator {
            navigator.push(&Route::EditCandidate { id });
        }
    });

    let delete = {
        let on_delete = props.on_delete.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_delete.emit(id);
        })
    };

    html! {
        <div class={CARD_HOVER_SCALE} onclick={open}>
            <img src={candidate.image.clone()} alt={candidate.name.clone()} class="w-full h-48 object-cover rounded-md mb-3" />
            <h3 class={HEADING_SM}>{&candidate.name}</h3>
            <p class="text-blue-300 font-medium mb-2">{&candidate.party}</p>
            <p class={combine_classes(TEXT_MUTED, "mb-4")}>{&candidate.description}</p>
            <div class={FLEX_BETWEEN}>
                <button class={button("warning")} onclick={edit}>{"Update"}</button>
                <button class={button("danger")} onclick={delete}>{"Delete"}</button>
            </div>
        </div>
    }
}
