use futures::try_join;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;
use shared::{models::*, validation::missing_fields};
use crate::{api, Route, styles::*};

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Id of the candidate being updated; `None` creates a new one.
    #[prop_or_default]
    pub edit: Option<u64>,
}

#[derive(Clone, Copy, PartialEq)]
pub enum Field {
    Name,
    Description,
    Party,
    Image,
}

#[derive(Default)]
pub struct FormState {
    payload: CandidatePayload,
    parties: Vec<String>,
    missing: Vec<&'static str>,
    error: Option<String>,
    loading: bool,
    submitting: bool,
}

pub struct CandidateForm {
    state: FormState,
    navigator: Option<Navigator>,
}

pub enum Msg {
    Loaded(Vec<String>, Option<Candidate>),
    LoadFailed(String),
    UpdateField(Field, String),
    Submit,
    SubmitResult(Result<Candidate, String>),
}

impl Component for CandidateForm {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let edit = ctx.props().edit;

        ctx.link().send_future(async move {
            let loaded = match edit {
                Some(id) => try_join!(api::get_parties(), api::get_candidate(id))
                    .map(|(parties, candidate)| (parties, Some(candidate))),
                None => api::get_parties().await.map(|parties| (parties, None)),
            };
            match loaded {
                Ok((parties, candidate)) => Msg::Loaded(parties, candidate),
                Err(e) => Msg::LoadFailed(e),
            }
        });

        Self {
            state: FormState { loading: true, ..Default::default() },
            navigator: ctx.link().navigator(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(parties, candidate) => {
                self.state.parties = parties;
                if let Some(candidate) = candidate {
                    self.state.payload = CandidatePayload::from(&candidate);
                }
                self.state.loading = false;
                true
            }
            Msg::LoadFailed(error) => {
                self.state.error = Some(error);
                self.state.loading = false;
                true
            }
            Msg::UpdateField(field, value) => {
                let slot = match field {
                    Field::Name => &mut self.state.payload.name,
                    Field::Description => &mut self.state.payload.description,
                    Field::Party => &mut self.state.payload.party,
                    Field::Image => &mut self.state.payload.image,
                };
                *slot = Some(value);
                self.state.missing.retain(|f| *f != field_key(field));
                true
            }
            Msg::Submit => {
                self.state.missing = missing_fields(&self.state.payload);
                if !self.state.missing.is_empty() {
                    return true;
                }

                self.state.submitting = true;
                self.state.error = None;
                let payload = self.state.payload.clone();
                let edit = ctx.props().edit;
                ctx.link().send_future(async move {
                    let result = match edit {
                        Some(id) => api::update_candidate(id, &payload).await,
                        None => api::create_candidate(&payload).await,
                    };
                    Msg::SubmitResult(result)
                });
                true
            }
            Msg::SubmitResult(Ok(_)) => {
                if let Some(navigator) = &self.navigator {
                    navigator.push(&Route::Candidates);
                }
                false
            }
            Msg::SubmitResult(Err(error)) => {
                let action = if ctx.props().edit.is_some() { "update" } else { "add" };
                self.state.error = Some(format!("Failed to {} candidate: {}", action, error));
                self.state.submitting = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let title = if ctx.props().edit.is_some() { "Update Candidate" } else { "Add New Candidate" };

        html! {
            <div class={BG_PAGE}>
                <div class={CARD}>
                    <h1 class={HEADING_LG}>{title}</h1>
                    {if let Some(error) = &self.state.error {
                        html! { <div class={alert_style("error")}>{error}</div> }
                    } else { html! {} }}
                    {if self.state.loading {
                        html! { <div class={combine_classes("animate-pulse", TEXT_MUTED)}>{"Loading..."}</div> }
                    } else {
                        self.render_form(ctx)
                    }}
                </div>
            </div>
        }
    }
}

fn field_key(field: Field) -> &'static str {
    match field {
        Field::Name => "name",
        Field::Description => "description",
        Field::Party => "party",
        Field::Image => "image",
    }
}

impl CandidateForm {
    fn value(&self, field: Field) -> String {
        let value = match field {
            Field::Name => &self.state.payload.name,
            Field::Description => &self.state.payload.description,
            Field::Party => &self.state.payload.party,
            Field::Image => &self.state.payload.image,
        };
        value.clone().unwrap_or_default()
    }

    fn render_field_error(&self, field: Field, message: &str) -> Html {
        if self.state.missing.contains(&field_key(field)) {
            html! { <p class={TEXT_ERROR}>{message}</p> }
        } else {
            html! {}
        }
    }

    fn render_form(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });
        let submit_label = match (self.state.submitting, ctx.props().edit.is_some()) {
            (true, _) => "Saving...",
            (false, true) => "Update Candidate",
            (false, false) => "Add Candidate",
        };

        html! {
            <form {onsubmit} class={SPACE_Y_LG}>
                <div class={SPACE_Y_BASE}>
                    <label class={TEXT_LABEL}>{"Name *"}</label>
                    <input type="text" class={INPUT_BASE} value={self.value(Field::Name)}
                        placeholder="Enter candidate name"
                        oninput={ctx.link().callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::UpdateField(Field::Name, input.value())
                        })} />
                    {self.render_field_error(Field::Name, "Name is required")}
                </div>

                <div class={SPACE_Y_BASE}>
                    <label class={TEXT_LABEL}>{"Description *"}</label>
                    <textarea class={INPUT_BASE} rows="4" value={self.value(Field::Description)}
                        placeholder="Enter candidate description"
                        oninput={ctx.link().callback(|e: InputEvent| {
                            let input: HtmlTextAreaElement = e.target_unchecked_into();
                            Msg::UpdateField(Field::Description, input.value())
                        })} />
                    {self.render_field_error(Field::Description, "Description is required")}
                </div>

                <div class={SPACE_Y_BASE}>
                    <label class={TEXT_LABEL}>{"Party *"}</label>
                    <select class={INPUT_BASE}
                        onchange={ctx.link().callback(|e: Event| {
                            let select: HtmlSelectElement = e.target_unchecked_into();
                            Msg::UpdateField(Field::Party, select.value())
                        })}>
                        <option value="" selected={self.value(Field::Party).is_empty()}>{"Select a party"}</option>
                        {for self.state.parties.iter().map(|party| html! {
                            <option value={party.clone()} selected={self.value(Field::Party) == *party}>{party}</option>
                        })}
                    </select>
                    {self.render_field_error(Field::Party, "Please select a party")}
                </div>

                <div class={SPACE_Y_BASE}>
                    <label class={TEXT_LABEL}>{"Image URL (optional)"}</label>
                    <input type="url" class={INPUT_BASE} value={self.value(Field::Image)}
                        placeholder="Leave empty for a random image"
                        oninput={ctx.link().callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::UpdateField(Field::Image, input.value())
                        })} />
                </div>

                <div class="flex gap-4">
                    <button type="submit" class={button_primary(true)} disabled={self.state.submitting}>
                        {submit_label}
                    </button>
                </div>
                <Link<Route> to={Route::Candidates} classes={classes!(combine_classes(TEXT_MUTED, "hover:underline block text-center"))}>
                    {"← Back to List"}
                </Link<Route>>
            </form>
        }
    }
}
