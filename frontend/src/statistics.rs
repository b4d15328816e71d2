use yew::prelude::*;
use yew_router::prelude::*;
use shared::models::{PartyShare, StatisticsReport};
use crate::{api, Route, styles::*};

#[function_component]
pub fn Statistics() -> Html {
    let report = use_state(|| None::<StatisticsReport>);
    let error = use_state(|| None::<String>);

    // Always fetched fresh; the server computes the report from the live list.
    use_effect_with_deps({
        let report = report.clone();
        let error = error.clone();
        move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api::get_statistics().await {
                    Ok(r) => report.set(Some(r)),
                    Err(e) => error.set(Some(e)),
                }
            });
            || ()
        }
    }, ());

    let body = match (&*report, &*error) {
        (_, Some(error)) => html! { <div class={alert_style("error")}>{error}</div> },
        (Some(report), None) => render_report(report),
        (None, None) => html! {
            <div class="flex justify-center p-8">
                <div class={combine_classes("animate-pulse", TEXT_MUTED)}>{"Loading statistics..."}</div>
            </div>
        },
    };

    html! {
        <div class={CONTAINER}>
            <div class={combine_classes(FLEX_BETWEEN, "mb-6")}>
                <Link<Route> to={Route::Candidates} classes={classes!(button("primary"))}>{"← Back to List"}</Link<Route>>
                <h1 class={combine_classes(HEADING_LG, "mb-0")}>{"Candidates Statistics"}</h1>
                <div />
            </div>
            {body}
        </div>
    }
}

fn overview_card(title: &str, value: String, subtext: Option<String>) -> Html {
    html! {
        <div class={combine_classes(STATS_CARD, STATS_CARD_INFO)}>
            <h3 class="text-sm font-semibold uppercase tracking-wide">{title}</h3>
            <div class="text-3xl font-bold mt-2 break-words">{value}</div>
            {if let Some(subtext) = subtext {
                html! { <div class={TEXT_MUTED}>{subtext}</div> }
            } else { html! {} }}
        </div>
    }
}

fn party_bar(share: &PartyShare) -> Html {
    html! {
        <div class={SPACE_Y_BASE}>
            <div class={FLEX_BETWEEN}>
                <span class="font-medium text-gray-100">{&share.party}</span>
                <span class={TEXT_MUTED}>{format!("{} candidates · {}%", share.count, share.percentage)}</span>
            </div>
            <div class="w-full bg-gray-700 rounded-full h-3">
                <div class="bg-blue-500 h-3 rounded-full" style={format!("width: {}%", share.percentage)} />
            </div>
        </div>
    }
}

fn detail_item(title: &str, text: &str, quoted: bool) -> Html {
    let shown = if quoted { format!("\"{}\"", text) } else { text.to_string() };
    html! {
        <div class={CARD_SECTION}>
            <h4 class="font-semibold text-gray-100 mb-1">{title}</h4>
            <p class="text-gray-300 break-words">{shown}</p>
            <span class={TEXT_MUTED}>{format!("({} characters)", text.chars().count())}</span>
        </div>
    }
}

fn render_report(report: &StatisticsReport) -> Html {
    html! {
        <div class={SPACE_Y_LG}>
            <div class="grid gap-4 md:grid-cols-4">
                {overview_card("Total Candidates", report.total_candidates.to_string(), None)}
                {overview_card("Political Parties", report.party_count.to_string(), None)}
                {overview_card("Most Common Party", report.most_common_party.clone(),
                    Some(format!("({} candidates)", report.most_common_party_count)))}
                {overview_card("Avg Description Length", report.avg_description_length.to_string(),
                    Some("characters".into()))}
            </div>

            <section class={CARD_SECTION}>
                <h2 class={HEADING_MD}>{"Party Distribution"}</h2>
                <div class={SPACE_Y_BASE}>
                    {for report.party_distribution.iter().map(party_bar)}
                </div>
            </section>

            <section>
                <h2 class={HEADING_MD}>{"Detailed Statistics"}</h2>
                <div class="grid gap-4 md:grid-cols-2">
                    {detail_item("Longest Description", &report.longest_description, true)}
                    {detail_item("Shortest Description", &report.shortest_description, true)}
                    {detail_item("Longest Name", &report.longest_name, false)}
                    {detail_item("Shortest Name", &report.shortest_name, false)}
                </div>
            </section>

            <section>
                <h2 class={HEADING_MD}>{"Recent Candidates"}</h2>
                <div class="grid gap-4 md:grid-cols-5">
                    {for report.recent_candidates.iter().map(|candidate| html! {
                        <Link<Route> to={Route::Candidate { id: candidate.id }} classes={CARD_SECTION}>
                            <img src={candidate.image.clone()} alt={candidate.name.clone()} class="w-full h-24 object-cover rounded-md mb-2" />
                            <h4 class="font-semibold text-gray-100">{&candidate.name}</h4>
                            <p class={TEXT_MUTED}>{&candidate.party}</p>
                        </Link<Route>>
                    })}
                </div>
            </section>
        </div>
    }
}
