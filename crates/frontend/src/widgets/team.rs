use crate::shared::config::use_site_config;
use contracts::widgets::{TeamMember, TeamRoster};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Member list on one side, details of the selected member on the other.
///
/// The details panel fades out (`transitioning`), swaps content, fades back
/// in; clicks are ignored until the fade-in has finished.
#[component]
pub fn TeamShowcase(members: Vec<TeamMember>) -> impl IntoView {
    let config = use_site_config().team.clone();
    let (swap_ms, settle_ms) = (config.swap_ms, config.settle_ms);
    let roster = RwSignal::new(TeamRoster::new(members.clone()));

    let select = move |index: usize| {
        let accepted = roster.try_update(|r| r.select(index)).unwrap_or(false);
        if !accepted {
            return;
        }
        spawn_local(async move {
            TimeoutFuture::new(swap_ms).await;
            roster.update(|r| r.swap());
            TimeoutFuture::new(settle_ms).await;
            roster.update(|r| r.settle());
        });
    };

    let details_class = move || {
        if roster.with(|r| r.is_swapping()) {
            "our-team-details transitioning"
        } else {
            "our-team-details"
        }
    };
    let displayed = move |field: fn(&TeamMember) -> String| {
        roster.with(|r| r.displayed().map(field).unwrap_or_default())
    };

    view! {
        <div class="our-team grid gap-10 lg:grid-cols-2">
            <ul class="team-members">
                {members
                    .into_iter()
                    .enumerate()
                    .map(|(index, member)| {
                        let is_active = move || roster.with(|r| r.active() == index);
                        view! {
                            <li
                                class=move || if is_active() { "tab-member tab-active" } else { "tab-member" }
                                on:click=move |_| select(index)
                            >
                                <img src=member.image.clone() alt=member.name.clone() />
                                <h3>{member.name}</h3>
                                <p>{member.role}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class=details_class>
                <img src=move || displayed(|m| m.image.clone()) alt=move || displayed(|m| m.name.clone()) />
                <h2>{move || displayed(|m| m.name.clone())}</h2>
                <p>{move || displayed(|m| m.bio.clone())}</p>
            </div>
        </div>
    }
}
