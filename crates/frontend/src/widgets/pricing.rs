use contracts::enums::{BillingCycle, PricePlan};
use leptos::prelude::*;

fn option_class(active: bool) -> &'static str {
    if active {
        "billing-option active"
    } else {
        "billing-option"
    }
}

fn charge_style(visible: bool) -> &'static str {
    if visible {
        "display: block;"
    } else {
        "display: none;"
    }
}

/// Monthly/yearly switch and the plan cards whose prices follow it.
#[component]
pub fn PricingToggle(plans: Vec<PricePlan>) -> impl IntoView {
    let cycle = RwSignal::new(BillingCycle::default());
    let is_yearly = move || cycle.get().is_yearly();

    view! {
        <div class="pricing">
            <div class="flex items-center justify-center gap-4 mb-16">
                <span id="monthlyOption" class=move || option_class(!is_yearly())>
                    {BillingCycle::Monthly.display_name()}
                </span>
                <button
                    id="toggle"
                    type="button"
                    class=move || if is_yearly() { "billing-toggle yearly" } else { "billing-toggle" }
                    aria-label="Switch billing period"
                    on:click=move |_| cycle.update(|c| *c = c.toggled())
                >
                    <span class="billing-toggle__knob"></span>
                </button>
                <span id="yearlyOption" class=move || option_class(is_yearly())>
                    {BillingCycle::Yearly.display_name()}
                </span>
            </div>

            <div class="grid gap-8 md:grid-cols-3">
                {plans
                    .into_iter()
                    .map(|plan| {
                        let monthly = plan.price(BillingCycle::Monthly);
                        let yearly = plan.price(BillingCycle::Yearly);
                        view! {
                            <div class="pricing-card">
                                <h3>{plan.name}</h3>
                                <p class="monthly-charge" style=move || charge_style(!is_yearly())>
                                    {format!("${}", monthly)}
                                    <span>{PricePlan::period_label(BillingCycle::Monthly)}</span>
                                </p>
                                <p class="yearly-charge" style=move || charge_style(is_yearly())>
                                    {format!("${}", yearly)}
                                    <span>{PricePlan::period_label(BillingCycle::Yearly)}</span>
                                </p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_matching_charge_is_shown() {
        assert_eq!(charge_style(true), "display: block;");
        assert_eq!(charge_style(false), "display: none;");
        assert_eq!(option_class(true), "billing-option active");
    }
}
