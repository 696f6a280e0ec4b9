use super::content::{faq_entries, price_plans};
use crate::animations::use_page_animations;
use crate::widgets::{AccordionVariant, FaqAccordion, PricingToggle};
use leptos::prelude::*;

#[component]
pub fn PricingPage() -> impl IntoView {
    use_page_animations();

    let entries = faq_entries();
    let (left, right) = entries.split_at(entries.len() / 2);
    let (left, right) = (left.to_vec(), right.to_vec());

    view! {
        <section class="pricing-page">
            <h1 class="text-appear">"Simple pricing"</h1>
            <PricingToggle plans=price_plans() />
        </section>
        <section class="faq faq--split">
            <FaqAccordion entries=left variant=AccordionVariant::Minimal />
            <FaqAccordion entries=right variant=AccordionVariant::Boxed />
        </section>
    }
}
