use super::content::{counter_stats, faq_entries, team_members, INLINE_SLIDER_WORDS, MARQUEE_WORDS};
use crate::animations::use_page_animations;
use crate::widgets::{
    AccordionVariant, CircleText, CounterSection, FaqAccordion, InlineSlider, ScrollingMarquee,
    TeamShowcase,
};
use leptos::prelude::*;

const SERVICES: [(&str, &str); 3] = [
    ("Branding", "Identity systems that hold up from favicon to billboard."),
    ("Web Design", "Interfaces built around content, motion and clarity."),
    ("Development", "Fast, accessible sites on a stack you can maintain."),
];

const PROJECTS: [(&str, &str); 4] = [
    ("Northwind", "/images/projects/northwind.jpg"),
    ("Brightline", "/images/projects/brightline.jpg"),
    ("Harbor Labs", "/images/projects/harbor.jpg"),
    ("Fieldnote", "/images/projects/fieldnote.jpg"),
];

const TESTIMONIALS: [(&str, &str); 3] = [
    ("They rebuilt our site in six weeks and conversions doubled.", "Head of Growth, Northwind"),
    ("The most thoughtful design partner we have worked with.", "Founder, Brightline"),
    ("Clear process, sharp work, no surprises.", "CMO, Harbor Labs"),
];

const CLIENTS: [&str; 5] = ["Northwind", "Brightline", "Harbor Labs", "Fieldnote", "Kestrel"];

fn client_strip() -> impl IntoView {
    CLIENTS
        .iter()
        .map(|client| view! { <span class="client-logo">{*client}</span> })
        .collect_view()
}

#[component]
pub fn HomePage() -> impl IntoView {
    use_page_animations();

    view! {
        <section class="hero">
            <div id="hero-gradient-wrapper">
                <div id="hero-gradient"></div>
            </div>
            <h1 class="reveal-text">
                "We design "
                <InlineSlider words=INLINE_SLIDER_WORDS.to_vec() />
                " that move."
            </h1>
            <CircleText text="Studio • Design • Development • " />
            <img class="scale-hero-img" src="/images/hero.jpg" alt="" />
        </section>

        <section id="skew-Marquee">
            <ScrollingMarquee>
                {MARQUEE_WORDS
                    .iter()
                    .map(|word| view! { <span class="marquee-item">{*word}</span> })
                    .collect_view()}
            </ScrollingMarquee>
        </section>

        <section class="service-section">
            <h2 id="services" class="text-appear">"What we do"</h2>
            <div class="service-wrapper">
                {SERVICES
                    .iter()
                    .map(|(title, text)| view! {
                        <article class="service-card reveal-me">
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </article>
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="projects">
            <h2 class="text-appear-2">"Selected work"</h2>
            <div class="swiper">
                <div class="swiper-wrapper">
                    {PROJECTS
                        .iter()
                        .map(|(name, image)| view! {
                            <figure class="swiper-slide">
                                <img class="scale-small-img" src=*image alt=*name />
                                <figcaption>{*name}</figcaption>
                            </figure>
                        })
                        .collect_view()}
                </div>
                <button class="swiper-button-prev" aria-label="Previous project"></button>
                <button class="swiper-button-next" aria-label="Next project"></button>
            </div>
        </section>

        <CounterSection stats=counter_stats() />

        <section class="team">
            <h2 class="text-appear">"Meet the team"</h2>
            <TeamShowcase members=team_members() />
        </section>

        <section class="clients">
            <div class="marquee-container">{client_strip()}</div>
            <div class="marquee-reverse-container">{client_strip()}</div>
        </section>

        <section id="extra-large-image-container" class="image-strip">
            <img class="zoom-image" src="/images/strip.jpg" alt="" />
        </section>

        <section class="testimonials">
            <div class="user-swiper">
                <div class="swiper-wrapper">
                    {TESTIMONIALS
                        .iter()
                        .map(|(quote, author)| view! {
                            <blockquote class="swiper-slide">
                                <p>{*quote}</p>
                                <cite>{*author}</cite>
                            </blockquote>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        <section class="faq">
            <h2 class="text-appear">"Questions"</h2>
            <FaqAccordion entries=faq_entries() variant=AccordionVariant::Classic />
        </section>

        <section class="cta">
            <img id="cta-img" src="/images/cta.jpg" alt="" />
            <div class="video-wrapper">
                <video src="/media/showreel.mp4" muted=true autoplay=true playsinline=true></video>
            </div>
            <a class="cta__link" href="/career-details">"Join the studio"</a>
        </section>
    }
}
