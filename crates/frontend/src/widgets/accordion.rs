use contracts::widgets::{AccordionGroup, FaqEntry};
use leptos::prelude::*;

/// Visual flavours of the FAQ accordion used across the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccordionVariant {
    /// Open item gets a border and bottom padding.
    #[default]
    Classic,
    /// Item exposes `data-active`; open body gets a bottom margin.
    Boxed,
    /// Open item gets bottom padding only.
    Minimal,
}

impl AccordionVariant {
    pub fn item_class(&self) -> &'static str {
        match self {
            AccordionVariant::Classic => "accordion-item",
            AccordionVariant::Boxed => "accordion-itemV4",
            AccordionVariant::Minimal => "accordion-itemV5",
        }
    }

    pub fn header_class(&self, open: bool) -> &'static str {
        match (self, open) {
            (AccordionVariant::Boxed, true) => "accordion-headerV4 open active",
            (AccordionVariant::Boxed, false) => "accordion-headerV4",
            (_, true) => "accordion-header open active",
            (_, false) => "accordion-header",
        }
    }

    pub fn body_class(&self) -> &'static str {
        match self {
            AccordionVariant::Boxed => "accordion-bodyV4",
            _ => "accordion-body",
        }
    }

    pub fn item_style(&self, open: bool) -> &'static str {
        match (self, open) {
            (AccordionVariant::Classic, true) => "border: 1px solid black; padding-bottom: 40px;",
            (AccordionVariant::Classic, false) => "border-color: transparent; padding-bottom: 0;",
            (AccordionVariant::Minimal, true) => "padding-bottom: 40px;",
            (AccordionVariant::Minimal, false) => "padding-bottom: 0;",
            (AccordionVariant::Boxed, _) => "",
        }
    }

    /// Open bodies are as tall as their content; closed ones collapse to 0.
    pub fn body_style(&self, open: bool, scroll_height: i32) -> String {
        let height = if open {
            format!("height: {}px;", scroll_height.max(0))
        } else {
            "height: 0;".to_string()
        };
        match self {
            AccordionVariant::Boxed if open => format!("{} margin-bottom: 20px;", height),
            AccordionVariant::Boxed => format!("{} margin-bottom: 0;", height),
            _ => height,
        }
    }
}

#[component]
pub fn FaqAccordion(
    entries: Vec<FaqEntry>,
    #[prop(optional)] variant: AccordionVariant,
) -> impl IntoView {
    let group = RwSignal::new(AccordionGroup::new());

    view! {
        <div class="faq-accordion">
            {entries
                .into_iter()
                .enumerate()
                .map(|(index, entry)| {
                    let body_ref = NodeRef::<leptos::html::Div>::new();
                    let is_open = move || group.with(|g| g.is_open(index));
                    let body_height = move || body_ref.get().map(|el| el.scroll_height()).unwrap_or(0);
                    let data_active = move || {
                        (variant == AccordionVariant::Boxed).then(|| is_open().to_string())
                    };

                    view! {
                        <div
                            class=variant.item_class()
                            style=move || variant.item_style(is_open())
                            attr:data-active=data_active
                        >
                            <button
                                type="button"
                                class=move || variant.header_class(is_open())
                                on:click=move |_| group.update(|g| g.toggle(index))
                            >
                                <span>{entry.question}</span>
                            </button>
                            <div
                                node_ref=body_ref
                                class=variant.body_class()
                                style=move || variant.body_style(is_open(), body_height())
                            >
                                <p>{entry.answer}</p>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_style_per_variant() {
        assert_eq!(AccordionVariant::Classic.body_style(true, 120), "height: 120px;");
        assert_eq!(AccordionVariant::Classic.body_style(false, 120), "height: 0;");
        assert_eq!(
            AccordionVariant::Boxed.body_style(true, 80),
            "height: 80px; margin-bottom: 20px;"
        );
        assert_eq!(
            AccordionVariant::Boxed.body_style(false, 80),
            "height: 0; margin-bottom: 0;"
        );
    }

    #[test]
    fn test_open_header_is_marked() {
        assert_eq!(
            AccordionVariant::Minimal.header_class(true),
            "accordion-header open active"
        );
        assert_eq!(AccordionVariant::Boxed.header_class(false), "accordion-headerV4");
        assert_eq!(AccordionVariant::Minimal.item_style(true), "padding-bottom: 40px;");
    }
}
