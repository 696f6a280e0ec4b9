use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
enum FooterColumn {
    Company,
    Services,
    Contact,
}

impl FooterColumn {
    fn title(&self) -> &'static str {
        match self {
            FooterColumn::Company => "Company",
            FooterColumn::Services => "Services",
            FooterColumn::Contact => "Contact",
        }
    }

    fn links(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            FooterColumn::Company => &[("Careers", "/career-details"), ("Pricing", "/pricing")],
            FooterColumn::Services => &[
                ("Branding", "/#services"),
                ("Web Design", "/#services"),
                ("Development", "/#services"),
            ],
            FooterColumn::Contact => &[("hello@studio.dev", "mailto:hello@studio.dev")],
        }
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let columns = [FooterColumn::Company, FooterColumn::Services, FooterColumn::Contact];

    view! {
        <footer class="footer">
            <div class="footer__columns">
                {columns
                    .into_iter()
                    .map(|column| view! {
                        <div class="footer__column">
                            <h3>{column.title()}</h3>
                            <ul>
                                {column
                                    .links()
                                    .iter()
                                    .map(|(label, href)| view! { <li><a href=*href>{*label}</a></li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    })
                    .collect_view()}
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_column_has_links() {
        for column in [FooterColumn::Company, FooterColumn::Services, FooterColumn::Contact] {
            assert!(!column.links().is_empty(), "{} has no links", column.title());
        }
    }
}
