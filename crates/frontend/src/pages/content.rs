//! Static copy for the marketing pages.

use contracts::enums::PricePlan;
use contracts::widgets::{CounterStat, FaqEntry, TeamMember};

pub fn counter_stats() -> Vec<CounterStat> {
    [
        (250, "+", "Projects delivered"),
        (98, "%", "Client retention"),
        (40, "+", "Team members"),
        (12, "", "Years in business"),
    ]
    .into_iter()
    .map(|(value, suffix, label)| CounterStat {
        value,
        suffix: suffix.to_string(),
        label: label.to_string(),
    })
    .collect()
}

pub fn team_members() -> Vec<TeamMember> {
    [
        ("Ava Stone", "Creative Director", "Leads brand strategy and visual direction across every engagement.", "/images/team/ava.jpg"),
        ("Liam Park", "Lead Developer", "Turns designs into fast, accessible production sites.", "/images/team/liam.jpg"),
        ("Mia Torres", "Product Designer", "Shapes interfaces from first sketch to shipped pixels.", "/images/team/mia.jpg"),
    ]
    .into_iter()
    .map(|(name, role, bio, image)| TeamMember {
        name: name.to_string(),
        role: role.to_string(),
        bio: bio.to_string(),
        image: image.to_string(),
    })
    .collect()
}

pub fn faq_entries() -> Vec<FaqEntry> {
    vec![
        FaqEntry::new(
            "How long does a typical project take?",
            "Most websites ship in six to ten weeks, depending on scope and content readiness.",
        ),
        FaqEntry::new(
            "Do you work with early-stage startups?",
            "Yes. We offer a lighter launch package aimed at teams validating their first product.",
        ),
        FaqEntry::new(
            "Can you maintain the site after launch?",
            "Every plan includes a support window, and ongoing care can be added monthly.",
        ),
        FaqEntry::new(
            "What do you need from us to get started?",
            "A short brief, access to existing brand assets and a point of contact for feedback.",
        ),
    ]
}

pub fn price_plans() -> Vec<PricePlan> {
    [("Starter", 49, 490), ("Business", 99, 990), ("Enterprise", 199, 1990)]
        .into_iter()
        .map(|(name, monthly, yearly)| PricePlan {
            name: name.to_string(),
            monthly,
            yearly,
        })
        .collect()
}

pub const INLINE_SLIDER_WORDS: [&str; 3] = ["brands", "websites", "products"];

pub const MARQUEE_WORDS: [&str; 4] = ["Branding", "Web Design", "Development", "Strategy"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_slider_has_three_words() {
        // The slider cycles modulo three.
        assert_eq!(INLINE_SLIDER_WORDS.len(), 3);
    }

    #[test]
    fn test_yearly_plans_are_cheaper_than_twelve_months() {
        for plan in price_plans() {
            assert!(plan.yearly < plan.monthly * 12, "{}", plan.name);
        }
    }

    #[test]
    fn test_team_members_have_images() {
        assert!(team_members().iter().all(|m| m.image.starts_with("/images/")));
    }
}
