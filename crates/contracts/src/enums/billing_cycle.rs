use serde::{Deserialize, Serialize};

/// Billing period shown on the pricing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub fn toggled(self) -> Self {
        match self {
            BillingCycle::Monthly => BillingCycle::Yearly,
            BillingCycle::Yearly => BillingCycle::Monthly,
        }
    }

    pub fn is_yearly(&self) -> bool {
        matches!(self, BillingCycle::Yearly)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "Monthly",
            BillingCycle::Yearly => "Yearly",
        }
    }
}

/// Price of one plan for both billing periods, in whole currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePlan {
    pub name: String,
    pub monthly: u32,
    pub yearly: u32,
}

impl PricePlan {
    pub fn price(&self, cycle: BillingCycle) -> u32 {
        match cycle {
            BillingCycle::Monthly => self.monthly,
            BillingCycle::Yearly => self.yearly,
        }
    }

    /// Suffix printed after the amount.
    pub fn period_label(cycle: BillingCycle) -> &'static str {
        match cycle {
            BillingCycle::Monthly => "/month",
            BillingCycle::Yearly => "/year",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_monthly_and_toggles() {
        let cycle = BillingCycle::default();
        assert_eq!(cycle, BillingCycle::Monthly);
        assert!(cycle.toggled().is_yearly());
        assert_eq!(cycle.toggled().toggled(), BillingCycle::Monthly);
    }

    #[test]
    fn test_plan_price_follows_cycle() {
        let plan = PricePlan {
            name: "Growth".into(),
            monthly: 49,
            yearly: 490,
        };
        assert_eq!(plan.price(BillingCycle::Monthly), 49);
        assert_eq!(plan.price(BillingCycle::Yearly), 490);
        assert_eq!(PricePlan::period_label(BillingCycle::Yearly), "/year");
    }
}
