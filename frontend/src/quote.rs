use serde::Serialize;

pub const FIXED_FEE: u64 = 151_050;
/// Tax as a percentage of the base price.
pub const TAX_PERCENT: u64 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceTier {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub base_price: u64,
}

pub static TIERS: [ServiceTier; 5] = [
    ServiceTier {
        id: "24h",
        name: "24-hour security guard",
        description: "Round-the-clock guarding with three rotating shifts.",
        base_price: 7_800_000,
    },
    ServiceTier {
        id: "day",
        name: "Day-shift security guard",
        description: "One licensed guard on site during business hours.",
        base_price: 4_200_000,
    },
    ServiceTier {
        id: "night",
        name: "Night-shift security guard",
        description: "Overnight patrols, alarm response and lock-up checks.",
        base_price: 4_650_000,
    },
    ServiceTier {
        id: "cleaning",
        name: "Office cleaning",
        description: "Daily cleaning of offices, washrooms and common areas.",
        base_price: 2_600_000,
    },
    ServiceTier {
        id: "portering",
        name: "Building portering",
        description: "Front-desk reception, mail handling and deliveries.",
        base_price: 3_100_000,
    },
];

pub fn find_tier(id: &str) -> Option<&'static ServiceTier> {
    TIERS.iter().find(|t| t.id == id)
}

/// Monthly price breakdown, in whole currency units.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub base_price: u64,
    pub fixed_fee: u64,
    pub tax: u64,
    pub total: u64,
}

impl Quote {
    pub fn for_tier(tier: &ServiceTier) -> Self {
        let base_price = tier.base_price;
        let tax = base_price * TAX_PERCENT / 100;
        Self {
            base_price,
            fixed_fee: FIXED_FEE,
            tax,
            total: base_price + FIXED_FEE + tax,
        }
    }
}

/// 8731050 -> "8,731,050"
pub fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_the_clock_tier_matches_published_price() {
        let quote = Quote::for_tier(find_tier("24h").unwrap());
        assert_eq!(quote.base_price, 7_800_000);
        assert_eq!(quote.fixed_fee, 151_050);
        assert_eq!(quote.tax, 780_000);
        assert_eq!(quote.total, 8_731_050);
    }

    #[test]
    fn every_tier_adds_fee_and_ten_percent_tax() {
        for tier in TIERS.iter() {
            let quote = Quote::for_tier(tier);
            assert_eq!(quote.tax * 10, tier.base_price);
            assert_eq!(quote.total, tier.base_price + FIXED_FEE + tier.base_price / 10);
        }
    }

    #[test]
    fn unknown_tier_is_none() {
        assert!(find_tier("weekend").is_none());
    }

    #[test]
    fn amounts_use_thousands_separators() {
        assert_eq!(format_amount(8_731_050), "8,731,050");
        assert_eq!(format_amount(151_050), "151,050");
        assert_eq!(format_amount(999), "999");
        assert_eq!(format_amount(0), "0");
    }
}
