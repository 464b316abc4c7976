//! Static copy for the blog and services pages.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub category: &'static str,
    pub summary: &'static str,
    pub body: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub id: u32,
    pub name: &'static str,
    pub tagline: &'static str,
    pub summary: &'static str,
    pub features: &'static [&'static str],
    /// Quote calculator tiers that price this service.
    pub tier_ids: &'static [&'static str],
}

pub static BLOG_POSTS: [BlogPost; 3] = [
    BlogPost {
        slug: "choosing-a-security-partner",
        title: "Choosing a Security Partner for Your Building",
        date: "2024-04-18",
        category: "Security",
        summary: "Five questions to ask before you sign a guarding contract.",
        body: &[
            "A guarding contract is a long commitment. Before signing, ask how the provider trains and licenses its staff, and how often that training is refreshed.",
            "Ask who covers a shift when a guard is sick. A provider with a standby roster will answer immediately; one without will hesitate.",
            "Ask for incident reporting samples. Good reports are timestamped, specific and delivered the same day.",
            "Finally, ask for references from buildings like yours. A hospital and a logistics yard have very different needs.",
        ],
    },
    BlogPost {
        slug: "clean-offices-healthy-teams",
        title: "Clean Offices, Healthy Teams",
        date: "2024-03-02",
        category: "Cleaning",
        summary: "How a consistent cleaning schedule cuts sick days.",
        body: &[
            "Shared desks, door handles and kitchen surfaces carry most workplace germs. Daily disinfection of touch points matters more than a weekly deep clean.",
            "We schedule cleaning outside core hours so teams never work around a crew, and we log each visit so facility managers can verify coverage.",
        ],
    },
    BlogPost {
        slug: "what-a-porter-does",
        title: "What a Building Porter Actually Does",
        date: "2024-01-21",
        category: "Portering",
        summary: "Reception, deliveries and the hundred small jobs in between.",
        body: &[
            "Porters are the first face visitors see. They greet guests, sign for deliveries and keep the lobby in order.",
            "Behind the desk they move furniture, manage waste collection and report maintenance issues before tenants notice them.",
            "A good porter knows every tenant by name. That familiarity is also a security asset.",
        ],
    },
];

pub static SERVICES: [Service; 3] = [
    Service {
        id: 1,
        name: "Security Guarding",
        tagline: "Licensed guards, day and night.",
        summary: "Static guarding, mobile patrols, access control and alarm response for offices, residential blocks and industrial sites.",
        features: &[
            "Licensed and vetted officers",
            "Day, night or 24-hour coverage",
            "Same-day incident reports",
            "Standby roster for sick cover",
        ],
        tier_ids: &["24h", "day", "night"],
    },
    Service {
        id: 2,
        name: "Commercial Cleaning",
        tagline: "Spotless spaces, on schedule.",
        summary: "Daily office cleaning, washroom hygiene and periodic deep cleans, scheduled around your working hours.",
        features: &[
            "Touch-point disinfection",
            "Eco-certified products",
            "Out-of-hours scheduling",
            "Visit logs for facility managers",
        ],
        tier_ids: &["cleaning"],
    },
    Service {
        id: 3,
        name: "Portering & Reception",
        tagline: "The front desk, handled.",
        summary: "Reception cover, mail and parcel handling, visitor management and general building support.",
        features: &[
            "Visitor sign-in and badges",
            "Parcel and mail handling",
            "Waste and recycling rounds",
            "Minor maintenance reporting",
        ],
        tier_ids: &["portering"],
    },
];

pub fn find_post(slug: &str) -> Option<&'static BlogPost> {
    BLOG_POSTS.iter().find(|p| p.slug == slug)
}

pub fn find_service(id: u32) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::find_tier;

    #[test]
    fn lookups() {
        assert_eq!(find_post("what-a-porter-does").map(|p| p.category), Some("Portering"));
        assert!(find_post("missing").is_none());
        assert_eq!(find_service(2).map(|s| s.name), Some("Commercial Cleaning"));
        assert!(find_service(0).is_none());
    }

    #[test]
    fn every_service_tier_has_a_price() {
        for service in SERVICES.iter() {
            for id in service.tier_ids {
                assert!(find_tier(id).is_some(), "no tier {}", id);
            }
        }
    }
}
