//! Static deck content: the ordered section list, the revenue projection
//! table and the team roster. Defined once at build time; ordering of
//! `SECTIONS` drives the navigation order.

/// One named full-viewport region of the deck.
#[derive(PartialEq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

pub const SECTIONS: [Section; 13] = [
    Section { id: "hero", label: "Home" },
    Section { id: "purpose", label: "Purpose" },
    Section { id: "problem", label: "Problem" },
    Section { id: "platform", label: "Platform" },
    Section { id: "solution", label: "Solution" },
    Section { id: "benefits", label: "Benefits" },
    Section { id: "whynow", label: "Why Now?" },
    Section { id: "patent", label: "Patents" },
    Section { id: "business-model", label: "Business Model" },
    Section { id: "market-size", label: "Market Opportunity" },
    Section { id: "financials", label: "Financials" },
    Section { id: "team", label: "Team" },
    Section { id: "contact", label: "Contact" },
];

/// Projected revenue for one half-year period, in millions of euros, one
/// value per entry of [`REVENUE_SERIES`].
pub struct RevenuePoint {
    pub period: &'static str,
    pub revenue: [f64; 4],
}

/// Display metadata for one stacked revenue series.
pub struct RevenueSeries {
    pub label: &'static str,
    pub terms: &'static str,
    pub icon: &'static str,
    pub color: (u8, u8, u8),
}

pub const REVENUE_SERIES: [RevenueSeries; 4] = [
    RevenueSeries {
        label: "Orthotic Insoles",
        terms: "Laufwerk signed: €20 per sale",
        icon: "footprints",
        color: (0xE3, 0x06, 0x13),
    },
    RevenueSeries {
        label: "Sports Insole",
        terms: "In negotiation €20-100 per sale",
        icon: "trophy",
        color: (0xF9, 0x73, 0x16),
    },
    RevenueSeries {
        label: "Runner Insoles",
        terms: "20% of list price",
        icon: "zap",
        color: (0x3B, 0x82, 0xF6),
    },
    RevenueSeries {
        label: "Tote Bags",
        terms: "20-30% of list price",
        icon: "shopping-bag",
        color: (0x10, 0xB9, 0x81),
    },
];

pub const REVENUE_DATA: [RevenuePoint; 7] = [
    RevenuePoint { period: "2025 H2", revenue: [0.0, 0.0, 0.0, 0.0] },
    RevenuePoint { period: "2026 H1", revenue: [1.0, 0.2, 0.0, 0.0] },
    RevenuePoint { period: "2026 H2", revenue: [2.5, 1.0, 0.5, 0.0] },
    RevenuePoint { period: "2027 H1", revenue: [4.0, 2.5, 1.5, 0.5] },
    RevenuePoint { period: "2027 H2", revenue: [6.0, 5.0, 3.0, 1.0] },
    RevenuePoint { period: "2028 H1", revenue: [10.0, 12.5, 7.5, 2.5] },
    RevenuePoint { period: "2028 H2", revenue: [17.5, 22.5, 15.0, 5.0] },
];

/// Upper bound of the chart's fixed y domain, in millions of euros.
pub const REVENUE_CEILING: f64 = 60.0;

pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub img: &'static str,
    pub linkedin: &'static str,
}

pub const TEAM_MEMBERS: [TeamMember; 4] = [
    TeamMember {
        name: "William Lyons",
        role: "Founder | Development",
        img: "https://images.unsplash.com/photo-1555949963-ff9fe0c870eb?auto=format&fit=crop&w=400&h=400",
        linkedin: "https://www.linkedin.com/in/william-lyons-eekual/",
    },
    TeamMember {
        name: "Dr. Maximilian Bock",
        role: "CEO",
        img: "https://images.unsplash.com/photo-1486406140526-9183a6d56f54?auto=format&fit=crop&w=400&h=400",
        linkedin: "https://www.linkedin.com/in/m-bock/",
    },
    TeamMember {
        name: "Stephan Karmann",
        role: "Production",
        img: "https://images.unsplash.com/photo-1581092335397-9583eb92d232?auto=format&fit=crop&w=400&h=400",
        linkedin: "https://www.linkedin.com/in/stephan-karmann/",
    },
    TeamMember {
        name: "Roderich Körner-Rehn",
        role: "CRO",
        img: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?auto=format&fit=crop&w=400&h=400",
        linkedin: "https://www.linkedin.com/in/rodkoerner/",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_ids_are_unique_and_nonempty() {
        for (i, section) in SECTIONS.iter().enumerate() {
            assert!(!section.id.is_empty());
            assert!(!section.label.is_empty());
            assert!(SECTIONS[i + 1..].iter().all(|other| other.id != section.id));
        }
    }

    #[test]
    fn revenue_totals_fit_the_chart_domain() {
        for point in &REVENUE_DATA {
            let total: f64 = point.revenue.iter().sum();
            assert!(total >= 0.0);
            assert!(total <= REVENUE_CEILING);
        }
    }
}
