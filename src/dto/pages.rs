//! Data rendered by the dashboard templates.

use serde::Serialize;

/// One entry of the dashboard navigation.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DashboardSection {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const OVERVIEW: DashboardSection = DashboardSection {
    slug: "",
    title: "Dashboard",
    description: "Today's pipeline, follow-ups and team activity at a glance.",
};

pub const SECTIONS: &[DashboardSection] = &[
    DashboardSection {
        slug: "leads",
        title: "Leads",
        description: "Capture, score and qualify inbound and outbound leads.",
    },
    DashboardSection {
        slug: "opportunities",
        title: "Opportunities",
        description: "Track open deals with MEDDPICC qualification at every stage.",
    },
    DashboardSection {
        slug: "contacts",
        title: "Contacts",
        description: "Everyone you sell to, with their roles and history.",
    },
    DashboardSection {
        slug: "companies",
        title: "Companies",
        description: "Accounts, their buying committees and open opportunities.",
    },
    DashboardSection {
        slug: "analytics",
        title: "Analytics",
        description: "Conversion, win rates and activity trends across the team.",
    },
    DashboardSection {
        slug: "pipeline",
        title: "Pipeline",
        description: "Stage-by-stage view of the forecast and deal velocity.",
    },
    DashboardSection {
        slug: "territory",
        title: "Territory",
        description: "Territory assignments and coverage by region.",
    },
    DashboardSection {
        slug: "learning",
        title: "Learning",
        description: "PEAK selling playbooks and coaching for the team.",
    },
    DashboardSection {
        slug: "customer-success",
        title: "Customer Success",
        description: "Onboarding, health scores and renewals for signed customers.",
    },
    DashboardSection {
        slug: "executive",
        title: "Executive",
        description: "Bookings, forecast accuracy and headline metrics for leadership.",
    },
];

pub fn find_section(slug: &str) -> Option<&'static DashboardSection> {
    SECTIONS.iter().find(|section| section.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_known_sections_only() {
        assert_eq!(
            find_section("customer-success").map(|s| s.title),
            Some("Customer Success")
        );
        assert!(find_section("billing").is_none());
        assert!(find_section("").is_none());
    }
}
