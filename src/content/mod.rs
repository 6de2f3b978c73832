//! Static scorecard copy: categories, headline metrics, case studies,
//! the audit offer and the call-to-action links.

use crate::scoring::CATEGORY_COUNT;

/// One scored business-process dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub title: &'static str,
    /// How the process runs today without automation
    pub manual: &'static str,
    /// How the same process runs AI-first
    pub ai_first: &'static str,
}

pub static CATEGORIES: [Category; CATEGORY_COUNT] = [
    Category {
        title: "CRM & Pipeline Hygiene",
        manual: "Data sits in Excel or static CRM. Tracking depends on 'Monday morning' updates from reps.",
        ai_first: "AI automatically logs emails/calls, updates stages, and flags 'stale' deals without rep input.",
    },
    Category {
        title: "Proposals & PPTs",
        manual: "Reps spend hours copying/pasting from old PPTs. Pricing and technical specs are manual.",
        ai_first: "Gen-AI builds brand-aligned, data-driven technical decks and custom proposals in 10 minutes.",
    },
    Category {
        title: "KAM & Renewals",
        manual: "Key account renewals tracked in master Excel. High risk of 'last minute' churn or missed upsells.",
        ai_first: "AI predicts churn risk and flags upsell triggers based on usage/engagement patterns 90 days out.",
    },
    Category {
        title: "High-Volume Outreach",
        manual: "Reps call hundreds of prospects manually. No tracking of sentiment or objection patterns.",
        ai_first: "AI Voice Agents handle initial qualification and follow-ups, booking meetings only when ready.",
    },
    Category {
        title: "Account Intelligence",
        manual: "Strategy based on 'Gut Feel'. Little insight into client industry trends or financial shifts.",
        ai_first: "AI scans annual reports and industry news to suggest 'Value Hooks' for your next strategic call.",
    },
    Category {
        title: "Lead Response Time",
        manual: "Website leads wait 24-48 hours for a human to call back. High leakage to competitors.",
        ai_first: "AI Agents respond to leads in <2 minutes, qualifying the technical intent and setting the agenda.",
    },
];

pub const EYEBROW: &str = "Industrial & Engineering Revenue Audit";
pub const HEADLINE: &str = "Stop Selling Like It's 2015.";
pub const SUBTITLE: &str = "AI-First Sales & Marketing Readiness Scorecard";
pub const TAGLINE: &str =
    "Modernize your Key Account Management and Proposal Velocity with predictive intelligence.";

pub const BENCHMARK_HEADING: &str = "Benchmark Your Revenue Engine";
pub const BENCHMARK_INTRO: &str = "Identify the manual bottlenecks slowing down your closings.";
pub const SCALE_LEGEND: &str = "Scale: 1 (Manual) → 5 (AI-First)";

pub const RESULT_PLACEHOLDER: &str =
    "Complete all 6 diagnostic categories to reveal your risk profile.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub value: &'static str,
    pub label: &'static str,
    pub note: &'static str,
}

pub static METRICS: [Metric; 3] = [
    Metric {
        value: "90%",
        label: "CRM Accuracy",
        note: "With Auto-Capture Intelligence",
    },
    Metric {
        value: "10m",
        label: "Proposal Time",
        note: "Reduced from 4-8 hours",
    },
    Metric {
        value: "0%",
        label: "Manual Entry",
        note: "For AI-Enabled High Performers",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseStudy {
    pub tag: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    /// Headline result first, supporting result second
    pub outcomes: [&'static str; 2],
}

pub const CASE_STUDIES_HEADING: &str = "Industrial Performance Proof";

pub static CASE_STUDIES: [CaseStudy; 2] = [
    CaseStudy {
        tag: "RENEWALS",
        title: "Precision Components OEM",
        summary: "Replaced fragmented Excel-based KAM with AI Predictive Health Alerts.",
        outcomes: [
            "95% Renewal Rate (Up from 78%)",
            "12% increase in total cross-sell revenue",
        ],
    },
    CaseStudy {
        tag: "OUTREACH",
        title: "Industrial Automation Firm",
        summary: "Deployed AI Agentic Voice for cold-lead and dormant account qualification.",
        outcomes: [
            "4x increase in MQL → SQL meetings",
            "Sales Reps focus 100% on high-value closings",
        ],
    },
];

pub const AUDIT_HEADING: &str = "The AI Sales Audit";
pub const AUDIT_QUOTE: &str = "\"Clean up the Excel data-debt. Accelerate your Closings.\"";

pub static AUDIT_AREAS: [&str; 5] = [
    "CRM Data Decay & Revenue Leakage",
    "Proposal Design & Technical Bottlenecks",
    "Key Account Planning Inefficiency",
    "Manual Call Sentiment Gaps",
    "Lead Response Friction Analysis",
];

pub static AUDIT_DELIVERABLES: [&str; 3] = [
    "Excel-to-AI CRM Migration Map",
    "Automated Technical Proposal Templates",
    "AI Agentic Outreach Pilot Roadmap",
];

pub const AUDIT_TIMELINE: &str = "14 Days";
pub const AUDIT_NOTE: &str = "No IT Overhaul Required";

pub const CTA_HEADING: &str = "Ready to Automate Your Revenue?";
pub const CTA_PITCH: &str = "Schedule a structured AI-First Sales Discovery Session. We audit your current Excel/Manual flows and show you the exact ROI of automation.";

pub const FOOTER: &str = "AI-First Sales Scorecard™ (Industrial Edition) © 2026";

/// Outbound call-to-action links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtaLink {
    StrategyAudit,
    Masterclass,
}

impl CtaLink {
    pub const ALL: [CtaLink; 2] = [CtaLink::StrategyAudit, CtaLink::Masterclass];

    pub fn label(self) -> &'static str {
        match self {
            CtaLink::StrategyAudit => "Book Strategy Audit",
            CtaLink::Masterclass => "Register Live Masterclass",
        }
    }

    pub fn url(self) -> &'static str {
        match self {
            CtaLink::StrategyAudit => "https://calendly.com/support-lyq/ai-strategy-audit",
            CtaLink::Masterclass => "https://www.growthaspire.com/ai-sales-masterclass/",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_distinct_categories() {
        let mut titles: Vec<&str> = CATEGORIES.iter().map(|c| c.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), CATEGORY_COUNT);
    }

    #[test]
    fn test_categories_have_both_flows() {
        for category in &CATEGORIES {
            assert!(!category.manual.is_empty(), "{} missing manual flow", category.title);
            assert!(!category.ai_first.is_empty(), "{} missing AI flow", category.title);
        }
    }

    #[test]
    fn test_cta_links_are_https() {
        for link in CtaLink::ALL {
            assert!(link.url().starts_with("https://"), "{}", link.label());
        }
    }

    #[test]
    fn test_category_order() {
        assert_eq!(CATEGORIES[0].title, "CRM & Pipeline Hygiene");
        assert_eq!(CATEGORIES[5].title, "Lead Response Time");
    }
}
