//! Category classification.
//!
//! An ordered rule table, evaluated top to bottom, first match wins. The
//! order is part of the contract: a line mentioning both a payment and a
//! notification keyword is filed under Payment & Billing because that rule
//! is checked first. The last rule has no keywords and always matches, so
//! every line lands somewhere.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use super::signals::SignalSet;

/// Display bucket for a feature line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Authentication & Security")]
    Authentication,
    #[serde(rename = "Payment & Billing")]
    Payment,
    #[serde(rename = "Notifications & Communication")]
    Notifications,
    #[serde(rename = "Integrations & APIs")]
    Integrations,
    #[serde(rename = "User Interface & Design")]
    UserInterface,
    #[serde(rename = "Mobile & Responsive")]
    Mobile,
    #[serde(rename = "Admin & Management")]
    Admin,
    #[serde(rename = "Data & Analytics")]
    Data,
    #[serde(rename = "Performance & Optimization")]
    Performance,
    #[serde(rename = "Reporting & Insights")]
    Reporting,
    #[serde(rename = "Core Functionality")]
    Core,
    #[serde(rename = "Other Features")]
    Other,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Category {
    /// Every category, in evaluation and display order
    pub const ALL: [Category; 12] = [
        Category::Authentication,
        Category::Payment,
        Category::Notifications,
        Category::Integrations,
        Category::UserInterface,
        Category::Mobile,
        Category::Admin,
        Category::Data,
        Category::Performance,
        Category::Reporting,
        Category::Core,
        Category::Other,
    ];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Category::Authentication => "Authentication & Security",
            Category::Payment => "Payment & Billing",
            Category::Notifications => "Notifications & Communication",
            Category::Integrations => "Integrations & APIs",
            Category::UserInterface => "User Interface & Design",
            Category::Mobile => "Mobile & Responsive",
            Category::Admin => "Admin & Management",
            Category::Data => "Data & Analytics",
            Category::Performance => "Performance & Optimization",
            Category::Reporting => "Reporting & Insights",
            Category::Core => "Core Functionality",
            Category::Other => "Other Features",
        }
    }

    /// Keywords that select this category, as case-insensitive regex
    /// fragments. Empty for the catch-all.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Category::Authentication => &[
                "login",
                "log in",
                "logout",
                "sign in",
                "sign-in",
                "signup",
                "sign up",
                "register",
                "password",
                r"\bauth\b",
                "authenticat",
                "authoriz",
                "oauth",
                r"\bsso\b",
                r"\b2fa\b",
                "two-factor",
                r"\bmfa\b",
                "permission",
                r"\broles?\b",
                "security",
                "secure",
                "encrypt",
                "session",
                "captcha",
            ],
            Category::Payment => &[
                "payment",
                r"\bpay\b",
                "paypal",
                "payroll",
                "billing",
                "invoice",
                "checkout",
                "stripe",
                "subscription",
                "pricing",
                "refund",
                "credit card",
                "transaction",
                r"\bcart\b",
                "wallet",
            ],
            Category::Notifications => &[
                "notification",
                "notify",
                "alert",
                "email",
                "e-mail",
                r"\bsms\b",
                r"\bpush\b",
                "message",
                "messaging",
                "reminder",
                r"\bchat",
                "inbox",
                "newsletter",
            ],
            Category::Integrations => &[
                "integration",
                "integrate",
                r"\bapis?\b",
                "webhook",
                "third-party",
                "third party",
                r"\bsync",
                r"\bimport(s|ed|ing)?\b",
                r"\bexport(s|ed|ing)?\b",
                r"\bcrm\b",
                "zapier",
                "slack",
                "google calendar",
                "connect",
            ],
            Category::UserInterface => &[
                "user interface",
                "interface",
                r"\bui\b",
                r"\bux\b",
                "design",
                "theme",
                "dark mode",
                "light mode",
                "layout",
                "button",
                "color",
                "colour",
                "font",
                "style",
                r"\bicons?\b",
                "modal",
                "navigation",
                "menu",
                "landing page",
            ],
            Category::Mobile => &[
                "mobile",
                "responsive",
                r"\bios\b",
                "iphone",
                "android",
                "tablet",
                "phone",
                "app store",
                "play store",
                "offline",
                r"\bpwa\b",
            ],
            Category::Admin => &[
                "admin",
                "dashboard",
                "manage",
                "management",
                "moderation",
                "settings",
                "configuration",
                "audit",
                "back office",
                "back-office",
                r"\bcms\b",
                "user list",
            ],
            Category::Data => &[
                "analytics",
                "data",
                "metric",
                "chart",
                r"\bgraphs?\b",
                "statistic",
                r"\bstats\b",
                "tracking",
                r"\bkpis?\b",
                "visualization",
                "database",
            ],
            Category::Performance => &[
                "performance",
                "speed",
                r"\bfast(er)?\b",
                "optimiz",
                "optimis",
                "cache",
                "caching",
                "load time",
                "latency",
                "scalab",
                "lazy load",
            ],
            Category::Reporting => &[
                "report",
                "summary",
                "insight",
                r"\bpdf\b",
                r"\bprint",
                "digest",
                "forecast",
            ],
            Category::Core => &[
                "search",
                "filter",
                r"\bsort",
                "upload",
                "download",
                "create",
                r"\bedit",
                "delete",
                "crud",
                r"\blists?\b",
                "calendar",
                "schedule",
                "booking",
                "profile",
                r"\bforms?\b",
                "workflow",
                "task",
                "project",
                r"\bpages?\b",
            ],
            Category::Other => &[],
        }
    }

    /// True for the rule that accepts anything
    pub fn is_catch_all(&self) -> bool {
        matches!(self, Category::Other)
    }
}

/// Category with the keyword that decided it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryResult {
    pub category: Category,
    /// Matched keyword, `None` when the catch-all was used
    pub keyword: Option<String>,
}

// Rules in evaluation order, catch-all excluded.
static CATEGORY_RULES: LazyLock<Vec<(Category, SignalSet)>> = LazyLock::new(|| {
    Category::ALL
        .into_iter()
        .filter(|category| !category.is_catch_all())
        .map(|category| (category, SignalSet::new(category.label(), category.keywords())))
        .collect()
});

/// Classify and report the deciding keyword.
pub fn classify_category_detailed(text: &str) -> CategoryResult {
    for (category, signals) in CATEGORY_RULES.iter() {
        if let Some(keyword) = signals.find(text) {
            return CategoryResult {
                category: *category,
                keyword: Some(keyword),
            };
        }
    }

    CategoryResult {
        category: Category::Other,
        keyword: None,
    }
}

pub fn classify_category(text: &str) -> Category {
    classify_category_detailed(text).category
}
