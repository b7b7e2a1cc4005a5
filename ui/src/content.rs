//! Static page content: header entries, service cards and showcase lists.
//!
//! Text is resolved through the active locale at call time, so callers
//! should build these during render.

use crate::core::navigation::NavigationItem;
use crate::t;

pub const BRAND: &str = "Roman Inc.";

pub static NAV_ITEMS: [NavigationItem; 3] = [
    NavigationItem::new("Vision"),
    NavigationItem::new("Services"),
    NavigationItem::new("SAKURA TOKYO"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceIcon {
    Users,
    PenTool,
    Cpu,
    Lightbulb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceCardEntry {
    pub icon: ServiceIcon,
    pub title: String,
    pub description: String,
}

pub fn service_entries() -> [ServiceCardEntry; 4] {
    [
        ServiceCardEntry {
            icon: ServiceIcon::Users,
            title: t!("service-dao-title"),
            description: t!("service-dao-body"),
        },
        ServiceCardEntry {
            icon: ServiceIcon::PenTool,
            title: t!("service-planning-title"),
            description: t!("service-planning-body"),
        },
        ServiceCardEntry {
            icon: ServiceIcon::Cpu,
            title: t!("service-dev-title"),
            description: t!("service-dev-body"),
        },
        ServiceCardEntry {
            icon: ServiceIcon::Lightbulb,
            title: t!("service-innovation-title"),
            description: t!("service-innovation-body"),
        },
    ]
}

pub fn showcase_features() -> [String; 4] {
    [
        t!("showcase-feature-1"),
        t!("showcase-feature-2"),
        t!("showcase-feature-3"),
        t!("showcase-feature-4"),
    ]
}

pub fn showcase_benefits() -> [String; 4] {
    [
        t!("showcase-benefit-1"),
        t!("showcase-benefit-2"),
        t!("showcase-benefit-3"),
        t!("showcase-benefit-4"),
    ]
}
