//! Descriptive edition text used by the console summary and the report

use super::Edition;

/// One numbered strategic recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub heading: &'static str,
    pub detail: &'static str,
}

/// Qualitative comparison of one operational metric against manual processes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    pub metric: &'static str,
    /// Rating of the manual process
    pub manual: &'static str,
    /// Rating with this edition deployed
    pub edition: &'static str,
    pub impact: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditionCatalog {
    pub description: &'static str,
    pub key_features: &'static str,
    pub best_for: &'static str,
    pub recommendations: &'static [Recommendation],
    /// Manual process vs this edition, one row per operational metric
    pub comparisons: &'static [Comparison],
    /// Closing paragraph of the report
    pub conclusion: &'static str,
}

static FREE: EditionCatalog = EditionCatalog {
    description: "Basic management for up to 25-50 endpoints at no cost",
    key_features: "Basic endpoint management, patch management",
    best_for: "Small businesses with limited IT needs",
    recommendations: &[
        Recommendation {
            heading: "Entry-Level Automation",
            detail: "A good starting point for basic automation of patch management.",
        },
        Recommendation {
            heading: "Limited Value for Larger Environments",
            detail: "Consider upgrading to a paid edition if managing more than 50 endpoints.",
        },
        Recommendation {
            heading: "Foundation for Growth",
            detail: "Establishes processes that can be expanded with paid editions as your needs grow.",
        },
    ],
    comparisons: &[
        Comparison {
            metric: "Response Time to Critical Updates",
            manual: "Days to weeks",
            edition: "Days to weeks",
            impact: "Faster vulnerability mitigation",
        },
        Comparison {
            metric: "Consistency in Deployment",
            manual: "Variable (human-dependent)",
            edition: "Limited consistency",
            impact: "Improved reliability",
        },
        Comparison {
            metric: "Ability to Track Compliance",
            manual: "Limited (manual reporting)",
            edition: "Basic reporting",
            impact: "Better audit readiness",
        },
        Comparison {
            metric: "Remote Troubleshooting Capabilities",
            manual: "Limited",
            edition: "Basic",
            impact: "Faster issue resolution",
        },
        Comparison {
            metric: "Bandwidth Usage Optimization",
            manual: "Suboptimal",
            edition: "Minimal",
            impact: "Reduced network congestion",
        },
        Comparison {
            metric: "Security Risk Exposure",
            manual: "Higher",
            edition: "Somewhat reduced",
            impact: "Improved security posture",
        },
        Comparison {
            metric: "Staff Focus on Strategic Projects",
            manual: "Limited (focus on maintenance)",
            edition: "Limited improvement",
            impact: "More innovation",
        },
    ],
    conclusion: "The Free Edition provides basic endpoint management capabilities suitable for small environments up to 50 devices.",
};

static PROFESSIONAL: EditionCatalog = EditionCatalog {
    description: "Complete endpoint management for LAN environments",
    key_features: "Patch management, application distribution, asset management, remote troubleshooting, BYOD management, kiosk mode",
    best_for: "Small to medium businesses in single-location environments",
    recommendations: &[
        Recommendation {
            heading: "Significant Operational Efficiency",
            detail: "The automation of routine tasks translates to substantial time and cost savings.",
        },
        Recommendation {
            heading: "Rapid Return on Investment",
            detail: "The payback period demonstrates quick value realization for LAN environments.",
        },
        Recommendation {
            heading: "Improved Security Posture",
            detail: "Better patch management and configuration control help reduce common security risks.",
        },
        Recommendation {
            heading: "Resource Optimization",
            detail: "IT staff can focus more on strategic initiatives rather than routine maintenance.",
        },
    ],
    comparisons: &[
        Comparison {
            metric: "Response Time to Critical Updates",
            manual: "Days to weeks",
            edition: "1-2 days",
            impact: "Faster vulnerability mitigation",
        },
        Comparison {
            metric: "Consistency in Deployment",
            manual: "Variable (human-dependent)",
            edition: "Good consistency",
            impact: "Improved reliability",
        },
        Comparison {
            metric: "Ability to Track Compliance",
            manual: "Limited (manual reporting)",
            edition: "Improved reporting",
            impact: "Better audit readiness",
        },
        Comparison {
            metric: "Remote Troubleshooting Capabilities",
            manual: "Limited",
            edition: "Good",
            impact: "Faster issue resolution",
        },
        Comparison {
            metric: "Bandwidth Usage Optimization",
            manual: "Suboptimal",
            edition: "Optimized",
            impact: "Reduced network congestion",
        },
        Comparison {
            metric: "Security Risk Exposure",
            manual: "Higher",
            edition: "Moderately reduced",
            impact: "Improved security posture",
        },
        Comparison {
            metric: "Staff Focus on Strategic Projects",
            manual: "Limited (focus on maintenance)",
            edition: "Moderate improvement",
            impact: "More innovation",
        },
    ],
    conclusion: "The Professional Edition offers strong ROI for LAN environments with significant automation benefits.",
};

static ENTERPRISE: EditionCatalog = EditionCatalog {
    description: "Enhanced management for WAN environments",
    key_features: "Everything in Professional + self-service portal, USB device management, audit remote sessions, license management",
    best_for: "Organizations with multiple locations requiring centralized management",
    recommendations: &[
        Recommendation {
            heading: "Multi-Location Management",
            detail: "Centralized control across distributed environments reduces complexity and overhead.",
        },
        Recommendation {
            heading: "Enhanced Security Controls",
            detail: "Additional features like USB device management provide stronger protection.",
        },
        Recommendation {
            heading: "Improved Visibility",
            detail: "Comprehensive audit capabilities and self-service portal improve both security and user experience.",
        },
        Recommendation {
            heading: "Scalable Solution",
            detail: "As your organization grows across locations, the centralized management becomes increasingly valuable.",
        },
    ],
    comparisons: &[
        Comparison {
            metric: "Response Time to Critical Updates",
            manual: "Days to weeks",
            edition: "Hours to a day",
            impact: "Faster vulnerability mitigation",
        },
        Comparison {
            metric: "Consistency in Deployment",
            manual: "Variable (human-dependent)",
            edition: "Very consistent",
            impact: "Improved reliability",
        },
        Comparison {
            metric: "Ability to Track Compliance",
            manual: "Limited (manual reporting)",
            edition: "Comprehensive reporting",
            impact: "Better audit readiness",
        },
        Comparison {
            metric: "Remote Troubleshooting Capabilities",
            manual: "Limited",
            edition: "Advanced",
            impact: "Faster issue resolution",
        },
        Comparison {
            metric: "Bandwidth Usage Optimization",
            manual: "Suboptimal",
            edition: "Highly optimized",
            impact: "Reduced network congestion",
        },
        Comparison {
            metric: "Security Risk Exposure",
            manual: "Higher",
            edition: "Significantly reduced",
            impact: "Improved security posture",
        },
        Comparison {
            metric: "Staff Focus on Strategic Projects",
            manual: "Limited (focus on maintenance)",
            edition: "Significant improvement",
            impact: "More innovation",
        },
    ],
    conclusion: "The Enterprise Edition provides enhanced value for multi-location environments with centralized management needs.",
};

static UEM: EditionCatalog = EditionCatalog {
    description: "Unified endpoint management across all devices",
    key_features: "Everything in Enterprise + remote data wipe, OS deployment, FileVault encryption, mobile device management",
    best_for: "Organizations with diverse device types and operating systems",
    recommendations: &[
        Recommendation {
            heading: "Cross-Platform Unification",
            detail: "Single console management for diverse device types increases operational efficiency.",
        },
        Recommendation {
            heading: "Advanced Deployment Capabilities",
            detail: "OS deployment features significantly reduce provisioning time and effort.",
        },
        Recommendation {
            heading: "Mobile-Inclusive Strategy",
            detail: "Extending management to mobile devices provides comprehensive device lifecycle control.",
        },
        Recommendation {
            heading: "Holistic Approach",
            detail: "Managing all endpoints through a unified system reduces security gaps and management overhead.",
        },
    ],
    comparisons: &[
        Comparison {
            metric: "Response Time to Critical Updates",
            manual: "Days to weeks",
            edition: "Hours",
            impact: "Faster vulnerability mitigation",
        },
        Comparison {
            metric: "Consistency in Deployment",
            manual: "Variable (human-dependent)",
            edition: "Highly consistent",
            impact: "Improved reliability",
        },
        Comparison {
            metric: "Ability to Track Compliance",
            manual: "Limited (manual reporting)",
            edition: "Comprehensive cross-platform reporting",
            impact: "Better audit readiness",
        },
        Comparison {
            metric: "Remote Troubleshooting Capabilities",
            manual: "Limited",
            edition: "Advanced cross-platform",
            impact: "Faster issue resolution",
        },
        Comparison {
            metric: "Bandwidth Usage Optimization",
            manual: "Suboptimal",
            edition: "Highly optimized",
            impact: "Reduced network congestion",
        },
        Comparison {
            metric: "Security Risk Exposure",
            manual: "Higher",
            edition: "Greatly reduced",
            impact: "Improved security posture",
        },
        Comparison {
            metric: "Staff Focus on Strategic Projects",
            manual: "Limited (focus on maintenance)",
            edition: "Major improvement",
            impact: "More innovation",
        },
    ],
    conclusion: "The UEM Edition delivers comprehensive device management across all platforms with advanced deployment capabilities.",
};

static SECURITY: EditionCatalog = EditionCatalog {
    description: "Comprehensive security-focused endpoint management",
    key_features: "Everything in UEM + vulnerability remediation, data loss prevention, endpoint privilege management, browser security, ransomware protection",
    best_for: "Organizations with high security requirements or in regulated industries",
    recommendations: &[
        Recommendation {
            heading: "Comprehensive Security Focus",
            detail: "Advanced protection against modern threats including ransomware and data loss.",
        },
        Recommendation {
            heading: "Privilege Management",
            detail: "Control of user rights helps prevent unauthorized changes and reduce attack surface.",
        },
        Recommendation {
            heading: "Proactive Vulnerability Management",
            detail: "Early identification and remediation of security issues.",
        },
        Recommendation {
            heading: "Regulatory Compliance",
            detail: "Enhanced security controls and reporting help meet stringent compliance requirements.",
        },
        Recommendation {
            heading: "Maximum Protection",
            detail: "A complete solution that addresses both management efficiency and security requirements.",
        },
    ],
    comparisons: &[
        Comparison {
            metric: "Response Time to Critical Updates",
            manual: "Days to weeks",
            edition: "Near real-time",
            impact: "Faster vulnerability mitigation",
        },
        Comparison {
            metric: "Consistency in Deployment",
            manual: "Variable (human-dependent)",
            edition: "Maximum consistency",
            impact: "Improved reliability",
        },
        Comparison {
            metric: "Ability to Track Compliance",
            manual: "Limited (manual reporting)",
            edition: "Enterprise-grade security reporting",
            impact: "Better audit readiness",
        },
        Comparison {
            metric: "Remote Troubleshooting Capabilities",
            manual: "Limited",
            edition: "Advanced with security focus",
            impact: "Faster issue resolution",
        },
        Comparison {
            metric: "Bandwidth Usage Optimization",
            manual: "Suboptimal",
            edition: "Maximum optimization",
            impact: "Reduced network congestion",
        },
        Comparison {
            metric: "Security Risk Exposure",
            manual: "Higher",
            edition: "Minimized",
            impact: "Improved security posture",
        },
        Comparison {
            metric: "Staff Focus on Strategic Projects",
            manual: "Limited (focus on maintenance)",
            edition: "Maximum improvement",
            impact: "More innovation",
        },
    ],
    conclusion: "The Security Edition offers maximum protection and management capabilities, ideal for security-conscious organizations.",
};

pub(super) fn lookup(edition: Edition) -> &'static EditionCatalog {
    match edition {
        Edition::Free => &FREE,
        Edition::Professional => &PROFESSIONAL,
        Edition::Enterprise => &ENTERPRISE,
        Edition::Uem => &UEM,
        Edition::Security => &SECURITY,
    }
}
