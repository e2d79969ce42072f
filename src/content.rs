// Home page content.
// Static profile sections plus the enrichment lists gathered per request.

use serde::Serialize;

use crate::github::RepositoryEntry;
use crate::youtube::FeaturedVideo;

#[derive(Debug, Clone, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Hero {
    pub name: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub focus_title: &'static str,
    pub focus_points: Vec<&'static str>,
    pub cta_links: Vec<Link>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillGroup {
    pub category: &'static str,
    pub items: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Experience {
    pub overview: Vec<&'static str>,
    pub focus: Vec<&'static str>,
    pub wins: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub name: &'static str,
    pub summary: &'static str,
}

/// Assessment level, used as a CSS modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Strong,
    Developing,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Strong => "strong",
            Level::Developing => "developing",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentScore {
    pub name: &'static str,
    pub score: u8,
    pub level: Level,
}

#[derive(Debug, Clone, Serialize)]
pub struct Contact {
    pub email: &'static str,
    pub cta: &'static str,
    pub social_links: Vec<Link>,
}

/// Everything on the page that does not come from an upstream service.
#[derive(Debug, Clone, Serialize)]
pub struct StaticContent {
    pub hero: Hero,
    pub skills: Vec<SkillGroup>,
    pub experience: Experience,
    pub projects: Vec<Project>,
    pub skill_assessment_summary: &'static str,
    pub skill_assessment: Vec<AssessmentScore>,
    pub contact: Contact,
}

/// Data handed to the page renderer.
#[derive(Debug, Clone, Serialize)]
pub struct PageContext {
    #[serde(flatten)]
    pub content: StaticContent,
    pub featured_videos: Vec<FeaturedVideo>,
    pub github_projects: Vec<RepositoryEntry>,
}

impl PageContext {
    pub fn new(featured_videos: Vec<FeaturedVideo>, github_projects: Vec<RepositoryEntry>) -> Self {
        Self {
            content: static_content(),
            featured_videos,
            github_projects,
        }
    }
}

const YOUTUBE_CHANNEL: &str = "https://www.youtube.com/@denisprimc";

pub fn static_content() -> StaticContent {
    StaticContent {
        hero: Hero {
            name: "Denis Primc",
            title: "Senior Support Analyst · MSP Specialist · Content Creator",
            summary: "For 15+ years I've supported users, infrastructure, and cloud services across MSPs. \
                      I thrive on keeping customers productive, leading complex migrations, and sharing \
                      what I learn with the wider community.",
            focus_title: "Where I Create Impact",
            focus_points: vec![
                "Deliver 1st to 3rd line support with a relentless focus on service quality.",
                "Plan and execute client onboarding, server migrations, and security rollouts.",
                "Translate technical change into clear guidance for clients and teammates.",
            ],
            cta_links: vec![
                Link {
                    label: "View Experience",
                    url: "#experience",
                },
                Link {
                    label: "Watch YouTube Channel",
                    url: YOUTUBE_CHANNEL,
                },
            ],
        },
        skills: vec![
            SkillGroup {
                category: "MSP Platforms",
                items: vec![
                    "Datto RMM, Autotask, ITGlue",
                    "N-able N-central, Passportal, Secret Server",
                    "Addigy RMM for Apple fleets",
                    "Process documentation & runbooks",
                ],
            },
            SkillGroup {
                category: "Backup & Security",
                items: vec![
                    "Cove & Datto Endpoint Backup",
                    "Cloud Ally & Rubrik backup platforms",
                    "Mimecast, AppRiver, SentinelOne, Heimdal",
                    "Fortinet FortiGate edge security & SD-WAN",
                    "CyberCNS vulnerability management",
                ],
            },
            SkillGroup {
                category: "Platforms & Infrastructure",
                items: vec![
                    "Azure AD, Intune, SharePoint, Exchange Online",
                    "Windows Server 2016/2019/2022 & Hyper-V",
                    "VMware, VirtualBox, Synology NAS/CCTV",
                    "Networking with Meraki, Meraki Go, UniFi",
                ],
            },
            SkillGroup {
                category: "Troubleshooting & Tools",
                items: vec![
                    "Advanced endpoint support across Windows, macOS, Linux",
                    "Domain management (MX, SPF, DKIM, TXT)",
                    "PowerShell & Bash scripting automation",
                    "Ivanti & remote workforce enablement playbooks",
                ],
            },
        ],
        experience: Experience {
            overview: vec![
                "I'm a hands-on support analyst with more than fifteen years in IT and the last six immersed \
                 in fast-paced MSP environments. From service desk triage to deep-dive root cause analysis, \
                 I keep users productive while protecting uptime across mixed Windows, macOS, and Linux estates.",
                "Day to day I own the full support lifecycle: onboarding new organisations, documenting their \
                 infrastructure, deploying RMM tooling, and guiding them through migrations to modern platforms. \
                 Server upgrades, Azure AD hardening, Intune rollout, and collaboration stack tuning are all part \
                 of the toolkit.",
                "Earlier in my career I led a datacentre relocation and domain migration for hundreds of users. \
                 That experience cemented my focus on communication, change control, and making complex transitions \
                 feel simple for the people relying on them.",
            ],
            focus: vec![
                "Delivering multi-tier support that blends speed with thorough root-cause resolutions.",
                "Designing and executing migration runbooks for servers, email, and collaboration platforms.",
                "Hardening tenant security with conditional access, backup policies, and endpoint protection.",
                "Coaching junior technicians and translating technical change into plain-language updates.",
            ],
            wins: vec![
                "Standardised client onboarding to cut time-to-value for new MSP customers.",
                "Migrated legacy VMware workloads into resilient Hyper-V clusters with minimal downtime.",
                "Rolled out O365 security baselines, SharePoint rearchitecture, and SaaS backup coverage.",
                "Maintained 3rd-line escalation ownership for complex networking, identity, and endpoint issues.",
            ],
        },
        projects: vec![
            Project {
                name: "Client Onboarding Accelerator",
                summary: "Designed repeatable onboarding playbooks covering discovery, documentation, \
                          and RMM deployment to bring new MSP clients online smoothly.",
            },
            Project {
                name: "Hybrid Infrastructure Migrations",
                summary: "Delivered VMware-to-Hyper-V transitions, Exchange 2016 to Microsoft 365 migrations, \
                          and Azure AD security implementations with minimal downtime.",
            },
            Project {
                name: "Remote Workforce Enablement",
                summary: "Implemented remote desktop services, VPN access, and collaboration tooling \
                          to keep hybrid teams productive and secure.",
            },
        ],
        skill_assessment_summary: "IKM TechChek score: 83 · 78th percentile overall.",
        skill_assessment: vec![
            score("Devices & Printers", 90),
            score("Office 365 Continuity & Availability", 88),
            score("Windows 10 Security", 86),
            score("Wireless Networking", 84),
            score("File Systems & Management", 82),
            score("Email Concepts & Client Support", 80),
        ],
        contact: Contact {
            email: "denis@denisprimc.com",
            cta: "Need help with MSP tooling, migrations, or endpoint strategy? Let's talk.",
            social_links: vec![
                Link {
                    label: "LinkedIn",
                    url: "https://www.linkedin.com/in/denisprimc",
                },
                Link {
                    label: "GitHub",
                    url: "https://github.com/Dprimc",
                },
                Link {
                    label: "YouTube",
                    url: YOUTUBE_CHANNEL,
                },
            ],
        },
    }
}

fn score(name: &'static str, score: u8) -> AssessmentScore {
    let level = if score >= 75 {
        Level::Strong
    } else {
        Level::Developing
    };
    AssessmentScore { name, score, level }
}
