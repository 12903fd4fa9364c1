//! Static portfolio content
//!
//! Fixed tables for the hero banner, projects, skills and contact methods.
//! Everything here is `'static` and read-only; renderers may iterate it as
//! often as they like.

/// Glyph shown next to a tag, skill or contact entry
///
/// The GUI theme maps each symbol to a unicode glyph and an accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    // Languages and frameworks
    Cpp,
    Python,
    Java,
    React,
    Tailwind,
    TypeScript,
    Html,
    Css,
    JavaScript,
    Xml,
    NodeJs,
    // Platforms and tools
    Android,
    AndroidStudio,
    Git,
    GitHub,
    VsCode,
    Jupyter,
    IntelliJ,
    Eclipse,
    Firebase,
    MongoDb,
    Docker,
    Api,
    Kubernetes,
    Dsa,
    // Soft skills
    Teamwork,
    ProblemSolving,
    TimeManagement,
    Adaptability,
    Communication,
    // Project features
    Geofencing,
    Biometric,
    RoleBased,
    Realtime,
    Reports,
    ExcelExport,
    Matching,
    Chat,
    Video,
    Rewards,
    Library,
    Events,
    Mentorship,
    // Contact
    Phone,
    LinkedIn,
    Instagram,
}

/// Symbol plus short label, used for project features and tech stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    pub symbol: Symbol,
    pub label: &'static str,
}

const fn tag(symbol: Symbol, label: &'static str) -> Tag {
    Tag { symbol, label }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub symbol: Symbol,
    pub description_lines: &'static [&'static str],
    pub features: &'static [Tag],
    pub tech_stack: &'static [Tag],
    pub external_link: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillItem {
    pub name: &'static str,
    pub symbol: Symbol,
}

const fn skill(name: &'static str, symbol: Symbol) -> SkillItem {
    SkillItem { name, symbol }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: &'static str,
    pub items: &'static [SkillItem],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroProfile {
    pub name: &'static str,
    pub short_name: &'static str,
    pub tagline: &'static str,
    pub highlights: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Phone,
    LinkedIn,
    GitHub,
    Instagram,
}

impl ContactKind {
    pub fn symbol(self) -> Symbol {
        match self {
            ContactKind::Phone => Symbol::Phone,
            ContactKind::LinkedIn => Symbol::LinkedIn,
            ContactKind::GitHub => Symbol::GitHub,
            ContactKind::Instagram => Symbol::Instagram,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactMethod {
    pub kind: ContactKind,
    pub label: &'static str,
    /// Outbound URI; `None` for entries that are only displayed
    pub link: Option<&'static str>,
}

static HERO: HeroProfile = HeroProfile {
    name: "Shivam Kumar Sinha",
    short_name: "Shivam",
    tagline: "BCA Graduate | Aspiring Software Developer | Android Enthusiast | Problem Solver",
    highlights: &[
        "BCA Graduate from Amity University, Patna",
        "Passionate about building innovative software and Android apps",
        "Enjoys solving real-world problems with code",
        "Strong experience in Java, Python, C++, Firebase, and Android Studio",
        "Continuously learning and exploring new technologies",
    ],
};

static PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "GeoPulse",
        symbol: Symbol::Geofencing,
        description_lines: &[
            "Automated Campus Attendance System for Amity University, Patna.",
            "Combines GPS geofencing and biometric authentication for secure, proxy-proof attendance.",
            "Real-time data sync for students, teachers, and admins.",
            "Generates automated reports and Excel exports.",
        ],
        features: &[
            tag(Symbol::Geofencing, "Geofencing"),
            tag(Symbol::Biometric, "Biometric"),
            tag(Symbol::RoleBased, "Role-based"),
            tag(Symbol::Realtime, "Realtime"),
            tag(Symbol::Reports, "Reports"),
            tag(Symbol::ExcelExport, "Excel Export"),
        ],
        tech_stack: &[
            tag(Symbol::Android, "Android"),
            tag(Symbol::Java, "Java"),
            tag(Symbol::Firebase, "Firebase"),
        ],
        external_link: "https://www.linkedin.com/posts/shivam-kumar-sinha-55aa9b273_androiddevelopment-firebase-geofencing-activity-7334648541899808770-W_Pg?utm_source=share&utm_medium=member_desktop&rcm=ACoAAELnDlYB3PNyHjT642Na4O1hlxfci9TmPI4",
    },
    ProjectEntry {
        title: "MentorConnect",
        symbol: Symbol::Mentorship,
        description_lines: &[
            "Student-Alumni Mentorship Platform built for Amity University Hackathon.",
            "Matches students with alumni mentors using intelligent algorithms.",
            "Supports real-time chat, video calls, and session scheduling.",
            "Gamified XP/rewards, resource library, and event management.",
        ],
        features: &[
            tag(Symbol::Matching, "Matching"),
            tag(Symbol::Chat, "Chat"),
            tag(Symbol::Video, "Video"),
            tag(Symbol::Rewards, "Rewards"),
            tag(Symbol::Library, "Library"),
            tag(Symbol::Events, "Events"),
        ],
        tech_stack: &[
            tag(Symbol::React, "React"),
            tag(Symbol::NodeJs, "Node.js"),
            tag(Symbol::MongoDb, "MongoDB"),
        ],
        external_link: "https://www.linkedin.com/posts/shivam-kumar-sinha-55aa9b273_hackathon-thirdplace-mentorconnect-activity-7334646930691534849-Folq?utm_source=share&utm_medium=member_desktop&rcm=ACoAAELnDlYB3PNyHjT642Na4O1hlxfci9TmPI4",
    },
];

static SKILLS: &[SkillCategory] = &[
    SkillCategory {
        name: "Languages",
        items: &[
            skill("C", Symbol::Cpp),
            skill("C++", Symbol::Cpp),
            skill("Python", Symbol::Python),
            skill("Java", Symbol::Java),
        ],
    },
    SkillCategory {
        name: "Web",
        items: &[
            skill("React", Symbol::React),
            skill("Tailwind CSS", Symbol::Tailwind),
            skill("TypeScript", Symbol::TypeScript),
            skill("HTML", Symbol::Html),
            skill("CSS", Symbol::Css),
            skill("JavaScript", Symbol::JavaScript),
        ],
    },
    SkillCategory {
        name: "Mobile Development",
        items: &[
            skill("Android", Symbol::Android),
            skill("Java", Symbol::Java),
            skill("XML", Symbol::Xml),
            skill("Android Studio", Symbol::AndroidStudio),
        ],
    },
    SkillCategory {
        name: "Tools",
        items: &[
            skill("Git", Symbol::Git),
            skill("GitHub", Symbol::GitHub),
            skill("Android Studio", Symbol::AndroidStudio),
            skill("VS Code", Symbol::VsCode),
            skill("Jupyter Notebook", Symbol::Jupyter),
            skill("IntelliJ IDEA", Symbol::IntelliJ),
            skill("Eclipse", Symbol::Eclipse),
            skill("DSA", Symbol::Dsa),
        ],
    },
    SkillCategory {
        name: "Backend",
        items: &[
            skill("Firebase", Symbol::Firebase),
            skill("MongoDB", Symbol::MongoDb),
            skill("Docker", Symbol::Docker),
            skill("API", Symbol::Api),
            skill("Kubernetes", Symbol::Kubernetes),
        ],
    },
    SkillCategory {
        name: "Soft Skills",
        items: &[
            skill("Team Work", Symbol::Teamwork),
            skill("Problem Solving", Symbol::ProblemSolving),
            skill("Time Management", Symbol::TimeManagement),
            skill("Adaptability", Symbol::Adaptability),
            skill("Effective Communication", Symbol::Communication),
        ],
    },
];

static CONTACTS: &[ContactMethod] = &[
    ContactMethod {
        kind: ContactKind::Phone,
        label: "+91 9304332221",
        link: None,
    },
    ContactMethod {
        kind: ContactKind::LinkedIn,
        label: "linkedin.com/in/shivam-kumar-sinha-55aa9b273",
        link: Some("https://www.linkedin.com/in/shivam-kumar-sinha-55aa9b273/"),
    },
    ContactMethod {
        kind: ContactKind::GitHub,
        label: "github.com/Shivamkumarsinha18",
        link: Some("https://github.com/Shivamkumarsinha18"),
    },
    ContactMethod {
        kind: ContactKind::Instagram,
        label: "instagram.com/shkrsin",
        link: Some("https://www.instagram.com/shkrsin/"),
    },
];

pub fn hero() -> &'static HeroProfile {
    &HERO
}

pub fn projects() -> &'static [ProjectEntry] {
    PROJECTS
}

pub fn skills() -> &'static [SkillCategory] {
    SKILLS
}

pub fn contacts() -> &'static [ContactMethod] {
    CONTACTS
}

pub fn project_by_title(title: &str) -> Option<&'static ProjectEntry> {
    PROJECTS.iter().find(|p| p.title == title)
}

pub fn skill_category_by_name(name: &str) -> Option<&'static SkillCategory> {
    SKILLS.iter().find(|c| c.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geopulse_entry_shape() {
        let geo = project_by_title("GeoPulse").unwrap();
        assert_eq!(geo.description_lines.len(), 4);
        assert_eq!(geo.features.len(), 6);
        assert_eq!(geo.tech_stack.len(), 3);
        assert!(geo.external_link.starts_with("https://www.linkedin.com/posts/"));
    }

    #[test]
    fn test_every_project_has_https_link() {
        for project in projects() {
            assert!(
                project.external_link.starts_with("https://"),
                "{} has non-https link",
                project.title
            );
        }
    }

    #[test]
    fn test_skill_categories_in_display_order() {
        let names: Vec<_> = skills().iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec!["Languages", "Web", "Mobile Development", "Tools", "Backend", "Soft Skills"]
        );
        assert_eq!(skill_category_by_name("Tools").unwrap().items.len(), 8);
    }

    #[test]
    fn test_registry_iteration_is_repeatable() {
        let first: Vec<_> = projects().iter().map(|p| p.title).collect();
        let second: Vec<_> = projects().iter().map(|p| p.title).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_phone_contact_has_no_link() {
        let phone = contacts()
            .iter()
            .find(|c| c.kind == ContactKind::Phone)
            .unwrap();
        assert_eq!(phone.link, None);
        assert!(contacts()
            .iter()
            .filter(|c| c.kind != ContactKind::Phone)
            .all(|c| c.link.is_some()));
    }

    #[test]
    fn test_unknown_lookups_are_none() {
        assert!(project_by_title("Nope").is_none());
        assert!(skill_category_by_name("Cooking").is_none());
    }
}
