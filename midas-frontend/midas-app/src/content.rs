//! Static site copy and the record lists rendered by the page sections.
//!
//! Everything here is declared at build time and never mutated. Sections take
//! slices of these records as props so the markup stays free of inline data.
use icondata as i;
use icondata_core::Icon;

/// Fragment identifiers exposed by the page sections.
pub mod anchor {
    pub const SERVICES: &str = "servicios";
    pub const PHILOSOPHY: &str = "filosofia";
    pub const GAMING: &str = "gaming";
    pub const DISCORD: &str = "discord";
    pub const PROJECTS: &str = "proyectos";
    pub const CONTACT: &str = "contact";
}

pub const DISCORD_URL: &str = "https://discord.gg/midasnetwork";

pub const GAMING_BACKDROP_URL: &str =
    "https://images.unsplash.com/photo-1605218427306-635ba2439715?q=80&w=2000&auto=format&fit=crop";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceRecord {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    InProgress,
    Deployed,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Deployed => "Deployed",
        }
    }

    /// Badge colors: green tones once deployed, amber while in progress.
    pub fn badge_class(self) -> &'static str {
        match self {
            ProjectStatus::Deployed => "text-green-400 border-green-900 bg-green-900/20",
            ProjectStatus::InProgress => "text-amber-400 border-amber-900 bg-amber-900/20",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectRecord {
    pub name: &'static str,
    pub tag: &'static str,
    pub status: ProjectStatus,
    /// Where the card links to. `#` while a project has nothing public yet.
    pub preview_url: &'static str,
    pub image_url: Option<&'static str>,
    pub featured: bool,
}

impl ProjectRecord {
    /// Blank urls are treated the same as a missing one.
    pub fn preview_image(&self) -> Option<&'static str> {
        self.image_url.filter(|url| !url.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Highlight {
    pub icon: Icon,
    pub title: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [NavLink],
}

pub const SERVICES: &[ServiceRecord] = &[
    ServiceRecord {
        title: "Monolitos Modulares",
        description: "Arquitectura de software que equilibra la simplicidad con la escalabilidad. Evitamos la sobre-ingeniería de microservicios hasta que es estrictamente necesaria.",
        icon: i::LuBox,
    },
    ServiceRecord {
        title: "Backend Engineering",
        description: "Lógica robusta en Python y Node.js. Diseño de APIs RESTful y GraphQL optimizadas para alto tráfico y procesamiento de datos seguro.",
        icon: i::LuServer,
    },
    ServiceRecord {
        title: "Frontend React & Vite",
        description: "Interfaces ultra rápidas construidas con el ecosistema moderno. Implementación de estados complejos y animaciones fluidas con Framer Motion.",
        icon: i::LuLayoutTemplate,
    },
    ServiceRecord {
        title: "UX/UI Personalizada",
        description: "No usamos plantillas genéricas. Cada píxel está diseñado en Figma y programado para conectar con la psicología de tu usuario final.",
        icon: i::LuMonitor,
    },
];

pub const PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        name: "Gowla",
        tag: "PYTHON/DJANGO",
        status: ProjectStatus::InProgress,
        preview_url: "#",
        image_url: None,
        featured: false,
    },
    ProjectRecord {
        name: "UMBRYAXIS",
        tag: "REACT/D3.JS",
        status: ProjectStatus::InProgress,
        preview_url: "#",
        image_url: None,
        featured: false,
    },
    ProjectRecord {
        name: "Envios El Contenedor",
        tag: "NODE/POSTGRES",
        status: ProjectStatus::InProgress,
        preview_url: "#",
        image_url: None,
        featured: false,
    },
    ProjectRecord {
        name: "Euro Work Latin · Portal Web",
        tag: "REACT/TAILWIND/API",
        status: ProjectStatus::Deployed,
        preview_url: "https://euroworklatin.com",
        image_url: Some("https://image.thum.io/get/width/1600/https://euroworklatin.com"),
        featured: false,
    },
];

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Servicios",
        href: "#servicios",
    },
    NavLink {
        label: "Filosofía",
        href: "#filosofia",
    },
    NavLink {
        label: "Gaming",
        href: "#gaming",
    },
    NavLink {
        label: "Discord",
        href: "#discord",
    },
];

pub const GAMING_HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: i::LuDatabase,
        title: "Recursos FiveM Propios",
        detail: "Scripts exclusivos de alto rendimiento (0.01ms).",
    },
    Highlight {
        icon: i::LuShieldCheck,
        title: "Seguridad & Anti-Cheat",
        detail: "Protección de infraestructura y datos de usuarios.",
    },
];

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        heading: "Network",
        links: &[
            NavLink {
                label: "Servicios",
                href: "#servicios",
            },
            NavLink {
                label: "Proyectos",
                href: "#proyectos",
            },
            NavLink {
                label: "Gaming",
                href: "#gaming",
            },
        ],
    },
    FooterColumn {
        heading: "Connect",
        links: &[
            NavLink {
                label: "Discord",
                href: DISCORD_URL,
            },
            // no public profiles yet
            NavLink {
                label: "LinkedIn",
                href: "#",
            },
            NavLink {
                label: "GitHub",
                href: "#",
            },
        ],
    },
];

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn services_in_declaration_order() {
        let titles: Vec<_> = SERVICES.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            [
                "Monolitos Modulares",
                "Backend Engineering",
                "Frontend React & Vite",
                "UX/UI Personalizada"
            ]
        );
    }

    #[test]
    fn project_statuses() {
        assert_eq!(PROJECTS.len(), 4);
        let deployed: Vec<_> = PROJECTS
            .iter()
            .filter(|p| p.status == ProjectStatus::Deployed)
            .map(|p| p.name)
            .collect();
        assert_eq!(deployed, ["Euro Work Latin · Portal Web"]);
        assert_eq!(ProjectStatus::Deployed.to_string(), "Deployed");
        assert_eq!(ProjectStatus::InProgress.to_string(), "In Progress");
        assert!(ProjectStatus::Deployed.badge_class().contains("green"));
        assert!(ProjectStatus::InProgress.badge_class().contains("amber"));
    }

    #[test]
    fn no_project_is_featured() {
        assert!(PROJECTS.iter().all(|p| !p.featured));
    }

    #[test]
    fn blank_image_url_has_no_preview() {
        let mut project = PROJECTS[3];
        assert_eq!(
            project.preview_image(),
            Some("https://image.thum.io/get/width/1600/https://euroworklatin.com")
        );
        project.image_url = Some("  ");
        assert_eq!(project.preview_image(), None);
        assert_eq!(PROJECTS[0].preview_image(), None);
    }

    #[test]
    fn nav_links_resolve_to_section_anchors() {
        let sections = [
            anchor::SERVICES,
            anchor::PHILOSOPHY,
            anchor::GAMING,
            anchor::DISCORD,
            anchor::PROJECTS,
            anchor::CONTACT,
        ];
        for link in NAV_LINKS {
            let fragment = link.href.trim_start_matches('#');
            assert!(sections.contains(&fragment), "{} has no target", link.href);
        }
    }
}
