//! Static content tables.
//!
//! All entries are compile-time constants; nothing here is ever mutated.
//! Icon values are either asset paths resolved by the hosting page or
//! literal emoji rendered as text.

use crate::types::{
    Category, ContactLink, EmploymentType, ExperienceEntry, Level, Technology,
};

pub static TECHNOLOGIES: [Technology; 18] = [
    // Mobile
    Technology {
        name: "Android",
        icon: "/android.svg",
        color: "tech-green",
        category: Category::Mobile,
        level: Some(Level::Expert),
    },
    Technology {
        name: "Kotlin",
        icon: "/kotlin.svg",
        color: "tech-purple",
        category: Category::Mobile,
        level: Some(Level::Expert),
    },
    Technology {
        name: "Jetpack Compose",
        icon: "/jetpackcompose.svg",
        color: "tech-blue",
        category: Category::Mobile,
        level: Some(Level::Expert),
    },
    Technology {
        name: "KMP",
        icon: "/kotlin.svg",
        color: "tech-purple",
        category: Category::Mobile,
        level: Some(Level::Learning),
    },
    // Frontend
    Technology {
        name: "JavaScript",
        icon: "/js.svg",
        color: "tech-yellow",
        category: Category::Frontend,
        level: Some(Level::Advanced),
    },
    Technology {
        name: "TypeScript",
        icon: "/ts.svg",
        color: "tech-blue",
        category: Category::Frontend,
        level: Some(Level::Advanced),
    },
    Technology {
        name: "React",
        icon: "/react.svg",
        color: "tech-cyan",
        category: Category::Frontend,
        level: Some(Level::Advanced),
    },
    Technology {
        name: "Angular",
        icon: "/angular.svg",
        color: "tech-red",
        category: Category::Frontend,
        level: Some(Level::Advanced),
    },
    Technology {
        name: "HTML",
        icon: "/html.svg",
        color: "tech-orange",
        category: Category::Frontend,
        level: Some(Level::Advanced),
    },
    Technology {
        name: "CSS",
        icon: "/css.svg",
        color: "tech-blue",
        category: Category::Frontend,
        level: Some(Level::Advanced),
    },
    // Backend
    Technology {
        name: "Node.js",
        icon: "/nodejs.svg",
        color: "tech-green",
        category: Category::Backend,
        level: Some(Level::Advanced),
    },
    // Database & cloud
    Technology {
        name: "Firebase",
        icon: "/firebase.svg",
        color: "tech-orange",
        category: Category::Database,
        level: Some(Level::Advanced),
    },
    // Tools
    Technology {
        name: "AWS",
        icon: "/aws.svg",
        color: "tech-orange",
        category: Category::Tools,
        level: Some(Level::Advanced),
    },
    Technology {
        name: "Git",
        icon: "📝",
        color: "tech-orange",
        category: Category::Tools,
        level: Some(Level::Expert),
    },
    Technology {
        name: "GitHub",
        icon: "/github.svg",
        color: "tech-neutral",
        category: Category::Tools,
        level: Some(Level::Expert),
    },
    Technology {
        name: "GitLab",
        icon: "/gitlab.svg",
        color: "tech-orange",
        category: Category::Tools,
        level: Some(Level::Expert),
    },
    Technology {
        name: "Asana",
        icon: "/asana.svg",
        color: "tech-pink",
        category: Category::Tools,
        level: Some(Level::Advanced),
    },
    Technology {
        name: "JWT",
        icon: "🔐",
        color: "tech-neutral",
        category: Category::Tools,
        level: Some(Level::Advanced),
    },
];

pub static EXPERIENCE_ENTRIES: [ExperienceEntry; 2] = [
    ExperienceEntry {
        id: "navilens",
        company: "Navilens",
        position: "Desarrollador Full Stack",
        period: "Febrero 2025",
        description: "Desarrollo y mantenimiento de aplicaciones web con Angular, \
            incluyendo un maquetador de plantillas que procesa JSON y datos de Excel \
            para generar vistas visuales editables. Gestión de integraciones con AWS \
            S3 y CloudFront para el manejo de documentos.",
        technologies: &[
            "Angular",
            "TypeScript",
            "AWS",
            "CloudFront",
            "Firebase",
            "JavaScript",
            "HTML",
            "CSS",
        ],
        location: Some("España"),
        employment: Some(EmploymentType::FullTime),
        achievements: &[
            "Desarrollo de maquetador de plantillas con Angular",
            "Integración con AWS S3 para gestión de documentos",
            "Mantenimiento web Accesible QR de Navilens",
            "Implementación de nuevas features en app Android",
            "Gestión de notificaciones Firebase con topics",
            "Sistema de autenticación JWT",
        ],
        project_image: Some("/navilens.jpg"),
    },
    ExperienceEntry {
        id: "lol-esports-tracker",
        company: "Proyecto Personal",
        position: "Desarrollador Android",
        period: "2024 - Presente",
        description: "Desarrollo de \"Lol Esports Tracker\", una aplicación Android \
            nativa en Kotlin y Jetpack Compose para seguimiento de esports de League \
            of Legends. Actualmente en proceso de migración a Kotlin Multiplatform \
            para soporte iOS.",
        technologies: &[
            "Kotlin",
            "Jetpack Compose",
            "Android",
            "KMP",
            "Firebase",
            "React",
        ],
        location: Some("Proyecto Personal"),
        employment: Some(EmploymentType::Freelance),
        achievements: &[
            "Aplicación completamente nativa en Kotlin",
            "UI moderna con Jetpack Compose",
            "Migración en curso a Kotlin Multiplatform",
            "Integración con APIs de League of Legends",
            "Gestión de estado con arquitectura MVVM",
        ],
        project_image: Some("/lolesportstracker.png"),
    },
];

pub static CONTACT_LINKS: [ContactLink; 3] = [
    ContactLink {
        name: "Email",
        url: "mailto:amglorca@gmail.com",
        icon: "📧",
        color: "tech-red",
    },
    ContactLink {
        name: "LinkedIn",
        url: "https://www.linkedin.com/in/alvaro-minarro-gil/",
        icon: "/linkedin.svg",
        color: "tech-blue",
    },
    ContactLink {
        name: "GitHub",
        url: "https://github.com/AlvaroMinarro",
        icon: "/github.svg",
        color: "tech-neutral",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn technology_names_are_unique() {
        let names: HashSet<_> = TECHNOLOGIES.iter().map(|tech| tech.name).collect();
        assert_eq!(names.len(), TECHNOLOGIES.len());
    }

    #[test]
    fn experience_ids_are_unique() {
        let ids: HashSet<_> = EXPERIENCE_ENTRIES.iter().map(|entry| entry.id).collect();
        assert_eq!(ids.len(), EXPERIENCE_ENTRIES.len());
    }

    #[test]
    fn contact_urls_use_allowed_schemes() {
        for link in &CONTACT_LINKS {
            assert!(
                link.url.starts_with("mailto:") || link.url.starts_with("https:"),
                "unexpected scheme in {}",
                link.url
            );
        }
    }
}
