//! Translation bags.
//!
//! One complete static bag per supported language. Because every bag is
//! the same struct type, a missing key in one language simply cannot
//! compile; the tests below only have to check that no leaf was left
//! empty. Lookup is a direct match on [`Language`], never a scan.

use crate::types::{EmploymentType, Language, Level};

pub struct NavStrings {
    pub home: &'static str,
    pub about: &'static str,
    pub technologies: &'static str,
    pub experience: &'static str,
    pub contact: &'static str,
}

pub struct HeroBadges {
    pub android_expert: &'static str,
    pub kotlin_compose: &'static str,
    pub full_stack: &'static str,
}

pub struct HeroStrings {
    pub greeting: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub education: &'static str,
    pub description: &'static str,
    pub cta: &'static str,
    pub scroll: &'static str,
    pub download_cv: &'static str,
    pub status: &'static str,
    pub badges: HeroBadges,
}

pub struct AboutStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static [&'static str],
    pub skills: &'static str,
    pub download_cv: &'static str,
}

pub struct CategoryLabels {
    pub all: &'static str,
    pub mobile: &'static str,
    pub frontend: &'static str,
    pub backend: &'static str,
    pub database: &'static str,
    pub tools: &'static str,
}

pub struct TechnologyStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub categories: CategoryLabels,
}

pub struct ExperienceStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub present: &'static str,
    pub view_more: &'static str,
    pub view_less: &'static str,
    pub used_technologies: &'static str,
    pub achievements: &'static str,
    pub personal: &'static str,
    pub professional: &'static str,
}

/// Contact-form labels. The original site models the form but never
/// submits it; the strings stay here as placeholders for that feature.
pub struct ContactFormStrings {
    pub name: &'static str,
    pub email: &'static str,
    pub message: &'static str,
    pub send: &'static str,
    pub sending: &'static str,
    pub success: &'static str,
    pub error: &'static str,
}

pub struct ContactLinkStrings {
    pub email: &'static str,
    pub email_hint: &'static str,
    /// Prefix completed with the link name: "Connect with me on GitHub".
    pub connect_hint: &'static str,
}

pub struct ContactStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta_title: &'static str,
    pub cta_description: &'static str,
    pub form: ContactFormStrings,
    pub links: ContactLinkStrings,
}

pub struct FooterStrings {
    pub made_with: &'static str,
    pub and: &'static str,
    pub rights: &'static str,
}

pub struct TranslationBag {
    pub nav: NavStrings,
    pub hero: HeroStrings,
    pub about: AboutStrings,
    pub technologies: TechnologyStrings,
    pub experience: ExperienceStrings,
    pub contact: ContactStrings,
    pub footer: FooterStrings,
}

impl TranslationBag {
    /// Every leaf string of the bag, used by the completeness test.
    pub fn leaves(&self) -> Vec<&'static str> {
        let mut leaves = vec![
            self.nav.home,
            self.nav.about,
            self.nav.technologies,
            self.nav.experience,
            self.nav.contact,
            self.hero.greeting,
            self.hero.name,
            self.hero.role,
            self.hero.education,
            self.hero.description,
            self.hero.cta,
            self.hero.scroll,
            self.hero.download_cv,
            self.hero.status,
            self.hero.badges.android_expert,
            self.hero.badges.kotlin_compose,
            self.hero.badges.full_stack,
            self.about.title,
            self.about.subtitle,
            self.about.skills,
            self.about.download_cv,
            self.technologies.title,
            self.technologies.subtitle,
            self.technologies.categories.all,
            self.technologies.categories.mobile,
            self.technologies.categories.frontend,
            self.technologies.categories.backend,
            self.technologies.categories.database,
            self.technologies.categories.tools,
            self.experience.title,
            self.experience.subtitle,
            self.experience.present,
            self.experience.view_more,
            self.experience.view_less,
            self.experience.used_technologies,
            self.experience.achievements,
            self.experience.personal,
            self.experience.professional,
            self.contact.title,
            self.contact.subtitle,
            self.contact.cta_title,
            self.contact.cta_description,
            self.contact.form.name,
            self.contact.form.email,
            self.contact.form.message,
            self.contact.form.send,
            self.contact.form.sending,
            self.contact.form.success,
            self.contact.form.error,
            self.contact.links.email,
            self.contact.links.email_hint,
            self.contact.links.connect_hint,
            self.footer.made_with,
            self.footer.and,
            self.footer.rights,
        ];
        leaves.extend_from_slice(self.about.description);
        leaves
    }
}

pub static ES: TranslationBag = TranslationBag {
    nav: NavStrings {
        home: "Inicio",
        about: "Sobre mí",
        technologies: "Tecnologías",
        experience: "Experiencia",
        contact: "Contacto",
    },
    hero: HeroStrings {
        greeting: "Hola, soy",
        name: "Álvaro Miñarro",
        role: "Desarrollador Android & Full Stack",
        education: "Técnico Superior en Desarrollo de Aplicaciones Multiplataforma",
        description: "Especializado en desarrollo Android nativo con Kotlin y Jetpack \
            Compose, con experiencia full stack en Angular, React y Node.js.",
        cta: "Contáctame",
        scroll: "Desliza para descubrir",
        download_cv: "Descargar CV",
        status: "Disponible para nuevos proyectos",
        badges: HeroBadges {
            android_expert: "Experto en Android",
            kotlin_compose: "Kotlin & Compose",
            full_stack: "Full Stack",
        },
    },
    about: AboutStrings {
        title: "Sobre mí",
        subtitle: "Desarrollador apasionado por crear experiencias móviles y web",
        description: &[
            "Soy desarrollador Android con experiencia construyendo aplicaciones \
             nativas en Kotlin y Jetpack Compose, desde el diseño de la interfaz \
             hasta la arquitectura y la publicación.",
            "También trabajo como desarrollador full stack con Angular, React y \
             Node.js, integrando servicios en la nube como AWS y Firebase.",
            "Me gusta aprender tecnología nueva: ahora mismo estoy migrando mis \
             proyectos a Kotlin Multiplatform para llevarlos a iOS.",
        ],
        skills: "Habilidades",
        download_cv: "Descargar CV",
    },
    technologies: TechnologyStrings {
        title: "Tecnologías",
        subtitle: "Herramientas y lenguajes con los que trabajo a diario",
        categories: CategoryLabels {
            all: "Todas",
            mobile: "Móvil",
            frontend: "Frontend",
            backend: "Backend",
            database: "Bases de datos",
            tools: "Herramientas",
        },
    },
    experience: ExperienceStrings {
        title: "Experiencia",
        subtitle: "Mi trayectoria profesional y proyectos destacados",
        present: "Actualidad",
        view_more: "Ver más",
        view_less: "Ver menos",
        used_technologies: "Tecnologías utilizadas",
        achievements: "Logros destacados",
        personal: "Personal",
        professional: "Profesional",
    },
    contact: ContactStrings {
        title: "Contacto",
        subtitle: "¿Tienes un proyecto en mente? Hablemos",
        cta_title: "Construyamos algo juntos",
        cta_description: "Estoy abierto a nuevas oportunidades y colaboraciones. \
            Escríbeme y te responderé lo antes posible.",
        form: ContactFormStrings {
            name: "Nombre",
            email: "Correo electrónico",
            message: "Mensaje",
            send: "Enviar",
            sending: "Enviando…",
            success: "Mensaje enviado correctamente",
            error: "No se pudo enviar el mensaje",
        },
        links: ContactLinkStrings {
            email: "Correo electrónico",
            email_hint: "Envíame un mensaje",
            connect_hint: "Conecta conmigo en",
        },
    },
    footer: FooterStrings {
        made_with: "Hecho con",
        and: "y",
        rights: "Todos los derechos reservados.",
    },
};

pub static EN: TranslationBag = TranslationBag {
    nav: NavStrings {
        home: "Home",
        about: "About",
        technologies: "Technologies",
        experience: "Experience",
        contact: "Contact",
    },
    hero: HeroStrings {
        greeting: "Hi, I'm",
        name: "Álvaro Miñarro",
        role: "Android & Full Stack Developer",
        education: "Higher Degree in Multiplatform Application Development",
        description: "Specialized in native Android development with Kotlin and \
            Jetpack Compose, with full stack experience in Angular, React and Node.js.",
        cta: "Get in touch",
        scroll: "Scroll to explore",
        download_cv: "Download CV",
        status: "Available for new projects",
        badges: HeroBadges {
            android_expert: "Android Expert",
            kotlin_compose: "Kotlin & Compose",
            full_stack: "Full Stack",
        },
    },
    about: AboutStrings {
        title: "About me",
        subtitle: "A developer passionate about mobile and web experiences",
        description: &[
            "I'm an Android developer with experience building native apps in \
             Kotlin and Jetpack Compose, from UI design through architecture to \
             release.",
            "I also work as a full stack developer with Angular, React and \
             Node.js, integrating cloud services such as AWS and Firebase.",
            "I enjoy picking up new technology: right now I'm migrating my \
             projects to Kotlin Multiplatform to bring them to iOS.",
        ],
        skills: "Skills",
        download_cv: "Download CV",
    },
    technologies: TechnologyStrings {
        title: "Technologies",
        subtitle: "Tools and languages I work with every day",
        categories: CategoryLabels {
            all: "All",
            mobile: "Mobile",
            frontend: "Frontend",
            backend: "Backend",
            database: "Databases",
            tools: "Tools",
        },
    },
    experience: ExperienceStrings {
        title: "Experience",
        subtitle: "My professional journey and highlighted projects",
        present: "Present",
        view_more: "View more",
        view_less: "View less",
        used_technologies: "Technologies used",
        achievements: "Key achievements",
        personal: "Personal",
        professional: "Professional",
    },
    contact: ContactStrings {
        title: "Contact",
        subtitle: "Have a project in mind? Let's talk",
        cta_title: "Let's build something together",
        cta_description: "I'm open to new opportunities and collaborations. Drop me \
            a line and I'll get back to you as soon as possible.",
        form: ContactFormStrings {
            name: "Name",
            email: "Email",
            message: "Message",
            send: "Send",
            sending: "Sending…",
            success: "Message sent successfully",
            error: "The message could not be sent",
        },
        links: ContactLinkStrings {
            email: "Email",
            email_hint: "Send me a message",
            connect_hint: "Connect with me on",
        },
    },
    footer: FooterStrings {
        made_with: "Made with",
        and: "and",
        rights: "All rights reserved.",
    },
};

/// The complete bag for `language`. O(1), and always fully populated
/// since the bags are statics.
pub fn translations(language: Language) -> &'static TranslationBag {
    match language {
        Language::Es => &ES,
        Language::En => &EN,
    }
}

/// Display label for a proficiency level, per language.
pub fn level_label(language: Language, level: Level) -> &'static str {
    match (language, level) {
        (Language::Es, Level::Learning) => "Estudiando",
        (Language::Es, Level::Advanced) => "Avanzado",
        (Language::Es, Level::Expert) => "Experto",
        (Language::En, Level::Learning) => "Learning",
        (Language::En, Level::Advanced) => "Advanced",
        (Language::En, Level::Expert) => "Expert",
    }
}

/// Display label for an employment type, per language.
pub fn employment_label(language: Language, employment: EmploymentType) -> &'static str {
    match (language, employment) {
        (Language::Es, EmploymentType::FullTime) => "Tiempo completo",
        (Language::Es, EmploymentType::PartTime) => "Tiempo parcial",
        (Language::Es, EmploymentType::Contract) => "Contrato",
        (Language::En, EmploymentType::FullTime) => "Full-time",
        (Language::En, EmploymentType::PartTime) => "Part-time",
        (Language::En, EmploymentType::Contract) => "Contract",
        (_, EmploymentType::Freelance) => "Freelance",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_leaf_is_populated_in_both_languages() {
        for (code, bag) in [("es", &ES), ("en", &EN)] {
            for leaf in bag.leaves() {
                assert!(!leaf.trim().is_empty(), "empty leaf in {code} bag");
            }
        }
    }

    #[test]
    fn bags_have_the_same_shape() {
        // Structural completeness is guaranteed by the shared struct
        // type; this only pins the leaf count so both sides stay in sync
        // when keys are added.
        assert_eq!(ES.leaves().len(), EN.leaves().len());
    }

    #[test]
    fn lookup_returns_the_matching_bag() {
        assert!(std::ptr::eq(translations(Language::Es), &ES));
        assert!(std::ptr::eq(translations(Language::En), &EN));
    }

    #[test]
    fn level_labels_follow_language() {
        assert_eq!(level_label(Language::Es, Level::Learning), "Estudiando");
        assert_eq!(level_label(Language::En, Level::Learning), "Learning");
        assert_eq!(level_label(Language::En, Level::Expert), "Expert");
    }

    #[test]
    fn employment_labels_follow_language() {
        assert_eq!(
            employment_label(Language::Es, EmploymentType::FullTime),
            "Tiempo completo"
        );
        assert_eq!(
            employment_label(Language::En, EmploymentType::FullTime),
            "Full-time"
        );
        assert_eq!(
            employment_label(Language::Es, EmploymentType::Freelance),
            "Freelance"
        );
    }
}
