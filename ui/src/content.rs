//! Page copy in both languages.

use crate::core::localize::LocalizedText;

const fn t(en: &'static str, es: &'static str) -> LocalizedText {
    LocalizedText::new(en, es)
}

pub struct NavLink {
    pub href: &'static str,
    pub label: LocalizedText,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "#services", label: t("Services", "Servicios") },
    NavLink { href: "#portfolio", label: t("Portfolio", "Portafolio") },
    NavLink { href: "#pricing", label: t("Pricing", "Precios") },
    NavLink { href: "#contact", label: t("Contact", "Contacto") },
];

/// Links under the "More" dropdown.
pub const MORE_LINKS: &[NavLink] = &[
    NavLink { href: "#process", label: t("Our process", "Nuestro proceso") },
    NavLink { href: "#gallery", label: t("Gallery", "Galería") },
    NavLink { href: "#faq", label: t("FAQ", "Preguntas frecuentes") },
    NavLink { href: "#cookies", label: t("Cookie settings", "Configuración de cookies") },
];

pub const HERO_TITLE: LocalizedText = t(
    "Websites that speak your customers' language",
    "Sitios web que hablan el idioma de tus clientes",
);
pub const HERO_SUBTITLE: LocalizedText = t(
    "Design, development and bilingual content for small businesses.",
    "Diseño, desarrollo y contenido bilingüe para pequeñas empresas.",
);
pub const HERO_CTA: LocalizedText = t("Get a quote", "Solicita un presupuesto");

pub struct Service {
    pub icon: &'static str,
    pub title: LocalizedText,
    pub body: LocalizedText,
}

pub const SERVICES_TITLE: LocalizedText = t("What we do", "Lo que hacemos");

pub const SERVICES: &[Service] = &[
    Service {
        icon: "fas fa-pen-nib",
        title: t("UX/UI design", "Diseño UX/UI"),
        body: t(
            "Interfaces built around how your visitors actually browse.",
            "Interfaces pensadas en cómo navegan realmente tus visitantes.",
        ),
    },
    Service {
        icon: "fas fa-code",
        title: t("Web development", "Desarrollo web"),
        body: t(
            "Fast, accessible sites that are easy to keep up to date.",
            "Sitios rápidos y accesibles, fáciles de mantener al día.",
        ),
    },
    Service {
        icon: "fas fa-language",
        title: t("Bilingual content", "Contenido bilingüe"),
        body: t(
            "Copy written natively in English and Spanish, not machine translated.",
            "Textos escritos de forma nativa en inglés y español, sin traducción automática.",
        ),
    },
];

pub const FEATURES: &[LocalizedText] = &[
    t("Mobile first", "Pensado para móviles"),
    t("Search friendly", "Optimizado para buscadores"),
    t("Accessible by default", "Accesible desde el inicio"),
    t("No lock-in", "Sin ataduras"),
];

pub const PROCESS_TITLE: LocalizedText = t("How we work", "Cómo trabajamos");

pub const PROCESS_STEPS: &[LocalizedText] = &[
    t("Discovery call", "Llamada inicial"),
    t("Wireframes and copy", "Bocetos y textos"),
    t("Design and build", "Diseño y desarrollo"),
    t("Launch and support", "Lanzamiento y soporte"),
];

pub struct PortfolioSlide {
    pub image: &'static str,
    pub title: LocalizedText,
    pub summary: LocalizedText,
}

pub const PORTFOLIO_TITLE: LocalizedText = t("Recent work", "Trabajos recientes");

pub const PORTFOLIO: &[PortfolioSlide] = &[
    PortfolioSlide {
        image: "/images/portfolio/bakery.webp",
        title: t("Neighborhood bakery", "Panadería de barrio"),
        summary: t(
            "Online ordering and a weekly specials page.",
            "Pedidos en línea y una página de especiales semanales.",
        ),
    },
    PortfolioSlide {
        image: "/images/portfolio/clinic.webp",
        title: t("Dental clinic", "Clínica dental"),
        summary: t(
            "Appointment requests in two languages.",
            "Solicitud de citas en dos idiomas.",
        ),
    },
    PortfolioSlide {
        image: "/images/portfolio/studio.webp",
        title: t("Yoga studio", "Estudio de yoga"),
        summary: t(
            "Class schedule synced from a shared calendar.",
            "Horario de clases sincronizado desde un calendario compartido.",
        ),
    },
    PortfolioSlide {
        image: "/images/portfolio/garage.webp",
        title: t("Auto repair shop", "Taller mecánico"),
        summary: t(
            "Quote form with photo uploads.",
            "Formulario de presupuesto con fotos.",
        ),
    },
];

pub struct GalleryImage {
    pub src: &'static str,
    pub alt: LocalizedText,
}

pub const GALLERY_TITLE: LocalizedText = t("Gallery", "Galería");

pub const GALLERY: &[GalleryImage] = &[
    GalleryImage { src: "/images/gallery/office.webp", alt: t("Our office", "Nuestra oficina") },
    GalleryImage { src: "/images/gallery/workshop.webp", alt: t("Client workshop", "Taller con clientes") },
    GalleryImage { src: "/images/gallery/sketches.webp", alt: t("Early sketches", "Primeros bocetos") },
];

pub const PRICING_TITLE: LocalizedText = t("Plans", "Planes");
pub const COMPARISON_TITLE: LocalizedText = t("Compare plans", "Compara los planes");

pub struct Faq {
    pub question: LocalizedText,
    pub answer: LocalizedText,
}

pub const FAQ_TITLE: LocalizedText = t("Frequently asked questions", "Preguntas frecuentes");

pub const FAQS: &[Faq] = &[
    Faq {
        question: t("How long does a project take?", "¿Cuánto tarda un proyecto?"),
        answer: t(
            "Most sites launch within three to six weeks of the discovery call.",
            "La mayoría de los sitios se lanzan entre tres y seis semanas después de la llamada inicial.",
        ),
    },
    Faq {
        question: t("Do I own the website?", "¿El sitio web es mío?"),
        answer: t(
            "Yes. You receive the source and every account is registered in your name.",
            "Sí. Recibes el código fuente y todas las cuentas quedan a tu nombre.",
        ),
    },
    Faq {
        question: t("Can you translate my existing site?", "¿Pueden traducir mi sitio actual?"),
        answer: t(
            "We can add a Spanish or English version to most existing sites.",
            "Podemos añadir una versión en español o inglés a la mayoría de los sitios existentes.",
        ),
    },
];

pub const CTA_TITLE: LocalizedText = t("Ready to start?", "¿Listo para empezar?");
pub const CTA_BODY: LocalizedText = t(
    "Tell us about your business and we'll reply within one day.",
    "Cuéntanos sobre tu negocio y te responderemos en un día.",
);

pub const NEWSLETTER_TITLE: LocalizedText = t("Monthly tips", "Consejos mensuales");
pub const NEWSLETTER_BODY: LocalizedText = t(
    "One short email a month about getting more from your website.",
    "Un correo breve al mes para sacar más provecho de tu sitio web.",
);

pub const CONTACT_TITLE: LocalizedText = t("Contact us", "Contáctanos");

pub struct ContactInfo {
    pub icon: &'static str,
    pub text: LocalizedText,
}

pub const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo { icon: "fas fa-envelope", text: t("hello@vitrina.studio", "hola@vitrina.studio") },
    ContactInfo { icon: "fas fa-phone", text: t("+1 (555) 010-2030", "+1 (555) 010-2030") },
    ContactInfo {
        icon: "fas fa-clock",
        text: t("Mon–Fri, 9am–6pm", "Lun–Vie, 9:00–18:00"),
    },
];

pub const COOKIE_TITLE: LocalizedText = t("Cookie preferences", "Preferencias de cookies");

pub const FOOTER_TAGLINE: LocalizedText = t(
    "Bilingual websites for local businesses.",
    "Sitios web bilingües para negocios locales.",
);
pub const FOOTER_RIGHTS: LocalizedText = t("All rights reserved.", "Todos los derechos reservados.");
