//! Pricing plans and the plan comparison table.

use crate::core::lang::Language;
use crate::core::localize::LocalizedText;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub id: &'static str,
    pub name: LocalizedText,
    pub price: &'static str,
    pub period: LocalizedText,
    pub features: &'static [LocalizedText],
    /// Revealed when the card is expanded.
    pub extra_features: &'static [LocalizedText],
    pub featured: bool,
}

const fn t(en: &'static str, es: &'static str) -> LocalizedText {
    LocalizedText::new(en, es)
}

pub const PLANS: &[Plan] = &[
    Plan {
        id: "starter",
        name: t("Starter", "Inicial"),
        price: "$490",
        period: t("one-time", "pago único"),
        features: &[
            t("One-page website", "Sitio web de una página"),
            t("Mobile-first design", "Diseño adaptable a móviles"),
            t("Contact form", "Formulario de contacto"),
        ],
        extra_features: &[
            t("Basic SEO setup", "Configuración SEO básica"),
            t("1 round of revisions", "1 ronda de revisiones"),
        ],
        featured: false,
    },
    Plan {
        id: "business",
        name: t("Business", "Negocio"),
        price: "$1,290",
        period: t("one-time", "pago único"),
        features: &[
            t("Up to 6 pages", "Hasta 6 páginas"),
            t("Bilingual content", "Contenido bilingüe"),
            t("Blog or news section", "Sección de blog o noticias"),
        ],
        extra_features: &[
            t("Analytics dashboard", "Panel de analíticas"),
            t("3 rounds of revisions", "3 rondas de revisiones"),
            t("Newsletter signup", "Suscripción al boletín"),
        ],
        featured: true,
    },
    Plan {
        id: "growth",
        name: t("Growth", "Crecimiento"),
        price: "$99",
        period: t("per month", "al mes"),
        features: &[
            t("Everything in Business", "Todo lo de Negocio"),
            t("Monthly content updates", "Actualizaciones mensuales de contenido"),
            t("Priority support", "Soporte prioritario"),
        ],
        extra_features: &[
            t("Quarterly UX review", "Revisión UX trimestral"),
            t("Hosting and backups", "Alojamiento y copias de seguridad"),
        ],
        featured: false,
    },
];

/// One plan's entry in a comparison row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonCell {
    pub value: LocalizedText,
    /// Tooltip pair (`tipEn` / `tipEs` in the markup).
    pub tip: Option<LocalizedText>,
    /// Plan label shown above the cell on narrow screens.
    pub plan: LocalizedText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonRow {
    pub feature: LocalizedText,
    pub cells: [ComparisonCell; 3],
}

const fn cell(value: LocalizedText, tip: Option<LocalizedText>, plan: usize) -> ComparisonCell {
    ComparisonCell {
        value,
        tip,
        plan: PLANS[plan].name,
    }
}

const YES: LocalizedText = t("Included", "Incluido");
const NO: LocalizedText = t("—", "—");

pub const COMPARISON: &[ComparisonRow] = &[
    ComparisonRow {
        feature: t("Pages", "Páginas"),
        cells: [
            cell(t("1", "1"), None, 0),
            cell(t("Up to 6", "Hasta 6"), None, 1),
            cell(t("Unlimited", "Ilimitadas"), Some(t("Added monthly", "Se añaden cada mes")), 2),
        ],
    },
    ComparisonRow {
        feature: t("Languages", "Idiomas"),
        cells: [
            cell(t("1", "1"), None, 0),
            cell(t("2", "2"), Some(t("English and Spanish", "Inglés y español")), 1),
            cell(t("2", "2"), Some(t("English and Spanish", "Inglés y español")), 2),
        ],
    },
    ComparisonRow {
        feature: t("SEO", "SEO"),
        cells: [
            cell(t("Basic", "Básico"), Some(t("Titles, meta tags and sitemap", "Títulos, metaetiquetas y mapa del sitio")), 0),
            cell(t("Advanced", "Avanzado"), Some(t("Includes keyword research", "Incluye investigación de palabras clave")), 1),
            cell(t("Ongoing", "Continuo"), Some(t("Monthly reports", "Informes mensuales")), 2),
        ],
    },
    ComparisonRow {
        feature: t("Analytics", "Analíticas"),
        cells: [
            cell(NO, None, 0),
            cell(YES, None, 1),
            cell(YES, Some(t("With quarterly review", "Con revisión trimestral")), 2),
        ],
    },
    ComparisonRow {
        feature: t("Support", "Soporte"),
        cells: [
            cell(t("30 days", "30 días"), None, 0),
            cell(t("90 days", "90 días"), None, 1),
            cell(t("Priority", "Prioritario"), Some(t("Reply within one business day", "Respuesta en un día hábil")), 2),
        ],
    },
];

/// A comparison cell with every text resolved for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedCell {
    pub value: &'static str,
    pub tip: Option<&'static str>,
    pub plan: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedRow {
    pub feature: &'static str,
    pub cells: Vec<LocalizedCell>,
}

pub fn localize_row(row: &ComparisonRow, lang: Language) -> LocalizedRow {
    LocalizedRow {
        feature: row.feature.get(lang),
        cells: row
            .cells
            .iter()
            .map(|c| LocalizedCell {
                value: c.value.get(lang),
                tip: c.tip.map(|tip| tip.get(lang)),
                plan: c.plan.get(lang),
            })
            .collect(),
    }
}

pub fn localize_table(rows: &[ComparisonRow], lang: Language) -> Vec<LocalizedRow> {
    rows.iter().map(|row| localize_row(row, lang)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_relabels_everything_per_language() {
        let es = localize_table(COMPARISON, Language::Es);
        assert_eq!(es[0].feature, "Páginas");
        assert_eq!(es[0].cells[2].value, "Ilimitadas");
        assert_eq!(es[0].cells[2].tip, Some("Se añaden cada mes"));
        assert_eq!(es[0].cells[1].plan, "Negocio");

        let en = localize_table(COMPARISON, Language::En);
        assert_eq!(en[0].cells[1].plan, "Business");
        assert_eq!(en[1].cells[1].tip, Some("English and Spanish"));
        assert_eq!(en[0].cells[0].tip, None);
    }

    #[test]
    fn every_row_has_a_cell_per_plan() {
        for row in COMPARISON {
            for (i, cell) in row.cells.iter().enumerate() {
                assert_eq!(cell.plan, PLANS[i].name);
            }
        }
    }

    #[test]
    fn every_plan_has_something_to_expand() {
        assert!(PLANS.iter().all(|plan| !plan.extra_features.is_empty()));
        assert_eq!(PLANS.iter().filter(|plan| plan.featured).count(), 1);
    }
}
