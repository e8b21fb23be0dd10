//! Template registry: read-only catalog of named starter templates, plus suggested first messages.
//!
//! The registry is an explicit value handed to presentation code; there is no global instance.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A starter template shown to the user before the first message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Unique name, used for lookup.
    pub name: String,
    pub label: String,
    pub description: String,
    pub tags: BTreeSet<String>,
    /// Icon class name, e.g. `i-ph:file-text`.
    pub icon: String,
}

impl Template {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
        tags: &[&str],
        icon: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            description: description.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            icon: icon.into(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

/// Ordered, read-only list of templates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TemplateRegistry {
    templates: Vec<Template>,
}

impl TemplateRegistry {
    pub fn new(templates: Vec<Template>) -> Self {
        Self { templates }
    }

    /// The built-in starter templates.
    pub fn builtin() -> Self {
        Self::new(vec![
            Template::new(
                "Long-Form Sales Letter",
                "Sales Letter - Long Form",
                "Klassischer Long-Form Sales Letter mit AIDA-Framework und Storytelling",
                &["sales-letter", "long-form", "conversion", "aida"],
                "i-ph:file-text",
            ),
            Template::new(
                "Short-Form Sales Letter",
                "Sales Letter - Short Form",
                "Kompakter Sales Letter für schnelle Conversion-Entscheidungen",
                &["sales-letter", "short-form", "conversion"],
                "i-ph:file-text",
            ),
            Template::new(
                "VSL Script - PAS",
                "Video Sales Letter Script",
                "VSL-Script mit Problem-Agitate-Solution Framework und Timecodes",
                &["vsl", "video", "script", "pas-framework"],
                "i-ph:video",
            ),
            Template::new(
                "Landing Page - Lead Gen",
                "Landing Page für Lead-Generierung",
                "Conversion-optimierte Landing Page für E-Mail-Sammlung und Lead-Magnets",
                &["landing-page", "lead-generation", "conversion"],
                "i-ph:desktop",
            ),
            Template::new(
                "Landing Page - Webinar",
                "Webinar-Anmeldeseite",
                "Landing Page speziell für Webinar-Registrierungen mit Countdown",
                &["landing-page", "webinar", "registration"],
                "i-ph:presentation",
            ),
            Template::new(
                "E-Book Chapter",
                "Buchkapitel (Ratgeber)",
                "Strukturiertes Buchkapitel mit Einleitung, Hauptteil und Zusammenfassung",
                &["book", "e-book", "chapter", "ratgeber"],
                "i-ph:book",
            ),
            Template::new(
                "Email Sequence",
                "E-Mail-Sequenz",
                "5-teilige E-Mail-Sequenz für Produktlaunch oder Nurturing",
                &["email", "sequence", "nurture", "launch"],
                "i-ph:envelope",
            ),
            Template::new(
                "Facebook Ad Copy",
                "Facebook/Instagram Ads",
                "Social Media Ad-Copy mit Hook, Benefit und CTA",
                &["ads", "facebook", "instagram", "social-media"],
                "i-ph:megaphone",
            ),
            Template::new(
                "Google Ads Copy",
                "Google Ads",
                "Suchmaschinen-Anzeigen mit optimierten Headlines und Descriptions",
                &["ads", "google", "search", "ppc"],
                "i-ph:magnifying-glass",
            ),
            Template::new(
                "Product Description",
                "Produktbeschreibung",
                "Benefit-fokussierte Produktbeschreibung für E-Commerce",
                &["product", "e-commerce", "description"],
                "i-ph:shopping-cart",
            ),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Template with exactly this name.
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.name == name)
    }

    /// Templates carrying `tag`, in registry order.
    pub fn with_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Template> + 'a {
        self.templates.iter().filter(move |t| t.has_tag(tag))
    }

    /// Every tag used by any template, sorted.
    pub fn tags(&self) -> BTreeSet<&str> {
        self.templates
            .iter()
            .flat_map(|t| t.tags.iter().map(String::as_str))
            .collect()
    }
}

impl<'a> IntoIterator for &'a TemplateRegistry {
    type Item = &'a Template;
    type IntoIter = std::slice::Iter<'a, Template>;

    fn into_iter(self) -> Self::IntoIter {
        self.templates.iter()
    }
}

/// A suggested first message offered on an empty chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExamplePrompt {
    pub text: &'static str,
}

const EXAMPLE_PROMPTS: &[ExamplePrompt] = &[
    ExamplePrompt {
        text: "Schreibe einen Sales Letter für einen Online-Kurs über Zeitmanagement",
    },
    ExamplePrompt {
        text: "Erstelle ein VSL-Script für ein Coaching-Programm",
    },
    ExamplePrompt {
        text: "Generiere eine Landing Page für ein kostenloses E-Book",
    },
    ExamplePrompt {
        text: "Schreibe Facebook Ads für ein Fitness-Produkt",
    },
    ExamplePrompt {
        text: "Erstelle das erste Kapitel eines Buchs über finanzielle Freiheit",
    },
    ExamplePrompt {
        text: "Schreibe eine E-Mail-Sequenz für einen Produktlaunch",
    },
];

/// The suggested first messages, in display order.
pub fn example_prompts() -> &'static [ExamplePrompt] {
    EXAMPLE_PROMPTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_ten_unique_names() {
        let reg = TemplateRegistry::builtin();
        assert_eq!(reg.len(), 10);
        let names: BTreeSet<&str> = reg.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names.len(), 10);
    }

    #[test]
    fn get_by_name() {
        let reg = TemplateRegistry::builtin();
        let t = reg.get("VSL Script - PAS").unwrap();
        assert_eq!(t.icon, "i-ph:video");
        assert!(t.has_tag("pas-framework"));
        assert!(reg.get("Nope").is_none());
    }

    /// **Scenario**: filtering by tag keeps registry order.
    #[test]
    fn with_tag_filters_in_order() {
        let reg = TemplateRegistry::builtin();
        let names: Vec<&str> = reg.with_tag("landing-page").map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Landing Page - Lead Gen", "Landing Page - Webinar"]);
        assert_eq!(reg.with_tag("ads").count(), 2);
        assert_eq!(reg.with_tag("unknown").count(), 0);
    }

    #[test]
    fn custom_registry() {
        let reg = TemplateRegistry::new(vec![Template::new("A", "a", "d", &["x", "x", "y"], "i")]);
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.get("A").unwrap().tags.len(), 2);
        assert_eq!(reg.tags().into_iter().collect::<Vec<_>>(), vec!["x", "y"]);
        assert!(TemplateRegistry::default().is_empty());
    }

    #[test]
    fn six_example_prompts() {
        assert_eq!(example_prompts().len(), 6);
        assert!(example_prompts()[0].text.contains("Zeitmanagement"));
    }
}
