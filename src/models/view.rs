// ============================================================================
// VIEW MODELS - Datos ya normalizados para renderizar
// ============================================================================
// Todos los valores por defecto se resuelven UNA vez al recibir los datos;
// los componentes no vuelven a aplicar fallbacks.
// ============================================================================

use crate::models::dessert::{DessertDetail, DessertSummary};
use crate::models::viewport::Viewport;
use crate::utils::constants::*;

/// Tarjeta del catálogo
#[derive(Clone, PartialEq, Debug)]
pub struct DessertCard {
    pub id: String,
    pub name: String,
    pub image: String,
    pub image_alt: String,
}

impl From<DessertSummary> for DessertCard {
    fn from(summary: DessertSummary) -> Self {
        let name = non_empty(summary.name);
        Self {
            id: summary.id,
            image: non_empty(summary.main_image).unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            image_alt: name.clone().unwrap_or_else(|| "Cake".to_string()),
            name: name.unwrap_or_else(|| DEFAULT_CAKE_NAME.to_string()),
        }
    }
}

/// Detalle de producto listo para la vista
#[derive(Clone, PartialEq, Debug)]
pub struct ProductView {
    pub id: Option<String>,
    pub name: String,
    pub image_alt: String,
    pub description: String,
    pub price_label: String,
    pub category: String,
    /// Imagen principal inicial (o placeholder)
    pub main_image: String,
    /// Candidatas no vacías: mainImage, addImage1, addImage2 (en ese orden)
    pub gallery: Vec<String>,
}

impl From<DessertDetail> for ProductView {
    fn from(detail: DessertDetail) -> Self {
        let name = non_empty(detail.name);
        let main_image = non_empty(detail.main_image);
        let gallery: Vec<String> = [
            main_image.clone(),
            non_empty(detail.add_image1),
            non_empty(detail.add_image2),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self {
            id: non_empty(detail.id),
            image_alt: name.clone().unwrap_or_else(|| "Product".to_string()),
            name: name.unwrap_or_else(|| DEFAULT_PRODUCT_NAME.to_string()),
            description: non_empty(detail.description)
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            price_label: format_price(detail.price),
            category: non_empty(detail.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            main_image: main_image.unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            gallery,
        }
    }
}

impl ProductView {
    /// ¿La descripción supera el presupuesto de caracteres?
    pub fn is_description_long(&self, max_chars: usize) -> bool {
        self.description.chars().count() > max_chars
    }

    pub fn truncated_description(&self, max_chars: usize) -> String {
        if !self.is_description_long(max_chars) {
            return self.description.clone();
        }
        let mut truncated: String = self.description.chars().take(max_chars).collect();
        truncated.push_str(TRUNCATION_SUFFIX);
        truncated
    }

    /// Texto a mostrar: completo en viewport ancho o expandido, truncado si no
    pub fn visible_description(&self, expanded: bool, viewport: Viewport, max_chars: usize) -> String {
        if expanded || !viewport.is_narrow() {
            self.description.clone()
        } else {
            self.truncated_description(max_chars)
        }
    }

    /// El toggle solo existe en viewport estrecho con descripción larga
    pub fn shows_description_toggle(&self, viewport: Viewport, max_chars: usize) -> bool {
        viewport.is_narrow() && self.is_description_long(max_chars)
    }

    /// ¿La URL es una de las imágenes de este producto (o el placeholder)?
    pub fn owns_image(&self, url: &str) -> bool {
        url == PLACEHOLDER_IMAGE || self.gallery.iter().any(|img| img == url)
    }
}

/// Precio con dos decimales, o "N/A" si falta
///
/// Un precio 0 se muestra "0.00"; la tienda JS lo trataba como falsy y
/// mostraba "N/A".
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) if p.is_finite() => format!("{:.2}", p),
        _ => PRICE_NOT_AVAILABLE.to_string(),
    }
}

pub fn toggle_label(expanded: bool) -> &'static str {
    if expanded {
        SHOW_LESS_LABEL
    } else {
        SHOW_MORE_LABEL
    }
}

/// Cadenas vacías cuentan como ausentes (los espacios no)
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail() -> DessertDetail {
        DessertDetail {
            id: Some("d1".to_string()),
            name: Some("Tarte Tatin".to_string()),
            description: Some("Caramelized apples".to_string()),
            price: Some(4.0),
            category: Some("Tarts".to_string()),
            main_image: Some("main.png".to_string()),
            add_image1: Some("one.png".to_string()),
            add_image2: None,
        }
    }

    const NARROW: Viewport = Viewport { width: 375, narrow_below: 768 };
    const WIDE: Viewport = Viewport { width: 1024, narrow_below: 768 };

    #[test]
    fn test_card_defaults() {
        let card = DessertCard::from(DessertSummary {
            id: "c1".to_string(),
            name: None,
            main_image: Some(String::new()),
        });
        assert_eq!(card.name, "Unnamed Cake");
        assert_eq!(card.image, PLACEHOLDER_IMAGE);
        assert_eq!(card.image_alt, "Cake");
    }

    #[test]
    fn test_whitespace_is_not_treated_as_absent() {
        let card = DessertCard::from(DessertSummary {
            id: "c3".to_string(),
            name: Some(" ".to_string()),
            main_image: None,
        });
        assert_eq!(card.name, " ");
        assert_eq!(card.image_alt, " ");
        assert_eq!(card.image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_card_keeps_values() {
        let card = DessertCard::from(DessertSummary {
            id: "c2".to_string(),
            name: Some("Opera".to_string()),
            main_image: Some("opera.png".to_string()),
        });
        assert_eq!(card.id, "c2");
        assert_eq!(card.name, "Opera");
        assert_eq!(card.image, "opera.png");
        assert_eq!(card.image_alt, "Opera");
    }

    #[test]
    fn test_price_formatting() {
        assert_eq!(format_price(Some(4.0)), "4.00");
        assert_eq!(format_price(Some(3.456)), "3.46");
        assert_eq!(format_price(Some(0.0)), "0.00");
        assert_eq!(format_price(None), "N/A");
        assert_eq!(format_price(Some(f64::NAN)), "N/A");
    }

    #[test]
    fn test_product_defaults() {
        let view = ProductView::from(DessertDetail {
            id: None,
            name: None,
            description: None,
            price: None,
            category: Some(String::new()),
            main_image: None,
            add_image1: None,
            add_image2: None,
        });
        assert_eq!(view.name, "Unnamed Product");
        assert_eq!(view.image_alt, "Product");
        assert_eq!(view.description, DEFAULT_DESCRIPTION);
        assert_eq!(view.price_label, "N/A");
        assert_eq!(view.category, "Uncategorized");
        assert_eq!(view.main_image, PLACEHOLDER_IMAGE);
        assert!(view.gallery.is_empty());
    }

    #[test]
    fn test_gallery_skips_missing_images_in_order() {
        let mut d = detail();
        d.add_image1 = None;
        d.add_image2 = Some("two.png".to_string());
        let view = ProductView::from(d);
        assert_eq!(view.gallery, vec!["main.png".to_string(), "two.png".to_string()]);
        assert_eq!(view.main_image, "main.png");
        assert!(view.owns_image("two.png"));
        assert!(view.owns_image(PLACEHOLDER_IMAGE));
        assert!(!view.owns_image("other.png"));
    }

    #[test]
    fn test_short_description_never_truncated() {
        let view = ProductView::from(detail());
        assert!(!view.shows_description_toggle(NARROW, 100));
        assert_eq!(view.visible_description(false, NARROW, 100), "Caramelized apples");
    }

    #[test]
    fn test_long_description_truncation_narrow_and_wide() {
        let mut d = detail();
        d.description = Some("a".repeat(150));
        let view = ProductView::from(d);

        assert!(view.shows_description_toggle(NARROW, 100));
        let truncated = view.visible_description(false, NARROW, 100);
        assert_eq!(truncated, format!("{}...", "a".repeat(100)));
        assert_eq!(view.visible_description(true, NARROW, 100), "a".repeat(150));

        assert!(!view.shows_description_toggle(WIDE, 100));
        assert_eq!(view.visible_description(false, WIDE, 100), "a".repeat(150));
        assert_eq!(view.visible_description(true, WIDE, 100), "a".repeat(150));
    }

    #[test]
    fn test_truncation_counts_chars_not_bytes() {
        let mut d = detail();
        d.description = Some("é".repeat(101));
        let view = ProductView::from(d);
        assert_eq!(view.truncated_description(100), format!("{}...", "é".repeat(100)));
    }

    #[test]
    fn test_toggle_label() {
        assert_eq!(toggle_label(false), "Show More");
        assert_eq!(toggle_label(true), "Show Less");
    }
}
