// ============================================================================
// DETAIL VIEWMODEL - Máquina de estados del detalle de producto
// ============================================================================
// Pending → Fulfilled | Rejected | Cancelled (por token)
// Solo el intento vigente y no cancelado puede escribir el estado
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::models::{DessertDetail, ProductView};
use crate::services::{ApiError, CancellationToken};
use crate::utils::constants::PLACEHOLDER_IMAGE;

pub enum DetailAction {
    /// Nuevo intento (mount o cambio de ID); reemplaza al anterior
    Begin(CancellationToken),
    /// Resultado de un intento
    Resolve {
        token: CancellationToken,
        result: Result<DessertDetail, ApiError>,
    },
    SelectImage(String),
    ToggleDescription,
}

/// Modo de render activo
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum DetailRender<'a> {
    Loading,
    Error(&'a str),
    Missing,
    Ready(&'a ProductView),
}

#[derive(Clone, PartialEq, Debug)]
pub struct DetailViewModel {
    loading: bool,
    error: Option<String>,
    product: Option<ProductView>,
    selected_image: String,
    description_expanded: bool,
    current: Option<CancellationToken>,
}

impl Default for DetailViewModel {
    fn default() -> Self {
        Self {
            loading: true,
            error: None,
            product: None,
            selected_image: String::new(),
            description_expanded: false,
            current: None,
        }
    }
}

impl DetailViewModel {
    pub fn render(&self) -> DetailRender<'_> {
        if self.is_loading() {
            DetailRender::Loading
        } else if let Some(error) = &self.error {
            DetailRender::Error(error)
        } else if let Some(product) = self.product() {
            DetailRender::Ready(product)
        } else {
            DetailRender::Missing
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn product(&self) -> Option<&ProductView> {
        self.product.as_ref()
    }

    /// Imagen principal mostrada (nunca vacía)
    pub fn main_image(&self) -> &str {
        if self.selected_image.is_empty() {
            PLACEHOLDER_IMAGE
        } else {
            &self.selected_image
        }
    }

    pub fn is_description_expanded(&self) -> bool {
        self.description_expanded
    }

    /// ¿Puede este token escribir el estado?
    pub fn accepts(&self, token: &CancellationToken) -> bool {
        !token.is_cancelled() && self.current.as_ref() == Some(token)
    }

    fn begin(&mut self, token: CancellationToken) {
        if let Some(previous) = self.current.replace(token) {
            previous.cancel();
        }
        self.loading = true;
        self.error = None;
        self.product = None;
        self.selected_image.clear();
        self.description_expanded = false;
    }

    /// Devuelve false si el resultado se descartó
    fn resolve(&mut self, token: &CancellationToken, result: Result<DessertDetail, ApiError>) -> bool {
        if !self.accepts(token) {
            log::warn!("⏭️ [DETAIL] Resultado del intento {} descartado", token.attempt());
            return false;
        }
        // Cancelación no es un error: no se toca el estado
        if matches!(&result, Err(e) if e.is_aborted()) {
            return false;
        }
        match result {
            Ok(detail) => {
                let product = ProductView::from(detail);
                self.selected_image = product.main_image.clone();
                self.product = Some(product);
                self.error = None;
                self.description_expanded = false;
            }
            Err(e) => {
                log::error!("❌ [DETAIL] Error obteniendo producto: {}", e);
                self.error = Some(e.user_message().to_string());
                self.product = None;
            }
        }
        self.loading = false;
        true
    }

    fn select_image(&mut self, url: String) -> bool {
        match &self.product {
            Some(product) if product.owns_image(&url) && url != self.selected_image => {
                self.selected_image = url;
                true
            }
            _ => false,
        }
    }
}

impl Reducible for DetailViewModel {
    type Action = DetailAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            DetailAction::Begin(token) => {
                next.begin(token);
                true
            }
            DetailAction::Resolve { token, result } => next.resolve(&token, result),
            DetailAction::SelectImage(url) => next.select_image(url),
            DetailAction::ToggleDescription => {
                next.description_expanded = !next.description_expanded;
                true
            }
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}
