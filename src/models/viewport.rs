/// Ancho actual del viewport (px), inyectado via contexto
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Viewport {
    pub width: u32,
    /// Umbral: por debajo de este ancho el viewport es "estrecho"
    pub narrow_below: u32,
}

impl Viewport {
    pub fn new(width: u32, narrow_below: u32) -> Self {
        Self { width, narrow_below }
    }

    pub fn is_narrow(&self) -> bool {
        self.width < self.narrow_below
    }
}

impl Default for Viewport {
    fn default() -> Self {
        // Sin window (tests / SSR) se asume escritorio
        Self::new(1280, 768)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrow_boundary() {
        assert!(Viewport::new(767, 768).is_narrow());
        assert!(!Viewport::new(768, 768).is_narrow());
        assert!(!Viewport::default().is_narrow());
    }
}
