/// URL base de la API de postres
/// Configurada en tiempo de compilación:
/// - Por defecto: https://cakeserver-8es2.onrender.com
/// - Otro entorno: via API_BASE_URL env var (o .env, ver build.rs)
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "https://cakeserver-8es2.onrender.com",
};

/// Imagen local usada cuando una URL falta o falla al cargar
pub const PLACEHOLDER_IMAGE: &str = "/placeholder-image.png";

// Valores por defecto (normalización)
pub const DEFAULT_CAKE_NAME: &str = "Unnamed Cake";
pub const DEFAULT_PRODUCT_NAME: &str = "Unnamed Product";
pub const DEFAULT_CATEGORY: &str = "Uncategorized";
pub const DEFAULT_DESCRIPTION: &str = "No description available.";
pub const PRICE_NOT_AVAILABLE: &str = "N/A";

// Textos de carga
pub const CATALOG_LOADING_TEXT: &str = "Loading cakes...";
pub const DETAIL_LOADING_TEXT: &str = "Loading product details...";

// Mensajes de error visibles
pub const CATALOG_FETCH_ERROR: &str = "Failed to fetch cakes. Please try again later.";
pub const INVALID_DATA_FORMAT: &str = "Invalid data format from API";
pub const PRODUCT_NOT_FOUND_REMOVED: &str = "Product not found. It may have been removed.";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection.";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";
pub const PRODUCT_NOT_FOUND: &str = "Product not found.";

// Descripción expandible
pub const SHOW_MORE_LABEL: &str = "Show More";
pub const SHOW_LESS_LABEL: &str = "Show Less";
pub const TRUNCATION_SUFFIX: &str = "...";
