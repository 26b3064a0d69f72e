use serde::{Deserialize, Serialize};

/// Postre tal como llega en `GET /api/dessert/list`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct DessertSummary {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "mainImage")]
    pub main_image: Option<String>,
}

/// Postre completo tal como llega en `GET /api/dessert/{id}`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct DessertDetail {
    #[serde(default, rename = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, rename = "mainImage")]
    pub main_image: Option<String>,
    #[serde(default, rename = "addImage1")]
    pub add_image1: Option<String>,
    #[serde(default, rename = "addImage2")]
    pub add_image2: Option<String>,
}

/// Envoltorio de la respuesta de listado: `{ "data": [...] }`
///
/// `data` se deja como JSON crudo para poder distinguir "no es una lista"
/// de un error de parseo de los elementos.
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct DessertListResponse {
    #[serde(default)]
    pub data: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_optional_fields() {
        let summary: DessertSummary = serde_json::from_value(json!({ "_id": "a1" })).unwrap();
        assert_eq!(summary.id, "a1");
        assert_eq!(summary.name, None);
        assert_eq!(summary.main_image, None);
    }

    #[test]
    fn test_detail_wire_names() {
        let detail: DessertDetail = serde_json::from_value(json!({
            "_id": "x",
            "name": "Opera",
            "description": "Layers",
            "price": 12.5,
            "mainImage": "m.png",
            "addImage1": "a.png",
            "addImage2": "b.png",
            "__v": 0
        }))
        .unwrap();
        assert_eq!(detail.id.as_deref(), Some("x"));
        assert_eq!(detail.price, Some(12.5));
        assert_eq!(detail.add_image1.as_deref(), Some("a.png"));
        assert_eq!(detail.add_image2.as_deref(), Some("b.png"));
        assert_eq!(detail.category, None);
    }

    #[test]
    fn test_list_response_keeps_raw_data() {
        let resp: DessertListResponse =
            serde_json::from_value(json!({ "success": true, "data": "oops" })).unwrap();
        assert!(resp.data.is_string());

        let resp: DessertListResponse = serde_json::from_value(json!({})).unwrap();
        assert!(resp.data.is_null());
    }
}
