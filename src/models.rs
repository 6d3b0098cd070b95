use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::slugify;

/// Unit types a product can be sold in.
pub const UNIT_TYPES: [&str; 3] = ["kilogram", "gram", "count"];

/// Every new product is attached to the platform's default shop.
pub const DEFAULT_SHOP_ID: &str = "67aaf2ade8ae8df969ffbcea";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub image: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: String,
    pub customer_id: String,
    pub sale_number: String,
    pub sale_amount: f64,
    pub balance_amount: f64,
    pub cash_paid_amount: f64,
    pub upi_paid_amount: f64,
    pub sale_type: String,
    pub payment_method: String,
    pub transaction_code: Option<String>,
    pub shop_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub other_names: Vec<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub image: Vec<String>,
    pub gst: Option<String>,
    pub assured: bool,
    pub barcode: String,
    pub product_code: String,
    pub slug: String,
    pub creater_id: Option<String>,
    #[serde(default)]
    pub unit_types: Vec<String>,
    pub brand_id: String,
    pub category_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub slug: String,
    pub logo: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub gst: bool,
    #[serde(default)]
    pub attendant_email: Vec<String>,
    pub admin_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Category or brand entry. The two lookup collections share one shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lookup {
    pub id: String,
    pub name: String,
    pub slug: String,
}

/// Payload for creating a category or brand inline from the product form.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLookup {
    pub name: String,
    pub slug: String,
}

impl NewLookup {
    /// Returns `None` for empty or whitespace-only names; no request should
    /// be issued in that case.
    pub fn from_name(name: &str) -> Option<Self> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            name: trimmed.to_string(),
            slug: slugify(trimmed),
        })
    }
}

/// Create payload for a product. Slug and product code are derived from the
/// name, never entered directly.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub product_code: String,
    pub slug: String,
    pub shop_id: String,
    pub category_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<String>,
    pub image: Vec<String>,
    pub barcode: String,
    pub other_names: Vec<String>,
    pub assured: bool,
    pub unit_types: Vec<String>,
}

impl NewProduct {
    pub fn build(
        name: &str,
        image_url: &str,
        barcode: &str,
        category_id: &str,
        brand_id: Option<&str>,
        unit_types: &[String],
    ) -> Self {
        let slug = slugify(name);
        Self {
            name: name.to_string(),
            product_code: slug.clone(),
            slug,
            shop_id: DEFAULT_SHOP_ID.to_string(),
            category_id: category_id.to_string(),
            brand_id: brand_id.map(str::to_string),
            image: vec![image_url.to_string()],
            barcode: barcode.to_string(),
            other_names: Vec::new(),
            assured: false,
            unit_types: unit_types.to_vec(),
        }
    }
}

/// Current state of the edit form, compared field by field against the
/// original record to build the sparse update.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub barcode: String,
    pub category_id: String,
    pub brand_id: String,
    pub unit_types: Vec<String>,
}

/// Sparse update payload; unset fields are omitted from the request body.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_types: Option<Vec<String>>,
}

impl ProductUpdate {
    /// Field-by-field inequality against the original record. Unit types are
    /// compared by contents. Slug and product code follow the name: both are
    /// included whenever the re-derived slug differs from the stored one.
    pub fn diff(form: &ProductForm, original: &Product) -> Self {
        let mut update = Self::default();
        if form.name != original.name {
            update.name = Some(form.name.clone());
        }
        let slug = slugify(&form.name);
        if slug != original.slug {
            update.slug = Some(slug.clone());
            update.product_code = Some(slug);
        }
        if form.barcode != original.barcode {
            update.barcode = Some(form.barcode.clone());
        }
        if form.category_id != original.category_id {
            update.category_id = Some(form.category_id.clone());
        }
        if form.brand_id != original.brand_id {
            update.brand_id = Some(form.brand_id.clone());
        }
        if form.unit_types != original.unit_types {
            update.unit_types = Some(form.unit_types.clone());
        }
        update
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Toggles a unit type in the selection; toggling twice restores the set.
pub fn toggle_unit(units: &mut Vec<String>, unit: &str) {
    if let Some(pos) = units.iter().position(|u| u == unit) {
        units.remove(pos);
    } else {
        units.push(unit.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_product() -> Product {
        Product {
            id: "p1".into(),
            name: "Red Apple".into(),
            other_names: vec![],
            description: None,
            image: vec!["https://img.example/apple.png".into()],
            gst: None,
            assured: false,
            barcode: "890123".into(),
            product_code: "red-apple".into(),
            slug: "red-apple".into(),
            creater_id: None,
            unit_types: vec!["kilogram".into()],
            brand_id: "b1".into(),
            category_id: "c1".into(),
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn lookup_payload_rejects_blank_names() {
        assert_eq!(NewLookup::from_name(""), None);
        assert_eq!(NewLookup::from_name("   \t"), None);
    }

    #[test]
    fn lookup_payload_derives_slug() {
        let payload = NewLookup::from_name("  Dairy Products ").unwrap();
        assert_eq!(payload.name, "Dairy Products");
        assert_eq!(payload.slug, "dairy-products");
    }

    #[test]
    fn new_product_derives_slug_and_code() {
        let units = vec!["gram".to_string()];
        let p = NewProduct::build("  Red Apple ", "https://img", "123", "c1", Some("b1"), &units);
        assert_eq!(p.slug, "red-apple");
        assert_eq!(p.product_code, "red-apple");
        assert_eq!(p.image, vec!["https://img".to_string()]);
        assert_eq!(p.unit_types, units);
        assert!(!p.assured);
        assert!(p.other_names.is_empty());
        assert_eq!(p.shop_id, DEFAULT_SHOP_ID);
    }

    #[test]
    fn new_product_omits_absent_brand() {
        let p = NewProduct::build("Milk", "", "", "c1", None, &[]);
        let json = serde_json::to_value(&p).unwrap();
        assert!(json.get("brandId").is_none());
        assert_eq!(json["categoryId"], "c1");
    }

    #[test]
    fn toggle_unit_twice_restores_set() {
        let mut units = vec!["kilogram".to_string()];
        toggle_unit(&mut units, "gram");
        assert_eq!(units, vec!["kilogram".to_string(), "gram".to_string()]);
        toggle_unit(&mut units, "gram");
        assert_eq!(units, vec!["kilogram".to_string()]);
    }

    #[test]
    fn diff_is_empty_for_unchanged_form() {
        let original = sample_product();
        let form = ProductForm {
            name: original.name.clone(),
            barcode: original.barcode.clone(),
            category_id: original.category_id.clone(),
            brand_id: original.brand_id.clone(),
            unit_types: original.unit_types.clone(),
        };
        let update = ProductUpdate::diff(&form, &original);
        assert!(update.is_empty());
        assert_eq!(serde_json::to_string(&update).unwrap(), "{}");
    }

    #[test]
    fn diff_tracks_renames_through_slug_and_code() {
        let original = sample_product();
        let form = ProductForm {
            name: "Green Apple".into(),
            barcode: original.barcode.clone(),
            category_id: original.category_id.clone(),
            brand_id: original.brand_id.clone(),
            unit_types: original.unit_types.clone(),
        };
        let update = ProductUpdate::diff(&form, &original);
        assert_eq!(update.name.as_deref(), Some("Green Apple"));
        assert_eq!(update.slug.as_deref(), Some("green-apple"));
        assert_eq!(update.product_code.as_deref(), Some("green-apple"));
        assert_eq!(update.barcode, None);
    }

    #[test]
    fn diff_compares_unit_types_by_contents() {
        let original = sample_product();
        let mut form = ProductForm {
            name: original.name.clone(),
            barcode: original.barcode.clone(),
            category_id: original.category_id.clone(),
            brand_id: original.brand_id.clone(),
            unit_types: original.unit_types.clone(),
        };
        // A freshly allocated but equal vector is not a change.
        assert_eq!(ProductUpdate::diff(&form, &original).unit_types, None);

        toggle_unit(&mut form.unit_types, "count");
        let update = ProductUpdate::diff(&form, &original);
        assert_eq!(
            update.unit_types,
            Some(vec!["kilogram".to_string(), "count".to_string()])
        );
    }

    #[test]
    fn sale_decodes_camel_case_wire_format() {
        let json = r#"{
            "id": "s1",
            "customerId": "c1",
            "saleNumber": "SN-1",
            "saleAmount": 30.5,
            "balanceAmount": 0,
            "cashPaidAmount": 10.5,
            "upiPaidAmount": 20.0,
            "saleType": "retail",
            "paymentMethod": "cash",
            "transactionCode": null,
            "shopId": "sh1",
            "createdAt": "2025-03-09T12:30:00.000Z",
            "updatedAt": "2025-03-09T12:30:00.000Z"
        }"#;
        let sale: Sale = serde_json::from_str(json).unwrap();
        assert_eq!(sale.cash_paid_amount, 10.5);
        assert_eq!(sale.sale_number, "SN-1");
    }
}
