//! Sample records for tests.

use rental_core::{Client, Equipment};

fn item(
    id: i64,
    name: &str,
    category: &str,
    price: f64,
    status: &str,
    specs: &[&str],
) -> Equipment {
    Equipment {
        id,
        name: name.to_string(),
        category: category.to_string(),
        price,
        period: "per day".to_string(),
        status: status.to_string(),
        image: format!("https://cdn.example.com/equipment/{id}.jpg"),
        specs: specs.iter().map(|s| (*s).to_string()).collect(),
    }
}

/// Four catalog items across three categories, ids 1 through 4.
///
/// | id | name | category | price |
/// |---|---|---|---|
/// | 1 | Mini Excavator JCB 8018 | earthmoving | 12000 |
/// | 2 | Tower Crane Liebherr | lifting | 45000 |
/// | 3 | Wheel Loader CAT 950 | earthmoving | 15000 |
/// | 4 | Diesel Generator 100 kW | power | 3500 |
#[must_use]
pub fn sample_catalog() -> Vec<Equipment> {
    vec![
        item(
            1,
            "Mini Excavator JCB 8018",
            "earthmoving",
            12_000.0,
            "available",
            &["1.8 t", "2.8 m dig depth"],
        ),
        item(
            2,
            "Tower Crane Liebherr",
            "lifting",
            45_000.0,
            "rented",
            &["8 t", "60 m jib"],
        ),
        item(
            3,
            "Wheel Loader CAT 950",
            "earthmoving",
            15_000.0,
            "available",
            &[],
        ),
        item(
            4,
            "Diesel Generator 100 kW",
            "power",
            3_500.0,
            "maintenance",
            &["100 kW"],
        ),
    ]
}

/// A fully populated client profile.
#[must_use]
pub fn sample_client() -> Client {
    Client {
        company_name: Some("ООО «СтройМонтаж»".to_string()),
        inn: Some("7707083893".to_string()),
        kpp: Some("770701001".to_string()),
        legal_address: Some("г. Москва, ул. Строителей, д. 1".to_string()),
        contact_person: Some("Иванов И. И.".to_string()),
        phone: Some("+7 495 000-00-00".to_string()),
        email: Some("office@stroymontazh.example".to_string()),
        bank_name: Some("ПАО Сбербанк".to_string()),
        account_number: Some("40702810938000000001".to_string()),
        correspondent_account: Some("30101810400000000225".to_string()),
        bik: Some("044525225".to_string()),
    }
}
