use anyhow::Result;
use mvr_dal::{customer::Customer, genre::Genre};
use reqwest::Url;
use serde_json::json;

pub async fn create_genre(client: &reqwest::Client, base_url: &Url, name: &str) -> Result<Genre> {
    let payload = json!({"name": name});
    let api_url = base_url.join("api/genres").unwrap();

    let response = client.post(api_url.clone()).json(&payload).send().await?;
    assert!(response.status().is_success());
    assert!(response.status().as_u16() == 200);

    let new_genre: Genre = response.json().await?;
    Ok(new_genre)
}

pub async fn create_customer(
    client: &reqwest::Client,
    base_url: &Url,
    name: &str,
    phone: i64,
    is_gold: Option<bool>,
) -> Result<Customer> {
    let payload = match is_gold {
        Some(gold) => json!({"name": name, "phone": phone, "isGold": gold}),
        None => json!({"name": name, "phone": phone}),
    };
    let api_url = base_url.join("api/customers").unwrap();

    let response = client.post(api_url.clone()).json(&payload).send().await?;
    assert!(response.status().is_success());
    assert!(response.status().as_u16() == 200);

    let new_customer: Customer = response.json().await?;
    Ok(new_customer)
}
