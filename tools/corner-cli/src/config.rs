//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Shop identity.
    #[serde(default)]
    pub shop: ShopConfig,

    /// Cart storage location.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Checkout form prefills.
    #[serde(default)]
    pub checkout: CheckoutDefaults,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Shop identity shown in headers and receipts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Display name.
    #[serde(default = "default_shop_name")]
    pub name: String,
}

fn default_shop_name() -> String {
    "The Coffee Corner".to_string()
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            name: default_shop_name(),
        }
    }
}

/// Where the persisted cart lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Profile directory override (default: the platform data dir).
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,

    /// Storage key for the cart snapshot.
    #[serde(default = "default_cart_key")]
    pub key: String,
}

fn default_cart_key() -> String {
    corner_store::CART_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: None,
            key: default_cart_key(),
        }
    }
}

/// Optional prefills for the checkout form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckoutDefaults {
    /// Full name.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    /// Email address.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Phone number.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Street address.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// City.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Postal/ZIP code.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

/// Generate a default corner.toml config file.
pub fn generate_default_config(shop_name: &str) -> String {
    format!(
        r#"# Corner shop configuration

[shop]
name = "{shop_name}"

[storage]
# dir = "~/.local/share/corner"
key = "cart"

[checkout]
# Prefill the checkout form.
# full_name = "Jordan Doe"
# email = "jordan@example.com"
# phone = "555-0100"
# address = "12 Roast Road"
# city = "Beanville"
# zip = "90210"
"#,
        shop_name = shop_name
    )
}
