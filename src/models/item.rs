use serde::{Deserialize, Serialize};

/// Request body for the item endpoints
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub tax: Option<f64>,
}

impl Item {
    /// `price + tax`, only when a non-zero tax was supplied
    pub fn price_with_tax(&self) -> Option<f64> {
        match self.tax {
            Some(tax) if tax != 0.0 => Some(self.price + tax),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PricedItem {
    #[serde(flatten)]
    pub item: Item,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_with_tax: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct UpdatedItem {
    pub item_id: i64,
    #[serde(flatten)]
    pub item: Item,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

/// Entry of the fake item list served by `/items2/`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemName {
    pub item_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ItemId {
    pub item_id: i64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemQueryResponse {
    pub item_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NeedyItem {
    pub item_id: String,
    pub needy: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserId {
    pub user_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FilePath {
    pub file_path: String,
}

/// Values accepted by `/model/{model_name}`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelName {
    Alexnet,
    Resnet,
    Lenet,
}

impl ModelName {
    pub fn message(self) -> &'static str {
        match self {
            ModelName::Alexnet => "Deep Learning FTW!",
            ModelName::Lenet => "LeCNN all the images",
            ModelName::Resnet => "Have some residuals",
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ModelResponse {
    pub model_name: ModelName,
    pub message: String,
}
