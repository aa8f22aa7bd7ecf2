//! Shop catalogue: categories, products and bookable services.

use serde::{Deserialize, Serialize};

use super::resource::{flag_cell, opt_cell, Draft, Featurable, Resource};
use super::validation::{blank_to_none, require, require_non_negative, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryInput {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Draft for CategoryInput {
    fn finalize(&mut self) -> Result<(), ValidationError> {
        blank_to_none(&mut self.description);
        blank_to_none(&mut self.image_url);
        require("name", &mut self.name)
    }
}

impl Resource for Category {
    type Id = i64;
    type Input = CategoryInput;
    const PATH: &'static str = "categories";
    const LABEL: &'static str = "category";
    const COLUMNS: &'static [&'static str] = &["id", "name", "description"];

    fn id(&self) -> &i64 {
        &self.id
    }

    fn to_input(&self) -> CategoryInput {
        CategoryInput {
            name: self.name.clone(),
            description: self.description.clone(),
            image_url: self.image_url.clone(),
        }
    }

    fn cell(&self, column: &str) -> Option<String> {
        match column {
            "id" => Some(self.id.to_string()),
            "name" => Some(self.name.clone()),
            "description" => Some(opt_cell(self.description.as_ref())),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Draft for ProductInput {
    fn finalize(&mut self) -> Result<(), ValidationError> {
        self.description = self.description.trim().to_string();
        blank_to_none(&mut self.image_url);
        require("name", &mut self.name)?;
        require_non_negative("price", self.price)
    }
}

impl Resource for Product {
    type Id = i64;
    type Input = ProductInput;
    const PATH: &'static str = "products";
    const LABEL: &'static str = "product";
    const COLUMNS: &'static [&'static str] = &["id", "name", "price", "stock", "category_id", "featured"];

    fn id(&self) -> &i64 {
        &self.id
    }

    fn to_input(&self) -> ProductInput {
        ProductInput {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            category_id: self.category_id,
            stock: self.stock,
            image_url: self.image_url.clone(),
        }
    }

    fn cell(&self, column: &str) -> Option<String> {
        match column {
            "id" => Some(self.id.to_string()),
            "name" => Some(self.name.clone()),
            "price" => Some(format!("{:.2}", self.price)),
            "stock" => Some(self.stock.to_string()),
            "category_id" => Some(opt_cell(self.category_id.as_ref())),
            "featured" => Some(flag_cell(self.is_featured)),
            _ => None,
        }
    }
}

impl Featurable for Product {
    fn is_featured(&self) -> bool {
        self.is_featured
    }
}

/// A bookable service (workshop, event decoration, delivery round).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceInput {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Draft for ServiceInput {
    fn finalize(&mut self) -> Result<(), ValidationError> {
        self.description = self.description.trim().to_string();
        blank_to_none(&mut self.image_url);
        require("name", &mut self.name)?;
        match self.price {
            Some(price) => require_non_negative("price", price),
            None => Ok(()),
        }
    }
}

impl Resource for ServiceOffering {
    type Id = i64;
    type Input = ServiceInput;
    const PATH: &'static str = "services";
    const LABEL: &'static str = "service";
    const COLUMNS: &'static [&'static str] = &["id", "name", "price", "duration_minutes", "featured"];

    fn id(&self) -> &i64 {
        &self.id
    }

    fn to_input(&self) -> ServiceInput {
        ServiceInput {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            duration_minutes: self.duration_minutes,
            image_url: self.image_url.clone(),
        }
    }

    fn cell(&self, column: &str) -> Option<String> {
        match column {
            "id" => Some(self.id.to_string()),
            "name" => Some(self.name.clone()),
            "price" => Some(self.price.map_or_else(String::new, |p| format!("{p:.2}"))),
            "duration_minutes" => Some(opt_cell(self.duration_minutes.as_ref())),
            "featured" => Some(flag_cell(self.is_featured)),
            _ => None,
        }
    }
}

impl Featurable for ServiceOffering {
    fn is_featured(&self) -> bool {
        self.is_featured
    }
}
