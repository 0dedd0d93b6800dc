use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::domain::product::{NewProduct, UpdateProduct};

/// Maximum allowed length for a product description on update.
const DESCRIPTION_MAX_LEN: usize = 50;
const DESCRIPTION_MAX_LEN_VALIDATOR: u64 = DESCRIPTION_MAX_LEN as u64;

/// Lowest accepted price.
const PRICE_MIN: f64 = 0.0;

/// Body accepted by the product creation endpoint. Serialized back to the
/// client verbatim in the 201 response.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddProductForm {
    pub title: String,
    pub description: String,
    #[validate(range(min = PRICE_MIN))]
    pub price: f64,
}

impl AddProductForm {
    /// Validates the payload into a domain `NewProduct`.
    pub fn to_new_product(&self) -> Result<NewProduct, ValidationErrors> {
        self.validate()?;

        Ok(NewProduct::new(
            self.title.as_str(),
            self.description.as_str(),
            self.price,
        ))
    }
}

/// Body accepted by the product update endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProductForm {
    #[validate(length(max = DESCRIPTION_MAX_LEN_VALIDATOR))]
    pub description: String,
    #[validate(range(min = PRICE_MIN))]
    pub price: f64,
}

impl UpdateProductForm {
    /// Validates the payload into a domain `UpdateProduct`.
    pub fn to_update_product(&self) -> Result<UpdateProduct, ValidationErrors> {
        self.validate()?;

        Ok(UpdateProduct::new(self.description.as_str(), self.price))
    }
}
