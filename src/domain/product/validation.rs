//! Product input validation

use thiserror::Error;

use super::entity::ProductDraft;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProductValidationError {
    #[error("Product name cannot be empty")]
    EmptyName,

    #[error("Product name exceeds maximum length of {0} characters")]
    NameTooLong(usize),

    #[error("Category cannot be empty")]
    EmptyCategory,

    #[error("Stock cannot be negative")]
    NegativeStock,

    #[error("Reorder point cannot be negative")]
    NegativeReorderPoint,

    #[error("Max stock cannot be negative")]
    NegativeMaxStock,

    #[error("Max stock cannot be below the reorder point")]
    InvertedRestockBand,

    #[error("Unit price must be a positive number")]
    InvalidUnitPrice,
}

const MAX_NAME_LENGTH: usize = 200;

pub fn validate_product(draft: &ProductDraft) -> Result<(), ProductValidationError> {
    if draft.name.trim().is_empty() {
        return Err(ProductValidationError::EmptyName);
    }

    if draft.name.len() > MAX_NAME_LENGTH {
        return Err(ProductValidationError::NameTooLong(MAX_NAME_LENGTH));
    }

    if draft.category.trim().is_empty() {
        return Err(ProductValidationError::EmptyCategory);
    }

    if draft.current_stock < 0 {
        return Err(ProductValidationError::NegativeStock);
    }

    if draft.reorder_point < 0 {
        return Err(ProductValidationError::NegativeReorderPoint);
    }

    if draft.max_stock < 0 {
        return Err(ProductValidationError::NegativeMaxStock);
    }

    if draft.max_stock < draft.reorder_point {
        return Err(ProductValidationError::InvertedRestockBand);
    }

    if !draft.unit_price.is_finite() || draft.unit_price <= 0.0 {
        return Err(ProductValidationError::InvalidUnitPrice);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ProductDraft {
        ProductDraft {
            name: "Paracetamol 500mg".to_string(),
            category: "Analgesics".to_string(),
            current_stock: 10,
            reorder_point: 5,
            max_stock: 50,
            unit_price: 2.0,
            supplier: "Acme Pharma".to_string(),
        }
    }

    #[test]
    fn test_valid_product() {
        assert!(validate_product(&draft()).is_ok());
    }

    #[test]
    fn test_empty_name_and_category() {
        let mut d = draft();
        d.name = "  ".to_string();
        assert_eq!(validate_product(&d), Err(ProductValidationError::EmptyName));

        let mut d = draft();
        d.category = String::new();
        assert_eq!(
            validate_product(&d),
            Err(ProductValidationError::EmptyCategory)
        );
    }

    #[test]
    fn test_negative_quantities() {
        let mut d = draft();
        d.current_stock = -1;
        assert_eq!(
            validate_product(&d),
            Err(ProductValidationError::NegativeStock)
        );

        let mut d = draft();
        d.reorder_point = -1;
        assert_eq!(
            validate_product(&d),
            Err(ProductValidationError::NegativeReorderPoint)
        );
    }

    #[test]
    fn test_inverted_restock_band() {
        let mut d = draft();
        d.max_stock = 3;
        assert_eq!(
            validate_product(&d),
            Err(ProductValidationError::InvertedRestockBand)
        );
    }

    #[test]
    fn test_invalid_unit_price() {
        for price in [0.0, -1.5, f64::NAN, f64::INFINITY] {
            let mut d = draft();
            d.unit_price = price;
            assert_eq!(
                validate_product(&d),
                Err(ProductValidationError::InvalidUnitPrice)
            );
        }
    }
}
