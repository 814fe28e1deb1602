//! Shared contracts between the admin UI layer and the product-catalog API

pub mod domain;
pub mod enums;
pub mod shared;
