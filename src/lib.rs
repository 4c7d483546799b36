//! Shelfside
//!
//! Shelfside is the client engine for the server-rendered product management
//! page: it submits the "create product" form without a page reload, appends
//! the resulting row to the product table, and surfaces validation errors
//! inline. The surrounding page injects its surfaces (form, error region,
//! table body) through the [`page`] traits; all outgoing requests leave
//! through the [`gateway`] with the CSRF policy applied.

pub mod context;
pub mod cookies;
pub mod csrf;
pub mod gateway;
pub mod page;
pub mod products;
