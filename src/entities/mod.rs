//! Domain entities and their validation rule tables

pub mod client;
pub mod company_settings;
pub mod product;
pub mod recurring_invoice;

pub use client::Client;
pub use company_settings::CompanySettings;
pub use product::{InvalidUnitError, Product, ProductUnit};
pub use recurring_invoice::RecurringInvoice;
