pub mod financial_model;
pub mod request;
