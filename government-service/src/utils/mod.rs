pub mod form;

pub use form::FormPayload;
