pub mod dcnet;
pub mod event;
