//! Лендинг «Генератор Превью»: форма генерации, результат, тарифы и контакты

pub mod flow;
pub mod pricing;
pub mod state;
pub mod view;
pub mod view_model;

pub use view::LandingPage;
