//! Инфраструктурный слой вокруг движка:
//! - RNG-реализации для перемешивания колоды;
//! - фабрики колод (случайные и заранее заданные);
//! - генерация ID столов.

pub mod decks;
pub mod ids;
pub mod rng;

pub use decks::*;
pub use ids::*;
pub use rng::*;
