pub mod dto;
pub mod handler;
pub mod implementation;

pub use dto::{WeatherQuery, WeatherReading};
pub(crate) use handler::get_weather;
pub use implementation::{WeatherAdapter, CITY_NOT_FOUND, WEATHER_UNAVAILABLE};
