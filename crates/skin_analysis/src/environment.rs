use crate::context::{Climate, Season};

const TROPIC_LATITUDE: f64 = 23.5;
const HOT_CELSIUS: f64 = 28.0;
const COLD_CELSIUS: f64 = 5.0;
const WARM_CELSIUS: f64 = 20.0;
const CLEAR_SKY_CODE: u16 = 0;

/// Meteorological season for a zero-based month (0 = January), flipped for
/// the southern hemisphere.
pub fn determine_season(latitude: f64, month0: u32) -> Season {
    let north = latitude > 0.0;
    let (northern, southern) = match month0 {
        2..=4 => (Season::Spring, Season::Autumn),
        5..=7 => (Season::Summer, Season::Winter),
        8..=10 => (Season::Autumn, Season::Spring),
        _ => (Season::Winter, Season::Summer),
    };
    if north { northern } else { southern }
}

/// Coarse climate from location and the current weather reading.
pub fn determine_climate(latitude: f64, temp_celsius: f64, weather_code: u16) -> Climate {
    if temp_celsius > HOT_CELSIUS {
        Climate::Tropical
    } else if temp_celsius < COLD_CELSIUS {
        Climate::Cold
    } else if latitude.abs() < TROPIC_LATITUDE {
        Climate::Tropical
    } else if weather_code == CLEAR_SKY_CODE && temp_celsius > WARM_CELSIUS {
        Climate::Dry
    } else {
        Climate::Temperate
    }
}
