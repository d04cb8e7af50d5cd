//! Status indicator mapping.
//!
//! Pure function of (reading validity, boot completion, blink phase) to a
//! colour and a brightness for the single RGB pixel. No timers live here:
//! the blink phase is owned by the main loop and flipped once per sample.
//!
//! | State       | Colour | Brightness            |
//! |-------------|--------|-----------------------|
//! | Booting     | blue   | bright, steady        |
//! | Okay        | green  | dim/bright heartbeat  |
//! | SensorError | red    | dim/bright heartbeat  |

/// Colour as (R, G, B) tuple, each 0–255.
pub type Rgb = (u8, u8, u8);

pub const COLOUR_BOOTING: Rgb = (0, 0, 255); // Blue
pub const COLOUR_OKAY: Rgb = (0, 255, 0); // Green
pub const COLOUR_SENSOR_ERROR: Rgb = (255, 0, 0); // Red

/// Operating condition shown on the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorState {
    Booting,
    Okay,
    SensorError,
}

impl IndicatorState {
    pub fn from_inputs(reading_valid: bool, booting_done: bool) -> Self {
        match (booting_done, reading_valid) {
            (false, _) => Self::Booting,
            (true, true) => Self::Okay,
            (true, false) => Self::SensorError,
        }
    }

    pub fn colour(self) -> Rgb {
        match self {
            Self::Booting => COLOUR_BOOTING,
            Self::Okay => COLOUR_OKAY,
            Self::SensorError => COLOUR_SENSOR_ERROR,
        }
    }
}

/// Heartbeat brightness pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brightness {
    pub dim: u8,
    pub bright: u8,
}

/// Colour and brightness for the given inputs.
pub fn render(
    reading_valid: bool,
    booting_done: bool,
    blink_phase: bool,
    levels: Brightness,
) -> (Rgb, u8) {
    let state = IndicatorState::from_inputs(reading_valid, booting_done);
    let brightness = match state {
        IndicatorState::Booting => levels.bright,
        IndicatorState::Okay | IndicatorState::SensorError => {
            if blink_phase {
                levels.bright
            } else {
                levels.dim
            }
        }
    };
    (state.colour(), brightness)
}
