//! Compilation-firewall example: a public `Sensor` type whose state lives
//! behind an opaque inline slot.
//!
//! `Sensor`'s surface names only the state type and two layout numbers; the
//! state's definition stays inside the private `state` module. If the state
//! ever grows a field, the declared constants stop matching and the build
//! fails at the slot's construction/destruction sites instead of corrupting
//! memory at runtime.

use inlay::OpaqueSlot;

/// Private implementation module: nothing outside it sees the state's
/// fields, only its name and behavior.
mod state {
    use rand::Rng;

    #[derive(Clone)]
    pub struct SensorState {
        id: i32,
    }

    impl SensorState {
        pub fn new(id: i32) -> Self {
            Self { id }
        }

        pub fn report(&self) -> String {
            format!("sensor {} is working", self.id)
        }

        pub fn id(&self) -> i32 {
            self.id
        }
    }

    impl Default for SensorState {
        /// Fresh sensors draw a pseudo-random id.
        fn default() -> Self {
            Self::new(rand::thread_rng().gen())
        }
    }
}

/// The state's layout, declared as plain numbers where the wrapper is
/// defined. Wrong numbers are a compilation error, not a runtime fault.
const SENSOR_STATE_SIZE: usize = 4;
const SENSOR_STATE_ALIGN: usize = 4;

/// Public wrapper: value semantics, inline state, opaque surface.
#[derive(Clone, Default)]
pub struct Sensor {
    state: OpaqueSlot<state::SensorState, SENSOR_STATE_SIZE, SENSOR_STATE_ALIGN>,
}

impl Sensor {
    /// Creates a sensor with an explicit id.
    pub fn with_id(id: i32) -> Self {
        Self {
            state: OpaqueSlot::new(state::SensorState::new(id)),
        }
    }

    /// Reports the sensor's activity, including its id.
    pub fn report(&self) -> String {
        self.state.report()
    }

    /// The sensor's id.
    pub fn id(&self) -> i32 {
        self.state.id()
    }
}

fn main() {
    println!("Opaque Inline Storage Example");
    println!("=============================");

    // Default construction: the hidden state picks a pseudo-random id.
    let sensor = Sensor::default();
    println!("{}", sensor.report());

    // Explicit construction with the largest representable id.
    let maxed = Sensor::with_id(i32::MAX);
    println!("{}", maxed.report());
    assert_eq!(maxed.id(), i32::MAX);

    // Value semantics: copies are independent.
    let original = Sensor::with_id(42);
    let copy = original.clone();
    assert_eq!(copy.id(), 42);
    println!("{}", copy.report());

    println!("done");
}
