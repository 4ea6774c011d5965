//! End-to-end compilation-firewall scenario: a public wrapper with value
//! semantics whose implementation type is private to a module and stored
//! inline behind declared layout constants.

use inlay::OpaqueSlot;

mod device {
    use inlay::OpaqueSlot;

    mod imp {
        use rand::Rng;

        #[derive(Clone)]
        pub struct DeviceState {
            id: i32,
        }

        impl DeviceState {
            pub fn new(id: i32) -> Self {
                Self { id }
            }

            pub fn random<R: Rng>(rng: &mut R) -> Self {
                Self::new(rng.gen())
            }

            pub fn id(&self) -> i32 {
                self.id
            }

            pub fn set_id(&mut self, id: i32) {
                self.id = id;
            }

            pub fn report(&self) -> String {
                format!("device {} is working", self.id)
            }
        }
    }

    // Declared layout of the hidden state: one i32.
    const STATE_SIZE: usize = 4;
    const STATE_ALIGN: usize = 4;

    /// Public surface; the state's fields are invisible outside `imp`.
    #[derive(Clone)]
    pub struct Device {
        state: OpaqueSlot<imp::DeviceState, STATE_SIZE, STATE_ALIGN>,
    }

    impl Device {
        pub fn new() -> Self {
            Self {
                state: OpaqueSlot::with(|| {
                    imp::DeviceState::random(&mut rand::thread_rng())
                }),
            }
        }

        pub fn with_id(id: i32) -> Self {
            Self {
                state: OpaqueSlot::new(imp::DeviceState::new(id)),
            }
        }

        pub fn id(&self) -> i32 {
            self.state.id()
        }

        pub fn set_id(&mut self, id: i32) {
            self.state.get_mut().set_id(id);
        }

        pub fn report(&self) -> String {
            self.state.report()
        }
    }
}

use device::Device;

#[test]
fn default_construction_yields_a_usable_id() {
    let dev = Device::new();
    // The id is pseudo-random but must be real and consistently reported.
    let id = dev.id();
    assert!(dev.report().contains(&id.to_string()));
}

#[test]
fn explicit_id_is_stored_exactly() {
    let dev = Device::with_id(i32::MAX);
    assert_eq!(dev.id(), i32::MAX);
    assert_eq!(dev.report(), format!("device {} is working", i32::MAX));
}

#[test]
fn copies_are_value_independent() {
    let original = Device::with_id(42);
    let mut copy = original.clone();

    copy.set_id(7);

    assert_eq!(original.id(), 42);
    assert_eq!(copy.id(), 7);
}

#[test]
fn report_is_deterministic_for_a_given_id() {
    let dev = Device::with_id(-3);
    assert_eq!(dev.report(), "device -3 is working");
    assert_eq!(dev.report(), "device -3 is working");
}

#[test]
fn the_wrapper_costs_exactly_its_declared_state_in_release() {
    // Debug builds add the occupancy flag; the release contract is exact.
    #[cfg(not(debug_assertions))]
    assert_eq!(std::mem::size_of::<Device>(), 4);
    assert_eq!(std::mem::align_of::<Device>(), 4);
}

#[test]
fn the_state_lives_inside_the_holder_footprint() {
    // No separate allocation: the payload pointer is the slot's own address.
    let slot: OpaqueSlot<i32, 4, 4> = OpaqueSlot::new(5);
    let base = std::ptr::addr_of!(slot) as usize;
    assert_eq!(slot.as_ptr() as usize, base);
}
