use rand::Rng;

use crate::error::VehicleError;
use crate::sampler;
use crate::vehicle::{self, CapacityRule, Vehicle, VehicleKind};

/// Stateless factory fixed to one vehicle kind. Every `create` call samples
/// fresh attributes, so successive vehicles are independent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleFactory {
    kind: VehicleKind,
}

impl VehicleFactory {
    pub fn new(kind: VehicleKind) -> Self {
        Self { kind }
    }

    pub fn create(&self, rng: &mut impl Rng) -> Vehicle {
        let spec = vehicle::spec_of(self.kind);

        let max_speed = sampler::uniform_rounded(spec.speed_min, spec.speed_max, rng);
        let capacity = match spec.capacity {
            CapacityRule::Fixed(n) => n,
            CapacityRule::Sampled { min, max } => sampler::uniform_int(min, max, rng),
        };

        Vehicle {
            kind: self.kind,
            wheels: spec.wheels,
            max_speed,
            capacity,
        }
    }
}

/// Single validation point for kind codes.
pub fn factory_for_code(code: i64) -> Result<VehicleFactory, VehicleError> {
    VehicleKind::from_code(code)
        .map(VehicleFactory::new)
        .ok_or(VehicleError::UnrecognizedKind(code))
}
