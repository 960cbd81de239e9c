use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleKind {
    Bike,
    Scooter,
    Car,
    Bus,
}

impl VehicleKind {
    pub const ALL: [VehicleKind; 4] = [
        VehicleKind::Bike,
        VehicleKind::Scooter,
        VehicleKind::Car,
        VehicleKind::Bus,
    ];

    pub fn index(self) -> usize {
        match self {
            VehicleKind::Bike => 0,
            VehicleKind::Scooter => 1,
            VehicleKind::Car => 2,
            VehicleKind::Bus => 3,
        }
    }

    pub fn code(self) -> i64 {
        self.index() as i64
    }

    pub fn from_code(code: i64) -> Option<VehicleKind> {
        match code {
            0 => Some(VehicleKind::Bike),
            1 => Some(VehicleKind::Scooter),
            2 => Some(VehicleKind::Car),
            3 => Some(VehicleKind::Bus),
            _ => None,
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleKind::Bike => write!(f, "Bike"),
            VehicleKind::Scooter => write!(f, "Scooter"),
            VehicleKind::Car => write!(f, "Car"),
            VehicleKind::Bus => write!(f, "Bus"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum CapacityRule {
    Fixed(u32),
    Sampled { min: u32, max: u32 },
}

#[derive(Debug, Clone)]
pub struct KindSpec {
    pub wheels: u32,
    pub speed_min: f64,
    pub speed_max: f64,
    pub capacity: CapacityRule,
}

pub const KIND_TABLE: [KindSpec; 4] = [
    // BIKE
    KindSpec {
        wheels: 2, speed_min: 12.0, speed_max: 50.0,
        capacity: CapacityRule::Fixed(1),
    },
    // SCOOTER
    KindSpec {
        wheels: 2, speed_min: 5.0, speed_max: 10.0,
        capacity: CapacityRule::Fixed(1),
    },
    // CAR
    KindSpec {
        wheels: 4, speed_min: 90.0, speed_max: 220.0,
        capacity: CapacityRule::Fixed(4),
    },
    // BUS
    KindSpec {
        wheels: 6, speed_min: 50.0, speed_max: 120.0,
        capacity: CapacityRule::Sampled { min: 6, max: 35 },
    },
];

pub fn spec_of(kind: VehicleKind) -> &'static KindSpec {
    &KIND_TABLE[kind.index()]
}

/// One constructed vehicle. Attributes are fixed at construction and
/// only ever read back through `Display`.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub kind: VehicleKind,
    pub wheels: u32,
    pub max_speed: f64,
    pub capacity: u32,
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vehicle: {}", self.kind)?;
        writeln!(f, "Wheels: {}", self.wheels)?;
        writeln!(f, "Max speed: {:.2}", self.max_speed)?;
        write!(f, "Passenger capacity: {}", self.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for kind in VehicleKind::ALL {
            assert_eq!(VehicleKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(VehicleKind::from_code(4), None);
        assert_eq!(VehicleKind::from_code(-1), None);
    }

    #[test]
    fn table_matches_documented_wheels() {
        assert_eq!(spec_of(VehicleKind::Bike).wheels, 2);
        assert_eq!(spec_of(VehicleKind::Scooter).wheels, 2);
        assert_eq!(spec_of(VehicleKind::Car).wheels, 4);
        assert_eq!(spec_of(VehicleKind::Bus).wheels, 6);
    }

    #[test]
    fn description_block_is_four_lines_with_two_decimal_speed() {
        let v = Vehicle {
            kind: VehicleKind::Car,
            wheels: 4,
            max_speed: 123.4,
            capacity: 4,
        };
        let text = v.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Vehicle: Car",
                "Wheels: 4",
                "Max speed: 123.40",
                "Passenger capacity: 4",
            ]
        );
    }
}
