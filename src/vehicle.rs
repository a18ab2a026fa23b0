// ============================================================================
// Vehicle and Car
// ============================================================================
//
// `Car` embeds a `Vehicle` instead of extending it; shared behaviour is
// reached through explicit delegation.

/// Anything that can render a one-line description of itself.
pub trait Describe {
    fn describe(&self) -> String;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    make: String,
    year: u32,
}

impl Vehicle {
    pub fn new(make: impl Into<String>, year: u32) -> Self {
        Vehicle {
            make: make.into(),
            year,
        }
    }

    pub fn get_info(&self) -> String {
        format!("Make: {}, Year: {}", self.make, self.year)
    }
}

impl Describe for Vehicle {
    fn describe(&self) -> String {
        self.get_info()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    vehicle: Vehicle,
    model: String,
}

impl Car {
    pub fn new(make: impl Into<String>, year: u32, model: impl Into<String>) -> Self {
        Car {
            vehicle: Vehicle::new(make, year),
            model: model.into(),
        }
    }

    /// Same output as the embedded [`Vehicle::get_info`].
    pub fn get_info(&self) -> String {
        self.vehicle.get_info()
    }

    pub fn get_model(&self) -> String {
        format!("Model: {}", self.model)
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }
}

impl Describe for Car {
    fn describe(&self) -> String {
        format!("{}, {}", self.vehicle.describe(), self.get_model())
    }
}
