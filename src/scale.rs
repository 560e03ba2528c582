use crate::HashrateError;

/// Unit labels for Equihash hashrates, one per power of [`SOL_STEP`].
pub const SOL_UNITS: [&str; 6] = ["Sol", "KSol", "MSol", "GSol", "TSol", "PSol"];
pub const SOL_STEP: f64 = 1000.0;

/// An ordered unit table where each label is `step` times the previous one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale {
    units: &'static [&'static str],
    step: f64,
}

impl Scale {
    pub const SOL: Scale = Scale {
        units: &SOL_UNITS,
        step: SOL_STEP,
    };

    /// # Panics
    ///
    /// Panics if `units` is empty or `step` is not a finite number greater than 1.
    pub fn new(units: &'static [&'static str], step: f64) -> Self {
        assert!(!units.is_empty(), "unit table must not be empty");
        assert!(
            step.is_finite() && step > 1.0,
            "unit step must be finite and greater than 1, got {}",
            step
        );
        Self { units, step }
    }

    pub fn units(&self) -> &'static [&'static str] {
        self.units
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Divides `value` by the step while it is strictly greater than the step,
    /// returning the reduced magnitude and the index of its unit label.
    ///
    /// Division stops at the last label, so anything past the table is
    /// reported against the largest unit.
    pub fn scale(&self, value: f64) -> (f64, usize) {
        let last = self.units.len() - 1;
        // -0.0 would otherwise print as "-0.00"
        let mut magnitude = if value == 0.0 { 0.0 } else { value };
        let mut unit = 0;
        while magnitude > self.step && unit < last {
            magnitude /= self.step;
            unit += 1;
        }
        (magnitude, unit)
    }

    /// Best-effort formatting; never fails.
    ///
    /// Exact ties round to even: `1125.0` becomes `"1.12 KSol"`.
    pub fn humanize(&self, value: f64) -> String {
        let (magnitude, unit) = self.scale(value);
        format!("{:.2} {}", magnitude, self.units[unit])
    }

    /// Like [`Scale::humanize`] but rejects input that has no sensible reading.
    pub fn try_humanize(&self, value: f64) -> Result<String, HashrateError> {
        if !value.is_finite() {
            return Err(HashrateError::NotFinite(value));
        }
        if value < 0.0 {
            return Err(HashrateError::Negative(value));
        }
        let (magnitude, unit) = self.scale(value);
        if magnitude > self.step {
            return Err(HashrateError::OutOfRange(value));
        }
        Ok(format!("{:.2} {}", magnitude, self.units[unit]))
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::SOL
    }
}
