use crate::{HashrateError, Scale};

pub trait NumericFormatter {
    /// Formats a hashrate given in Sol/s, e.g. `1500` becomes `"1.50 KSol"`.
    fn humanize_hashrate(self) -> String;
    fn try_humanize_hashrate(self) -> Result<String, HashrateError>;
}

impl<T: Into<f64>> NumericFormatter for T {
    fn humanize_hashrate(self) -> String {
        Scale::SOL.humanize(self.into())
    }

    fn try_humanize_hashrate(self) -> Result<String, HashrateError> {
        Scale::SOL.try_humanize(self.into())
    }
}

/// Template helper body: checked formatting, falling back to best-effort text
/// so the template always gets a string.
pub fn format_hashrate(hashrate: f64) -> String {
    hashrate.try_humanize_hashrate().unwrap_or_else(|err| {
        tracing::warn!(%err, hashrate, "Formatting unexpected hashrate");
        hashrate.humanize_hashrate()
    })
}
