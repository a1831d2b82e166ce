use std::fmt::{Debug, Display, Formatter};

/// Number with comma-separated thousands, for example `26,800`.
pub struct ThousandsSeparated(pub f64);

impl Debug for ThousandsSeparated {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for ThousandsSeparated {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if !self.0.is_finite() {
            return Display::fmt(&self.0, f);
        }
        let plain = self.0.abs().to_string();
        let (integer, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), ""));
        if self.0.is_sign_negative() && self.0 != 0.0 {
            f.write_str("-")?;
        }
        for (i, digit) in integer.chars().enumerate() {
            if i != 0 && (integer.len() - i) % 3 == 0 {
                f.write_str(",")?;
            }
            write!(f, "{digit}")?;
        }
        if !fraction.is_empty() {
            write!(f, ".{fraction}")?;
        }
        Ok(())
    }
}
