pub mod college;
pub mod course;
pub mod profile;

pub use college::College;
pub use course::{Course, NewCourse};
pub use profile::{Profile, Role};

/// Convert a fee in base currency units to Lakhs (1 Lakh = 100 000 units).
pub fn lakhs(amount: i64) -> f64 {
    amount as f64 / 100_000.0
}

/// Two-decimal Lakhs label used on detail rows, e.g. 150000 -> "₹1.50L".
pub fn format_lakhs(amount: i64) -> String {
    format!("₹{:.2}L", lakhs(amount))
}

/// One-decimal variant used on list cards, e.g. 150000 -> "1.5L".
pub fn format_lakhs_short(amount: i64) -> String {
    format!("{:.1}L", lakhs(amount))
}
