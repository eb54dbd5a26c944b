//! College listing data model.
//!
//! Records are deserialized once from the dataset and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Placement statistics for a college.
///
/// Either package may be missing from the dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Placement {
    /// Average package in rupees
    pub average: Option<f64>,
    /// Highest package in rupees
    pub highest: Option<f64>,
}

impl Placement {
    /// Average package, if present and non-zero.
    pub fn shown_average(&self) -> Option<f64> {
        self.average.filter(|v| *v > 0.0)
    }

    /// Highest package, if present and non-zero.
    pub fn shown_highest(&self) -> Option<f64> {
        self.highest.filter(|v| *v > 0.0)
    }
}

/// A single college in the listing.
///
/// Field names follow the camelCase keys of the dataset file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CollegeRecord {
    /// Position in the CD ranking (unique, starts at 1)
    pub rank: u32,
    /// College display name
    pub college_name: String,
    /// City and state
    #[serde(default)]
    pub location: String,
    /// Flagship course offered
    #[serde(default)]
    pub course: String,
    /// Entrance exam cutoff, free text
    #[serde(default)]
    pub cutoff: String,
    /// Logo image URI
    #[serde(default)]
    #[allow(dead_code)] // Images are not drawn in the terminal
    pub logo: String,
    /// Course fees in rupees, possibly fractional
    #[serde(default)]
    pub fees: f64,
    /// What the fee amount covers
    #[serde(default)]
    pub fees_description: String,
    #[serde(default)]
    pub placement: Placement,
    /// Average user rating on a 0-10 scale
    #[serde(default)]
    pub user_rating: f64,
    /// Number of users behind `user_rating`
    #[serde(default)]
    pub users_rating: u32,
    /// External ranking label, e.g. "#3 out of 131 in India 2023"
    #[serde(default)]
    pub ranking: String,
    #[serde(default)]
    pub featured: bool,
    /// Where "Apply Now" sends the user
    #[serde(default)]
    pub apply_url: String,
    /// Source of the brochure download
    #[serde(default)]
    pub brochure_url: String,
}

impl CollegeRecord {
    /// Format the course fees as a rupee amount.
    ///
    /// # Returns
    /// * `String` - Formatted fees, e.g. "₹209,550"
    pub fn format_fees(&self) -> String {
        format_rupees(self.fees)
    }

    /// Format the user rating as "score/10".
    pub fn format_rating(&self) -> String {
        format!("{}/10", self.user_rating)
    }
}

/// Format an amount in rupees with thousands separators.
///
/// # Arguments
/// * `amount` - Amount in rupees
///
/// # Returns
/// * `String` - Formatted amount, e.g. `₹1,234,567` or `₹209,550.5`
///
/// # Details
/// Paise are rounded to two places and trailing zeros are dropped.
pub fn format_rupees(amount: f64) -> String {
    // Negative and NaN amounts saturate to zero
    let paise = (amount * 100.0).round() as u64;
    let digits = (paise / 100).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    match paise % 100 {
        0 => format!("₹{}", grouped),
        fraction if fraction % 10 == 0 => format!("₹{}.{}", grouped, fraction / 10),
        fraction => format!("₹{}.{:02}", grouped, fraction),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rupees() {
        assert_eq!(format_rupees(0.0), "₹0");
        assert_eq!(format_rupees(999.0), "₹999");
        assert_eq!(format_rupees(1000.0), "₹1,000");
        assert_eq!(format_rupees(209_550.0), "₹209,550");
        assert_eq!(format_rupees(1_234_567.0), "₹1,234,567");
    }

    #[test]
    fn test_format_rupees_fraction() {
        assert_eq!(format_rupees(209_550.5), "₹209,550.5");
        assert_eq!(format_rupees(1_000.25), "₹1,000.25");
        assert_eq!(format_rupees(12.004), "₹12");
        assert_eq!(format_rupees(-5.0), "₹0");
    }

    #[test]
    fn test_deserialize_fractional_amounts() {
        let json = r#"{
            "rank": 7,
            "collegeName": "NIT Trichy",
            "fees": 209550.5,
            "placement": { "average": 1250000.75, "highest": 4500000 }
        }"#;
        let record: CollegeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.fees, 209_550.5);
        assert_eq!(record.format_fees(), "₹209,550.5");
        assert_eq!(record.placement.average, Some(1_250_000.75));
        assert_eq!(record.placement.highest, Some(4_500_000.0));
    }

    #[test]
    fn test_format_rating_drops_trailing_zero() {
        let json = r#"{"rank": 1, "collegeName": "A", "userRating": 9.0}"#;
        let record: CollegeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.format_rating(), "9/10");

        let json = r#"{"rank": 1, "collegeName": "A", "userRating": 8.6}"#;
        let record: CollegeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.format_rating(), "8.6/10");
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r##"{
            "rank": 3,
            "collegeName": "IIT Madras",
            "location": "Chennai, Tamil Nadu",
            "course": "B.Tech Computer Science",
            "cutoff": "JEE-Advanced 2023 Cutoff: 148",
            "logo": "https://example.com/iitm.png",
            "fees": 209550,
            "feesDescription": "BE/B.Tech - 1st Year Fees",
            "placement": { "average": 2150000 },
            "userRating": 8.7,
            "usersRating": 512,
            "ranking": "#1 out of 131 in India 2023",
            "featured": true,
            "applyUrl": "https://example.com/apply/iitm",
            "brochureUrl": "https://example.com/brochure/iitm.pdf"
        }"##;
        let record: CollegeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.rank, 3);
        assert_eq!(record.college_name, "IIT Madras");
        assert_eq!(record.fees_description, "BE/B.Tech - 1st Year Fees");
        assert_eq!(record.ranking, "#1 out of 131 in India 2023");
        assert_eq!(record.placement.average, Some(2_150_000.0));
        assert_eq!(record.placement.highest, None);
        assert_eq!(record.users_rating, 512);
        assert!(record.featured);
    }

    #[test]
    fn test_placement_zero_is_hidden() {
        let placement = Placement {
            average: Some(0.0),
            highest: Some(4_500_000.0),
        };
        assert_eq!(placement.shown_average(), None);
        assert_eq!(placement.shown_highest(), Some(4_500_000.0));
    }
}
